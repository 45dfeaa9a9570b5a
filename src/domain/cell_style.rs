use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("invalid color value: {0} (expected #RRGGBB or #RRGGBBAA)")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const CLEAR: Rgba = Rgba::new(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn grey(level: u8) -> Self {
        Self::rgb(level, level, level)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorParseError::Invalid(value.to_string());
        let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) || (hex.len() != 6 && hex.len() != 8) {
            return Err(invalid());
        }
        let channel = |index: usize| {
            u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16).map_err(|_| invalid())
        };
        let alpha = if hex.len() == 8 { channel(3)? } else { 255 };
        Ok(Rgba::new(channel(0)?, channel(1)?, channel(2)?, alpha))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Regular,
    Medium,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: f32,
    pub weight: FontWeight,
}

impl FontSpec {
    pub const fn system(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }
}

/// Which slot of a [`CellStyles`] table a style fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleRole {
    /// Tappable day with nothing selected on it.
    #[default]
    Enabled,
    /// Day drawn without highlight: outside the current selection, or in
    /// the past. Its `interactive` flag only tells whether such a day may
    /// open a new selection; taps on past days are dropped by the engine
    /// whatever the style says.
    Disabled,
    /// Day in the user's live selection.
    Selection,
    /// Day already committed by an external source.
    Selected,
}

impl StyleRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleRole::Enabled => "enabled",
            StyleRole::Disabled => "disabled",
            StyleRole::Selection => "selection",
            StyleRole::Selected => "selected",
        }
    }
}

/// Visual descriptor consumed by a renderer. The selection engine only hands
/// out references to these; it never draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellStyle {
    #[serde(skip)]
    pub role: StyleRole,
    pub interactive: bool,
    pub height: f32,
    pub font: FontSpec,
    pub text_color: Rgba,
    pub border_width: f32,
    pub border_color: Rgba,
    pub corner_radius: f32,
    pub background_color: Rgba,
    /// Strikethrough color; marks a day as blocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<Rgba>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellStyles {
    pub enabled: CellStyle,
    pub disabled: CellStyle,
    pub selection: CellStyle,
    pub selected: CellStyle,
}

impl CellStyles {
    pub fn get(&self, role: StyleRole) -> &CellStyle {
        match role {
            StyleRole::Enabled => &self.enabled,
            StyleRole::Disabled => &self.disabled,
            StyleRole::Selection => &self.selection,
            StyleRole::Selected => &self.selected,
        }
    }

    pub(crate) fn get_mut(&mut self, role: StyleRole) -> &mut CellStyle {
        match role {
            StyleRole::Enabled => &mut self.enabled,
            StyleRole::Disabled => &mut self.disabled,
            StyleRole::Selection => &mut self.selection,
            StyleRole::Selected => &mut self.selected,
        }
    }
}

/// What a calendar instance is used for; decides both the selection variant
/// and the built-in style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CalendarPurpose {
    /// Pick a contiguous stay between two taps.
    CheckIn,
    /// Toggle individual days as unavailable.
    Unavailability,
}

impl CalendarPurpose {
    pub fn number_of_rows(&self) -> usize {
        6
    }

    pub fn cell_styles(&self) -> CellStyles {
        match self {
            CalendarPurpose::CheckIn => check_in_styles(),
            CalendarPurpose::Unavailability => unavailability_styles(),
        }
    }
}

fn check_in_styles() -> CellStyles {
    let base = CellStyle {
        role: StyleRole::Enabled,
        interactive: true,
        height: 30.0,
        font: FontSpec::system(14.0),
        text_color: Rgba::grey(145),
        border_width: 0.0,
        border_color: Rgba::CLEAR,
        corner_radius: 0.0,
        background_color: Rgba::CLEAR,
        strikethrough: None,
    };

    CellStyles {
        enabled: base.clone(),
        disabled: CellStyle {
            role: StyleRole::Disabled,
            text_color: Rgba::grey(230),
            ..base.clone()
        },
        selection: CellStyle {
            role: StyleRole::Selection,
            text_color: Rgba::WHITE,
            corner_radius: 4.0,
            background_color: Rgba::rgb(253, 127, 35),
            ..base.clone()
        },
        selected: CellStyle {
            role: StyleRole::Selected,
            interactive: false,
            text_color: Rgba::grey(180),
            corner_radius: 4.0,
            background_color: Rgba::grey(240),
            strikethrough: Some(Rgba::grey(180)),
            ..base
        },
    }
}

fn unavailability_styles() -> CellStyles {
    let base = CellStyle {
        role: StyleRole::Enabled,
        interactive: true,
        height: 45.0,
        font: FontSpec::system(16.0),
        text_color: Rgba::grey(77),
        border_width: 1.0,
        border_color: Rgba::grey(239),
        corner_radius: 4.0,
        background_color: Rgba::WHITE,
        strikethrough: None,
    };

    CellStyles {
        enabled: base.clone(),
        disabled: CellStyle {
            role: StyleRole::Disabled,
            interactive: false,
            text_color: Rgba::grey(180),
            border_width: 0.0,
            border_color: Rgba::CLEAR,
            corner_radius: 0.0,
            background_color: Rgba::CLEAR,
            ..base.clone()
        },
        selection: CellStyle {
            role: StyleRole::Selection,
            text_color: Rgba::grey(74),
            border_width: 0.0,
            border_color: Rgba::rgb(225, 225, 226),
            background_color: Rgba::grey(240),
            strikethrough: Some(Rgba::BLACK),
            ..base.clone()
        },
        selected: CellStyle {
            role: StyleRole::Selected,
            interactive: false,
            text_color: Rgba::grey(180),
            border_width: 0.0,
            border_color: Rgba::CLEAR,
            background_color: Rgba::rgb(250, 251, 252),
            strikethrough: Some(Rgba::grey(180)),
            ..base
        },
    }
}

/// Highlight of a single calendar cell, recomputed on every query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellSelectionMode<'a> {
    None(&'a CellStyle),
    Begin(&'a CellStyle),
    End(&'a CellStyle),
    Medium(&'a CellStyle),
    Only(&'a CellStyle),
}

impl<'a> CellSelectionMode<'a> {
    pub fn style(&self) -> &'a CellStyle {
        match *self {
            CellSelectionMode::None(style)
            | CellSelectionMode::Begin(style)
            | CellSelectionMode::End(style)
            | CellSelectionMode::Medium(style)
            | CellSelectionMode::Only(style) => style,
        }
    }

    pub fn role(&self) -> StyleRole {
        self.style().role
    }

    pub fn tag(&self) -> &'static str {
        match self {
            CellSelectionMode::None(_) => "none",
            CellSelectionMode::Begin(_) => "begin",
            CellSelectionMode::End(_) => "end",
            CellSelectionMode::Medium(_) => "medium",
            CellSelectionMode::Only(_) => "only",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_round_trip_through_hex_strings() {
        let color: Rgba = "#FD7F23".parse().unwrap();
        assert_eq!(color, Rgba::rgb(253, 127, 35));
        assert_eq!(color.to_string(), "#FD7F23FF");
        assert_eq!("#00000000".parse::<Rgba>().unwrap(), Rgba::CLEAR);
    }

    #[test]
    fn malformed_colors_are_rejected() {
        for value in ["FD7F23", "#FD7F2", "#GG7F23", "#FD7F23F", "", "#+F+F+F", "#FD 7F2"] {
            assert!(
                value.parse::<Rgba>().is_err(),
                "Expected {:?} to be rejected",
                value
            );
        }
    }

    #[test]
    fn every_slot_of_a_built_in_table_carries_its_role() {
        for purpose in [CalendarPurpose::CheckIn, CalendarPurpose::Unavailability] {
            let styles = purpose.cell_styles();
            for role in [
                StyleRole::Enabled,
                StyleRole::Disabled,
                StyleRole::Selection,
                StyleRole::Selected,
            ] {
                assert_eq!(styles.get(role).role, role, "{purpose:?} {role:?}");
            }
        }
    }

    #[test]
    fn committed_days_are_struck_through_and_not_tappable() {
        for purpose in [CalendarPurpose::CheckIn, CalendarPurpose::Unavailability] {
            let styles = purpose.cell_styles();
            assert!(styles.selected.strikethrough.is_some());
            assert!(!styles.selected.interactive);
            assert!(styles.enabled.interactive);
        }
    }

    #[test]
    fn check_in_disabled_days_stay_tappable_to_start_a_new_range() {
        let styles = CalendarPurpose::CheckIn.cell_styles();
        assert!(styles.disabled.interactive);
        assert_ne!(styles.disabled, styles.enabled);
    }

    #[test]
    fn unavailability_disabled_days_are_not_tappable() {
        let styles = CalendarPurpose::Unavailability.cell_styles();
        assert!(!styles.disabled.interactive);
    }

    #[test]
    fn unavailability_selection_is_struck_through() {
        let styles = CalendarPurpose::Unavailability.cell_styles();
        assert_eq!(styles.selection.strikethrough, Some(Rgba::BLACK));
        assert_eq!(styles.selection.height, 45.0);
    }

    #[test]
    fn selection_mode_exposes_its_tag_and_style() {
        let styles = CalendarPurpose::CheckIn.cell_styles();
        let mode = CellSelectionMode::Medium(&styles.selection);

        assert_eq!(mode.tag(), "medium");
        assert_eq!(mode.role(), StyleRole::Selection);
        assert_eq!(mode.style(), &styles.selection);
    }
}
