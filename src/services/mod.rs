pub mod month_grid;
pub mod period_yaml;
pub mod replay;
pub mod scenario_yaml;
pub mod selection_yaml;
pub mod style_yaml;
