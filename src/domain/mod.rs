pub mod calendar_date;
pub mod cell_style;
pub mod date_range;
pub mod periods;
pub mod publisher;
pub mod selection;
