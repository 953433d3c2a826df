pub mod custom_options;
pub mod dashboard_grid;
pub mod parameters;
pub mod visualization;
