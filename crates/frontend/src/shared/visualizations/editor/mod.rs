pub mod custom_options_settings;

pub use custom_options_settings::CustomOptionsSettings;
