mod config_file;
mod main_config;

pub use config_file::ConfigFile;
pub use main_config::Config;
