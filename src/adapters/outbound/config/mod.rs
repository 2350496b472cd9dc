mod env_options;
mod json_file_options;
mod static_options;

pub use env_options::EnvOptions;
pub use json_file_options::JsonFileOptions;
pub use static_options::StaticOptions;
