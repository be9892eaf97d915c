//! Configuration loading.

mod file_config;
mod loader;

pub use file_config::{FileApiConfig, FileCheckoutConfig, FileConfig};
pub use loader::ConfigLoader;
