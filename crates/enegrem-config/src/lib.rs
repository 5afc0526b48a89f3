//! YAML configuration loading for ENEGREM
//!
//! Reads `enegrem.yaml` from a config directory into [`AppConfig`]. The YAML
//! loader understands two custom tags:
//!
//! - `!include path` - Include another YAML file
//! - `!env_var VAR [fallback]` - Environment variable substitution
//!
//! # Example
//!
//! ```ignore
//! use enegrem_config::AppConfig;
//!
//! let config = AppConfig::load("/etc/enegrem")?;
//! println!("listening on {}", config.server.bind_addr());
//! ```

mod app_config;
mod error;
mod loader;

pub use app_config::{AppConfig, FrontendConfig, LoggingConfig, ServerConfig, CONFIG_FILE};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_yaml, load_yaml_string, YamlLoader};

// Re-export serde_yaml::Value for convenience
pub use serde_yaml::Value;
