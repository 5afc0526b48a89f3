//! YAML loader with custom tag support
//!
//! Supported tags:
//! - `!include path` - Replace the node with the contents of another YAML file
//! - `!env_var VAR` - Substitute an environment variable
//! - `!env_var VAR fallback` - Same, with a fallback when the variable is unset

use crate::error::{ConfigError, ConfigResult};
use serde_yaml::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// YAML loader that resolves `!include` and `!env_var` tags
pub struct YamlLoader {
    /// Base directory for resolving relative paths
    config_dir: PathBuf,
    /// Files currently being loaded, for cycle detection
    include_stack: HashSet<PathBuf>,
}

impl YamlLoader {
    /// Create a new YAML loader for the given config directory
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            include_stack: HashSet::new(),
        }
    }

    /// Load and process a YAML file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> ConfigResult<Value> {
        let path = self.resolve_path(path.as_ref());
        debug!("Loading YAML file: {:?}", path);

        if self.include_stack.contains(&path) {
            return Err(ConfigError::CircularInclude { path });
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadFile {
            path: path.clone(),
            source: e,
        })?;

        self.include_stack.insert(path.clone());
        let result = self.load_string(&content, &path);
        self.include_stack.remove(&path);

        result
    }

    /// Load and process YAML from a string
    pub fn load_string(&mut self, content: &str, source_path: &Path) -> ConfigResult<Value> {
        // An empty document is an empty configuration, not a null one
        if content.trim().is_empty() {
            return Ok(Value::Mapping(serde_yaml::Mapping::new()));
        }

        let value: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseYaml {
            path: source_path.to_path_buf(),
            source: e,
        })?;

        self.process_value(value, source_path)
    }

    fn process_value(&mut self, value: Value, source_path: &Path) -> ConfigResult<Value> {
        match value {
            Value::Tagged(tagged) => self.process_tagged(*tagged, source_path),
            Value::Mapping(map) => {
                let mut result = serde_yaml::Mapping::new();
                for (k, v) in map {
                    result.insert(k, self.process_value(v, source_path)?);
                }
                Ok(Value::Mapping(result))
            }
            Value::Sequence(seq) => seq
                .into_iter()
                .map(|v| self.process_value(v, source_path))
                .collect::<ConfigResult<Vec<Value>>>()
                .map(Value::Sequence),
            _ => Ok(value),
        }
    }

    fn process_tagged(
        &mut self,
        tagged: serde_yaml::value::TaggedValue,
        source_path: &Path,
    ) -> ConfigResult<Value> {
        let tag = tagged.tag.to_string();
        let value = tagged.value;

        trace!("Processing tag '{}' with value {:?}", tag, value);

        match tag.as_str() {
            "!include" => self.process_include(value, source_path),
            "!env_var" => process_env_var(value),
            _ => {
                let processed = self.process_value(value, source_path)?;
                Ok(Value::Tagged(Box::new(serde_yaml::value::TaggedValue {
                    tag: tagged.tag,
                    value: processed,
                })))
            }
        }
    }

    fn process_include(&mut self, value: Value, source_path: &Path) -> ConfigResult<Value> {
        let include_path = self.value_to_path(&value, source_path)?;
        debug!("Including file: {:?}", include_path);
        self.load_file(&include_path)
    }

    /// Convert a YAML value to a path, resolving relative to the including file
    fn value_to_path(&self, value: &Value, source_path: &Path) -> ConfigResult<PathBuf> {
        let path_str = match value {
            Value::String(s) => s.clone(),
            _ => {
                return Err(ConfigError::InvalidIncludePath {
                    path: format!("{:?}", value),
                    reason: "path must be a string".to_string(),
                })
            }
        };

        let base_dir = match source_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => &self.config_dir,
        };
        if Path::new(&path_str).is_absolute() {
            Ok(PathBuf::from(&path_str))
        } else {
            Ok(base_dir.join(&path_str))
        }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.config_dir.join(path)
        }
    }
}

/// Resolve `!env_var NAME` or `!env_var NAME fallback`
fn process_env_var(value: Value) -> ConfigResult<Value> {
    let spec = match value {
        Value::String(s) => s,
        _ => {
            return Err(ConfigError::InvalidValue {
                key: "!env_var".to_string(),
                reason: "environment variable name must be a string".to_string(),
            })
        }
    };

    let (var_name, fallback) = match spec.split_once(char::is_whitespace) {
        Some((name, rest)) => (name.to_string(), Some(rest.trim().to_string())),
        None => (spec, None),
    };

    match (std::env::var(&var_name), fallback) {
        (Ok(env_value), _) => {
            debug!("Substituted env var: {}", var_name);
            Ok(Value::String(env_value))
        }
        (Err(_), Some(fallback)) => {
            debug!("Env var {} not set, using fallback", var_name);
            Ok(Value::String(fallback))
        }
        (Err(_), None) => Err(ConfigError::EnvVarNotFound { var: var_name }),
    }
}

/// Load a YAML file with full tag processing
pub fn load_yaml(config_dir: impl Into<PathBuf>, file: impl AsRef<Path>) -> ConfigResult<Value> {
    YamlLoader::new(config_dir).load_file(file)
}

/// Load a YAML string with tag processing
pub fn load_yaml_string(
    config_dir: impl Into<PathBuf>,
    content: &str,
    source_name: &str,
) -> ConfigResult<Value> {
    YamlLoader::new(config_dir).load_string(content, Path::new(source_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn get<'a>(value: &'a Value, key: &str) -> &'a Value {
        value
            .as_mapping()
            .unwrap()
            .get(&Value::String(key.to_string()))
            .unwrap()
    }

    #[test]
    fn test_load_simple_yaml() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "enegrem.yaml", "server:\n  port: 9000\n");

        let value = load_yaml(dir.path(), "enegrem.yaml").unwrap();
        assert_eq!(get(get(&value, "server"), "port").as_u64(), Some(9000));
    }

    #[test]
    fn test_empty_file_is_empty_mapping() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "enegrem.yaml", "\n");

        let value = load_yaml(dir.path(), "enegrem.yaml").unwrap();
        assert!(value.as_mapping().unwrap().is_empty());
    }

    #[test]
    fn test_include() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "parts/frontend.yaml", "title: Anagrams\n");
        write_file(
            dir.path(),
            "enegrem.yaml",
            "frontend: !include parts/frontend.yaml\n",
        );

        let value = load_yaml(dir.path(), "enegrem.yaml").unwrap();
        assert_eq!(
            get(get(&value, "frontend"), "title").as_str(),
            Some("Anagrams")
        );
    }

    #[test]
    fn test_env_var() {
        let dir = TempDir::new().unwrap();
        std::env::set_var("TEST_ENEGREM_CONFIG_HOST", "0.0.0.0");
        write_file(
            dir.path(),
            "enegrem.yaml",
            "host: !env_var TEST_ENEGREM_CONFIG_HOST\n",
        );

        let value = load_yaml(dir.path(), "enegrem.yaml").unwrap();
        assert_eq!(get(&value, "host").as_str(), Some("0.0.0.0"));

        std::env::remove_var("TEST_ENEGREM_CONFIG_HOST");
    }

    #[test]
    fn test_env_var_fallback() {
        let value = load_yaml_string(
            "/nonexistent",
            "level: !env_var TEST_ENEGREM_UNSET_LEVEL debug\n",
            "inline.yaml",
        )
        .unwrap();
        assert_eq!(get(&value, "level").as_str(), Some("debug"));
    }

    #[test]
    fn test_env_var_missing() {
        let result = load_yaml_string(
            "/nonexistent",
            "level: !env_var TEST_ENEGREM_UNSET_NO_FALLBACK\n",
            "inline.yaml",
        );
        assert!(matches!(result, Err(ConfigError::EnvVarNotFound { .. })));
    }

    #[test]
    fn test_circular_include_detection() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "a.yaml", "include_b: !include b.yaml\n");
        write_file(dir.path(), "b.yaml", "include_a: !include a.yaml\n");

        let result = load_yaml(dir.path(), "a.yaml");
        assert!(matches!(result, Err(ConfigError::CircularInclude { .. })));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "enegrem.yaml", "server: [unclosed\n");

        let result = load_yaml(dir.path(), "enegrem.yaml");
        assert!(matches!(result, Err(ConfigError::ParseYaml { .. })));
    }
}
