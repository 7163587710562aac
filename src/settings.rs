//! Application settings: built-in defaults, then the instance `config.toml` and `QUILL_*`
//! environment variables, or an injected mapping in their place (tests).

use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Development-only session secret. Override it in `config.toml` or `QUILL_SECRET_KEY`.
pub const DEFAULT_SECRET_KEY: &str = "dev";
pub const DATABASE_FILE: &str = "quill.sqlite";
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const ENV_PREFIX: &str = "QUILL";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Signs the session cookie.
    pub secret_key: String,
    /// SQLite database file.
    pub database: PathBuf,
    pub instance_path: PathBuf,
    pub bind: String,
    pub bcrypt_cost: u32,
    /// Mark the session cookie `Secure` (HTTPS only).
    pub secure_cookies: bool,
}

impl Settings {
    /// Load settings for `instance_path`. With `overrides` set, the config file and environment
    /// are skipped and the mapping is applied over the defaults instead.
    pub fn load(
        instance_path: impl AsRef<Path>,
        overrides: Option<&HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let instance_path = instance_path.as_ref();
        let mut builder = Config::builder()
            .set_default("secret_key", DEFAULT_SECRET_KEY)?
            .set_default(
                "database",
                instance_path.join(DATABASE_FILE).to_string_lossy().into_owned(),
            )?
            .set_default("instance_path", instance_path.to_string_lossy().into_owned())?
            .set_default("bind", DEFAULT_BIND)?
            .set_default("bcrypt_cost", i64::from(bcrypt::DEFAULT_COST))?
            .set_default("secure_cookies", false)?;

        match overrides {
            None => {
                builder = builder
                    .add_source(
                        File::from(instance_path.join(CONFIG_FILE))
                            .format(FileFormat::Toml)
                            .required(false),
                    )
                    .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
            }
            Some(mapping) => {
                for (key, value) in mapping {
                    builder = builder.set_override(key.as_str(), value.as_str())?;
                }
            }
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Create the instance folder. A folder that is already there is not an error.
    pub fn ensure_instance_path(&self) -> Result<(), ConfigError> {
        match std::fs::create_dir_all(&self.instance_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(source) => Err(ConfigError::InstancePath {
                path: self.instance_path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_into_instance_folder() {
        let dir = tempfile::tempdir().unwrap();
        let settings = temp_env::with_vars_unset(
            ["QUILL_SECRET_KEY", "QUILL_DATABASE", "QUILL_BIND"],
            || Settings::load(dir.path(), None).unwrap(),
        );
        assert_eq!(settings.secret_key, DEFAULT_SECRET_KEY);
        assert_eq!(settings.database, dir.path().join(DATABASE_FILE));
        assert_eq!(settings.bind, DEFAULT_BIND);
        assert_eq!(settings.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert!(!settings.secure_cookies);
    }

    #[test]
    fn config_file_and_env_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "secret_key = \"from-file\"\nbind = \"0.0.0.0:8080\"\n",
        )
        .unwrap();
        let settings = temp_env::with_var("QUILL_SECRET_KEY", Some("from-env"), || {
            Settings::load(dir.path(), None).unwrap()
        });
        assert_eq!(settings.secret_key, "from-env");
        assert_eq!(settings.bind, "0.0.0.0:8080");
    }

    #[test]
    fn mapping_replaces_file_and_env() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "secret_key = \"from-file\"\n").unwrap();
        let mapping = HashMap::from([
            ("secret_key".to_string(), "test".to_string()),
            ("bcrypt_cost".to_string(), "4".to_string()),
        ]);
        let settings = temp_env::with_var("QUILL_SECRET_KEY", Some("from-env"), || {
            Settings::load(dir.path(), Some(&mapping)).unwrap()
        });
        assert_eq!(settings.secret_key, "test");
        assert_eq!(settings.bcrypt_cost, 4);
    }

    #[test]
    fn existing_instance_folder_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path().join("instance"), Some(&HashMap::new())).unwrap();
        settings.ensure_instance_path().unwrap();
        settings.ensure_instance_path().unwrap();
        assert!(settings.instance_path.is_dir());
    }

    #[test]
    fn instance_path_under_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain");
        std::fs::write(&file, "x").unwrap();
        let settings = Settings::load(file.join("instance"), Some(&HashMap::new())).unwrap();
        assert!(matches!(
            settings.ensure_instance_path(),
            Err(ConfigError::InstancePath { .. })
        ));
    }
}
