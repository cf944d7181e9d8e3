use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod env; // use submodule at src/config/env.rs

pub use env::EnvSource;

/// A user/password pair used to open the databases.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database server location. For the embedded SQLite backend this is the
    /// directory holding `<database>.sqlite` and `<reference_database>.sqlite`.
    pub server: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_reference_database")]
    pub reference_database: String,
    /// Read-only role, used for every query.
    #[serde(default)]
    pub viewer: Credentials,
    /// Read-write role, used for uploads, overwrites and deletes.
    #[serde(default)]
    pub editor: Credentials,
    #[serde(default = "default_listen")]
    pub listen: String,
    #[serde(default)]
    pub url_prefix: String,
    #[serde(default = "default_project_id")]
    pub project_id: String,
    #[serde(default = "default_session_ttl")]
    pub session_ttl_minutes: u64,
}

fn default_database() -> String {
    "mercury_passive".to_string()
}
fn default_reference_database() -> String {
    "dcp".to_string()
}
fn default_listen() -> String {
    "127.0.0.1:8080".to_string()
}
fn default_project_id() -> String {
    "MERCURY_PASSIVE".to_string()
}
fn default_session_ttl() -> u64 {
    240
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: Self::config_dir().to_string_lossy().to_string(),
            database: default_database(),
            reference_database: default_reference_database(),
            viewer: Credentials::default(),
            editor: Credentials::default(),
            listen: default_listen(),
            url_prefix: String::new(),
            project_id: default_project_id(),
            session_ttl_minutes: default_session_ttl(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.sampletrack`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sampletrack")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sampletrack.conf")
    }

    /// Load the YAML file (defaults when missing), then layer the process
    /// environment and a `.env` file from the working directory on top.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);
        let mut cfg = Self::from_file(&path)?;
        let env = EnvSource::capture(Path::new(".env"))?;
        cfg.apply_env(&env)?;
        Ok(cfg)
    }

    /// Read a YAML configuration file, or return defaults if not found.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Override fields with the values present in `env`.
    pub fn apply_env(&mut self, env: &EnvSource) -> AppResult<()> {
        let text_fields: [(&str, &mut String); 9] = [
            ("SERVER", &mut self.server),
            ("DATABASE", &mut self.database),
            ("REFERENCE_DATABASE", &mut self.reference_database),
            ("VIEWER_USER", &mut self.viewer.user),
            ("VIEWER_PASSWORD", &mut self.viewer.password),
            ("EDITOR_USER", &mut self.editor.user),
            ("EDITOR_PASSWORD", &mut self.editor.password),
            ("LISTEN", &mut self.listen),
            ("PROJECT_ID", &mut self.project_id),
        ];
        for (key, field) in text_fields {
            if let Some(v) = env.get(key) {
                *field = v.to_string();
            }
        }

        if let Some(prefix) = env.get("URL_PREFIX") {
            self.url_prefix = prefix.to_string();
        }

        if let Some(ttl) = env.get("SESSION_TTL_MINUTES") {
            self.session_ttl_minutes = ttl.parse().map_err(|_| {
                AppError::Config(format!("SESSION_TTL_MINUTES is not a number: {ttl}"))
            })?;
        }

        log::debug!("Configuration resolved from {}", env.origin());
        Ok(())
    }

    /// Names (environment spelling) of required values that are empty.
    pub fn missing_fields(&self) -> Vec<String> {
        [
            ("SERVER", &self.server),
            ("DATABASE", &self.database),
            ("REFERENCE_DATABASE", &self.reference_database),
            ("VIEWER_USER", &self.viewer.user),
            ("VIEWER_PASSWORD", &self.viewer.password),
            ("EDITOR_USER", &self.editor.user),
            ("EDITOR_PASSWORD", &self.editor.password),
            ("LISTEN", &self.listen),
            ("PROJECT_ID", &self.project_id),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k.to_string())
        .collect()
    }

    /// Fail with every missing value listed at once.
    pub fn validate(&self, source_name: &str) -> AppResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingConfig {
                source_name: source_name.to_string(),
                missing,
            })
        }
    }

    /// Copy safe to print: passwords masked.
    pub fn redacted(&self) -> Self {
        let mask = |c: &Credentials| Credentials {
            user: c.user.clone(),
            password: if c.password.is_empty() {
                String::new()
            } else {
                "********".to_string()
            },
        };
        Self {
            viewer: mask(&self.viewer),
            editor: mask(&self.editor),
            ..self.clone()
        }
    }

    /// URL prefix normalised to `""` or `"/segment[/segment]"`.
    pub fn scope_prefix(&self) -> String {
        let trimmed = self.url_prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }

    /// Initialize the data directory and, unless `is_test`, the config file.
    pub fn init_all(server: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        let mut config = Self::from_file(&Self::config_file())?;
        if let Some(s) = server {
            config.server = s;
        }
        fs::create_dir_all(&config.server)?;

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
