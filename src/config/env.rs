//! Environment lookup for configuration overrides.
//!
//! Values come from the process environment; a local `.env` file, when
//! present, is read on top of it and wins on conflicts.

use crate::errors::AppResult;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
    origin: String,
}

impl EnvSource {
    /// Snapshot the process environment plus the optional `.env` file.
    pub fn capture(dotenv: &Path) -> AppResult<Self> {
        let mut vars: HashMap<String, String> = std::env::vars().collect();
        let origin = if dotenv.exists() {
            for item in dotenvy::from_path_iter(dotenv)? {
                let (key, value) = item?;
                vars.insert(key, value);
            }
            ".env file"
        } else {
            "OS environment"
        };
        Ok(Self {
            vars,
            origin: origin.to_string(),
        })
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            origin: "explicit values".to_string(),
        }
    }

    /// Non-empty value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(|v| v.as_str())
            .filter(|v| !v.trim().is_empty())
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}
