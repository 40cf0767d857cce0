use crate::utils::error::{HumfinError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML config file. Every field is optional; missing values fall
/// back to the CLI flags or the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub datastore: Option<DatastoreSection>,
    pub query: Option<QuerySection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatastoreSection {
    pub endpoint: Option<String>,
    pub countries_url: Option<String>,
    pub rows: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuerySection {
    pub countries: Option<Vec<String>>,
    pub humanitarian: Option<bool>,
    pub year: Option<i32>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HumfinError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| HumfinError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replace `${VAR_NAME}` references with environment values. Unset
/// variables are left as-is so the error points at the literal reference.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}
