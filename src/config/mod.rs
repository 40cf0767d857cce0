#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::domain::model::QueryParams;
use crate::domain::ports::EndpointConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "https://iatidatastore.iatistandard.org/search/activity";
pub const DEFAULT_COUNTRIES_URL: &str = "https://davidmegginson.github.io/humfin/countries.json";
pub const DEFAULT_ROWS: usize = 999999;
pub const DEFAULT_COUNTRY: &str = "SY";

/// Fully resolved runtime configuration: CLI flags over config-file values
/// over built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub endpoint: String,
    pub countries_url: String,
    pub rows: usize,
    pub params: QueryParams,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            countries_url: DEFAULT_COUNTRIES_URL.to_string(),
            rows: DEFAULT_ROWS,
            params: QueryParams::default(),
            verbose: false,
        }
    }
}

impl EndpointConfig for Settings {
    fn search_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn countries_url(&self) -> &str {
        &self.countries_url
    }

    fn rows(&self) -> usize {
        self.rows
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_url("countries_url", &self.countries_url)?;
        validate_positive_number("rows", self.rows, 1)?;
        // Query dates and country codes are passed through unvalidated;
        // the datastore's error response covers malformed values.
        Ok(())
    }
}
