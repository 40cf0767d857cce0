use crate::config::file::FileConfig;
use crate::config::{
    Settings, DEFAULT_COUNTRIES_URL, DEFAULT_COUNTRY, DEFAULT_ENDPOINT, DEFAULT_ROWS,
};
use crate::domain::model::QueryParams;
use crate::utils::error::Result;
use chrono::Datelike;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "humfin")]
#[command(about = "Look up humanitarian activities in the IATI Datastore")]
pub struct CliConfig {
    /// Recipient country codes (comma-separated)
    #[arg(long = "country", value_delimiter = ',')]
    pub countries: Vec<String>,

    /// Calendar year to filter on; overrides the date bounds
    #[arg(long)]
    pub year: Option<i32>,

    /// Lower date bound, YYYY-MM-DD
    #[arg(long)]
    pub date_from: Option<String>,

    /// Upper date bound, YYYY-MM-DD
    #[arg(long)]
    pub date_to: Option<String>,

    /// Restrict to humanitarian activities
    #[arg(long)]
    pub humanitarian: Option<bool>,

    /// Datastore search endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// URL of the static country-code list
    #[arg(long)]
    pub countries_url: Option<String>,

    /// Maximum number of documents to request
    #[arg(long)]
    pub rows: Option<usize>,

    /// TOML config file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merge CLI flags over config-file values over built-in defaults.
    pub fn resolve(self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        let datastore = file.datastore.unwrap_or_default();
        let query = file.query.unwrap_or_default();

        let countries = if !self.countries.is_empty() {
            self.countries
        } else {
            query
                .countries
                .unwrap_or_else(|| vec![DEFAULT_COUNTRY.to_string()])
        };

        let date_from = self.date_from.or(query.date_from);
        let date_to = self.date_to.or(query.date_to);

        // Default to the current year unless explicit bounds were supplied.
        let year = match self.year.or(query.year) {
            Some(year) => Some(year),
            None if date_from.is_none() && date_to.is_none() => Some(chrono::Utc::now().year()),
            None => None,
        };

        let humanitarian = self.humanitarian.or(query.humanitarian).unwrap_or(true);

        Ok(Settings {
            endpoint: self
                .endpoint
                .or(datastore.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            countries_url: self
                .countries_url
                .or(datastore.countries_url)
                .unwrap_or_else(|| DEFAULT_COUNTRIES_URL.to_string()),
            rows: self.rows.or(datastore.rows).unwrap_or(DEFAULT_ROWS),
            params: QueryParams {
                countries,
                humanitarian,
                date_from,
                date_to,
                year,
            },
            verbose: self.verbose,
        })
    }
}
