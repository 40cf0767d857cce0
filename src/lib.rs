pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::Settings;

pub use crate::core::client::DatastoreClient;
pub use crate::core::lookup::LookupEngine;
pub use crate::core::query::build_query;
pub use crate::core::report::Report;
pub use domain::model::{Activity, Country, QueryParams};
pub use utils::error::{HumfinError, Result};
