pub mod client;
pub mod lookup;
pub mod query;
pub mod report;

pub use crate::domain::model::{Activity, Country, QueryParams};
pub use crate::domain::ports::{Datastore, EndpointConfig};
pub use crate::utils::error::Result;
