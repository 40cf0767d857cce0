use crate::domain::model::{Activity, Country, QueryParams};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait EndpointConfig: Send + Sync {
    fn search_endpoint(&self) -> &str;
    fn countries_url(&self) -> &str;
    fn rows(&self) -> usize;
}

#[async_trait]
pub trait Datastore: Send + Sync {
    async fn search_activities(&self, params: &QueryParams) -> Result<Vec<Activity>>;
    async fn countries(&self) -> Result<Vec<Country>>;
}
