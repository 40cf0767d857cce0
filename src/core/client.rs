use crate::core::query::build_query;
use crate::domain::model::{Activity, Country, QueryParams};
use crate::domain::ports::{Datastore, EndpointConfig};
use crate::utils::error::{HumfinError, Result, StatusText};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// JSON envelope served by the Solr search endpoint.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchBody,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    docs: Vec<Activity>,
}

pub struct DatastoreClient<C: EndpointConfig> {
    config: C,
    client: Client,
}

impl<C: EndpointConfig> DatastoreClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn check_status(status: reqwest::StatusCode) -> Result<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(HumfinError::HttpStatusError(StatusText::from_status(status)))
        }
    }
}

#[async_trait]
impl<C: EndpointConfig> Datastore for DatastoreClient<C> {
    /// Return all activities matching the parameters. One best-effort
    /// request: no retry, no backoff.
    async fn search_activities(&self, params: &QueryParams) -> Result<Vec<Activity>> {
        let query = build_query(params);
        let rows = self.config.rows().to_string();

        tracing::debug!("Datastore query: {}", query);
        let response = self
            .client
            .get(self.config.search_endpoint())
            .query(&[("wt", "json"), ("rows", rows.as_str()), ("q", query.as_str())])
            .send()
            .await?;

        tracing::debug!("Datastore response status: {}", response.status());
        Self::check_status(response.status())?;

        let envelope: SearchEnvelope = response.json().await?;
        Ok(envelope.response.docs)
    }

    /// Fetch the static country-code list.
    async fn countries(&self) -> Result<Vec<Country>> {
        tracing::debug!("Fetching country list from {}", self.config.countries_url());
        let response = self.client.get(self.config.countries_url()).send().await?;

        Self::check_status(response.status())?;

        let countries: Vec<Country> = response.json().await?;
        Ok(countries)
    }
}
