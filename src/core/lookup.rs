use crate::core::report::Report;
use crate::domain::model::QueryParams;
use crate::domain::ports::Datastore;
use crate::utils::error::Result;

/// Runs one lookup: the country-list fetch and the activity search are
/// issued concurrently and joined before the report is built.
pub struct LookupEngine<D: Datastore> {
    datastore: D,
}

impl<D: Datastore> LookupEngine<D> {
    pub fn new(datastore: D) -> Self {
        Self { datastore }
    }

    pub async fn run(&self, params: QueryParams) -> Result<Report> {
        tracing::info!("Querying the IATI datastore...");

        let (countries, activities) = tokio::join!(
            self.datastore.countries(),
            self.datastore.search_activities(&params)
        );

        if let Err(e) = &countries {
            tracing::error!("Error loading country codes: {}", e);
        }
        if let Err(e) = &activities {
            tracing::error!("Error querying the IATI datastore: {}", e);
        }

        let countries = countries?;
        let activities = activities?;

        tracing::info!(
            "Fetched {} activities and {} country codes",
            activities.len(),
            countries.len()
        );

        Ok(Report {
            params,
            countries,
            activities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Activity, Country};
    use crate::utils::error::{HumfinError, StatusText};
    use async_trait::async_trait;
    use serde_json::json;

    struct MockDatastore {
        activities: Result<Vec<Activity>>,
        countries: Result<Vec<Country>>,
    }

    #[async_trait]
    impl Datastore for MockDatastore {
        async fn search_activities(&self, _params: &QueryParams) -> Result<Vec<Activity>> {
            clone_result(&self.activities)
        }

        async fn countries(&self) -> Result<Vec<Country>> {
            clone_result(&self.countries)
        }
    }

    fn clone_result<T: Clone>(result: &Result<T>) -> Result<T> {
        match result {
            Ok(value) => Ok(value.clone()),
            Err(_) => Err(HumfinError::HttpStatusError(StatusText::from_status(
                reqwest::StatusCode::NOT_FOUND,
            ))),
        }
    }

    fn status_err<T>() -> Result<T> {
        Err(HumfinError::HttpStatusError(StatusText::from_status(
            reqwest::StatusCode::NOT_FOUND,
        )))
    }

    #[tokio::test]
    async fn test_run_joins_both_fetches() {
        let datastore = MockDatastore {
            activities: Ok(vec![serde_json::from_value(
                json!({"iati_identifier": "XM-1"}),
            )
            .unwrap()]),
            countries: Ok(vec![Country {
                code: "SY".to_string(),
                name: "Syrian Arab Republic".to_string(),
            }]),
        };

        let engine = LookupEngine::new(datastore);
        let report = engine.run(QueryParams::default()).await.unwrap();

        assert_eq!(report.activities.len(), 1);
        assert_eq!(report.countries.len(), 1);
    }

    #[tokio::test]
    async fn test_run_fails_when_search_fails() {
        let datastore = MockDatastore {
            activities: status_err(),
            countries: Ok(vec![]),
        };

        let engine = LookupEngine::new(datastore);
        let result = engine.run(QueryParams::default()).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_fails_when_country_fetch_fails() {
        let datastore = MockDatastore {
            activities: Ok(vec![]),
            countries: status_err(),
        };

        let engine = LookupEngine::new(datastore);
        let result = engine.run(QueryParams::default()).await;

        assert!(result.is_err());
    }
}
