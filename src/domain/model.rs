use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Filter parameters for an activity search. All fields are optional; an
/// empty set of filters searches the whole datastore.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryParams {
    pub countries: Vec<String>,
    pub humanitarian: bool,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub year: Option<i32>,
}

/// One activity document as returned by the datastore. The schema is owned
/// by the external API, so the record is an open field map with typed
/// accessors for the fields the report cares about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl Activity {
    /// First string value of a field, whether the field is a single string
    /// or an array of strings.
    pub fn first_string(&self, field: &str) -> Option<&str> {
        match self.fields.get(field)? {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Array(items) => items.first().and_then(|v| v.as_str()),
            _ => None,
        }
    }

    /// All string values of a field, in response order.
    pub fn strings(&self, field: &str) -> Vec<&str> {
        match self.fields.get(field) {
            Some(serde_json::Value::String(s)) => vec![s.as_str()],
            Some(serde_json::Value::Array(items)) => {
                items.iter().filter_map(|v| v.as_str()).collect()
            }
            _ => vec![],
        }
    }

    /// All values of a field rendered as strings. Code fields come back
    /// from the index as strings or numbers depending on the field type.
    pub fn values_as_strings(&self, field: &str) -> Vec<String> {
        fn scalar(value: &serde_json::Value) -> Option<String> {
            match value {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            }
        }

        match self.fields.get(field) {
            Some(serde_json::Value::Array(items)) => items.iter().filter_map(scalar).collect(),
            Some(value) => scalar(value).into_iter().collect(),
            None => vec![],
        }
    }

    pub fn iati_identifier(&self) -> Option<&str> {
        self.first_string("iati_identifier")
    }

    /// Display title: first title narrative, falling back to the identifier.
    pub fn title(&self) -> Option<&str> {
        self.first_string("title_narrative_text")
            .or_else(|| self.iati_identifier())
    }

    /// Activity status code (the API serves it as a number or a numeric
    /// string depending on the field type in the index).
    pub fn status_code(&self) -> Option<i64> {
        match self.fields.get("activity_status_code")? {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => s.parse().ok(),
            serde_json::Value::Array(items) => match items.first()? {
                serde_json::Value::Number(n) => n.as_i64(),
                serde_json::Value::String(s) => s.parse().ok(),
                _ => None,
            },
            _ => None,
        }
    }

    /// First budget value, as a raw number.
    pub fn budget_value(&self) -> Option<f64> {
        match self.fields.get("budget_value")? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::Array(items) => items.first().and_then(|v| v.as_f64()),
            _ => None,
        }
    }
}

/// One entry from the static countries resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl From<(String, String)> for Country {
    fn from((code, name): (String, String)) -> Self {
        Self { code, name }
    }
}

impl From<Country> for (String, String) {
    fn from(country: Country) -> Self {
        (country.code, country.name)
    }
}
