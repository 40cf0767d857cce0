use crate::domain::model::QueryParams;

/// Match-everything term used when no filters are supplied.
pub const WILDCARD: &str = "*.*";

/// Build a Solr search query from the filter parameters.
///
/// Clauses are joined with " AND ". Country codes and dates are passed
/// through unvalidated; the datastore's own error response is the
/// validator for malformed values.
pub fn build_query(params: &QueryParams) -> String {
    // A year overwrites any explicit bounds.
    let (date_from, date_to) = match params.year {
        Some(year) => (
            Some(format!("{}-01-01", year)),
            Some(format!("{}-12-31", year)),
        ),
        None => (params.date_from.clone(), params.date_to.clone()),
    };

    let mut terms = Vec::new();

    if !params.countries.is_empty() {
        terms.push(format!(
            "(recipient_country_code:({}))",
            params.countries.join(" ")
        ));
    }

    if params.humanitarian {
        terms.push("(humanitarian:(1) OR sector_code(720 730 740))".to_string());
    }

    if let Some(from) = date_from {
        // Ended (or expected to end) on or after the lower bound: prefer the
        // actual end date, fall back to the planned one when no actual date
        // is indexed.
        terms.push(format!(
            "(activity_date_end_actual:[{} TO *] OR (-activity_date_end_actual:[* TO *] AND activity_date_end_planned:[{} TO *]))",
            from, from
        ));
    }

    if let Some(to) = date_to {
        terms.push(format!(
            "(activity_date_start_actual:[* TO {}] OR (-activity_date_start_actual:[* TO *] AND activity_date_start_planned:[* TO {}]))",
            to, to
        ));
    }

    if terms.is_empty() {
        terms.push(WILDCARD.to_string());
    }

    terms.join(" AND ")
}
