use crate::domain::codelist::activity_status_label;
use crate::domain::model::{Activity, Country, QueryParams};
use crate::utils::error::Result;
use std::io::Write;

const DPORTAL_URL: &str = "http://d-portal.org/q.html?aid=";
const UNKNOWN_COUNTRY: &str = "[Unknown]";

/// Joined lookup results, ready to be rendered as a labeled text listing.
#[derive(Debug)]
pub struct Report {
    pub params: QueryParams,
    pub countries: Vec<Country>,
    pub activities: Vec<Activity>,
}

impl Report {
    /// Display name for the first requested country code.
    pub fn country_name(&self) -> Option<String> {
        let code = self.params.countries.first()?;
        let name = self
            .countries
            .iter()
            .find(|country| &country.code == code)
            .map(|country| strip_qualifier(&country.name).to_string())
            .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string());
        Some(name)
    }

    pub fn heading(&self) -> String {
        let mut heading = if self.params.humanitarian {
            "Humanitarian activities".to_string()
        } else {
            "Activities".to_string()
        };
        if let Some(year) = self.params.year {
            heading.push_str(&format!(" for {}", year));
        }
        if let Some(name) = self.country_name() {
            heading.push_str(&format!(" in {}", name));
        }
        heading.push_str(&format!(" ({})", self.activities.len()));
        heading
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.heading())?;

        for activity in &self.activities {
            writeln!(out)?;
            render_activity(out, activity)?;
        }

        Ok(())
    }
}

fn render_activity<W: Write>(out: &mut W, activity: &Activity) -> Result<()> {
    writeln!(out, "{}", activity.title().unwrap_or("[no title]"))?;

    if let Some(id) = activity.iati_identifier() {
        writeln!(out, "  {}{}", DPORTAL_URL, url_encode(id))?;
        labeled(out, "IATI identifier", id)?;
    }

    if let Some(code) = activity.status_code() {
        match activity_status_label(code) {
            Some(label) => labeled(out, "Status", label)?,
            None => labeled(out, "Status", &code.to_string())?,
        }
    }

    if let Some(org) = activity.first_string("reporting_org_narrative") {
        labeled(out, "Reporting org", org)?;
    }

    let orgs = dedup(activity.strings("participating_org_narrative"));
    if !orgs.is_empty() {
        labeled(out, "Participating orgs", &orgs.join(", "))?;
    }

    if let Some(value) = activity.budget_value() {
        let amount = match activity.first_string("budget_value_currency") {
            Some(currency) => format!("{} {}", currency, format_number(value)),
            None => format_number(value),
        };
        labeled(out, "Budget", &amount)?;
    }

    let sectors = dedup_owned(activity.values_as_strings("sector_code"));
    if !sectors.is_empty() {
        labeled(out, "Sector codes", &sectors.join(", "))?;
    }

    let recipients = dedup_owned(activity.values_as_strings("recipient_country_code"));
    if !recipients.is_empty() {
        labeled(out, "Recipient countries", &recipients.join(", "))?;
    }

    if let Some(description) = activity.first_string("description_narrative") {
        labeled(out, "Description", description)?;
    }

    Ok(())
}

fn labeled<W: Write>(out: &mut W, label: &str, text: &str) -> Result<()> {
    writeln!(out, "  {}: {}", label, text)?;
    Ok(())
}

/// Drop duplicates, keeping first-seen order.
fn dedup<'a>(values: Vec<&'a str>) -> Vec<&'a str> {
    let mut seen = std::collections::HashSet::new();
    values.into_iter().filter(|v| seen.insert(*v)).collect()
}

fn dedup_owned(values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values.into_iter().filter(|v| seen.insert(v.clone())).collect()
}

/// Group the integer digits of a number with thousands separators.
pub fn format_number(value: f64) -> String {
    let raw = if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    };

    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Drop a trailing parenthetical qualifier from a country display name,
/// e.g. "Syrian Arab Republic (the)" -> "Syrian Arab Republic".
fn strip_qualifier(name: &str) -> &str {
    match name.rfind(" (") {
        Some(index) => name[..index].trim_end(),
        None => name,
    }
}

fn url_encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn activity(value: serde_json::Value) -> Activity {
        serde_json::from_value(value).unwrap()
    }

    fn report(params: QueryParams, activities: Vec<Activity>) -> Report {
        Report {
            params,
            countries: vec![
                Country {
                    code: "SY".to_string(),
                    name: "Syrian Arab Republic (the)".to_string(),
                },
                Country {
                    code: "YE".to_string(),
                    name: "Yemen".to_string(),
                },
            ],
            activities,
        }
    }

    fn rendered(report: &Report) -> String {
        let mut out = Vec::new();
        report.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(950.0), "950");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(1234567.89), "1,234,567.89");
        assert_eq!(format_number(-45000.0), "-45,000");
    }

    #[test]
    fn test_strip_qualifier() {
        assert_eq!(
            strip_qualifier("Syrian Arab Republic (the)"),
            "Syrian Arab Republic"
        );
        assert_eq!(strip_qualifier("Yemen"), "Yemen");
    }

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        assert_eq!(
            dedup(vec!["UNHCR", "UNICEF", "UNHCR", "WFP"]),
            vec!["UNHCR", "UNICEF", "WFP"]
        );
    }

    #[test]
    fn test_heading_resolves_country_name() {
        let params = QueryParams {
            countries: vec!["SY".to_string()],
            humanitarian: true,
            year: Some(2021),
            ..Default::default()
        };
        let report = report(params, vec![]);

        assert_eq!(
            report.heading(),
            "Humanitarian activities for 2021 in Syrian Arab Republic (0)"
        );
    }

    #[test]
    fn test_heading_unknown_country() {
        let params = QueryParams {
            countries: vec!["ZZ".to_string()],
            humanitarian: true,
            year: Some(2021),
            ..Default::default()
        };
        let report = report(params, vec![]);

        assert_eq!(
            report.heading(),
            "Humanitarian activities for 2021 in [Unknown] (0)"
        );
    }

    #[test]
    fn test_render_labels_and_dedup() {
        let params = QueryParams {
            countries: vec!["SY".to_string()],
            humanitarian: true,
            year: Some(2021),
            ..Default::default()
        };
        let report = report(
            params,
            vec![activity(json!({
                "iati_identifier": "XM-DAC-41127-SY-2021",
                "title_narrative_text": ["Emergency shelter"],
                "activity_status_code": 2,
                "reporting_org_narrative": ["UNHCR"],
                "participating_org_narrative": ["UNHCR", "UNHCR", "WFP"],
                "budget_value": [1234567],
                "budget_value_currency": ["USD"],
                "sector_code": ["720", "720", "730"],
                "recipient_country_code": ["SY"],
                "description_narrative": ["Shelter for displaced families."]
            }))],
        );

        let output = rendered(&report);

        assert!(output.starts_with("Humanitarian activities for 2021 in Syrian Arab Republic (1)"));
        assert!(output.contains("Emergency shelter\n"));
        assert!(output.contains("http://d-portal.org/q.html?aid=XM-DAC-41127-SY-2021"));
        assert!(output.contains("  IATI identifier: XM-DAC-41127-SY-2021\n"));
        assert!(output.contains("  Status: Implementation\n"));
        assert!(output.contains("  Reporting org: UNHCR\n"));
        assert!(output.contains("  Participating orgs: UNHCR, WFP\n"));
        assert!(output.contains("  Budget: USD 1,234,567\n"));
        assert!(output.contains("  Sector codes: 720, 730\n"));
        assert!(output.contains("  Recipient countries: SY\n"));
        assert!(output.contains("  Description: Shelter for displaced families.\n"));
    }

    #[test]
    fn test_render_skips_absent_fields() {
        let report = report(
            QueryParams::default(),
            vec![activity(json!({"iati_identifier": "XM-1"}))],
        );

        let output = rendered(&report);

        // Title falls back to the identifier; optional fields are skipped.
        assert!(output.contains("XM-1\n"));
        assert!(!output.contains("Status:"));
        assert!(!output.contains("Budget:"));
        assert!(!output.contains("Participating orgs:"));
    }

    #[test]
    fn test_link_identifier_is_url_encoded() {
        let report = report(
            QueryParams::default(),
            vec![activity(json!({"iati_identifier": "GB-CHC-123/45"}))],
        );

        let output = rendered(&report);
        assert!(output.contains("aid=GB-CHC-123%2F45"));
    }
}
