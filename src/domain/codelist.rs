/// IATI activity-status codelist.
pub fn activity_status_label(code: i64) -> Option<&'static str> {
    match code {
        1 => Some("Pipeline/Identification"),
        2 => Some("Implementation"),
        3 => Some("Finalisation"),
        4 => Some("Closed"),
        5 => Some("Cancelled"),
        6 => Some("Suspended"),
        _ => None,
    }
}
