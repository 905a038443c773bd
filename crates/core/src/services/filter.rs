//! Free-text and categorical filtering over report collections.
//!
//! Filtering never reorders: the result is the input subsequence whose
//! records satisfy every active predicate. An empty result is not an error.

use scamguard_client::models::Report;

/// Map the UI's `"all"` sentinel to no constraint.
#[must_use]
pub fn selection(value: &str) -> Option<String> {
    if value == "all" {
        None
    } else {
        Some(value.to_string())
    }
}

/// Active predicates over a report collection.
///
/// `None` on a categorical field means unconstrained; a `Some` value must
/// equal the record's field exactly (case-sensitive). The free-text query is
/// matched case-insensitively as a substring of title and description, and
/// an empty query matches everything. All active predicates are combined
/// with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub query: String,
    pub scam_type: Option<String>,
    pub status: Option<String>,
}

impl ReportFilter {
    /// Whether a record satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, report: &Report) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = query.is_empty()
            || report.title.to_lowercase().contains(&query)
            || report.description.to_lowercase().contains(&query);

        let matches_type = self
            .scam_type
            .as_ref()
            .is_none_or(|wanted| report.scam_type.as_ref() == Some(wanted));

        let matches_status = self
            .status
            .as_ref()
            .is_none_or(|wanted| report.status == *wanted);

        matches_search && matches_type && matches_status
    }
}

/// The matching subsequence, in input order.
#[must_use]
pub fn filter_reports(reports: &[Report], filter: &ReportFilter) -> Vec<Report> {
    reports
        .iter()
        .filter(|report| filter.matches(report))
        .cloned()
        .collect()
}
