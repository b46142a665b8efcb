// src/models/claim/filter.rs

use serde::Deserialize;

use super::types::{is_known_month, Claim, ClaimStatus, StudyCenter};

/// Sentinel a select box submits for "no restriction".
pub const ALL: &str = "all";

/// Raw query parameters of the approvals table and printable report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub q: Option<String>,
    pub status: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
    pub center: Option<String>,
}

/// Independent, optional criteria combined with AND.
/// A `None` criterion matches every claim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaimFilter {
    search: String,
    pub status: Option<ClaimStatus>,
    pub month: Option<String>,
    pub year: Option<String>,
    pub study_center: Option<StudyCenter>,
}

/// Treat empty, whitespace and the `all` sentinel as absent.
fn active(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
}

fn is_year(value: &str) -> bool {
    value.len() == 4 && value.chars().all(|c| c.is_ascii_digit())
}

impl ClaimFilter {
    /// Build a filter from user input. Values that do not name a known status,
    /// month, year or center are dropped rather than rejected.
    /// `allow_center` is false for every role except registry.
    pub fn from_params(params: &FilterParams, allow_center: bool) -> Self {
        let search = params.q.clone().unwrap_or_default();
        let status = active(params.status.as_deref()).and_then(|s| s.parse().ok());
        let month = active(params.month.as_deref())
            .filter(|m| is_known_month(m))
            .map(String::from);
        let year = active(params.year.as_deref())
            .filter(|y| is_year(y))
            .map(String::from);
        let study_center = if allow_center {
            active(params.center.as_deref()).and_then(|c| c.parse().ok())
        } else {
            None
        };
        ClaimFilter { search, status, month, year, study_center }
    }

    /// The needle is kept verbatim; only an empty string matches everything.
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.status.is_none()
            && self.month.is_none()
            && self.year.is_none()
            && self.study_center.is_none()
    }

    fn matches_search(&self, claim: &Claim) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [
            claim.id.as_str(),
            claim.serial_number.as_str(),
            claim.lecturer.as_str(),
            claim.course_code.as_str(),
            claim.course_title.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn matches(&self, claim: &Claim) -> bool {
        self.matches_search(claim)
            && self.status.is_none_or(|s| claim.status == s)
            && self.month.as_deref().is_none_or(|m| claim.month == m)
            && self.year.as_deref().is_none_or(|y| claim.year == y)
            && self.study_center.is_none_or(|c| claim.study_center == c)
    }

    /// Stable filter: keeps the input order.
    pub fn apply<'a, I>(&self, claims: I) -> Vec<&'a Claim>
    where
        I: IntoIterator<Item = &'a Claim>,
    {
        claims.into_iter().filter(|c| self.matches(c)).collect()
    }

    /// Human-readable criteria for the printed report header.
    pub fn describe(&self) -> Vec<(String, String)> {
        let mut out = vec![];
        if !self.search.is_empty() {
            out.push(("Search".to_string(), self.search.clone()));
        }
        out.push((
            "Status".to_string(),
            self.status.map(|s| s.label().to_string()).unwrap_or_else(|| "All".to_string()),
        ));
        out.push(("Month".to_string(), self.month.clone().unwrap_or_else(|| "All".to_string())));
        out.push(("Year".to_string(), self.year.clone().unwrap_or_else(|| "All".to_string())));
        if let Some(center) = self.study_center {
            out.push(("Study Center".to_string(), center.name().to_string()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::claim::test_support::claim;

    fn params(q: &str, status: &str, month: &str, year: &str, center: &str) -> FilterParams {
        FilterParams {
            q: Some(q.into()),
            status: Some(status.into()),
            month: Some(month.into()),
            year: Some(year.into()),
            center: Some(center.into()),
        }
    }

    #[test]
    fn all_sentinels_build_empty_filter() {
        let f = ClaimFilter::from_params(&params("", "all", "all", "all", "all"), true);
        assert!(f.is_empty());
    }

    #[test]
    fn unknown_values_degrade_to_match_all() {
        let f = ClaimFilter::from_params(&params("  ", "archived", "Smarch", "23", "Tamale"), true);
        assert!(f.is_empty());
    }

    #[test]
    fn center_ignored_unless_allowed() {
        let p = params("", "all", "all", "all", "kumasi");
        assert_eq!(ClaimFilter::from_params(&p, false).study_center, None);
        assert_eq!(ClaimFilter::from_params(&p, true).study_center, Some(StudyCenter::Kumasi));
    }

    #[test]
    fn search_is_case_insensitive_over_any_field() {
        let c = claim("TCL-2023-001", ClaimStatus::Pending, StudyCenter::Accra);
        let f = ClaimFilter::default().with_search("cs101");
        assert!(f.matches(&c));
        assert!(ClaimFilter::default().with_search("mensah").matches(&c));
        assert!(ClaimFilter::default().with_search("sn0").matches(&c));
        assert!(!ClaimFilter::default().with_search("chem").matches(&c));
    }

    #[test]
    fn criteria_combine_with_and() {
        let c = claim("TCL-2023-001", ClaimStatus::Pending, StudyCenter::Accra);
        let hit = ClaimFilter::from_params(&params("cs", "pending", "October", "2023", "accra"), true);
        assert!(hit.matches(&c));
        let miss = ClaimFilter::from_params(&params("cs", "approved", "October", "2023", "accra"), true);
        assert!(!miss.matches(&c));
    }

    #[test]
    fn describe_lists_active_criteria() {
        let f = ClaimFilter::from_params(&params("cs", "approved", "all", "2023", "winneba"), true);
        let labels: Vec<String> = f.describe().into_iter().map(|(k, v)| format!("{k}={v}")).collect();
        assert_eq!(
            labels,
            vec!["Search=cs", "Status=Approved", "Month=All", "Year=2023", "Study Center=Winneba Campus"]
        );
    }
}
