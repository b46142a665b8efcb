use super::types::{format_hours, Claim, ClaimStatus};

/// Per-status counts over a claim collection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub hours: f64,
}

impl StatusCounts {
    pub fn tally<'a, I>(claims: I) -> Self
    where
        I: IntoIterator<Item = &'a Claim>,
    {
        claims.into_iter().fold(StatusCounts::default(), |mut acc, claim| {
            match claim.status {
                ClaimStatus::Pending => acc.pending += 1,
                ClaimStatus::Approved => acc.approved += 1,
                ClaimStatus::Rejected => acc.rejected += 1,
            }
            acc.hours += claim.hours;
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.pending + self.approved + self.rejected
    }

    pub fn decided(&self) -> usize {
        self.approved + self.rejected
    }

    /// Share of claims already approved or rejected, 0..=100.
    pub fn processing_rate(&self) -> u32 {
        match self.total() {
            0 => 0,
            total => ((self.decided() * 100) as f64 / total as f64).round() as u32,
        }
    }

    pub fn hours_label(&self) -> String {
        format_hours(self.hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::claim::test_support::claim;
    use crate::models::claim::types::StudyCenter;

    #[test]
    fn counts_sum_to_collection_size() {
        let claims = vec![
            claim("A", ClaimStatus::Pending, StudyCenter::Accra),
            claim("B", ClaimStatus::Pending, StudyCenter::Kumasi),
            claim("C", ClaimStatus::Approved, StudyCenter::Accra),
            claim("D", ClaimStatus::Rejected, StudyCenter::Winneba),
        ];
        let counts = StatusCounts::tally(&claims);
        assert_eq!((counts.pending, counts.approved, counts.rejected), (2, 1, 1));
        assert_eq!(counts.total(), claims.len());
        assert_eq!(counts.hours, 8.0);
        assert_eq!(counts.processing_rate(), 50);
    }

    #[test]
    fn empty_collection_has_zero_rate() {
        let counts = StatusCounts::tally(std::iter::empty::<&Claim>());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.processing_rate(), 0);
    }
}
