use std::fmt;

use super::types::{Claim, ClaimStatus};

/// Outcome of a reviewer's action on a pending claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn target(&self) -> ClaimStatus {
        match self {
            Decision::Approve => ClaimStatus::Approved,
            Decision::Reject => ClaimStatus::Rejected,
        }
    }

    /// Audit action code.
    pub fn action(&self) -> &'static str {
        match self {
            Decision::Approve => "claim.approved",
            Decision::Reject => "claim.rejected",
        }
    }
}

impl TryFrom<ClaimStatus> for Decision {
    type Error = ClaimError;

    fn try_from(target: ClaimStatus) -> Result<Self, Self::Error> {
        match target {
            ClaimStatus::Approved => Ok(Decision::Approve),
            ClaimStatus::Rejected => Ok(Decision::Reject),
            ClaimStatus::Pending => Err(ClaimError::InvalidTarget(target)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClaimError {
    NotFound(String),
    InvalidTarget(ClaimStatus),
    AlreadyDecided { id: String, status: ClaimStatus },
    SerialsExhausted,
}

impl fmt::Display for ClaimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimError::NotFound(id) => write!(f, "Claim '{id}' not found"),
            ClaimError::InvalidTarget(status) => {
                write!(f, "Cannot move a claim to '{status}'; only approved or rejected are allowed")
            }
            ClaimError::AlreadyDecided { id, status } => {
                write!(f, "Claim {id} has already been {status}")
            }
            ClaimError::SerialsExhausted => write!(f, "No claim serial numbers are left to assign"),
        }
    }
}

impl std::error::Error for ClaimError {}

/// Set the status of the claim with `id`. Only pending claims move;
/// every other claim and field is left untouched.
pub fn apply_decision<'a>(
    claims: &'a mut [Claim],
    id: &str,
    decision: Decision,
) -> Result<&'a Claim, ClaimError> {
    let claim = claims
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| ClaimError::NotFound(id.to_string()))?;
    if claim.status.is_terminal() {
        return Err(ClaimError::AlreadyDecided { id: claim.id.clone(), status: claim.status });
    }
    claim.status = decision.target();
    Ok(claim)
}

/// Same as [`apply_decision`] but takes the target as a status, rejecting `pending`.
pub fn set_status<'a>(
    claims: &'a mut [Claim],
    id: &str,
    target: ClaimStatus,
) -> Result<&'a Claim, ClaimError> {
    let decision = Decision::try_from(target)?;
    apply_decision(claims, id, decision)
}
