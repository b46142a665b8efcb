use std::collections::HashSet;
use std::fmt;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Deserialize;

use crate::audit::AuditEntry;
use crate::models::claim::Claim;
use crate::models::staff::StaffMember;

const DEFAULT_SEED: &str = include_str!("../data/seed/claims.json");

/// Shape of the seed file.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub claims: Vec<Claim>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
}

#[derive(Debug)]
pub enum SeedError {
    Io(std::io::Error),
    Json(serde_json::Error),
    DuplicateClaimId(String),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Io(e) => write!(f, "Seed file error: {e}"),
            SeedError::Json(e) => write!(f, "Seed JSON error: {e}"),
            SeedError::DuplicateClaimId(id) => write!(f, "Duplicate claim id in seed: {id}"),
        }
    }
}

impl std::error::Error for SeedError {}

impl From<std::io::Error> for SeedError {
    fn from(e: std::io::Error) -> Self {
        SeedError::Io(e)
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(e: serde_json::Error) -> Self {
        SeedError::Json(e)
    }
}

/// In-memory owner of all application data. Shared across workers via `web::Data`.
#[derive(Debug, Default)]
pub struct Store {
    claims: RwLock<Vec<Claim>>,
    staff: RwLock<Vec<StaffMember>>,
    audit: RwLock<Vec<AuditEntry>>,
}

impl Store {
    pub fn from_seed(seed: Seed) -> Result<Self, SeedError> {
        let mut seen = HashSet::new();
        for claim in &seed.claims {
            if !seen.insert(claim.id.as_str()) {
                return Err(SeedError::DuplicateClaimId(claim.id.clone()));
            }
        }
        Ok(Store {
            claims: RwLock::new(seed.claims),
            staff: RwLock::new(seed.staff),
            audit: RwLock::new(Vec::new()),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: Seed = serde_json::from_str(json)?;
        Self::from_seed(seed)
    }

    /// Load the embedded seed, or the file at `path` when given.
    pub fn load(path: Option<&str>) -> Result<Self, SeedError> {
        let store = match path {
            Some(p) => {
                let json = std::fs::read_to_string(p)?;
                Self::from_json(&json)?
            }
            None => Self::from_json(DEFAULT_SEED)?,
        };
        log::info!(
            "Seed loaded: claims={}, staff={}",
            store.claims().len(),
            store.staff().len()
        );
        Ok(store)
    }

    // Poisoned locks are recovered: every write leaves the vectors in a valid state.

    pub(crate) fn claims(&self) -> RwLockReadGuard<'_, Vec<Claim>> {
        self.claims.read().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn claims_mut(&self) -> RwLockWriteGuard<'_, Vec<Claim>> {
        self.claims.write().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn staff(&self) -> RwLockReadGuard<'_, Vec<StaffMember>> {
        self.staff.read().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn staff_mut(&self) -> RwLockWriteGuard<'_, Vec<StaffMember>> {
        self.staff.write().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn audit(&self) -> RwLockReadGuard<'_, Vec<AuditEntry>> {
        self.audit.read().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn audit_mut(&self) -> RwLockWriteGuard<'_, Vec<AuditEntry>> {
        self.audit.write().unwrap_or_else(|e| e.into_inner())
    }
}
