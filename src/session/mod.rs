//! Per-request session boundary: the acting role, flash messages, the CSRF
//! token and the ids of claims submitted from this browser session.

pub mod csrf;
pub mod middleware;

use actix_session::Session;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::role::{Actor, Capability, Role};

const ROLE_KEY: &str = "role";
const FLASH_KEY: &str = "flash";
const SUBMITTED_KEY: &str = "submitted_claims";

pub fn get_role(session: &Session) -> Option<Role> {
    session
        .get::<String>(ROLE_KEY)
        .unwrap_or(None)
        .and_then(|raw| raw.parse().ok())
}

pub fn set_role(session: &Session, role: Role) -> Result<(), AppError> {
    session.insert(ROLE_KEY, role.as_str())?;
    Ok(())
}

/// Resolve the acting role into an actor. Coordinators are bound to the
/// configured study center.
pub fn get_actor(session: &Session, config: &AppConfig) -> Result<Actor, AppError> {
    let role = get_role(session).ok_or_else(|| AppError::Session("No role in session".to_string()))?;
    Ok(Actor::new(role, config.coordinator_center))
}

/// Check capability; returns Err(AppError) if the role lacks it.
pub fn require_capability(actor: &Actor, capability: Capability) -> Result<(), AppError> {
    if actor.can(capability) {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(capability.code().to_string()))
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

pub fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH_KEY, message) {
        log::warn!("Failed to store flash message: {e}");
    }
}

/// Ids of claims submitted from this session, oldest first.
pub fn submitted_claims(session: &Session) -> Vec<String> {
    session.get::<Vec<String>>(SUBMITTED_KEY).unwrap_or(None).unwrap_or_default()
}

pub fn record_submission(session: &Session, claim_id: &str) -> Result<(), AppError> {
    let mut ids = submitted_claims(session);
    ids.push(claim_id.to_string());
    session.insert(SUBMITTED_KEY, ids)?;
    Ok(())
}
