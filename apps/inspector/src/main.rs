//! LeaveDesk access inspector.
//!
//! Reads a profile payload and prints the navigation shell's access
//! projection as JSON.

#![forbid(unsafe_code)]

mod dto;
mod inspector_config;

use std::fs;
use std::io;
use std::path::Path;

use leavedesk_application::AccessService;
use leavedesk_core::{AppError, AppResult};
use leavedesk_domain::{RawUserProfile, UserProfile};
use serde::Serialize;
use tracing::info;

use crate::dto::{AccessProjectionResponse, RoleOptionResponse};
use crate::inspector_config::{InspectorConfig, init_tracing};

#[derive(Debug, Serialize)]
struct InspectionReport {
    projection: AccessProjectionResponse,
    role_options: Vec<RoleOptionResponse>,
    rejected_roles: Vec<String>,
}

fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = InspectorConfig::load()?;
    info!(
        profile_path = %config.profile_path.display(),
        aggregation = config.aggregation.as_str(),
        "leavedesk-inspector started"
    );

    let payload = read_profile(&config.profile_path)?;
    let report = inspect(payload.as_str(), &config)?;
    let rendered = if config.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .map_err(|error| AppError::Internal(format!("failed to encode report: {error}")))?;

    println!("{rendered}");
    Ok(())
}

fn read_profile(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|error| {
        let message = format!("failed to read profile '{}': {error}", path.display());
        if error.kind() == io::ErrorKind::NotFound {
            AppError::NotFound(message)
        } else {
            AppError::Internal(message)
        }
    })
}

fn inspect(payload: &str, config: &InspectorConfig) -> AppResult<InspectionReport> {
    let raw: RawUserProfile = serde_json::from_str(payload)
        .map_err(|error| AppError::Validation(format!("invalid profile payload: {error}")))?;
    let profile = UserProfile::from_raw(raw)?;

    let service = AccessService::new(config.priority.clone());
    let projection = service.derive(&profile, config.aggregation);

    info!(
        user_id = %profile.identity().id(),
        acting_role = %projection.acting_role,
        tabs = %projection.remount_key,
        "resolved access projection"
    );

    Ok(InspectionReport {
        role_options: RoleOptionResponse::options_for(&profile, projection.acting_role),
        rejected_roles: profile.rejected_roles().to_vec(),
        projection: AccessProjectionResponse::from_projection(&profile, &projection),
    })
}
