use std::env;
use std::path::PathBuf;

use leavedesk_application::AggregationMode;
use leavedesk_core::{AppError, AppResult};
use leavedesk_domain::RolePriority;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct InspectorConfig {
    pub profile_path: PathBuf,
    pub aggregation: AggregationMode,
    pub priority: RolePriority,
    pub pretty: bool,
}

impl InspectorConfig {
    pub fn load() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let profile_path = lookup("LEAVEDESK_PROFILE_PATH")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| AppError::Validation("LEAVEDESK_PROFILE_PATH is required".to_owned()))?;

        let aggregation = match lookup("LEAVEDESK_AGGREGATION")
            .unwrap_or_else(|| "acting".to_owned())
            .trim()
        {
            "acting" => AggregationMode::ActingRole,
            "all" => AggregationMode::AllHeldRoles,
            other => {
                return Err(AppError::Validation(format!(
                    "LEAVEDESK_AGGREGATION must be either 'acting' or 'all', got '{other}'"
                )));
            }
        };

        let priority = lookup("LEAVEDESK_ROLE_PRIORITY")
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                RolePriority::parse_list(value.as_str()).map_err(|error| {
                    AppError::Validation(format!("invalid LEAVEDESK_ROLE_PRIORITY: {error}"))
                })
            })
            .transpose()?
            .unwrap_or_default();

        let pretty = lookup("LEAVEDESK_PRETTY")
            .unwrap_or_else(|| "true".to_owned())
            .eq_ignore_ascii_case("true");

        Ok(Self {
            profile_path,
            aggregation,
            priority,
            pretty,
        })
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
