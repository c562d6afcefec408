//! Client configuration

use crate::api::LocalUser;
use crate::drawer::DrawerMode;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Configuration for the workbench client
#[derive(Debug, Clone)]
pub struct WorkbenchConfig {
    /// Base URL of the workbench service (e.g., `http://127.0.0.1:3000`)
    pub base_url: String,
    pub user: LocalUser,
    pub request_timeout: Duration,
    /// Width of an open canvas drawer, in pixels
    pub drawer_width: u32,
    /// Viewports narrower than this show the drawer as an overlay
    pub overlay_breakpoint: u32,
    /// Width of the host viewport, when known
    pub viewport_width: Option<u32>,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            user: LocalUser {
                id: "local-user".to_string(),
                name: "You".to_string(),
            },
            request_timeout: Duration::from_secs(30),
            drawer_width: 400,
            overlay_breakpoint: 900,
            viewport_width: None,
        }
    }
}

impl WorkbenchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            base_url: lookup("WORKBENCH_URL").unwrap_or(defaults.base_url),
            user: LocalUser {
                id: lookup("WORKBENCH_USER_ID").unwrap_or(defaults.user.id),
                name: lookup("WORKBENCH_USER_NAME").unwrap_or(defaults.user.name),
            },
            request_timeout: parse_number(&lookup, "WORKBENCH_TIMEOUT_SECS")?
                .map_or(defaults.request_timeout, Duration::from_secs),
            drawer_width: parse_number(&lookup, "WORKBENCH_DRAWER_WIDTH")?
                .unwrap_or(defaults.drawer_width),
            overlay_breakpoint: parse_number(&lookup, "WORKBENCH_OVERLAY_BREAKPOINT")?
                .unwrap_or(defaults.overlay_breakpoint),
            viewport_width: parse_number(&lookup, "WORKBENCH_VIEWPORT_WIDTH")?,
        })
    }

    /// Drawer mode for the configured viewport; inline when it is unknown
    pub fn drawer_mode(&self) -> DrawerMode {
        self.viewport_width.map_or(DrawerMode::Inline, |width| {
            DrawerMode::for_viewport(width, self.overlay_breakpoint)
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
