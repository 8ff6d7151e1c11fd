//! Probe configuration file support.
//!
//! The probe reads an optional JSON file selecting the log level, the adapter
//! and the properties applied to created states. Missing fields use defaults.

use std::path::Path;

use cstates_gpu::{GpuConfig, StateConfig};
use serde::{Deserialize, Serialize};

use crate::error::ProbeError;

/// Log level setting for the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Adapter power preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PowerPreference {
    #[default]
    None,
    LowPower,
    HighPerformance,
}

impl From<PowerPreference> for wgpu::PowerPreference {
    fn from(pref: PowerPreference) -> Self {
        match pref {
            PowerPreference::None => wgpu::PowerPreference::None,
            PowerPreference::LowPower => wgpu::PowerPreference::LowPower,
            PowerPreference::HighPerformance => wgpu::PowerPreference::HighPerformance,
        }
    }
}

/// Probe configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub log_level: LogLevel,
    pub power_preference: PowerPreference,
    /// Use the software fallback adapter.
    pub force_fallback_adapter: bool,
    /// Request no optional device features.
    pub minimal_features: bool,
    /// Sample count for multisampled rasterizer states.
    pub sample_count: u32,
    /// Label prefix for created GPU objects.
    pub label: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            power_preference: PowerPreference::default(),
            force_fallback_adapter: false,
            minimal_features: false,
            sample_count: 1,
            label: Some("cstates-probe".to_string()),
        }
    }
}

impl ProbeConfig {
    /// Deserialize a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ProbeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProbeError> {
        let path = path.as_ref();
        log::debug!("Loading probe config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn gpu_config(&self) -> GpuConfig {
        let config = if self.minimal_features {
            GpuConfig::minimal()
        } else {
            GpuConfig::default()
        };

        config
            .with_power_preference(self.power_preference.into())
            .with_fallback_adapter(self.force_fallback_adapter)
    }

    pub fn state_config(&self) -> StateConfig {
        let config = StateConfig::default().with_sample_count(self.sample_count);
        match &self.label {
            Some(label) => config.with_label(label.clone()),
            None => config,
        }
    }
}
