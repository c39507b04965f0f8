//! Curve engine configuration, loaded from TOML.

use crate::models::curve::constants::*;
use crate::models::curve::CurveError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSettings {
    /// Distance between trace points and between equal-distance points.
    #[serde(default = "default_trace_spacing")]
    pub trace_spacing: f64,
    /// Accepted spacing error while bisecting a trace step.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Coarse `t` increment used while probing.
    #[serde(default = "default_probe_step")]
    pub probe_step: f64,
    #[serde(default = "default_max_bisect_iterations")]
    pub max_bisect_iterations: u32,
    #[serde(default = "default_max_trace_steps")]
    pub max_trace_steps: u32,
    /// Worker threads for batch building (0 = available parallelism).
    #[serde(default)]
    pub workers: usize,
}

fn default_trace_spacing() -> f64 {
    DEFAULT_TRACE_SPACING
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_probe_step() -> f64 {
    DEFAULT_PROBE_STEP
}

fn default_max_bisect_iterations() -> u32 {
    DEFAULT_MAX_BISECT_ITERATIONS
}

fn default_max_trace_steps() -> u32 {
    DEFAULT_MAX_TRACE_STEPS
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            trace_spacing: DEFAULT_TRACE_SPACING,
            tolerance: DEFAULT_TOLERANCE,
            probe_step: DEFAULT_PROBE_STEP,
            max_bisect_iterations: DEFAULT_MAX_BISECT_ITERATIONS,
            max_trace_steps: DEFAULT_MAX_TRACE_STEPS,
            workers: 0,
        }
    }
}

impl CurveSettings {
    /// Parses settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, CurveError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| CurveError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, CurveError> {
        if !path.exists() {
            log::info!("SETTINGS: {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CurveError::InvalidSettings(format!("{:?}: {}", path, e)))?;
        Self::from_toml_str(&content).inspect_err(|e| {
            log::error!("Failed to parse TOML file {:?}: {}", path, e);
        })
    }

    pub fn to_toml_string(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| e.to_string())
    }

    pub fn validate(&self) -> Result<(), CurveError> {
        if !self.trace_spacing.is_finite() || self.trace_spacing <= 0.0 {
            return Err(CurveError::InvalidSettings(format!(
                "trace_spacing must be positive, got {}",
                self.trace_spacing
            )));
        }
        if !self.tolerance.is_finite()
            || self.tolerance <= 0.0
            || self.tolerance >= self.trace_spacing
        {
            return Err(CurveError::InvalidSettings(format!(
                "tolerance must be in (0, {}), got {}",
                self.trace_spacing, self.tolerance
            )));
        }
        if !self.probe_step.is_finite() || self.probe_step <= 0.0 || self.probe_step > 1.0 {
            return Err(CurveError::InvalidSettings(format!(
                "probe_step must be in (0, 1], got {}",
                self.probe_step
            )));
        }
        if self.max_bisect_iterations == 0 || self.max_trace_steps == 0 {
            return Err(CurveError::InvalidSettings(
                "iteration caps must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of worker threads to spawn for batch building.
    pub fn worker_count(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(CurveSettings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = CurveSettings::from_toml_str("trace_spacing = 4.0\nworkers = 2\n").unwrap();
        assert_eq!(settings.trace_spacing, 4.0);
        assert_eq!(settings.workers, 2);
        assert_eq!(settings.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(settings.worker_count(), 2);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(CurveSettings::from_toml_str("trace_spacing = 0.0").is_err());
        assert!(CurveSettings::from_toml_str("tolerance = 5.0").is_err());
        assert!(CurveSettings::from_toml_str("probe_step = 1.5").is_err());
        assert!(CurveSettings::from_toml_str("max_bisect_iterations = 0").is_err());
        assert!(CurveSettings::from_toml_str("trace_spacing = \"wide\"").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let settings = CurveSettings {
            trace_spacing: 3.0,
            ..CurveSettings::default()
        };
        let text = settings.to_toml_string().unwrap();
        assert_eq!(CurveSettings::from_toml_str(&text).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = CurveSettings::load(Path::new("does/not/exist/curve.toml")).unwrap();
        assert_eq!(settings, CurveSettings::default());
    }
}
