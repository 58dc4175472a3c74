// Imports
use serde::{Deserialize, Serialize};

/// Tolerances used by geometric queries that depend on floating point comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "geometry_config")]
pub struct GeometryConfig {
    /// The allowed deviation from length 1.0 when checking unit vectors.
    #[serde(rename = "unit_length_tolerance")]
    pub unit_length_tolerance: f64,
    /// The accuracy when flattening curves into line segments.
    #[serde(rename = "flatten_tolerance")]
    pub flatten_tolerance: f64,
    /// The allowed deviation from 90 degrees for classifying a triangle as right.
    #[serde(rename = "right_angle_tolerance_deg")]
    pub right_angle_tolerance_deg: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            unit_length_tolerance: 1e-3,
            flatten_tolerance: 0.25,
            right_angle_tolerance_deg: 1e-6,
        }
    }
}

impl GeometryConfig {
    /// Load the config from a Json string, missing fields fall back to their defaults.
    pub fn load_from_json_str(json: &str) -> anyhow::Result<Self> {
        let config = serde_json::from_str::<Self>(json)?;
        if !(config.flatten_tolerance > 0.0) {
            return Err(anyhow::anyhow!(
                "Loading geometry config failed, flatten tolerance must be positive but is `{}`",
                config.flatten_tolerance
            ));
        }
        Ok(config)
    }
}
