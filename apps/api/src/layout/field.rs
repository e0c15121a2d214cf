//! Geometry of the meadow field.
//!
//! Positions are percentages of the field's width and height. Vertical
//! position doubles as depth: smaller `y` is further away.

use serde::{Deserialize, Serialize};

/// Layout parameters for the meadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Horizontal band, percent of width. Keeps elements off the edges.
    pub x_min_pct: f64,
    pub x_max_pct: f64,
    /// Vertical (depth) band, percent of height.
    pub y_min_pct: f64,
    pub y_max_pct: f64,
    /// Scale at `y = 0` and `y = 100`; interpolated linearly in between.
    pub min_scale: f64,
    pub max_scale: f64,
    /// Rotation is drawn from `[-max_rotation_deg, +max_rotation_deg)`.
    pub max_rotation_deg: f64,
    /// `z_index = floor(y * z_per_pct)`.
    pub z_per_pct: f64,
    pub delay_step_ms: u32,
    pub delay_cap_ms: u32,
    /// Maximum number of elements materialized.
    pub render_cap: usize,
}

/// Returns the standard meadow config.
///
/// x in 2–98%, y in 5–95%, scale 0.4 (back) to 1.1 (front), ±15° tilt,
/// 5ms entrance stagger capped at 1s, at most 1000 elements.
pub fn default_field_config() -> FieldConfig {
    FieldConfig {
        x_min_pct: 2.0,
        x_max_pct: 98.0,
        y_min_pct: 5.0,
        y_max_pct: 95.0,
        min_scale: 0.4,
        max_scale: 1.1,
        max_rotation_deg: 15.0,
        z_per_pct: 10.0,
        delay_step_ms: 5,
        delay_cap_ms: 1000,
        render_cap: 1000,
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        default_field_config()
    }
}

impl FieldConfig {
    pub fn x_at(&self, r: f64) -> f64 {
        self.x_min_pct + r * (self.x_max_pct - self.x_min_pct)
    }

    pub fn y_at(&self, r: f64) -> f64 {
        self.y_min_pct + r * (self.y_max_pct - self.y_min_pct)
    }

    /// Scale depends on depth only and never decreases as `y` grows.
    pub fn scale_at(&self, y: f64) -> f64 {
        self.min_scale + (y / 100.0) * (self.max_scale - self.min_scale)
    }

    pub fn rotation_at(&self, r: f64) -> f64 {
        (r - 0.5) * 2.0 * self.max_rotation_deg
    }

    pub fn z_index_at(&self, y: f64) -> u32 {
        (y * self.z_per_pct).floor() as u32
    }

    pub fn delay_at(&self, index: u32) -> u32 {
        index
            .saturating_mul(self.delay_step_ms)
            .min(self.delay_cap_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_field_config_sanity() {
        let config = default_field_config();
        assert_eq!(config.render_cap, 1000);
        assert!(config.x_min_pct > 0.0 && config.x_max_pct < 100.0);
        assert!(config.min_scale < config.max_scale);
    }

    #[test]
    fn test_bands_map_unit_interval() {
        let config = default_field_config();
        assert_eq!(config.x_at(0.0), 2.0);
        assert_eq!(config.x_at(1.0), 98.0);
        assert_eq!(config.y_at(0.0), 5.0);
        assert_eq!(config.y_at(1.0), 95.0);
        assert_eq!(config.rotation_at(0.0), -15.0);
        assert_eq!(config.rotation_at(0.5), 0.0);
    }

    #[test]
    fn test_scale_matches_depth_formula() {
        let config = default_field_config();
        assert!((config.scale_at(0.0) - 0.4).abs() < 1e-12);
        assert!((config.scale_at(100.0) - 1.1).abs() < 1e-12);
        assert!((config.scale_at(50.0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_z_index_floors() {
        let config = default_field_config();
        assert_eq!(config.z_index_at(5.0), 50);
        assert_eq!(config.z_index_at(47.39), 473);
    }

    #[test]
    fn test_delay_caps() {
        let config = default_field_config();
        assert_eq!(config.delay_at(0), 0);
        assert_eq!(config.delay_at(10), 50);
        assert_eq!(config.delay_at(200), 1000);
        assert_eq!(config.delay_at(999), 1000);
        assert_eq!(config.delay_at(u32::MAX), 1000);
    }
}
