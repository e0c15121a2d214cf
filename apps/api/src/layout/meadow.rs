//! Meadow layout generator: turns an element count into positioned elements.
//!
//! # Stability
//! Each descriptor is a pure function of its index. Growing or shrinking the
//! count only adds or removes elements; survivors keep their exact geometry.
//! Past the render cap the visible set is always indices `0..cap`.
//!
//! # Ordering
//! Output is sorted by `y` ascending (back to front) because the renderer
//! draws in sequence order.

use serde::{Deserialize, Serialize};

use crate::layout::field::FieldConfig;
use crate::layout::prf::{seeded_random, ROTATION_OFFSET, Y_OFFSET};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Placement of one meadow element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    pub index: u32,
    /// Horizontal position, percent of field width.
    pub x: f64,
    /// Vertical position, percent of field height. Also the depth proxy.
    pub y: f64,
    pub scale: f64,
    pub rotation_deg: f64,
    pub z_index: u32,
    /// Entrance animation stagger. Not part of the positional contract.
    pub delay_ms: u32,
}

/// A generated meadow plus the counts needed for the overflow notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeadowLayout {
    /// True element count, uncapped.
    pub element_count: u64,
    /// Number of elements materialized: `min(element_count, cap)`.
    pub display_count: usize,
    /// `element_count - display_count`.
    pub overflow_count: u64,
    /// Back to front.
    pub elements: Vec<ElementDescriptor>,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Computes the descriptor for a single index.
pub fn describe_element(index: u32, config: &FieldConfig) -> ElementDescriptor {
    let seed = u64::from(index);
    let r_x = seeded_random(seed);
    let r_y = seeded_random(seed + Y_OFFSET);
    let r_rot = seeded_random(seed + ROTATION_OFFSET);

    let y = config.y_at(r_y);

    ElementDescriptor {
        index,
        x: config.x_at(r_x),
        y,
        scale: config.scale_at(y),
        rotation_deg: config.rotation_at(r_rot),
        z_index: config.z_index_at(y),
        delay_ms: config.delay_at(index),
    }
}

/// Generates the meadow for `element_count` elements, materializing at most
/// `config.render_cap` of them.
pub fn generate_meadow(element_count: u64, config: &FieldConfig) -> MeadowLayout {
    let display_count = element_count.min(config.render_cap as u64) as usize;

    let mut elements: Vec<ElementDescriptor> = (0..display_count as u32)
        .map(|i| describe_element(i, config))
        .collect();
    // Stable sort: equal depths keep index order.
    elements.sort_by(|a, b| a.y.total_cmp(&b.y));

    MeadowLayout {
        element_count,
        display_count,
        overflow_count: element_count - display_count as u64,
        elements,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
