// Meadow layout: one element per UNIT of the live total, placed
// deterministically from its index and capped at the render limit.
// Pure and allocation-bounded; runs inline on the request task.

pub mod field;
pub mod handlers;
pub mod meadow;
pub mod prf;

// Re-export the public API consumed by handlers and state.
pub use field::{default_field_config, FieldConfig};
pub use meadow::{generate_meadow, MeadowLayout};
