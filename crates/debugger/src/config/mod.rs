//! Configuration types
//!
//! - `base`: the [`Config`] struct and its defaults
//! - `presets`: pre-configured setups and environment loading

mod base;
mod presets;

pub use base::Config;
pub use presets::{ENV_SILENT, ENV_TIMESTAMP_FORMAT, ENV_TIMESTAMPS, ENV_VERBOSE};
