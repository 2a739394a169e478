//! Design-token paths.
//!
//! This module provides:
//!
//! - [`flatten`]: collapses a nested token object into a single-level map
//! - [`join_path`]: the dash-joining rule shared by every generated name
//! - [`DEFAULT_KEY`]: the reserved key that names a token's own value
//!
//! Token paths become CSS custom-property and utility names, so the
//! joining rules here decide the public names a snowball exposes.

mod flatten;

pub use flatten::{flatten, join_path, DEFAULT_KEY};
