//! Data-driven battle content and loaders.
//!
//! This crate houses static content the simulation core treats as opaque
//! configuration, plus the loaders that read it from RON/TOML files:
//! - Card definitions (name, kind, action-point cost, magnitude)
//! - Unit rosters for scenario setup
//! - Battle configuration
//!
//! Content is consumed by the runtime and never appears in battle state.

pub mod cards;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use cards::{CardDefinition, CardKind, CardTarget};

#[cfg(feature = "loaders")]
pub use loaders::{CardCatalog, ConfigLoader, RosterLoader, UnitSpec};
