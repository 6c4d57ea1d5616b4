//! Shared types for the voter canvassing workspace
//!
//! Contains the roster vocabulary (datasets, voter records) and the typed
//! annotation values field workers attach to voters. Engine logic lives in
//! the `canvass` crate; this crate only defines what is passed around.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
