//! Common test utilities and infrastructure
//!
//! Shared fixtures and helpers used across the canvass test suites.

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items for convenience
#[allow(unused_imports)]
pub use fixtures::TestFixtures;
#[allow(unused_imports)]
pub use helpers::{CanvassBuilder, TestCanvass, TestHelpers};
