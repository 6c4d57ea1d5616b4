//! Service implementations
//!
//! Production implementations of the roster and clock seams, plus the file
//! loaders and export adapters that sit at the edge of the engine.

pub mod clock;
pub mod export;
pub mod roster;
pub mod seed;

pub use clock::SystemClock;
pub use export::{EmailMessage, ExportConfig, ExportRow};
pub use roster::InMemoryRoster;
pub use seed::{load_annotation_seed, parse_annotation_seed};
