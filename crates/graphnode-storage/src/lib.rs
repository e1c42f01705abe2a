//! Graphnode Storage - where the immutable store comes from
//!
//! A store is populated exactly once at startup, either from the built-in
//! seed dataset or from a JSON fixture file, and is read-only afterwards.

pub mod error;
pub mod fixture;
pub mod seed;
pub mod traits;

use std::path::Path;

pub use error::{StorageError, StorageResult};
pub use fixture::FixtureFile;
pub use seed::SeedSource;
pub use traits::StoreSource;

/// Pick the fixture file when one is configured, the seed dataset otherwise
pub fn source_for(fixture: Option<&Path>) -> Box<dyn StoreSource> {
    match fixture {
        Some(path) => Box::new(FixtureFile::new(path)),
        None => Box::new(SeedSource::new()),
    }
}
