//! Artifact storage
//!
//! Filesystem-backed storage for the two artifact areas:
//! - uploads: raw files as submitted, timestamped names
//! - master: published byte-identical copies under generated names
//!
//! There is no database and no in-memory index; the directory contents are
//! the only persistent state.

pub mod naming;
pub mod store;

pub use store::{MasteredFile, MasteringStore};
