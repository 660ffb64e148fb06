//! Master Server Library
//!
//! A minimal audio "mastering" service: accepts WAV uploads over multipart,
//! publishes a byte-identical mastered copy under a generated name, and
//! serves it back for download.
//!
//! The server binary is in main.rs; the modules are exposed here so the
//! integration tests can assemble the router against temporary directories.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod storage;
