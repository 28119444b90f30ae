//! Fluency Store
//!
//! In-memory collaborators feeding the learning path engine.
//!
//! # Overview
//!
//! - **ProgressStore**: per (student, category) progress with upsert semantics
//! - **StudentRegistry**: students by id
//! - **CategoryCatalog** / **GameCatalog**: seeded, immutable catalogs
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use fluency_core::StudentId;
//! use fluency_store::{ProgressStore, ProgressUpdate};
//!
//! let store = ProgressStore::new();
//! let update = ProgressUpdate::new("student-1", "add-doubles").with_accuracy(72);
//! store.upsert(&update, Utc::now()).unwrap();
//! store.upsert(&update.clone().with_accuracy(80), Utc::now()).unwrap();
//!
//! let records = store.progress_for(&StudentId::new("student-1"));
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].accuracy, 80);
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod progress;
pub mod students;

// Re-exports
pub use catalog::{CategoryCatalog, GameCatalog};
pub use error::StoreError;
pub use progress::{ProgressStore, ProgressUpdate};
pub use students::StudentRegistry;

/// Id of the seeded demo student
pub const DEMO_STUDENT_ID: &str = "student-1";

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
