//! # Jex Store
//!
//! Atomic local JSON snapshot persistence.
//!
//! This crate provides:
//! - [`load`] / [`save`] for one JSON value per file
//! - Atomic writes: the destination is either its prior content or the
//!   complete new content, never partially written
//! - The [`SnapshotStore`] trait for types that own a snapshot location
//!
//! Disk failures use their own [`StoreError`] taxonomy, independent of the
//! network-side errors.
//!
//! ## Example
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("items.json");
//!
//! jex_store::save(&path, &vec![1u32, 2, 3]).unwrap();
//! let items: Vec<u32> = jex_store::load(&path).unwrap();
//! assert_eq!(items, vec![1, 2, 3]);
//! ```

mod error;
mod snapshot;

pub use error::*;
pub use snapshot::*;
