//! Core systems for pagekit.
//!
//! This crate provides the observer plumbing the paginator is built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Property System**: Value cells with change detection
//! - **Logging**: `tracing` target names used across the workspace
//!
//! # Example
//!
//! ```
//! use pagekit_core::{Property, Signal};
//!
//! let index = Property::new(0usize);
//! let index_changed = Signal::<usize>::new();
//!
//! let _guard = index_changed.connect_scoped(|i| println!("index is now {i}"));
//!
//! if index.set(1) {
//!     index_changed.emit(1);
//! }
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use property::{Property, ReadOnlyProperty};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
