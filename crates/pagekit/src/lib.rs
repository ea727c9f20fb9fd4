//! Client-side pagination for in-memory listings.
//!
//! pagekit slices a shared collection into fixed-size pages, tracks which
//! page is current, and notifies a rendering layer whenever the visible page
//! changes. It has no opinion on how pages are drawn: renderers subscribe to
//! [`ViewUpdate`]s and wire their controls to the [`PageNavigator`] carried
//! by every [`ViewContext`].
//!
//! # Overview
//!
//! - [`Paginator`] - the state machine (Empty / Populated at some index)
//! - [`ViewContext`] - snapshot of the current page, page indexes and source
//! - [`ViewUpdate`] - `Render(context)` or `Clear`, published on every change
//! - [`PageNavigator`] - weak next/back/jump handle for rendered controls
//! - [`PaginatorConfig`] - page size, loadable from TOML
//! - [`page`] - the underlying page arithmetic
//!
//! # Example
//!
//! ```
//! use pagekit::{Paginator, ViewUpdate};
//!
//! let paginator = Paginator::new();
//! let _guard = paginator.subscribe(|update: &ViewUpdate<String>| {
//!     if let Some(context) = update.context() {
//!         for item in context.current_page() {
//!             println!("{item}");
//!         }
//!     }
//! });
//!
//! let products: Vec<String> = (1..=30).map(|n| format!("product #{n}")).collect();
//! paginator.set_source(Some(products.into()));
//!
//! let view = paginator.current_view().unwrap();
//! assert_eq!(view.page_indexes(), &[0, 1]);
//! assert_eq!(view.current_page().len(), 24);
//!
//! view.navigator().next();
//! assert_eq!(paginator.current_view().unwrap().current_page().len(), 6);
//! ```

mod config;
mod context;
mod error;
pub mod page;
mod paginator;

pub use config::{DEFAULT_PAGE_SIZE, PaginatorConfig};
pub use context::{PageNavigator, ViewContext, ViewUpdate};
pub use error::{Error, Result};
pub use paginator::Paginator;

pub use pagekit_core::{ConnectionGuard, ConnectionId, Signal};
