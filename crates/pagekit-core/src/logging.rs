//! Tracing integration for pagekit.
//!
//! pagekit instruments itself with the `tracing` crate but never installs a
//! subscriber. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // ...
//! }
//! ```
//!
//! The constants below can be used in filter directives, for example
//! `RUST_LOG=pagekit::paginator=trace`.

/// Target names for log filtering.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "pagekit_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "pagekit_core::signal";
    /// Paginator state machine target.
    pub const PAGINATOR: &str = "pagekit::paginator";
    /// Configuration loading target.
    pub const CONFIG: &str = "pagekit::config";
}
