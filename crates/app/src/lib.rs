//! Application state and intent surface.
//!
//! [`App`] owns the store, the view parameters (query, sort, page) and the
//! edit session, and exposes one method per user intent. Derived views are
//! recomputed on demand from the owning state; nothing is cached mutably.

pub mod app;
pub mod debounce;
pub mod seed;
pub mod session;

pub use app::{App, DEFAULT_PAGE_SIZE, SEARCH_QUIESCENCE};
pub use debounce::Debounce;
pub use session::EditSession;
