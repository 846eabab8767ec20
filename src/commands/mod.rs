//! Command implementations

mod session;

pub use session::session;
