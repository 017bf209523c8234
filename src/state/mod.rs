//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `nav`, `forms`) so individual
//! screens can depend on small focused models. Every module is plain
//! non-reactive Rust; the app root wraps the stores in signals and
//! provides them via context.

pub mod forms;
pub mod nav;
pub mod session;
