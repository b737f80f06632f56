//! Application state, persistence, and interface messages

pub mod localization;
pub mod state;
pub mod store;
