//! State Management
//!
//! Global dashboard state and the request lifecycle that feeds it.

pub mod fetch;
pub mod global;

pub use global::{provide_global_state, use_global_state, GlobalState};
