//! Native Dashboard
//!
//! The dashboard's fetch-and-state contract outside the browser: one
//! controller owns the state, filter changes supersede in-flight requests,
//! and failures leave the last good data in place.

mod controller;
mod snapshot;

pub use controller::DashboardController;
pub use snapshot::DashboardSnapshot;
