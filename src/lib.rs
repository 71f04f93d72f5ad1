//! Front-desk booking tool: an in-memory reservation engine with a
//! no-double-booking guarantee over closed date intervals, persisted to
//! flat CSV files behind a pluggable payment seam.

pub mod engine;
pub mod menu;
pub mod model;
pub mod payment;
pub mod store;
