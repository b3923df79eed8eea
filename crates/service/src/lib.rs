//! Service layer for the person registry.
//! - `store`: the process-wide concurrent name -> Person mapping.
//! - `latch`: one-shot gate used by the slow-request harness to signal
//!   that a request is parked mid-flight.

pub mod latch;
pub mod store;

pub use latch::Latch;
pub use store::PersonStore;
