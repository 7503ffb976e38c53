//! Background Tasks Module
//!
//! Periodic maintenance work running alongside the request flow.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
