//! Simulation domain models.
//!
//! Core data types for describing a scheduling workload and the outcome of
//! simulating it: the immutable process descriptions supplied by the caller,
//! the execution timeline produced by the event loop, and the per-process
//! statistics derived from that timeline.
//!
//! # Time Representation
//! All times are unsigned integer ticks relative to the simulation epoch
//! (t=0). The consumer defines what one tick means (milliseconds, quanta of
//! a teaching exercise, ...); the engine only requires integer granularity.

mod process;
mod timeline;

pub use process::{ProcessRecord, ProcessResult};
pub use timeline::{BlockOwner, ExecutionBlock, Timeline, IDLE_SENTINEL};

/// Process identifier. Unique and positive within one simulation request.
pub type Pid = u32;

/// Simulation time in integer ticks.
pub type Time = u64;
