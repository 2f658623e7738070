//! CPU scheduling simulation engine.
//!
//! Simulates classical single-core scheduling algorithms — FCFS, SJF, SRTF,
//! and Round Robin — over a fixed set of processes, producing the exact
//! execution timeline (including idle intervals) and per-process completion,
//! turnaround, and waiting times with their averages. Built for interactive
//! exploration of scheduler behavior; rendering, input collection, and
//! transport are the caller's business.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessRecord`, `ExecutionBlock`,
//!   `Timeline`, `ProcessResult`
//! - **`policies`**: The four ready-queue policies behind one
//!   `SchedulingPolicy` trait, plus the `Algorithm` selector
//! - **`engine`**: The discrete-event loop driving a policy over a request
//! - **`metrics`**: Timeline-derived statistics
//! - **`validation`**: Fail-fast input checks
//!
//! # Example
//!
//! ```
//! use cpu_sched::{simulate, Algorithm, ProcessRecord, SimulationRequest};
//!
//! let request = SimulationRequest::new(
//!     vec![
//!         ProcessRecord::new(1, 0, 5),
//!         ProcessRecord::new(2, 1, 3),
//!         ProcessRecord::new(3, 2, 8),
//!     ],
//!     Algorithm::Fcfs,
//! );
//!
//! let result = simulate(&request).unwrap();
//! assert_eq!(result.timeline.len(), 3);
//! assert_eq!(result.processes[2].completion_time, 16);
//! ```
//!
//! # Guarantees
//!
//! The timeline covers `[0, lastCompletion]` with contiguous, non-empty
//! blocks; waiting times are never negative; results are reported in input
//! order. A request either yields a complete [`SimulationResult`] or a
//! [`SimulationError`] — never a partial timeline. Each call allocates its
//! own state, so simulations may run on parallel threads freely.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2022), "Modern Operating Systems", Ch. 2.4

pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
pub mod policies;
pub mod validation;

pub use engine::{simulate, SimulationRequest, SimulationResult};
pub use error::SimulationError;
pub use metrics::MetricsReport;
pub use models::{
    BlockOwner, ExecutionBlock, Pid, ProcessRecord, ProcessResult, Time, Timeline,
};
pub use policies::{Algorithm, SchedulingPolicy};
