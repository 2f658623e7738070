//! Process (workload) model.
//!
//! A process is the unit of work handed to the scheduler: it becomes ready
//! at its arrival time and requires its full burst time on the CPU.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3

use serde::{Deserialize, Serialize};

use super::{Pid, Time};

/// An input process to be scheduled.
///
/// Immutable once constructed; the engine tracks remaining burst in its own
/// per-run state and never mutates the record.
///
/// # Invariants
/// `pid` is positive and unique within one request; `burst_time > 0`.
/// Both are enforced by [`crate::validation::validate_request`] before any
/// simulation step runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRecord {
    /// Unique process identifier.
    pub pid: Pid,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Time,
    /// Total CPU time the process requires.
    pub burst_time: Time,
}

impl ProcessRecord {
    /// Creates a new process record.
    pub fn new(pid: Pid, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
        }
    }
}

/// Per-process outcome of a simulation.
///
/// Echoes the input fields alongside the derived statistics so a caller can
/// render a result table without joining back to the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time from the input record.
    pub arrival_time: Time,
    /// Burst time from the input record.
    pub burst_time: Time,
    /// Tick at which the last unit of the burst finished.
    pub completion_time: Time,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Time,
    /// `turnaround_time - burst_time`: time spent ready but not running.
    pub waiting_time: Time,
}

impl ProcessResult {
    /// Derives the result for one record from its completion time.
    ///
    /// Callers must guarantee `completion_time >= arrival_time + burst_time`;
    /// every timeline produced by the engine satisfies this.
    pub fn from_completion(record: &ProcessRecord, completion_time: Time) -> Self {
        let turnaround_time = completion_time - record.arrival_time;
        Self {
            pid: record.pid,
            arrival_time: record.arrival_time,
            burst_time: record.burst_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - record.burst_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_derivation() {
        let record = ProcessRecord::new(2, 1, 3);
        let result = ProcessResult::from_completion(&record, 8);
        assert_eq!(result.completion_time, 8);
        assert_eq!(result.turnaround_time, 7);
        assert_eq!(result.waiting_time, 4);
    }

    #[test]
    fn test_record_wire_names() {
        let record = ProcessRecord::new(1, 0, 5);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["pid"], 1);
        assert_eq!(json["arrivalTime"], 0);
        assert_eq!(json["burstTime"], 5);
    }
}
