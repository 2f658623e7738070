//! Ready-queue scheduling policies.
//!
//! The four classical single-core policies behind one trait, selected once
//! per request. Each policy is a pure decision function over the current
//! ready set; preemption behavior is declared, not hard-coded into the
//! event loop, so each rule's semantics live in exactly one place.
//!
//! # Selection Convention
//! The ready slice handed to a policy is always in FIFO admission order:
//! by arrival time, then by pid for simultaneous arrivals. Round Robin
//! leans on that ordering directly; the comparison-based policies ignore it.
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2022), "Modern Operating Systems", Ch. 2.4

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Pid, Time};

/// Read-only view of one ready process, as seen by a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Process identifier.
    pub pid: Pid,
    /// Declared arrival time.
    pub arrival_time: Time,
    /// Total burst time from the input record.
    pub burst_time: Time,
    /// Burst time not yet executed.
    pub remaining: Time,
}

/// When the event loop may take the CPU away from the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preemption {
    /// Never: the selected process runs its full remaining burst.
    RunToCompletion,
    /// Re-evaluate the policy at every arrival event.
    OnArrival,
    /// Preempt only when the quantum expires.
    QuantumExpiry(Time),
}

/// A ready-queue scheduling policy.
///
/// `select_next` must be a pure function of its arguments: the event loop
/// owns all mutable state (ready queue, remaining bursts, clock).
pub trait SchedulingPolicy {
    /// Policy name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Declared preemption behavior, driven by the event loop.
    fn preemption(&self) -> Preemption;

    /// Picks the process to run next from the ready set.
    ///
    /// `ready` is in FIFO admission order. Returns `None` only for an
    /// empty ready set.
    fn select_next(&self, ready: &[Candidate], now: Time) -> Option<Pid>;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

// ======================== Non-preemptive policies ========================

/// First Come First Served.
///
/// Runs the earliest-arriving ready process to completion.
/// Ties on arrival go to the lower pid.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn preemption(&self) -> Preemption {
        Preemption::RunToCompletion
    }

    fn select_next(&self, ready: &[Candidate], _now: Time) -> Option<Pid> {
        ready
            .iter()
            .min_by_key(|c| (c.arrival_time, c.pid))
            .map(|c| c.pid)
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest Job First (non-preemptive).
///
/// Runs the ready process with the smallest total burst to completion.
/// Later arrivals never interrupt a running process, even when shorter.
/// Ties go to earlier arrival, then lower pid.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn preemption(&self) -> Preemption {
        Preemption::RunToCompletion
    }

    fn select_next(&self, ready: &[Candidate], _now: Time) -> Option<Pid> {
        ready
            .iter()
            .min_by_key(|c| (c.burst_time, c.arrival_time, c.pid))
            .map(|c| c.pid)
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

// ======================== Preemptive policies ========================

/// Shortest Remaining Time First.
///
/// The preemptive variant of SJF: re-evaluated at every arrival event, so
/// a newcomer with strictly smaller remaining burst takes the CPU
/// immediately. Ties go to earlier arrival, then lower pid.
#[derive(Debug, Clone, Copy)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn preemption(&self) -> Preemption {
        Preemption::OnArrival
    }

    fn select_next(&self, ready: &[Candidate], _now: Time) -> Option<Pid> {
        ready
            .iter()
            .min_by_key(|c| (c.remaining, c.arrival_time, c.pid))
            .map(|c| c.pid)
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Round Robin.
///
/// Takes the head of the FIFO ready queue for `min(quantum, remaining)`
/// ticks. The event loop re-enqueues an unfinished process at the tail,
/// after any processes that arrived during its slice; arrivals strictly
/// inside a slice never interrupt it.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Maximum contiguous slice granted before mandatory preemption.
    pub quantum: Time,
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn preemption(&self) -> Preemption {
        Preemption::QuantumExpiry(self.quantum)
    }

    fn select_next(&self, ready: &[Candidate], _now: Time) -> Option<Pid> {
        ready.first().map(|c| c.pid)
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

// ======================== Algorithm selector ========================

/// Algorithm identifier, as named on the request wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First Come First Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First.
    Srtf,
    /// Round Robin; requires a positive `timeQuantum`.
    #[serde(rename = "rr")]
    RoundRobin,
}

impl Algorithm {
    /// Instantiates the policy for this algorithm.
    ///
    /// `time_quantum` is required and must be positive for Round Robin;
    /// the other algorithms ignore it.
    pub fn policy(
        self,
        time_quantum: Option<Time>,
    ) -> Result<Box<dyn SchedulingPolicy>, SimulationError> {
        match self {
            Algorithm::Fcfs => Ok(Box::new(Fcfs)),
            Algorithm::Sjf => Ok(Box::new(Sjf)),
            Algorithm::Srtf => Ok(Box::new(Srtf)),
            Algorithm::RoundRobin => match time_quantum {
                Some(quantum) if quantum > 0 => Ok(Box::new(RoundRobin { quantum })),
                _ => Err(SimulationError::invalid_parameter(
                    "round robin requires a positive integer timeQuantum",
                )),
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobin => "RR",
        };
        f.write_str(name)
    }
}
