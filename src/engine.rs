//! Discrete-event simulation engine.
//!
//! # Algorithm
//!
//! 1. Validate the request; build the policy for the selected algorithm.
//! 2. Advance an integer clock from t=0, admitting processes into the ready
//!    queue as their arrival times are reached (arrival order, then pid).
//! 3. When nothing is ready, emit one idle block jumping straight to the
//!    next arrival.
//! 4. Otherwise dispatch the policy's pick for a slice whose length is set
//!    by the policy's preemption mode, and record it on the timeline.
//! 5. Repeat until every remaining burst reaches zero, then derive metrics.
//!
//! Termination is structural: every dispatched slice is at least one tick
//! and strictly shrinks a remaining burst, and every idle step jumps to a
//! strictly later arrival.
//!
//! # Complexity
//! O(s * n) where s = dispatched slices and n = processes; s is bounded by
//! total burst for the preemptive policies and by n for the rest.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::SimulationError;
use crate::metrics::MetricsReport;
use crate::models::{BlockOwner, ExecutionBlock, ProcessRecord, ProcessResult, Time, Timeline};
use crate::policies::{Algorithm, Candidate, Preemption, SchedulingPolicy};
use crate::validation;

/// Input container for one simulation run.
///
/// Field names follow the JSON request contract (`arrivalTime`,
/// `timeQuantum`, algorithm identifiers `"fcfs" | "sjf" | "srtf" | "rr"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<ProcessRecord>,
    /// Scheduling algorithm to apply.
    pub algorithm: Algorithm,
    /// Round Robin quantum; ignored by the other algorithms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<Time>,
}

impl SimulationRequest {
    /// Creates a request with no quantum.
    pub fn new(processes: Vec<ProcessRecord>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            time_quantum: None,
        }
    }

    /// Sets the Round Robin time quantum.
    pub fn with_time_quantum(mut self, quantum: Time) -> Self {
        self.time_quantum = Some(quantum);
        self
    }
}

/// Complete outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Chronological execution record covering `[0, makespan]` with no gaps.
    pub timeline: Timeline,
    /// Per-process results, in input order.
    pub processes: Vec<ProcessResult>,
    /// Mean waiting time over all input processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over all input processes.
    pub avg_turnaround_time: f64,
}

/// Mutable per-run process state. Input records stay untouched.
struct ProcState {
    record: ProcessRecord,
    remaining: Time,
}

/// Runs one simulation request to completion.
///
/// Fresh state is allocated per call and nothing is shared across
/// invocations, so concurrent simulations are independent.
///
/// # Errors
/// [`SimulationError`] when validation rejects the request; no partial
/// timeline is ever produced.
///
/// # Example
/// ```
/// use cpu_sched::{simulate, Algorithm, ProcessRecord, SimulationRequest};
///
/// let request = SimulationRequest::new(
///     vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(2, 1, 3)],
///     Algorithm::Fcfs,
/// );
/// let result = simulate(&request).unwrap();
/// assert_eq!(result.timeline.len(), 2);
/// assert_eq!(result.avg_waiting_time, 2.0);
/// ```
pub fn simulate(request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
    validation::validate_request(request)?;
    let policy = request.algorithm.policy(request.time_quantum)?;

    debug!(
        algorithm = %request.algorithm,
        processes = request.processes.len(),
        "simulation start"
    );

    let mut procs: Vec<ProcState> = request
        .processes
        .iter()
        .map(|record| ProcState {
            record: record.clone(),
            remaining: record.burst_time,
        })
        .collect();

    // Admission order: arrival time, then pid for simultaneous arrivals.
    let mut arrival_order: Vec<usize> = (0..procs.len()).collect();
    arrival_order.sort_by_key(|&i| (procs[i].record.arrival_time, procs[i].record.pid));

    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut timeline = Timeline::new();
    let mut cursor = 0usize;
    let mut clock: Time = 0;
    let mut completed = 0usize;

    while completed < procs.len() {
        admit(&mut ready, &procs, &arrival_order, &mut cursor, clock);

        if ready.is_empty() {
            // Everything left is in the future; jump to the next arrival.
            let next = procs[arrival_order[cursor]].record.arrival_time;
            trace!(from = clock, to = next, "cpu idle");
            timeline.push(ExecutionBlock::idle(clock, next));
            clock = next;
            continue;
        }

        let candidates: Vec<Candidate> = ready
            .iter()
            .map(|&i| Candidate {
                pid: procs[i].record.pid,
                arrival_time: procs[i].record.arrival_time,
                burst_time: procs[i].record.burst_time,
                remaining: procs[i].remaining,
            })
            .collect();
        let pid = policy
            .select_next(&candidates, clock)
            .expect("non-empty ready queue must yield a selection");
        let pos = ready
            .iter()
            .position(|&i| procs[i].record.pid == pid)
            .expect("policy selected a pid outside the ready queue");
        let idx = ready[pos];

        match policy.preemption() {
            Preemption::RunToCompletion => {
                ready.remove(pos);
                let start = clock;
                clock += procs[idx].remaining;
                procs[idx].remaining = 0;
                timeline.extend_or_push(BlockOwner::Process(pid), start, clock);
                completed += 1;
                debug!(pid, completion = clock, "process completed");
            }
            Preemption::OnArrival => {
                // Run until completion or the next arrival, whichever is
                // sooner; contiguous slices of one process merge into a
                // single block.
                let run_until = clock + procs[idx].remaining;
                let horizon = match next_arrival(&procs, &arrival_order, cursor) {
                    Some(t) if t < run_until => t,
                    _ => run_until,
                };
                trace!(pid, from = clock, to = horizon, "dispatch");
                procs[idx].remaining -= horizon - clock;
                timeline.extend_or_push(BlockOwner::Process(pid), clock, horizon);
                clock = horizon;
                if procs[idx].remaining == 0 {
                    ready.remove(pos);
                    completed += 1;
                    debug!(pid, completion = clock, "process completed");
                }
            }
            Preemption::QuantumExpiry(quantum) => {
                ready.remove(pos);
                let slice = quantum.min(procs[idx].remaining);
                trace!(pid, from = clock, to = clock + slice, "dispatch");
                procs[idx].remaining -= slice;
                timeline.push(ExecutionBlock::process(pid, clock, clock + slice));
                clock += slice;
                // Arrivals during the slice (boundary included) enter the
                // queue ahead of the preempted process.
                admit(&mut ready, &procs, &arrival_order, &mut cursor, clock);
                if procs[idx].remaining == 0 {
                    completed += 1;
                    debug!(pid, completion = clock, "process completed");
                } else {
                    ready.push_back(idx);
                }
            }
        }
    }

    let report = MetricsReport::calculate(&timeline, &request.processes)?;
    debug!(makespan = timeline.makespan(), "simulation finished");

    Ok(SimulationResult {
        timeline,
        processes: report.processes,
        avg_waiting_time: report.avg_waiting_time,
        avg_turnaround_time: report.avg_turnaround_time,
    })
}

fn admit(
    ready: &mut VecDeque<usize>,
    procs: &[ProcState],
    arrival_order: &[usize],
    cursor: &mut usize,
    now: Time,
) {
    while *cursor < arrival_order.len()
        && procs[arrival_order[*cursor]].record.arrival_time <= now
    {
        ready.push_back(arrival_order[*cursor]);
        *cursor += 1;
    }
}

fn next_arrival(procs: &[ProcState], arrival_order: &[usize], cursor: usize) -> Option<Time> {
    arrival_order
        .get(cursor)
        .map(|&i| procs[i].record.arrival_time)
}
