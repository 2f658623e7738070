//! Scheduling performance metrics.
//!
//! Derives per-process completion, turnaround, and waiting times from a
//! recorded timeline, plus their arithmetic means.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion time | Latest block end owned by the process |
//! | Turnaround time | completion - arrival |
//! | Waiting time | turnaround - burst |
//! | Averages | Arithmetic mean over input processes |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use crate::error::SimulationError;
use crate::models::{ProcessRecord, ProcessResult, Timeline};

/// Per-process results and aggregate means for one simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    /// One result per input record, in input order.
    pub processes: Vec<ProcessResult>,
    /// Mean waiting time over all input processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over all input processes.
    pub avg_turnaround_time: f64,
}

impl MetricsReport {
    /// Computes metrics from a timeline and the records it was built from.
    ///
    /// Completion time of each process is the maximum `end_time` among the
    /// timeline blocks it owns. Averages are taken over the input records,
    /// not over timeline blocks.
    ///
    /// # Errors
    /// `EmptyInput` for zero records. `InvalidProcess` when a record never
    /// appears in the timeline or the timeline credits it with less than
    /// its full burst — both impossible for engine-produced timelines.
    pub fn calculate(
        timeline: &Timeline,
        records: &[ProcessRecord],
    ) -> Result<Self, SimulationError> {
        if records.is_empty() {
            return Err(SimulationError::EmptyInput);
        }

        let mut processes = Vec::with_capacity(records.len());
        let mut total_waiting: f64 = 0.0;
        let mut total_turnaround: f64 = 0.0;

        for record in records {
            let completion = timeline.completion_time_of(record.pid).ok_or_else(|| {
                SimulationError::invalid_process(record.pid, "process never ran in the timeline")
            })?;
            if completion < record.arrival_time + record.burst_time {
                return Err(SimulationError::invalid_process(
                    record.pid,
                    "timeline completes the process before its burst could finish",
                ));
            }

            let result = ProcessResult::from_completion(record, completion);
            total_waiting += result.waiting_time as f64;
            total_turnaround += result.turnaround_time as f64;
            processes.push(result);
        }

        let count = records.len() as f64;
        Ok(Self {
            processes,
            avg_waiting_time: total_waiting / count,
            avg_turnaround_time: total_turnaround / count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionBlock;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_basic_report() {
        let records = vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(2, 1, 3)];
        let mut timeline = Timeline::new();
        timeline.push(ExecutionBlock::process(1, 0, 5));
        timeline.push(ExecutionBlock::process(2, 5, 8));

        let report = MetricsReport::calculate(&timeline, &records).unwrap();
        assert_eq!(report.processes[0].completion_time, 5);
        assert_eq!(report.processes[0].waiting_time, 0);
        assert_eq!(report.processes[1].completion_time, 8);
        assert_eq!(report.processes[1].waiting_time, 4);
        assert!((report.avg_waiting_time - 2.0).abs() < EPS);
        assert!((report.avg_turnaround_time - 6.0).abs() < EPS);
    }

    #[test]
    fn test_completion_uses_last_owned_block() {
        // Preempted process: completion is the end of its final block.
        let records = vec![ProcessRecord::new(1, 0, 4)];
        let mut timeline = Timeline::new();
        timeline.push(ExecutionBlock::process(1, 0, 2));
        timeline.push(ExecutionBlock::process(2, 2, 3));
        timeline.push(ExecutionBlock::process(1, 3, 5));

        let report = MetricsReport::calculate(&timeline, &records).unwrap();
        assert_eq!(report.processes[0].completion_time, 5);
        assert_eq!(report.processes[0].waiting_time, 1);
    }

    #[test]
    fn test_single_process_average_is_its_value() {
        let records = vec![ProcessRecord::new(1, 2, 4)];
        let mut timeline = Timeline::new();
        timeline.push(ExecutionBlock::idle(0, 2));
        timeline.push(ExecutionBlock::process(1, 2, 6));

        let report = MetricsReport::calculate(&timeline, &records).unwrap();
        assert!((report.avg_waiting_time - 0.0).abs() < EPS);
        assert!((report.avg_turnaround_time - 4.0).abs() < EPS);
    }

    #[test]
    fn test_empty_records_rejected() {
        let timeline = Timeline::new();
        assert_eq!(
            MetricsReport::calculate(&timeline, &[]).unwrap_err(),
            SimulationError::EmptyInput
        );
    }

    #[test]
    fn test_record_missing_from_timeline() {
        let records = vec![ProcessRecord::new(1, 0, 2), ProcessRecord::new(2, 0, 2)];
        let mut timeline = Timeline::new();
        timeline.push(ExecutionBlock::process(1, 0, 2));

        let err = MetricsReport::calculate(&timeline, &records).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidProcess { pid: 2, .. }));
    }
}
