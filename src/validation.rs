//! Input validation for simulation requests.
//!
//! All structural checks run here, before the event loop takes a single
//! step, so a rejected request never produces a partial timeline. Detects:
//! - Empty process lists
//! - Zero pids and non-positive bursts
//! - Duplicate pids
//! - A missing or non-positive quantum for Round Robin

use std::collections::HashSet;

use crate::engine::SimulationRequest;
use crate::error::SimulationError;
use crate::policies::Algorithm;

/// Validates a request, failing fast on the first violation.
///
/// Checks:
/// 1. At least one process is supplied.
/// 2. Every pid is positive.
/// 3. Every burst time is positive.
/// 4. No two processes share a pid.
/// 5. Round Robin carries a positive `time_quantum`.
///
/// A quantum supplied alongside a non-RR algorithm is ignored, matching the
/// request contract.
pub fn validate_request(request: &SimulationRequest) -> Result<(), SimulationError> {
    if request.processes.is_empty() {
        return Err(SimulationError::EmptyInput);
    }

    let mut seen = HashSet::new();
    for process in &request.processes {
        if process.pid == 0 {
            return Err(SimulationError::invalid_process(
                process.pid,
                "pid must be positive",
            ));
        }
        if process.burst_time == 0 {
            return Err(SimulationError::invalid_process(
                process.pid,
                "burst time must be positive",
            ));
        }
        if !seen.insert(process.pid) {
            return Err(SimulationError::invalid_process(
                process.pid,
                "duplicate pid",
            ));
        }
    }

    if request.algorithm == Algorithm::RoundRobin
        && !matches!(request.time_quantum, Some(q) if q > 0)
    {
        return Err(SimulationError::invalid_parameter(
            "round robin requires a positive integer timeQuantum",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessRecord;

    fn request(processes: Vec<ProcessRecord>, algorithm: Algorithm) -> SimulationRequest {
        SimulationRequest::new(processes, algorithm)
    }

    #[test]
    fn test_empty_input() {
        let err = validate_request(&request(vec![], Algorithm::Fcfs)).unwrap_err();
        assert_eq!(err, SimulationError::EmptyInput);
    }

    #[test]
    fn test_zero_burst_rejected() {
        let err = validate_request(&request(
            vec![ProcessRecord::new(1, 0, 3), ProcessRecord::new(2, 1, 0)],
            Algorithm::Fcfs,
        ))
        .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidProcess { pid: 2, .. }));
    }

    #[test]
    fn test_zero_pid_rejected() {
        let err =
            validate_request(&request(vec![ProcessRecord::new(0, 0, 3)], Algorithm::Sjf))
                .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidProcess { pid: 0, .. }));
    }

    #[test]
    fn test_duplicate_pid_rejected() {
        let err = validate_request(&request(
            vec![ProcessRecord::new(1, 0, 3), ProcessRecord::new(1, 2, 5)],
            Algorithm::Srtf,
        ))
        .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidProcess { pid: 1, .. }));
    }

    #[test]
    fn test_round_robin_requires_quantum() {
        let processes = vec![ProcessRecord::new(1, 0, 3)];
        let missing = request(processes.clone(), Algorithm::RoundRobin);
        assert!(matches!(
            validate_request(&missing),
            Err(SimulationError::InvalidParameter { .. })
        ));

        let zero = request(processes.clone(), Algorithm::RoundRobin).with_time_quantum(0);
        assert!(matches!(
            validate_request(&zero),
            Err(SimulationError::InvalidParameter { .. })
        ));

        let ok = request(processes, Algorithm::RoundRobin).with_time_quantum(2);
        assert!(validate_request(&ok).is_ok());
    }

    #[test]
    fn test_quantum_ignored_for_other_algorithms() {
        let req = request(vec![ProcessRecord::new(1, 0, 3)], Algorithm::Fcfs).with_time_quantum(0);
        assert!(validate_request(&req).is_ok());
    }
}
