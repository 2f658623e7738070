//! Execution timeline model.
//!
//! The timeline is the chronological record of what the CPU did: an ordered
//! sequence of contiguous blocks, each owned by a process or by the idle
//! sentinel. It is the single source of truth for completion times — the
//! metrics aggregator derives everything else from it.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Pid, Time};

/// Wire value marking idle intervals.
///
/// A string, so it can never collide with a numeric pid.
pub const IDLE_SENTINEL: &str = "Idle";

/// Owner of an execution block: a process, or nobody.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOwner {
    /// The block was spent running this process.
    Process(Pid),
    /// The CPU was idle waiting for the next arrival.
    Idle,
}

// Serializes as the bare pid number, or the string "Idle". This matches the
// JSON timeline contract consumed by Gantt-chart frontends.
impl Serialize for BlockOwner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BlockOwner::Process(pid) => serializer.serialize_u32(*pid),
            BlockOwner::Idle => serializer.serialize_str(IDLE_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for BlockOwner {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OwnerVisitor;

        impl Visitor<'_> for OwnerVisitor {
            type Value = BlockOwner;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a process id or the string \"{IDLE_SENTINEL}\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<BlockOwner, E> {
                Pid::try_from(v)
                    .map(BlockOwner::Process)
                    .map_err(|_| E::custom(format!("pid {v} out of range")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<BlockOwner, E> {
                Pid::try_from(v)
                    .map(BlockOwner::Process)
                    .map_err(|_| E::custom(format!("pid {v} out of range")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<BlockOwner, E> {
                if v == IDLE_SENTINEL {
                    Ok(BlockOwner::Idle)
                } else {
                    Err(E::custom(format!(
                        "expected \"{IDLE_SENTINEL}\", got \"{v}\""
                    )))
                }
            }
        }

        deserializer.deserialize_any(OwnerVisitor)
    }
}

impl fmt::Display for BlockOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockOwner::Process(pid) => write!(f, "P{pid}"),
            BlockOwner::Idle => f.write_str(IDLE_SENTINEL),
        }
    }
}

/// One contiguous interval of CPU activity.
///
/// # Invariant
/// `start_time < end_time` — the engine never emits empty blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionBlock {
    /// Owning process, or the idle sentinel.
    pub pid: BlockOwner,
    /// Inclusive start tick.
    pub start_time: Time,
    /// Exclusive end tick.
    pub end_time: Time,
}

impl ExecutionBlock {
    /// Creates a block owned by a process.
    pub fn process(pid: Pid, start_time: Time, end_time: Time) -> Self {
        Self {
            pid: BlockOwner::Process(pid),
            start_time,
            end_time,
        }
    }

    /// Creates an idle block.
    pub fn idle(start_time: Time, end_time: Time) -> Self {
        Self {
            pid: BlockOwner::Idle,
            start_time,
            end_time,
        }
    }

    /// Block duration in ticks.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end_time - self.start_time
    }
}

/// Ordered, gap-free sequence of execution blocks.
///
/// Covers `[0, makespan]` once a simulation finishes: consecutive blocks
/// share a boundary (`block[i].end_time == block[i+1].start_time`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    blocks: Vec<ExecutionBlock>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a block as-is.
    pub fn push(&mut self, block: ExecutionBlock) {
        self.blocks.push(block);
    }

    /// Appends a segment, merging it into the previous block when both are
    /// owned by the same process and share a boundary.
    ///
    /// Preemptive policies that re-select the running process at every
    /// arrival use this to keep uninterrupted runs as a single block.
    pub fn extend_or_push(&mut self, pid: BlockOwner, start_time: Time, end_time: Time) {
        if let Some(last) = self.blocks.last_mut() {
            if last.pid == pid && last.end_time == start_time {
                last.end_time = end_time;
                return;
            }
        }
        self.blocks.push(ExecutionBlock {
            pid,
            start_time,
            end_time,
        });
    }

    /// The recorded blocks, in chronological order.
    pub fn blocks(&self) -> &[ExecutionBlock] {
        &self.blocks
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether no blocks have been recorded.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Completion time of a process: the latest `end_time` over its blocks.
    ///
    /// `None` if the process never appears in the timeline.
    pub fn completion_time_of(&self, pid: Pid) -> Option<Time> {
        self.blocks
            .iter()
            .filter(|b| b.pid == BlockOwner::Process(pid))
            .map(|b| b.end_time)
            .max()
    }

    /// End of the last block, i.e. the completion time of the whole run.
    pub fn makespan(&self) -> Option<Time> {
        self.blocks.last().map(|b| b.end_time)
    }

    /// Whether every block is non-empty and adjacent blocks share a boundary.
    pub fn is_contiguous(&self) -> bool {
        self.blocks.iter().all(|b| b.start_time < b.end_time)
            && self
                .blocks
                .windows(2)
                .all(|w| w[0].end_time == w[1].start_time)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionBlock;
    type IntoIter = std::slice::Iter<'a, ExecutionBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_or_push_merges_same_owner() {
        let mut timeline = Timeline::new();
        timeline.extend_or_push(BlockOwner::Process(1), 0, 3);
        timeline.extend_or_push(BlockOwner::Process(1), 3, 5);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.blocks()[0], ExecutionBlock::process(1, 0, 5));
    }

    #[test]
    fn test_extend_or_push_keeps_distinct_owners() {
        let mut timeline = Timeline::new();
        timeline.extend_or_push(BlockOwner::Process(1), 0, 3);
        timeline.extend_or_push(BlockOwner::Process(2), 3, 5);
        timeline.extend_or_push(BlockOwner::Process(1), 5, 6);
        assert_eq!(timeline.len(), 3);
    }

    #[test]
    fn test_completion_time_is_latest_block_end() {
        let mut timeline = Timeline::new();
        timeline.push(ExecutionBlock::process(1, 0, 2));
        timeline.push(ExecutionBlock::process(2, 2, 4));
        timeline.push(ExecutionBlock::process(1, 4, 7));
        assert_eq!(timeline.completion_time_of(1), Some(7));
        assert_eq!(timeline.completion_time_of(2), Some(4));
        assert_eq!(timeline.completion_time_of(9), None);
        assert_eq!(timeline.makespan(), Some(7));
    }

    #[test]
    fn test_contiguity() {
        let mut timeline = Timeline::new();
        timeline.push(ExecutionBlock::process(1, 0, 2));
        timeline.push(ExecutionBlock::idle(2, 5));
        timeline.push(ExecutionBlock::process(2, 5, 6));
        assert!(timeline.is_contiguous());

        timeline.push(ExecutionBlock::process(3, 7, 8)); // gap at 6..7
        assert!(!timeline.is_contiguous());
    }

    #[test]
    fn test_owner_serialization() {
        let mut timeline = Timeline::new();
        timeline.push(ExecutionBlock::idle(0, 2));
        timeline.push(ExecutionBlock::process(3, 2, 6));

        let json = serde_json::to_value(&timeline).unwrap();
        assert_eq!(json[0]["pid"], "Idle");
        assert_eq!(json[0]["startTime"], 0);
        assert_eq!(json[1]["pid"], 3);
        assert_eq!(json[1]["endTime"], 6);

        let back: Timeline = serde_json::from_value(json).unwrap();
        assert_eq!(back, timeline);
    }

    #[test]
    fn test_owner_rejects_unknown_sentinel() {
        let err = serde_json::from_str::<BlockOwner>("\"Sleeping\"");
        assert!(err.is_err());
    }
}
