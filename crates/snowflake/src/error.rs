#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("epoch {epoch_ms} ms is ahead of the clock ({now_ms} ms)")]
    InvalidEpoch { epoch_ms: i64, now_ms: i64 },
    #[error("time unit must be within 1..=1000 ms, got {0} ms")]
    InvalidTimeUnit(u64),
    #[error("node bits must be within 1..=26, got {0}")]
    InvalidNodeBits(u32),
    #[error("sequence bits must be within 1..=26, got {0}")]
    InvalidSequenceBits(u32),
    #[error("time field must be 36..=52 bits wide, got {0}")]
    InvalidTimeBits(u32),
    #[error("elapsed time {0} does not fit the time field")]
    OverTimeLimit(i64),
    #[error("node {0} does not fit the node field")]
    OverNodeLimit(u64),
    #[error("sequence {0} does not fit the sequence field")]
    OverSequenceLimit(u64),
    #[error("node {0} rejected by check_node")]
    CheckNodeFailed(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
