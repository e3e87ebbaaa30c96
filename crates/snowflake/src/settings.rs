use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::generator::Snowflake;
use crate::layout::Layout;
use crate::node::default_node;

/// 2025-01-01T00:00:00Z in Unix milliseconds.
pub const DEFAULT_EPOCH_MS: i64 = 1_735_689_600_000;

type CheckNode = Box<dyn Fn(u64) -> bool + Send + Sync>;

/// Construction options for a [`Snowflake`] generator.
///
/// Every option is validated by [`build`](Settings::build); nothing is
/// checked while the builder is being filled in.
pub struct Settings {
    epoch_ms: i64,
    time_unit_ms: u64,
    node_bits: u32,
    sequence_bits: u32,
    node: Option<u64>,
    check_node: Option<CheckNode>,
    clock: Arc<dyn Clock>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::classic()
    }
}

impl Settings {
    /// Millisecond time unit with the [`Layout::CLASSIC`] widths.
    pub fn classic() -> Self {
        Self::with_layout(Layout::CLASSIC, 1)
    }

    /// 10 ms time unit with the [`Layout::V3`] widths.
    pub fn v3() -> Self {
        Self::with_layout(Layout::V3, 10)
    }

    fn with_layout(layout: Layout, time_unit_ms: u64) -> Self {
        Self {
            epoch_ms: DEFAULT_EPOCH_MS,
            time_unit_ms,
            node_bits: layout.node_bits(),
            sequence_bits: layout.sequence_bits(),
            node: None,
            check_node: None,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn epoch(self, epoch: SystemTime) -> Self {
        let epoch_ms = match epoch.duration_since(UNIX_EPOCH) {
            Ok(d) => i64::try_from(d.as_millis()).unwrap_or(i64::MAX),
            Err(e) => -i64::try_from(e.duration().as_millis()).unwrap_or(i64::MAX),
        };
        self.epoch_ms(epoch_ms)
    }

    /// Epoch in milliseconds since the Unix epoch.
    pub fn epoch_ms(mut self, epoch_ms: i64) -> Self {
        self.epoch_ms = epoch_ms;
        self
    }

    /// Sub-millisecond precision is truncated.
    pub fn time_unit(mut self, unit: Duration) -> Self {
        self.time_unit_ms = u64::try_from(unit.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn node_bits(mut self, bits: u32) -> Self {
        self.node_bits = bits;
        self
    }

    pub fn sequence_bits(mut self, bits: u32) -> Self {
        self.sequence_bits = bits;
        self
    }

    /// Defaults to [`default_node`] for the configured node width.
    pub fn node(mut self, node: u64) -> Self {
        self.node = Some(node);
        self
    }

    /// Predicate run once on the final node; `false` aborts construction.
    pub fn check_node<F>(mut self, check: F) -> Self
    where
        F: Fn(u64) -> bool + Send + Sync + 'static,
    {
        self.check_node = Some(Box::new(check));
        self
    }

    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn build(self) -> Result<Snowflake> {
        if !(1..=1000).contains(&self.time_unit_ms) {
            return Err(Error::InvalidTimeUnit(self.time_unit_ms));
        }
        let layout = Layout::new(self.node_bits, self.sequence_bits)?;
        let now_ms = self.clock.now_ms();
        if self.epoch_ms > now_ms {
            return Err(Error::InvalidEpoch {
                epoch_ms: self.epoch_ms,
                now_ms,
            });
        }
        let node = self
            .node
            .unwrap_or_else(|| default_node(layout.node_bits()));
        if node > layout.max_node() {
            return Err(Error::OverNodeLimit(node));
        }
        if let Some(check) = &self.check_node {
            if !check(node) {
                return Err(Error::CheckNodeFailed(node));
            }
        }
        Ok(Snowflake::from_parts(
            layout,
            self.epoch_ms,
            self.time_unit_ms as i64,
            node,
            self.clock,
        ))
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("epoch_ms", &self.epoch_ms)
            .field("time_unit_ms", &self.time_unit_ms)
            .field("node_bits", &self.node_bits)
            .field("sequence_bits", &self.sequence_bits)
            .field("node", &self.node)
            .field("check_node", &self.check_node.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> Settings {
        Settings::classic().clock(|| DEFAULT_EPOCH_MS + 1_000).node(1)
    }

    #[test]
    fn validates_each_option() {
        assert_eq!(
            fixed().time_unit(Duration::ZERO).build().unwrap_err(),
            Error::InvalidTimeUnit(0)
        );
        assert_eq!(
            fixed().time_unit(Duration::from_secs(2)).build().unwrap_err(),
            Error::InvalidTimeUnit(2000)
        );
        assert_eq!(
            fixed().node_bits(27).build().unwrap_err(),
            Error::InvalidNodeBits(27)
        );
        assert_eq!(
            fixed().sequence_bits(0).build().unwrap_err(),
            Error::InvalidSequenceBits(0)
        );
        assert_eq!(
            fixed().node_bits(2).sequence_bits(3).build().unwrap_err(),
            Error::InvalidTimeBits(58)
        );
        assert_eq!(
            fixed().epoch_ms(DEFAULT_EPOCH_MS + 1_001).build().unwrap_err(),
            Error::InvalidEpoch {
                epoch_ms: DEFAULT_EPOCH_MS + 1_001,
                now_ms: DEFAULT_EPOCH_MS + 1_000,
            }
        );
        assert_eq!(
            fixed().node(1024).build().unwrap_err(),
            Error::OverNodeLimit(1024)
        );
        assert_eq!(
            fixed().check_node(|n| n % 2 == 0).build().unwrap_err(),
            Error::CheckNodeFailed(1)
        );
    }

    #[test]
    fn presets() {
        let classic = fixed().build().unwrap();
        assert_eq!(classic.layout(), Layout::CLASSIC);
        assert_eq!(classic.time_unit_ms(), 1);
        let v3 = Settings::v3()
            .clock(|| DEFAULT_EPOCH_MS)
            .node(2047)
            .build()
            .unwrap();
        assert_eq!(v3.layout(), Layout::V3);
        assert_eq!(v3.time_unit_ms(), 10);
        assert_eq!(v3.node(), 2047);
    }
}
