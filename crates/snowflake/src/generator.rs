use std::fmt;
use std::hint::spin_loop;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::settings::Settings;

/// Decoded identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parts {
    pub id: i64,
    /// Unix milliseconds, truncated to the time unit.
    pub timestamp: i64,
    pub node: u64,
    pub sequence: u64,
}

struct State {
    /// Last emitted elapsed count; -1 before the first emission.
    last: i64,
    sequence: u64,
}

/// Thread-safe generator of strictly increasing 63-bit identifiers.
pub struct Snowflake {
    layout: Layout,
    epoch_ms: i64,
    time_unit_ms: i64,
    node: u64,
    clock: Arc<dyn Clock>,
    state: Mutex<State>,
}

impl Snowflake {
    pub fn builder() -> Settings {
        Settings::default()
    }

    pub(crate) fn from_parts(
        layout: Layout,
        epoch_ms: i64,
        time_unit_ms: i64,
        node: u64,
        clock: Arc<dyn Clock>,
    ) -> Self {
        debug!(
            time_bits = layout.time_bits(),
            node_bits = layout.node_bits(),
            sequence_bits = layout.sequence_bits(),
            epoch_ms,
            time_unit_ms,
            node,
            "snowflake generator created"
        );
        Self {
            layout,
            epoch_ms,
            time_unit_ms,
            node,
            clock,
            state: Mutex::new(State {
                last: -1,
                sequence: 0,
            }),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }

    pub fn time_unit_ms(&self) -> i64 {
        self.time_unit_ms
    }

    pub fn node(&self) -> u64 {
        self.node
    }

    /// Elapsed time units between the epoch and `time_ms`, rounded down.
    /// Saturates, so times beyond the `i64` range land outside the time field.
    fn elapsed_at(&self, time_ms: i64) -> i64 {
        time_ms
            .saturating_sub(self.epoch_ms)
            .div_euclid(self.time_unit_ms)
    }

    /// Emits the next identifier.
    ///
    /// When the sequence wraps inside one time unit the call spins until
    /// the clock reaches the next unit.
    pub fn generate(&self) -> Result<i64> {
        let mut state = self.state.lock();
        let mut now = self.elapsed_at(self.clock.now_ms());
        if now == state.last {
            state.sequence = (state.sequence + 1) & self.layout.max_sequence();
            if state.sequence == 0 {
                trace!(elapsed = now, "sequence exhausted, waiting for next tick");
                while now <= state.last {
                    spin_loop();
                    now = self.elapsed_at(self.clock.now_ms());
                }
            }
        } else {
            state.sequence = 0;
        }
        state.last = now;
        if !(0..=self.layout.max_time()).contains(&now) {
            warn!(elapsed = now, max = self.layout.max_time(), "time field exhausted");
            return Err(Error::OverTimeLimit(now));
        }
        Ok(self.layout.encode(now, self.node, state.sequence))
    }

    /// Packs arbitrary fields without touching generator state.
    /// `time_ms` is in Unix milliseconds.
    pub fn compose(&self, time_ms: i64, node: u64, sequence: u64) -> Result<i64> {
        let elapsed = self.elapsed_at(time_ms);
        if !(0..=self.layout.max_time()).contains(&elapsed) {
            return Err(Error::OverTimeLimit(elapsed));
        }
        if node > self.layout.max_node() {
            return Err(Error::OverNodeLimit(node));
        }
        if sequence > self.layout.max_sequence() {
            return Err(Error::OverSequenceLimit(sequence));
        }
        Ok(self.layout.encode(elapsed, node, sequence))
    }

    /// Like [`compose`](Self::compose) with a [`SystemTime`].
    pub fn compose_time(&self, time: SystemTime, node: u64, sequence: u64) -> Result<i64> {
        let time_ms = match time.duration_since(UNIX_EPOCH) {
            Ok(d) => i64::try_from(d.as_millis()).unwrap_or(i64::MAX),
            Err(e) => -i64::try_from(e.duration().as_millis()).unwrap_or(i64::MAX),
        };
        self.compose(time_ms, node, sequence)
    }

    /// Raw time field: time units since the epoch.
    pub fn elapsed(&self, id: i64) -> i64 {
        self.layout.elapsed_of(id)
    }

    /// Unix milliseconds of `id`, truncated to the time unit.
    pub fn timestamp(&self, id: i64) -> i64 {
        self.elapsed(id) * self.time_unit_ms + self.epoch_ms
    }

    pub fn time(&self, id: i64) -> SystemTime {
        let ms = self.timestamp(id);
        if ms >= 0 {
            UNIX_EPOCH + Duration::from_millis(ms as u64)
        } else {
            UNIX_EPOCH - Duration::from_millis(ms.unsigned_abs())
        }
    }

    pub fn node_of(&self, id: i64) -> u64 {
        self.layout.node_of(id)
    }

    pub fn sequence(&self, id: i64) -> u64 {
        self.layout.sequence_of(id)
    }

    pub fn decompose(&self, id: i64) -> Parts {
        Parts {
            id,
            timestamp: self.timestamp(id),
            node: self.node_of(id),
            sequence: self.sequence(id),
        }
    }
}

impl fmt::Debug for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snowflake")
            .field("layout", &self.layout)
            .field("epoch_ms", &self.epoch_ms)
            .field("time_unit_ms", &self.time_unit_ms)
            .field("node", &self.node)
            .finish_non_exhaustive()
    }
}
