use serde::Serialize;

use crate::error::{Error, Result};

/// Total payload width; the sign bit of an `i64` stays clear.
pub const ID_BITS: u32 = 63;

/// Bit widths of the three identifier fields, most significant first:
/// `time | node | sequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    time_bits: u32,
    node_bits: u32,
    sequence_bits: u32,
}

impl Layout {
    /// 42 bits of milliseconds, 10 node bits, 11 sequence bits.
    pub const CLASSIC: Layout = Layout {
        time_bits: 42,
        node_bits: 10,
        sequence_bits: 11,
    };

    /// 39 bits of 10 ms units, 11 node bits, 13 sequence bits.
    pub const V3: Layout = Layout {
        time_bits: 39,
        node_bits: 11,
        sequence_bits: 13,
    };

    /// The time field takes whatever the node and sequence fields leave.
    pub fn new(node_bits: u32, sequence_bits: u32) -> Result<Self> {
        if !(1..=26).contains(&node_bits) {
            return Err(Error::InvalidNodeBits(node_bits));
        }
        if !(1..=26).contains(&sequence_bits) {
            return Err(Error::InvalidSequenceBits(sequence_bits));
        }
        let time_bits = ID_BITS - node_bits - sequence_bits;
        if !(36..=52).contains(&time_bits) {
            return Err(Error::InvalidTimeBits(time_bits));
        }
        Ok(Self {
            time_bits,
            node_bits,
            sequence_bits,
        })
    }

    pub fn time_bits(&self) -> u32 {
        self.time_bits
    }

    pub fn node_bits(&self) -> u32 {
        self.node_bits
    }

    pub fn sequence_bits(&self) -> u32 {
        self.sequence_bits
    }

    pub fn max_time(&self) -> i64 {
        (1i64 << self.time_bits) - 1
    }

    pub fn max_node(&self) -> u64 {
        (1u64 << self.node_bits) - 1
    }

    pub fn max_sequence(&self) -> u64 {
        (1u64 << self.sequence_bits) - 1
    }

    #[inline]
    fn time_shift(&self) -> u32 {
        self.node_bits + self.sequence_bits
    }

    /// Packs already range-checked fields.
    #[inline]
    pub(crate) fn encode(&self, elapsed: i64, node: u64, sequence: u64) -> i64 {
        (elapsed << self.time_shift()) | ((node << self.sequence_bits) | sequence) as i64
    }

    pub fn elapsed_of(&self, id: i64) -> i64 {
        id >> self.time_shift()
    }

    pub fn node_of(&self, id: i64) -> u64 {
        (id >> self.sequence_bits) as u64 & self.max_node()
    }

    pub fn sequence_of(&self, id: i64) -> u64 {
        id as u64 & self.max_sequence()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_fill_63_bits() {
        for layout in [Layout::CLASSIC, Layout::V3] {
            assert_eq!(
                layout.time_bits() + layout.node_bits() + layout.sequence_bits(),
                ID_BITS
            );
            assert_eq!(
                Layout::new(layout.node_bits(), layout.sequence_bits()),
                Ok(layout)
            );
        }
    }

    #[test]
    fn rejects_out_of_range_widths() {
        assert_eq!(Layout::new(0, 11), Err(Error::InvalidNodeBits(0)));
        assert_eq!(Layout::new(10, 27), Err(Error::InvalidSequenceBits(27)));
        assert_eq!(Layout::new(5, 5), Err(Error::InvalidTimeBits(53)));
        assert_eq!(Layout::new(20, 20), Err(Error::InvalidTimeBits(23)));
        assert!(Layout::new(1, 10).is_ok());
        assert!(Layout::new(14, 13).is_ok());
    }

    #[test]
    fn fields_unpack() {
        let layout = Layout::CLASSIC;
        let id = layout.encode(12345, 1023, 2047);
        assert_eq!(layout.elapsed_of(id), 12345);
        assert_eq!(layout.node_of(id), 1023);
        assert_eq!(layout.sequence_of(id), 2047);
        assert!(layout.encode(layout.max_time(), 1023, 2047) > 0);
    }
}
