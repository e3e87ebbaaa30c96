use grove_snowflake::{Layout, Settings, DEFAULT_EPOCH_MS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn compose_decompose_inverts(
        elapsed in 0i64..(1 << 39),
        node in 0u64..(1 << 11),
        sequence in 0u64..(1 << 13),
    ) {
        let sf = Settings::v3().clock(|| DEFAULT_EPOCH_MS).node(0).build().unwrap();
        let time_ms = DEFAULT_EPOCH_MS + elapsed * 10;
        let id = sf.compose(time_ms, node, sequence).unwrap();
        prop_assert!(id >= 0);
        let parts = sf.decompose(id);
        prop_assert_eq!(parts.timestamp, time_ms);
        prop_assert_eq!((parts.node, parts.sequence), (node, sequence));
        prop_assert_eq!(sf.compose(parts.timestamp, parts.node, parts.sequence), Ok(id));
    }

    #[test]
    fn custom_layouts_fill_63_bits(node_bits in 1u32..=26, sequence_bits in 1u32..=26) {
        let layout = Layout::new(node_bits, sequence_bits);
        let sum = node_bits + sequence_bits;
        prop_assert_eq!(layout.is_ok(), (11..=27).contains(&sum));
        if let Ok(layout) = layout {
            prop_assert_eq!(layout.time_bits(), 63 - sum);
        }
    }

    #[test]
    fn ids_order_by_time_first(
        a in (0i64..1_000_000, 0u64..1024, 0u64..2048),
        b in (0i64..1_000_000, 0u64..1024, 0u64..2048),
    ) {
        let sf = Settings::classic().clock(|| DEFAULT_EPOCH_MS).node(0).build().unwrap();
        let x = sf.compose(DEFAULT_EPOCH_MS + a.0, a.1, a.2).unwrap();
        let y = sf.compose(DEFAULT_EPOCH_MS + b.0, b.1, b.2).unwrap();
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }
}
