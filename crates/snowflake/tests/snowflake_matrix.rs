use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use grove_snowflake::{Clock, Error, Layout, Settings, SystemClock, DEFAULT_EPOCH_MS};
use serde_json::json;

#[test]
fn classic_layout_first_id_after_fifty_ms() {
    let epoch = SystemClock.now_ms() - 50;
    let sf = Settings::classic()
        .epoch_ms(epoch)
        .node(0)
        .build()
        .unwrap();
    thread::sleep(Duration::from_millis(50));
    let parts = sf.decompose(sf.generate().unwrap());
    // No upper bound: sleep may overshoot. The fixed-clock case checks both.
    assert!(parts.timestamp >= epoch + 50, "{parts:?}");
    assert_eq!(parts.sequence, 0);
    assert_eq!(parts.node, 0);
}

#[test]
fn classic_layout_with_fixed_clock() {
    let epoch = DEFAULT_EPOCH_MS + 10_000;
    let sf = Settings::classic()
        .epoch_ms(epoch)
        .clock(move || epoch + 50)
        .node(0)
        .build()
        .unwrap();
    let parts = sf.decompose(sf.generate().unwrap());
    assert!((epoch + 50..=epoch + 51).contains(&parts.timestamp));
    assert_eq!((parts.node, parts.sequence), (0, 0));
}

#[test]
fn compose_boundaries() {
    let sf = Settings::default().node(0).build().unwrap();
    let epoch = sf.epoch_ms();
    let now = SystemClock.now_ms();
    let years_175 = 175 * 365 * 24 * 3600 * 1000i64;

    assert!(matches!(sf.compose(epoch - 1_000, 0, 0), Err(Error::OverTimeLimit(_))));
    assert!(matches!(sf.compose(epoch + years_175, 0, 0), Err(Error::OverTimeLimit(_))));
    assert_eq!(sf.compose(now, 0, 1 << 11), Err(Error::OverSequenceLimit(2048)));
    assert_eq!(sf.compose(now, 1 << 10, 0), Err(Error::OverNodeLimit(1024)));
    assert!(sf.compose(now, 1023, 2047).is_ok());
    assert_eq!(sf.compose(epoch, 0, 0), Ok(0));
}

#[test]
fn compose_rejects_times_beyond_i64_range() {
    let sf = Settings::default().node(0).build().unwrap();
    assert!(matches!(sf.compose(i64::MIN, 0, 0), Err(Error::OverTimeLimit(_))));

    let before_1970 = Settings::classic().epoch_ms(-1_000).node(0).build().unwrap();
    assert!(matches!(before_1970.compose(i64::MAX, 0, 0), Err(Error::OverTimeLimit(_))));
    assert!(matches!(before_1970.compose(i64::MIN, 0, 0), Err(Error::OverTimeLimit(_))));

    // Past i64::MAX milliseconds; the conversion saturates.
    let far = UNIX_EPOCH + Duration::from_secs(i64::MAX as u64 / 100);
    assert!(matches!(before_1970.compose_time(far, 0, 0), Err(Error::OverTimeLimit(_))));
}

#[test]
fn sequence_wrap_spins_exactly_once() {
    let base = DEFAULT_EPOCH_MS + 1_000;
    let reads = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&reads);
    // Read 0 is taken by `build`; reads 1..=3 land in the same unit.
    let sf = Settings::classic()
        .node_bits(10)
        .sequence_bits(1)
        .clock(move || {
            if counter.fetch_add(1, Ordering::SeqCst) < 4 {
                base
            } else {
                base + 1
            }
        })
        .node(5)
        .build()
        .unwrap();

    let ids: Vec<i64> = (0..3).map(|_| sf.generate().unwrap()).collect();
    assert_eq!(reads.load(Ordering::SeqCst), 5);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    let seqs: Vec<u64> = ids.iter().map(|&id| sf.sequence(id)).collect();
    assert_eq!(seqs, vec![0, 1, 0]);
    assert_eq!(sf.elapsed(ids[2]), sf.elapsed(ids[1]) + 1);
}

#[test]
fn generate_fails_past_time_field() {
    let max = Layout::CLASSIC.max_time();
    let sf = Settings::classic()
        .clock(move || DEFAULT_EPOCH_MS + max + 1)
        .node(0)
        .build()
        .unwrap();
    assert_eq!(sf.generate(), Err(Error::OverTimeLimit(max + 1)));
}

#[test]
fn generate_is_monotonic_across_threads() {
    let sf = Arc::new(Settings::v3().node(9).build().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sf = Arc::clone(&sf);
            thread::spawn(move || {
                (0..2_000)
                    .map(|_| sf.generate().unwrap())
                    .collect::<Vec<i64>>()
            })
        })
        .collect();
    let mut all = HashSet::new();
    for handle in handles {
        let ids = handle.join().unwrap();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        for id in ids {
            assert!(id > 0);
            assert_eq!(sf.node_of(id), 9);
            assert!(all.insert(id));
        }
    }
    assert_eq!(all.len(), 8_000);
}

#[test]
fn stepping_clock_stays_monotonic() {
    let now = Arc::new(AtomicI64::new(DEFAULT_EPOCH_MS));
    let clock = Arc::clone(&now);
    let sf = Settings::classic()
        .clock(move || clock.fetch_add(1, Ordering::SeqCst) / 3)
        .epoch_ms(DEFAULT_EPOCH_MS / 3)
        .node(1)
        .build()
        .unwrap();
    let ids: Vec<i64> = (0..500).map(|_| sf.generate().unwrap()).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn decompose_is_json_ready() {
    let sf = Settings::classic()
        .clock(|| DEFAULT_EPOCH_MS + 7)
        .node(4)
        .build()
        .unwrap();
    let id = sf.generate().unwrap();
    assert_eq!(
        serde_json::to_value(sf.decompose(id)).unwrap(),
        json!({
            "id": id,
            "timestamp": DEFAULT_EPOCH_MS + 7,
            "node": 4,
            "sequence": 0,
        })
    );
    let expected = UNIX_EPOCH + Duration::from_millis((DEFAULT_EPOCH_MS + 7) as u64);
    assert_eq!(sf.time(id), expected);
    assert!(sf.time(id) < SystemTime::now());
}
