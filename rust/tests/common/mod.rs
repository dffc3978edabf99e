use proptest::prelude::*;
use std::ops::Bound;

/// Route `log` output through the test harness. Safe to call from every test.
#[allow(dead_code)]
pub(crate) fn init_logging() {
    use simplelog::*;
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

#[allow(dead_code)]
pub(crate) fn assert_eq_iters<I: Iterator, J: Iterator<Item = I::Item>>(mut i: I, mut j: J)
where
    I::Item: std::fmt::Debug + Eq,
{
    loop {
        match (i.next(), j.next()) {
            (None, None) => return,
            (a, b) => assert_eq!(a, b),
        }
    }
}

pub(crate) type SmallIntPairs = Vec<(u16, u16)>;

#[allow(dead_code)]
pub(crate) fn small_int_pairs() -> impl Strategy<Value = SmallIntPairs> {
    prop::collection::vec((0u16..1024u16, 0u16..1024u16), 0..512)
}

#[allow(dead_code)]
pub(crate) fn small_ints() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(0u16..1024u16, 0..512)
}

/// One step of a random edit script.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub(crate) enum Op {
    Insert(u16, u16),
    Remove(u16),
    /// Erase through a handle found by key.
    EraseAt(u16),
    /// Insert with the lower bound of the key as hint.
    InsertHinted(u16, u16),
}

#[allow(dead_code)]
pub(crate) fn ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        (0u16..256, any::<u16>()).prop_map(|(k, v)| Op::Insert(k, v)),
        (0u16..256).prop_map(Op::Remove),
        (0u16..256).prop_map(Op::EraseAt),
        (0u16..256, any::<u16>()).prop_map(|(k, v)| Op::InsertHinted(k, v)),
    ];
    prop::collection::vec(op, 0..400)
}

#[allow(dead_code)]
pub(crate) fn range_bounds_1k() -> impl Strategy<Value = (Bound<u16>, Bound<u16>)> {
    use Bound::*;

    (1u16..1023)
        .prop_flat_map(|n| {
            (
                prop_oneof![
                    Just(Bound::Unbounded),
                    (0u16..=n).prop_map(Bound::Excluded),
                    (0u16..=n).prop_map(Bound::Included),
                ],
                prop_oneof![
                    Just(Bound::Unbounded),
                    (n..1024).prop_map(Bound::Excluded),
                    (n..1024).prop_map(Bound::Included),
                ],
            )
        })
        .prop_map(|(lb, ub)| match (lb, ub) {
            // std panics on an empty excluded range; keep the cases comparable
            (Excluded(x), Excluded(y)) if x == y => (Included(x), Excluded(y)),
            xy => xy,
        })
}
