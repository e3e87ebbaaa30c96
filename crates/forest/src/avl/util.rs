use crate::types::{Arena, KvNode, Node};
use crate::util::{assert_strictly_ordered, get_l, get_r, set_l, set_r};

use super::types::AvlNode;

/// Height of an optional subtree; an absent child counts as -1.
#[inline]
pub fn height<K, V>(arena: &Arena<AvlNode<K, V>>, node: Option<u32>) -> i32 {
    node.map_or(-1, |i| arena[i as usize].h)
}

#[inline]
fn update_height<K, V>(arena: &mut Arena<AvlNode<K, V>>, n: u32) {
    let h = 1 + height(arena, get_l(arena, n)).max(height(arena, get_r(arena, n)));
    arena[n as usize].h = h;
}

/// `height(left) - height(right)`.
#[inline]
pub fn balance_factor<K, V>(arena: &Arena<AvlNode<K, V>>, n: u32) -> i32 {
    height(arena, get_l(arena, n)) - height(arena, get_r(arena, n))
}

/// Rotates `n` down to the right; returns the new subtree root.
fn rotate_right<K, V>(arena: &mut Arena<AvlNode<K, V>>, n: u32) -> u32 {
    let nl = get_l(arena, n).expect("right rotation needs a left child");
    let nlr = get_r(arena, nl);
    set_l(arena, n, nlr);
    set_r(arena, nl, Some(n));
    update_height(arena, n);
    update_height(arena, nl);
    nl
}

/// Rotates `n` down to the left; returns the new subtree root.
fn rotate_left<K, V>(arena: &mut Arena<AvlNode<K, V>>, n: u32) -> u32 {
    let nr = get_r(arena, n).expect("left rotation needs a right child");
    let nrl = get_l(arena, nr);
    set_r(arena, n, nrl);
    set_l(arena, nr, Some(n));
    update_height(arena, n);
    update_height(arena, nr);
    nr
}

/// Refreshes the height of `n` and restores `|bf| <= 1` below it.
fn rebalance<K, V>(arena: &mut Arena<AvlNode<K, V>>, n: u32) -> u32 {
    update_height(arena, n);
    let bf = balance_factor(arena, n);
    if bf > 1 {
        let l = get_l(arena, n).expect("left-heavy node has a left child");
        if balance_factor(arena, l) < 0 {
            let l = rotate_left(arena, l);
            set_l(arena, n, Some(l));
        }
        return rotate_right(arena, n);
    }
    if bf < -1 {
        let r = get_r(arena, n).expect("right-heavy node has a right child");
        if balance_factor(arena, r) > 0 {
            let r = rotate_right(arena, r);
            set_r(arena, n, Some(r));
        }
        return rotate_left(arena, n);
    }
    n
}

/// Outcome of [`insert`].
pub enum Insertion<V> {
    /// A new node was allocated at this handle.
    Added(u32),
    /// The key existed; its value was overwritten.
    Replaced(u32, V),
}

/// Recursive insert. Returns the new subtree root.
pub fn insert<K, V, C>(
    arena: &mut Arena<AvlNode<K, V>>,
    node: Option<u32>,
    key: K,
    value: V,
    comparator: &C,
    outcome: &mut Option<Insertion<V>>,
) -> u32
where
    C: Fn(&K, &K) -> i32,
{
    let Some(n) = node else {
        let idx = arena.insert(AvlNode::new(key, value)) as u32;
        *outcome = Some(Insertion::Added(idx));
        return idx;
    };

    let cmp = comparator(&key, arena[n as usize].key());
    if cmp == 0 {
        let old = arena[n as usize].set_value(value);
        *outcome = Some(Insertion::Replaced(n, old));
        return n;
    }

    if cmp < 0 {
        let l = insert(arena, get_l(arena, n), key, value, comparator, outcome);
        set_l(arena, n, Some(l));
    } else {
        let r = insert(arena, get_r(arena, n), key, value, comparator, outcome);
        set_r(arena, n, Some(r));
    }

    match outcome {
        Some(Insertion::Added(_)) => rebalance(arena, n),
        _ => n,
    }
}

/// Detaches the minimum of the subtree at `n`. Returns the new subtree root
/// and the detached node.
fn take_min<K, V>(arena: &mut Arena<AvlNode<K, V>>, n: u32) -> (Option<u32>, u32) {
    match get_l(arena, n) {
        None => {
            let r = get_r(arena, n);
            set_r(arena, n, None);
            (r, n)
        }
        Some(l) => {
            let (l, min) = take_min(arena, l);
            set_l(arena, n, l);
            (Some(rebalance(arena, n)), min)
        }
    }
}

/// Recursive unlink. The unlinked node (still allocated) is written to
/// `removed`; the caller frees it. Returns the new subtree root.
pub fn remove<K, V, C>(
    arena: &mut Arena<AvlNode<K, V>>,
    node: Option<u32>,
    key: &K,
    comparator: &C,
    removed: &mut Option<u32>,
) -> Option<u32>
where
    C: Fn(&K, &K) -> i32,
{
    let n = node?;
    let cmp = comparator(key, arena[n as usize].key());

    if cmp < 0 {
        let l = remove(arena, get_l(arena, n), key, comparator, removed);
        set_l(arena, n, l);
    } else if cmp > 0 {
        let r = remove(arena, get_r(arena, n), key, comparator, removed);
        set_r(arena, n, r);
    } else {
        *removed = Some(n);
        let (l, r) = (get_l(arena, n), get_r(arena, n));
        set_l(arena, n, None);
        set_r(arena, n, None);
        return match (l, r) {
            (None, None) => None,
            (Some(c), None) | (None, Some(c)) => Some(c),
            (Some(l), Some(r)) => {
                // The in-order successor takes the removed node's place.
                let (r, succ) = take_min(arena, r);
                set_l(arena, succ, Some(l));
                set_r(arena, succ, r);
                Some(rebalance(arena, succ))
            }
        };
    }

    if removed.is_some() {
        Some(rebalance(arena, n))
    } else {
        Some(n)
    }
}

/// Verifies cached heights, balance factors and key order.
pub fn assert_avl_tree<K, V, C>(
    arena: &Arena<AvlNode<K, V>>,
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    C: Fn(&K, &K) -> i32,
{
    fn check<K, V>(arena: &Arena<AvlNode<K, V>>, node: Option<u32>) -> Result<i32, String> {
        let Some(n) = node else {
            return Ok(-1);
        };
        let lh = check(arena, arena[n as usize].l())?;
        let rh = check(arena, arena[n as usize].r())?;
        let h = 1 + lh.max(rh);
        if arena[n as usize].h != h {
            return Err(format!(
                "Cached height {} does not match computed height {h}",
                arena[n as usize].h
            ));
        }
        if (lh - rh).abs() > 1 {
            return Err(format!("Balance factor {} out of range", lh - rh));
        }
        Ok(h)
    }

    check(arena, root)?;
    assert_strictly_ordered(arena, root, comparator)
}
