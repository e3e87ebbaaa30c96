//! Binary-tree utility functions shared by the AVL and red-black trees.
//!
//! Key-based helpers (`find`, `floor`, `ceiling`) accept a comparator and use
//! [`KvNode::key`], so they work on any arena-backed node layout.

pub mod swap;
pub mod traverse;

use crate::types::{Arena, KvNode, Node, ParentNode};

pub use swap::swap;
pub use traverse::{in_order, level_order, post_order, pre_order, InOrder};

#[inline]
pub(crate) fn get_p<N: ParentNode>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: ParentNode>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: ParentNode>(arena: &Arena<N>, mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: ParentNode>(arena: &Arena<N>, mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &Arena<N>, root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes on the longest root-to-leaf path.
pub fn height<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    match root {
        None => 0,
        Some(i) => 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i))),
    }
}

/// Finds a node by key.
pub fn find<K, V, N, C>(arena: &Arena<N>, root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, arena[i as usize].key());
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Finds the node holding `key`, or the greatest node below it.
pub fn find_or_next_lower<K, V, N, C>(
    arena: &Arena<N>,
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> Option<u32>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut result: Option<u32> = None;
    while let Some(i) = curr {
        let cmp = comparator(arena[i as usize].key(), key);
        if cmp == 0 {
            return Some(i);
        }
        if cmp > 0 {
            curr = get_l(arena, i);
        } else {
            result = Some(i);
            curr = get_r(arena, i);
        }
    }
    result
}

/// Finds the node holding `key`, or the smallest node above it.
pub fn find_or_next_higher<K, V, N, C>(
    arena: &Arena<N>,
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> Option<u32>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut result: Option<u32> = None;
    while let Some(i) = curr {
        let cmp = comparator(arena[i as usize].key(), key);
        if cmp == 0 {
            return Some(i);
        }
        if cmp < 0 {
            curr = get_r(arena, i);
        } else {
            result = Some(i);
            curr = get_l(arena, i);
        }
    }
    result
}

/// Checks that an in-order walk yields strictly increasing keys.
pub fn assert_strictly_ordered<K, V, N, C>(
    arena: &Arena<N>,
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let order = in_order(arena, root);
    for pair in order.windows(2) {
        let cmp = comparator(arena[pair[0] as usize].key(), arena[pair[1] as usize].key());
        if cmp >= 0 {
            return Err("Node order violated".to_string());
        }
    }
    Ok(())
}
