use std::fmt::Debug;

use crate::types::{Arena, KvNode, Node};
use crate::util::swap::replace_child;
use crate::util::{assert_strictly_ordered, first, get_l, get_p, get_r, set_l, set_p, set_r, swap};

use super::types::RbNode;

type RbArena<K, V> = Arena<RbNode<K, V>>;

#[inline]
fn is_black<K, V>(arena: &RbArena<K, V>, i: u32) -> bool {
    arena[i as usize].b
}

/// Nil children count as black.
#[inline]
fn is_red<K, V>(arena: &RbArena<K, V>, i: Option<u32>) -> bool {
    i.map(|i| !is_black(arena, i)).unwrap_or(false)
}

#[inline]
fn set_black<K, V>(arena: &mut RbArena<K, V>, i: u32, v: bool) {
    arena[i as usize].b = v;
}

/// Root after a rotation whose new subtree top is `top`.
#[inline]
fn root_after<K, V>(arena: &RbArena<K, V>, root: u32, top: u32) -> u32 {
    if get_p(arena, top).is_some() {
        root
    } else {
        top
    }
}

/// `n` moves down-left, its right child takes its place.
fn rotate_left<K, V>(arena: &mut RbArena<K, V>, root: u32, n: u32) -> u32 {
    let p = get_p(arena, n);
    let nr = get_r(arena, n).expect("left rotation needs a right child");
    let nrl = get_l(arena, nr);

    set_r(arena, n, nrl);
    if let Some(nrl) = nrl {
        set_p(arena, nrl, Some(n));
    }
    set_l(arena, nr, Some(n));
    set_p(arena, n, Some(nr));
    set_p(arena, nr, p);
    if let Some(p) = p {
        replace_child(arena, p, n, Some(nr));
    }
    root_after(arena, root, nr)
}

/// `n` moves down-right, its left child takes its place.
fn rotate_right<K, V>(arena: &mut RbArena<K, V>, root: u32, n: u32) -> u32 {
    let p = get_p(arena, n);
    let nl = get_l(arena, n).expect("right rotation needs a left child");
    let nlr = get_r(arena, nl);

    set_l(arena, n, nlr);
    if let Some(nlr) = nlr {
        set_p(arena, nlr, Some(n));
    }
    set_r(arena, nl, Some(n));
    set_p(arena, n, Some(nl));
    set_p(arena, nl, p);
    if let Some(p) = p {
        replace_child(arena, p, n, Some(nl));
    }
    root_after(arena, root, nl)
}

/// Standard BST descent followed by attachment and fixup. Duplicates go
/// right; callers that need replacement semantics search first.
pub fn insert<K, V, C>(arena: &mut RbArena<K, V>, root: Option<u32>, n: u32, comparator: &C) -> u32
where
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        set_black(arena, n, true);
        return n;
    };
    let root = curr;
    loop {
        let cmp = comparator(arena[n as usize].key(), arena[curr as usize].key());
        let next = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match next {
            Some(next) => curr = next,
            None if cmp < 0 => return insert_left(arena, root, n, curr),
            None => return insert_right(arena, root, n, curr),
        }
    }
}

/// Attaches `n` as the (empty) left child of `p` and rebalances.
pub fn insert_left<K, V>(arena: &mut RbArena<K, V>, root: u32, n: u32, p: u32) -> u32 {
    set_l(arena, p, Some(n));
    set_p(arena, n, Some(p));
    insert_fixup(arena, root, n)
}

/// Attaches `n` as the (empty) right child of `p` and rebalances.
pub fn insert_right<K, V>(arena: &mut RbArena<K, V>, root: u32, n: u32, p: u32) -> u32 {
    set_r(arena, p, Some(n));
    set_p(arena, n, Some(p));
    insert_fixup(arena, root, n)
}

fn insert_fixup<K, V>(arena: &mut RbArena<K, V>, mut root: u32, mut n: u32) -> u32 {
    set_black(arena, n, false);
    while let Some(mut p) = get_p(arena, n).filter(|&p| !is_black(arena, p)) {
        let g = get_p(arena, p).expect("red parent is never the root");
        let parent_is_left = get_l(arena, g) == Some(p);
        let u = if parent_is_left {
            get_r(arena, g)
        } else {
            get_l(arena, g)
        };

        if is_red(arena, u) {
            set_black(arena, p, true);
            set_black(arena, u.expect("red uncle exists"), true);
            set_black(arena, g, false);
            n = g;
            continue;
        }

        if parent_is_left {
            if get_r(arena, p) == Some(n) {
                root = rotate_left(arena, root, p);
                n = p;
                p = get_p(arena, n).expect("rotated node has a parent");
            }
            set_black(arena, p, true);
            set_black(arena, g, false);
            root = rotate_right(arena, root, g);
        } else {
            if get_l(arena, p) == Some(n) {
                root = rotate_right(arena, root, p);
                n = p;
                p = get_p(arena, n).expect("rotated node has a parent");
            }
            set_black(arena, p, true);
            set_black(arena, g, false);
            root = rotate_left(arena, root, g);
        }
        break;
    }
    set_black(arena, root, true);
    root
}

/// Unlinks `n` from the tree rooted at `root` and returns the new root.
///
/// The node stays allocated with all links cleared; the caller frees it.
pub fn remove<K, V>(arena: &mut RbArena<K, V>, mut root: u32, n: u32) -> Option<u32> {
    if let (Some(_), Some(r)) = (get_l(arena, n), get_r(arena, n)) {
        // Trade places with the in-order successor. Colors stay with the
        // position, entries stay with their slots.
        let succ = first(arena, Some(r)).expect("right subtree is not empty");
        let (nb, sb) = (is_black(arena, n), is_black(arena, succ));
        set_black(arena, n, sb);
        set_black(arena, succ, nb);
        root = swap(arena, root, n, succ);
    }

    let child = get_l(arena, n).or(get_r(arena, n));
    let p = get_p(arena, n);

    if let Some(c) = child {
        // A node with exactly one child is black and the child is red.
        set_p(arena, c, p);
        match p {
            Some(p) => replace_child(arena, p, n, Some(c)),
            None => root = c,
        }
        set_black(arena, c, true);
        detach(arena, n);
        return Some(root);
    }

    let Some(_) = p else {
        detach(arena, n);
        return None;
    };

    if is_black(arena, n) {
        // `n` stays in place as the double-black leaf while fixing up.
        root = remove_fixup(arena, root, n);
    }
    let p = get_p(arena, n).expect("non-root leaf has a parent");
    replace_child(arena, p, n, None);
    detach(arena, n);
    Some(root)
}

fn detach<K, V>(arena: &mut RbArena<K, V>, n: u32) {
    set_p(arena, n, None);
    set_l(arena, n, None);
    set_r(arena, n, None);
}

fn sibling<K, V>(arena: &RbArena<K, V>, p: u32, x_is_left: bool) -> u32 {
    let s = if x_is_left {
        get_r(arena, p)
    } else {
        get_l(arena, p)
    };
    s.expect("double-black node has a sibling")
}

/// Resolves the extra black carried by `x`.
fn remove_fixup<K, V>(arena: &mut RbArena<K, V>, mut root: u32, mut x: u32) -> u32 {
    while x != root && is_black(arena, x) {
        let p = get_p(arena, x).expect("non-root node has a parent");
        let x_is_left = get_l(arena, p) == Some(x);
        let mut s = sibling(arena, p, x_is_left);

        if !is_black(arena, s) {
            set_black(arena, s, true);
            set_black(arena, p, false);
            root = if x_is_left {
                rotate_left(arena, root, p)
            } else {
                rotate_right(arena, root, p)
            };
            s = sibling(arena, p, x_is_left);
        }

        let (near, far) = if x_is_left {
            (get_l(arena, s), get_r(arena, s))
        } else {
            (get_r(arena, s), get_l(arena, s))
        };

        if !is_red(arena, near) && !is_red(arena, far) {
            set_black(arena, s, false);
            x = p;
            continue;
        }

        if !is_red(arena, far) {
            let near = near.expect("red near nephew exists");
            set_black(arena, near, true);
            set_black(arena, s, false);
            root = if x_is_left {
                rotate_right(arena, root, s)
            } else {
                rotate_left(arena, root, s)
            };
            s = sibling(arena, p, x_is_left);
        }

        let far = if x_is_left {
            get_r(arena, s)
        } else {
            get_l(arena, s)
        };
        let parent_black = is_black(arena, p);
        set_black(arena, s, parent_black);
        set_black(arena, p, true);
        set_black(arena, far.expect("red far nephew exists"), true);
        root = if x_is_left {
            rotate_left(arena, root, p)
        } else {
            rotate_right(arena, root, p)
        };
        x = root;
    }
    set_black(arena, x, true);
    root
}

pub fn assert_red_black_tree<K, V, C>(
    arena: &RbArena<K, V>,
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }
    if !is_black(arena, root) {
        return Err("Root is not black".to_string());
    }

    fn black_height<K, V>(arena: &RbArena<K, V>, node: Option<u32>) -> Result<usize, String> {
        let Some(node) = node else {
            return Ok(1);
        };

        let l = get_l(arena, node);
        let r = get_r(arena, node);

        if l.is_some_and(|li| get_p(arena, li) != Some(node)) {
            return Err("Broken parent link on left child".to_string());
        }
        if r.is_some_and(|ri| get_p(arena, ri) != Some(node)) {
            return Err("Broken parent link on right child".to_string());
        }

        if !is_black(arena, node) && (is_red(arena, l) || is_red(arena, r)) {
            return Err("Red node has red child".to_string());
        }

        let lh = black_height(arena, l)?;
        let rh = black_height(arena, r)?;
        if lh != rh {
            return Err("Black height mismatch".to_string());
        }

        Ok(lh + usize::from(is_black(arena, node)))
    }

    black_height(arena, Some(root))?;
    assert_strictly_ordered(arena, Some(root), comparator)
}

/// Debug printer for red-black trees.
pub fn print<K, V>(arena: &RbArena<K, V>, node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let color = if n.b { "black" } else { "red" };
            let left = print(arena, n.l(), &format!("{tab}  "));
            let right = print(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] {color} {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.key(),
                n.value()
            )
        }
    }
}
