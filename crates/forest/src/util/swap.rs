use crate::types::{Arena, ParentNode};

use super::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Points `parent`'s link that currently names `old` at `new`.
pub(crate) fn replace_child<N: ParentNode>(
    arena: &mut Arena<N>,
    parent: u32,
    old: u32,
    new: Option<u32>,
) {
    if get_l(arena, parent) == Some(old) {
        set_l(arena, parent, new);
    } else {
        set_r(arena, parent, new);
    }
}

/// Exchanges the tree positions of `x` and `y`, keeping each entry attached
/// to its own arena slot. Returns the (possibly new) root.
///
/// Used by removal in place of copying a successor's key and value into the
/// victim, so handles held for other entries stay valid.
pub fn swap<N: ParentNode>(arena: &mut Arena<N>, mut root: u32, x: u32, y: u32) -> u32 {
    if x == y {
        return root;
    }

    let (xp, xl, xr) = (get_p(arena, x), get_l(arena, x), get_r(arena, x));
    let (yp, yl, yr) = (get_p(arena, y), get_l(arena, y), get_r(arena, y));

    // Children of y move to x. A link from y to x becomes a link from x to y.
    let adopt = |arena: &mut Arena<N>, child: Option<u32>, new_parent: u32, other: u32| {
        if child == Some(new_parent) {
            set_p(arena, other, Some(new_parent));
            Some(other)
        } else {
            if let Some(c) = child {
                set_p(arena, c, Some(new_parent));
            }
            child
        }
    };

    let l = adopt(arena, yl, x, y);
    set_l(arena, x, l);
    let r = adopt(arena, yr, x, y);
    set_r(arena, x, r);

    let l = adopt(arena, xl, y, x);
    set_l(arena, y, l);
    let r = adopt(arena, xr, y, x);
    set_r(arena, y, r);

    // Siblings share one parent: exchange its two links in place.
    if let (Some(p), Some(q)) = (xp, yp) {
        if p == q {
            let (pl, pr) = (get_l(arena, p), get_r(arena, p));
            set_l(arena, p, pr);
            set_r(arena, p, pl);
            return root;
        }
    }

    match xp {
        None => {
            root = y;
            set_p(arena, y, None);
        }
        Some(p) if p != y => {
            set_p(arena, y, Some(p));
            replace_child(arena, p, x, Some(y));
        }
        Some(_) => {}
    }

    match yp {
        None => {
            root = x;
            set_p(arena, x, None);
        }
        Some(p) if p != x => {
            set_p(arena, x, Some(p));
            replace_child(arena, p, y, Some(x));
        }
        Some(_) => {}
    }

    root
}
