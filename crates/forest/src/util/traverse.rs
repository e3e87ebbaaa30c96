//! Tree walks producing node handles.
//!
//! All four walks are iterative so that degenerate shapes do not exhaust the
//! call stack.

use std::collections::VecDeque;

use crate::types::{Arena, Node};

use super::{get_l, get_r};

/// Breadth-first walk.
pub fn level_order<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut queue: VecDeque<u32> = root.into_iter().collect();
    while let Some(i) = queue.pop_front() {
        out.push(i);
        queue.extend(get_l(arena, i));
        queue.extend(get_r(arena, i));
    }
    out
}

/// Node, then left subtree, then right subtree.
pub fn pre_order<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        out.push(i);
        stack.extend(get_r(arena, i));
        stack.extend(get_l(arena, i));
    }
    out
}

/// Left subtree, then node, then right subtree.
pub fn in_order<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(i) = curr {
            stack.push(i);
            curr = get_l(arena, i);
        }
        let Some(i) = stack.pop() else {
            break;
        };
        out.push(i);
        curr = get_r(arena, i);
    }
    out
}

/// Left subtree, then right subtree, then node.
pub fn post_order<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Vec<u32> {
    // Reverse of a node-right-left walk.
    let mut out = Vec::new();
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        out.push(i);
        stack.extend(get_l(arena, i));
        stack.extend(get_r(arena, i));
    }
    out.reverse();
    out
}

/// Lazy in-order walk over node handles.
///
/// Holds at most one root-to-leaf path on its stack, so stopping early costs
/// nothing beyond the nodes already yielded.
pub struct InOrder<'a, N> {
    arena: &'a Arena<N>,
    stack: Vec<u32>,
}

impl<'a, N: Node> InOrder<'a, N> {
    pub fn new(arena: &'a Arena<N>, root: Option<u32>) -> Self {
        let mut it = Self {
            arena,
            stack: Vec::new(),
        };
        it.push_left(root);
        it
    }

    fn push_left(&mut self, mut curr: Option<u32>) {
        while let Some(i) = curr {
            self.stack.push(i);
            curr = get_l(self.arena, i);
        }
    }
}

impl<'a, N: Node> Iterator for InOrder<'a, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let i = self.stack.pop()?;
        self.push_left(get_r(self.arena, i));
        Some(i)
    }
}
