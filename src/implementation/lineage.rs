// Copyright 2026 The knapsack-bb developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the arena in which the branch-and-bound solvers keep
//! track of the items that have been packed along each branch of the search.
//!
//! Rather than copying the whole set of packed items into every child node,
//! a node only refers to the link recording its latest packed item. Each link
//! in turn refers to the link of its parent. The complete set of packed items
//! is only ever reconstructed (by walking up the parent links) when the final
//! solution is materialized.
//!
//! # Note
//! The arena is append-only: a link outlives the node it was created for,
//! even when that node is later pruned. Its size is thus bounded by the number
//! of packed children that were pushed onto the fringe (or became the
//! incumbent) over the whole search, not by the size of the live fringe. The
//! arena is dropped along with the search.

/// The identifier of a link: it indicates the position of the referenced
/// link in the 'links' vector of the lineage arena.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct LineageId(usize);

#[derive(Debug, Clone, Copy)]
struct Link {
    /// The position (in density order) of the packed item
    item: usize,
    /// The link of the previously packed item (if any)
    parent: Option<LineageId>,
}

/// An append-only arena of links.
#[derive(Debug, Clone, Default)]
pub struct Lineage {
    links: Vec<Link>,
}
impl Lineage {
    pub fn new() -> Self {
        Self::default()
    }
    /// Records that `item` was packed on top of the partial assignment
    /// identified by `parent`, and returns the id of the resulting assignment.
    pub fn push(&mut self, parent: Option<LineageId>, item: usize) -> LineageId {
        let id = LineageId(self.links.len());
        self.links.push(Link { item, parent });
        id
    }
    /// Iterates over the items packed in the partial assignment identified by
    /// `id` (most recently packed first).
    pub fn items(&self, id: Option<LineageId>) -> impl Iterator<Item = usize> + '_ {
        let mut current = id;
        std::iter::from_fn(move || {
            let LineageId(at) = current?;
            let link = self.links[at];
            current = link.parent;
            Some(link.item)
        })
    }
    /// The number of links in the arena
    pub fn len(&self) -> usize {
        self.links.len()
    }
    /// Returns true iff no link has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
