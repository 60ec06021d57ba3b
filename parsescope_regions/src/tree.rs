// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, updates, queries.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::damage::Damage;
use crate::types::{LocalRegion, RegionFlags, RegionId};

impl Default for RegionTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Tree of rule-labeled document regions.
#[derive(Clone)]
pub struct RegionTree {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    roots: Vec<RegionId>, // top-level regions in document order
    damage: Damage,
}

impl core::fmt::Debug for RegionTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("RegionTree")
            .field("regions_total", &total)
            .field("regions_alive", &alive)
            .field("free_list", &free)
            .field("roots", &self.roots.len())
            .finish_non_exhaustive()
    }
}

/// Results of a hit test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    /// The innermost matched region.
    pub region: RegionId,
    /// Path from the top-level region to `region` (inclusive).
    pub path: Vec<RegionId>,
}

/// Filters applied during hit testing.
///
/// Used by [`RegionTree::hit_test_point`].
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryFilter {
    /// If true, invisible regions and everything nested in them are skipped.
    pub visible_only: bool,
    /// If true, regions not marked [`RegionFlags::PICKABLE`] never become the
    /// target; the hit falls through to a pickable descendant or ancestor.
    pub pickable_only: bool,
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<RegionId>,
    children: Vec<RegionId>,
    local: LocalRegion,
}

impl Node {
    fn new(generation: u32, local: LocalRegion) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            local,
        }
    }
}

impl RegionTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            roots: Vec::new(),
            damage: Damage::default(),
        }
    }

    /// Insert a new region as the last child of `parent` (or as the last
    /// top-level region if `None`).
    ///
    /// Inserting children after their parent and siblings left to right keeps
    /// the tree in document order.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is a stale identifier.
    pub fn insert(&mut self, parent: Option<RegionId>, local: LocalRegion) -> RegionId {
        let bounds = local.bounds;
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, local));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "RegionId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, local)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "RegionId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = RegionId::new(idx, generation);
        match parent {
            Some(p) => self.link_parent(id, p),
            None => self.roots.push(id),
        }
        self.damage.push(bounds);
        id
    }

    /// Remove a region (and its subtree) from the tree.
    pub fn remove(&mut self, id: RegionId) {
        if !self.is_alive(id) {
            return;
        }
        match self.node(id).parent {
            Some(parent) => self.unlink_parent(id, parent),
            None => self.roots.retain(|r| *r != id),
        }
        self.free_subtree(id);
    }

    /// Returns true if `id` refers to a live region.
    ///
    /// A `RegionId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    pub fn is_alive(&self, id: RegionId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Number of live regions.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    /// True if the document has no regions at all.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Rule name of a live region.
    pub fn rule_name(&self, id: RegionId) -> Option<&str> {
        self.node_opt(id).map(|n| n.local.rule_name.as_str())
    }

    /// World-space bounds of a live region.
    pub fn bounds(&self, id: RegionId) -> Option<Rect> {
        self.node_opt(id).map(|n| n.local.bounds)
    }

    /// Flags of a live region.
    pub fn flags(&self, id: RegionId) -> Option<RegionFlags> {
        self.node_opt(id).map(|n| n.local.flags)
    }

    /// Enclosing region, or `None` for top-level (and stale) regions.
    pub fn parent(&self, id: RegionId) -> Option<RegionId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Direct children in document order. Empty for stale identifiers.
    pub fn children(&self, id: RegionId) -> &[RegionId] {
        self.node_opt(id)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    /// Top-level regions in document order.
    pub fn roots(&self) -> &[RegionId] {
        &self.roots
    }

    /// The first region in document order, if any.
    pub fn first_in_document_order(&self) -> Option<RegionId> {
        self.roots.first().copied()
    }

    /// Pre-order walk over all live regions, i.e. the order in which their
    /// opening tags appear in the document.
    pub fn document_order(&self) -> DocumentOrder<'_> {
        DocumentOrder {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Path from the top-level region to `id` (inclusive). Empty for stale identifiers.
    pub fn path_to_root(&self, id: RegionId) -> Vec<RegionId> {
        let mut out = Vec::new();
        let mut cur = Some(id);
        while let Some(c) = cur {
            let Some(node) = self.node_opt(c) else {
                break;
            };
            out.push(c);
            cur = node.parent;
        }
        out.reverse();
        out
    }

    /// Rule names along [`RegionTree::path_to_root`], outermost first.
    pub fn rule_path(&self, id: RegionId) -> Vec<&str> {
        self.path_to_root(id)
            .into_iter()
            .filter_map(|r| self.rule_name(r))
            .collect()
    }

    /// Update region flags.
    pub fn set_flags(&mut self, id: RegionId, flags: RegionFlags) {
        let Some(n) = self.node_opt_mut(id) else {
            return;
        };
        let old = core::mem::replace(&mut n.local.flags, flags);
        let bounds = n.local.bounds;
        if old != flags {
            self.damage.push(bounds);
        }
    }

    /// Set or clear the selection mark. Returns true if the flag changed.
    pub fn set_marked(&mut self, id: RegionId, marked: bool) -> bool {
        let Some(flags) = self.flags(id) else {
            return false;
        };
        if flags.contains(RegionFlags::MARKED) == marked {
            return false;
        }
        let mut next = flags;
        next.set(RegionFlags::MARKED, marked);
        self.set_flags(id, next);
        true
    }

    /// True if `id` is live and carries the selection mark.
    pub fn is_marked(&self, id: RegionId) -> bool {
        self.flags(id).is_some_and(|f| f.contains(RegionFlags::MARKED))
    }

    /// Hit test a world-space point. Returns the innermost region under it.
    ///
    /// Regions are descended by containment. Among overlapping siblings the
    /// later one in document order wins, since it is drawn on top.
    pub fn hit_test_point(&self, pt: Point, filter: QueryFilter) -> Option<Hit> {
        let region = self.hit_in(&self.roots, pt, filter)?;
        Some(Hit {
            region,
            path: self.path_to_root(region),
        })
    }

    /// Drain the repaint damage accumulated since the last call.
    pub fn take_damage(&mut self) -> Damage {
        core::mem::take(&mut self.damage)
    }

    // --- internals ---

    fn hit_in(&self, candidates: &[RegionId], pt: Point, filter: QueryFilter) -> Option<RegionId> {
        for &id in candidates.iter().rev() {
            let Some(node) = self.node_opt(id) else {
                continue;
            };
            if filter.visible_only && !node.local.flags.contains(RegionFlags::VISIBLE) {
                continue;
            }
            if !node.local.bounds.contains(pt) {
                continue;
            }
            if let Some(inner) = self.hit_in(&node.children, pt, filter) {
                return Some(inner);
            }
            if !filter.pickable_only || node.local.flags.contains(RegionFlags::PICKABLE) {
                return Some(id);
            }
        }
        None
    }

    /// Access a region; panics if `id` is stale.
    fn node(&self, id: RegionId) -> &Node {
        self.node_opt(id).expect("dangling RegionId")
    }

    /// Access a region mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: RegionId) -> &mut Node {
        self.node_opt_mut(id).expect("dangling RegionId")
    }

    fn node_opt(&self, id: RegionId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn node_opt_mut(&mut self, id: RegionId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: RegionId, parent: RegionId) {
        let parent_node = self.node_mut(parent);
        parent_node.children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: RegionId, parent: RegionId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }

    fn free_subtree(&mut self, id: RegionId) {
        let children = core::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.free_subtree(child);
        }
        let bounds = self.node(id).local.bounds;
        self.damage.push(bounds);
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }
}

/// Pre-order iterator returned by [`RegionTree::document_order`].
#[derive(Debug)]
pub struct DocumentOrder<'a> {
    tree: &'a RegionTree,
    stack: Vec<RegionId>,
}

impl Iterator for DocumentOrder<'_> {
    type Item = RegionId;

    fn next(&mut self) -> Option<RegionId> {
        let id = self.stack.pop()?;
        self.stack.extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
