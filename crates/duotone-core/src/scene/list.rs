use crate::coords::Triangle;
use crate::paint::Color;

use super::{DrawCmd, TriangleCmd};

/// Compositing layer for draw items.
///
/// Higher layers paint over lower ones; within a layer, insertion order
/// wins.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Layer(pub u8);

/// Stable sort key: layer ascending, then insertion order.
///
/// Derived `Ord` compares fields in declaration order, which is exactly
/// the paint-order rule.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub layer: Layer,
    pub order: u32,
}

/// A single recorded draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// `push()` is O(1); paint-order iteration reuses an internal index buffer,
/// so a warmed list allocates nothing per frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items, keeping allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records a draw command on `layer`.
    #[inline]
    pub fn push(&mut self, layer: Layer, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey { layer, order },
            cmd,
        });
        self.sorted_dirty = true;
    }

    /// Records a solid triangle on `layer`.
    #[inline]
    pub fn push_triangle(&mut self, layer: Layer, tri: Triangle, color: Color) {
        self.push(layer, DrawCmd::Triangle(TriangleCmd::new(tri, color)));
    }

    /// Iterates items in paint order (back-to-front) without cloning.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // SortKey includes the insertion index, so the order is total and
        // stable without a stable sort.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    fn tri(x: f32) -> Triangle {
        Triangle::new(Vec2::new(x, 0.0), Vec2::new(x + 1.0, 0.0), Vec2::new(x, 1.0))
    }

    fn keys(list: &mut DrawList) -> Vec<(u8, u32)> {
        list.iter_in_paint_order()
            .map(|item| (item.key.layer.0, item.key.order))
            .collect()
    }

    #[test]
    fn layers_paint_back_to_front() {
        let mut list = DrawList::new();
        list.push_triangle(Layer(2), tri(0.0), Color::BLACK);
        list.push_triangle(Layer(0), tri(1.0), Color::WHITE);
        list.push_triangle(Layer(1), tri(2.0), Color::BLACK);

        assert_eq!(keys(&mut list), vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn insertion_order_breaks_ties() {
        let mut list = DrawList::new();
        for i in 0..4 {
            list.push_triangle(Layer(5), tri(i as f32), Color::WHITE);
        }

        assert_eq!(keys(&mut list), vec![(5, 0), (5, 1), (5, 2), (5, 3)]);
    }

    #[test]
    fn clear_resets_ordering() {
        let mut list = DrawList::new();
        list.push_triangle(Layer(3), tri(0.0), Color::BLACK);
        list.clear();
        assert!(list.is_empty());

        list.push_triangle(Layer(0), tri(0.0), Color::WHITE);
        assert_eq!(keys(&mut list), vec![(0, 0)]);
        assert_eq!(list.len(), 1);
    }
}
