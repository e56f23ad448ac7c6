use core::fmt::Debug;

/// A node of a binary search tree.
///
/// Created by the binary tree internally and only publicly exposed so that binary tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<K, V, I>
where I: Copy + Debug + Eq,
{
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Option<I>,
    pub(super) right: Option<I>,
    pub(super) parent: Option<I>,
}
impl<K, V, I> Node<K, V, I>
where I: Copy + Debug + Eq,
{
    #[inline(always)]
    pub(super) fn leaf(key: K, value: V, parent: Option<I>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }
    #[inline(always)]
    pub(super) fn has_children(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }
    /// Returns the child link on the specified side.
    #[inline(always)]
    pub(super) fn child(&self, side: Side) -> Option<I> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
    #[inline(always)]
    pub(super) fn child_mut(&mut self, side: Side) -> &mut Option<I> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Which of the two child links of a node is meant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(super) enum Side {
    Left,
    Right,
}
