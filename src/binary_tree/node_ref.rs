use core::fmt::Debug;
use crate::storage::{Storage, DefaultStorage};
use super::{BinaryTree, Node, node::Side};

/// A reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the index of the node in the storage, it can be used to traverse the tree.
#[derive(Debug)]
pub struct NodeRef<'a, K, V, I = usize, S = DefaultStorage<Node<K, V, I>>>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    pub(super) tree: &'a BinaryTree<K, V, I, S>,
    pub(super) index: I,
}
impl<'a, K, V, I, S> NodeRef<'a, K, V, I, S>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified index in the storage, or `None` if it's out of bounds.
    #[inline]
    pub fn new_raw(tree: &'a BinaryTree<K, V, I, S>, index: I) -> Option<Self> {
        if tree.storage.contains_key(&index) {
            Some(unsafe {
                // SAFETY: we just did a key check
                Self::new_raw_unchecked(tree, index)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRef` pointing to the specified index in the storage without doing bounds checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified index is not present in the storage.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(tree: &'a BinaryTree<K, V, I, S>, index: I) -> Self {
        Self { tree, index }
    }
    /// Returns the raw storage index of the node.
    #[inline(always)]
    pub fn raw_index(&self) -> I {
        self.index
    }
    /// Consumes the reference and returns the underlying raw storage index of the node.
    #[inline(always)]
    pub fn into_raw_index(self) -> I {
        self.index
    }
    /// Returns a reference to the search key of the node.
    #[inline(always)]
    pub fn key(&self) -> &'a K {
        &self.node().key
    }
    /// Returns a reference to the value stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a V {
        &self.node().value
    }
    /// Returns references to both the key and the value of the node.
    #[inline(always)]
    pub fn entry(&self) -> (&'a K, &'a V) {
        let node = self.node();
        (&node.key, &node.value)
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.map(|x| unsafe {
            // SAFETY: nodes can never have out-of-bounds parents
            Self::new_raw_unchecked(self.tree, x)
        })
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        !self.node().has_children()
    }
    /// Returns the number of children the node has, from `0` to `2`.
    #[inline]
    pub fn num_children(&self) -> usize {
        let node = self.node();
        usize::from(node.left.is_some()) + usize::from(node.right.is_some())
    }
    /// Returns `true` if the node is the left child of its parent, `false` if it's the right one and `None` if it's the root node.
    pub fn is_left_child(&self) -> Option<bool> {
        let parent = self.parent()?;
        Some(parent.node().left == Some(self.index))
    }
    /// Returns `true` if the node is the right child of its parent, `false` if it's the left one and `None` if it's the root node.
    pub fn is_right_child(&self) -> Option<bool> {
        self.is_left_child().map(|x| !x)
    }
    /// Returns a reference to the left child, or `None` if there is none.
    #[inline]
    pub fn left_child(&self) -> Option<Self> {
        self.child(Side::Left)
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline]
    pub fn right_child(&self) -> Option<Self> {
        self.child(Side::Right)
    }
    /// Returns the number of edges between the node and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = *self;
        while let Some(parent) = current.parent() {
            depth += 1;
            current = parent;
        }
        depth
    }
    /// Returns the number of nodes on the longest path from this node down to a leaf. Leaves have a height of `1`.
    pub fn height(&self) -> usize {
        self.tree.subtree_height(self.index)
    }

    fn child(&self, side: Side) -> Option<Self> {
        self.node().child(side).map(|x| unsafe {
            // SAFETY: child indices are guaranteed to be valid; a key check to make sure that
            // properly holds is below.
            debug_assert!(
                self.tree.storage.contains_key(&x),
                "\
debug key check failed: tried to reference key {:?} which is not present in the storage",
                x,
            );
            Self::new_raw_unchecked(self.tree, x)
        })
    }
    #[inline(always)]
    fn node(&self) -> &'a Node<K, V, I> {
        self.tree.node(self.index)
    }
}
impl<K, V, I, S> Copy for NodeRef<'_, K, V, I, S>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{}
impl<K, V, I, S> Clone for NodeRef<'_, K, V, I, S>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
