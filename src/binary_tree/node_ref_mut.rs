use core::fmt::Debug;
use crate::storage::{Storage, DefaultStorage};
use super::{BinaryTree, Node, NodeRef, node::Side};

/// A *mutable* reference to a node in a binary tree.
///
/// Only values can be modified through it: keys and links are owned by the tree, since changing them could break the search order.
#[derive(Debug)]
pub struct NodeRefMut<'a, K, V, I = usize, S = DefaultStorage<Node<K, V, I>>>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    tree: &'a mut BinaryTree<K, V, I, S>,
    index: I,
}
impl<'a, K, V, I, S> NodeRefMut<'a, K, V, I, S>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    /// Creates a new `NodeRefMut` pointing to the specified index in the storage, or `None` if it does not exist.
    pub fn new_raw(tree: &'a mut BinaryTree<K, V, I, S>, index: I) -> Option<Self> {
        if tree.storage.contains_key(&index) {
            Some(unsafe {
                // SAFETY: we just did key checking
                Self::new_raw_unchecked(tree, index)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRefMut` pointing to the specified index in the storage without doing key checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified index is not present in the storage.
    pub unsafe fn new_raw_unchecked(tree: &'a mut BinaryTree<K, V, I, S>, index: I) -> Self {
        Self { tree, index }
    }
    /// Returns the raw storage index of the node.
    pub fn raw_index(&self) -> I {
        self.index
    }
    /// Consumes the reference and returns the underlying raw storage index of the node.
    pub fn into_raw_index(self) -> I {
        self.index
    }
    /// Returns a reference to the search key of the node.
    pub fn key(&self) -> &K {
        &self.tree.node(self.index).key
    }
    /// Returns a reference to the value stored in the node.
    pub fn value(&self) -> &V {
        &self.tree.node(self.index).value
    }
    /// Returns a *mutable* reference to the value stored in the node.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.tree.node_mut(self.index).value
    }
    /// Consumes the reference and returns a *mutable* reference to the value which lives as long as the borrow of the tree.
    pub fn into_value_mut(self) -> &'a mut V {
        &mut self.tree.node_mut(self.index).value
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    pub fn is_root(&self) -> bool {
        NodeRef::from(self).is_root()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    pub fn is_leaf(&self) -> bool {
        NodeRef::from(self).is_leaf()
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    pub fn parent(&self) -> Option<NodeRef<'_, K, V, I, S>> {
        NodeRef::from(self).parent()
    }
    /// Returns a *mutable* reference to the parent node of the pointee, or `None` if it's the root node.
    pub fn parent_mut(&mut self) -> Option<NodeRefMut<'_, K, V, I, S>> {
        let parent = self.tree.node(self.index).parent?;
        Some(unsafe {
            // SAFETY: nodes can never have nonexistent parents
            NodeRefMut::new_raw_unchecked(self.tree, parent)
        })
    }
    /// Returns a reference to the left child, or `None` if there is none.
    pub fn left_child(&self) -> Option<NodeRef<'_, K, V, I, S>> {
        NodeRef::from(self).left_child()
    }
    /// Returns a *mutable* reference to the left child, or `None` if there is none.
    pub fn left_child_mut(&mut self) -> Option<NodeRefMut<'_, K, V, I, S>> {
        self.child_mut(Side::Left)
    }
    /// Returns a reference to the right child, or `None` if there is none.
    pub fn right_child(&self) -> Option<NodeRef<'_, K, V, I, S>> {
        NodeRef::from(self).right_child()
    }
    /// Returns a *mutable* reference to the right child, or `None` if there is none.
    pub fn right_child_mut(&mut self) -> Option<NodeRefMut<'_, K, V, I, S>> {
        self.child_mut(Side::Right)
    }
    /// Consumes the reference and returns one pointing to the left child, or gives the reference back if there is no left child.
    ///
    /// # Errors
    /// Returns `self` unchanged if the node has no left child.
    pub fn into_left_child(self) -> Result<Self, Self> {
        self.into_child(Side::Left)
    }
    /// Consumes the reference and returns one pointing to the right child, or gives the reference back if there is no right child.
    ///
    /// # Errors
    /// Returns `self` unchanged if the node has no right child.
    pub fn into_right_child(self) -> Result<Self, Self> {
        self.into_child(Side::Right)
    }

    fn child_mut(&mut self, side: Side) -> Option<NodeRefMut<'_, K, V, I, S>> {
        let child = self.tree.node(self.index).child(side)?;
        Some(unsafe {
            // SAFETY: child indices are guaranteed to be valid
            NodeRefMut::new_raw_unchecked(self.tree, child)
        })
    }
    fn into_child(self, side: Side) -> Result<Self, Self> {
        match self.tree.node(self.index).child(side) {
            Some(child) => Ok(Self {
                tree: self.tree,
                index: child,
            }),
            None => Err(self),
        }
    }
}

impl<'a, K, V, I, S> From<&'a NodeRefMut<'_, K, V, I, S>> for NodeRef<'a, K, V, I, S>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    #[inline(always)]
    fn from(op: &'a NodeRefMut<'_, K, V, I, S>) -> Self {
        NodeRef {
            tree: &*op.tree,
            index: op.index,
        }
    }
}
impl<'a, K, V, I, S> From<NodeRefMut<'a, K, V, I, S>> for NodeRef<'a, K, V, I, S>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    #[inline(always)]
    fn from(op: NodeRefMut<'a, K, V, I, S>) -> Self {
        NodeRef {
            tree: op.tree,
            index: op.index,
        }
    }
}
