//! Binary search trees stored in an arena, with parent back-references.
//!
//! The [Wikipedia article] on binary search trees covers their use cases and specifics in more detail.
//!
//! Nodes live in a [`Storage`] and refer to each other by storage key, so links are plain indices rather than pointers. Nodes are never removed, which means that every link which has ever been handed out stays valid for the lifetime of the tree.
//!
//! # Example
//! ```rust
//! use bstree::binary_tree::{BinaryTree, NodeRef};
//!
//! // The turbofish there is needed to state that we are using the default storage method instead
//! // of asking the compiler to infer it, which would be impossible.
//! let mut tree = BinaryTree::<_, _>::new();
//! tree.insert(20, "Twenty");
//! tree.insert(10, "Ten");
//! tree.insert(30, "Thirty");
//!
//! // Let's look around the tree we've built.
//! let root = tree.root().unwrap();
//! assert_eq!(root.key(), &20);
//! assert_eq!(root.left_child().unwrap().value(), &"Ten");
//! assert!(root.right_child().unwrap().is_leaf());
//!
//! // Values can be modified in place, but keys cannot.
//! let mut thirty = tree.get_node_mut(&30).unwrap();
//! *thirty.value_mut() = "Thirty!";
//! let thirty = NodeRef::from(thirty); // Conversion from a mutable to an immutable reference
//! assert_eq!(thirty.parent().unwrap().key(), &20);
//!
//! // Every traversal strategy visits the nodes in the same order.
//! let mut keys = Vec::new();
//! tree.pre_order_recursive(|key, _| keys.push(*key));
//! assert_eq!(keys, [20, 10, 30]);
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_search_tree " "
//! [`Storage`]: ../storage/trait.Storage.html " "

mod base;
mod impl_traversable;
mod node;
mod node_ref;
mod node_ref_mut;
#[cfg(test)]
mod tests;

pub use node::Node;
pub use node_ref::NodeRef;
pub use node_ref_mut::NodeRefMut;
pub use base::BinaryTree;

/// A binary tree which uses a `Vec` as backing storage.
///
/// The default `BinaryTree` type already uses this, so this is only provided for explicitness and consistency.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
#[allow(unused_qualifications)]
pub type VecBinaryTree<K, V> = BinaryTree<K, V, usize, alloc::vec::Vec<Node<K, V, usize>>>;
/// A binary tree which uses a `VecDeque` as backing storage.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
#[allow(unused_qualifications)]
pub type VecDequeBinaryTree<K, V> =
    BinaryTree<K, V, usize, alloc::collections::VecDeque<Node<K, V, usize>>>;
/// A binary tree which uses a `SmallVec` holding up to `N` nodes inline as backing storage.
#[cfg(feature = "smallvec")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "smallvec")))]
pub type SmallVecBinaryTree<K, V, A> = BinaryTree<K, V, usize, smallvec::SmallVec<A>>;
