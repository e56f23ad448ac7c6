//! Implements an arena-allocated binary search tree and interchangeable pre-order traversal strategies for it.
//!
//! # Overview
//! The tree uses the technique called ["arena-allocated trees"][arena tree blog post]: nodes are kept in a backing storage, typically a [`Vec`], and instead of using pointers to link to children, indices into the storage are used. Links being plain indices is what makes the stack-free traversal possible without any unsafe pointer juggling: a link can be temporarily pointed somewhere else and put back.
//!
//! # Traversal strategies
//! Every strategy visits nodes in **pre-order**: the node itself, then its left subtree, then its right subtree. They only differ in how they remember where to go next:
//! - **Recursive**: the call stack does it. Stack usage is proportional to the height of the tree.
//! - **Iterative**: an explicit stack of cursors, inspectable and not limited by the thread's stack size.
//! - **Threaded**: no auxiliary storage at all. Unused right links of the tree are temporarily pointed back at ancestors (Morris traversal) and restored as soon as they were used, or when the iterator is dropped. Requires exclusive access to the tree for the whole pass.
//! - **Parent-linked**: no auxiliary storage and no mutation, the walk climbs parent links instead.
//!
//! All of them are reachable through the [`Strategy`] enum, the free functions in [`traversal::algorithms`] and the convenience methods on [`BinaryTree`].
//!
//! # Example
//! ```rust
//! use bstree::BinaryTree;
//!
//! let tree: BinaryTree<i32, &str> = vec![
//!     (4, "four"), (2, "two"), (6, "six"), (1, "one"), (3, "three"),
//! ].into_iter().collect();
//!
//! let mut keys = Vec::new();
//! tree.pre_order_recursive(|key, _| keys.push(*key));
//! assert_eq!(keys, [4, 2, 1, 3, 6]);
//! ```
//!
//! # Feature flags
//! - `std` (**enabled by default**) - enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for some types.
//! - `alloc` (**enabled by default**) — adds storage implementations for [`Vec`] and [`VecDeque`] and backs the explicit traversal stack with a `Vec`.
//! - `unwind_safety` (**enabled by default**) — if restoring the links touched by a threaded traversal ever panics, the process is aborted instead of unwinding with a tree in an inconsistent state.
//! - `smallvec` — adds a storage implementation for [`SmallVec`] and uses it for the explicit traversal stack.
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//! - `smallvec` (*optional*) — `^1.4`
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "
//! [`Strategy`]: traversal/enum.Strategy.html " "
//! [`traversal::algorithms`]: traversal/algorithms/index.html " "
//! [`BinaryTree`]: binary_tree/struct.BinaryTree.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage};

pub mod binary_tree;
pub use binary_tree::BinaryTree;

pub mod traversal;
pub use traversal::{Visitor, Traversable, TraversableMut, Strategy};

/// A prelude for using the crate, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        BinaryTree,
        NodeRef as BinaryTreeNodeRef,
        NodeRefMut as BinaryTreeNodeRefMut,
    };
    #[doc(no_inline)]
    pub use crate::traversal::{
        Strategy as TraversalStrategy,
        algorithms::{ThreadedPreOrder, PreOrderStack},
    };
}

pub(crate) mod util;

use core::fmt::{self, Formatter, Display, Debug};

/// The error type returned by [`BinaryTree::try_insert`] when a new node is needed but the storage cannot hold any more elements.
///
/// [`BinaryTree::try_insert`]: binary_tree/struct.BinaryTree.html#method.try_insert " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TryInsertError<K, V> {
    /// The key which was passed to the function, given back so that it doesn't get dropped.
    pub key: K,
    /// The value which was passed to the function, given back for the same reason.
    pub value: V,
}
impl<K, V> TryInsertError<K, V> {
    /// Extracts the entry which could not be inserted.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
impl<K, V> Display for TryInsertError<K, V> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the tree's storage is full")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<K: Debug, V: Debug> std::error::Error for TryInsertError<K, V> {}
