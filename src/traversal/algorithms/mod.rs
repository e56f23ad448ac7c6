//! Pre-order traversal strategies.
//!
//! All of them visit the same nodes in the same order: a node, then its entire left subtree, then its entire right subtree. They differ in what they use to remember where to go next:
//! - [`recursive`]: the call stack; auxiliary space proportional to the height of the tree
//! - [`PreOrderStack`]: an explicit stack of cursors, at most one per node
//! - [`ThreadedPreOrder`]: nothing but the tree itself. Unused right links are temporarily pointed back up the tree and restored afterwards, which requires exclusive access
//! - [`PreOrder`]: parent links, for trees which store them; read-only and stack-free
//!
//! [`Strategy`] selects between them at runtime.
//!
//! [`recursive`]: recursive/index.html " "
//! [`PreOrderStack`]: struct.PreOrderStack.html " "
//! [`ThreadedPreOrder`]: struct.ThreadedPreOrder.html " "
//! [`PreOrder`]: struct.PreOrder.html " "
//! [`Strategy`]: enum.Strategy.html " "

pub mod recursive;
mod iterative;
mod parent_linked;
mod threaded;

pub use recursive::{pre_order_recursive, try_pre_order_recursive};
pub use iterative::{CursorStack, PreOrderStack, pre_order_iterative, try_pre_order_iterative};
pub use parent_linked::{PreOrder, pre_order_parent_linked, try_pre_order_parent_linked};
pub use threaded::{ThreadedPreOrder, ThreadedState, pre_order_threaded, try_pre_order_threaded};

use core::convert::Infallible;
use super::TraversableMut;

/// A pre-order traversal strategy, for choosing one at runtime.
///
/// # Example
/// ```rust
/// # use bstree::{BinaryTree, Strategy};
/// let mut tree: BinaryTree<_, _> = vec![(4, ()), (2, ()), (6, ()), (1, ())].into_iter().collect();
/// for &strategy in Strategy::ALL.iter() {
///     let mut keys = Vec::new();
///     strategy.pre_order(&mut tree, |key, _| keys.push(*key));
///     assert_eq!(keys, [4, 2, 1, 6], "{:?} disagrees", strategy);
/// }
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Plain recursion. See [`pre_order_recursive`].
    ///
    /// [`pre_order_recursive`]: fn.pre_order_recursive.html " "
    Recursive,
    /// An explicit stack of cursors. See [`PreOrderStack`].
    ///
    /// [`PreOrderStack`]: struct.PreOrderStack.html " "
    Iterative,
    /// Temporary threads through unused right links. See [`ThreadedPreOrder`].
    ///
    /// [`ThreadedPreOrder`]: struct.ThreadedPreOrder.html " "
    Threaded,
    /// Climbing parent links. See [`PreOrder`].
    ///
    /// [`PreOrder`]: struct.PreOrder.html " "
    ParentLinked,
}
impl Strategy {
    /// Every available strategy.
    pub const ALL: [Self; 4] = [
        Self::Recursive,
        Self::Iterative,
        Self::Threaded,
        Self::ParentLinked,
    ];
    /// Returns `true` if the strategy never writes to the tree, `false` otherwise.
    ///
    /// Only [`Threaded`] writes, and it puts every link back before returning.
    ///
    /// [`Threaded`]: #variant.Threaded " "
    #[inline]
    pub fn is_read_only(self) -> bool {
        !matches!(self, Self::Threaded)
    }
    /// Calls `f` on every entry of the tree in pre-order using this strategy.
    ///
    /// The tree is borrowed mutably since the threaded strategy needs it; all others only read from it.
    pub fn pre_order<T, F>(self, tree: &mut T, mut f: F)
    where
        T: TraversableMut,
        F: FnMut(&T::Key, &T::Value),
    {
        let result = self.try_pre_order(tree, |key, value| {
            f(key, value);
            Ok::<(), Infallible>(())
        });
        match result {
            Ok(()) => {}
            Err(infallible) => match infallible {},
        }
    }
    /// Calls `f` on every entry of the tree in pre-order using this strategy, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`, unchanged.
    pub fn try_pre_order<T, E, F>(self, tree: &mut T, f: F) -> Result<(), E>
    where
        T: TraversableMut,
        F: FnMut(&T::Key, &T::Value) -> Result<(), E>,
    {
        match self {
            Self::Recursive => try_pre_order_recursive(&*tree, f),
            Self::Iterative => try_pre_order_iterative(&*tree, f),
            Self::Threaded => try_pre_order_threaded(tree, f),
            Self::ParentLinked => try_pre_order_parent_linked(&*tree, f),
        }
    }
}
