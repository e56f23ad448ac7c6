//! Recursive pre-order traversal.
//!
//! The simplest strategy there is. The call stack grows by one frame per level of the tree, so degenerate trees with many thousands of levels can overflow it; use [`PreOrderStack`] or [`ThreadedPreOrder`] for those.
//!
//! [`PreOrderStack`]: ../struct.PreOrderStack.html " "
//! [`ThreadedPreOrder`]: ../struct.ThreadedPreOrder.html " "

use core::convert::Infallible;
use crate::traversal::Traversable;

/// Calls `f` on every entry of the tree in pre-order.
///
/// # Example
/// ```rust
/// # use bstree::{BinaryTree, traversal::algorithms::recursive::pre_order_recursive};
/// let tree: BinaryTree<_, _> = vec![(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
/// let mut values = String::new();
/// pre_order_recursive(&tree, |_, value| values.push(*value));
/// assert_eq!(values, "bac");
/// ```
pub fn pre_order_recursive<'a, T, F>(tree: &'a T, mut f: F)
where
    T: Traversable,
    F: FnMut(&'a T::Key, &'a T::Value),
{
    let result = recurse(tree, tree.cursor_to_root(), 1, &mut |_, key, value| {
        f(key, value);
        Ok::<(), Infallible>(())
    });
    match result {
        Ok(()) => log::trace!("recursive pre-order finished"),
        Err(infallible) => match infallible {},
    }
}
/// Calls `f` on every entry of the tree in pre-order, stopping at the first error.
///
/// # Errors
/// Returns the first error produced by `f`, unchanged. No further entries are visited after that.
pub fn try_pre_order_recursive<'a, T, E, F>(tree: &'a T, mut f: F) -> Result<(), E>
where
    T: Traversable,
    F: FnMut(&'a T::Key, &'a T::Value) -> Result<(), E>,
{
    recurse(tree, tree.cursor_to_root(), 1, &mut |_, key, value| f(key, value))
}

/// Visits the subtree at `cursor` in pre-order, passing the depth of every node (starting from `depth` for the subtree's root) along with its entry.
pub(crate) fn recurse<'a, T, E, F>(
    tree: &'a T,
    cursor: Option<T::Cursor>,
    depth: usize,
    f: &mut F,
) -> Result<(), E>
where
    T: Traversable,
    F: FnMut(usize, &'a T::Key, &'a T::Value) -> Result<(), E>,
{
    let cursor = match cursor {
        Some(cursor) => cursor,
        None => return Ok(()),
    };
    let (key, value) = tree.value_of(&cursor);
    f(depth, key, value)?;
    recurse(tree, tree.left_of(&cursor), depth + 1, f)?;
    recurse(tree, tree.right_of(&cursor), depth + 1, f)
}
