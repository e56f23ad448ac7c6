use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
};
use arrayvec::ArrayVec;
use crate::{traversal::Traversable, util::Stack};

/// Storage for the cursors an explicit-stack traversal still has to visit.
///
/// Implemented for `Vec`, `SmallVec` and `ArrayVec`. The stack used by default is picked by the enabled features: `SmallVec` with `smallvec`, `Vec` with `alloc`, and a fixed-capacity `ArrayVec` of 128 cursors with neither.
pub trait CursorStack<C> {
    /// Creates an empty stack.
    fn new() -> Self;
    /// Pushes a cursor, handing it back if the stack has a fixed capacity which is used up.
    ///
    /// # Errors
    /// Returns the cursor if it could not be stored.
    fn push(&mut self, cursor: C) -> Result<(), C>;
    /// Pops the cursor pushed last.
    fn pop(&mut self) -> Option<C>;
    /// Returns the number of cursors on the stack.
    fn len(&self) -> usize;
    /// Returns the cursors on the stack, bottom first.
    fn as_slice(&self) -> &[C];
    /// Returns `true` if the stack holds no cursors.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
#[cfg(feature = "alloc")]
impl<C> CursorStack<C> for alloc::vec::Vec<C> {
    #[inline]
    fn new() -> Self {
        Self::new()
    }
    #[inline]
    fn push(&mut self, cursor: C) -> Result<(), C> {
        Self::push(self, cursor);
        Ok(())
    }
    #[inline]
    fn pop(&mut self) -> Option<C> {
        Self::pop(self)
    }
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
    #[inline]
    fn as_slice(&self) -> &[C] {
        self
    }
}
#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> CursorStack<A::Item> for smallvec::SmallVec<A> {
    #[inline]
    fn new() -> Self {
        Self::new()
    }
    #[inline]
    fn push(&mut self, cursor: A::Item) -> Result<(), A::Item> {
        Self::push(self, cursor);
        Ok(())
    }
    #[inline]
    fn pop(&mut self) -> Option<A::Item> {
        Self::pop(self)
    }
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
    #[inline]
    fn as_slice(&self) -> &[A::Item] {
        self
    }
}
impl<A: arrayvec::Array> CursorStack<A::Item> for ArrayVec<A> {
    #[inline]
    fn new() -> Self {
        Self::new()
    }
    #[inline]
    fn push(&mut self, cursor: A::Item) -> Result<(), A::Item> {
        self.try_push(cursor).map_err(|error| error.element())
    }
    #[inline]
    fn pop(&mut self) -> Option<A::Item> {
        Self::pop(self)
    }
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
    #[inline]
    fn as_slice(&self) -> &[A::Item] {
        self
    }
}

/// A pre-order iterator which keeps the cursors it still has to visit on an explicit stack.
///
/// The stack is seeded with the root. Every step pops a cursor, pushes its right child and then its left child, so that the left subtree is visited first, and yields the popped entry. No more cursors than there are nodes in the tree are ever stored at once.
///
/// The stack type defaults to the one chosen by the enabled features; [`with_stack`] picks a different [`CursorStack`].
///
/// # Panics
/// Iterating panics if the stack has a fixed capacity and more cursors than that are waiting at once. This can only happen with an `ArrayVec` stack, which is the default when neither `alloc` nor `smallvec` is enabled. Every node with both children on the way down a path adds one waiting cursor.
///
/// # Example
/// ```rust
/// # use bstree::BinaryTree;
/// let tree: BinaryTree<_, _> = vec![(4, ()), (2, ()), (6, ()), (1, ()), (3, ())].into_iter().collect();
/// let mut iter = tree.iter_pre_order();
/// let keys: Vec<_> = iter.by_ref().map(|(key, _)| *key).collect();
/// assert_eq!(keys, [4, 2, 1, 3, 6]);
/// assert_eq!(iter.stack_len(), 0);
/// assert_eq!(iter.peak_depth(), 3);
/// ```
///
/// [`with_stack`]: #method.with_stack " "
/// [`CursorStack`]: trait.CursorStack.html " "
pub struct PreOrderStack<'a, T: Traversable, S = Stack<<T as Traversable>::Cursor>> {
    tree: &'a T,
    stack: S,
    peak_depth: usize,
}
impl<'a, T: Traversable> PreOrderStack<'a, T> {
    /// Creates an iterator which starts at the root of the specified tree, using the default stack.
    #[inline]
    pub fn new(tree: &'a T) -> Self {
        Self::with_stack(tree)
    }
}
impl<'a, T, S> PreOrderStack<'a, T, S>
where
    T: Traversable,
    S: CursorStack<T::Cursor>,
{
    /// Creates an iterator which starts at the root of the specified tree, keeping its cursors on a stack of type `S`.
    ///
    /// # Example
    /// ```rust
    /// # use bstree::{BinaryTree, traversal::algorithms::PreOrderStack};
    /// # use arrayvec::ArrayVec;
    /// let tree: BinaryTree<_, _> = vec![(2, ()), (1, ()), (3, ())].into_iter().collect();
    /// let iter = PreOrderStack::<_, ArrayVec<[usize; 4]>>::with_stack(&tree);
    /// assert_eq!(iter.count(), 3);
    /// ```
    pub fn with_stack(tree: &'a T) -> Self {
        let mut iter = Self {
            tree,
            stack: S::new(),
            peak_depth: 0,
        };
        if let Some(root) = tree.cursor_to_root() {
            iter.push(root);
        }
        iter
    }
    /// Returns the number of cursors currently waiting on the stack.
    #[inline]
    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }
    /// Returns the largest number of cursors the stack has held at once so far.
    #[inline]
    pub fn peak_depth(&self) -> usize {
        self.peak_depth
    }
    #[track_caller]
    fn push(&mut self, cursor: T::Cursor) {
        if self.stack.push(cursor).is_err() {
            panic!(
                "explicit traversal stack is full with {} cursors waiting",
                self.stack.len(),
            );
        }
        self.peak_depth = self.peak_depth.max(self.stack.len());
    }
}
impl<'a, T, S> Iterator for PreOrderStack<'a, T, S>
where
    T: Traversable,
    S: CursorStack<T::Cursor>,
{
    type Item = (&'a T::Key, &'a T::Value);
    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.stack.pop()?;
        if let Some(right) = self.tree.right_of(&cursor) {
            self.push(right);
        }
        if let Some(left) = self.tree.left_of(&cursor) {
            self.push(left);
        }
        Some(self.tree.value_of(&cursor))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every waiting cursor is an unvisited node
        (self.stack.len(), None)
    }
}
impl<T, S> FusedIterator for PreOrderStack<'_, T, S>
where
    T: Traversable,
    S: CursorStack<T::Cursor>,
{}
impl<T, S> Debug for PreOrderStack<'_, T, S>
where
    T: Traversable + Debug,
    S: CursorStack<T::Cursor>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreOrderStack")
            .field("tree", &self.tree)
            .field("stack", &self.stack.as_slice())
            .field("peak_depth", &self.peak_depth)
            .finish()
    }
}

/// Calls `f` on every entry of the tree in pre-order, using an explicit stack.
///
/// # Panics
/// Panics if the default stack has a fixed capacity which the tree's shape exceeds; see [`PreOrderStack`].
///
/// [`PreOrderStack`]: struct.PreOrderStack.html " "
pub fn pre_order_iterative<'a, T, F>(tree: &'a T, mut f: F)
where
    T: Traversable,
    F: FnMut(&'a T::Key, &'a T::Value),
{
    let mut iter = PreOrderStack::new(tree);
    for (key, value) in &mut iter {
        f(key, value);
    }
    log::trace!(
        "iterative pre-order finished with a peak stack depth of {}",
        iter.peak_depth(),
    );
}
/// Calls `f` on every entry of the tree in pre-order, using an explicit stack, stopping at the first error.
///
/// # Errors
/// Returns the first error produced by `f`, unchanged. No further entries are visited after that.
///
/// # Panics
/// As [`pre_order_iterative`].
///
/// [`pre_order_iterative`]: fn.pre_order_iterative.html " "
pub fn try_pre_order_iterative<'a, T, E, F>(tree: &'a T, mut f: F) -> Result<(), E>
where
    T: Traversable,
    F: FnMut(&'a T::Key, &'a T::Value) -> Result<(), E>,
{
    let mut iter = PreOrderStack::new(tree);
    for (key, value) in &mut iter {
        f(key, value)?;
    }
    log::trace!(
        "iterative pre-order finished with a peak stack depth of {}",
        iter.peak_depth(),
    );
    Ok(())
}
