//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Traversable`] and its optional extension, [`TraversableMut`]: *traits for types which describe binary tree-like structures*, exposing a node's entry, its two child links and its parent link
//! - [`Visitor`]: a *trait for types which describe algorithms with state*, driving a cursor over a `Traversable` one step at a time
//! - Implementations of pre-order traversal strategies (see the [`algorithms`] module for more)
//! - The niche [`TraverseIter`] helper, wrapping a [`Visitor`]/[`Traversable`] pair into an iterator interface
//! - Helper types: [`Step`], [`VisitorDirection`] and [`CursorDirectionError`]
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Visitor`]: trait.Visitor.html " "
//! [`Traversable`]: trait.Traversable.html " "
//! [`TraversableMut`]: trait.TraversableMut.html " "
//! [`TraverseIter`]: struct.TraverseIter.html " "
//! [`Step`]: enum.Step.html " "
//! [`VisitorDirection`]: enum.VisitorDirection.html " "
//! [`CursorDirectionError`]: struct.CursorDirectionError.html " "

pub mod algorithms;
pub use algorithms::Strategy;

#[cfg(test)]
mod tests;

use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug, Display},
};

/// Iterator-like structures which control a traversable tree's cursor and use it to read information from the tree.
///
/// Visitors only get shared access to the tree. Strategies which need to rewrite links, like [`ThreadedPreOrder`], are not expressed as visitors.
///
/// [`ThreadedPreOrder`]: algorithms/struct.ThreadedPreOrder.html " "
pub trait Visitor {
    /// The target type which will be traversed by the visitor.
    type Target: Traversable;
    /// The final value produced by the visitor.
    type Output;
    /// Visit the provided node, returning further directions for traversal.
    fn visit(
        &mut self,
        traversable: &Self::Target,
        cursor: CursorResult<<Self::Target as Traversable>::Cursor>,
    ) -> VisitorDirection<<Self::Target as Traversable>::Cursor, Self::Output>;
}
/// The direction in which a visitor wishes to go after visiting a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisitorDirection<C: Copy + Debug + Eq, V> {
    /// Visit the parent of the node which has been visited.
    Parent,
    /// Visit the left child of the node which has been visited.
    Left,
    /// Visit the right child of the node which has been visited.
    Right,
    /// Visit a specific cursor.
    ///
    /// Used when the traversable cannot figure out where to go on its own, for example when a visitor remembers a node it wants to return to.
    SetTo(C),
    /// Stop the execution of the algorithm, producing a final value.
    Stop(V),
}

/// Data structures which can be traversed in pre-order.
///
/// This is the structural contract every traversal strategy relies on: given a cursor, the structure must be able to produce the node's key and value, its left and right child links and its parent link.
pub trait Traversable: Sized {
    /// The search key stored in every node.
    type Key;
    /// The payload stored in every node alongside the key.
    type Value;
    /// The type for the cursor which will be used for keeping track of the traversed nodes.
    ///
    /// Must be cheaply copyable. Cursors of arena-backed trees are storage keys, which stay valid for as long as the node they point to exists.
    type Cursor: Copy + Debug + Eq;

    /// Advances the specified cursor according to the specified directions from the visitor.
    ///
    /// # Errors
    /// Fails if the node does not have a parent or child in the requested direction, if the direction is `SetTo` with a cursor which does not exist or if the direction is `Stop`.
    fn advance_cursor<V>(
        &self,
        cursor: Self::Cursor,
        direction: VisitorDirection<Self::Cursor, V>,
    ) -> CursorResult<Self::Cursor>;
    /// Returns the cursor pointing to the root node, or `None` if the structure is empty.
    fn cursor_to_root(&self) -> Option<Self::Cursor>;
    /// Returns references to the key and the value of the node at the specified cursor.
    fn value_of(&self, cursor: &Self::Cursor) -> (&Self::Key, &Self::Value);
    /// Returns a cursor to the left child of the node at the specified cursor, or `None` if there is none.
    fn left_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the right child of the node at the specified cursor, or `None` if there is none.
    fn right_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the parent of the node at the specified cursor, or `None` if that node is the root node.
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;

    /// Performs one step of the visitor from the specified cursor, returning either the cursor for the next step or the final result of the visitor if it ended.
    fn step<V>(&self, mut visitor: V, cursor: CursorResult<Self::Cursor>) -> Step<Self::Cursor, V::Output>
    where
        V: Visitor<Target = Self>,
    {
        match visitor.visit(self, cursor) {
            VisitorDirection::Stop(val) => Step::End(val),
            other => Step::NextCursor(match cursor {
                Ok(val) => self.advance_cursor(val, other),
                Err(err) => Err(err),
            }),
        }
    }
    /// Traverses the traversable from the root node until the end, returning the final result of the visitor, or `None` without ever calling the visitor if the traversable is empty.
    #[inline(always)]
    fn traverse<V>(&self, visitor: V) -> Option<V::Output>
    where
        V: Visitor<Target = Self>,
    {
        let root = self.cursor_to_root()?;
        Some(self.traverse_from(root, visitor))
    }
    /// Traverses the traversable from the specified starting point until the end, returning the final result of the visitor.
    fn traverse_from<V>(&self, starting_cursor: Self::Cursor, mut visitor: V) -> V::Output
    where
        V: Visitor<Target = Self>,
    {
        let mut cursor = Ok(starting_cursor);
        loop {
            match self.step(&mut visitor, cursor) {
                Step::NextCursor(c) => cursor = c,
                Step::End(f) => return f,
            }
        }
    }
}

/// Data structures whose values can be modified and whose right links can be temporarily rewritten during traversal.
pub trait TraversableMut: Traversable {
    /// Returns a *mutable* reference to the value of the node at the specified cursor, allowing modifications.
    fn value_mut_of(&mut self, cursor: &Self::Cursor) -> &mut Self::Value;
    /// Replaces the right link of the node at the specified cursor, returning the previous one.
    ///
    /// This is the only link mutation stack-free traversal needs: a temporary link from the rightmost node of a left subtree back up to the subtree's parent.
    ///
    /// # Safety
    /// `link` must either be `None` or point to a node which exists in the structure. Every link rewritten this way must be put back to its original value before the structure is used by anything other than the caller, since other code is allowed to rely on right links only ever pointing to descendants.
    unsafe fn replace_right_of(
        &mut self,
        cursor: &Self::Cursor,
        link: Option<Self::Cursor>,
    ) -> Option<Self::Cursor>;
}

/// The result of a single traversal step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step<C: Copy + Debug + Eq, V> {
    /// Traversal is not yet done and another step must be performed at the specified cursor.
    NextCursor(CursorResult<C>),
    /// Traversal has finished with the following final value.
    End(V),
}

/// The error returned by traversables when a visitor gives incorrect directions for the cursor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorDirectionError<C: Copy + Debug + Eq> {
    /// The last valid state of the cursor, right before an incorrect movement was attempted.
    pub previous_state: C,
}
/// A result type for functions receiving or returning a cursor which has possibly been incorrectly driven.
pub type CursorResult<C> = Result<C, CursorDirectionError<C>>;
impl<C: Copy + Debug + Eq> CursorDirectionError<C> {
    /// Returns the previous state of the cursor.
    ///
    /// Primarily used as a convenience function for `unwrap_or_else` on `CursorResult`.
    #[inline(always)]
    pub fn recover(self) -> C {
        self.previous_state
    }
}
impl<C: Copy + Debug + Eq> Display for CursorDirectionError<C> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("cannot move cursor in the specified direction")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<C: Copy + Debug + Eq> std::error::Error for CursorDirectionError<C> {}

/// An iterator which groups a borrowed [`Traversable`] and a [`Visitor`], performing one step with each iteration.
///
/// The iterator produces values of type `Option<V::Output>`, returning `Some(None)` when calling `next` if the visitor did not stop yet and `Some(Some(...))` when it has produced a final value. After that, it will only return `None`. An empty traversable produces no items at all.
///
/// [`Visitor`]: trait.Visitor.html " "
/// [`Traversable`]: trait.Traversable.html " "
pub struct TraverseIter<'a, V, T>
where
    V: Visitor<Target = T>,
    T: Traversable,
{
    visitor: V,
    traversable: &'a T,
    cursor: Option<CursorResult<T::Cursor>>,
    finished: bool,
}
impl<'a, V, T> TraverseIter<'a, V, T>
where
    V: Visitor<Target = T>,
    T: Traversable,
{
    /// Creates a traversal iterator which starts at the root of the specified traversable.
    #[inline(always)]
    pub fn new(visitor: V, traversable: &'a T) -> Self {
        Self {
            visitor,
            traversable,
            cursor: None,
            finished: false,
        }
    }
    /// Creates a traversal iterator which starts at the specified cursor.
    #[inline(always)]
    pub fn starting_at(visitor: V, traversable: &'a T, cursor: T::Cursor) -> Self {
        Self {
            visitor,
            traversable,
            cursor: Some(Ok(cursor)),
            finished: false,
        }
    }
}
impl<'a, V, T> From<(V, &'a T)> for TraverseIter<'a, V, T>
where
    V: Visitor<Target = T>,
    T: Traversable,
{
    #[inline(always)]
    fn from(op: (V, &'a T)) -> Self {
        Self::new(op.0, op.1)
    }
}
impl<V, T> Iterator for TraverseIter<'_, V, T>
where
    V: Visitor<Target = T>,
    T: Traversable,
{
    type Item = Option<V::Output>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let cursor = match self.cursor.take() {
            Some(cursor) => cursor,
            None => match self.traversable.cursor_to_root() {
                Some(root) => Ok(root),
                None => {
                    self.finished = true;
                    return None;
                }
            },
        };
        match self.traversable.step(&mut self.visitor, cursor) {
            Step::NextCursor(c) => {
                self.cursor = Some(c);
                Some(None)
            }
            Step::End(f) => {
                self.finished = true;
                Some(Some(f))
            }
        }
    }
}
impl<V, T> Debug for TraverseIter<'_, V, T>
where
    V: Visitor<Target = T> + Debug,
    T: Traversable + Debug,
{
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraverseIter")
            .field("visitor", &self.visitor)
            .field("traversable", &self.traversable)
            .field("cursor", &self.cursor)
            .field("finished", &self.finished)
            .finish()
    }
}
impl<V, T> FusedIterator for TraverseIter<'_, V, T>
where
    V: Visitor<Target = T>,
    T: Traversable,
{
}

//───────────────────────────────────────────────────────────────────────┐
// Implementations for pointer types                                     │
//───────────────────────────────────────────────────────────────────────┘
impl<T: Visitor> Visitor for &mut T {
    type Target = T::Target;
    type Output = T::Output;
    #[inline(always)]
    fn visit(
        &mut self,
        traversable: &Self::Target,
        cursor: CursorResult<<Self::Target as Traversable>::Cursor>,
    ) -> VisitorDirection<<Self::Target as Traversable>::Cursor, Self::Output> {
        (**self).visit(traversable, cursor)
    }
}
