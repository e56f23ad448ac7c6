use core::{
    convert::Infallible,
    fmt::{self, Formatter, Debug},
    marker::PhantomData,
};
use crate::traversal::{Traversable, Visitor, VisitorDirection, CursorResult};

/// A [`Visitor`] which walks a subtree in pre-order by following parent links back up instead of remembering anything on a stack.
///
/// Every node is visited on first arrival. The visitor then goes to the left child if there is one, to the right child otherwise, and climbs up once it reaches a leaf. While climbing, it turns into the right subtree of the first node it reaches from that node's left child, as long as there is a right subtree to turn into. Climbing past the node the traversal started at ends it.
///
/// The only state kept between steps is the starting cursor and the child the visitor is climbing from, so the auxiliary space is constant and the tree is never written to.
///
/// # Example
/// ```rust
/// # use bstree::{BinaryTree, traversal::{Traversable, algorithms::PreOrder}};
/// let tree: BinaryTree<_, _> = vec![(4, ()), (2, ()), (6, ()), (1, ()), (3, ()), (5, ())].into_iter().collect();
/// // Traverse only the subtree rooted at 2
/// let subtree = tree.get_node(&2).unwrap().raw_index();
/// let mut keys = Vec::new();
/// let result: Result<(), ()> = tree.traverse_from(subtree, PreOrder::new(|key: &i32, _: &()| {
///     keys.push(*key);
///     Ok(())
/// }));
/// assert!(result.is_ok());
/// assert_eq!(keys, [2, 1, 3]);
/// ```
///
/// [`Visitor`]: ../trait.Visitor.html " "
pub struct PreOrder<T, F, E>
where
    T: Traversable,
    F: FnMut(&T::Key, &T::Value) -> Result<(), E>,
{
    f: F,
    start: Option<T::Cursor>,
    climbing_from: Option<T::Cursor>,
    _phantom: PhantomData<(fn(&T), fn() -> E)>,
}
impl<T, F, E> PreOrder<T, F, E>
where
    T: Traversable,
    F: FnMut(&T::Key, &T::Value) -> Result<(), E>,
{
    /// Creates a visitor which calls `f` on every entry and stops at the first error it returns.
    #[inline]
    pub fn new(f: F) -> Self {
        Self {
            f,
            start: None,
            climbing_from: None,
            _phantom: PhantomData,
        }
    }
    fn climb(
        &mut self,
        traversable: &T,
        cursor: T::Cursor,
        start: T::Cursor,
    ) -> VisitorDirection<T::Cursor, Result<(), E>> {
        if cursor == start || traversable.parent_of(&cursor).is_none() {
            return VisitorDirection::Stop(Ok(()));
        }
        self.climbing_from = Some(cursor);
        VisitorDirection::Parent
    }
}
impl<T, F, E> Visitor for PreOrder<T, F, E>
where
    T: Traversable,
    F: FnMut(&T::Key, &T::Value) -> Result<(), E>,
{
    type Target = T;
    type Output = Result<(), E>;

    fn visit(
        &mut self,
        traversable: &T,
        cursor: CursorResult<T::Cursor>,
    ) -> VisitorDirection<T::Cursor, Self::Output> {
        // Only ever moves in directions which were checked to exist
        let cursor = cursor.expect("parent-linked pre-order was sent in a nonexistent direction");
        let start = *self.start.get_or_insert(cursor);
        match self.climbing_from.take() {
            None => {
                let (key, value) = traversable.value_of(&cursor);
                if let Err(error) = (self.f)(key, value) {
                    return VisitorDirection::Stop(Err(error));
                }
                if traversable.left_of(&cursor).is_some() {
                    VisitorDirection::Left
                } else if traversable.right_of(&cursor).is_some() {
                    VisitorDirection::Right
                } else {
                    self.climb(traversable, cursor, start)
                }
            }
            Some(child) => {
                if traversable.left_of(&cursor) == Some(child)
                    && traversable.right_of(&cursor).is_some()
                {
                    VisitorDirection::Right
                } else {
                    self.climb(traversable, cursor, start)
                }
            }
        }
    }
}
impl<T, F, E> Debug for PreOrder<T, F, E>
where
    T: Traversable,
    F: FnMut(&T::Key, &T::Value) -> Result<(), E>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreOrder")
            .field("start", &self.start)
            .field("climbing_from", &self.climbing_from)
            .finish()
    }
}

/// Calls `f` on every entry of the tree in pre-order, climbing parent links instead of using a stack.
pub fn pre_order_parent_linked<T, F>(tree: &T, mut f: F)
where
    T: Traversable,
    F: FnMut(&T::Key, &T::Value),
{
    let visitor = PreOrder::<T, _, Infallible>::new(|key, value| {
        f(key, value);
        Ok(())
    });
    match tree.traverse(visitor) {
        Some(Err(infallible)) => match infallible {},
        Some(Ok(())) | None => log::trace!("parent-linked pre-order finished"),
    }
}
/// Calls `f` on every entry of the tree in pre-order, climbing parent links instead of using a stack, stopping at the first error.
///
/// # Errors
/// Returns the first error produced by `f`, unchanged.
pub fn try_pre_order_parent_linked<T, E, F>(tree: &T, f: F) -> Result<(), E>
where
    T: Traversable,
    F: FnMut(&T::Key, &T::Value) -> Result<(), E>,
{
    tree.traverse(PreOrder::new(f)).unwrap_or(Ok(()))
}
