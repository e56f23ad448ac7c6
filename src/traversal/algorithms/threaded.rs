use core::fmt::{self, Formatter, Debug};
use crate::{traversal::TraversableMut, util::abort_on_panic};

/// The position of a [`ThreadedPreOrder`] iterator.
///
/// [`ThreadedPreOrder`]: struct.ThreadedPreOrder.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ThreadedState<C> {
    /// `advance` has not been called yet.
    Uninitialized,
    /// The specified node is the one which was yielded last.
    Positioned(C),
    /// Every node has been yielded. This state is terminal.
    Exhausted,
}

/// A pre-order iterator which uses no auxiliary storage at all, temporarily *threading* the tree instead.
///
/// Before descending into the left subtree of a node, the iterator finds the rightmost node of that subtree and points its right link, which is always empty, back at the node. When the walk later follows that link, it recognizes it as a thread, since a real right link could only ever point to a descendant, removes it and continues with the node's right subtree.
///
/// The tree is borrowed mutably for the whole lifetime of the iterator, so nothing can observe it while threads are in place. Dropping the iterator removes whatever threads are still installed, no matter whether it was exhausted, abandoned halfway through or dropped during a panic unwinding out of a visitor.
///
/// Since the iterator hands out references into the tree it's rewriting, it cannot implement `Iterator`; [`advance`] lends out the entry until the next call instead.
///
/// # Leaking
/// Restoration happens in `Drop`, so leaking a partially advanced iterator (with [`mem::forget`], a reference cycle or the like) leaves its threads in the tree. Nothing unsafe comes of it, since every thread still names a live node, but the tree no longer is a tree: lookups and insertions may loop forever, and traversals may revisit nodes. [`for_each`], [`try_for_each`] and the closure-taking [`pre_order_threaded`] never hand the iterator out and cannot be leaked this way.
///
/// # Example
/// ```rust
/// # use bstree::BinaryTree;
/// let mut tree: BinaryTree<_, _> = vec![(4, 'd'), (2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
/// let mut iter = tree.pre_order_threaded();
/// let mut keys = Vec::new();
/// while let Some((key, _)) = iter.advance() {
///     keys.push(*key);
/// }
/// assert_eq!(keys, [4, 2, 1, 3]);
/// assert_eq!(iter.outstanding_threads(), 0);
/// ```
///
/// [`advance`]: #method.advance " "
/// [`for_each`]: #method.for_each " "
/// [`try_for_each`]: #method.try_for_each " "
/// [`pre_order_threaded`]: fn.pre_order_threaded.html " "
/// [`mem::forget`]: https://doc.rust-lang.org/core/mem/fn.forget.html " "
pub struct ThreadedPreOrder<'a, T: TraversableMut> {
    tree: &'a mut T,
    state: ThreadedState<T::Cursor>,
    threads: usize,
}
impl<'a, T: TraversableMut> ThreadedPreOrder<'a, T> {
    /// Creates an iterator over the specified tree. Nothing is read or written until the first call to [`advance`].
    ///
    /// [`advance`]: #method.advance " "
    #[inline]
    pub fn new(tree: &'a mut T) -> Self {
        Self {
            tree,
            state: ThreadedState::Uninitialized,
            threads: 0,
        }
    }
    /// Returns the current position of the iterator.
    #[inline]
    pub fn state(&self) -> ThreadedState<T::Cursor> {
        self.state
    }
    /// Returns the number of threads which are currently installed in the tree.
    #[inline]
    pub fn outstanding_threads(&self) -> usize {
        self.threads
    }
    /// Moves to the next node in pre-order and returns its entry, or `None` once the whole tree has been visited.
    pub fn advance(&mut self) -> Option<(&T::Key, &T::Value)> {
        let cursor = self.next_cursor()?;
        Some(self.tree.value_of(&cursor))
    }
    /// Calls `f` on every remaining entry in pre-order.
    pub fn for_each(mut self, mut f: impl FnMut(&T::Key, &T::Value)) {
        while let Some((key, value)) = self.advance() {
            f(key, value);
        }
    }
    /// Calls `f` on every remaining entry in pre-order, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`, unchanged. Every thread has been removed by the time the error reaches the caller.
    pub fn try_for_each<E>(
        mut self,
        mut f: impl FnMut(&T::Key, &T::Value) -> Result<(), E>,
    ) -> Result<(), E> {
        while let Some((key, value)) = self.advance() {
            f(key, value)?;
        }
        Ok(())
    }

    fn next_cursor(&mut self) -> Option<T::Cursor> {
        let examine = match self.state {
            ThreadedState::Uninitialized => self.tree.cursor_to_root(),
            // A node with a left child had a thread installed when it was yielded, so the
            // walk goes down; otherwise the right link leads on, be it real or a thread.
            ThreadedState::Positioned(last) => match self.tree.left_of(&last) {
                Some(left) => Some(left),
                None => self.tree.right_of(&last),
            },
            ThreadedState::Exhausted => return None,
        };
        match self.seek(examine) {
            Some(cursor) => {
                self.state = ThreadedState::Positioned(cursor);
                Some(cursor)
            }
            None => {
                debug_assert_eq!(self.threads, 0, "walk ended with threads still installed");
                log::trace!("threaded pre-order finished");
                self.state = ThreadedState::Exhausted;
                None
            }
        }
    }
    /// Walks from `examine` to the next node which has not been yielded yet, installing or removing threads on the way.
    fn seek(&mut self, mut examine: Option<T::Cursor>) -> Option<T::Cursor> {
        while let Some(cursor) = examine {
            let left = match self.tree.left_of(&cursor) {
                Some(left) => left,
                None => return Some(cursor),
            };
            let predecessor = self.rightmost_below(cursor, left);
            if self.tree.right_of(&predecessor).is_none() {
                self.thread(predecessor, cursor);
                return Some(cursor);
            }
            // Back at a node through its thread: the left subtree is done
            self.unthread(predecessor, cursor);
            examine = self.tree.right_of(&cursor);
        }
        None
    }
    /// Returns the rightmost node of the subtree at `left`, treating a right link back to `parent` as absent.
    fn rightmost_below(&self, parent: T::Cursor, left: T::Cursor) -> T::Cursor {
        let mut current = left;
        while let Some(right) = self.tree.right_of(&current) {
            if right == parent {
                break;
            }
            current = right;
        }
        current
    }
    fn thread(&mut self, predecessor: T::Cursor, target: T::Cursor) {
        log::trace!("threading {:?} back to {:?}", predecessor, target);
        let previous = unsafe {
            // SAFETY: the target is a live cursor, and every thread is removed either by the
            // walk itself or by the destructor before the borrow of the tree ends
            self.tree.replace_right_of(&predecessor, Some(target))
        };
        debug_assert!(previous.is_none(), "threading over a real right link of {:?}", predecessor);
        self.threads += 1;
    }
    fn unthread(&mut self, predecessor: T::Cursor, target: T::Cursor) {
        log::trace!("removing the thread from {:?} to {:?}", predecessor, target);
        let previous = unsafe {
            // SAFETY: None is always a valid link
            self.tree.replace_right_of(&predecessor, None)
        };
        debug_assert_eq!(previous, Some(target), "removed a link which was not a thread");
        self.threads -= 1;
    }
    /// Finishes the walk silently until every thread is gone.
    fn restore(&mut self) {
        while self.threads != 0 && self.next_cursor().is_some() {}
    }
}
impl<T: TraversableMut> Drop for ThreadedPreOrder<'_, T> {
    fn drop(&mut self) {
        if self.threads != 0 {
            log::debug!(
                "threaded pre-order dropped with {} outstanding threads, restoring",
                self.threads,
            );
            // A panic in here would leave the tree with cycles in it
            abort_on_panic(|| self.restore());
        }
    }
}
impl<T: TraversableMut + Debug> Debug for ThreadedPreOrder<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadedPreOrder")
            .field("tree", &self.tree)
            .field("state", &self.state)
            .field("threads", &self.threads)
            .finish()
    }
}

/// Calls `f` on every entry of the tree in pre-order without any auxiliary storage.
///
/// See [`ThreadedPreOrder`] for how this works.
///
/// [`ThreadedPreOrder`]: struct.ThreadedPreOrder.html " "
pub fn pre_order_threaded<T, F>(tree: &mut T, f: F)
where
    T: TraversableMut,
    F: FnMut(&T::Key, &T::Value),
{
    ThreadedPreOrder::new(tree).for_each(f)
}
/// Calls `f` on every entry of the tree in pre-order without any auxiliary storage, stopping at the first error.
///
/// # Errors
/// Returns the first error produced by `f`, unchanged. The tree's links are fully restored by the time this function returns, regardless of whether it succeeded.
pub fn try_pre_order_threaded<T, E, F>(tree: &mut T, f: F) -> Result<(), E>
where
    T: TraversableMut,
    F: FnMut(&T::Key, &T::Value) -> Result<(), E>,
{
    ThreadedPreOrder::new(tree).try_for_each(f)
}
