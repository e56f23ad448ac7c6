use core::{fmt::Debug, mem};
use crate::{
    storage::Storage,
    traversal::{Traversable, TraversableMut, VisitorDirection, CursorDirectionError, CursorResult},
};
use super::{BinaryTree, Node, NodeRef};

impl<K, V, I, S> BinaryTree<K, V, I, S>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    #[track_caller]
    fn node_at(&self, cursor: &I) -> NodeRef<'_, K, V, I, S> {
        NodeRef::new_raw(self, *cursor).unwrap_or_else(|| panic!("invalid cursor: {:?}", cursor))
    }
    #[track_caller]
    fn node_at_mut(&mut self, cursor: &I) -> &mut Node<K, V, I> {
        self.storage
            .get_mut(cursor)
            .unwrap_or_else(|| panic!("invalid cursor: {:?}", cursor))
    }
}

impl<K, V, I, S> Traversable for BinaryTree<K, V, I, S>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    type Key = K;
    type Value = V;
    type Cursor = I;

    fn advance_cursor<O>(
        &self,
        cursor: Self::Cursor,
        direction: VisitorDirection<Self::Cursor, O>,
    ) -> CursorResult<Self::Cursor> {
        // Create the error in advance to avoid duplication
        let error = CursorDirectionError {
            previous_state: cursor,
        };
        let node = NodeRef::new_raw(self, cursor)
            .expect("the node specified by the cursor does not exist");
        match direction {
            VisitorDirection::Parent => node.parent().map(NodeRef::into_raw_index).ok_or(error),
            VisitorDirection::Left => node.left_child().map(NodeRef::into_raw_index).ok_or(error),
            VisitorDirection::Right => node.right_child().map(NodeRef::into_raw_index).ok_or(error),
            VisitorDirection::SetTo(new_cursor) => {
                if self.storage.contains_key(&new_cursor) {
                    Ok(new_cursor)
                } else {
                    // Do not allow returning invalid cursors, as those will cause panicking
                    Err(error)
                }
            }
            VisitorDirection::Stop(..) => Err(error),
        }
    }
    #[inline(always)]
    fn cursor_to_root(&self) -> Option<Self::Cursor> {
        self.root
    }
    #[track_caller]
    fn value_of(&self, cursor: &Self::Cursor) -> (&Self::Key, &Self::Value) {
        self.node_at(cursor).entry()
    }
    #[track_caller]
    fn left_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node_at(cursor).left_child().map(NodeRef::into_raw_index)
    }
    #[track_caller]
    fn right_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node_at(cursor).right_child().map(NodeRef::into_raw_index)
    }
    #[track_caller]
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor> {
        self.node_at(cursor).parent().map(NodeRef::into_raw_index)
    }
}
impl<K, V, I, S> TraversableMut for BinaryTree<K, V, I, S>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    #[track_caller]
    fn value_mut_of(&mut self, cursor: &Self::Cursor) -> &mut Self::Value {
        &mut self.node_at_mut(cursor).value
    }
    #[track_caller]
    unsafe fn replace_right_of(
        &mut self,
        cursor: &Self::Cursor,
        link: Option<Self::Cursor>,
    ) -> Option<Self::Cursor> {
        debug_assert!(
            link.map_or(true, |x| self.storage.contains_key(&x)),
            "debug key check failed: tried to link to key {:?} which is not present in the storage",
            link,
        );
        mem::replace(&mut self.node_at_mut(cursor).right, link)
    }
}
