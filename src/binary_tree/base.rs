use core::{
    cmp::Ordering,
    fmt::Debug,
    iter::FromIterator,
    mem,
};
use crate::{
    storage::{Storage, DefaultStorage},
    traversal::{
        algorithms::{self, recursive, PreOrderStack, ThreadedPreOrder},
        Strategy,
    },
    TryInsertError,
};
use super::{Node, NodeRef, NodeRefMut, node::Side};

/// A binary search tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryTree<K, V, I = usize, S = DefaultStorage<Node<K, V, I>>>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    pub(super) storage: S,
    pub(super) root: Option<I>,
}

/// Where a key which is not in the tree would have to be attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Vacancy<I> {
    Root,
    Child(I, Side),
}

impl<K, V, I, S> BinaryTree<K, V, I, S>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    /// Creates an empty tree.
    ///
    /// # Example
    /// ```rust
    /// # use bstree::BinaryTree;
    /// // The turbofish there is needed to state that we are using the default storage method
    /// // instead of asking the compiler to infer it, which would be impossible.
    /// let tree = BinaryTree::<u32, &str>::new();
    /// assert!(tree.is_empty());
    /// assert!(tree.root().is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates an empty tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree has no nodes, `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the amount of nodes the tree can hold without its storage allocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Makes room for at least `additional` more nodes in the storage.
    ///
    /// # Panics
    /// Storages with a fixed capacity panic if that many nodes would not fit.
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }
    /// Returns the number of nodes on the longest path from the root to a leaf, `0` for an empty tree.
    pub fn height(&self) -> usize {
        self.root().map_or(0, |root| root.height())
    }

    /// Returns a reference to the root node of the tree, or `None` if the tree is empty.
    ///
    /// # Example
    /// ```rust
    /// # use bstree::BinaryTree;
    /// let mut tree = BinaryTree::<_, _>::new();
    /// tree.insert(2, "Root");
    /// tree.insert(1, "Left");
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.entry(), (&2, &"Root"));
    /// assert_eq!(root.left_child().unwrap().value(), &"Left");
    /// assert!(root.right_child().is_none());
    /// ```
    pub fn root(&self) -> Option<NodeRef<'_, K, V, I, S>> {
        self.root.map(|root| unsafe {
            // SAFETY: the root index always points into the storage
            NodeRef::new_raw_unchecked(self, root)
        })
    }
    /// Returns a *mutable* reference to the root node of the tree, or `None` if the tree is empty.
    pub fn root_mut(&mut self) -> Option<NodeRefMut<'_, K, V, I, S>> {
        let root = self.root?;
        Some(unsafe {
            // SAFETY: as above
            NodeRefMut::new_raw_unchecked(self, root)
        })
    }

    #[inline(always)]
    pub(super) fn node(&self, index: I) -> &Node<K, V, I> {
        unsafe {
            // SAFETY: links and the root are only ever set to keys returned by the storage, and
            // nothing is ever removed from it
            self.storage.get_unchecked(&index)
        }
    }
    #[inline(always)]
    pub(super) fn node_mut(&mut self, index: I) -> &mut Node<K, V, I> {
        unsafe {
            // SAFETY: as above
            self.storage.get_unchecked_mut(&index)
        }
    }
}
impl<K, V, I, S> BinaryTree<K, V, I, S>
where
    K: Ord,
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    /// Inserts a key-value pair into the tree. If the key was already present, its value is replaced and the old one is returned.
    ///
    /// # Panics
    /// Panics if a new node is needed and the storage has a fixed capacity which is already used up. See [`try_insert`] for a non-panicking version.
    ///
    /// # Example
    /// ```rust
    /// # use bstree::BinaryTree;
    /// let mut tree = BinaryTree::<_, _>::new();
    /// assert_eq!(tree.insert(5, 'a'), None);
    /// assert_eq!(tree.insert(5, 'b'), Some('a'));
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// [`try_insert`]: #method.try_insert " "
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Ok(index) => Some(mem::replace(&mut self.node_mut(index).value, value)),
            Err(vacancy) => {
                self.attach(vacancy, key, value);
                None
            }
        }
    }
    /// Inserts a key-value pair into the tree like [`insert`] does, but returns the pair back instead of panicking if the storage is full.
    ///
    /// # Errors
    /// Will fail if the key is not in the tree yet and the storage cannot hold another node.
    ///
    /// [`insert`]: #method.insert " "
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, TryInsertError<K, V>> {
        match self.search(&key) {
            Ok(index) => Ok(Some(mem::replace(&mut self.node_mut(index).value, value))),
            Err(..) if self.storage.is_full() => Err(TryInsertError { key, value }),
            Err(vacancy) => {
                self.attach(vacancy, key, value);
                Ok(None)
            }
        }
    }
    /// Returns a reference to the value stored under the specified key, or `None` if there's no such key in the tree.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.search(key).ok().map(|index| &self.node(index).value)
    }
    /// Returns a *mutable* reference to the value stored under the specified key, or `None` if there's no such key in the tree.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.search(key).ok()?;
        Some(&mut self.node_mut(index).value)
    }
    /// Returns `true` if the key is present in the tree, `false` otherwise.
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }
    /// Returns a reference to the node holding the specified key, or `None` if there's no such key in the tree.
    pub fn get_node(&self, key: &K) -> Option<NodeRef<'_, K, V, I, S>> {
        self.search(key).ok().map(|index| unsafe {
            // SAFETY: search only returns indices reached by following links
            NodeRef::new_raw_unchecked(self, index)
        })
    }
    /// Returns a *mutable* reference to the node holding the specified key, or `None` if there's no such key in the tree.
    pub fn get_node_mut(&mut self, key: &K) -> Option<NodeRefMut<'_, K, V, I, S>> {
        let index = self.search(key).ok()?;
        Some(unsafe {
            // SAFETY: as above
            NodeRefMut::new_raw_unchecked(self, index)
        })
    }

    /// Descends from the root, returning either the node holding the key or the place where it would be attached.
    fn search(&self, key: &K) -> Result<I, Vacancy<I>> {
        let mut current = match self.root {
            Some(root) => root,
            None => return Err(Vacancy::Root),
        };
        loop {
            let node = self.node(current);
            let side = match key.cmp(&node.key) {
                Ordering::Equal => return Ok(current),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                Some(child) => current = child,
                None => return Err(Vacancy::Child(current, side)),
            }
        }
    }
    fn attach(&mut self, vacancy: Vacancy<I>, key: K, value: V) {
        match vacancy {
            Vacancy::Root => {
                let index = self.storage.add(Node::leaf(key, value, None));
                self.root = Some(index);
            }
            Vacancy::Child(parent, side) => {
                let index = self.storage.add(Node::leaf(key, value, Some(parent)));
                let link = self.node_mut(parent).child_mut(side);
                debug_assert!(link.is_none(), "attaching over an existing {:?} child", side);
                *link = Some(index);
            }
        }
    }
}

/// Pre-order traversal entry points.
///
/// These are thin wrappers around the free functions in [`traversal::algorithms`], provided so that the common case does not need any extra imports.
///
/// [`traversal::algorithms`]: ../traversal/algorithms/index.html " "
impl<K, V, I, S> BinaryTree<K, V, I, S>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    /// Calls `f` on every entry in pre-order, using recursion.
    pub fn pre_order_recursive<'a>(&'a self, f: impl FnMut(&'a K, &'a V)) {
        recursive::pre_order_recursive(self, f)
    }
    /// Calls `f` on every entry in pre-order, using recursion, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_pre_order_recursive<'a, E>(
        &'a self,
        f: impl FnMut(&'a K, &'a V) -> Result<(), E>,
    ) -> Result<(), E> {
        recursive::try_pre_order_recursive(self, f)
    }
    /// Calls `f` on every entry in pre-order, using an explicit stack.
    pub fn pre_order_iterative<'a>(&'a self, f: impl FnMut(&'a K, &'a V)) {
        algorithms::pre_order_iterative(self, f)
    }
    /// Calls `f` on every entry in pre-order, using an explicit stack, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_pre_order_iterative<'a, E>(
        &'a self,
        f: impl FnMut(&'a K, &'a V) -> Result<(), E>,
    ) -> Result<(), E> {
        algorithms::try_pre_order_iterative(self, f)
    }
    /// Returns an iterator over the entries in pre-order, backed by an explicit stack.
    ///
    /// # Example
    /// ```rust
    /// # use bstree::BinaryTree;
    /// let tree: BinaryTree<_, _> = (1..=3).map(|x| (x, x * 10)).collect();
    /// let values: Vec<_> = tree.iter_pre_order().map(|(_, v)| *v).collect();
    /// assert_eq!(values, [10, 20, 30]);
    /// ```
    pub fn iter_pre_order(&self) -> PreOrderStack<'_, Self> {
        PreOrderStack::new(self)
    }
    /// Returns a stack-free pre-order iterator which temporarily threads the tree's unused right links.
    ///
    /// The tree is borrowed mutably for as long as the iterator lives and all links are restored by the time it's dropped, no matter how far it got.
    ///
    /// # Example
    /// ```rust
    /// # use bstree::BinaryTree;
    /// let mut tree: BinaryTree<_, _> = vec![(2, ()), (1, ()), (3, ())].into_iter().collect();
    /// let before = tree.clone();
    ///
    /// let mut iter = tree.pre_order_threaded();
    /// assert_eq!(iter.advance().map(|(k, _)| *k), Some(2));
    /// assert_eq!(iter.outstanding_threads(), 1);
    /// drop(iter); // Stopping early still puts every link back
    ///
    /// assert_eq!(tree, before);
    /// ```
    pub fn pre_order_threaded(&mut self) -> ThreadedPreOrder<'_, Self> {
        ThreadedPreOrder::new(self)
    }
    /// Calls `f` on every entry in pre-order, climbing parent links instead of using any auxiliary storage.
    pub fn pre_order_parent_linked(&self, f: impl FnMut(&K, &V)) {
        algorithms::pre_order_parent_linked(self, f)
    }
    /// Calls `f` on every entry in pre-order using the specified strategy.
    pub fn pre_order_with(&mut self, strategy: Strategy, f: impl FnMut(&K, &V)) {
        strategy.pre_order(self, f)
    }
    /// Calls `f` on every entry in pre-order using the specified strategy, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_pre_order_with<E>(
        &mut self,
        strategy: Strategy,
        f: impl FnMut(&K, &V) -> Result<(), E>,
    ) -> Result<(), E> {
        strategy.try_pre_order(self, f)
    }

    /// Returns the height of the subtree rooted at the specified index.
    ///
    /// Walks the subtree by climbing parent links, so degenerate trees of any depth are fine.
    pub(super) fn subtree_height(&self, index: I) -> usize {
        let mut current = index;
        let mut depth = 1;
        let mut height = 1;
        loop {
            let node = self.node(current);
            if let Some(child) = node.left.or(node.right) {
                current = child;
                depth += 1;
                height = height.max(depth);
                continue;
            }
            // Climb until some ancestor has a right subtree we came from the left of
            loop {
                if current == index {
                    return height;
                }
                let parent = self
                    .node(current)
                    .parent
                    .expect("node below the subtree root has no parent");
                depth -= 1;
                let parent_node = self.node(parent);
                if let (Some(left), Some(right)) = (parent_node.left, parent_node.right) {
                    if left == current {
                        current = right;
                        depth += 1;
                        height = height.max(depth);
                        break;
                    }
                }
                current = parent;
            }
        }
    }
}
impl<K, V, I, S> Default for BinaryTree<K, V, I, S>
where
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
impl<K, V, I, S> Extend<(K, V)> for BinaryTree<K, V, I, S>
where
    K: Ord,
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
impl<K, V, I, S> FromIterator<(K, V)> for BinaryTree<K, V, I, S>
where
    K: Ord,
    S: Storage<Element = Node<K, V, I>, Key = I>,
    I: Copy + Debug + Eq,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
