//! Backing storages for the nodes of a tree.
//!
//! Trees in this crate never remove nodes, so a storage only has to be able to append an element and hand out a key which stays valid until the storage is dropped. Every list-like collection qualifies, with the position of an element serving as its key:
//! - [`Vec`] and [`VecDeque`], with the `alloc` feature
//! - [`ArrayVec`], for trees with a fixed upper bound on the number of nodes, always available
//! - [`SmallVec`], with the `smallvec` feature
//!
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "

#[cfg(feature = "alloc")]
mod alloc_impl;
mod arrayvec_impl;
#[cfg(feature = "smallvec")]
mod smallvec_impl;

use core::fmt::Debug;
use crate::util::unreachable_debugchecked;

/// Append-only containers which can hold the nodes of a tree.
///
/// # Safety
/// Trees call [`get_unchecked`] and [`get_unchecked_mut`] with every key they have ever received from [`add`], so implementations must guarantee the following:
/// - `new` and `with_capacity` return empty storages;
/// - a key returned by `add` keeps pointing to the same element, in the state it was last left in, for as long as the storage lives;
/// - `contains_key` returns `true` for exactly the keys which `get` would succeed for, and `get_unchecked`/`get_unchecked_mut` are sound for all of them.
///
/// [`add`]: #tymethod.add " "
/// [`get_unchecked`]: #method.get_unchecked " "
/// [`get_unchecked_mut`]: #method.get_unchecked_mut " "
pub unsafe trait Storage: Sized {
    /// The key under which elements are found.
    type Key: Copy + Debug + Eq;
    /// The type of the elements stored.
    type Element;

    /// Creates an empty storage which can hold at least the specified number of elements without reallocating.
    ///
    /// # Panics
    /// Storages with a fixed capacity panic if asked for more than they can ever hold.
    fn with_capacity(capacity: usize) -> Self;
    /// Creates an empty storage. Growable storages created this way do not allocate memory.
    #[inline]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Appends an element, returning the key it can be found under from now on.
    ///
    /// # Panics
    /// Storages with a fixed capacity panic if they are already full; check [`is_full`] beforehand to avoid that.
    ///
    /// [`is_full`]: #method.is_full " "
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Returns the number of elements in the storage.
    fn len(&self) -> usize;
    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the number of elements the storage can hold without reallocating.
    fn capacity(&self) -> usize;
    /// Returns `true` if adding another element would fail because the storage cannot grow, `false` otherwise. Growable storages always return `false`, which is what the default implementation does.
    #[inline]
    fn is_full(&self) -> bool {
        false
    }
    /// Makes room for at least `additional` more elements.
    ///
    /// # Panics
    /// Storages with a fixed capacity panic if that many elements would not fit.
    fn reserve(&mut self, additional: usize);

    /// Returns a reference to the element under the specified key, or `None` if there is no such key.
    fn get(&self, key: &Self::Key) -> Option<&Self::Element>;
    /// Returns a *mutable* reference to the element under the specified key, or `None` if there is no such key.
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element>;
    /// Returns `true` if there is an element under the specified key, `false` otherwise.
    #[inline]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }
    /// Returns a reference to the element under the specified key without checking whether it exists.
    ///
    /// The default implementation goes through `get` and relies on the optimizer to remove the check.
    ///
    /// # Safety
    /// The key must be present in the storage.
    #[inline]
    unsafe fn get_unchecked(&self, key: &Self::Key) -> &Self::Element {
        match self.get(key) {
            Some(element) => element,
            None => unreachable_debugchecked("storage key check failed"),
        }
    }
    /// Returns a *mutable* reference to the element under the specified key without checking whether it exists.
    ///
    /// # Safety
    /// The key must be present in the storage.
    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: &Self::Key) -> &mut Self::Element {
        match self.get_mut(key) {
            Some(element) => element,
            None => unreachable_debugchecked("storage key check failed"),
        }
    }
}

/// The default storage type used by the tree types when a storage type is not provided.
///
/// With the `alloc` feature, this is a plain `Vec`. Without it, this is an [`ArrayVec`] *with zero-sized backing storage*, which cannot hold a single node; pick an `ArrayVec` with an actual capacity in that case.
///
/// [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
pub type DefaultStorage<T> = _DefaultStorage<T>;

#[cfg(feature = "alloc")]
type _DefaultStorage<T> = alloc::vec::Vec<T>;
#[cfg(not(feature = "alloc"))]
type _DefaultStorage<T> = arrayvec::ArrayVec<[T; 0]>;
