use smallvec::{SmallVec, Array};
use super::Storage;

unsafe impl<A: Array> Storage for SmallVec<A> {
    type Key = usize;
    type Element = A::Item;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        SmallVec::with_capacity(capacity)
    }
    #[inline]
    fn new() -> Self {
        SmallVec::new()
    }
    #[inline]
    fn add(&mut self, element: A::Item) -> usize {
        self.push(element);
        self.len() - 1
    }
    #[inline]
    fn len(&self) -> usize {
        SmallVec::len(self)
    }
    #[inline]
    fn capacity(&self) -> usize {
        SmallVec::capacity(self)
    }
    #[inline]
    fn reserve(&mut self, additional: usize) {
        SmallVec::reserve(self, additional)
    }
    #[inline]
    fn get(&self, key: &usize) -> Option<&A::Item> {
        self.as_slice().get(*key)
    }
    #[inline]
    fn get_mut(&mut self, key: &usize) -> Option<&mut A::Item> {
        self.as_mut_slice().get_mut(*key)
    }
    #[inline]
    unsafe fn get_unchecked(&self, key: &usize) -> &A::Item {
        self.as_slice().get_unchecked(*key)
    }
    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: &usize) -> &mut A::Item {
        self.as_mut_slice().get_unchecked_mut(*key)
    }
}
