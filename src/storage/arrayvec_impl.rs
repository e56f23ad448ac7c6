use arrayvec::{ArrayVec, Array};
use super::Storage;

unsafe impl<A: Array> Storage for ArrayVec<A> {
    type Key = usize;
    type Element = A::Item;

    #[track_caller]
    fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity <= A::CAPACITY,
            "cannot make room for {} nodes in an ArrayVec of capacity {}",
            capacity,
            A::CAPACITY,
        );
        ArrayVec::new()
    }
    #[inline]
    fn new() -> Self {
        ArrayVec::new()
    }
    #[track_caller]
    fn add(&mut self, element: A::Item) -> usize {
        if self.try_push(element).is_err() {
            panic!("ArrayVec storage is full (capacity {})", A::CAPACITY);
        }
        self.len() - 1
    }
    #[inline]
    fn len(&self) -> usize {
        ArrayVec::len(self)
    }
    #[inline]
    fn capacity(&self) -> usize {
        A::CAPACITY
    }
    #[inline]
    fn is_full(&self) -> bool {
        ArrayVec::is_full(self)
    }
    #[track_caller]
    fn reserve(&mut self, additional: usize) {
        assert!(
            ArrayVec::len(self) + additional <= A::CAPACITY,
            "ArrayVec cannot grow past its capacity of {}; use SmallVec for a tree which can",
            A::CAPACITY,
        );
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
