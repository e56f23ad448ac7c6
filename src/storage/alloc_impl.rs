use alloc::{vec::Vec, collections::VecDeque};
use super::Storage;

unsafe impl<T> Storage for Vec<T> {
    type Key = usize;
    type Element = T;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }
    #[inline]
    fn new() -> Self {
        Vec::new()
    }
    #[inline]
    fn add(&mut self, element: T) -> usize {
        self.push(element);
        self.len() - 1
    }
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }
    #[inline]
    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }
    #[inline]
    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional)
    }
    #[inline]
    fn get(&self, key: &usize) -> Option<&T> {
        self.as_slice().get(*key)
    }
    #[inline]
    fn get_mut(&mut self, key: &usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(*key)
    }
    #[inline]
    unsafe fn get_unchecked(&self, key: &usize) -> &T {
        self.as_slice().get_unchecked(*key)
    }
    #[inline]
    unsafe fn get_unchecked_mut(&mut self, key: &usize) -> &mut T {
        self.as_mut_slice().get_unchecked_mut(*key)
    }
}

// Not contiguous, so the unchecked accessors keep the defaults
unsafe impl<T> Storage for VecDeque<T> {
    type Key = usize;
    type Element = T;

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }
    #[inline]
    fn new() -> Self {
        VecDeque::new()
    }
    #[inline]
    fn add(&mut self, element: T) -> usize {
        self.push_back(element);
        self.len() - 1
    }
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
    #[inline]
    fn capacity(&self) -> usize {
        VecDeque::capacity(self)
    }
    #[inline]
    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional)
    }
    #[inline]
    fn get(&self, key: &usize) -> Option<&T> {
        VecDeque::get(self, *key)
    }
    #[inline]
    fn get_mut(&mut self, key: &usize) -> Option<&mut T> {
        VecDeque::get_mut(self, *key)
    }
}
