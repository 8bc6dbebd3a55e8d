//! Backing sequences for [`Uniqued`](super::Uniqued).

use std::collections::VecDeque;
use std::collections::vec_deque;
use std::slice;

/// An ordered, indexable, growable sequence of elements.
///
/// [`Uniqued`](super::Uniqued) stores its elements in a `Sequence` and keeps
/// a hash index of positions beside it. The sequence does not need to know
/// anything about uniqueness or hashing.
///
/// # Examples
///
/// ```rust
/// use orderly::uniqued::Sequence;
/// use std::collections::VecDeque;
///
/// fn second<Q: Sequence>(sequence: &Q) -> Option<&Q::Element> {
///     sequence.get(1)
/// }
///
/// assert_eq!(second(&vec![1, 2, 3]), Some(&2));
/// assert_eq!(second(&VecDeque::from([7])), None);
/// ```
pub trait Sequence {
    /// The element type.
    type Element;

    /// Front-to-back iterator over the elements.
    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Element>;

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn at(&self, index: usize) -> &Self::Element {
        match self.get(index) {
            Some(element) => element,
            None => panic!("index {index} out of bounds for length {}", self.len()),
        }
    }

    /// Appends `element` at the back.
    fn push(&mut self, element: Self::Element);

    /// Inserts `element` at `index`, shifting later elements back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    fn insert(&mut self, index: usize, element: Self::Element);

    /// Removes and returns the element at `index`, shifting later elements
    /// forward.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn remove(&mut self, index: usize) -> Self::Element;

    /// Removes and returns the last element.
    fn pop(&mut self) -> Option<Self::Element>;

    /// Removes every element.
    fn clear(&mut self);

    /// Returns an iterator over the elements.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<T> Sequence for Vec<T> {
    type Element = T;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn push(&mut self, element: T) {
        Vec::push(self, element);
    }

    fn insert(&mut self, index: usize, element: T) {
        Vec::insert(self, index, element);
    }

    fn remove(&mut self, index: usize) -> T {
        Vec::remove(self, index)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}

impl<T> Sequence for VecDeque<T> {
    type Element = T;
    type Iter<'a>
        = vec_deque::Iter<'a, T>
    where
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn push(&mut self, element: T) {
        self.push_back(element);
    }

    fn insert(&mut self, index: usize, element: T) {
        VecDeque::insert(self, index, element);
    }

    fn remove(&mut self, index: usize) -> T {
        let length = VecDeque::len(self);
        match VecDeque::remove(self, index) {
            Some(element) => element,
            None => panic!("index {index} out of bounds for length {length}"),
        }
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        VecDeque::iter(self)
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Sequence for smallvec::SmallVec<A> {
    type Element = A::Item;
    type Iter<'a>
        = slice::Iter<'a, A::Item>
    where
        A: 'a;

    #[inline]
    fn len(&self) -> usize {
        smallvec::SmallVec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&A::Item> {
        self.as_slice().get(index)
    }

    #[inline]
    fn push(&mut self, element: A::Item) {
        smallvec::SmallVec::push(self, element);
    }

    fn insert(&mut self, index: usize, element: A::Item) {
        smallvec::SmallVec::insert(self, index, element);
    }

    fn remove(&mut self, index: usize) -> A::Item {
        smallvec::SmallVec::remove(self, index)
    }

    #[inline]
    fn pop(&mut self) -> Option<A::Item> {
        smallvec::SmallVec::pop(self)
    }

    fn clear(&mut self) {
        smallvec::SmallVec::clear(self);
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }
}
