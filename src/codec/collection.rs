//! Collection codec support
//!
//! A collection is encoded as a count record followed by each element's
//! records in iteration order. Only ordered containers implement
//! [`Sequence`], since position is the only identity the format keeps.

use std::collections::{LinkedList, VecDeque};

/// An ordered container the codec can rebuild element by element
pub trait Sequence {
    /// Element type, default-constructed before it is populated on decode
    type Item: Default;

    /// Number of elements
    fn count(&self) -> usize;

    /// Remove all elements
    fn clear(&mut self);

    /// Append one element at the back
    fn push_back(&mut self, item: Self::Item);

    /// Elements in encode order
    fn items_mut(&mut self) -> impl Iterator<Item = &mut Self::Item>;
}

impl<T: Default> Sequence for Vec<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn push_back(&mut self, item: T) {
        self.push(item)
    }

    fn items_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.iter_mut()
    }
}

impl<T: Default> Sequence for VecDeque<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
    }

    fn push_back(&mut self, item: T) {
        VecDeque::push_back(self, item)
    }

    fn items_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.iter_mut()
    }
}

impl<T: Default> Sequence for LinkedList<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }

    fn push_back(&mut self, item: T) {
        LinkedList::push_back(self, item)
    }

    fn items_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.iter_mut()
    }
}
