//! LIFO adapter over a back-insertable sequence.

use std::collections::VecDeque;

/// A sequence that can grow and shrink at its back.
pub trait BackSequence {
    type Item;

    fn push_back(&mut self, item: Self::Item);
    fn pop_back(&mut self) -> Option<Self::Item>;
    fn back(&self) -> Option<&Self::Item>;
    fn back_mut(&mut self) -> Option<&mut Self::Item>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> BackSequence for Vec<T> {
    type Item = T;

    fn push_back(&mut self, item: T) {
        self.push(item)
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> BackSequence for VecDeque<T> {
    type Item = T;

    fn push_back(&mut self, item: T) {
        VecDeque::push_back(self, item)
    }

    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    fn back(&self) -> Option<&T> {
        VecDeque::back(self)
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        VecDeque::back_mut(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// Stack over a container `S`, `Vec<T>` by default.
///
/// Comparisons delegate to the container, so two stacks compare by their
/// contents from bottom to top.
///
/// ```
/// use rbcontainers::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stack<T, S = Vec<T>> {
    container: S,
    marker: std::marker::PhantomData<T>,
}

impl<T> Stack<T, Vec<T>> {
    pub fn new() -> Self {
        Self::from_container(Vec::new())
    }
}

impl<T, S: BackSequence<Item = T>> Stack<T, S> {
    /// Wrap an existing container; its back is the top of the stack.
    pub fn from_container(container: S) -> Self {
        Self { container, marker: std::marker::PhantomData }
    }

    pub fn push(&mut self, item: T) {
        self.container.push_back(item)
    }

    /// Remove the top element. `None` on an empty stack.
    pub fn pop(&mut self) -> Option<T> {
        self.container.pop_back()
    }

    pub fn top(&self) -> Option<&T> {
        self.container.back()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.container.back_mut()
    }

    pub fn len(&self) -> usize {
        self.container.len()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Unwrap the underlying container.
    pub fn into_inner(self) -> S {
        self.container
    }
}
