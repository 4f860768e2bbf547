use derive_ex::Ex;

use crate::list::Node;
use crate::LinkedList;


/// Restartable traversal cursor over the chain captured at creation time.
///
/// Starts in a before-first state; two cursors created from the same list
/// advance independently. Unlike [`Iter`] it can be rewound with
/// [`reset`](Cursor::reset).
#[derive(Ex)]
#[derive_ex(Clone(bound()))]
pub struct Cursor<'a, T> {
    start: Option<&'a Node<T>>,
    current: Option<&'a Node<T>>,
    started: bool,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(start: Option<&'a Node<T>>) -> Self {
        Self {
            start,
            current: None,
            started: false,
        }
    }

    /// Advances to the next node in chain order, landing on the first node
    /// on the initial call. Returns `false` without changing position when
    /// the chain is exhausted.
    pub fn move_next(&mut self) -> bool {
        if !self.started {
            self.started = true;
            self.current = self.start;
            self.current.is_some()
        } else {
            match self.current.and_then(|node| node.next.as_deref()) {
                Some(next) => {
                    self.current = Some(next);
                    true
                }
                None => false,
            }
        }
    }

    /// The value at the cursor, or `None` before the first successful
    /// [`move_next`](Cursor::move_next).
    pub fn current(&self) -> Option<&'a T> {
        self.current.map(|node| &node.value)
    }

    /// Returns to the before-first state. The captured chain is kept.
    pub fn reset(&mut self) {
        self.current = None;
        self.started = false;
    }
}

/// Forward iterator over a chain in insertion order.
#[derive(Ex)]
#[derive_ex(Clone(bound()))]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(next: Option<&'a Node<T>>, remaining: usize) -> Self {
        Self { next, remaining }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> std::iter::FusedIterator for Iter<'_, T> {}

/// Owning iterator that consumes the list front to back.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> IntoIter<T> {
    pub(crate) fn new(list: LinkedList<T>) -> Self {
        Self(list)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
