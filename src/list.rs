use std::{
    fmt::{self, Debug},
    mem::replace,
    ops::Index,
};

use derive_ex::Ex;
use slabmap::SlabMap;

use crate::{
    cursor::{Cursor, IntoIter, Iter},
    CopyError, IndexError, ListChange, ListenerKey,
};


type Listener<T> = Box<dyn FnMut(&ListChange<T>)>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Box<Self> {
        Box::new(Self { value, next: None })
    }
}

/// A mutable, ordered collection backed by a singly-linked chain of owned
/// nodes, reporting each mutation to registered listeners.
///
/// Each node exclusively owns its successor, so the chain is acyclic by
/// construction and released deterministically. Traversal-based operations
/// (`push`, `get`, `contains`, `remove`) are O(n).
///
/// Not safe for concurrent mutation without external synchronization.
#[derive(Ex)]
#[derive_ex(Default)]
#[default(Self::new())]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
    listeners: SlabMap<Listener<T>>,
    // dispatch order; slab keys are reused, so insertion order lives here
    order: Vec<ListenerKey>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            head: None,
            len: 0,
            listeners: SlabMap::new(),
            order: Vec::new(),
        }
    }

    /// Number of live nodes in the chain.
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Registers `f` to be called synchronously, in registration order,
    /// after every mutation of this list.
    ///
    /// Listeners live until [`unsubscribe`](Self::unsubscribe) and are not
    /// carried over by [`Clone`].
    pub fn subscribe(&mut self, f: impl FnMut(&ListChange<T>) + 'static) -> ListenerKey {
        let key = ListenerKey(self.listeners.insert(Box::new(f)));
        self.order.push(key);
        key
    }

    /// Removes the listener identified by `key`, returning whether it was
    /// still registered.
    pub fn unsubscribe(&mut self, key: ListenerKey) -> bool {
        if self.listeners.remove(key.0).is_some() {
            self.order.retain(|k| *k != key);
            true
        } else {
            false
        }
    }

    /// Returns the value at `index`, walking `index` links from the head.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.node_at(index).map(|node| &node.value)
    }

    /// Returns a restartable cursor bound to the chain as it exists now.
    ///
    /// On an empty list the first [`move_next`](Cursor::move_next) returns
    /// `false` immediately.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.head.as_deref())
    }

    /// Iterates the chain in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.len)
    }

    fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut cur = self.head.as_deref();
        for _ in 0..index {
            cur = cur?.next.as_deref();
        }
        cur
    }
    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut cur = self.head.as_deref_mut();
        for _ in 0..index {
            cur = cur?.next.as_deref_mut();
        }
        cur
    }

    /// Unlinks the node at `index`, relinking its predecessor to its
    /// successor.
    fn unlink(&mut self, index: usize) {
        let mut cur = &mut self.head;
        for _ in 0..index {
            if let Some(node) = cur {
                cur = &mut node.next;
            }
        }
        if let Some(node) = cur.take() {
            *cur = node.next;
            self.len -= 1;
        }
    }

    /// Releases the chain iteratively so deep chains cannot overflow the
    /// drop stack.
    fn release_chain(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }

    pub(crate) fn pop_head(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    fn emit(&mut self, change: ListChange<T>) {
        self.listeners.optimize();
        for key in &self.order {
            if let Some(f) = self.listeners.get_mut(key.0) {
                f(&change);
            }
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Whether any node, head through tail inclusive, equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

impl<T: Clone> LinkedList<T> {
    /// Appends `value` as the new tail and emits [`ListChange::Insert`].
    pub fn push(&mut self, value: T) {
        let old_items = self.snapshot_if_observed();
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(Node::new(value));
        self.len += 1;
        if let Some(old_items) = old_items {
            let new_items = self.to_vec();
            self.emit(ListChange::Insert {
                new_items,
                old_items,
            });
        }
    }

    /// Unlinks the first node in chain order equal to `value` and emits
    /// [`ListChange::Remove`], returning whether a removal occurred.
    ///
    /// An absent value is a normal `false` result: nothing is mutated and
    /// no event fires.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(index) = self.iter().position(|v| v == value) else {
            return false;
        };
        let old_items = self.snapshot_if_observed();
        self.unlink(index);
        if let Some(old_items) = old_items {
            let new_items = self.to_vec();
            self.emit(ListChange::Remove {
                new_items,
                old_items,
            });
        }
        true
    }

    /// Overwrites the value at `index`, emitting [`ListChange::Set`] with
    /// the previous value.
    ///
    /// A failed bounds check mutates nothing and emits nothing.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        let len = self.len;
        let observed = !self.listeners.is_empty();
        let Some(node) = self.node_at_mut(index) else {
            return Err(IndexError { index, len });
        };
        if !observed {
            node.value = value;
            return Ok(());
        }
        let old_value = replace(&mut node.value, value.clone());
        self.emit(ListChange::Set {
            new_value: value,
            old_value,
        });
        Ok(())
    }

    /// Releases the entire chain and emits exactly one [`ListChange::Clear`]
    /// carrying the pre-clear contents, even when the list was already empty.
    pub fn clear(&mut self) {
        let old_items = self.snapshot_if_observed();
        self.release_chain();
        self.len = 0;
        if let Some(old_items) = old_items {
            self.emit(ListChange::Clear { old_items });
        }
    }

    /// Copies all `len` elements in chain order into `dst` starting at
    /// `offset`. On error nothing is written.
    pub fn copy_to(&self, dst: &mut [T], offset: usize) -> Result<(), CopyError> {
        if offset > dst.len() {
            return Err(CopyError::Offset {
                offset,
                len: dst.len(),
            });
        }
        let available = dst.len() - offset;
        if available < self.len {
            return Err(CopyError::Capacity {
                needed: self.len,
                available,
            });
        }
        for (slot, value) in dst[offset..offset + self.len].iter_mut().zip(self.iter()) {
            *slot = value.clone();
        }
        Ok(())
    }

    /// Chain-order snapshot of the current contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn snapshot_if_observed(&self) -> Option<Vec<T>> {
        if self.listeners.is_empty() {
            None
        } else {
            Some(self.to_vec())
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.release_chain();
    }
}

/// Value-by-value copy of the chain in the same order, sharing no nodes
/// with the source and starting with an empty listener set.
impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut head = None;
        let mut tail = &mut head;
        let mut len = 0;
        for value in iter {
            let node = tail.insert(Node::new(value));
            tail = &mut node.next;
            len += 1;
        }
        Self {
            head,
            len,
            listeners: SlabMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Clone> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("index out of bounds")
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for LinkedList<T> {}
