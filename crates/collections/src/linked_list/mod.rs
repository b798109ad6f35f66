use std::borrow::Borrow;

use crate::boxnode;

/// Owned singly linked list of key-value nodes.
///
/// Every bucket of [`HashTable`](crate::HashTable) is one of these.
/// New nodes always go to the front.
pub struct List<K, V> {
    head: Option<Box<Node<K, V>>>,
    len: usize,
}

impl<K, V> Default for List<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> List<K, V> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, key: K, value: V) {
        self.push_boxed(boxnode!(key, value));
    }

    /// Links an already allocated node in as the new head.
    /// Rehashing moves nodes through here so no node is ever reallocated.
    pub(crate) fn push_boxed(&mut self, mut boxed: Box<Node<K, V>>) {
        boxed.next = self.head.take();
        self.head = Some(boxed);
        self.len += 1;
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Node<K, V>> {
        self.pop_boxed().map(|node| *node)
    }

    pub(crate) fn pop_boxed(&mut self) -> Option<Box<Node<K, V>>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len -= 1;
        Some(node)
    }

    pub fn peek(&self) -> Option<&Node<K, V>> {
        self.head.as_deref()
    }

    pub fn peek_mut(&mut self) -> Option<&mut Node<K, V>> {
        self.head.as_deref_mut()
    }

    /// Walks the chain and returns the first node whose key equals `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.iter().find(|node| node.key.borrow() == key)
    }

    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut curr = self.head.as_deref_mut();
        while let Some(node) = curr {
            if node.key.borrow() == key {
                return Some(node);
            }
            curr = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the first node matching `key`.
    ///
    /// If the node was the head, the head moves to its successor.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.key.borrow() != key) {
            link = &mut link.as_mut()?.next;
        }

        let mut node = link.take()?;
        *link = node.next.take();
        self.len -= 1;
        Some(*node)
    }

    /// Drops every node, leaving an empty list.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            current: self.head.as_deref_mut(),
            len: self.len,
        }
    }
}

impl<K, V> Drop for List<K, V> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            // node goes out of scope here, calling drop
        }
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for List<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a List<K, V> {
    type Item = &'a Node<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) next: Option<Box<Node<K, V>>>,
}

impl<K, V> Node<K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Node<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}
impl<K: Eq, V: Eq> Eq for Node<K, V> {}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for Node<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{:?}, {:?}>", self.key, self.value)
    }
}

// [iterators]

pub struct Iter<'a, K, V> {
    current: Option<&'a Node<K, V>>,
    len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = node.next.as_deref();
        self.len -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    pub fn new(list: &'a List<K, V>) -> Self {
        Self {
            current: list.head.as_deref(),
            len: list.len,
        }
    }
}

/// Yields `(&K, &mut V)` so keys can never be changed in place.
pub struct IterMut<'a, K, V> {
    current: Option<&'a mut Node<K, V>>,
    len: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current.take()?;
        self.current = node.next.as_deref_mut();
        self.len -= 1;
        Some((&node.key, &mut node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}
