use std::fmt;
use std::io::Write;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::render::Renderer;

type Result<T> = anyhow::Result<T>;

/// One element of the chain. A node owns its successor, so a chain built out of
/// nodes is always finite and acyclic.
pub struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(data: T, next: Option<Node<T>>) -> Self {
        Node {
            data,
            next: next.map(Box::new),
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }
}

/// A link owned by a `LinkedList`. Links are allocated with `Box::leak` and
/// only ever touched through raw pointers, so the tail pointer stays valid
/// while the chain grows.
struct Link<T> {
    data: T,
    next: Option<NonNull<Link<T>>>,
}

impl<T> Link<T> {
    fn alloc(data: T) -> NonNull<Link<T>> {
        NonNull::from(Box::leak(Box::new(Link { data, next: None })))
    }
}

/// A singly linked list with O(1) insertion at both ends.
///
/// `head` owns the whole chain. `last_node` points at the final link and is
/// `None` exactly when `head` is `None`.
pub struct LinkedList<T> {
    head: Option<NonNull<Link<T>>>,
    last_node: Option<NonNull<Link<T>>>,
    len: usize,
    marker: PhantomData<Box<Link<T>>>,
}

// SAFETY: every link is uniquely owned by the list, so the list is exactly as
// thread-safe as a `Box<Link<T>>` chain.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

pub struct Iter<'a, T> {
    next: Option<NonNull<Link<T>>>,
    marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|link| {
            // SAFETY: the list is borrowed for 'a, so the link is alive and
            // nobody mutates it.
            unsafe {
                self.next = (*link.as_ptr()).next;
                &(*link.as_ptr()).data
            }
        })
    }
}

pub struct IterMut<'a, T> {
    next: Option<NonNull<Link<T>>>,
    marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|link| {
            // SAFETY: the list is mutably borrowed for 'a and each link is
            // handed out once.
            unsafe {
                self.next = (*link.as_ptr()).next;
                &mut (*link.as_ptr()).data
            }
        })
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            last_node: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Build a list whose head is the given hand-made chain.
    pub fn from_chain(head: Node<T>) -> Self {
        let mut list = Self::new();
        list.set_head(head);
        list
    }

    /// Install `head` (and everything it links to) as the chain, dropping the
    /// previous one.
    pub fn set_head(&mut self, head: Node<T>) {
        self.clear();

        let mut current_node = Some(Box::new(head));
        while let Some(node) = current_node {
            let Node { data, next } = *node;
            self.insert_at_tail(data);
            current_node = next;
        }

        tracing::debug!(len = self.len, "installed chain as head");
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn insert_at_head(&mut self, data: T) {
        let link = Link::alloc(data);
        // SAFETY: `link` was just allocated and is not shared yet.
        unsafe { (*link.as_ptr()).next = self.head };
        if self.last_node.is_none() {
            self.last_node = Some(link);
        }
        self.head = Some(link);
        self.len += 1;
        tracing::trace!(len = self.len, "inserted at head");
    }

    pub fn insert_at_tail(&mut self, data: T) {
        let link = Link::alloc(data);

        match self.last_node {
            None => self.head = Some(link),
            // SAFETY: `last_node` points at the live tail of this list, and
            // `&mut self` guarantees nothing else borrows it.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(link) },
        }

        self.last_node = Some(link);
        self.len += 1;
        tracing::trace!(len = self.len, "inserted at tail");
    }

    pub fn peek_head(&self) -> Option<&T> {
        // SAFETY: the head is owned by this list and lives as long as `&self`.
        self.head.map(|head| unsafe { &(*head.as_ptr()).data })
    }

    pub fn peek_tail(&self) -> Option<&T> {
        // SAFETY: the tail is owned by this list and lives as long as `&self`.
        self.last_node.map(|tail| unsafe { &(*tail.as_ptr()).data })
    }

    pub fn pop_head(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: `head` came from `Box::leak` and is unlinked below, so
            // ownership goes back to the box exactly once.
            let link = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = link.next;
            self.len -= 1;
            if self.head.is_none() {
                self.last_node = None;
            }
            tracing::trace!(len = self.len, "popped head");
            link.data
        })
    }

    pub fn clear(&mut self) {
        while self.pop_head().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head, marker: PhantomData }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { next: self.head, marker: PhantomData }
    }
}

impl<T: fmt::Display> LinkedList<T> {
    /// Print the chain to standard output, preceded by a bare `None` line when
    /// the list has no head.
    pub fn print(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.render_to(&mut lock)
    }

    pub fn render_to<W: Write>(&self, sink: &mut W) -> Result<()> {
        self.render_with(&Renderer::default(), sink)
    }

    pub fn render_with<W: Write>(&self, renderer: &Renderer, sink: &mut W) -> Result<()> {
        renderer.render_list(self, sink)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Renderer::default().line(self.iter()))
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.insert_at_tail(data);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
