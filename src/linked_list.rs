use std::fmt::{self, Debug, Display};
use std::mem;

use crate::error::{Error, Result};

type NodeId = usize;

#[derive(Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

/// A slot in the node arena. Vacated slots form a singly linked free list
/// threaded through `next_free`.
#[derive(Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

/// A doubly linked list whose nodes live in an arena owned by the list.
///
/// Links are arena indices, so `prev` is only ever used for traversal and the
/// chain never forms an ownership cycle. Removed nodes give their slot back to
/// the arena, where the next insertion picks it up again.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    first: Option<NodeId>,
    last: Option<NodeId>,
    len: usize,
}

#[macro_export]
macro_rules! dlist {
    ( $( $x:expr ),* $(,)? ) => {
        {
            let mut temp_list = $crate::DoublyLinkedList::new();
            $(
                temp_list.add_last($x);
            )*
            temp_list
        }
    };
}

impl<T> DoublyLinkedList<T> {
    /// Constructs a new, empty list. Does not allocate.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            first: None,
            last: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<&T> {
        self.first.map(|id| &self.node(id).value)
    }

    pub fn last(&self) -> Option<&T> {
        self.last.map(|id| &self.node(id).value)
    }

    /// Adds `value` to the front of the list.
    pub fn add_first(&mut self, value: T) {
        let id = self.alloc_node(value, None, self.first);
        match self.first {
            Some(old) => self.node_mut(old).prev = Some(id),
            None => self.last = Some(id),
        }
        self.first = Some(id);
        self.len += 1;
    }

    /// Adds `value` to the back of the list.
    pub fn add_last(&mut self, value: T) {
        let id = self.alloc_node(value, self.last, None);
        match self.last {
            Some(old) => self.node_mut(old).next = Some(id),
            None => self.first = Some(id),
        }
        self.last = Some(id);
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`.
    /// `index == len` appends.
    pub fn add_at(&mut self, value: T, index: usize) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        if index == 0 {
            self.add_first(value);
        } else if index == self.len {
            self.add_last(value);
        } else {
            let at = self.node_at(index).ok_or(self.out_of_range(index))?;
            let prev = self.node(at).prev;
            let id = self.alloc_node(value, prev, Some(at));
            if let Some(prev) = prev {
                self.node_mut(prev).next = Some(id);
            }
            self.node_mut(at).prev = Some(id);
            self.len += 1;
        }
        Ok(())
    }

    /// Removes the first value and returns it, or `None` if the list is empty.
    pub fn remove_first(&mut self) -> Option<T> {
        let id = self.first?;
        Some(self.unlink(id))
    }

    /// Removes the last value and returns it, or `None` if the list is empty.
    pub fn remove_last(&mut self) -> Option<T> {
        let id = self.last?;
        Some(self.unlink(id))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let id = self.node_at(index).ok_or(self.out_of_range(index))?;
        Ok(self.unlink(id))
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let id = self.node_at(index).ok_or(self.out_of_range(index))?;
        Ok(&self.node(id).value)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let id = self.node_at(index).ok_or(self.out_of_range(index))?;
        Ok(&mut self.node_mut(id).value)
    }

    /// Replaces the value at `index`, returning the old one.
    pub fn set(&mut self, value: T, index: usize) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Drops every node and releases the arena.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.free = None;
        self.first = None;
        self.last = None;
        self.len = 0;
    }

    /// Reverses the list in place by swapping every node's links.
    pub fn reverse(&mut self) {
        log::trace!("reversing list of {} nodes", self.len);
        let mut cur = self.first;
        while let Some(id) = cur {
            let node = self.node_mut(id);
            mem::swap(&mut node.next, &mut node.prev);
            // the old `next` now sits in `prev`
            cur = node.prev;
        }
        mem::swap(&mut self.first, &mut self.last);
    }

    /// Returns the id of the node at `index`, walking from whichever end is
    /// closer.
    fn node_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }
        if index <= self.len / 2 {
            let mut cur = self.first?;
            for _ in 0..index {
                cur = self.node(cur).next?;
            }
            Some(cur)
        } else {
            let mut cur = self.last?;
            for _ in index..self.len - 1 {
                cur = self.node(cur).prev?;
            }
            Some(cur)
        }
    }

    /// Splices `id` out of the chain and returns its value.
    fn unlink(&mut self, id: NodeId) -> T {
        let (prev, next) = {
            let node = self.node(id);
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.first = next,
        }
        match next {
            Some(next) => self.node_mut(next).prev = prev,
            None => self.last = prev,
        }
        self.len -= 1;
        self.release(id)
    }

    fn alloc_node(&mut self, value: T, prev: Option<NodeId>, next: Option<NodeId>) -> NodeId {
        let node = Slot::Occupied(Node { value, next, prev });
        match self.free {
            Some(id) => {
                if let Slot::Vacant { next_free } = self.slots[id] {
                    self.free = next_free;
                }
                self.slots[id] = node;
                id
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) -> T {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        self.free = Some(id);
        match mem::replace(&mut self.slots[id], vacant) {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => unreachable!("node {id} released twice"),
        }
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("vacant slot {id} linked into the chain"),
        }
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("vacant slot {id} linked into the chain"),
        }
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    fn values(&self) -> Values<'_, T> {
        Values {
            list: self,
            cur: self.first,
        }
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Position of the first node holding `value`, or `None` if there is none.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.values().position(|v| v == value)
    }
}

impl<T: PartialOrd> DoublyLinkedList<T> {
    /// Sorts the list in ascending order with a stable merge sort over the
    /// node chain. Nodes are relinked, never moved or reallocated.
    pub fn sort(&mut self) {
        log::trace!("sorting list of {} nodes", self.len);
        self.first = self.merge_sort(self.first);
        let mut last = self.first;
        while let Some(next) = last.and_then(|id| self.node(id).next) {
            last = Some(next);
        }
        self.last = last;
    }

    fn merge_sort(&mut self, head: Option<NodeId>) -> Option<NodeId> {
        let head = head?;
        if self.node(head).next.is_none() {
            return Some(head);
        }
        let mid = self.middle(head);
        let right = self.node_mut(mid).next.take();
        if let Some(right) = right {
            self.node_mut(right).prev = None;
        }
        let left = self.merge_sort(Some(head));
        let right = self.merge_sort(right);
        self.merge(left, right)
    }

    /// Slow/fast walk: `slow` ends on the last node of the left half.
    fn middle(&self, head: NodeId) -> NodeId {
        let mut slow = head;
        let mut fast = head;
        while let Some(ahead) = self.node(fast).next.and_then(|n| self.node(n).next) {
            fast = ahead;
            if let Some(next) = self.node(slow).next {
                slow = next;
            }
        }
        slow
    }

    /// Merges two sorted, detached chains. On ties the left node goes first.
    fn merge(&mut self, mut left: Option<NodeId>, mut right: Option<NodeId>) -> Option<NodeId> {
        let mut head = None;
        let mut tail: Option<NodeId> = None;
        loop {
            let (l, r) = match (left, right) {
                (Some(l), Some(r)) => (l, r),
                (rest, None) | (None, rest) => {
                    if let Some(rest) = rest {
                        self.append(&mut head, tail, rest);
                    }
                    return head;
                }
            };
            let pick = if self.node(l).value <= self.node(r).value {
                left = self.node(l).next;
                l
            } else {
                right = self.node(r).next;
                r
            };
            self.append(&mut head, tail, pick);
            tail = Some(pick);
        }
    }

    fn append(&mut self, head: &mut Option<NodeId>, tail: Option<NodeId>, id: NodeId) {
        match tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => *head = Some(id),
        }
        self.node_mut(id).prev = tail;
    }
}

struct Values<'a, T> {
    list: &'a DoublyLinkedList<T>,
    cur: Option<NodeId>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cur?);
        self.cur = node.next;
        Some(&node.value)
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[ ]");
        }
        f.write_str("[ ")?;
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(" ]")
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for DoublyLinkedList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len == other.len() && self.values().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<DoublyLinkedList<T>> for Vec<T> {
    fn eq(&self, other: &DoublyLinkedList<T>) -> bool {
        other == self
    }
}
