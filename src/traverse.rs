//! Visiting the values of a [`Tree`] in pre-order, in-order, post-order or level-order.
//!
//! Every order is available as a visitor method taking a closure and as a lazy iterator. The
//! iterators keep their own stack (or queue) of pending nodes instead of recursing, so they can
//! be stopped at any point and never run out of call stack on a degenerate tree.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseOrderError;
use crate::node::{drop_iteratively, Link, Node};
use crate::tree::Tree;

/// The order in which a traversal visits values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree. Inserting values in this order into an empty
    /// tree rebuilds the same shape.
    Pre,
    /// Left subtree, then node, then right subtree. Values come out sorted.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
    /// Breadth first: level by level from the root, left to right within a level.
    Level,
}

impl Order {
    /// Every order, in the order the demo binary prints them.
    pub const ALL: [Order; 4] = [Order::Pre, Order::In, Order::Post, Order::Level];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Order::Pre => "pre",
            Order::In => "in",
            Order::Post => "post",
            Order::Level => "level",
        })
    }
}

impl FromStr for Order {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre" | "preorder" | "pre-order" => Ok(Order::Pre),
            "in" | "inorder" | "in-order" => Ok(Order::In),
            "post" | "postorder" | "post-order" => Ok(Order::Post),
            "level" | "levelorder" | "level-order" | "bfs" => Ok(Order::Level),
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

impl<T> Tree<T> {
    /// Calls `visit` on every value in pre-order.
    ///
    /// This recurses once per level of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 4, 2].into_iter().collect();
    /// let mut copy = Tree::new();
    /// tree.pre_order(|value| copy.insert(*value));
    ///
    /// assert_eq!(format!("{copy:?}"), format!("{tree:?}"));
    /// ```
    pub fn pre_order(&self, mut visit: impl FnMut(&T)) {
        fn walk<T>(node: Option<&Node<T>>, visit: &mut impl FnMut(&T)) {
            if let Some(node) = node {
                visit(&node.value);
                walk(node.left(), visit);
                walk(node.right(), visit);
            }
        }
        walk(self.root.as_deref(), &mut visit);
    }

    /// Calls `visit` on every value in in-order, i.e. smallest to largest.
    ///
    /// This recurses once per level of the tree. [`Tree::iter`] yields the same sequence without
    /// recursing.
    pub fn in_order(&self, mut visit: impl FnMut(&T)) {
        fn walk<T>(node: Option<&Node<T>>, visit: &mut impl FnMut(&T)) {
            if let Some(node) = node {
                walk(node.left(), visit);
                visit(&node.value);
                walk(node.right(), visit);
            }
        }
        walk(self.root.as_deref(), &mut visit);
    }

    /// Calls `visit` on every value in post-order.
    ///
    /// This recurses once per level of the tree.
    pub fn post_order(&self, mut visit: impl FnMut(&T)) {
        fn walk<T>(node: Option<&Node<T>>, visit: &mut impl FnMut(&T)) {
            if let Some(node) = node {
                walk(node.left(), visit);
                walk(node.right(), visit);
                visit(&node.value);
            }
        }
        walk(self.root.as_deref(), &mut visit);
    }

    /// Calls `visit` on every value in level-order.
    pub fn level_order(&self, visit: impl FnMut(&T)) {
        self.level_order_iter().for_each(visit);
    }

    /// Calls `visit` on every value in the given `order`.
    pub fn traverse(&self, order: Order, visit: impl FnMut(&T)) {
        match order {
            Order::Pre => self.pre_order(visit),
            Order::In => self.in_order(visit),
            Order::Post => self.post_order(visit),
            Order::Level => self.level_order(visit),
        }
    }

    /// Copies every value out in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Order, Tree};
    ///
    /// let tree: Tree<_> = [8, 3, 10, 1, 6].into_iter().collect();
    ///
    /// assert_eq!(tree.to_vec(Order::Pre), vec![8, 3, 1, 6, 10]);
    /// assert_eq!(tree.to_vec(Order::In), vec![1, 3, 6, 8, 10]);
    /// assert_eq!(tree.to_vec(Order::Post), vec![1, 6, 3, 10, 8]);
    /// assert_eq!(tree.to_vec(Order::Level), vec![8, 3, 10, 1, 6]);
    /// ```
    pub fn to_vec(&self, order: Order) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.len());
        self.traverse(order, |value| values.push(value.clone()));
        values
    }

    /// Lazily walks the values in in-order (sorted) order. This is the default iteration order of
    /// the tree. Each call starts a new walk from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [5, 2, 8, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&2, &2, &5, &8]);
    ///
    /// // Stopping early is fine.
    /// assert_eq!(tree.iter().next(), Some(&2));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Lazily walks the values in pre-order.
    pub fn pre_order_iter(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Lazily walks the values in post-order.
    pub fn post_order_iter(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self
                .root
                .as_deref()
                .map(|root| (root, false))
                .into_iter()
                .collect(),
        }
    }

    /// Lazily walks the values in level-order.
    pub fn level_order_iter(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            queue: self.root.as_deref().into_iter().collect(),
        }
    }
}

/// In-order iterator over borrowed values, created by [`Tree::iter`].
///
/// The stack holds every ancestor of the next value that has been passed on the way left but not
/// yielded yet. Its top is always the next value.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator, created by [`Tree::pre_order_iter`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is finished before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.value)
    }
}

/// Post-order iterator, created by [`Tree::post_order_iter`].
pub struct PostOrder<'a, T> {
    /// Pending nodes, flagged once their children have been pushed above them.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}

/// Level-order iterator, created by [`Tree::level_order_iter`].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.value)
    }
}

/// In-order iterator that moves values out of the tree, created by `Tree::into_iter`.
pub struct IntoIter<T> {
    /// Nodes whose left child has already been moved onto the stack above them.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        drop_iteratively(std::mem::take(&mut self.stack));
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its values in in-order (sorted) order.
    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root.take());
        iter
    }
}
