//! The [`Tree`] container along with its lookup and mutation operations.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//!
//! // Duplicates are kept.
//! tree.insert(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Each removal takes out one copy.
//! assert!(tree.remove(&1));
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::node::{drop_iteratively, Link, Node, Step};

/// An unbalanced Binary Search Tree of values. This can be used for inserting, finding, and
/// removing values and for visiting them in pre-order, in-order, post-order or level-order.
///
/// Equal values may be inserted any number of times. Each copy is stored in its own node to the
/// right of the copy before it.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values in the tree, counting every duplicate.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value from the tree. Clearing an empty tree does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree: Tree<_> = (0..10).collect();
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.depth(), -1);
    /// ```
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            debug!(len = self.len, "clearing tree");
            drop_iteratively(vec![root]);
        }
        self.len = 0;
    }

    /// Inserts `value` into the tree. This always succeeds: a value equal to one already stored
    /// is placed in the right subtree of the first equal node on the way down.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Order, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    /// tree.insert(4);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.to_vec(Order::Pre), vec![3, 1, 2, 4]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match self.root.as_deref_mut() {
            Some(root) => root.insert(value),
            None => self.root = Some(Node::new_boxed(value)),
        }
        self.len += 1;
        trace!(len = self.len, "inserted value");
    }

    /// Whether a value equal to `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&4));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).0.is_some()
    }

    /// Removes one node holding a value equal to `value`. Returns whether anything was removed.
    ///
    /// The node removed is the first equal node met walking down from the root. It is replaced in
    /// its parent's slot by:
    ///
    /// 1. its left child, if it has no right child,
    /// 2. its right child, if that child has no left child. The right child adopts the removed
    ///    node's left subtree,
    /// 3. otherwise its in-order successor (the left-most node of its right subtree), which is
    ///    first unlinked from its own parent and then adopts both of the removed node's subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Order, Tree};
    ///
    /// let mut tree: Tree<_> = [10, 5, 4, 9, 7, 8, 3, 11].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert_eq!(tree.to_vec(Order::Pre), vec![10, 7, 4, 3, 9, 8, 11]);
    ///
    /// assert!(!tree.remove(&5));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let Some(slot) = self.find_slot(value) else {
            return false;
        };
        let Some(target) = slot.take() else {
            return false;
        };

        let Node { left, right, .. } = *target;
        let case = match right {
            None => {
                *slot = left;
                "no right child"
            }
            Some(mut right) => match right.detach_leftmost() {
                None => {
                    right.left = left;
                    *slot = Some(right);
                    "right child has no left child"
                }
                Some(mut successor) => {
                    successor.left = left;
                    successor.right = Some(right);
                    *slot = Some(successor);
                    "promoted in-order successor"
                }
            },
        };

        self.len -= 1;
        trace!(case, len = self.len, "removed value");
        true
    }

    /// Finds the first node holding `value` on the way down from the root, along with the node it
    /// was reached from. The parent is `None` when the root matched or nothing matched in an empty
    /// tree.
    pub(crate) fn find(&self, value: &T) -> (Option<&Node<T>>, Option<&Node<T>>)
    where
        T: Ord,
    {
        let mut parent = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match node.step(value) {
                Step::Left => node.left(),
                Step::Right => node.right(),
                Step::Found => break,
            };
            parent = Some(node);
        }

        (current, parent)
    }

    /// Finds the slot owning the first node holding `value`. The slot is either the root or the
    /// parent's left or right child, whichever side the search went down.
    fn find_slot(&mut self, value: &T) -> Option<&mut Link<T>>
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            match slot.as_deref()?.step(value) {
                Step::Left => slot = &mut slot.as_mut()?.left,
                Step::Right => slot = &mut slot.as_mut()?.right,
                Step::Found => return Some(slot),
            }
        }
    }
}

/// Rebuilds the tree by inserting a pre-order walk of this one, which reproduces its exact shape.
impl<T> Clone for Tree<T>
where
    T: Ord + Clone,
{
    fn clone(&self) -> Self {
        self.pre_order_iter().cloned().collect()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("depth", &self.depth())
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_invariant;
    use crate::Order;

    fn tree_of(values: &[i32]) -> Tree<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn empty_after_creation() {
        let tree = Tree::<i32>::new();

        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
        assert!(!tree.contains(&0));
    }

    #[test]
    fn insert_and_contains() {
        let mut tree = Tree::new();
        for i in 0..10 {
            assert_eq!(tree.len(), i as usize);
            tree.insert(i);
            assert!(tree.contains(&i));
        }
        for i in 0..10 {
            assert!(tree.contains(&i));
        }
        assert!(!tree.contains(&100));
    }

    #[test]
    fn find_reports_parent() {
        //       8
        //     /   \
        //    3     10
        //     \
        //      6
        let tree = tree_of(&[8, 3, 10, 6]);

        let (node, parent) = tree.find(&8);
        assert_eq!(node.map(|n| n.value), Some(8));
        assert!(parent.is_none());

        let (node, parent) = tree.find(&6);
        assert_eq!(node.map(|n| n.value), Some(6));
        assert_eq!(parent.map(|n| n.value), Some(3));

        let (node, parent) = tree.find(&9);
        assert!(node.is_none());
        assert_eq!(parent.map(|n| n.value), Some(10));

        let empty = Tree::<i32>::new();
        let (node, parent) = empty.find(&1);
        assert!(node.is_none());
        assert!(parent.is_none());
    }

    #[test]
    fn find_stops_at_first_duplicate() {
        let tree = tree_of(&[5, 5, 5]);

        let (node, parent) = tree.find(&5);
        assert!(std::ptr::eq(node.unwrap(), tree.root.as_deref().unwrap()));
        assert!(parent.is_none());
    }

    #[test]
    fn remove_missing_value() {
        let mut tree = tree_of(&[3, 1, 4]);

        assert!(!tree.remove(&2));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.to_vec(Order::Pre), vec![3, 1, 4]);

        let mut empty = Tree::<i32>::new();
        assert!(!empty.remove(&2));
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn remove_leaf() {
        let mut tree = tree_of(&[3, 1, 4, 2]);

        assert!(tree.remove(&2));
        assert_eq!(tree.to_vec(Order::Pre), vec![3, 1, 4]);

        assert!(tree.remove(&4));
        assert_eq!(tree.to_vec(Order::Pre), vec![3, 1]);

        assert!(tree.remove(&1));
        assert_eq!(tree.to_vec(Order::Pre), vec![3]);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn remove_with_only_right_child() {
        let mut tree = tree_of(&[3, 1, 4, 2]);
        tree.remove(&1);

        assert_eq!(tree.to_vec(Order::Pre), vec![3, 2, 4]);
    }

    #[test]
    fn remove_with_only_left_child() {
        let mut tree = tree_of(&[3, 2, 4, 1]);
        tree.remove(&2);

        assert_eq!(tree.to_vec(Order::Pre), vec![3, 1, 4]);
    }

    #[test]
    fn remove_right_child_adopts_left_subtree() {
        //      5
        //    /   \
        //   3     7
        //          \
        //           8
        let mut tree = tree_of(&[5, 3, 7, 8]);
        tree.remove(&5);

        assert_eq!(tree.to_vec(Order::Pre), vec![7, 3, 8]);
        assert_invariant(&tree);
    }

    #[test]
    fn remove_promotes_successor() {
        let mut tree = tree_of(&[10, 5, 4, 9, 7, 8, 3, 11]);
        tree.remove(&5);

        assert_eq!(tree.to_vec(Order::Pre), vec![10, 7, 4, 3, 9, 8, 11]);
        assert_eq!(tree.len(), 7);
        assert_invariant(&tree);
    }

    #[test]
    fn remove_root_variants() {
        let mut tree = tree_of(&[3, 2, 1]);
        tree.remove(&3);
        assert_eq!(tree.to_vec(Order::Pre), vec![2, 1]);

        let mut tree = tree_of(&[3, 4, 5]);
        tree.remove(&3);
        assert_eq!(tree.to_vec(Order::Pre), vec![4, 5]);

        let mut tree = tree_of(&[3]);
        tree.remove(&3);
        assert!(tree.is_empty());
        assert_eq!(tree.to_vec(Order::Pre), Vec::<i32>::new());
    }

    #[test]
    fn remove_root_cascading() {
        let mut tree = tree_of(&[10, 5, 4, 6, 20, 15, 12, 13, 14]);

        tree.remove(&10);
        assert_eq!(tree.to_vec(Order::Pre), vec![12, 5, 4, 6, 20, 15, 13, 14]);

        tree.remove(&12);
        assert_eq!(tree.to_vec(Order::Pre), vec![13, 5, 4, 6, 20, 15, 14]);
        assert_invariant(&tree);
    }

    #[test]
    fn remove_duplicates_one_at_a_time() {
        let mut tree = tree_of(&[5, 3, 5, 7, 5]);

        assert!(tree.remove(&5));
        assert_eq!(tree.len(), 4);
        assert_invariant(&tree);
        assert_eq!(tree.to_vec(Order::In), vec![3, 5, 5, 7]);

        assert!(tree.remove(&5));
        assert!(tree.remove(&5));
        assert!(!tree.remove(&5));
        assert_eq!(tree.to_vec(Order::In), vec![3, 7]);
        assert_invariant(&tree);
    }

    #[test]
    fn remove_duplicate_below_its_twin() {
        //   4
        //    \
        //     6
        //    / \
        //   5   6
        let mut tree = tree_of(&[4, 6, 5, 6]);

        assert!(tree.remove(&6));
        assert_eq!(tree.to_vec(Order::Pre), vec![4, 6, 5]);
        assert!(tree.remove(&6));
        assert_eq!(tree.to_vec(Order::Pre), vec![4, 5]);
        assert_invariant(&tree);
    }

    #[test]
    fn remove_and_contains() {
        let mut tree = Tree::new();
        for i in 0..10 {
            tree.insert(i);
        }
        for i in 0..10 {
            for j in 0..i {
                assert!(!tree.contains(&j));
            }
            for j in i..10 {
                assert!(tree.contains(&j));
            }

            assert!(tree.remove(&i));

            for j in i + 1..10 {
                assert!(tree.contains(&j), "{tree:#?}");
            }
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut tree = tree_of(&[2, 1, 3]);

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);

        tree.clear();
        assert!(tree.is_empty());

        tree.insert(4);
        assert_eq!(tree.to_vec(Order::Pre), vec![4]);
    }

    #[test]
    fn clone_keeps_shape() {
        let tree = tree_of(&[10, 5, 4, 6, 20, 15, 12, 13, 14]);
        let mut copy = tree.clone();

        assert_eq!(copy.to_vec(Order::Pre), tree.to_vec(Order::Pre));
        assert_eq!(copy.len(), tree.len());

        copy.remove(&10);
        assert!(tree.contains(&10));
    }

    #[test]
    fn degenerate_tree_drops() {
        // Built bottom-up since inserting sorted input one value at a time is quadratic.
        let mut chain: Link<u32> = None;
        for value in (0..200_000).rev() {
            let mut node = Node::new_boxed(value);
            node.right = chain;
            chain = Some(node);
        }
        let tree = Tree {
            root: chain,
            len: 200_000,
        };

        assert_eq!(tree.iter().next(), Some(&0));
        assert_eq!(tree.iter().count(), 200_000);
        drop(tree);
    }

    #[test]
    fn debug_lists_sorted_values() {
        let tree = tree_of(&[2, 1, 3]);

        assert_eq!(
            format!("{tree:?}"),
            "Tree { len: 3, depth: 1, values: [1, 2, 3] }"
        );
    }
}
