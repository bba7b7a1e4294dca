//! Whole-tree aggregates: [`Tree::depth`] and [`Tree::sum`].

use std::fmt;

use crate::error::{Result, SumError};
use crate::node::Node;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// The number of edges on the longest path from the root down to a leaf. A tree holding a
    /// single value has a depth of `0` and an empty tree has a depth of `-1`.
    ///
    /// This recurses once per level of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.depth(), -1);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.depth(), 0);
    ///
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.depth(), 1);
    /// ```
    pub fn depth(&self) -> isize {
        /// Levels in the subtree, counting `node` itself. An absent subtree has no levels.
        fn levels<T>(node: Option<&Node<T>>) -> usize {
            node.map_or(0, |n| levels(n.left()).max(levels(n.right())) + 1)
        }

        levels(self.root.as_deref()) as isize - 1
    }

    /// Adds up every value after converting it to an `i64`. An empty tree sums to `0`.
    ///
    /// Nothing is skipped: the first value that has no `i64` representation stops the sum with
    /// [`SumError::Conversion`], and a total that doesn't fit in an `i64` stops it with
    /// [`SumError::Overflow`]. The tree itself is never touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{SumError, Tree};
    ///
    /// let tree: Tree<u8> = [10, 5, 20].into_iter().collect();
    /// assert_eq!(tree.sum(), Ok(35));
    ///
    /// let tree: Tree<u64> = [1, u64::MAX].into_iter().collect();
    /// assert!(matches!(tree.sum(), Err(SumError::Conversion { index: 1, .. })));
    /// ```
    pub fn sum(&self) -> Result<i64>
    where
        T: Clone + TryInto<i64>,
        <T as TryInto<i64>>::Error: fmt::Display,
    {
        self.iter()
            .enumerate()
            .try_fold(0i64, |total, (index, value)| -> Result<i64> {
                let value: i64 = value
                    .clone()
                    .try_into()
                    .map_err(|err| SumError::Conversion {
                        index,
                        reason: err.to_string(),
                    })?;
                total
                    .checked_add(value)
                    .ok_or(SumError::Overflow { index })
            })
    }
}
