
use std::fmt::Debug;

use crate::node::Node;
use crate::Tree;

/// Asserts the ordering invariant: everything left of a node is strictly less than it and
/// everything right of it is greater than or equal to it.
pub(crate) fn assert_invariant<T: Ord + Debug>(tree: &Tree<T>) {
    fn check<T: Ord + Debug>(node: Option<&Node<T>>, lower: Option<&T>, upper: Option<&T>) {
        let Some(node) = node else {
            return;
        };
        if let Some(lower) = lower {
            assert!(
                node.value >= *lower,
                "{:?} sits right of {:?} but is smaller",
                node.value,
                lower
            );
        }
        if let Some(upper) = upper {
            assert!(
                node.value < *upper,
                "{:?} sits left of {:?} but is not smaller",
                node.value,
                upper
            );
        }
        check(node.left(), lower, Some(&node.value));
        check(node.right(), Some(&node.value), upper);
    }

    check(tree.root.as_deref(), None, None);
}
