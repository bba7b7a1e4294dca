use std::cmp::Ordering;

/// An owning child slot. Every `Node` is owned by exactly one `Link`: the tree's root or one of
/// its parent's children.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

/// Where a search for a value goes next from a given `Node`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// The node's value is greater than the one searched for.
    Left,
    /// The node's value is less than the one searched for.
    Right,
    /// This node holds the value.
    Found,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn step(&self, value: &T) -> Step
    where
        T: Ord,
    {
        match self.value.cmp(value) {
            Ordering::Greater => Step::Left,
            Ordering::Less => Step::Right,
            Ordering::Equal => Step::Found,
        }
    }

    /// The child slot a new `value` descends into. Unlike [`Node::step`] an equal value goes right.
    pub(crate) fn slot_for(&mut self, value: &T) -> &mut Link<T>
    where
        T: Ord,
    {
        if *value < self.value {
            &mut self.left
        } else {
            &mut self.right
        }
    }

    /// Walks down from this node to the first empty slot `value` belongs in and fills it.
    pub(crate) fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut node = self;
        loop {
            let slot = node.slot_for(&value);
            match slot {
                Some(child) => node = &mut **child,
                None => {
                    *slot = Some(Node::new_boxed(value));
                    return;
                }
            }
        }
    }

    /// Unlinks and returns the left-most node of this node's left subtree. The unlinked node's
    /// right subtree takes its place in its parent's left slot. Returns `None` when this node has
    /// no left child.
    ///
    /// When called on a node's right child this yields that node's in-order successor.
    pub(crate) fn detach_leftmost(&mut self) -> Option<Box<Self>> {
        let mut parent = self;
        while parent.left.as_ref()?.left.is_some() {
            parent = parent.left.as_deref_mut()?;
        }

        let mut leftmost = parent.left.take()?;
        parent.left = leftmost.right.take();
        Some(leftmost)
    }
}

/// Drops whole subtrees without recursing into them.
///
/// The compiler generated drop glue for a `Box<Node<T>>` recurses once per level, which would
/// overflow the stack on a degenerate tree.
pub(crate) fn drop_iteratively<T>(mut pending: Vec<Box<Node<T>>>) {
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
