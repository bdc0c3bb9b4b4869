use std::iter::FusedIterator;

use super::{BinarySearchTree, Branch, Node};

// All three traversals keep their own stack of pending nodes instead of recursing, so walking a
// degenerate tree costs heap rather than call stack.

/// Yields each node's key before the keys of its left and then right subtrees.
pub struct PreOrder<'a, T: Ord> {
    pub(crate) stack: Vec<&'a Node<T>>,
}

impl<'a, T: Ord> PreOrder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>) -> PreOrder<'a, T> {
        PreOrder {
            stack: root.as_deref().into_iter().collect(),
        }
    }
}

impl<'a, T: Ord> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so that the left subtree is popped first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.key)
    }
}

impl<T: Ord> FusedIterator for PreOrder<'_, T> {}

/// Yields keys in ascending order.
pub struct InOrder<'a, T: Ord> {
    pub(crate) stack: Vec<&'a Node<T>>,
}

impl<'a, T: Ord> InOrder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>) -> InOrder<'a, T> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut branch: &'a Branch<T>) {
        while let Some(node) = branch.as_deref() {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, T: Ord> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(&node.right);
        Some(&node.key)
    }
}

impl<T: Ord> FusedIterator for InOrder<'_, T> {}

/// Yields the keys of a node's left and then right subtrees before its own key.
pub struct PostOrder<'a, T: Ord> {
    /// Each node is paired with whether its children have already been scheduled.
    pub(crate) stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T: Ord> PostOrder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>) -> PostOrder<'a, T> {
        PostOrder {
            stack: root.as_deref().map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T: Ord> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.key);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|right| (right, false)));
            self.stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
    }
}

impl<T: Ord> FusedIterator for PostOrder<'_, T> {}

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
