//! Stack implemented as a singly linked list of boxed nodes.
//! Used to remember where to continue after a branch of a trail has been walked.

/// A node of the linked stack
#[derive(Debug)]
struct Node<T> {
    item: T,
    link: Option<Box<Node<T>>>,
}

/// Linked stack. All operations are O(1), except `clear` and dropping, which are O(n).
#[derive(Debug)]
pub struct LinkedStack<T> {
    top: Option<Box<Node<T>>>,
    length: usize,
}

impl<T> LinkedStack<T> {
    /// Create an empty stack
    pub fn new() -> LinkedStack<T> {
        LinkedStack {
            top: None,
            length: 0,
        }
    }

    /// Number of items on the stack
    pub fn len(&self) -> usize {
        self.length
    }

    /// True iff there are no items on the stack
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Place `item` on top of the stack
    pub fn push(&mut self, item: T) {
        let link = self.top.take();
        self.top = Some(Box::new(Node { item, link }));
        self.length += 1;
    }

    /// Remove and return the top item, or `None` if the stack is empty
    pub fn pop(&mut self) -> Option<T> {
        self.top.take().map(|node| {
            let node = *node;
            self.top = node.link;
            self.length -= 1;
            node.item
        })
    }

    /// Reference to the top item, without removing it
    pub fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.item)
    }

    /// Remove all items
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        LinkedStack::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    /// Unlink the nodes one by one, so long stacks do not overflow the call stack with nested drops
    fn drop(&mut self) {
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.link.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LinkedStack;

    #[test]
    fn lifo() {
        let mut s = LinkedStack::new();
        assert!(s.is_empty());
        assert_eq!(s.pop(), None);
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.len(), 3);
        assert_eq!(s.peek(), Some(&3));
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(2));
        s.push(4);
        assert_eq!(s.pop(), Some(4));
        assert_eq!(s.pop(), Some(1));
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn clear_and_deep_drop() {
        let mut s = LinkedStack::new();
        for i in 0..200_000 {
            s.push(i);
        }
        assert_eq!(s.len(), 200_000);
        s.clear();
        assert!(s.is_empty());
        for i in 0..200_000 {
            s.push(i);
        }
        drop(s);
    }
}
