use crate::config::DEFAULT_SEQUENCE_SIZE;
use crate::error::{Result, WordgramsError};
use std::collections::VecDeque;

/// Fixed-capacity FIFO holding the most recent `capacity` items
///
/// The window is "ready" only while it holds exactly `capacity` items; that
/// is the only state in which [`snapshot`](Self::snapshot) yields contents.
///
/// # Example
/// ```
/// use wordgrams::sequence::RollingWindow;
///
/// let mut window = RollingWindow::new(2).unwrap();
/// window.push("a");
/// assert_eq!(window.snapshot(), None);
///
/// window.push("b");
/// window.push("c");
/// assert_eq!(window.snapshot(), Some(vec!["b", "c"]));
/// ```
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> RollingWindow<T> {
    /// Create an empty window
    ///
    /// Fails with [`WordgramsError::InvalidConfiguration`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(WordgramsError::InvalidConfiguration(
                "window capacity must be >= 1".to_string(),
            ));
        }

        Ok(Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append an item, evicting the oldest one first if the window is full
    pub fn push(&mut self, item: T) {
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    /// Owned copy of the contents in insertion order, if the window is full
    pub fn snapshot(&self) -> Option<Vec<T>> {
        if !self.is_ready() {
            return None;
        }

        Some(self.items.iter().cloned().collect())
    }

    /// Discard all buffered items
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// True while the window holds exactly `capacity` items
    pub fn is_ready(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Number of buffered items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is buffered
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of buffered items
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Clone> Default for RollingWindow<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::with_capacity(DEFAULT_SEQUENCE_SIZE),
            capacity: DEFAULT_SEQUENCE_SIZE,
        }
    }
}
