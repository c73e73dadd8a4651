/// Which end of the score ordering a selector retains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keep the N highest-scoring items.
    Highest,
    /// Keep the N lowest-scoring items.
    Lowest,
}

/// A fixed-capacity selector that keeps the N best-scoring items from a stream.
///
/// This data structure efficiently tracks the top (or bottom) N items by:
/// 1. Maintaining a heap of at most N entries (the N best seen so far)
/// 2. Comparing each new score against the root (the weakest of the N)
/// 3. If the newcomer beats the root, evicting the root and inserting it
///
/// Complexity:
/// - Insert: O(log N) where N is the capacity
/// - Memory: O(N) instead of O(total items)
///
/// For `Mode::Highest` the internal heap is a min-heap, so the weakest
/// survivor sits at the root ready for cheap eviction; `Mode::Lowest`
/// mirrors it with a max-heap. Scores and payloads live in parallel
/// arrays and always move together.
///
/// The implicit tree uses `parent = i >> 1` and children `i << 1`,
/// `(i << 1) + 1` with the root at index 0. Under that arithmetic the
/// root's left "child" is itself, so its only real child is index 1.
pub struct BoundedSelector<T> {
    mode: Mode,
    capacity: usize,
    scores: Vec<f64>,
    items: Vec<T>,
    sorted: bool,
}

impl<T> BoundedSelector<T> {
    /// Creates an empty selector with the given mode and capacity.
    ///
    /// Both backing arrays are reserved up front and never reallocated.
    /// A capacity of zero is tolerated: every insert discards and
    /// `finalize` yields nothing.
    pub fn new(mode: Mode, capacity: usize) -> Self {
        Self {
            mode,
            capacity,
            scores: Vec::with_capacity(capacity),
            items: Vec::with_capacity(capacity),
            sorted: false,
        }
    }

    /// Creates a selector that keeps the `capacity` highest-scoring items.
    pub fn keep_highest(capacity: usize) -> Self {
        Self::new(Mode::Highest, capacity)
    }

    /// Creates a selector that keeps the `capacity` lowest-scoring items.
    pub fn keep_lowest(capacity: usize) -> Self {
        Self::new(Mode::Lowest, capacity)
    }

    /// Offers a scored item to the selector.
    ///
    /// If the selector is not full, the item is added. If it is full and
    /// the score strictly beats the current weakest survivor, that
    /// survivor is evicted and the item takes its place. Otherwise the
    /// item is silently discarded; discarding is the defined outcome for
    /// a non-qualifying item, not an error.
    ///
    /// # Panics
    ///
    /// Panics if called after `finalize`; call `clear` first to reuse
    /// the selector.
    pub fn insert(&mut self, score: f64, item: T) {
        assert!(
            !self.sorted,
            "insert after finalize; clear() the selector first"
        );
        if self.capacity == 0 {
            return;
        }
        if self.scores.len() == self.capacity {
            if !self.beats_root(score) {
                return;
            }
            self.evict_root();
        }
        self.scores.push(score);
        self.items.push(item);
        self.sift_up(self.scores.len() - 1);
    }

    /// Sorts the retained items in place, best score first.
    ///
    /// Descending for `Mode::Highest`, ascending for `Mode::Lowest`.
    /// The sort consumes the heap order, so no further inserts are
    /// accepted until `clear` is called. Calling `finalize` again is a
    /// no-op.
    pub fn finalize(&mut self) {
        if self.sorted {
            return;
        }
        // Heap-sort over a shrinking region: each pass parks the current
        // root (the weakest remaining survivor) just past the region's
        // end, leaving index 0 holding the best score once it collapses.
        let mut end = self.scores.len();
        while end > 1 {
            end -= 1;
            self.swap_slots(0, end);
            self.sift_down(0, end);
        }
        self.sorted = true;
    }

    /// Returns the item in slot `index`.
    ///
    /// Slots follow heap order before `finalize` and ranked order after.
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> &T {
        &self.items[index]
    }

    /// Returns the score in slot `index`. Panics if `index >= len()`.
    pub fn score(&self, index: usize) -> f64 {
        self.scores[index]
    }

    /// Returns the number of items currently retained.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Returns the fixed capacity chosen at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the selection mode chosen at construction.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Iterates over `(score, item)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &T)> {
        self.scores.iter().copied().zip(self.items.iter())
    }

    /// Drops every retained item, keeping the allocated storage.
    ///
    /// Also re-arms a finalized selector for a fresh round of inserts.
    pub fn clear(&mut self) {
        self.scores.clear();
        self.items.clear();
        self.sorted = false;
    }

    /// True when `score` would displace the current root.
    fn beats_root(&self, score: f64) -> bool {
        match self.mode {
            Mode::Highest => score > self.scores[0],
            Mode::Lowest => score < self.scores[0],
        }
    }

    /// True when a slot scoring `a` must sit above one scoring `b`.
    fn heap_order(&self, a: f64, b: f64) -> bool {
        match self.mode {
            Mode::Highest => a < b,
            Mode::Lowest => a > b,
        }
    }

    /// Exchanges two slots, score and item together.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.scores.swap(a, b);
        self.items.swap(a, b);
    }

    /// Replaces the root with the last slot and restores heap order.
    fn evict_root(&mut self) {
        let last = self.scores.len() - 1;
        self.swap_slots(0, last);
        self.scores.truncate(last);
        self.items.truncate(last);
        self.sift_down(0, last);
    }

    /// Bubbles the slot at `index` toward the root while it is out of
    /// order with its parent.
    fn sift_up(&mut self, mut index: usize) {
        let mut parent = index >> 1;
        while index > 0 && self.heap_order(self.scores[index], self.scores[parent]) {
            self.swap_slots(index, parent);
            index = parent;
            parent >>= 1;
        }
    }

    /// Pushes the slot at `index` down until both children within
    /// `0..end` respect heap order.
    ///
    /// At the root `left` is 0 again; the self-comparison fails, so only
    /// index 1 is considered, which is exactly the tree shape the index
    /// arithmetic implies.
    fn sift_down(&mut self, mut index: usize, end: usize) {
        loop {
            let left = index << 1;
            let right = left + 1;
            let mut top = index;
            if left < end && self.heap_order(self.scores[left], self.scores[index]) {
                top = left;
            }
            if right < end && self.heap_order(self.scores[right], self.scores[top]) {
                top = right;
            }
            if top == index {
                return;
            }
            self.swap_slots(index, top);
            index = top;
        }
    }
}
