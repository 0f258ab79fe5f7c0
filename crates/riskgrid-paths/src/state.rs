use std::cmp::Ordering;
use std::collections::BinaryHeap;

use riskgrid_core::Bounds;

// ---------------------------------------------------------------------------
// Open-set entries
// ---------------------------------------------------------------------------

/// Heap entry ordered by `(f, seq)` for use in `BinaryHeap`.
///
/// `seq` is the insertion counter: among equal `f` the earlier insertion
/// pops first, which makes expansion order reproducible.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Bookkeeping for a single leg.
///
/// Indexed by flat cell index. A fresh state is built for every leg and
/// dropped once its path has been reconstructed, so parent links never
/// outlive the search that wrote them.
pub(crate) struct SearchState {
    pub(crate) g: Vec<f64>,
    pub(crate) f: Vec<f64>,
    pub(crate) parent: Vec<Option<usize>>,
    open: BinaryHeap<OpenEntry>,
    /// Sequence number of the live heap entry of each enqueued cell.
    /// Heap entries with any other sequence number are stale.
    queued: Vec<Option<u64>>,
    next_seq: u64,
}

impl SearchState {
    pub(crate) fn new(bounds: Bounds) -> Self {
        let len = bounds.len();
        Self {
            g: vec![f64::INFINITY; len],
            f: vec![f64::INFINITY; len],
            parent: vec![None; len],
            open: BinaryHeap::new(),
            queued: vec![None; len],
            next_seq: 0,
        }
    }

    /// Enqueue `idx` at its current `f`, superseding any entry it already
    /// has.
    pub(crate) fn push(&mut self, idx: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queued[idx] = Some(seq);
        self.open.push(OpenEntry {
            idx,
            f: self.f[idx],
            seq,
        });
    }

    /// Pop the live entry with the lowest `(f, seq)`, discarding stale ones.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            if self.queued[entry.idx] != Some(entry.seq) {
                continue;
            }
            self.queued[entry.idx] = None;
            return Some(entry.idx);
        }
        None
    }

    /// Whether `idx` currently sits in the open set.
    #[inline]
    pub(crate) fn is_queued(&self, idx: usize) -> bool {
        self.queued[idx].is_some()
    }

    /// Number of live open-set members.
    pub(crate) fn open_len(&self) -> usize {
        self.queued.iter().filter(|q| q.is_some()).count()
    }
}
