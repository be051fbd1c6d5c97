//! Single-slot memo cell keyed on an explicit token.
//!
//! Derived catalog state (knight id lists, ownership flags) is cheap to
//! recompute but is read on every evaluation pass. A [`Memo`] holds the last
//! computed value together with the key it was computed for and recomputes
//! only when a different key is presented. The key is a content version or a
//! revision counter, never a pointer.
//!
//! # Example
//!
//! ```
//! use chapterhouse_catalog::memo::Memo;
//!
//! let mut memo: Memo<u64, usize> = Memo::new("word_count");
//! assert_eq!(*memo.get_or_compute(1, || 3), 3);
//! assert_eq!(*memo.get_or_compute(1, || unreachable!()), 3);
//! assert_eq!(*memo.get_or_compute(2, || 5), 5);
//! assert_eq!(memo.recomputes(), 2);
//! ```

use std::fmt::Debug;

/// Caches one value per key; a new key replaces the cached value.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    /// Name used in log fields.
    label: &'static str,
    slot: Option<(K, V)>,
    recomputes: u64,
}

impl<K: PartialEq + Debug, V> Memo<K, V> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            slot: None,
            recomputes: 0,
        }
    }

    /// Return the cached value for `key`, computing it first if the cell is
    /// empty or was filled for a different key.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        let fresh = matches!(&self.slot, Some((cached, _)) if *cached == key);
        if fresh {
            tracing::trace!(memo = self.label, "memo hit");
        } else {
            tracing::debug!(memo = self.label, key = ?key, "recomputing memoized value");
            self.recomputes += 1;
            self.slot = None;
        }
        let (_, value) = self.slot.get_or_insert_with(|| (key, compute()));
        value
    }

    /// Number of times the value has been computed.
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}
