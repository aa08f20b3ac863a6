//! Sequencing driver for revision history diffing.
//!
//! The sequencer owns the current newest-first history sequence, fetches
//! snapshot content for every entry in one eager batch, and derives a diff
//! summary per entry against its chronological predecessor. Fetched content
//! is memoized by id (content recorded under an id never changes), and a
//! generation counter guarantees that a batch begun before the history
//! changed can never overwrite newer state.

use crate::diff::engine::{compute_segments, compute_summary};
use crate::diff::render::to_display_lines;
use crate::diff::{DiffSummary, DisplayLine};
use crate::history::HistoryEntry;
use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use futures::future::try_join_all;
use tracing::{debug, info};

/// Read access to snapshot content recorded at a history point.
///
/// `Ok(None)` means the content is unavailable ("absent") and is never an
/// error; errors are reserved for transport-level failure and propagate to
/// the caller unmodified. Retry and timeout policy belong to the
/// implementation, not to the sequencer.
#[async_trait]
pub trait SnapshotStore {
    /// Returns the textual content recorded at `id`, or `None` if absent.
    async fn fetch_snapshot(&self, id: &str) -> Result<Option<String>>;
}

/// The fetched contents of one history sequence, tied to the generation the
/// sequence had when the batch began.
///
/// Produced by [`HistorySequencer::fetch_batch`] and consumed by
/// [`HistorySequencer::apply`].
#[derive(Debug)]
pub struct FetchBatch {
    /// Generation of the history sequence this batch was fetched for
    generation: u64,
    /// Entries the batch covers, newest first
    entries: Vec<HistoryEntry>,
    /// Fetched content per entry (`None` = absent), aligned with `entries`
    contents: Vec<Option<String>>,
}

/// Result of applying a fetch batch to the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ApplyOutcome {
    /// The batch matched the current generation and its summaries were installed
    Applied,
    /// The history changed after the batch began; its results were discarded
    Stale,
}

/// Applied result of one fetch batch: entries, contents, and one summary
/// per entry.
#[derive(Debug, Clone)]
pub struct SequencedHistory {
    /// History entries, newest first
    entries: Vec<HistoryEntry>,
    /// Fetched content per entry (`None` = absent)
    contents: Vec<Option<String>>,
    /// Diff summary per entry against its chronological predecessor
    summaries: Vec<DiffSummary>,
}

impl SequencedHistory {
    /// The history entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Diff summaries aligned with [`Self::entries`].
    #[must_use]
    pub fn summaries(&self) -> &[DiffSummary] {
        &self.summaries
    }

    /// Summary for the entry at `index`, if in range.
    #[must_use]
    pub fn summary(&self, index: usize) -> Option<DiffSummary> {
        self.summaries.get(index).copied()
    }

    /// Fetched content for the entry at `index` (`None` when absent or out
    /// of range).
    #[must_use]
    pub fn content(&self, index: usize) -> Option<&str> {
        self.contents.get(index).and_then(|c| c.as_deref())
    }

    /// Number of entries in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the sequence has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve the (predecessor, own) content pair for the entry at `index`.
///
/// Entry `index` is compared against entry `index + 1` (the next older
/// revision). Absent content is excluded from the comparison: an entry whose
/// own content is absent has nothing to diff at all, and an absent or
/// missing predecessor (the oldest entry has none) reduces to a diff against
/// `""` — exactly the fully-added fallback.
fn content_pair(contents: &[Option<String>], index: usize) -> (&str, &str) {
    let Some(own) = contents.get(index).and_then(|c| c.as_deref()) else {
        return ("", "");
    };
    let base = contents
        .get(index + 1)
        .and_then(|c| c.as_deref())
        .unwrap_or("");
    (base, own)
}

/// Drives diff computation over a revision history sequence.
///
/// All mutating operations take `&mut self`, so applied state has a single
/// logical owner and needs no locking. The content cache is shared-read
/// ([`DashMap`]) so that [`Self::fetch_batch`] can memoize through `&self`.
pub struct HistorySequencer<S: SnapshotStore> {
    /// Snapshot content accessor
    store: S,
    /// Current history sequence, newest first
    entries: Vec<HistoryEntry>,
    /// Bumped on every [`Self::set_history`]; stale batches carry older values
    generation: u64,
    /// Content memoized by id; only present content is cached, absence is
    /// re-asked on the next batch
    cache: DashMap<String, String>,
    /// Most recently applied batch result
    current: Option<SequencedHistory>,
}

impl<S: SnapshotStore> HistorySequencer<S> {
    /// Creates a sequencer over the given snapshot store with an empty
    /// history sequence.
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: Vec::new(),
            generation: 0,
            cache: DashMap::new(),
            current: None,
        }
    }

    /// Installs a new newest-first history sequence.
    ///
    /// Bumps the generation, so every batch begun before this call is
    /// discarded by [`Self::apply`]. The previously applied state stays
    /// visible until a fresh batch is applied.
    pub fn set_history(&mut self, entries: Vec<HistoryEntry>) {
        self.generation += 1;
        debug!(
            entries = entries.len(),
            generation = self.generation,
            "History sequence installed"
        );
        self.entries = entries;
    }

    /// Eagerly fetches content for every entry in the current sequence.
    ///
    /// Fetches run as one logical batch; each fetch is independent and
    /// keyed by id, so interleaving order cannot affect the result. Ids
    /// already in the cache skip the store.
    ///
    /// # Errors
    ///
    /// Returns the first transport-level failure reported by the store.
    /// Absent content is not an error.
    pub async fn fetch_batch(&self) -> Result<FetchBatch> {
        let generation = self.generation;
        let contents =
            try_join_all(self.entries.iter().map(|entry| self.lookup(&entry.id))).await?;

        Ok(FetchBatch {
            generation,
            entries: self.entries.clone(),
            contents,
        })
    }

    /// Fetch one id through the cache.
    async fn lookup(&self, id: &str) -> Result<Option<String>> {
        if let Some(hit) = self.cache.get(id) {
            debug!(id, "Snapshot cache hit");
            return Ok(Some(hit.value().clone()));
        }

        let fetched = self.store.fetch_snapshot(id).await?;
        if let Some(content) = &fetched {
            self.cache.insert(id.to_string(), content.clone());
        }
        Ok(fetched)
    }

    /// Applies a fetch batch, installing one diff summary per entry.
    ///
    /// A batch whose generation no longer matches the sequencer's is stale:
    /// its results are discarded and the applied state is left untouched.
    pub fn apply(&mut self, batch: FetchBatch) -> ApplyOutcome {
        if batch.generation != self.generation {
            info!(
                batch_generation = batch.generation,
                current_generation = self.generation,
                "Discarding stale fetch batch"
            );
            return ApplyOutcome::Stale;
        }

        let summaries: Vec<DiffSummary> = (0..batch.entries.len())
            .map(|index| {
                let (base, own) = content_pair(&batch.contents, index);
                compute_summary(base, own)
            })
            .collect();

        info!(entries = batch.entries.len(), "Applied history batch");

        self.current = Some(SequencedHistory {
            entries: batch.entries,
            contents: batch.contents,
            summaries,
        });
        ApplyOutcome::Applied
    }

    /// Installs a new sequence, fetches it, and applies the result.
    ///
    /// # Errors
    ///
    /// Returns transport-level failures from the store.
    pub async fn refresh(&mut self, entries: Vec<HistoryEntry>) -> Result<ApplyOutcome> {
        self.set_history(entries);
        let batch = self.fetch_batch().await?;
        Ok(self.apply(batch))
    }

    /// The most recently applied sequence, if any batch has been applied.
    #[must_use]
    pub fn history(&self) -> Option<&SequencedHistory> {
        self.current.as_ref()
    }

    /// Renders the diff for one entry from already-fetched content.
    ///
    /// Computed lazily on demand — nothing is refetched. Returns `None`
    /// when no batch has been applied yet or `index` is out of range. An
    /// entry without a valid predecessor renders fully-added insert lines.
    #[must_use]
    pub fn render_entry(&self, index: usize) -> Option<Vec<DisplayLine>> {
        let state = self.current.as_ref()?;
        if index >= state.entries.len() {
            return None;
        }

        let (base, own) = content_pair(&state.contents, index);
        Some(to_display_lines(&compute_segments(base, own)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Signature;
    use std::collections::HashMap;

    struct MapStore {
        snapshots: HashMap<String, String>,
    }

    #[async_trait]
    impl SnapshotStore for MapStore {
        async fn fetch_snapshot(&self, id: &str) -> Result<Option<String>> {
            Ok(self.snapshots.get(id).cloned())
        }
    }

    fn entry(id: &str) -> HistoryEntry {
        HistoryEntry::new(
            id,
            format!("revision {id}"),
            Signature {
                name: "Test Author".to_string(),
                timestamp: 1_700_000_000,
            },
        )
    }

    #[test]
    fn test_content_pair_missing_predecessor() {
        let contents = vec![Some("v2".to_string()), None, Some("v1".to_string())];

        // Entry 0 has an absent predecessor: compares against ""
        assert_eq!(content_pair(&contents, 0), ("", "v2"));
        // Entry 1 is itself absent: excluded from comparison entirely
        assert_eq!(content_pair(&contents, 1), ("", ""));
        // Entry 2 is oldest: no predecessor
        assert_eq!(content_pair(&contents, 2), ("", "v1"));
    }

    #[tokio::test]
    async fn test_refresh_computes_summaries() -> Result<()> {
        let store = MapStore {
            snapshots: HashMap::from([
                ("a".to_string(), "v3".to_string()),
                ("b".to_string(), "v2".to_string()),
                ("c".to_string(), "v1".to_string()),
            ]),
        };
        let mut sequencer = HistorySequencer::new(store);

        let outcome = sequencer
            .refresh(vec![entry("a"), entry("b"), entry("c")])
            .await?;
        assert_eq!(outcome, ApplyOutcome::Applied);

        let history = sequencer.history().expect("state applied");
        assert_eq!(history.len(), 3);
        // Oldest entry is fully added
        assert_eq!(history.summary(2), Some(compute_summary("", "v1")));

        Ok(())
    }

    #[tokio::test]
    async fn test_stale_batch_is_discarded() -> Result<()> {
        let store = MapStore {
            snapshots: HashMap::from([("a".to_string(), "v1".to_string())]),
        };
        let mut sequencer = HistorySequencer::new(store);

        sequencer.set_history(vec![entry("a")]);
        let batch = sequencer.fetch_batch().await?;

        // History changes again before the earlier batch is applied
        sequencer.set_history(vec![]);

        assert_eq!(sequencer.apply(batch), ApplyOutcome::Stale);
        assert!(sequencer.history().is_none());

        Ok(())
    }
}
