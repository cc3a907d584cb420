//! The session's record store
//!
//! [`RecordStore`] owns the ordered sequence of records for one session.
//! Capacity and subject count are fixed at construction; every operation
//! preserves the shape invariant (each record carries exactly
//! `subject_count` marks) and the capacity bound.
//!
//! Lookups are linear scans in store order.  The two sorts reorder the
//! records in place; everything else preserves relative order.

use super::errors::StoreError;
use super::record::StudentRecord;
use std::cmp::Reverse;

/// Ordered, capacity-bounded collection of student records
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
    capacity: usize,
    subject_count: usize,
}

/// One ranked line of a top-K query
#[derive(Debug, Clone, PartialEq)]
pub struct TopEntry {
    pub rank: usize,
    pub roll: u32,
    pub name: String,
    pub total: u32,
    pub average: f64,
}

/// What happened to one merge candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Appended to the store
    Added,
    /// An existing record already carries this roll
    RejectedDuplicateRoll,
    /// An existing record already carries this name
    RejectedDuplicateName,
    /// Past the capacity quota; consumed but never stored
    SkippedCapacity,
}

/// Per-candidate merge entry, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct MergeEntry {
    pub roll: u32,
    pub name: String,
    pub outcome: MergeOutcome,
}

/// Result of merging an external section into the store
#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    pub entries: Vec<MergeEntry>,
    pub added: usize,
}

impl RecordStore {
    pub fn new(capacity: usize, subject_count: usize) -> Self {
        RecordStore {
            records: Vec::new(),
            capacity,
            subject_count,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records the store can still accept
    pub fn remaining_capacity(&self) -> usize {
        self.capacity - self.records.len()
    }

    pub fn subject_count(&self) -> usize {
        self.subject_count
    }

    /// All records, in store order
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.records.get(index)
    }

    /// Append a record, checking capacity and the marks shape
    pub fn push(&mut self, record: StudentRecord) -> Result<(), StoreError> {
        if self.is_full() {
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if record.marks.len() != self.subject_count {
            return Err(StoreError::MarksShapeMismatch {
                expected: self.subject_count,
                got: record.marks.len(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Index of the first record with this roll, in store order
    pub fn find_by_roll(&self, roll: u32) -> Option<usize> {
        self.records.iter().position(|r| r.roll == roll)
    }

    /// Overwrite the marks of the first record with this roll.
    /// Roll, name and attendance are immutable through this path.
    pub fn update_marks(&mut self, roll: u32, marks: Vec<u8>) -> Result<(), StoreError> {
        if marks.len() != self.subject_count {
            return Err(StoreError::MarksShapeMismatch {
                expected: self.subject_count,
                got: marks.len(),
            });
        }
        let index = self
            .find_by_roll(roll)
            .ok_or(StoreError::RollNotFound { roll })?;
        self.records[index].marks = marks;
        Ok(())
    }

    /// Remove the record at `index` (0-based), preserving the relative
    /// order of the survivors
    pub fn remove(&mut self, index: usize) -> Result<StudentRecord, StoreError> {
        if index >= self.records.len() {
            return Err(StoreError::PositionOutOfRange {
                index,
                count: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// All records whose name contains `query` as a contiguous,
    /// case-sensitive substring, in store order.  An empty result is a
    /// valid outcome, not an error.
    pub fn search_by_name(&self, query: &str) -> Vec<(usize, &StudentRecord)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.name.contains(query))
            .collect()
    }

    /// Reorder by descending average.  Every record shares `subject_count`,
    /// so ordering by integer total is the same order without float keys.
    /// Equal-key relative order is unspecified.
    pub fn sort_by_average_desc(&mut self) {
        self.records.sort_by_key(|r| Reverse(r.total()));
    }

    /// Reorder by ascending name, ordinal byte comparison
    pub fn sort_by_name_asc(&mut self) {
        self.records.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// The `k` records with greatest totals, ranked 1..=k.
    ///
    /// Selection picks the strictly-greatest remaining total each round, so
    /// equal totals rank in original store order.  `k` is clamped to the
    /// record count.
    pub fn top_k(&self, k: usize) -> Vec<TopEntry> {
        let k = k.min(self.records.len());
        let mut taken = vec![false; self.records.len()];
        let mut out = Vec::with_capacity(k);
        for rank in 1..=k {
            let mut best: Option<usize> = None;
            for (i, r) in self.records.iter().enumerate() {
                if taken[i] {
                    continue;
                }
                match best {
                    None => best = Some(i),
                    Some(b) => {
                        if r.total() > self.records[b].total() {
                            best = Some(i);
                        }
                    }
                }
            }
            let Some(b) = best else { break };
            taken[b] = true;
            let r = &self.records[b];
            out.push(TopEntry {
                rank,
                roll: r.roll,
                name: r.name.clone(),
                total: r.total(),
                average: r.average(),
            });
        }
        out
    }

    /// Merge an external section, excluding duplicates.
    ///
    /// The quota (remaining capacity) is fixed once at merge start: only the
    /// first `quota` candidates are considered, the rest are consumed and
    /// reported as [`MergeOutcome::SkippedCapacity`].  Within the quota a
    /// candidate is rejected if a record *currently in the store* carries
    /// the same roll (checked first) or the same name; otherwise it is
    /// appended immediately, so later candidates are checked against
    /// earlier accepted ones but not against earlier rejected ones.
    ///
    /// Candidates must carry `subject_count` marks; the session reads
    /// exactly that many per candidate.
    pub fn merge<I>(&mut self, candidates: I) -> MergeReport
    where
        I: IntoIterator<Item = StudentRecord>,
    {
        let quota = self.remaining_capacity();
        let mut entries = Vec::new();
        let mut considered = 0usize;
        let mut added = 0usize;
        for candidate in candidates {
            debug_assert_eq!(candidate.marks.len(), self.subject_count);
            let outcome = if considered >= quota {
                MergeOutcome::SkippedCapacity
            } else {
                considered += 1;
                if self.find_by_roll(candidate.roll).is_some() {
                    MergeOutcome::RejectedDuplicateRoll
                } else if self.records.iter().any(|r| r.name == candidate.name) {
                    MergeOutcome::RejectedDuplicateName
                } else {
                    added += 1;
                    MergeOutcome::Added
                }
            };
            let entry = MergeEntry {
                roll: candidate.roll,
                name: candidate.name.clone(),
                outcome,
            };
            if outcome == MergeOutcome::Added {
                self.records.push(candidate);
            }
            entries.push(entry);
        }
        MergeReport { entries, added }
    }
}
