//! Bounded log of recent pulls, newest first.

use crate::core::constants::PULL_HISTORY_CAPACITY;
use crate::pull::PullRecord;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullHistory {
    records: VecDeque<PullRecord>,
}

impl Default for PullHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PullHistory {
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(PULL_HISTORY_CAPACITY),
        }
    }

    /// Record a pull, evicting the oldest once full.
    pub fn push(&mut self, record: PullRecord) {
        self.records.push_front(record);
        self.records.truncate(PULL_HISTORY_CAPACITY);
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &PullRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&PullRecord> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn for_banner<'a>(&'a self, banner_id: &'a str) -> impl Iterator<Item = &'a PullRecord> {
        self.records.iter().filter(move |r| r.banner_id() == banner_id)
    }
}
