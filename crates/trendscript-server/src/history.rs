//! Bounded in-process record of generated documents, lost on restart.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;
use trendscript_core::GeneratedContentDocument;

#[derive(Debug, Clone)]
pub struct ContentHistory {
    entries: Arc<Mutex<VecDeque<GeneratedContentDocument>>>,
    capacity: usize,
}

impl ContentHistory {
    /// A history holding at most `capacity` documents across all users.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(1024)))),
            capacity,
        }
    }

    /// Store a document, evicting the oldest once full.
    pub async fn record(&self, document: GeneratedContentDocument) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock().await;
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(document);
    }

    /// Newest-first documents for `user_id`, at most `limit`, plus the user's
    /// total count.
    pub async fn for_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> (Vec<GeneratedContentDocument>, usize) {
        let entries = self.entries.lock().await;
        let mine = entries.iter().rev().filter(|d| d.user_id == user_id);
        let total = mine.clone().count();
        (mine.take(limit).cloned().collect(), total)
    }
}
