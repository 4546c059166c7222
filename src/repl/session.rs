//! Session manager for screening history
//!
//! Keeps a bounded in-memory log of completed submissions for the /history
//! and /status commands. Nothing here is written to disk; the log dies with
//! the process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of screenings to keep in history
const MAX_HISTORY_SIZE: usize = 1000;

/// Record of one completed submission (diagnosis or rendered error)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningRecord {
    pub domain: String,
    pub message: String,
    pub success: bool,
    pub duration_ms: u64,
    pub timestamp: DateTime<Utc>,
}

/// Session manager maintaining interactive-session state
pub struct SessionManager {
    /// Screening history (FIFO queue, bounded)
    history: VecDeque<ScreeningRecord>,

    /// Session start time
    session_start: DateTime<Utc>,

    /// Total screenings executed (including evicted ones)
    screening_count: usize,
}

impl SessionManager {
    /// Create new session manager
    pub fn new() -> Self {
        SessionManager {
            history: VecDeque::with_capacity(MAX_HISTORY_SIZE),
            session_start: Utc::now(),
            screening_count: 0,
        }
    }

    /// Record a completed screening
    pub fn record_screening(&mut self, record: ScreeningRecord) {
        if self.history.len() >= MAX_HISTORY_SIZE {
            self.history.pop_front();
        }
        self.history.push_back(record);

        self.screening_count += 1;
    }

    /// Get screening history, newest first, up to `limit` entries
    pub fn get_history(&self, limit: usize) -> Vec<&ScreeningRecord> {
        self.history.iter().rev().take(limit).collect()
    }

    /// Clear session state
    pub fn reset(&mut self) {
        self.history.clear();
        self.screening_count = 0;
        self.session_start = Utc::now();
    }

    /// Total screenings executed this session
    pub fn screening_count(&self) -> usize {
        self.screening_count
    }

    /// Current history size
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Time since the session started (or was last reset)
    pub fn session_duration(&self) -> chrono::Duration {
        Utc::now() - self.session_start
    }

    /// Check if anything has been screened yet
    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
