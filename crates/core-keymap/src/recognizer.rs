//! Sequence recognition with an inactivity timeout.
//!
//! Time never comes from a clock here: every key is fed together with the
//! instant it was observed, and expiry is a comparison between two such
//! instants. Replaying the same keys with the same timestamps is therefore
//! fully deterministic.

use crate::trie::{Advance, CommandTrie, NodeId};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
struct Pending {
    node: NodeId,
    last_key_at: Instant,
    depth: usize,
}

/// Result of offering one key to the recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition<A> {
    /// Nothing pending and the key starts no sequence; dispatch it normally.
    Unrecognized,
    /// Key consumed; the sequence needs more keys.
    Pending,
    /// Key consumed and completed a sequence.
    Complete(A),
    /// Key consumed; it did not continue the pending sequence, which is dropped.
    Aborted,
}

#[derive(Debug, Clone)]
pub struct SequenceRecognizer<A> {
    trie: CommandTrie<A>,
    timeout: Option<Duration>,
    pending: Option<Pending>,
}

impl<A: Clone> SequenceRecognizer<A> {
    /// `timeout = None` keeps a pending sequence alive indefinitely.
    pub fn new(trie: CommandTrie<A>, timeout: Option<Duration>) -> Self {
        Self {
            trie,
            timeout,
            pending: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant after which the pending sequence is discarded.
    pub fn deadline(&self) -> Option<Instant> {
        let pending = self.pending?;
        self.timeout.map(|t| pending.last_key_at + t)
    }

    /// Drop any in-progress sequence.
    pub fn reset(&mut self) {
        if let Some(p) = self.pending.take() {
            debug!(target: "input.sequence", depth = p.depth, "sequence_reset");
        }
    }

    fn expired(&self, last_key_at: Instant, at: Instant) -> bool {
        match self.timeout {
            Some(t) => at.saturating_duration_since(last_key_at) > t,
            None => false,
        }
    }

    /// Discard the pending sequence if it is stale at `at`. Returns true when
    /// something was discarded.
    pub fn expire(&mut self, at: Instant) -> bool {
        match self.pending {
            Some(p) if self.expired(p.last_key_at, at) => {
                debug!(target: "input.sequence", depth = p.depth, "sequence_timeout");
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Offer `key`, observed at `at`, to the recognizer.
    pub fn feed(&mut self, key: char, at: Instant) -> Recognition<A> {
        self.expire(at);

        let (node, depth) = match self.pending {
            Some(p) => (p.node, p.depth),
            None if self.trie.is_starter(key) => (self.trie.begin(), 0),
            None => return Recognition::Unrecognized,
        };

        match self.trie.advance(node, key) {
            Advance::NotFound => {
                debug!(target: "input.sequence", depth, "sequence_aborted");
                self.pending = None;
                Recognition::Aborted
            }
            Advance::Continue(next) => {
                self.pending = Some(Pending {
                    node: next,
                    last_key_at: at,
                    depth: depth + 1,
                });
                Recognition::Pending
            }
            Advance::Complete(action) => {
                debug!(target: "input.sequence", depth = depth + 1, "sequence_complete");
                self.pending = None;
                Recognition::Complete(action)
            }
        }
    }
}
