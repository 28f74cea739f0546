//! Arena trie over key code points.
//!
//! Nodes live in a single `Vec`; edges refer to children by index, which keeps
//! traversal allocation-free and lets callers hold a `NodeId` for an
//! in-progress sequence without borrowing the trie.

use smallvec::SmallVec;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One key sequence and the action it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSpec<A> {
    pub keys: Vec<char>,
    pub action: A,
}

impl<A> SequenceSpec<A> {
    pub fn new(keys: impl Into<Vec<char>>, action: A) -> Self {
        Self {
            keys: keys.into(),
            action,
        }
    }
}

#[derive(Debug, Clone)]
struct Edge {
    key: char,
    next: usize,
}

#[derive(Debug, Clone)]
struct Node<A> {
    action: Option<A>,
    edges: SmallVec<[Edge; 4]>,
}

impl<A> Node<A> {
    fn new() -> Self {
        Self {
            action: None,
            edges: SmallVec::new(),
        }
    }
}

/// Outcome of feeding one key to a trie node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance<A> {
    /// No edge for the key; the sequence is aborted.
    NotFound,
    /// Interior node reached; more keys are needed.
    Continue(NodeId),
    /// Leaf reached; the sequence is complete.
    Complete(A),
}

#[derive(Debug, Clone)]
pub struct CommandTrie<A> {
    nodes: Vec<Node<A>>,
}

impl<A: Clone> CommandTrie<A> {
    /// Build the trie. Empty sequences are skipped; a later entry with the same
    /// keys overrides an earlier one.
    pub fn build(specs: impl IntoIterator<Item = SequenceSpec<A>>) -> Self {
        let mut trie = CommandTrie {
            nodes: vec![Node::new()],
        };
        for (idx, spec) in specs.into_iter().enumerate() {
            if spec.keys.is_empty() {
                trace!(target: "input.sequence", spec_index = idx, "empty_sequence_skipped");
                continue;
            }
            let mut cur = 0usize;
            for &key in &spec.keys {
                cur = match trie.nodes[cur].edges.iter().find(|e| e.key == key) {
                    Some(e) => e.next,
                    None => {
                        let new_idx = trie.nodes.len();
                        trie.nodes.push(Node::new());
                        trie.nodes[cur].edges.push(Edge { key, next: new_idx });
                        new_idx
                    }
                };
            }
            if trie.nodes[cur].action.is_some() {
                trace!(target: "input.sequence", spec_index = idx, node = cur, "action_override");
            }
            trie.nodes[cur].action = Some(spec.action);
        }
        trie
    }

    /// Root node; the starting point of every recognition.
    pub fn begin(&self) -> NodeId {
        NodeId(0)
    }

    /// True when `key` can start a sequence.
    pub fn is_starter(&self, key: char) -> bool {
        self.nodes[0].edges.iter().any(|e| e.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[0].edges.is_empty()
    }

    /// Follow the edge for `key` from `node`.
    ///
    /// A node carrying an action that is also a prefix of a longer sequence
    /// yields `Continue`: the longer sequence takes precedence.
    pub fn advance(&self, node: NodeId, key: char) -> Advance<A> {
        let Some(current) = self.nodes.get(node.0) else {
            return Advance::NotFound;
        };
        let Some(edge) = current.edges.iter().find(|e| e.key == key) else {
            trace!(target: "input.sequence", node = node.0, "no_edge");
            return Advance::NotFound;
        };
        let next = &self.nodes[edge.next];
        trace!(target: "input.sequence", node = edge.next, "advance");
        match (&next.action, next.edges.is_empty()) {
            (Some(action), true) => Advance::Complete(action.clone()),
            _ => Advance::Continue(NodeId(edge.next)),
        }
    }
}
