//! core-keymap: Normal-mode key resolution.
//!
//! Single keys resolve through a fixed table (`bindings`). Multi-key sequences
//! such as `dd` are compiled into a [`CommandTrie`] and driven by a
//! [`SequenceRecognizer`], which owns the pending state and the inactivity
//! timeout. Nothing in this crate touches a clock or a buffer.

pub mod bindings;
pub mod command;
pub mod recognizer;
pub mod trie;

pub use bindings::normal_binding;
pub use command::{KeymapError, NormalCommand, default_sequences, parse_sequence};
pub use recognizer::{Recognition, SequenceRecognizer};
pub use trie::{Advance, CommandTrie, NodeId, SequenceSpec};

use tracing::debug;

/// Default leader key.
pub const DEFAULT_LEADER: char = '\\';

/// Compile `(notation, command name)` pairs into a trie of Normal commands.
///
/// The first malformed entry aborts the build; callers decide whether to fall
/// back to [`default_normal_trie`].
pub fn build_normal_trie<'a, I>(entries: I, leader: char) -> Result<CommandTrie<NormalCommand>, KeymapError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut specs = Vec::new();
    for (notation, name) in entries {
        let action: NormalCommand = name.parse()?;
        let keys = parse_sequence(notation, leader)?;
        specs.push(SequenceSpec::new(keys, action));
    }
    debug!(target: "input.sequence", count = specs.len(), "normal_trie_built");
    Ok(CommandTrie::build(specs))
}

/// Trie holding only [`default_sequences`].
pub fn default_normal_trie(leader: char) -> CommandTrie<NormalCommand> {
    let specs = default_sequences()
        .into_iter()
        .filter_map(|(notation, action)| {
            parse_sequence(notation, leader)
                .ok()
                .map(|keys| SequenceSpec::new(keys, action))
        });
    CommandTrie::build(specs)
}
