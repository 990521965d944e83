use thiserror::Error;

use crate::node::NodeId;

pub type Result<T> = std::result::Result<T, TrieError>;

/// Lookups that miss are not errors; they come back as `None` or an empty
/// collection. The only failure is handing a trie a `NodeId` it never minted.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum TrieError {
    #[error("node {id} does not belong to this trie ({len} nodes)")]
    UnknownNode { id: NodeId, len: usize },
}
