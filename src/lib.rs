//! A character-indexed prefix tree.
//!
//! Nodes live in a flat arena owned by the [`Trie`]; parent and child links
//! are arena indices, so the parent back-reference never owns anything.
//! Every node is usable as a sub-trie through a [`NodeRef`] handle.

mod error;
mod insert;
mod iter;
mod node;
mod trie;


pub use error::{Result, TrieError};
pub use iter::{Iter, Walk};
pub use node::{NodeId, NodeRef};
pub use trie::Trie;
