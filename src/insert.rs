use tracing::trace;

use crate::error::Result;
use crate::node::{Node, NodeId};
use crate::trie::Trie;

impl<V> Trie<V> {
    /// Inserts `key`, returning the value it previously held if it was
    /// already present.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        self.insert_from(NodeId::ROOT, key, value)
    }

    /// Inserts `suffix` below the node `at`, so the stored string is that
    /// node's path followed by `suffix`.
    pub fn insert_at(&mut self, at: NodeId, suffix: &str, value: V) -> Result<Option<V>> {
        self.check(at)?;
        Ok(self.insert_from(at, suffix, value))
    }

    fn insert_from(&mut self, at: NodeId, key: &str, value: V) -> Option<V> {
        let mut cur = at;
        let mut chars = key.chars();
        let mut branch = None;

        // Descend through the nodes that already exist.
        for chr in chars.by_ref() {
            match self.nodes[cur.0].children.get(&chr) {
                Some(&next) => cur = next,
                None => {
                    branch = Some(chr);
                    break;
                }
            }
        }

        // Everything past the first miss is new.
        let mut created = 0usize;
        for chr in branch.into_iter().chain(chars) {
            cur = self.push_child(cur, chr);
            created += 1;
        }
        if created > 0 {
            trace!(key, created, nodes = self.nodes.len(), "extended trie");
        }

        let old = self.nodes[cur.0].value.replace(value);
        if old.is_none() {
            self.len += 1;
        }
        old
    }

    fn push_child(&mut self, parent: NodeId, chr: char) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(parent, chr));
        let prev = self.nodes[parent.0].children.insert(chr, id);
        debug_assert!(prev.is_none());
        id
    }
}
