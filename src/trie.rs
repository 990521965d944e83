use std::fmt;
use std::io;
use std::iter::FromIterator;

use hashbrown::HashMap;
use tracing::debug;

use crate::error::{Result, TrieError};
use crate::iter::{Iter, Walk};
use crate::node::{Node, NodeId, NodeRef};

#[derive(Clone)]
pub struct Trie<V> {
    // Index 0 is the root. Nodes are only ever appended.
    pub(crate) nodes: Vec<Node<V>>,
    pub(crate) len: usize,
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Reserves room for `nodes` nodes, root included.
    pub fn with_capacity(nodes: usize) -> Self {
        let mut arena = Vec::with_capacity(nodes.max(1));
        arena.push(Node::root());
        Self {
            nodes: arena,
            len: 0,
        }
    }

    pub fn from_entries<S: AsRef<str>>(entries: impl IntoIterator<Item = (S, V)>) -> Self {
        let mut trie = Self::new();
        trie.extend(entries);
        debug!(
            strings = trie.len,
            nodes = trie.nodes.len(),
            "built trie from entries"
        );
        trie
    }

    pub(crate) fn node_at(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id.0]
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<()> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(TrieError::UnknownNode {
                id,
                len: self.nodes.len(),
            })
        }
    }

    pub fn root(&self) -> NodeRef<V> {
        NodeRef::new(self, NodeId::ROOT)
    }

    pub fn node(&self, id: NodeId) -> Result<NodeRef<V>> {
        self.check(id)?;
        Ok(NodeRef::new(self, id))
    }

    /// Number of stored strings.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn find_node(&self, key: &str) -> Option<NodeRef<V>> {
        self.root().find_node(key)
    }

    pub fn find(&self, key: &str) -> Option<&V> {
        self.root().find(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn find_suffixes(&self, prefix: &str) -> Vec<String> {
        self.root().find_suffixes(prefix)
    }

    pub fn to_entries(&self) -> HashMap<String, &V> {
        self.root().to_entries()
    }

    pub fn walk<'a>(&'a self, visit: impl FnMut(NodeRef<'a, V>)) {
        self.root().walk(visit)
    }

    pub fn walk_iter(&self) -> Walk<V> {
        self.root().walk_iter()
    }

    pub fn iter(&self) -> Iter<V> {
        self.root().iter()
    }

    pub fn debug(&self, out: &mut impl io::Write) -> io::Result<()> {
        self.debug_node(NodeId::ROOT, "", out)
    }

    fn debug_node(&self, id: NodeId, indent: &str, out: &mut impl io::Write) -> io::Result<()> {
        let node = self.node_at(id);
        writeln!(
            out,
            "Node {{ id: {}, terminal: {:?}, children: {} }}",
            id,
            node.is_terminal(),
            node.children.len()
        )?;

        let mut children = node
            .children
            .iter()
            .map(|(&chr, &child)| (chr, child))
            .collect::<Vec<_>>();
        children.sort_unstable();

        if let Some((last, init)) = children.split_last() {
            let child_indent = format!("{} \u{2502}", indent);
            for (chr, child) in init {
                write!(out, "{} \u{251C} {:?}: ", indent, chr)?;
                self.debug_node(*child, &child_indent, out)?;
            }

            let (chr, child) = last;
            write!(out, "{} \u{2514} {:?}: ", indent, chr)?;
            let child_indent = format!("{}  ", indent);
            self.debug_node(*child, &child_indent, out)?;
        }
        Ok(())
    }
}

impl Trie<()> {
    pub fn from_strings<S: AsRef<str>>(strs: impl IntoIterator<Item = S>) -> Self {
        Self::from_entries(strs.into_iter().map(|s| (s, ())))
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>, V> Extend<(S, V)> for Trie<V> {
    fn extend<I: IntoIterator<Item = (S, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}

impl<S: AsRef<str>, V> FromIterator<(S, V)> for Trie<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
