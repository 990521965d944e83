use std::fmt;

use hashbrown::{HashMap, HashSet};
use tracing::trace;

use crate::trie::Trie;

/// Index of a node in its trie's arena. Only meaningful for the trie that
/// handed it out.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone)]
pub(crate) struct Node<V> {
    // `None` only on the root.
    pub character: Option<char>,
    pub children: HashMap<char, NodeId>,
    pub parent: Option<NodeId>,
    // Terminal iff set.
    pub value: Option<V>,
}

impl<V> Node<V> {
    pub fn root() -> Self {
        Self {
            character: None,
            children: HashMap::new(),
            parent: None,
            value: None,
        }
    }

    pub fn new(parent: NodeId, chr: char) -> Self {
        Self {
            character: Some(chr),
            children: HashMap::new(),
            parent: Some(parent),
            value: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }
}

/// A borrowed view of one node. Each node is the root of the sub-trie of
/// strings passing through it, so every query on [`Trie`] is also available
/// here, relative to this node.
pub struct NodeRef<'a, V> {
    pub(crate) trie: &'a Trie<V>,
    pub(crate) id: NodeId,
}

impl<'a, V> Clone for NodeRef<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> Copy for NodeRef<'a, V> {}

impl<'a, V> NodeRef<'a, V> {
    pub(crate) fn new(trie: &'a Trie<V>, id: NodeId) -> Self {
        Self { trie, id }
    }

    fn node(&self) -> &'a Node<V> {
        self.trie.node_at(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The character on the edge into this node; `None` for the root.
    pub fn character(&self) -> Option<char> {
        self.node().character
    }

    pub fn parent(&self) -> Option<NodeRef<'a, V>> {
        self.node().parent.map(|id| NodeRef::new(self.trie, id))
    }

    pub fn is_terminal(&self) -> bool {
        self.node().is_terminal()
    }

    pub fn value(&self) -> Option<&'a V> {
        self.node().value.as_ref()
    }

    pub fn child(&self, chr: char) -> Option<NodeRef<'a, V>> {
        let id = *self.node().children.get(&chr)?;
        Some(NodeRef::new(self.trie, id))
    }

    /// Children in no particular order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, V>> + 'a {
        let trie = self.trie;
        self.node()
            .children
            .values()
            .map(move |&id| NodeRef::new(trie, id))
    }

    pub fn child_chars(&self) -> HashSet<char> {
        self.node().children.keys().copied().collect()
    }

    /// Follows `key` down from this node. The node need not be terminal:
    /// this answers whether the path exists, not whether it was inserted.
    pub fn find_node(&self, key: &str) -> Option<NodeRef<'a, V>> {
        let mut cur = self.id;
        for chr in key.chars() {
            match self.trie.node_at(cur).children.get(&chr) {
                Some(&next) => cur = next,
                None => {
                    trace!(key, missing = %chr.escape_debug(), "path not in trie");
                    return None;
                }
            }
        }
        Some(NodeRef::new(self.trie, cur))
    }

    pub fn find(&self, key: &str) -> Option<&'a V> {
        self.find_node(key)?.value()
    }

    /// The string spelled from the trie's root down to this node.
    pub fn path_string(&self) -> String {
        let mut chars = vec![];
        let mut cur = Some(self.id);
        while let Some(id) = cur {
            let node = self.trie.node_at(id);
            match node.character {
                Some(chr) => chars.push(chr),
                None => break,
            }
            cur = node.parent;
        }
        chars.iter().rev().collect()
    }
}

impl<'a, V> fmt::Display for NodeRef<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.path_string())
    }
}

impl<'a, V> fmt::Debug for NodeRef<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("path", &self.path_string())
            .field("terminal", &self.is_terminal())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Trie;

    #[test]
    fn test_path_string() {
        let t = Trie::from_strings(vec!["héllo", "help"]);

        let node = t.find_node("hél").unwrap();
        assert_eq!(node.path_string(), "hél");
        assert_eq!(node.to_string(), "hél");
        assert_eq!(node.character(), Some('l'));
        assert_eq!(node.parent().unwrap().path_string(), "hé");

        assert_eq!(t.root().path_string(), "");
        assert_eq!(t.root().character(), None);
        assert!(t.root().parent().is_none());
    }

    #[test]
    fn test_nul_is_an_ordinary_character() {
        let t = Trie::from_strings(vec!["a\0b"]);
        assert!(t.contains("a\0b"));
        assert_eq!(t.find_node("a\0").unwrap().path_string(), "a\0");
    }

    #[test]
    fn test_relative_lookup() {
        let t = Trie::from_entries(vec![("cat", 1), ("car", 2), ("cart", 3)]);
        let ca = t.find_node("ca").unwrap();

        assert_eq!(ca.find("t"), Some(&1));
        assert_eq!(ca.find("rt"), Some(&3));
        assert_eq!(ca.find(""), None);
        assert_eq!(ca.find_node("r").unwrap().path_string(), "car");
        assert!(ca.find_node("x").is_none());

        let car = ca.child('r').unwrap();
        assert!(car.is_terminal());
        assert_eq!(car.value(), Some(&2));
        assert_eq!(car.children().count(), 1);
    }
}
