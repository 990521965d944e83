use hashbrown::HashMap;

use crate::node::{NodeId, NodeRef};
use crate::trie::Trie;

/// Preorder walk over a sub-trie: a node is yielded before any of its
/// children. Sibling order follows the children map and is unspecified.
pub struct Walk<'a, V> {
    trie: &'a Trie<V>,
    stack: Vec<NodeId>,
}

impl<'a, V> Iterator for Walk<'a, V> {
    type Item = NodeRef<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.trie.node_at(id).children.values().copied());
        Some(NodeRef::new(self.trie, id))
    }
}

/// Every stored `(string, value)` pair in a sub-trie. Strings are spelled
/// from the trie's root, not from the node the iteration started at.
pub struct Iter<'a, V> {
    walk: Walk<'a, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.walk.next()?;
            if let Some(value) = node.value() {
                return Some((node.path_string(), value));
            }
        }
    }
}

impl<'a, V> NodeRef<'a, V> {
    pub fn walk_iter(&self) -> Walk<'a, V> {
        Walk {
            trie: self.trie,
            stack: vec![self.id],
        }
    }

    pub fn walk(&self, mut visit: impl FnMut(NodeRef<'a, V>)) {
        for node in self.walk_iter() {
            visit(node);
        }
    }

    pub fn iter(&self) -> Iter<'a, V> {
        Iter {
            walk: self.walk_iter(),
        }
    }

    /// All stored strings that start with `prefix`, `prefix` included if it
    /// was itself stored. Unordered.
    pub fn find_suffixes(&self, prefix: &str) -> Vec<String> {
        match self.find_node(prefix) {
            None => vec![],
            Some(node) => node.iter().map(|(key, _)| key).collect(),
        }
    }

    pub fn to_entries(&self) -> HashMap<String, &'a V> {
        self.iter().collect()
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use crate::Trie;

    fn sorted(strs: Vec<String>) -> Vec<String> {
        strs.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
    }

    #[test]
    fn test_walk_is_preorder() {
        let t = Trie::from_strings(vec!["abc", "abd", "ae", "f"]);

        let order = t.walk_iter().map(|n| n.path_string()).collect::<Vec<_>>();
        assert_eq!(order.len(), t.node_count());
        assert_eq!(order[0], "");

        // Every node appears after its parent.
        for (i, path) in order.iter().enumerate().skip(1) {
            let mut parent = path.clone();
            parent.pop();
            let parent_pos = order.iter().position(|p| *p == parent).unwrap();
            assert!(parent_pos < i, "{:?} visited before {:?}", path, parent);
        }
    }

    #[test]
    fn test_walk_is_restartable() {
        let t = Trie::from_strings(vec!["one", "two", "three"]);
        let first = t.walk_iter().map(|n| n.id()).collect::<Vec<_>>();
        let second = t.walk_iter().map(|n| n.id()).collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn test_walk_callback() {
        let t = Trie::from_strings(vec!["to", "tea", "ten", "i", "in", "inn"]);
        let mut terminals = vec![];
        let mut visited = 0;
        t.walk(|node| {
            visited += 1;
            if node.is_terminal() {
                terminals.push(node.to_string());
            }
        });
        assert_eq!(visited, t.node_count());
        assert_eq!(sorted(terminals), vec!["i", "in", "inn", "tea", "ten", "to"]);
    }

    #[test]
    fn test_sub_trie_iteration() {
        let t = Trie::from_entries(vec![("tea", 1), ("ten", 2), ("to", 3), ("t", 4)]);
        let te = t.find_node("te").unwrap();

        let entries = te.iter().collect::<BTreeMap<_, _>>();
        let expected = vec![("tea".to_string(), &1), ("ten".to_string(), &2)]
            .into_iter()
            .collect::<BTreeMap<_, _>>();
        assert_eq!(entries, expected);

        assert_eq!(sorted(te.find_suffixes("a")), vec!["tea"]);
        assert!(te.find_suffixes("o").is_empty());
    }

    #[test]
    fn test_find_suffixes_includes_prefix() {
        let t = Trie::from_strings(vec!["in", "inn", "ink", "on"]);
        assert_eq!(sorted(t.find_suffixes("in")), vec!["in", "ink", "inn"]);
        assert_eq!(sorted(t.find_suffixes("")), vec!["in", "ink", "inn", "on"]);
        assert!(t.find_suffixes("inx").is_empty());
    }

    #[test]
    fn test_into_iter() {
        let t = Trie::from_entries(vec![("a", 1), ("b", 2)]);
        let mut total = 0;
        for (_, v) in &t {
            total += *v;
        }
        assert_eq!(total, 3);
    }
}
