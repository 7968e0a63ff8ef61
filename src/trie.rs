//! Label trie compiled from the public suffix rule list.
//!
//! The trie is keyed by reversed label order: the path from the root to a
//! node spells out a suffix with the rightmost label closest to the root.
//! Wildcard labels are stored as ordinary children under the literal `"*"`
//! key and distinguished at lookup time.

use std::collections::HashMap;

/// Wildcard label marker as it appears in rules ("*.kawasaki.jp").
const WILDCARD: &str = "*";

/// One label position in the suffix trie.
#[derive(Debug, Default)]
struct TldNode {
    /// Terminates a rule that was prefixed with `!`.
    except_rule: bool,
    /// The path from the root to this node is itself a complete,
    /// non-exception public suffix.
    valid_tld: bool,
    children: HashMap<String, TldNode>,
}

impl TldNode {
    fn new(except_rule: bool, valid_tld: bool) -> Self {
        Self {
            except_rule,
            valid_tld,
            children: HashMap::new(),
        }
    }
}

/// Compiled suffix rule set.
///
/// Built once from a rule snapshot and read-only afterwards: no matching
/// operation mutates the trie, so a `SuffixTrie` can be shared freely
/// across threads.
#[derive(Debug, Default)]
pub struct SuffixTrie {
    root: TldNode,
}

impl SuffixTrie {
    /// Compile a set of raw rules into a trie.
    ///
    /// Rules are expected lowercase and comment-free (the loader guarantees
    /// this); the builder itself does not validate rule syntax, and
    /// duplicate rules are idempotent.
    pub fn build<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::default();
        for rule in rules {
            trie.insert(rule.as_ref());
        }
        trie
    }

    /// Insert a single rule, walking its labels right-to-left.
    fn insert(&mut self, rule: &str) {
        let (rule, exception) = match rule.strip_prefix('!') {
            Some(stripped) => (stripped, true),
            None => (rule, false),
        };

        let labels: Vec<&str> = rule.split('.').collect();
        let mut current = &mut self.root;
        for (idx, label) in labels.iter().enumerate().rev() {
            let leftmost = idx == 0;
            let node = current
                .children
                .entry((*label).to_string())
                .or_insert_with(|| TldNode::new(exception, !exception && leftmost));
            if !exception && leftmost {
                // Upgrade only; an existing valid suffix never becomes invalid.
                node.valid_tld = true;
            }
            current = node;
        }
    }

    /// Find the boundary between the registered-domain portion and the
    /// public suffix of `labels`.
    ///
    /// Scans right-to-left, applying precedence: exception rules beat
    /// wildcards, wildcards beat no-match, and a completed suffix one level
    /// down terminates the scan as soon as the next label fails to extend
    /// it. Returns the count of labels left of the suffix; `labels[idx..]`
    /// form the suffix. `None` means no rule matched, or the entire host is
    /// itself a public suffix.
    pub fn suffix_boundary(&self, labels: &[&str]) -> Option<usize> {
        let mut current = &self.root;
        let mut parent_valid = false;

        for (idx, label) in labels.iter().enumerate().rev() {
            let node = current.children.get(*label);
            let found_wildcard = current.children.contains_key(WILDCARD);

            match node {
                Some(node) if !node.except_rule => {
                    parent_valid = node.valid_tld;
                    current = node;
                }
                // An exception rule ends the suffix one label to its right.
                Some(_) => return Some(idx + 1),
                None if parent_valid => return Some(idx + 1),
                None if found_wildcard => {
                    // The wildcard consumes this label but the cursor stays
                    // put; only the validity flag carries forward.
                    parent_valid = true;
                }
                None => return None,
            }
        }

        // Every label matched trie nodes without crossing a completed
        // suffix boundary: the whole host is a suffix, not a domain.
        None
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}
