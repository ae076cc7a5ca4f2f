//! Trie data structure for dictionary-based segmentation.
//!
//! The Trie stores words as sequences of code points and answers
//! longest-prefix queries in time proportional to the length of the match,
//! independent of the number of stored words.

use std::collections::HashMap;

/// A node in the Trie
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Children nodes, keyed by code point
    pub children: HashMap<char, TrieNode>,
    /// Whether this node marks the end of a stored word
    pub is_leaf: bool,
}

impl TrieNode {
    /// Create a new empty node
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Check if this node has any children
    pub fn can_walk(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if this node is a valid word ending
    pub fn is_match(&self) -> bool {
        self.is_leaf
    }
}

/// A set of words organised as a character trie
#[derive(Debug, Default, Clone)]
pub struct Trie {
    /// The root node
    root: TrieNode,
    /// Number of words in the trie
    word_count: usize,
}

impl Trie {
    /// Create a new empty Trie
    pub fn new() -> Self {
        Trie::default()
    }

    /// Get the number of words in the trie
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Check if the trie is empty
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Add a word. Returns `true` if it was not already present.
    pub fn add(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.children.entry(c).or_default();
        }

        if current.is_leaf {
            return false;
        }
        current.is_leaf = true;
        self.word_count += 1;
        true
    }

    /// Walk the trie by one character, returning the next node if it exists
    pub fn walk<'a>(&'a self, c: char, current: Option<&'a TrieNode>) -> Option<&'a TrieNode> {
        let node = current.unwrap_or(&self.root);
        node.children.get(&c)
    }

    /// Check if a word exists in the trie
    pub fn has_word(&self, word: &str) -> bool {
        let mut current = &self.root;

        for c in word.chars() {
            match current.children.get(&c) {
                Some(node) => current = node,
                None => return false,
            }
        }

        current.is_leaf
    }

    /// Byte length of the longest stored word that is a prefix of `text`
    pub fn longest_prefix_len(&self, text: &str) -> Option<usize> {
        let mut current: Option<&TrieNode> = None;
        let mut last_match: Option<usize> = None;

        for (i, c) in text.char_indices() {
            match self.walk(c, current) {
                Some(next) => {
                    if next.is_match() {
                        last_match = Some(i + c.len_utf8());
                    }
                    if !next.can_walk() {
                        break;
                    }
                    current = Some(next);
                }
                None => break,
            }
        }

        last_match
    }

    /// Remove a word. Returns `true` if it was present.
    ///
    /// Branches left without any word below them are pruned.
    pub fn remove(&mut self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return false;
        }
        let removed = Self::remove_from(&mut self.root, &chars);
        if removed {
            self.word_count -= 1;
        }
        removed
    }

    fn remove_from(node: &mut TrieNode, chars: &[char]) -> bool {
        let Some((first, rest)) = chars.split_first() else {
            if node.is_leaf {
                node.is_leaf = false;
                return true;
            }
            return false;
        };

        let Some(child) = node.children.get_mut(first) else {
            return false;
        };
        let removed = Self::remove_from(child, rest);
        if removed && !child.is_leaf && !child.can_walk() {
            node.children.remove(first);
        }
        removed
    }

    /// All stored words, in no particular order
    pub fn words(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.word_count);
        let mut prefix = String::new();
        Self::collect(&self.root, &mut prefix, &mut out);
        out
    }

    fn collect(node: &TrieNode, prefix: &mut String, out: &mut Vec<String>) {
        if node.is_leaf {
            out.push(prefix.clone());
        }
        for (&c, child) in &node.children {
            prefix.push(c);
            Self::collect(child, prefix, out);
            prefix.pop();
        }
    }

    /// Get a reference to the root node (for external traversal)
    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}
