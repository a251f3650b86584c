//! # Documents

use serde::{Deserialize, Serialize};

use crate::types::{CMHashMap, CountType, TypeFreqMap, hash_map_new};

/// Split a text string into whitespace-delimited tokens.
///
/// This is the only tokenization this crate performs; subword and
/// stemming tokenization are out of scope.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// A (possibly nested) token sequence.
///
/// Documents arrive as arbitrarily nested lists of tokens; the tree is
/// flattened in order wherever a flat token stream is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenTree {
    /// A single token.
    Token(String),

    /// A nested list of token trees.
    List(Vec<TokenTree>),
}

impl From<&str> for TokenTree {
    fn from(token: &str) -> Self {
        TokenTree::Token(token.to_owned())
    }
}

impl From<Vec<TokenTree>> for TokenTree {
    fn from(children: Vec<TokenTree>) -> Self {
        TokenTree::List(children)
    }
}

impl TokenTree {
    /// Build a flat (single-level) sequence from tokens.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        TokenTree::List(
            tokens
                .into_iter()
                .map(|t| TokenTree::Token(t.as_ref().to_owned()))
                .collect(),
        )
    }

    /// Append the tree's tokens, in order, to `out`.
    pub fn flatten_into<'a>(
        &'a self,
        out: &mut Vec<&'a str>,
    ) {
        match self {
            TokenTree::Token(token) => out.push(token),
            TokenTree::List(children) => {
                for child in children {
                    child.flatten_into(out);
                }
            }
        }
    }

    /// Flatten the tree into an ordered token list.
    pub fn flatten(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }
}

/// One document's token sequences, name, and metadata.
///
/// Type-frequency counts are computed once at construction and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<C = u64>
where
    C: CountType,
{
    /// The document name, if any.
    pub name: Option<String>,

    /// Free-form document metadata (e.g. "age" for CSV export).
    pub info: CMHashMap<String, String>,

    /// The document's sequences; one [`TokenTree`] per sequence.
    pub sequences: Vec<TokenTree>,

    /// The per-document type-frequency counts.
    type_freq_map: TypeFreqMap<C>,
}

impl<C: CountType> Document<C> {
    /// Create a new document from token sequences.
    ///
    /// ## Arguments
    /// * `sequences` - One [`TokenTree`] per sequence.
    /// * `name` - An optional document name.
    /// * `info` - An optional metadata map.
    ///
    /// ## Returns
    /// A new `Document` with its frequency counts populated.
    pub fn new<S: AsRef<str>>(
        sequences: Vec<TokenTree>,
        name: Option<S>,
        info: Option<CMHashMap<String, String>>,
    ) -> Self {
        let mut type_freq_map: TypeFreqMap<C> = hash_map_new();
        for sequence in &sequences {
            for token in sequence.flatten() {
                *type_freq_map.entry(token.to_owned()).or_default() += C::one();
            }
        }

        Self {
            name: name.map(|n| n.as_ref().to_owned()),
            info: info.unwrap_or_default(),
            sequences,
            type_freq_map,
        }
    }

    /// Create a single-sequence document by whitespace-tokenizing `text`.
    pub fn from_text<S: AsRef<str>>(
        text: &str,
        name: Option<S>,
        info: Option<CMHashMap<String, String>>,
    ) -> Self {
        Self::new(vec![TokenTree::from_tokens(tokenize(text))], name, info)
    }

    /// The per-document type-frequency counts.
    pub fn type_freq_map(&self) -> &TypeFreqMap<C> {
        &self.type_freq_map
    }

    /// The number of distinct types in the document.
    pub fn num_types(&self) -> usize {
        self.type_freq_map.len()
    }

    /// The total number of tokens in the document.
    pub fn num_tokens(&self) -> usize {
        self.sequences.iter().map(|s| s.flatten().len()).sum()
    }

    /// The number of sequences in the document.
    pub fn num_sequences(&self) -> usize {
        self.sequences.len()
    }

    /// Flatten the document into an ordered token list.
    pub fn flatten(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for sequence in &self.sequences {
            sequence.flatten_into(&mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("the cat  sat\n on "), vec![
            "the", "cat", "sat", "on"
        ]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_token_tree_flatten() {
        let tree: TokenTree = TokenTree::List(vec![
            "a".into(),
            TokenTree::List(vec!["b".into(), TokenTree::List(vec!["c".into()])]),
            "d".into(),
        ]);
        assert_eq!(tree.flatten(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_document_counts() {
        type C = u64;

        let doc: Document<C> = Document::new(
            vec![
                TokenTree::from_tokens(["the", "cat", "sat"]),
                TokenTree::from_tokens(["the", "mat"]),
            ],
            Some("doc0"),
            None,
        );

        assert_eq!(doc.name.as_deref(), Some("doc0"));
        assert_eq!(doc.num_sequences(), 2);
        assert_eq!(doc.num_tokens(), 5);
        assert_eq!(doc.num_types(), 4);
        assert_eq!(doc.type_freq_map().get("the"), Some(&2));
        assert_eq!(doc.type_freq_map().get("mat"), Some(&1));

        assert_eq!(doc.flatten(), vec!["the", "cat", "sat", "the", "mat"]);
    }

    #[test]
    fn test_document_from_text() {
        type C = u64;

        let doc: Document<C> = Document::from_text("hello hello world", Some("t"), None);
        assert_eq!(doc.num_sequences(), 1);
        assert_eq!(doc.num_tokens(), 3);
        assert_eq!(doc.type_freq_map().get("hello"), Some(&2));
    }
}
