//! # Indexed Vocabulary

use serde::{Deserialize, Serialize};

use crate::errors::{CMResult, CorpusmillError};
use crate::types::{IndexType, TokenIndexMap, hash_map_new};

/// A bounded, ordered vocabulary with stable indices.
///
/// Indices are assigned in strict insertion order and never reassigned
/// within one build; `token_list` and `token_index_map` always agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedVocab<T: IndexType> {
    token_list: Vec<String>,
    token_index_map: TokenIndexMap<T>,
    unknown_token: Option<String>,
}

impl<T: IndexType> Default for IndexedVocab<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IndexType> IndexedVocab<T> {
    /// Create a new, empty vocabulary.
    pub fn new() -> Self {
        Self {
            token_list: Vec::new(),
            token_index_map: hash_map_new(),
            unknown_token: None,
        }
    }

    /// Append a token, assigning it the next index.
    ///
    /// ## Arguments
    /// * `token` - The token to append; must not already be present.
    ///
    /// ## Returns
    /// The assigned index, or [`CorpusmillError::IndexOverflow`] if the
    /// vocabulary has outgrown the index type.
    pub fn push_token(
        &mut self,
        token: &str,
    ) -> CMResult<T> {
        debug_assert!(!self.token_index_map.contains_key(token));

        let index = T::from_usize(self.token_list.len()).ok_or(
            CorpusmillError::IndexOverflow {
                size: self.token_list.len() + 1,
            },
        )?;
        self.token_list.push(token.to_owned());
        self.token_index_map.insert(token.to_owned(), index);
        Ok(index)
    }

    /// Append the unknown token, recording it as the fallback entry.
    ///
    /// ## Arguments
    /// * `token` - The resolved, collision-free unknown token string.
    ///
    /// ## Returns
    /// The assigned index.
    pub fn push_unknown_token(
        &mut self,
        token: &str,
    ) -> CMResult<T> {
        let index = self.push_token(token)?;
        self.unknown_token = Some(token.to_owned());
        Ok(index)
    }

    /// The number of tokens in the vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.token_list.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.token_list.is_empty()
    }

    /// The ordered token list.
    pub fn tokens(&self) -> &[String] {
        &self.token_list
    }

    /// The unknown token, if one is configured.
    pub fn unknown_token(&self) -> Option<&str> {
        self.unknown_token.as_deref()
    }

    /// The index of the unknown token, if one is configured.
    pub fn unknown_index(&self) -> Option<T> {
        self.unknown_token
            .as_deref()
            .and_then(|token| self.lookup(token))
    }

    /// Look up a token's index.
    pub fn lookup(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_index_map.get(token).copied()
    }

    /// Check if a token is present.
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_index_map.contains_key(token)
    }

    /// Get the token at the given index.
    pub fn token_at(
        &self,
        index: T,
    ) -> Option<&str> {
        index
            .to_usize()
            .and_then(|i| self.token_list.get(i))
            .map(String::as_str)
    }
}
