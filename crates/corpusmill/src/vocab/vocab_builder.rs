//! # Vocabulary Builder

use crate::errors::{CMResult, CorpusmillError};
use crate::types::{CountType, IndexType, TypeFreqMap, try_vocab_size};
use crate::vocab::IndexedVocab;

/// The canonical unknown-token seed string.
pub const UNKNOWN_TOKEN_SEED: &str = "<UNK>";

/// Resolve a collision-free unknown token string.
///
/// Starting from `seed`, the candidate is wrapped in one more enclosing
/// `<` `>` pair per collision with a corpus type, until unique.
///
/// ## Arguments
/// * `type_freq_map` - The corpus-wide frequency table to avoid.
/// * `seed` - The canonical starting string.
///
/// ## Returns
/// A token string distinct from every corpus type.
pub fn resolve_unknown_token<C: CountType>(
    type_freq_map: &TypeFreqMap<C>,
    seed: &str,
) -> String {
    let mut token = seed.to_owned();
    while type_freq_map.contains_key(&token) {
        token = format!("<{token}>");
    }
    token
}

/// The result of a vocabulary build.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabBuild<T: IndexType> {
    /// The built vocabulary.
    pub vocab: IndexedVocab<T>,

    /// Include-list tokens absent from the filtered frequency table.
    ///
    /// A non-fatal diagnostic, not an error.
    pub missing_tokens: Vec<String>,
}

/// Options for building an [`IndexedVocab`] from a frequency table.
#[derive(Debug, Clone)]
pub struct VocabBuilder {
    /// The target vocab size; defaults to the number of distinct types,
    /// plus one if the unknown token is included.
    pub vocab_size: Option<usize>,

    /// Tokens inserted first, in the given order, when present.
    pub include_list: Vec<String>,

    /// Tokens removed from the frequency table before selection.
    pub exclude_list: Vec<String>,

    /// Whether to reserve the unknown token at index 0.
    pub include_unknown: bool,
}

impl Default for VocabBuilder {
    fn default() -> Self {
        Self {
            vocab_size: None,
            include_list: Vec::new(),
            exclude_list: Vec::new(),
            include_unknown: true,
        }
    }
}

impl VocabBuilder {
    /// Sets the target vocab size.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self {
            vocab_size: Some(vocab_size),
            ..self
        }
    }

    /// Sets the ordered include list.
    pub fn with_include_list<I>(
        self,
        include_list: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            include_list: include_list
                .into_iter()
                .map(|t| t.as_ref().to_owned())
                .collect(),
            ..self
        }
    }

    /// Sets the exclude list.
    pub fn with_exclude_list<I>(
        self,
        exclude_list: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            exclude_list: exclude_list
                .into_iter()
                .map(|t| t.as_ref().to_owned())
                .collect(),
            ..self
        }
    }

    /// Sets whether to reserve the unknown token.
    pub fn with_include_unknown(
        self,
        include_unknown: bool,
    ) -> Self {
        Self {
            include_unknown,
            ..self
        }
    }

    /// Build a vocabulary from a corpus-wide frequency table.
    ///
    /// The build is deterministic: the unknown token (if included) takes
    /// index 0, include-list tokens follow in their given order, and the
    /// remaining tokens fill to the target size sorted by descending
    /// frequency with ascending lexical tie-break.
    ///
    /// ## Arguments
    /// * `type_freq_map` - The corpus-wide frequency table.
    ///
    /// ## Returns
    /// The built vocab and the missing include-list tokens; or a
    /// configuration error when the exclusion list empties the table.
    pub fn build<T, C>(
        &self,
        type_freq_map: &TypeFreqMap<C>,
    ) -> CMResult<VocabBuild<T>>
    where
        T: IndexType,
        C: CountType,
    {
        let vocab_size = self.vocab_size.unwrap_or_else(|| {
            type_freq_map.len() + usize::from(self.include_unknown)
        });
        try_vocab_size::<T>(vocab_size)?;

        log::info!(
            "building vocab of size {} (include_unknown={})",
            vocab_size,
            self.include_unknown,
        );

        let mut vocab: IndexedVocab<T> = IndexedVocab::new();
        let mut missing_tokens = Vec::new();

        if self.include_unknown {
            let unknown = resolve_unknown_token(type_freq_map, UNKNOWN_TOKEN_SEED);
            vocab.push_unknown_token(&unknown)?;
        }

        let mut filtered_freq_map = type_freq_map.clone();
        for token in &self.exclude_list {
            filtered_freq_map.remove(token);
        }
        if filtered_freq_map.is_empty() {
            return Err(CorpusmillError::EmptyFilteredVocab);
        }

        for token in &self.include_list {
            if filtered_freq_map.remove(token).is_some() {
                vocab.push_token(token)?;
            } else {
                missing_tokens.push(token.clone());
            }
        }

        if vocab_size > vocab.vocab_size() {
            // Descending frequency; ascending lexical tie-break (deterministic).
            let mut sorted_tokens: Vec<(&String, &C)> = filtered_freq_map.iter().collect();
            sorted_tokens.sort_by(|(token_a, count_a), (token_b, count_b)| {
                count_b.cmp(count_a).then_with(|| token_a.cmp(token_b))
            });

            for (token, _count) in sorted_tokens {
                if vocab.vocab_size() >= vocab_size {
                    break;
                }
                if !vocab.contains(token) {
                    vocab.push_token(token)?;
                }
            }
        }

        log::info!(
            "built vocab with {} tokens; {} include-list tokens missing",
            vocab.vocab_size(),
            missing_tokens.len(),
        );

        Ok(VocabBuild {
            vocab,
            missing_tokens,
        })
    }
}
