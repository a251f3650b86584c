//! # Token Indexing
//!
//! Maps flat token streams to vocabulary indices. Any token absent from
//! the vocabulary is replaced by the unknown-token index; if no unknown
//! token is configured, the lookup fails fatally.

use crate::errors::{CMResult, CorpusmillError};
use crate::types::IndexType;
use crate::vocab::IndexedVocab;
use crate::windowing::{WindowConfig, expand_windows};

/// Map a flat token stream to vocabulary indices.
///
/// ## Arguments
/// * `tokens` - The flattened token stream.
/// * `vocab` - The vocabulary to look up against.
///
/// ## Returns
/// One index per token, or [`CorpusmillError::TokenNotInVocab`] when a
/// token is absent and no unknown token is configured.
pub fn index_tokens<T, I>(
    tokens: I,
    vocab: &IndexedVocab<T>,
) -> CMResult<Vec<T>>
where
    T: IndexType,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let unknown_index = vocab.unknown_index();

    tokens
        .into_iter()
        .map(|token| {
            let token = token.as_ref();
            match vocab.lookup(token).or(unknown_index) {
                Some(index) => Ok(index),
                None => Err(CorpusmillError::TokenNotInVocab {
                    token: token.to_owned(),
                }),
            }
        })
        .collect()
}

/// An indexed token stream with its training pair lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedStream<T: IndexType> {
    /// The center (windowed) or input (next-token) index list.
    pub x_list: Vec<T>,

    /// The context (windowed) or target (next-token) index list.
    pub y_list: Vec<T>,

    /// The full flat index list, one entry per input token.
    pub index_list: Vec<T>,
}

/// Index a token stream and derive its (x, y) training pair lists.
///
/// With a window config, the pair lists are the generated
/// (center, context) window pairs; without one, they are the simple
/// next-token split (`x` = all but the last index, `y` = all but the
/// first).
///
/// ## Arguments
/// * `tokens` - The flattened token stream.
/// * `vocab` - The vocabulary to look up against.
/// * `window` - The optional windowing configuration.
///
/// ## Returns
/// The indexed stream, or an indexing/windowing error.
pub fn index_stream<T, I>(
    tokens: I,
    vocab: &IndexedVocab<T>,
    window: Option<WindowConfig<T>>,
) -> CMResult<IndexedStream<T>>
where
    T: IndexType,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let index_list = index_tokens(tokens, vocab)?;

    let (x_list, y_list) = match window {
        Some(config) => {
            let pairs = expand_windows(
                &index_list,
                config.size,
                config.direction,
                config.pad_index,
            )?;
            (pairs.centers, pairs.contexts)
        }
        None => (
            index_list[..index_list.len().saturating_sub(1)].to_vec(),
            index_list.get(1..).unwrap_or_default().to_vec(),
        ),
    };

    Ok(IndexedStream {
        x_list,
        y_list,
        index_list,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::windowing::WindowDirection;

    fn vocab_abc() -> IndexedVocab<u32> {
        let mut vocab = IndexedVocab::new();
        vocab.push_unknown_token("<UNK>").unwrap();
        for token in ["a", "b", "c"] {
            vocab.push_token(token).unwrap();
        }
        vocab
    }

    #[test]
    fn test_index_tokens_round_trip() {
        let vocab = vocab_abc();

        let indices = index_tokens(["a", "b", "c", "a"], &vocab).unwrap();
        assert_eq!(indices, vec![1, 2, 3, 1]);

        for token in ["a", "b", "c"] {
            let index = vocab.lookup(token).unwrap();
            assert_eq!(vocab.token_at(index), Some(token));
        }
    }

    #[test]
    fn test_unknown_fallback() {
        let vocab = vocab_abc();

        let indices = index_tokens(["a", "zebra", "c"], &vocab).unwrap();
        assert_eq!(indices, vec![1, 0, 3]);
    }

    #[test]
    fn test_missing_without_unknown_is_fatal() {
        let mut vocab: IndexedVocab<u32> = IndexedVocab::new();
        vocab.push_token("a").unwrap();

        let result = index_tokens(["a", "zebra"], &vocab);
        assert!(matches!(
            result,
            Err(CorpusmillError::TokenNotInVocab { token }) if token == "zebra"
        ));
    }

    #[test]
    fn test_next_token_split() {
        let vocab = vocab_abc();

        let stream = index_stream(["a", "b", "c"], &vocab, None).unwrap();
        assert_eq!(stream.index_list, vec![1, 2, 3]);
        assert_eq!(stream.x_list, vec![1, 2]);
        assert_eq!(stream.y_list, vec![2, 3]);

        let empty = index_stream(Vec::<&str>::new(), &vocab, None).unwrap();
        assert!(empty.x_list.is_empty());
        assert!(empty.y_list.is_empty());
    }

    #[test]
    fn test_windowed_split() {
        let vocab = vocab_abc();

        let stream = index_stream(
            ["a", "b", "c"],
            &vocab,
            Some(WindowConfig::new(1, WindowDirection::Both)),
        )
        .unwrap();

        assert_eq!(stream.x_list.len(), stream.y_list.len());
        assert_eq!(stream.x_list, vec![1, 2, 2, 3, 3]);
        assert_eq!(stream.y_list, vec![2, 1, 3, 2, 0]);
    }
}
