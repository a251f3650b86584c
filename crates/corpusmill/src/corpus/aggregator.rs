//! # Corpus Aggregation

use serde::{Deserialize, Serialize};

use crate::corpus::document::{Document, TokenTree};
use crate::errors::CMResult;
use crate::indexing::index_tokens;
use crate::sequencing::{BatchPlan, BatchSet, batch_index_list};
use crate::types::{CMHashMap, CountType, IndexType, TypeFreqMap, hash_map_new};
use crate::vocab::IndexedVocab;

/// Accumulates per-document statistics into corpus-wide counts.
///
/// The aggregator owns the document list and the running type-frequency
/// table. All totals are re-derived from the owned collections rather
/// than incrementally mutated, so the counters can never drift from
/// the underlying table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CorpusAggregator<C = u64>
where
    C: CountType,
{
    documents: Vec<Document<C>>,
    type_freq_map: TypeFreqMap<C>,
}

impl<C: CountType> CorpusAggregator<C> {
    /// Create a new, empty aggregator.
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            type_freq_map: hash_map_new(),
        }
    }

    /// Add a document, merging its counts into the corpus table.
    ///
    /// ## Arguments
    /// * `document` - The document to add.
    pub fn add_document(
        &mut self,
        document: Document<C>,
    ) {
        for (token, count) in document.type_freq_map() {
            *self.type_freq_map.entry(token.clone()).or_default() += *count;
        }
        self.documents.push(document);

        log::debug!(
            "added document {:?}: {} documents, {} types, {} tokens",
            self.documents.last().and_then(|d| d.name.as_deref()),
            self.num_documents(),
            self.num_types(),
            self.num_tokens(),
        );
    }

    /// Add a document built from token sequences.
    pub fn add_sequences<S: AsRef<str>>(
        &mut self,
        sequences: Vec<TokenTree>,
        name: Option<S>,
        info: Option<CMHashMap<String, String>>,
    ) {
        self.add_document(Document::new(sequences, name, info));
    }

    /// Add a single-sequence document by whitespace-tokenizing `text`.
    pub fn add_text_document<S: AsRef<str>>(
        &mut self,
        text: &str,
        name: Option<S>,
        info: Option<CMHashMap<String, String>>,
    ) {
        self.add_document(Document::from_text(text, name, info));
    }

    /// The accumulated documents.
    pub fn documents(&self) -> &[Document<C>] {
        &self.documents
    }

    /// The corpus-wide type-frequency table.
    pub fn type_freq_map(&self) -> &TypeFreqMap<C> {
        &self.type_freq_map
    }

    /// The number of documents.
    pub fn num_documents(&self) -> usize {
        self.documents.len()
    }

    /// The number of distinct types in the corpus.
    pub fn num_types(&self) -> usize {
        self.type_freq_map.len()
    }

    /// The total number of tokens across all documents.
    pub fn num_tokens(&self) -> usize {
        self.documents.iter().map(Document::num_tokens).sum()
    }

    /// The total number of sequences across all documents.
    pub fn num_sequences(&self) -> usize {
        self.documents.iter().map(Document::num_sequences).sum()
    }

    /// Flatten the whole corpus into an ordered token list.
    pub fn flatten(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for document in &self.documents {
            out.extend(document.flatten());
        }
        out
    }

    /// Run the full batching pipeline over the corpus.
    ///
    /// Flattens the corpus, indexes it against `vocab`, and then either:
    /// * `window_size == 1`: chunks the index list into
    ///   `sequence_length + 1` windows and groups them into padded
    ///   batches (language-model mode);
    /// * otherwise: groups the generated (center, context) window pairs
    ///   into single-row batches of up to `batch_size` tokens, with an
    ///   empty `y_window_batches` (context-window mode).
    ///
    /// ## Arguments
    /// * `vocab` - The vocabulary to index against.
    /// * `plan` - The window/batch configuration.
    ///
    /// ## Returns
    /// The batched training data, or an error on misconfiguration.
    pub fn build_batched_sequences<T: IndexType>(
        &self,
        vocab: &IndexedVocab<T>,
        plan: &BatchPlan<T>,
    ) -> CMResult<BatchSet<T>> {
        let index_list = index_tokens(self.flatten(), vocab)?;
        batch_index_list(&index_list, plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_corpus() -> CorpusAggregator<u64> {
        let mut corpus = CorpusAggregator::new();
        corpus.add_text_document("the cat sat", Some("a"), None);
        corpus.add_text_document("the mat", Some("b"), None);
        corpus
    }

    #[test]
    fn test_aggregation() {
        let corpus = small_corpus();

        assert_eq!(corpus.num_documents(), 2);
        assert_eq!(corpus.num_sequences(), 2);
        assert_eq!(corpus.num_tokens(), 5);
        assert_eq!(corpus.num_types(), 4);

        assert_eq!(corpus.type_freq_map().get("the"), Some(&2));
        assert_eq!(corpus.type_freq_map().get("cat"), Some(&1));

        assert_eq!(corpus.flatten(), vec!["the", "cat", "sat", "the", "mat"]);
    }

    #[test]
    fn test_totals_rederived() {
        let mut corpus = small_corpus();
        let before = corpus.num_tokens();

        corpus.add_text_document("the the", Option::<&str>::None, None);

        assert_eq!(corpus.num_tokens(), before + 2);
        assert_eq!(corpus.type_freq_map().get("the"), Some(&4));
        // "the" is still one type.
        assert_eq!(corpus.num_types(), 4);
    }
}
