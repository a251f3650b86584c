//! # `corpusmill` Corpus Preparation Suite
//!
//! `corpusmill` prepares tokenized text for neural sequence-model training.
//!
//! The pipeline, leaf-first:
//! * [`corpus`] to accumulate per-document token statistics into corpus-wide counts.
//! * [`vocab`] to build a bounded, deterministically ordered vocabulary.
//! * [`indexing`] to map token streams to vocabulary indices, with
//!   out-of-vocabulary fallback.
//! * [`windowing`] to produce (center, context) pairs for skip-gram/CBOW
//!   style training.
//! * [`sequencing`] to produce fixed-length index chunks and fixed-size,
//!   padded batches for language-model style training.
//! * [`io`] to save/load corpus state and export plain-text/CSV views.
//!
//! Everything is single-threaded, synchronous, and materialized in memory;
//! every operation either completes deterministically or fails immediately
//! with a [`errors::CorpusmillError`].
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a
//! performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::CMHash{*}`` type alias machinery.
//!
//! ## Pipeline Example
//!
//! ```rust
//! use corpusmill::corpus::CorpusAggregator;
//! use corpusmill::vocab::VocabBuilder;
//! use corpusmill::indexing::index_tokens;
//! use corpusmill::sequencing::{chunk_indices, batch_sequences};
//!
//! type T = u32;
//!
//! let mut corpus: CorpusAggregator = CorpusAggregator::new();
//! corpus.add_text_document("the cat sat on the mat", Some("doc0"), None);
//!
//! let build = VocabBuilder::default()
//!     .build::<T, u64>(corpus.type_freq_map())
//!     .unwrap();
//! assert!(build.missing_tokens.is_empty());
//!
//! let indices: Vec<T> = index_tokens(corpus.flatten(), &build.vocab).unwrap();
//! let chunks = chunk_indices(&indices, 3, 0);
//! let batches = batch_sequences(&chunks, 2, 2, 0);
//! assert_eq!(batches.x_batches.len(), batches.y_batches.len());
//! ```
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod errors;
pub mod indexing;
pub mod io;
pub mod sequencing;
pub mod types;
pub mod vocab;
pub mod windowing;
