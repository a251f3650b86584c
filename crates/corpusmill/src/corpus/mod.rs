//! # Corpus Accumulation
//!
//! This module provides per-document token statistics and their
//! corpus-wide aggregation.
//!
//! ## Documents
//!
//! A [`Document`] wraps one document's (possibly nested) token sequences,
//! plus a name and a metadata map; and exposes per-document type-frequency
//! counts and token/type/sequence totals.
//!
//! ## Aggregation
//!
//! A [`CorpusAggregator`] owns the document list and the running
//! corpus-wide frequency table; downstream vocabulary construction
//! consumes that table.

pub mod aggregator;
pub mod document;

#[doc(inline)]
pub use aggregator::CorpusAggregator;
#[doc(inline)]
pub use document::{Document, TokenTree, tokenize};
