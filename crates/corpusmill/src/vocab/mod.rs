//! # Vocabulary
//!
//! This module provides the bounded, ordered vocabulary and its builder.
//!
//! ## Indexed Vocabulary
//!
//! An [`IndexedVocab`] is an ordered sequence of distinct tokens; each
//! token gets a stable 0-based index assigned strictly at insertion time.
//! The index map and the ordered list always agree: bijective, no gaps,
//! no duplicates.
//!
//! ## Building
//!
//! A [`VocabBuilder`] consumes a corpus-wide frequency table and builds
//! the vocabulary deterministically: include-list tokens first (in the
//! given order), then remaining tokens by descending frequency with
//! ascending lexical tie-break.

pub mod indexed_vocab;
pub mod vocab_builder;

#[doc(inline)]
pub use indexed_vocab::IndexedVocab;
#[doc(inline)]
pub use vocab_builder::{VocabBuild, VocabBuilder, resolve_unknown_token};
