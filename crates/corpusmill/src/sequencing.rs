//! # Sequence Chunking and Batching
//!
//! Produces fixed-length overlapping index chunks for sequence-model
//! training, and groups chunks (or single tokens) into fixed-size,
//! padded batches suitable for fixed-shape numeric arrays.
//!
//! Batching has two modes with deliberately different tail handling:
//! the general mode pads a final partial batch with fabricated all-pad
//! rows, while the degenerate single-token mode silently drops an
//! incomplete trailing group. Both behaviors are observed contract and
//! are preserved exactly; see the module tests.

use crate::errors::CMResult;
use crate::types::IndexType;
use crate::windowing::{WindowConfig, WindowDirection, expand_windows};

/// Produce fixed-length overlapping index chunks.
///
/// With `chunk_length == 2`, each chunk is a single-element sequence
/// (the degenerate unigram case). Otherwise the index list is
/// left-padded with `chunk_length - 2` pad indices and a window of size
/// `chunk_length` slides across it with stride 1; every chunk's last
/// token is an original corpus token.
///
/// ## Arguments
/// * `index_list` - The full flat index list.
/// * `chunk_length` - The chunk window length.
/// * `pad_index` - The index used for left padding.
///
/// ## Returns
/// The chunk list, in corpus order.
pub fn chunk_indices<T: IndexType>(
    index_list: &[T],
    chunk_length: usize,
    pad_index: T,
) -> Vec<Vec<T>> {
    if chunk_length == 2 {
        return index_list.iter().map(|&index| vec![index]).collect();
    }

    let mut padded = vec![pad_index; chunk_length.saturating_sub(2)];
    padded.extend_from_slice(index_list);

    let mut chunks = Vec::new();
    let mut i = 0;
    while i + chunk_length <= padded.len() {
        chunks.push(padded[i..i + chunk_length].to_vec());
        i += 1;
    }
    chunks
}

/// Parallel batched training data.
///
/// `x_batches`, `y_batches`, and `y_window_batches` have equal batch
/// counts in general mode; in degenerate mode `y_window_batches`
/// duplicates `y_batches`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchSet<T: IndexType> {
    /// Input rows, per batch.
    pub x_batches: Vec<Vec<Vec<T>>>,

    /// Final-target rows, per batch.
    pub y_batches: Vec<Vec<Vec<T>>>,

    /// Shifted per-position target rows, per batch.
    pub y_window_batches: Vec<Vec<Vec<T>>>,
}

impl<T: IndexType> BatchSet<T> {
    /// The number of batches.
    pub fn num_batches(&self) -> usize {
        self.x_batches.len()
    }
}

/// Group sequences into fixed-size batches.
///
/// * Degenerate mode (`sequence_length == 1`): the input is treated as
///   a flat index stream of single-token rows; consecutive positions
///   form `(x = row[i], y = row[i+1], y_window = y)` triples, grouped
///   into batches of exactly `batch_size`. A trailing group smaller
///   than `batch_size` is silently discarded; no padding occurs.
/// * General mode: for each sequence, `x` is the sequence without its
///   last element, `y` is a singleton of the last element, and
///   `y_window` is the sequence without its first element. A final
///   partial batch is padded to exactly `batch_size` with fabricated
///   all-pad rows (a singleton pad for `y`).
///
/// Sequences must be non-empty in general mode.
///
/// ## Arguments
/// * `sequences` - The chunk/sequence list.
/// * `batch_size` - The number of rows per batch.
/// * `sequence_length` - The row length for `x`/`y_window`.
/// * `pad_index` - The index used for fabricated pad rows.
///
/// ## Returns
/// The parallel batch set.
pub fn batch_sequences<T: IndexType>(
    sequences: &[Vec<T>],
    batch_size: usize,
    sequence_length: usize,
    pad_index: T,
) -> BatchSet<T> {
    let mut batches = BatchSet::default();

    let mut current_x: Vec<Vec<T>> = Vec::new();
    let mut current_y: Vec<Vec<T>> = Vec::new();
    let mut current_y_window: Vec<Vec<T>> = Vec::new();

    if sequence_length == 1 {
        for i in 0..sequences.len().saturating_sub(1) {
            current_x.push(sequences[i].clone());
            current_y.push(sequences[i + 1].clone());

            if current_x.len() == batch_size {
                batches.x_batches.push(core::mem::take(&mut current_x));
                // y_window duplicates y in degenerate mode.
                batches.y_window_batches.push(current_y.clone());
                batches.y_batches.push(core::mem::take(&mut current_y));
            }
        }
        // A trailing partial group is dropped, not padded.
    } else {
        for sequence in sequences {
            let last = sequence.len() - 1;
            current_x.push(sequence[..last].to_vec());
            current_y.push(vec![sequence[last]]);
            current_y_window.push(sequence[1..].to_vec());

            if current_x.len() == batch_size {
                batches.x_batches.push(core::mem::take(&mut current_x));
                batches.y_batches.push(core::mem::take(&mut current_y));
                batches
                    .y_window_batches
                    .push(core::mem::take(&mut current_y_window));
            }
        }

        // Pad the last partial batch with fabricated all-pad rows.
        if !current_x.is_empty() {
            while current_x.len() < batch_size {
                current_x.push(vec![pad_index; sequence_length]);
                current_y.push(vec![pad_index]);
                current_y_window.push(vec![pad_index; sequence_length]);
            }
            batches.x_batches.push(current_x);
            batches.y_batches.push(current_y);
            batches.y_window_batches.push(current_y_window);
        }
    }

    batches
}

/// Configuration for the corpus batching pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan<T: IndexType> {
    /// The window size; `1` selects language-model chunking.
    pub window_size: usize,

    /// The window direction policy.
    pub window_direction: WindowDirection,

    /// The number of rows per batch.
    pub batch_size: usize,

    /// The training sequence length.
    pub sequence_length: usize,

    /// The index used for padding.
    pub pad_index: T,
}

impl<T: IndexType> BatchPlan<T> {
    /// Create a new plan with a zero pad index.
    pub fn new(
        window_size: usize,
        window_direction: WindowDirection,
        batch_size: usize,
        sequence_length: usize,
    ) -> Self {
        Self {
            window_size,
            window_direction,
            batch_size,
            sequence_length,
            pad_index: T::zero(),
        }
    }

    /// Sets the pad index.
    pub fn with_pad_index(
        self,
        pad_index: T,
    ) -> Self {
        Self { pad_index, ..self }
    }

    /// The window config for this plan.
    pub fn window_config(&self) -> WindowConfig<T> {
        WindowConfig::new(self.window_size, self.window_direction)
            .with_pad_index(self.pad_index)
    }
}

/// Expand, chunk, and batch an index list in one step.
///
/// Convenience wrapper over [`expand_windows`], [`chunk_indices`], and
/// [`batch_sequences`] for callers holding a bare index list.
pub fn batch_index_list<T: IndexType>(
    index_list: &[T],
    plan: &BatchPlan<T>,
) -> CMResult<BatchSet<T>> {
    if plan.window_size == 1 {
        let sequences = chunk_indices(index_list, plan.sequence_length + 1, plan.pad_index);
        Ok(batch_sequences(
            &sequences,
            plan.batch_size,
            plan.sequence_length,
            plan.pad_index,
        ))
    } else {
        let pairs = expand_windows(
            index_list,
            plan.window_size,
            plan.window_direction,
            plan.pad_index,
        )?;
        let to_batches = |list: &[T]| {
            list.chunks(plan.batch_size)
                .map(|chunk| vec![chunk.to_vec()])
                .collect::<Vec<_>>()
        };
        Ok(BatchSet {
            x_batches: to_batches(&pairs.centers),
            y_batches: to_batches(&pairs.contexts),
            y_window_batches: Vec::new(),
        })
    }
}
