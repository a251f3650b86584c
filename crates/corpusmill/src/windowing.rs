//! # Context Window Expansion
//!
//! Produces (center, context) index pairs from an index stream, for
//! skip-gram/CBOW style training.
//!
//! The three [`WindowDirection`] modes pad asymmetrically: `Both` and
//! `Forward` append `window_size` pad indices at the end only; `Backward`
//! prepends them at the start, and emits multiple centers sharing one
//! context token. These asymmetries are long-standing observed behavior
//! and are preserved exactly; see the module tests.

use crate::errors::{CMResult, CorpusmillError};
use crate::types::IndexType;

/// The direction policy for window expansion.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WindowDirection {
    /// Context on both sides of the center.
    #[default]
    Both,

    /// Context strictly after the center.
    Forward,

    /// Context strictly before the center.
    Backward,
}

/// Configuration for window expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig<T: IndexType> {
    /// The window size; must be a positive integer.
    pub size: usize,

    /// The direction policy.
    pub direction: WindowDirection,

    /// The index used for padding.
    pub pad_index: T,
}

impl<T: IndexType> WindowConfig<T> {
    /// Create a new window config with a zero pad index.
    pub fn new(
        size: usize,
        direction: WindowDirection,
    ) -> Self {
        Self {
            size,
            direction,
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
}

/// A set of (center, context) window pairs.
///
/// The two sequences are parallel and equal-length; ordering follows
/// generation order, not sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowPairs<T: IndexType> {
    /// The center indices.
    pub centers: Vec<T>,

    /// The context indices.
    pub contexts: Vec<T>,
}

impl<T: IndexType> WindowPairs<T> {
    /// The number of pairs.
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// Check if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Iterate over (center, context) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.centers
            .iter()
            .copied()
            .zip(self.contexts.iter().copied())
    }

    fn push(
        &mut self,
        center: T,
        context: T,
    ) {
        self.centers.push(center);
        self.contexts.push(context);
    }
}

/// Expand an index sequence into (center, context) pairs.
///
/// * `Both`: pad at the end only. For each position `i` and offset `j`
///   in `1..=window_size`, emit `(seq[i], seq[i-j])` when `i-j >= 0`,
///   and `(seq[i], padded[i+j])` when `i+j` is within the padded length.
/// * `Forward`: pad at the end. Emit `(seq[i], padded[i+j])` only when
///   `i + window_size` is within the padded length; the bound uses
///   `window_size`, not `j`.
/// * `Backward`: pad at the start. For each in-bounds position and
///   offset, emit `(padded[i+j-1], padded[i+window_size])`; multiple
///   centers share one context token.
///
/// ## Arguments
/// * `indices` - The index sequence.
/// * `window_size` - The window size; zero is a configuration error.
/// * `direction` - The direction policy.
/// * `pad_index` - The index used for padding.
///
/// ## Returns
/// The window pairs in generation order, or
/// [`CorpusmillError::ZeroWindowSize`].
pub fn expand_windows<T: IndexType>(
    indices: &[T],
    window_size: usize,
    direction: WindowDirection,
    pad_index: T,
) -> CMResult<WindowPairs<T>> {
    if window_size == 0 {
        return Err(CorpusmillError::ZeroWindowSize);
    }

    let padded: Vec<T> = match direction {
        WindowDirection::Backward => {
            let mut padded = vec![pad_index; window_size];
            padded.extend_from_slice(indices);
            padded
        }
        _ => {
            let mut padded = indices.to_vec();
            padded.extend(core::iter::repeat_n(pad_index, window_size));
            padded
        }
    };

    let mut pairs = WindowPairs::default();

    for i in 0..indices.len() {
        for j in 1..=window_size {
            match direction {
                WindowDirection::Both => {
                    if i >= j {
                        pairs.push(padded[i], padded[i - j]);
                    }
                    if i + j < padded.len() {
                        pairs.push(padded[i], padded[i + j]);
                    }
                }
                WindowDirection::Forward => {
                    if i + window_size < padded.len() {
                        pairs.push(padded[i], padded[i + j]);
                    }
                }
                WindowDirection::Backward => {
                    // One shared context token per window position.
                    pairs.push(padded[i + j - 1], padded[i + window_size]);
                }
            }
        }
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    type T = u32;

    const PAD: T = 0;

    #[test]
    fn test_direction_parsing() {
        assert_eq!("both".parse::<WindowDirection>(), Ok(WindowDirection::Both));
        assert_eq!(
            "Forward".parse::<WindowDirection>(),
            Ok(WindowDirection::Forward)
        );
        assert_eq!(
            "backward".parse::<WindowDirection>(),
            Ok(WindowDirection::Backward)
        );
        assert!("sideways".parse::<WindowDirection>().is_err());

        assert_eq!(WindowDirection::Both.to_string(), "both");
    }

    #[test]
    fn test_zero_window_size() {
        let result = expand_windows::<T>(&[1, 2, 3], 0, WindowDirection::Both, PAD);
        assert!(matches!(result, Err(CorpusmillError::ZeroWindowSize)));
    }

    #[test]
    fn test_both_mode() {
        // [a=1, b=2, c=3], window_size=1:
        // (a,b), (b,a), (b,c), (c,b), plus the end-padding pair (c,pad).
        let pairs = expand_windows::<T>(&[1, 2, 3], 1, WindowDirection::Both, PAD).unwrap();

        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs.pairs().collect::<Vec<_>>(), vec![
            (1, 2),
            (2, 1),
            (2, 3),
            (3, 2),
            (3, PAD),
        ]);
    }

    #[test]
    fn test_both_mode_wide() {
        let pairs = expand_windows::<T>(&[1, 2, 3], 2, WindowDirection::Both, PAD).unwrap();

        assert_eq!(pairs.pairs().collect::<Vec<_>>(), vec![
            (1, 2),
            (1, 3),
            (2, 1),
            (2, 3),
            (2, PAD),
            (3, 2),
            (3, PAD),
            (3, 1),
            (3, PAD),
        ]);
    }

    #[test]
    fn test_forward_mode() {
        let pairs = expand_windows::<T>(&[1, 2, 3], 1, WindowDirection::Forward, PAD).unwrap();
        assert_eq!(pairs.pairs().collect::<Vec<_>>(), vec![
            (1, 2),
            (2, 3),
            (3, PAD),
        ]);

        let pairs = expand_windows::<T>(&[1, 2, 3], 2, WindowDirection::Forward, PAD).unwrap();
        assert_eq!(pairs.pairs().collect::<Vec<_>>(), vec![
            (1, 2),
            (1, 3),
            (2, 3),
            (2, PAD),
            (3, PAD),
            (3, PAD),
        ]);
    }

    #[test]
    fn test_backward_mode() {
        // Start-padded; multiple centers share one context token.
        let pairs = expand_windows::<T>(&[1, 2, 3], 1, WindowDirection::Backward, PAD).unwrap();
        assert_eq!(pairs.pairs().collect::<Vec<_>>(), vec![
            (PAD, 1),
            (1, 2),
            (2, 3),
        ]);

        let pairs = expand_windows::<T>(&[1, 2, 3], 2, WindowDirection::Backward, PAD).unwrap();
        assert_eq!(pairs.pairs().collect::<Vec<_>>(), vec![
            (PAD, 1),
            (PAD, 1),
            (PAD, 2),
            (1, 2),
            (1, 3),
            (2, 3),
        ]);
    }

    #[test]
    fn test_generation_order_parallel_lengths() {
        for direction in [
            WindowDirection::Both,
            WindowDirection::Forward,
            WindowDirection::Backward,
        ] {
            let pairs = expand_windows::<T>(&[5, 6, 7, 8], 2, direction, PAD).unwrap();
            assert_eq!(pairs.centers.len(), pairs.contexts.len());
            assert!(!pairs.is_empty());
        }
    }

    #[test]
    fn test_empty_input() {
        let pairs = expand_windows::<T>(&[], 2, WindowDirection::Both, PAD).unwrap();
        assert!(pairs.is_empty());
    }
}
