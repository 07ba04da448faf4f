//! Candidate word sources
//!
//! The generator asks a [`WordSource`] for words of one length. The pool it
//! gets back is searched in order, so sources shuffle before handing it over.

use super::embedded::EMBEDDED_WORDS;
use crate::core::{PuzzleError, WordLength};
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Most candidates handed to the generator per request
pub const MAX_CANDIDATES: usize = 1000;

/// Supplies candidate words of a requested length
pub trait WordSource {
    /// Fetch a candidate pool of words with exactly `length` letters
    ///
    /// # Errors
    /// Returns `PuzzleError::CandidateFetchFailed` when the backing store
    /// cannot be read.
    fn fetch_candidates(&mut self, length: WordLength) -> Result<Vec<String>, PuzzleError>;
}

/// Lowercase a word, rejecting anything that is not purely ASCII letters
fn normalize(word: &str) -> Option<String> {
    let trimmed = word.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(trimmed.to_ascii_lowercase())
    } else {
        None
    }
}

/// Load words from a file, one per line
///
/// Blank lines and lines holding anything other than letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordswap::sources::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize).collect())
}

/// Normalize a slice of words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordswap::sources::words_from_slice;
///
/// let words = words_from_slice(&["Crane", "x-ray", "slate"]);
/// assert_eq!(words, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<String> {
    slice.iter().filter_map(|s| normalize(s.as_ref())).collect()
}

/// In-memory word list
///
/// Words are lowercased and deduplicated up front. Each fetch filters by
/// length, shuffles with the source's own RNG and caps the pool at
/// [`MAX_CANDIDATES`].
#[derive(Debug, Clone)]
pub struct WordListSource<R> {
    words: Vec<String>,
    rng: R,
}

impl<R: Rng> WordListSource<R> {
    #[must_use]
    pub fn new<S: AsRef<str>>(words: &[S], rng: R) -> Self {
        let mut seen = FxHashSet::default();
        let words = words_from_slice(words)
            .into_iter()
            .filter(|w| seen.insert(w.clone()))
            .collect();
        Self { words, rng }
    }

    /// Source backed by the word list compiled into the binary
    #[must_use]
    pub fn embedded(rng: R) -> Self {
        Self::new(EMBEDDED_WORDS, rng)
    }

    /// Source backed by a word file
    ///
    /// # Errors
    /// Returns `PuzzleError::CandidateFetchFailed` if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P, rng: R) -> Result<Self, PuzzleError> {
        let path = path.as_ref();
        let words = load_from_file(path).map_err(|e| {
            PuzzleError::CandidateFetchFailed(format!("{}: {e}", path.display()))
        })?;
        Ok(Self::new(&words, rng))
    }

    /// Number of distinct words held, across all lengths
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<R: Rng> WordSource for WordListSource<R> {
    fn fetch_candidates(&mut self, length: WordLength) -> Result<Vec<String>, PuzzleError> {
        let mut pool: Vec<String> = self
            .words
            .iter()
            .filter(|w| w.len() == length.get())
            .cloned()
            .collect();
        let available = pool.len();

        pool.shuffle(&mut self.rng);
        pool.truncate(MAX_CANDIDATES);

        debug!(
            "candidate pool for length {length}: {} of {available} words",
            pool.len()
        );
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn length(n: usize) -> WordLength {
        WordLength::new(n).unwrap()
    }

    #[test]
    fn words_from_slice_normalizes() {
        let words = words_from_slice(&[" Cart ", "TOES", "it's", "", "cute"]);
        assert_eq!(words, vec!["cart", "toes", "cute"]);
    }

    #[test]
    fn fetch_filters_by_length() {
        let words = ["cart", "toes", "cat", "house", "CUTE", "cute", "rues"];
        let mut source = WordListSource::new(&words, StdRng::seed_from_u64(1));
        assert_eq!(source.len(), 6);

        let mut pool = source.fetch_candidates(length(4)).unwrap();
        pool.sort();
        assert_eq!(pool, vec!["cart", "cute", "rues", "toes"]);
    }

    #[test]
    fn fetch_with_no_matches_is_empty() {
        let mut source = WordListSource::new(&["cat"], StdRng::seed_from_u64(1));
        assert!(source.fetch_candidates(length(7)).unwrap().is_empty());
    }

    #[test]
    fn pool_is_capped() {
        let letter = |n: usize| char::from(b'a' + u8::try_from(n % 26).unwrap());
        let words: Vec<String> = (0..1500)
            .map(|n| format!("{}{}{}a", letter(n), letter(n / 26), letter(n / 676)))
            .collect();

        let mut source = WordListSource::new(&words, StdRng::seed_from_u64(2));
        assert_eq!(source.len(), 1500);
        let pool = source.fetch_candidates(length(4)).unwrap();
        assert_eq!(pool.len(), MAX_CANDIDATES);
    }

    #[test]
    fn same_seed_same_order() {
        let words = ["cart", "toes", "cute", "rues", "care", "rise"];
        let mut a = WordListSource::new(&words, StdRng::seed_from_u64(9));
        let mut b = WordListSource::new(&words, StdRng::seed_from_u64(9));
        assert_eq!(
            a.fetch_candidates(length(4)).unwrap(),
            b.fetch_candidates(length(4)).unwrap()
        );
    }

    #[test]
    fn missing_file_is_fetch_failure() {
        let err = WordListSource::from_file(
            "/definitely/not/here.txt",
            StdRng::seed_from_u64(0),
        )
        .unwrap_err();
        assert!(matches!(err, PuzzleError::CandidateFetchFailed(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn embedded_list_covers_every_length() {
        let mut source = WordListSource::embedded(StdRng::seed_from_u64(3));
        for length in WordLength::all() {
            let pool = source.fetch_candidates(length).unwrap();
            assert!(pool.len() > 100, "only {} words of length {length}", pool.len());
            assert!(pool.iter().all(|w| w.len() == length.get()));
        }
    }
}
