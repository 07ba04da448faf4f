//! Benchmark command
//!
//! Generates many puzzles in parallel and reports how generation behaves for
//! one configuration and word list.

use crate::config::GameConfig;
use crate::generator::PuzzleGenerator;
use crate::sources::MAX_CANDIDATES;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub generated: usize,
    /// Runs whose candidate pool held no fitting combination
    pub exhausted: usize,
    pub average_unresolved: f64,
    pub average_scramble_swaps: f64,
    /// Puzzles that got fewer scrambling swaps than the difficulty asks for
    pub short_scrambles: usize,
    /// Unresolved cell count -> number of puzzles
    pub unresolved_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_puzzles == 0 {
            0.0
        } else {
            self.generated as f64 / self.total_puzzles as f64
        }
    }
}

struct Sample {
    unresolved: usize,
    scramble_swaps: u32,
}

/// Generate `count` puzzles from `words`
///
/// Run `i` draws its candidate pool and scramble from a generator seeded with
/// `seed + i`, so a run is reproducible regardless of thread scheduling.
#[must_use]
pub fn run_benchmark(
    config: &GameConfig,
    words: &[String],
    count: usize,
    seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let generator = PuzzleGenerator::new(*config);
    let length = config.word_length.get();
    let pool: Vec<&str> = words
        .iter()
        .map(String::as_str)
        .filter(|w| w.len() == length)
        .collect();

    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{}x{} {}", length, length, config.difficulty));

    let start = Instant::now();
    let samples: Vec<Option<Sample>> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let mut candidates = pool.clone();
            candidates.shuffle(&mut rng);
            candidates.truncate(MAX_CANDIDATES);

            let sample = generator
                .generate(&candidates, &mut rng)
                .ok()
                .map(|puzzle| Sample {
                    unresolved: puzzle.unresolved.len(),
                    scramble_swaps: puzzle.scramble_swaps,
                });
            pb.inc(1);
            sample
        })
        .collect();
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let generated: Vec<&Sample> = samples.iter().flatten().collect();
    let mut unresolved_distribution = BTreeMap::new();
    for sample in &generated {
        *unresolved_distribution.entry(sample.unresolved).or_insert(0) += 1;
    }

    let average = |total: usize| {
        if generated.is_empty() {
            0.0
        } else {
            total as f64 / generated.len() as f64
        }
    };

    BenchmarkResult {
        total_puzzles: count,
        generated: generated.len(),
        exhausted: count - generated.len(),
        average_unresolved: average(generated.iter().map(|s| s.unresolved).sum()),
        average_scramble_swaps: average(
            generated.iter().map(|s| s.scramble_swaps as usize).sum(),
        ),
        short_scrambles: generated
            .iter()
            .filter(|s| s.scramble_swaps < config.scramble_swaps())
            .count(),
        unresolved_distribution,
        duration,
        puzzles_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
