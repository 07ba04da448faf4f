//! Word Swap - CLI
//!
//! Word-grid swap puzzle with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use wordswap::{
    commands::{
        DEFAULT_GENERATION_ATTEMPTS, define_words, generate_game, run_benchmark, run_simple,
    },
    config::GameConfig,
    logging::init_logger,
    output::{print_benchmark_result, print_definitions, print_generated},
    sources::{
        DefinitionSource, EMBEDDED_WORDS, JsonFileDefinitions, WordListSource, load_from_file,
        words_from_slice,
    },
};

#[derive(Parser)]
#[command(
    name = "wordswap",
    about = "Word-grid swap puzzle: unscramble interlocking words within a swap budget",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length: 3 to 7 (grid is 3x3 up to 7x7)
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Difficulty: easy (6 scrambling swaps), medium (8), hard (10)
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: String,

    /// Swaps the player may make
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 15,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    budget: u32,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Seed for reproducible puzzles
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory of `<word>.json` dictionary files shown after each game
    #[arg(long, global = true)]
    defs: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type coordinates to swap)
    Simple,

    /// Generate one puzzle and print it with its solution
    Generate,

    /// Benchmark puzzle generation
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Print definitions for words from a dictionary directory
    Define {
        /// Words to define
        #[arg(required = true)]
        words: Vec<String>,

        /// Directory holding `<word>.json` files
        #[arg(long)]
        dir: PathBuf,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Load the word list selected by the -w flag
fn load_words(mode: &str) -> Result<Vec<String>> {
    match mode {
        "embedded" => Ok(words_from_slice(EMBEDDED_WORDS)),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the screen, so it stays quiet unless RUST_LOG asks otherwise
    let default_level = match command {
        Commands::Play => LevelFilter::Off,
        _ => LevelFilter::Info,
    };
    init_logger(cli.verbose, default_level);

    let config = GameConfig::from_raw(cli.length, &cli.difficulty, cli.budget)?;
    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    match command {
        Commands::Play => {
            let words = load_words(&cli.words)?;
            run_play_command(config, &words, rng, cli.defs.as_deref())
        }
        Commands::Simple => {
            let words = load_words(&cli.words)?;
            let mut source = WordListSource::new(&words, StdRng::seed_from_u64(rng.random()));
            let definitions = cli.defs.as_deref().map(JsonFileDefinitions::new);
            run_simple(
                &config,
                &mut source,
                &mut rng,
                definitions.as_ref().map(|d| d as &dyn DefinitionSource),
            )
        }
        Commands::Generate => {
            let words = load_words(&cli.words)?;
            let mut source = WordListSource::new(&words, StdRng::seed_from_u64(rng.random()));
            let game =
                generate_game(&config, &mut source, &mut rng, DEFAULT_GENERATION_ATTEMPTS)?;
            print_generated(&game);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let words = load_words(&cli.words)?;
            println!(
                "Generating {count} puzzles ({0}x{0}, {1})...",
                config.word_length, config.difficulty
            );
            let result = run_benchmark(&config, &words, count, rng.random(), true);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Define { words, dir, json } => run_define_command(&words, &dir, json),
    }
}

fn run_play_command(
    config: GameConfig,
    words: &[String],
    mut rng: StdRng,
    defs: Option<&Path>,
) -> Result<()> {
    use wordswap::interactive::{App, run_tui};

    let source = WordListSource::new(words, StdRng::seed_from_u64(rng.random()));
    let definitions =
        defs.map(|dir| Box::new(JsonFileDefinitions::new(dir)) as Box<dyn DefinitionSource>);
    let app = App::new(config, Box::new(source), rng, definitions);
    run_tui(app)
}

fn run_define_command(words: &[String], dir: &Path, json: bool) -> Result<()> {
    let entries = define_words(words, dir)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_definitions(&entries);
    }
    Ok(())
}
