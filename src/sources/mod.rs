//! Word and definition sources
//!
//! Collaborators the engine consumes: candidate words before a puzzle is
//! built and definitions once it has been played.

mod definitions;
mod embedded;
mod words;

pub use definitions::{
    DefinitionEntry, DefinitionSource, JsonFileDefinitions, Meaning, NO_DEFINITION,
    fetch_definitions, parse_dictionary_entry,
};
pub use embedded::{EMBEDDED_WORDS, EMBEDDED_WORDS_COUNT};
pub use words::{
    MAX_CANDIDATES, WordListSource, WordSource, load_from_file, words_from_slice,
};
