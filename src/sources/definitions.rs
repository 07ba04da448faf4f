//! Word definitions shown after a game
//!
//! Entries use the dictionaryapi.dev response format: a JSON array of entries,
//! of which only the first is read.

use crate::core::PuzzleError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Definition text used when a word has no dictionary entry
pub const NO_DEFINITION: &str = "No definition found";

/// One part of speech with its first definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meaning {
    pub part_of_speech: String,
    pub definition: String,
}

/// Dictionary information for one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionEntry {
    pub word: String,
    pub audio_url: Option<String>,
    pub meanings: Vec<Meaning>,
}

impl DefinitionEntry {
    /// Entry standing in for a word the dictionary does not know
    #[must_use]
    pub fn placeholder(word: &str) -> Self {
        Self {
            word: word.to_string(),
            audio_url: None,
            meanings: vec![Meaning {
                part_of_speech: String::new(),
                definition: NO_DEFINITION.to_string(),
            }],
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.audio_url.is_none()
            && matches!(
                self.meanings.as_slice(),
                [m] if m.part_of_speech.is_empty() && m.definition == NO_DEFINITION
            )
    }
}

#[derive(Debug, Deserialize)]
struct ApiEntry {
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
    #[serde(default)]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
}

/// Parse a dictionary API response for `word`
///
/// The audio URL is the first non-empty `audio` among the phonetics. Each
/// meaning contributes its first definition; meanings without any are skipped.
///
/// # Errors
/// Returns `PuzzleError::DefinitionFetchFailed` for malformed JSON or an empty
/// entry array.
///
/// # Examples
/// ```
/// use wordswap::sources::parse_dictionary_entry;
///
/// let json = r#"[{"phonetics":[{"audio":""},{"audio":"cat.mp3"}],
///                 "meanings":[{"partOfSpeech":"noun",
///                              "definitions":[{"definition":"A small feline."}]}]}]"#;
/// let entry = parse_dictionary_entry("cat", json).unwrap();
/// assert_eq!(entry.audio_url.as_deref(), Some("cat.mp3"));
/// assert_eq!(entry.meanings[0].part_of_speech, "noun");
/// ```
pub fn parse_dictionary_entry(word: &str, json: &str) -> Result<DefinitionEntry, PuzzleError> {
    let entries: Vec<ApiEntry> = serde_json::from_str(json)
        .map_err(|e| PuzzleError::DefinitionFetchFailed(format!("{word}: {e}")))?;
    let entry = entries.into_iter().next().ok_or_else(|| {
        PuzzleError::DefinitionFetchFailed(format!("{word}: response holds no entries"))
    })?;

    let audio_url = entry
        .phonetics
        .into_iter()
        .filter_map(|p| p.audio)
        .find(|audio| !audio.is_empty());

    let meanings = entry
        .meanings
        .into_iter()
        .filter_map(|m| {
            let first = m.definitions.into_iter().next()?;
            Some(Meaning {
                part_of_speech: m.part_of_speech,
                definition: first.definition,
            })
        })
        .collect();

    Ok(DefinitionEntry {
        word: word.to_string(),
        audio_url,
        meanings,
    })
}

/// Looks up definitions one word at a time
pub trait DefinitionSource {
    /// Look up `word`; `Ok(None)` means the dictionary has no entry for it
    ///
    /// # Errors
    /// Returns `PuzzleError::DefinitionFetchFailed` when the lookup itself
    /// fails.
    fn lookup(&self, word: &str) -> Result<Option<DefinitionEntry>, PuzzleError>;
}

/// Look up every word, substituting a placeholder for unknown words
///
/// # Errors
/// Any lookup failure other than a miss fails the whole batch.
pub fn fetch_definitions<D: DefinitionSource + ?Sized, S: AsRef<str>>(
    source: &D,
    words: &[S],
) -> Result<Vec<DefinitionEntry>, PuzzleError> {
    words
        .iter()
        .map(|word| {
            let word = word.as_ref();
            Ok(source.lookup(word)?.unwrap_or_else(|| {
                warn!("no dictionary entry for '{word}'");
                DefinitionEntry::placeholder(word)
            }))
        })
        .collect()
}

/// Definitions read from `<dir>/<word>.json` files
#[derive(Debug, Clone)]
pub struct JsonFileDefinitions {
    dir: PathBuf,
}

impl JsonFileDefinitions {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DefinitionSource for JsonFileDefinitions {
    fn lookup(&self, word: &str) -> Result<Option<DefinitionEntry>, PuzzleError> {
        let path = self.dir.join(format!("{}.json", word.to_ascii_lowercase()));
        match fs::read_to_string(&path) {
            Ok(json) => parse_dictionary_entry(word, &json).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PuzzleError::DefinitionFetchFailed(format!(
                "{}: {e}",
                path.display()
            ))),
        }
    }
}
