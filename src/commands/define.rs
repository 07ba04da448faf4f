//! Define command

use crate::core::PuzzleError;
use crate::sources::{DefinitionEntry, JsonFileDefinitions, fetch_definitions};
use log::info;
use std::path::Path;

/// Look up `words` in a directory of dictionary JSON files
///
/// # Errors
/// Returns `PuzzleError::DefinitionFetchFailed` if any file exists but cannot
/// be read or parsed.
pub fn define_words<S: AsRef<str>>(
    words: &[S],
    dir: &Path,
) -> Result<Vec<DefinitionEntry>, PuzzleError> {
    let source = JsonFileDefinitions::new(dir);
    info!("looking up {} words in {}", words.len(), source.dir().display());
    fetch_definitions(&source, words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defines_known_and_unknown_words() {
        let dir = std::env::temp_dir().join(format!("wordswap-define-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("toes.json"),
            r#"[{"meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"Digits of the foot."}]}]}]"#,
        )
        .unwrap();

        let entries = define_words(&["toes", "cute"], &dir).unwrap();
        assert_eq!(entries[0].meanings[0].definition, "Digits of the foot.");
        assert!(entries[1].is_placeholder());

        fs::remove_dir_all(&dir).unwrap();
    }
}
