//! Word list loading.
//!
//! This module reads a dictionary (one word per line) into an ordered list
//! and feeds that list to the trie. Everything that can go wrong with files
//! is reported as a [`LoaderError`]; the trie only ever sees in-memory words.

use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::InvalidWordPolicy;
use crate::data_structures::AlphaTrie;
use crate::error::LexiconResult;
pub use crate::error::loader::LoaderError;

/// Result type for loader operations.
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Initial capacity of the word buffer; it grows as needed.
const INITIAL_CAPACITY: usize = 256;

/// Default cap on the length of a dictionary line, in characters.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 256;

/// Line handling options for [`parse_words`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Drop empty lines instead of returning them as words
    pub skip_blank_lines: bool,

    /// Keep only the first occurrence of each word
    pub deduplicate: bool,

    /// Maximum number of words returned before failing with `ResourceExhausted`
    pub max_words: usize,

    /// Longest line accepted, in characters, before failing with `WordTooLong`
    pub max_word_length: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
            deduplicate: false,
            max_words: 1_000_000,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

/// A source of words for the trie.
#[cfg_attr(test, mockall::automock)]
pub trait WordSource {
    /// Reads every word, in source order.
    fn read_words(&self) -> LoaderResult<Vec<String>>;

    /// Human-readable description of the source, used in logs.
    fn describe(&self) -> String;
}

/// A word list stored in a file.
#[derive(Debug, Clone)]
pub struct DictionaryFile {
    path: PathBuf,
    options: LoaderOptions,
}

impl DictionaryFile {
    /// Creates a source reading `path` with the given options.
    pub fn new<P: AsRef<Path>>(path: P, options: LoaderOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    /// Path of the word list.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for DictionaryFile {
    fn read_words(&self) -> LoaderResult<Vec<String>> {
        let file = fs::File::open(&self.path).map_err(|source| LoaderError::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;
        parse_words(BufReader::new(file), &self.options)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Splits `reader` into words, one per line.
///
/// Trailing `\n` and `\r\n` are stripped. No other normalization happens:
/// a line with uppercase letters or spaces is returned as is and left for the
/// trie to reject. Line length is a loader limit only; the trie itself takes
/// words of any length.
pub fn parse_words<R: BufRead>(reader: R, options: &LoaderOptions) -> LoaderResult<Vec<String>> {
    let mut words = Vec::with_capacity(INITIAL_CAPACITY.min(options.max_words));
    let mut seen = HashSet::new();

    for (index, line) in reader.lines().enumerate() {
        let mut line = line.map_err(|source| LoaderError::ReadFailed {
            line: index + 1,
            source,
        })?;
        if line.ends_with('\r') {
            line.pop();
        }

        if line.is_empty() && options.skip_blank_lines {
            continue;
        }
        if options.deduplicate && !seen.insert(line.clone()) {
            continue;
        }

        let length = line.chars().count();
        if length > options.max_word_length {
            return Err(LoaderError::WordTooLong {
                line: index + 1,
                length,
                max_length: options.max_word_length,
            });
        }

        if words.len() == options.max_words {
            return Err(LoaderError::ResourceExhausted {
                max_words: options.max_words,
            });
        }
        words.push(line);
    }

    Ok(words)
}

/// Outcome of feeding a word list to the trie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Words handed to the trie
    pub read: usize,

    /// Words that were new to the trie
    pub inserted: usize,

    /// Words already present as complete words
    pub duplicates: usize,

    /// Words rejected by the trie and skipped
    pub skipped: usize,
}

/// Inserts `words` into `trie` in order.
///
/// Under [`InvalidWordPolicy::Skip`] rejected words are logged and counted;
/// under [`InvalidWordPolicy::Abort`] the first rejection is returned. Errors
/// that are not about the word itself (a destroyed trie) always abort.
pub fn load_into(
    trie: &mut AlphaTrie,
    words: &[String],
    policy: InvalidWordPolicy,
) -> LexiconResult<LoadSummary> {
    let mut summary = LoadSummary::default();

    for word in words {
        summary.read += 1;
        match trie.insert(word) {
            Ok(true) => summary.inserted += 1,
            Ok(false) => summary.duplicates += 1,
            Err(e) if e.is_invalid_input() && policy == InvalidWordPolicy::Skip => {
                warn!(word = %word, error = %e, "Skipping invalid dictionary word");
                summary.skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    debug!(nodes = trie.node_count(), "Trie populated");
    info!(
        read = summary.read,
        inserted = summary.inserted,
        duplicates = summary.duplicates,
        skipped = summary.skipped,
        "Dictionary loaded"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexiconError;
    use std::io::Cursor;
    use test_case::test_case;

    fn parse(input: &str, options: &LoaderOptions) -> Vec<String> {
        parse_words(Cursor::new(input), options).unwrap()
    }

    #[test]
    fn test_parse_strips_line_endings() {
        let words = parse("note\r\nno\nucf", &LoaderOptions::default());
        assert_eq!(words, vec!["note", "no", "ucf"]);
    }

    #[test_case(true, &["a", "b"] ; "blank lines skipped")]
    #[test_case(false, &["a", "", "b"] ; "blank lines kept")]
    fn test_parse_blank_lines(skip_blank_lines: bool, expected: &[&str]) {
        let options = LoaderOptions {
            skip_blank_lines,
            ..Default::default()
        };
        assert_eq!(parse("a\n\nb\n", &options), expected);
    }

    #[test]
    fn test_parse_deduplicate() {
        let options = LoaderOptions {
            deduplicate: true,
            ..Default::default()
        };
        assert_eq!(parse("no\nnote\nno\n", &options), vec!["no", "note"]);
        assert_eq!(
            parse("no\nnote\nno\n", &LoaderOptions::default()),
            vec!["no", "note", "no"]
        );
    }

    #[test]
    fn test_parse_max_words() {
        let options = LoaderOptions {
            max_words: 2,
            ..Default::default()
        };
        assert_eq!(parse("a\nb\n", &options).len(), 2);

        let err = parse_words(Cursor::new("a\nb\nc\n"), &options).unwrap_err();
        assert!(matches!(err, LoaderError::ResourceExhausted { max_words: 2 }));
    }

    #[test]
    fn test_parse_max_word_length() {
        let options = LoaderOptions {
            max_word_length: 4,
            ..Default::default()
        };
        assert_eq!(parse("note\nno\n", &options), vec!["note", "no"]);

        let err = parse_words(Cursor::new("no\nnotes\n"), &options).unwrap_err();
        assert!(matches!(
            err,
            LoaderError::WordTooLong {
                line: 2,
                length: 5,
                max_length: 4
            }
        ));
    }

    #[test]
    fn test_parse_default_length_cap() {
        let at_cap = "a".repeat(DEFAULT_MAX_WORD_LENGTH);
        let words = parse(&format!("{at_cap}\n"), &LoaderOptions::default());
        assert_eq!(words, vec![at_cap]);

        let over = "a".repeat(DEFAULT_MAX_WORD_LENGTH + 1);
        let err = parse_words(Cursor::new(over), &LoaderOptions::default()).unwrap_err();
        assert!(matches!(err, LoaderError::WordTooLong { line: 1, .. }));
    }

    #[test]
    fn test_load_into_accepts_words_past_line_cap() {
        let mut trie = AlphaTrie::new();
        let long = "z".repeat(DEFAULT_MAX_WORD_LENGTH * 2);
        let summary = load_into(&mut trie, &[long.clone()], InvalidWordPolicy::Abort).unwrap();
        assert_eq!(summary.inserted, 1);
        assert_eq!(trie.path_depth_if_exists(&long).unwrap(), long.len() + 1);
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let bytes: &[u8] = b"ok\n\xff\xfe\n";
        let err = parse_words(Cursor::new(bytes), &LoaderOptions::default()).unwrap_err();
        assert!(matches!(err, LoaderError::ReadFailed { line: 2, .. }));
    }

    #[test]
    fn test_missing_file_is_source_unavailable() {
        let source = DictionaryFile::new("/definitely/not/here.txt", LoaderOptions::default());
        assert!(matches!(
            source.read_words(),
            Err(LoaderError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_load_into_counts() {
        let mut trie = AlphaTrie::new();
        let words: Vec<String> = ["hello", "help", "hello", "Nope", "hell"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        let summary = load_into(&mut trie, &words, InvalidWordPolicy::Skip).unwrap();
        assert_eq!(
            summary,
            LoadSummary {
                read: 5,
                inserted: 3,
                duplicates: 1,
                skipped: 1,
            }
        );
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_load_into_abort() {
        let mut trie = AlphaTrie::new();
        let words: Vec<String> = ["hello", "wor ld", "help"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        let err = load_into(&mut trie, &words, InvalidWordPolicy::Abort).unwrap_err();
        assert!(matches!(err, LexiconError::Trie(ref e) if e.is_invalid_input()));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_load_into_destroyed_trie_aborts_even_when_skipping() {
        let mut trie = AlphaTrie::new();
        trie.destroy();

        let words = vec!["hello".to_string()];
        assert!(load_into(&mut trie, &words, InvalidWordPolicy::Skip).is_err());
    }

    #[test]
    fn test_mock_source() {
        let mut source = MockWordSource::new();
        source
            .expect_read_words()
            .times(1)
            .returning(|| Ok(vec!["corg".to_string()]));

        let words = source.read_words().unwrap();
        let mut trie = AlphaTrie::new();
        load_into(&mut trie, &words, InvalidWordPolicy::Abort).unwrap();
        assert_eq!(trie.path_depth_if_exists("corg").unwrap(), 5);
    }
}
