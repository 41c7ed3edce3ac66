//! End-to-end run: load the dictionary, build the trie, report, tear down.

use std::io::Write;

use tracing::{info, instrument};

use crate::config::LexiconConfig;
use crate::data_structures::AlphaTrie;
use crate::error::LexiconResult;
use crate::loader::{load_into, DictionaryFile, LoadSummary, WordSource};
use crate::report::QueryReport;

/// What a session did.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// Dictionary loading counts
    pub load: LoadSummary,

    /// Query results
    pub report: QueryReport,

    /// Nodes released when the trie was destroyed, root included
    pub nodes_released: usize,
}

/// Runs a session against the dictionary file named in `config`.
///
/// `queries` overrides `config.query.words` when given.
pub fn run_session<W: Write>(
    config: &LexiconConfig,
    queries: Option<&[String]>,
    out: &mut W,
) -> LexiconResult<SessionOutcome> {
    let source = DictionaryFile::new(&config.dictionary.path, config.dictionary.loader_options());
    run_session_with_source(config, &source, queries, out)
}

/// Runs a session against any word source.
#[instrument(skip_all, fields(source = %source.describe()))]
pub fn run_session_with_source<W: Write, S: WordSource + ?Sized>(
    config: &LexiconConfig,
    source: &S,
    queries: Option<&[String]>,
    out: &mut W,
) -> LexiconResult<SessionOutcome> {
    let words = source.read_words()?;
    info!(count = words.len(), "Word list read");

    if config.dictionary.echo_words {
        for word in &words {
            writeln!(out, "{word}")?;
        }
    }

    let mut trie = AlphaTrie::new();
    let load = load_into(&mut trie, &words, config.dictionary.on_invalid)?;

    let queries = queries.unwrap_or(&config.query.words);
    let report = QueryReport::build(&trie, queries, config.query.on_invalid)?;
    report.render(out, config.query.format)?;

    let nodes_released = trie.destroy();
    info!(nodes_released, "Trie destroyed");

    Ok(SessionOutcome {
        load,
        report,
        nodes_released,
    })
}
