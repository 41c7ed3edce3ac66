//! Query reporting.
//!
//! Runs a list of query words against the trie and renders the resulting
//! `word : count` pairs. The count is the trie's path depth, so it is
//! `len(word) + 1` for any word whose letters form a path, and 0 otherwise.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{InvalidWordPolicy, ReportFormat};
use crate::data_structures::AlphaTrie;
use crate::error::LexiconResult;

/// A single query result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryEntry {
    /// The query word
    pub word: String,

    /// Path depth reported by the trie
    pub count: usize,
}

/// Results for a list of query words, in query order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryReport {
    entries: Vec<QueryEntry>,
}

impl QueryReport {
    /// Looks up every query in `trie`.
    ///
    /// Queries the trie rejects are dropped from the report under
    /// [`InvalidWordPolicy::Skip`] and fail the whole report under
    /// [`InvalidWordPolicy::Abort`].
    pub fn build<S: AsRef<str>>(
        trie: &AlphaTrie,
        queries: &[S],
        policy: InvalidWordPolicy,
    ) -> LexiconResult<Self> {
        let mut entries = Vec::with_capacity(queries.len());

        for query in queries {
            let word = query.as_ref();
            match trie.path_depth_if_exists(word) {
                Ok(count) => {
                    debug!(word, count, "Query answered");
                    entries.push(QueryEntry {
                        word: word.to_string(),
                        count,
                    });
                }
                Err(e) if e.is_invalid_input() && policy == InvalidWordPolicy::Skip => {
                    warn!(word, error = %e, "Skipping invalid query word");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Self { entries })
    }

    /// The report entries.
    pub fn entries(&self) -> &[QueryEntry] {
        &self.entries
    }

    /// Counts only, in query order.
    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.count).collect()
    }

    /// Writes the report to `out`.
    pub fn render<W: Write>(&self, out: &mut W, format: ReportFormat) -> LexiconResult<()> {
        match format {
            ReportFormat::Text => {
                for entry in &self.entries {
                    writeln!(out, "\t{} : {}", entry.word, entry.count)?;
                }
            }
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
