//! The language-service seam and the bundled in-memory host.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use sigswap_common::TextSpan;
use sigswap_syntax::SourceFile;

use crate::protocol::ReferenceEntry;

/// What the engine needs from its host: parsed files and reference search.
///
/// Reference search may over-approximate freely. Downstream classification
/// and call matching prune anything that is not actually a use of the
/// queried name, so extra entries cost time, not correctness.
pub trait LanguageService {
    fn source_file(&self, file_name: &str) -> Option<&SourceFile>;

    /// References to whatever identifier sits at `position`, grouped by
    /// file. Spans within a file need not be sorted.
    fn references_at(&self, file_name: &str, position: u32) -> Vec<ReferenceEntry>;
}

/// In-memory project: a set of parsed files keyed by name, in insertion
/// order so results are deterministic.
pub struct Project {
    files: IndexMap<String, SourceFile, FxBuildHasher>,
}

impl Project {
    pub fn new() -> Project {
        Project { files: IndexMap::default() }
    }

    /// Parses and stores a file, replacing any previous content under the
    /// same name.
    pub fn add_file(&mut self, file_name: impl Into<String>, text: impl Into<String>) -> &SourceFile {
        let file_name = file_name.into();
        let source = SourceFile::parse(file_name.clone(), text.into());
        self.files.insert(file_name.clone(), source);
        &self.files[&file_name]
    }

    pub fn remove_file(&mut self, file_name: &str) -> bool {
        self.files.shift_remove(file_name).is_some()
    }

    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl LanguageService for Project {
    fn source_file(&self, file_name: &str) -> Option<&SourceFile> {
        self.files.get(file_name)
    }

    /// Lexical search: every identifier spelled like the one under the
    /// cursor, across all files. Property names and unrelated locals with
    /// the same spelling are included; the resolver drops them.
    fn references_at(&self, file_name: &str, position: u32) -> Vec<ReferenceEntry> {
        let Some(source) = self.files.get(file_name) else {
            return Vec::new();
        };
        let Some(ident) = source.identifier_at(position) else {
            return Vec::new();
        };
        let Some(needle) = source.arena().identifier_text(ident) else {
            return Vec::new();
        };
        if needle.is_empty() {
            return Vec::new();
        }
        let needle = needle.to_string();

        let mut references = Vec::new();
        for file in self.files.values() {
            let mut spans: Vec<TextSpan> = file
                .identifiers_named(&needle)
                .into_iter()
                .map(|idx| {
                    let (pos, end) = file.arena().span(idx);
                    TextSpan::from_bounds(pos, end)
                })
                .collect();
            spans.sort_by_key(|span| span.start);
            spans.dedup();
            references.extend(spans.into_iter().map(|text_span| ReferenceEntry {
                file_name: file.file_name().to_string(),
                text_span,
            }));
        }
        references
    }
}

#[cfg(test)]
#[path = "tests/project_tests.rs"]
mod project_tests;
