//! Import-directive scanner.
//!
//! Splits one document's text into content lines and import directives, in
//! original line order. The scanner is a fused iterator of tagged items:
//! after the first malformed directive it yields the error once and then
//! terminates. Restarting means scanning from scratch.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ScanError;

/// A line whose first token is the import keyword.
static KEYWORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^import\b").unwrap());

/// The only valid directive form: `import "TARGET"`, optionally followed by
/// `;` and/or a trailing `//` comment.
static DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^import\s+"([^"]+)"\s*;?\s*(?://.*)?$"#).unwrap());

/// One import directive as it appears in source: the raw, unresolved target
/// and the zero-based line it was declared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'t> {
    pub target: &'t str,
    pub line: usize,
}

/// One scanned line that contributes to the walk.
///
/// Empty lines contribute nothing and are never yielded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanItem<'t> {
    /// A non-directive, non-empty line, without its terminator. Emitters
    /// restore the terminator when writing the chunk out.
    Content(&'t str),
    /// An import directive. Contributes no content.
    Import(Directive<'t>),
}

/// Lazy scan over one document's text.
pub struct Scanner<'t> {
    path: &'t Path,
    lines: std::iter::Enumerate<std::str::Split<'t, char>>,
    done: bool,
}

impl<'t> Scanner<'t> {
    /// Scan `text`, which was fetched from `path`. The path is only used to
    /// label syntax errors.
    pub fn new(path: &'t Path, text: &'t str) -> Self {
        Self {
            path,
            lines: text.split('\n').enumerate(),
            done: false,
        }
    }
}

impl<'t> Iterator for Scanner<'t> {
    type Item = Result<ScanItem<'t>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for (index, line) in self.lines.by_ref() {
            if KEYWORD.is_match(line) {
                match DIRECTIVE.captures(line) {
                    Some(captures) => {
                        let target = captures.get(1).expect("directive capture").as_str();
                        return Some(Ok(ScanItem::Import(Directive {
                            target,
                            line: index,
                        })));
                    }
                    None => {
                        self.done = true;
                        return Some(Err(ScanError {
                            path: self.path.to_path_buf(),
                            line: index,
                            text: line.to_string(),
                        }));
                    }
                }
            }
            if !line.is_empty() {
                return Some(Ok(ScanItem::Content(line)));
            }
        }
        self.done = true;
        None
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Every import directive of the document, in declared order, without
/// materializing content.
pub fn imports<'t>(path: &'t Path, text: &'t str) -> Result<Vec<Directive<'t>>, ScanError> {
    let mut directives = Vec::new();
    for item in Scanner::new(path, text) {
        if let ScanItem::Import(directive) = item? {
            directives.push(directive);
        }
    }
    Ok(directives)
}

/// The document's content lines and import directives, each in declared
/// order.
pub fn partition<'t>(
    path: &'t Path,
    text: &'t str,
) -> Result<(Vec<&'t str>, Vec<Directive<'t>>), ScanError> {
    let mut content = Vec::new();
    let mut directives = Vec::new();
    for item in Scanner::new(path, text) {
        match item? {
            ScanItem::Content(line) => content.push(line),
            ScanItem::Import(directive) => directives.push(directive),
        }
    }
    Ok((content, directives))
}
