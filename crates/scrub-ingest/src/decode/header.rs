//! Header name normalisation shared by the decoders.

use std::collections::HashSet;

/// Name given to blank spreadsheet header cells.
pub const EMPTY_HEADER: &str = "__EMPTY";

/// Makes header names unique by suffixing repeats with `_1`, `_2`, ...
///
/// The first occurrence keeps its name. A generated name that collides with
/// a later literal header is skipped over.
pub fn make_unique(names: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(names.len());
    let mut unique = Vec::with_capacity(names.len());
    for name in names {
        let mut candidate = name.clone();
        let mut n = 0usize;
        while taken.contains(&candidate) {
            n += 1;
            candidate = format!("{name}_{n}");
        }
        taken.insert(candidate.clone());
        unique.push(candidate);
    }
    unique
}

/// Strips a UTF-8 byte order mark from the first header.
pub fn strip_bom(name: &str) -> &str {
    name.trim_start_matches('\u{feff}')
}
