use crate::catalog::model::*;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Regex object matching one row of the `leetcode list` table as the CLI prints it.
///
/// The three marker columns (favorite, lock, state) are separated by exactly one space, so a
/// blank marker is a space character.
pub static LISTING_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(.)\s(.{1,2})\s(.)\s\[\s*(\d+)\s*\]\s*(.*)\s*(Easy|Medium|Hard)\s*\((\s*\d+\.\d+ %)\)",
    )
    .unwrap()
});

/// Regex object matching a row whose marker columns are all filled and padded with runs of
/// whitespace, e.g. `  v  X  √  [ 42  ]  Two Sum  Easy  (51.2 %)`.
pub static PADDED_LISTING_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(\S)\s+(\S{1,2})\s+(\S)\s+\[\s*(\d+)\s*\]\s*(.*)\s*(Easy|Medium|Hard)\s*\((\s*\d+\.\d+ %)\)",
    )
    .unwrap()
});

/// Build the problem catalog from the raw output of `leetcode list`.
///
/// Lines that do not look like a problem row are skipped. The CLI prints the most recent
/// problems first, so the result is the reverse of the line order.
pub fn parse_catalog(
    raw: &str,
    companies: &MetadataTable,
    tags: &MetadataTable,
) -> Vec<ProblemRecord> {
    let mut problems: Vec<ProblemRecord> = raw
        .split('\n')
        .filter_map(|line| parse_line(line, companies, tags))
        .collect();

    problems.reverse();
    problems
}

/// Parse a single row of the listing. Returns `None` for headers, separators and blank lines.
pub fn parse_line(
    line: &str,
    companies: &MetadataTable,
    tags: &MetadataTable,
) -> Option<ProblemRecord> {
    let captures = LISTING_LINE
        .captures(line)
        .or_else(|| PADDED_LISTING_LINE.captures(line))?;

    let id = field(&captures, 4).to_string();
    let difficulty = match Difficulty::from_label(field(&captures, 6)) {
        Some(difficulty) => difficulty,
        None => {
            tracing::debug!("unexpected difficulty in listing line: {:?}", line);
            return None;
        }
    };

    Some(ProblemRecord {
        is_favorite: !field(&captures, 1).is_empty(),
        locked: !field(&captures, 2).is_empty(),
        state: ProblemState::from_marker(field(&captures, 3)),
        name: field(&captures, 5).to_string(),
        difficulty,
        pass_rate: field(&captures, 7).to_string(),
        companies: lookup(companies, &id),
        tags: lookup(tags, &id),
        id,
    })
}

fn field<'t>(captures: &Captures<'t>, index: usize) -> &'t str {
    captures
        .get(index)
        .map(|m| m.as_str().trim())
        .unwrap_or_default()
}

fn lookup(table: &MetadataTable, id: &str) -> Vec<String> {
    match table.get(id) {
        Some(labels) if !labels.is_empty() => labels.clone(),
        _ => vec![String::from(UNKNOWN_LABEL)],
    }
}
