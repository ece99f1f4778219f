//! Source list expansion.
//!
//! Entries of `sources` may be glob patterns relative to the project
//! directory: `*` and `?` match inside one path segment, `**` matches any
//! number of segments. Entries without wildcards pass through untouched,
//! whether or not the file exists; the compiler reports those.

use colored::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn is_pattern(entry: &str) -> bool {
    entry.contains(['*', '?'])
}

/// Replace every pattern in `entries` with the files it matches, sorted.
/// A file already listed is not added twice.
pub fn expand_sources(entries: &[String], project_dir: &Path) -> Vec<String> {
    let mut expanded: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        if !is_pattern(entry) {
            expanded.push(entry.clone());
            continue;
        }

        let matches = expand_pattern(entry, project_dir);
        if matches.is_empty() {
            println!("{} Pattern '{}' matched no files", "!".yellow(), entry);
        }
        for path in matches {
            if !expanded.contains(&path) {
                expanded.push(path);
            }
        }
    }
    expanded
}

fn expand_pattern(pattern: &str, project_dir: &Path) -> Vec<String> {
    let segments: Vec<&str> = pattern
        .split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();
    let fixed = segments
        .iter()
        .position(|s| is_pattern(s))
        .unwrap_or(segments.len());
    let (prefix, rest) = segments.split_at(fixed);

    let mut prefix = prefix.join("/");
    if pattern.starts_with('/') {
        prefix.insert(0, '/');
    }
    let base: PathBuf = project_dir.join(&prefix);

    let mut walker = WalkDir::new(&base).min_depth(1);
    if !rest.contains(&"**") {
        walker = walker.max_depth(rest.len());
    }

    let mut matches: Vec<String> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let rel = e.path().strip_prefix(&base).ok()?;
            let parts: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect();
            let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
            if !match_segments(rest, &parts) {
                return None;
            }
            let rel = parts.join("/");
            Some(if prefix.is_empty() {
                rel
            } else {
                format!("{}/{}", prefix.trim_end_matches('/'), rel)
            })
        })
        .collect();
    matches.sort();
    matches
}

fn match_segments(pattern: &[&str], path: &[&str]) -> bool {
    match pattern.split_first() {
        None => path.is_empty(),
        Some((&"**", rest)) => (0..=path.len()).any(|i| match_segments(rest, &path[i..])),
        Some((seg, rest)) => match path.split_first() {
            Some((name, tail)) => match_segment(seg, name) && match_segments(rest, tail),
            None => false,
        },
    }
}

/// Wildcard match of one path segment.
fn match_segment(pattern: &str, name: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let n: Vec<char> = name.chars().collect();
    let (mut pi, mut ni) = (0, 0);
    // Last `*` seen and the name position it is currently standing in for.
    let mut star: Option<(usize, usize)> = None;

    while ni < n.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == n[ni]) {
            pi += 1;
            ni += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some((pi, ni));
            pi += 1;
        } else if let Some((sp, sn)) = star {
            pi = sp + 1;
            ni = sn + 1;
            star = Some((sp, sn + 1));
        } else {
            return false;
        }
    }
    p[pi..].iter().all(|&c| c == '*')
}
