//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the basement crate source tree for antipatterns. Each
//! pattern has a budget (zero today). The budget only ever shrinks.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

/// Pattern, budget, and what the pattern costs us.
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics: a crash inside the frame loop kills the page.
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "explicit panic"),
    ("unreachable!(", 0, "explicit panic"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    // Silent loss.
    ("let _ =", 0, "discards a value without inspecting it"),
    (".ok()", 0, "discards an error"),
    // Structure.
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

/// Only these files may talk to the browser canvas directly.
const CANVAS_OWNERS: &[&str] = &["engine.rs", "render.rs"];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `basement/src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_not_empty() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, max, why) in BUDGETS {
        let hits = hits_for(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > max {
            let listing: Vec<String> = hits.iter().map(|(path, c)| format!("    {path}: {c}")).collect();
            failures.push(format!("  `{pattern}` ({why}): found {count}, max {max}\n{}", listing.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn canvas_context_stays_in_renderer() {
    let offenders: Vec<String> = source_files()
        .into_iter()
        .filter(|f| f.content.contains("CanvasRenderingContext2d"))
        .filter(|f| !CANVAS_OWNERS.iter().any(|owner| f.path.ends_with(owner)))
        .map(|f| f.path)
        .collect();
    assert!(offenders.is_empty(), "2D context used outside the renderer: {offenders:?}");
}
