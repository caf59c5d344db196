//! Hygiene: coding standards enforced at test time
//!
//! Scans the client crate source tree for panics and silently dropped results.
//! Each pattern has a budget. Browser APIs are best-effort here, so a few
//! deliberate discards exist; the budget only shrinks.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
}

// Panics crash the WASM module and leave the page inert.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
];

// Silent loss: cfg-gated parameter sinks, the logger install, and
// `Result -> Option` hops on web-sys getters.
const DISCARDS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 4 },
    Budget { pattern: ".ok()", max: 3 },
];

const STYLE: &[Budget] = &[Budget { pattern: "#[allow(dead_code)]", max: 0 }];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the client crate root");
    for budget in budgets {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        let listing = found
            .iter()
            .map(|(path, c)| format!("  {path}: {c}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert!(
            count <= budget.max,
            "`{}` budget exceeded: found {count}, max {}.\n{listing}",
            budget.pattern,
            budget.max
        );
    }
}

#[test]
fn panic_budgets() {
    check(PANICS);
}

#[test]
fn discard_budgets() {
    check(DISCARDS);
}

#[test]
fn style_budgets() {
    check(STYLE);
}
