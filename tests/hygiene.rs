//! Hygiene: enforces coding standards at test time
//!
//! Scans the crate's production sources for antipatterns. Each pattern has a
//! budget (ideally zero). The budget never grows: to add one, remove one.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0, why: "panics" };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0, why: "panics" };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0, why: "panics" };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0, why: "panics" };
const TODO: Budget = Budget { pattern: "todo!(", max: 0, why: "unfinished stub" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" };
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0, why: "discards a result unread" };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0, why: "discards an error unread" };
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" };

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

fn hits<'a>(files: &'a [SourceFile], pattern: &str, skip: &[&str]) -> Vec<(&'a str, usize)> {
    files
        .iter()
        .filter(|file| !skip.iter().any(|s| file.path.ends_with(s)))
        .map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (file.path.as_str(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn check(budget: &Budget) {
    check_except(budget, &[]);
}

fn check_except(budget: &Budget, skip: &[&str]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");
    let found = hits(&files, budget.pattern, skip);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(
        count <= budget.max,
        "`{}` budget exceeded ({}): found {count}, max {}.\n{listing}",
        budget.pattern,
        budget.why,
        budget.max
    );
}

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn unreachable_budget() {
    check(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn unimplemented_budget() {
    check(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}

/// Drawers bracket style changes with `StyleScope`; only the surface module
/// may call `save`/`restore` directly.
#[test]
fn raw_save_restore_only_in_surface() {
    let skip = ["surface.rs"];
    check_except(&Budget { pattern: ".save()", max: 0, why: "bypasses StyleScope" }, &skip);
    check_except(&Budget { pattern: ".restore()", max: 0, why: "bypasses StyleScope" }, &skip);
}
