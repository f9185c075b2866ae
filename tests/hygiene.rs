//! Hygiene — coding standards enforced at test time.
//!
//! Scans the production sources for antipatterns. Every budget is zero: the
//! controller degrades by logging, never by panicking or discarding errors.

use std::fs;
use std::path::Path;

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

fn hits<'a>(files: &'a [SourceFile], pattern: &str) -> Vec<(&'a str, usize)> {
    files
        .iter()
        .map(|file| (file.path.as_str(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn assert_absent(pattern: &str, files: &[SourceFile]) {
    let found = hits(files, pattern);
    let report: Vec<String> = found.iter().map(|(path, count)| format!("  {path}: {count}")).collect();
    assert!(found.is_empty(), "`{pattern}` is not allowed in production sources:\n{}", report.join("\n"));
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("controller.rs")));
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn no_panicking_calls() {
    let files = source_files();
    for pattern in [".unwrap()", ".expect(", "panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_absent(pattern, &files);
    }
}

#[test]
fn no_silently_discarded_errors() {
    let files = source_files();
    assert_absent("let _ =", &files);
    assert_absent(".ok()", &files);
}

#[test]
fn no_dead_code_allowances() {
    assert_absent("#[allow(dead_code)]", &source_files());
}

#[test]
fn browser_globals_stay_in_web_bindings() {
    let files: Vec<SourceFile> = source_files()
        .into_iter()
        .filter(|f| !f.path.replace('\\', "/").contains("src/web/"))
        .collect();
    assert_absent("web_sys::", &files);
    assert_absent("js_sys::", &files);
}

/// Features reached only through a method of another binding.
const METHOD_ONLY_FEATURES: [(&str, &str); 3] =
    [("Node", "append_child"), ("EventTarget", "add_event_listener"), ("MediaQueryList", "match_media")];

fn web_sys_features() -> Vec<String> {
    let manifest = fs::read_to_string("Cargo.toml").unwrap_or_default();
    let Some(line) = manifest.lines().find(|line| line.starts_with("web-sys")) else {
        return Vec::new();
    };
    let Some((_, list)) = line.split_once("features = [") else {
        return Vec::new();
    };
    list.split(']')
        .next()
        .unwrap_or_default()
        .split(',')
        .map(|feature| feature.trim().trim_matches('"').to_owned())
        .filter(|feature| !feature.is_empty())
        .collect()
}

#[test]
fn every_web_sys_feature_is_used() {
    let features = web_sys_features();
    assert!(features.iter().any(|f| f == "Storage"), "web-sys feature list not found");

    let web: String = source_files()
        .into_iter()
        .filter(|f| f.path.replace('\\', "/").contains("src/web/"))
        .map(|f| f.content)
        .collect();
    let unused: Vec<&String> = features
        .iter()
        .filter(|feature| {
            let needle = METHOD_ONLY_FEATURES
                .iter()
                .find(|(name, _)| *name == feature.as_str())
                .map_or(feature.as_str(), |(_, method)| *method);
            !web.contains(needle)
        })
        .collect();
    assert!(unused.is_empty(), "web-sys features enabled but unused: {unused:?}");
}
