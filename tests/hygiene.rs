//! Source checks for the page units.
//!
//! A failing unit must leave the rest of the page working, so production
//! sources may not panic or drop a result unseen. Listener wiring has its own
//! rules: every registration goes through `dom::on`, every `on(...)` result is
//! propagated, and every JS closure handed to the browser is leaked with
//! `.forget()` so it outlives the install call.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    fn name(&self) -> &str {
        Path::new(&self.path).file_name().and_then(|n| n.to_str()).unwrap_or_default()
    }

    fn count(&self, pattern: &str) -> usize {
        self.content.lines().filter(|line| line.contains(pattern)).count()
    }
}

/// Production sources: everything in `src/` except `*_test.rs` and the test double.
fn sources() -> Vec<SourceFile> {
    let Ok(entries) = fs::read_dir("src") else {
        return Vec::new();
    };
    let mut files: Vec<SourceFile> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|e| e == "rs"))
        .filter_map(|path| {
            let path = path.to_string_lossy().to_string();
            if path.ends_with("_test.rs") || path.ends_with("testing.rs") {
                return None;
            }
            let content = fs::read_to_string(&path).ok()?;
            Some(SourceFile { path, content })
        })
        .collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

#[test]
fn sources_are_found() {
    let names: Vec<String> = sources().iter().map(|f| f.name().to_owned()).collect();
    for expected in ["lib.rs", "nav.rs", "scroll.rs", "dom.rs"] {
        assert!(names.iter().any(|n| n == expected), "{expected} missing from {names:?}");
    }
}

#[test]
fn no_panics_or_silent_discards() {
    let forbidden = [
        (".unwrap()", "panics on a missing element"),
        (".expect(", "panics on a missing element"),
        ("panic!(", "aborts the whole module"),
        ("unreachable!(", "aborts the whole module"),
        ("todo!(", "stub left in a unit"),
        ("unimplemented!(", "stub left in a unit"),
        ("let _ =", "drops a result without looking at it"),
        (".ok()", "drops a JS error without logging it"),
        ("#[allow(dead_code)]", "unit code nothing installs"),
    ];

    let files = sources();
    let mut violations = Vec::new();
    for (pattern, why) in forbidden {
        for file in &files {
            let hits = file.count(pattern);
            if hits > 0 {
                violations.push(format!("  {}: {hits} x `{pattern}` ({why})", file.path));
            }
        }
    }
    assert!(violations.is_empty(), "forbidden patterns:\n{}", violations.join("\n"));
}

#[test]
fn listeners_register_only_through_dom_on() {
    let files = sources();
    let offenders: Vec<&str> = files
        .iter()
        .filter(|f| f.name() != "dom.rs" && f.count("add_event_listener") > 0)
        .map(|f| f.path.as_str())
        .collect();
    assert!(offenders.is_empty(), "register listeners with dom::on instead: {offenders:?}");
}

fn indent(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

#[test]
fn listener_results_are_propagated() {
    let mut dropped = Vec::new();
    for file in sources() {
        let lines: Vec<&str> = file.content.lines().collect();
        for (i, line) in lines.iter().enumerate() {
            if !line.trim_start().starts_with("on(") {
                continue;
            }
            // The statement ends on the first line at the same depth that ends with `;`.
            let end = lines[i..]
                .iter()
                .find(|l| indent(l) == indent(line) && l.trim_end().ends_with(';'))
                .copied()
                .unwrap_or(*line);
            if !end.trim_end().ends_with("?;") {
                dropped.push(format!("  {}:{}", file.path, i + 1));
            }
        }
    }
    assert!(dropped.is_empty(), "on(...) result not propagated with `?`:\n{}", dropped.join("\n"));
}

#[test]
fn every_closure_is_forgotten() {
    let mut leaks = Vec::new();
    for file in sources() {
        let made = file.count("Closure::");
        let forgotten = file.count(".forget()");
        if made > forgotten {
            leaks.push(format!("  {}: {made} closures, {forgotten} forget()", file.path));
        }
    }
    assert!(leaks.is_empty(), "closures dropped at end of install:\n{}", leaks.join("\n"));
}

#[test]
fn browser_bindings_are_hydrate_only() {
    let mut ungated = Vec::new();
    for file in sources() {
        let lines: Vec<&str> = file.content.lines().collect();
        for (i, line) in lines.iter().enumerate() {
            if line.starts_with("mod bind") || line.starts_with("mod boot") {
                let gated = i > 0 && lines[i - 1].trim() == "#[cfg(feature = \"hydrate\")]";
                if !gated {
                    ungated.push(format!("  {}:{}", file.path, i + 1));
                }
            }
        }
    }
    assert!(ungated.is_empty(), "browser modules missing the hydrate gate:\n{}", ungated.join("\n"));
}
