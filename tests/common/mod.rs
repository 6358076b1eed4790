// Shared test helpers for parse-mode-escape.

use std::fs;
use std::path::Path;

use parse_mode_escape::ParseMode;
use serde::Deserialize;

/// Settings read from a fixture's `index.json`.
#[derive(Debug, Deserialize)]
struct FixtureConfig {
    mode: String,
    #[serde(default)]
    strategy: Option<String>,
}

/// How a fixture's input is escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureStrategy {
    Preserve,
    Simple,
    ContentOnly,
}

/// A loaded fixture.
pub struct Fixture {
    pub input: String,
    pub expected: String,
    pub mode: ParseMode,
    pub strategy: FixtureStrategy,
}

/// Read a fixture file, dropping the single trailing newline the file ends with.
fn read_text(path: &Path) -> String {
    let mut text = fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Missing fixture file: {}", path.display()));
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Load a fixture's input, expected output and settings.
///
/// Fixture directories contain `input.txt`, `expected.txt` and `index.json`.
pub fn load_fixture(name: &str) -> Fixture {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join("test-fixtures").join(name);
    let input = read_text(&base.join("input.txt"));
    let expected = read_text(&base.join("expected.txt"));

    let json = fs::read_to_string(base.join("index.json"))
        .unwrap_or_else(|_| panic!("Missing fixture: {}/index.json", name));
    let config: FixtureConfig = serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("Invalid fixture config {}/index.json: {}", name, e));

    let mode = config
        .mode
        .parse()
        .unwrap_or_else(|e| panic!("fixture {}: {}", name, e));
    let strategy = match config.strategy.as_deref() {
        None | Some("preserve") => FixtureStrategy::Preserve,
        Some("simple") => FixtureStrategy::Simple,
        Some("content-only") => FixtureStrategy::ContentOnly,
        Some(other) => panic!("fixture {}: unknown strategy {:?}", name, other),
    };

    Fixture { input, expected, mode, strategy }
}
