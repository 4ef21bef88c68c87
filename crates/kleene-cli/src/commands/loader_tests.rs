use std::io::Write;

use super::loader::{LoadError, load_automaton};

fn description_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_description_file() {
    let file = description_file(
        "Automaton:\n    Symbols: ab\n\n    s\n    t final\n\n    --> s\n    s -a-> t\n    t -b-> s\n",
    );

    let automaton = load_automaton(file.path()).unwrap();

    assert_eq!(automaton.len(), 2);
    assert_eq!(automaton.transitions().len(), 2);
    assert_eq!(automaton.state(automaton.initial()).name(), "s");
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let err = load_automaton(&path).unwrap_err();

    assert!(matches!(err, LoadError::File { .. }));
    assert!(
        err.to_string()
            .starts_with(&format!("failed to read '{}'", path.display()))
    );
}

#[test]
fn parse_error_names_origin_and_line() {
    let file = description_file("Automaton:\n  s\n  s\n");

    let err = load_automaton(file.path()).unwrap_err();

    assert!(matches!(err, LoadError::Parse { .. }));
    assert_eq!(
        err.to_string(),
        format!(
            "{}: line 3: state `s` declared twice",
            file.path().display()
        )
    );
}
