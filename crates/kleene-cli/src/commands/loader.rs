use std::fs;
use std::io::{self, Read};
use std::path::Path;

use kleene_lib::Automaton;
use kleene_lib::format::text;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    File { path: String, source: io::Error },

    #[error("{origin}: {source}")]
    Parse {
        origin: String,
        source: kleene_lib::Error,
    },
}

/// Read an automaton description from `path`, or stdin when `path` is `-`.
pub fn load_automaton(path: &Path) -> Result<Automaton, LoadError> {
    let (origin, description) = if path.as_os_str() == "-" {
        ("<stdin>".to_string(), load_stdin()?)
    } else {
        (path.display().to_string(), load_file(path)?)
    };

    text::read(&description).map_err(|source| LoadError::Parse { origin, source })
}

fn load_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.display().to_string(),
        source,
    })
}
