use std::path::Path;
use std::path::PathBuf;

/// What to parse, plus metadata stored on the resulting
/// [`Document`](crate::tree::Document).
#[derive(Clone, Debug)]
pub struct ParseInput<'src> {
    pub source: &'src str,

    /// Where `source` came from. Shows up in parse error locations.
    pub path: Option<PathBuf>,

    /// The character set `source` was declared to be in, if known.
    pub charset: Option<String>,
}

impl<'src> ParseInput<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            path: None,
            charset: None,
        }
    }

    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..self
        }
    }

    pub fn with_charset(self, charset: impl Into<String>) -> Self {
        Self {
            charset: Some(charset.into()),
            ..self
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
