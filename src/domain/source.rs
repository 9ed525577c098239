use std::{io, path::Path};

/// Represents a Luxor source, whether it comes from a file or a string.
///
/// An empty source occurs in REPL mode before the user has entered any lines.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Source {
    text: String,
}

impl Source {
    pub fn from_path<P>(filepath: P) -> io::Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = std::fs::read_to_string(&filepath)?;
        Ok(Self { text })
    }

    /// Provide code directly as a string without reading from the file system.
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}
