//! Stack frames, stack capture and trace sanitization

mod sanitizer;
mod source;

pub use sanitizer::TraceSanitizer;
pub use source::{NoStack, StackSource};

#[cfg(test)]
pub use source::MockStackSource;

use std::fmt;
use std::path::{Path, PathBuf};

/// One entry of a captured call stack.
///
/// Frames of built-in host functions have no source location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub file: Option<PathBuf>,
    pub line: Option<u32>,
    pub function: Option<String>,
}

impl Frame {
    /// Frame at a source location
    pub fn new(file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            file: Some(file.into()),
            line: Some(line),
            function: None,
        }
    }

    /// Frame of a function without source location
    pub fn internal(function: impl Into<String>) -> Self {
        Self {
            file: None,
            line: None,
            function: Some(function.into()),
        }
    }

    /// Set the function context
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Whether the frame sits exactly at `file:line`.
    ///
    /// Paths are compared as written, without normalizing separators.
    pub fn is_at(&self, file: &Path, line: u32) -> bool {
        match (&self.file, self.line) {
            (Some(frame_file), Some(frame_line)) => {
                frame_line == line && frame_file.as_os_str() == file.as_os_str()
            }
            _ => false,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{}({})", file.display(), line)?,
            (Some(file), None) => write!(f, "{}", file.display())?,
            _ => f.write_str("[internal function]")?,
        }
        if let Some(function) = &self.function {
            write!(f, ": {}()", function)?;
        }
        Ok(())
    }
}

/// Captured call stack, innermost frame first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StackTrace {
    frames: Vec<Frame>,
}

impl StackTrace {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

impl From<Vec<Frame>> for StackTrace {
    fn from(frames: Vec<Frame>) -> Self {
        Self::new(frames)
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "#{} {}", i, frame)?;
        }
        write!(f, "#{} {{main}}", self.frames.len())
    }
}
