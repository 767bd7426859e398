//! Removal of trap/dispatch frames from captured traces

use super::Frame;
use crate::exception::ClassifiedException;
use std::path::Path;

/// Strips the frames of the interception path from captured traces.
///
/// Frame 0 is the synthesis point inside the trap, which the host records at
/// the diagnostic's own source location. Everything after it up to and
/// including the first frame at that location belongs to the dispatch path.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceSanitizer;

impl TraceSanitizer {
    /// Replace the exception's trace with its sanitized form
    pub fn sanitize(exception: ClassifiedException) -> ClassifiedException {
        let file = exception.file().to_path_buf();
        let line = exception.line();
        let frames = exception.trace().frames().to_vec();
        exception.replace_trace(Self::sanitize_frames(frames, &file, line))
    }

    /// Drop every frame up to and including the first one at `file:line`
    /// past the synthesis frame.
    ///
    /// When only the synthesis frame matches, just that frame is dropped.
    /// Frames are returned untouched when none matches.
    pub fn sanitize_frames(mut frames: Vec<Frame>, file: &Path, line: u32) -> Vec<Frame> {
        let cut = frames
            .iter()
            .skip(1)
            .position(|frame| frame.is_at(file, line))
            .map(|offset| offset + 1)
            .or_else(|| {
                frames
                    .first()
                    .filter(|frame| frame.is_at(file, line))
                    .map(|_| 0)
            });

        match cut {
            Some(index) => {
                tracing::trace!(
                    file = %file.display(),
                    line,
                    dropped = index + 1,
                    "Trimmed interception frames from trace"
                );
                frames.split_off(index + 1)
            }
            None => {
                tracing::debug!(
                    file = %file.display(),
                    line,
                    depth = frames.len(),
                    "No frame matches the reported location; keeping trace as captured"
                );
                frames
            }
        }
    }
}
