//! Call-stack capture seam
//!
//! The host owns its call stack; the converter asks for a snapshot each time
//! it constructs an exception. The snapshot still contains the host's trap
//! and dispatch frames; removing them is the sanitizer's job.

use super::Frame;

#[cfg(test)]
use mockall::automock;

/// Captures the host's current call stack
#[cfg_attr(test, automock)]
pub trait StackSource: Send + Sync {
    /// Frames at the point of the call, innermost first
    fn capture(&self) -> Vec<Frame>;
}

/// Stack source for hosts that expose no call stack
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStack;

impl StackSource for NoStack {
    fn capture(&self) -> Vec<Frame> {
        Vec::new()
    }
}

impl<F> StackSource for F
where
    F: Fn() -> Vec<Frame> + Send + Sync,
{
    fn capture(&self) -> Vec<Frame> {
        self()
    }
}
