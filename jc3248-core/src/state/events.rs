//! Events that trigger stage transitions

use super::machine::FailKind;

/// Events that can trigger stage transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FetchEvent {
    /// Caller asked for an image
    Start,
    /// Server answered with a success status
    ResponseOk,
    /// Declared body length fully staged
    DownloadComplete,
    /// Decoder accepted the header and is ready to emit blocks
    DecoderReady,
    /// Last block written to the framebuffer
    BlitComplete,
    /// Any stage failed
    Fail(FailKind),
    /// Return a finished machine to `Idle` for the next invocation
    Reset,
}
