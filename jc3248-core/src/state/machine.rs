//! Stage definitions and transitions
//!
//! ```text
//! Idle → Connecting → Downloading → Decoding → Blitting → Done
//!            │             │            │          │
//!            └─────────────┴────────────┴──────────┴──► Failed(kind)
//! ```

use super::events::FetchEvent;
use crate::error::Error;
use crate::traits::DecodeError;

/// Pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// Nothing in flight
    #[default]
    Idle,
    /// Opening the network stream
    Connecting,
    /// Draining the body into staging storage
    Downloading,
    /// Handing staged bytes to the block decoder
    Decoding,
    /// Writing decoded blocks to the framebuffer
    Blitting,
    /// Image fully painted
    Done,
    /// Terminal failure
    Failed(FailKind),
}

/// Why a pipeline run failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FailKind {
    /// Network stream could not be opened or broke mid-read
    Network,
    /// Server answered with a non-success status
    Http(u16),
    /// Response declared no body (missing or zero `Content-Length`)
    EmptyBody,
    /// Stream closed or the deadline passed before the body was complete
    IncompleteTransfer {
        /// The wall-clock deadline, not the peer, ended the transfer
        timed_out: bool,
    },
    /// Staging storage refused a create/write/read
    Staging,
    /// Staging or decode buffer could not be allocated
    OutOfMemory,
    /// Decoder rejected the stream
    Decode(DecodeError),
    /// Caller tripped the cancel token
    Cancelled,
    /// Framebuffer sink failed; nothing more can be painted
    Display,
}

impl From<FailKind> for Error {
    fn from(kind: FailKind) -> Self {
        match kind {
            FailKind::Network | FailKind::Http(_) | FailKind::Staging | FailKind::Display => {
                Error::Communication
            }
            FailKind::EmptyBody => Error::Protocol,
            FailKind::IncompleteTransfer { timed_out: true } => Error::Timeout,
            FailKind::IncompleteTransfer { timed_out: false } => Error::IncompleteTransfer,
            FailKind::OutOfMemory => Error::OutOfMemory,
            FailKind::Decode(e) => e.into(),
            FailKind::Cancelled => Error::Cancelled,
        }
    }
}

impl Stage {
    /// Check if the pipeline is done with this invocation
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Done | Stage::Failed(_))
    }

    /// Check if this is a failure state
    pub fn is_failed(&self) -> bool {
        matches!(self, Stage::Failed(_))
    }

    /// Position along the happy path; used to assert forward-only movement
    pub fn ordinal(&self) -> u8 {
        match self {
            Stage::Idle => 0,
            Stage::Connecting => 1,
            Stage::Downloading => 2,
            Stage::Decoding => 3,
            Stage::Blitting => 4,
            Stage::Done | Stage::Failed(_) => 5,
        }
    }

    /// Process an event and return the next stage
    pub fn transition(self, event: FetchEvent) -> Self {
        use FetchEvent::*;
        use Stage::*;

        match (self, event) {
            (Idle, Start) => Connecting,
            (Connecting, ResponseOk) => Downloading,
            (Downloading, DownloadComplete) => Decoding,
            (Decoding, DecoderReady) => Blitting,
            (Blitting, BlitComplete) => Done,

            // Failure from any non-terminal stage
            (Connecting | Downloading | Decoding | Blitting, Fail(kind)) => Failed(kind),

            // Terminal stages wait for an explicit reset
            (Done | Failed(_), Reset) => Idle,

            // Default: stay in current stage
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut stage = Stage::Idle;
        for event in [
            FetchEvent::Start,
            FetchEvent::ResponseOk,
            FetchEvent::DownloadComplete,
            FetchEvent::DecoderReady,
            FetchEvent::BlitComplete,
        ] {
            let next = stage.transition(event);
            assert!(next.ordinal() > stage.ordinal());
            stage = next;
        }
        assert_eq!(stage, Stage::Done);
    }

    #[test]
    fn test_fail_from_any_active_stage() {
        let stages = [
            Stage::Connecting,
            Stage::Downloading,
            Stage::Decoding,
            Stage::Blitting,
        ];

        for stage in stages {
            let next = stage.transition(FetchEvent::Fail(FailKind::Cancelled));
            assert_eq!(next, Stage::Failed(FailKind::Cancelled));
        }
    }

    #[test]
    fn test_idle_cannot_fail() {
        let next = Stage::Idle.transition(FetchEvent::Fail(FailKind::Network));
        assert_eq!(next, Stage::Idle);
    }

    #[test]
    fn test_terminal_stages_are_sticky() {
        let failed = Stage::Failed(FailKind::Http(404));
        assert_eq!(failed.transition(FetchEvent::ResponseOk), failed);
        assert_eq!(
            failed.transition(FetchEvent::Fail(FailKind::Network)),
            failed
        );
        assert_eq!(Stage::Done.transition(FetchEvent::Start), Stage::Done);
        assert_eq!(Stage::Done.transition(FetchEvent::Reset), Stage::Idle);
    }

    #[test]
    fn test_out_of_order_events_ignored() {
        assert_eq!(
            Stage::Connecting.transition(FetchEvent::DecoderReady),
            Stage::Connecting
        );
        assert_eq!(
            Stage::Idle.transition(FetchEvent::DownloadComplete),
            Stage::Idle
        );
    }

    #[test]
    fn test_fail_kind_categories() {
        assert_eq!(
            Error::from(FailKind::IncompleteTransfer { timed_out: true }),
            Error::Timeout
        );
        assert_eq!(
            Error::from(FailKind::IncompleteTransfer { timed_out: false }),
            Error::IncompleteTransfer
        );
        assert_eq!(
            Error::from(FailKind::Decode(DecodeError::OutOfMemory)),
            Error::OutOfMemory
        );
        assert_eq!(Error::from(FailKind::Http(500)), Error::Communication);
    }
}
