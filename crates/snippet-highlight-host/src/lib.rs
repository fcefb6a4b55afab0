#![warn(missing_docs)]
//! `snippet-highlight-host` - Host-runtime boundary for `snippet-highlight`.
//!
//! The engine in `snippet-highlight` is pure; this crate is where it meets an actual
//! editor host. [`HighlightHost`] is the narrow outbound surface (decorations, the
//! status indicator, notifications, a validated input prompt, the configuration
//! store, document text); [`HostEvent`] is the inbound lifecycle surface; and
//! [`HighlightSession`] routes between the two, debouncing text edits so a rapid
//! typing burst triggers a single re-scan.
//!
//! Hosts drive the session from their main loop:
//!
//! 1. [`HighlightSession::start`] at activation
//! 2. [`handle_event`](HighlightSession::handle_event) for each lifecycle event and
//!    [`poll`](HighlightSession::poll) on every tick
//! 3. [`toggle_highlight`](HighlightSession::toggle_highlight) /
//!    [`change_highlight_color`](HighlightSession::change_highlight_color) when the
//!    registered commands fire
//! 4. [`stop`](HighlightSession::stop) at deactivation
//!
//! The session is single-threaded and never reads the wall clock: the host passes
//! `now` into `handle_event` and `poll`, which keeps the debounce deterministic under
//! test.

pub mod events;
pub mod host;
pub mod session;

pub use events::{DocumentContext, HostEvent};
pub use host::{
    DecorationHandle, DecorationStyle, DocumentId, HighlightHost, HighlightSpan, HostError,
    InputPrompt, MessageLevel, StatusAlignment, StatusItem, StatusItemHandle,
};
pub use session::{CHANGE_COLOR_COMMAND, HighlightSession, SessionOptions, TOGGLE_COMMAND};
