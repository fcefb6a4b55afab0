//! The outbound host surface.
//!
//! Everything the engine needs from an actual editor host is collected in
//! [`HighlightHost`]. The trait is deliberately narrow: decorations, one status
//! indicator, notifications, a validated input prompt, the configuration store, and
//! document text. Hosts own the real widgets; the session only holds opaque handles.
//!
//! All methods are expected to run synchronously on the host's main loop.
//! [`prompt_input`](HighlightHost::prompt_input) is the only call that may block
//! while the user responds.

use serde_json::Value;
use snippet_highlight::HighlightRange;
use thiserror::Error;

/// Identity of an open document, as assigned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(pub String);

impl DocumentId {
    /// Create a document id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Opaque handle to a host decoration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecorationHandle(pub u64);

/// Opaque handle to the host status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusItemHandle(pub u64);

/// Visual properties of the block decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationStyle {
    /// Background fill painted behind each block.
    pub background_color: String,
    /// Optional left border, in a CSS-like shorthand the host interprets.
    pub border_left: Option<String>,
    /// If `true`, the decoration stretches across full lines.
    pub whole_line: bool,
}

/// Which side of the status bar the indicator is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAlignment {
    /// Anchored on the left side.
    Left,
    /// Anchored on the right side.
    Right,
}

/// Contents of the status indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusItem {
    /// Indicator text.
    pub text: String,
    /// Indicator foreground color.
    pub color: String,
    /// Hover tooltip.
    pub tooltip: String,
    /// Host command id invoked when the indicator is clicked.
    pub command: String,
    /// Anchor side.
    pub alignment: StatusAlignment,
    /// Ordering priority among indicators on the same side.
    pub priority: i32,
}

/// One applied decoration: a block span plus its hover message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    /// The block span, in character offsets.
    pub range: HighlightRange,
    /// Optional hover message shown over the span.
    pub hover: Option<String>,
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// An informational message.
    Info,
    /// A warning message.
    Warning,
    /// An error message.
    Error,
}

/// Parameters for the validated input prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPrompt {
    /// Prompt label.
    pub prompt: String,
    /// Value pre-filled in the input field.
    pub initial_value: String,
    /// Ghost text shown while the field is empty.
    pub placeholder: String,
}

/// Errors surfaced by host calls.
#[derive(Debug, Error)]
pub enum HostError {
    /// Creating or applying a decoration failed.
    #[error("decoration request failed: {0}")]
    Decoration(String),

    /// Creating or updating the status indicator failed.
    #[error("status indicator request failed: {0}")]
    StatusItem(String),

    /// The configuration store rejected an update.
    #[error("configuration update for '{key}' failed: {message}")]
    ConfigUpdate {
        /// The configuration key being written.
        key: String,
        /// The host's failure message.
        message: String,
    },

    /// The referenced document is not (or no longer) open.
    #[error("document is not open: {0}")]
    DocumentUnavailable(String),

    /// The input prompt could not be shown.
    #[error("input prompt failed: {0}")]
    Prompt(String),
}

/// The narrow surface the engine consumes from its editor host.
pub trait HighlightHost {
    /// Construct a decoration type from `style`, returning an opaque handle.
    fn create_decoration(
        &mut self,
        style: &DecorationStyle,
    ) -> Result<DecorationHandle, HostError>;

    /// Dispose a previously created decoration type, removing it everywhere.
    fn dispose_decoration(&mut self, handle: DecorationHandle);

    /// Replace the spans decorated with `handle` in `document`.
    ///
    /// An empty `spans` slice clears the document's highlights.
    fn set_decorations(
        &mut self,
        document: &DocumentId,
        handle: DecorationHandle,
        spans: &[HighlightSpan],
    ) -> Result<(), HostError>;

    /// Create the status indicator.
    fn create_status_item(&mut self, item: &StatusItem) -> Result<StatusItemHandle, HostError>;

    /// Update the status indicator's contents.
    fn update_status_item(&mut self, handle: StatusItemHandle, item: &StatusItem);

    /// Dispose the status indicator.
    fn dispose_status_item(&mut self, handle: StatusItemHandle);

    /// Show a user-facing notification.
    fn show_message(&mut self, level: MessageLevel, message: &str);

    /// Show a validated input prompt; `Ok(None)` means the user dismissed it.
    ///
    /// `validate` returns an inline error message for unacceptable input and `None`
    /// for acceptable input. Hosts re-solicit while the input is unacceptable and must
    /// only return `Ok(Some(value))` for a value `validate` accepts.
    fn prompt_input(
        &mut self,
        prompt: &InputPrompt,
        validate: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Option<String>, HostError>;

    /// Read a raw value from the add-on's configuration namespace.
    ///
    /// This is the unvalidated passthrough. Shape-checking for the two typed keys
    /// happens in [`snippet_highlight::HighlightConfig::from_values`].
    fn read_config(&self, key: &str) -> Option<Value>;

    /// Persist a value into the add-on's configuration namespace.
    fn write_config(&mut self, key: &str, value: Value) -> Result<(), HostError>;

    /// The full current text of `document`.
    fn document_text(&self, document: &DocumentId) -> Result<String, HostError>;
}
