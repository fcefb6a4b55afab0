//! Inbound host lifecycle events.
//!
//! Hosts translate their own notification APIs into [`HostEvent`] values and feed
//! them to [`HighlightSession::handle_event`](crate::HighlightSession::handle_event)
//! in delivery order. The engine performs no reordering or coalescing of its own;
//! only text changes are debounced, and that happens inside the session.

use crate::host::DocumentId;

/// The focused document's identity and language tag.
///
/// Owned by the session and replaced wholesale on every
/// [`HostEvent::ActiveDocumentChanged`], never partially mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentContext {
    /// Host identity of the document.
    pub id: DocumentId,
    /// The document's language tag (e.g. `"php"`, `"blade"`).
    pub language: String,
}

impl DocumentContext {
    /// Create a context.
    pub fn new(id: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(id),
            language: language.into(),
        }
    }
}

/// A host lifecycle event consumed by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A configuration namespace changed. Only events whose `namespace` equals
    /// [`snippet_highlight::CONFIG_NAMESPACE`] affect the session.
    ConfigurationChanged {
        /// The configuration namespace that changed.
        namespace: String,
    },

    /// The focused editor changed; `None` means no editor is focused.
    ActiveDocumentChanged {
        /// The newly focused document, if any.
        document: Option<DocumentContext>,
    },

    /// A document's text changed. Only changes to the active document schedule a
    /// debounced re-scan.
    DocumentTextChanged {
        /// The edited document.
        document: DocumentId,
    },
}
