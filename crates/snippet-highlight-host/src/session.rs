//! The session: highlight state, event routing, and the debounced re-scan.
//!
//! [`HighlightSession`] is the add-on's event router. It owns the process-wide
//! [`HighlightState`], the single decoration handle, and the single status indicator;
//! exactly one of each exists per activation. Handles are recreated (old disposed,
//! new constructed) rather than mutated when the color changes, so no stale visual
//! state survives a rebuild.
//!
//! No failure propagates out of a session method: host errors are reported to the
//! user or logged and swallowed, and every later triggering event naturally
//! re-attempts the failed operation.

use crate::events::{DocumentContext, HostEvent};
use crate::host::{
    DecorationHandle, DecorationStyle, HighlightHost, HighlightSpan, InputPrompt, MessageLevel,
    StatusAlignment, StatusItem, StatusItemHandle,
};
use serde_json::Value;
use snippet_highlight::{
    BlockScanner, CONFIG_NAMESPACE, DEFAULT_BACKGROUND_COLOR, HighlightConfig, HighlightState,
    KEY_BACKGROUND_COLOR, KEY_SUPPORTED_LANGUAGES, RenderEdit, is_valid_color, plan_render,
};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Host command id bound to the toggle command and the status indicator click.
pub const TOGGLE_COMMAND: &str = "snippet-highlight.toggleHighlight";

/// Host command id bound to the color-change command.
pub const CHANGE_COLOR_COMMAND: &str = "snippet-highlight.changeHighlightColor";

/// Left border painted along each block decoration.
const DECORATION_BORDER: &str = "1px solid rgba(50, 120, 200, 0.3)";

/// Hover message attached to each decorated block.
const BLOCK_HOVER: &str = "Embedded code block (click the status indicator to toggle)";

const STATUS_TOOLTIP: &str = "Toggle embedded code block highlighting";
const STATUS_TEXT_ON: &str = "🟢 Snippet Highlight";
const STATUS_TEXT_OFF: &str = "🔴 Snippet Highlight";
const STATUS_COLOR_ON: &str = "#4CAF50";
const STATUS_COLOR_OFF: &str = "#F44336";

/// Options used to start a [`HighlightSession`].
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Quiescence window after the last text change before a re-scan runs.
    pub debounce: Duration,
    /// The document focused at activation time, if any.
    pub initial_document: Option<DocumentContext>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(100),
            initial_document: None,
        }
    }
}

/// The add-on engine's session: one per activation.
///
/// The session never reads the wall clock. Callers pass `now` into
/// [`handle_event`](Self::handle_event) and [`poll`](Self::poll), which keeps the
/// text-change debounce deterministic under test.
#[derive(Debug)]
pub struct HighlightSession {
    scanner: BlockScanner,
    state: HighlightState,
    active: Option<DocumentContext>,
    decoration: Option<DecorationHandle>,
    status: Option<StatusItemHandle>,
    rescan_due: Option<Instant>,
    debounce: Duration,
}

impl HighlightSession {
    /// Activate: build the decoration and status indicator and render the initial
    /// document, if one is focused.
    ///
    /// An invalid *stored* color falls back to the built-in default with a warning;
    /// a failing decoration build leaves the session degraded (alive, highlighting
    /// nothing) with an error notification.
    pub fn start<H: HighlightHost>(host: &mut H, options: SessionOptions) -> Self {
        let SessionOptions {
            debounce,
            initial_document,
        } = options;

        let mut session = Self {
            scanner: BlockScanner::new(),
            state: HighlightState::default(),
            active: initial_document,
            decoration: None,
            status: None,
            rescan_due: None,
            debounce,
        };

        session.rebuild_decoration(host);
        session.init_status(host);
        session.render(host);
        session
    }

    /// Deactivate: cancel any pending re-scan and dispose every owned host resource.
    pub fn stop<H: HighlightHost>(mut self, host: &mut H) {
        self.rescan_due = None;
        if let Some(status) = self.status.take() {
            host.dispose_status_item(status);
        }
        if let Some(decoration) = self.decoration.take() {
            host.dispose_decoration(decoration);
        }
    }

    /// Whether highlighting is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    /// The color the active decoration was built with.
    pub fn color(&self) -> &str {
        &self.state.color
    }

    /// The currently focused document, if any.
    pub fn active_document(&self) -> Option<&DocumentContext> {
        self.active.as_ref()
    }

    /// Whether a debounced re-scan is pending.
    pub fn rescan_pending(&self) -> bool {
        self.rescan_due.is_some()
    }

    /// Route one host lifecycle event.
    pub fn handle_event<H: HighlightHost>(&mut self, host: &mut H, event: HostEvent, now: Instant) {
        match event {
            HostEvent::ConfigurationChanged { namespace } => {
                if namespace == CONFIG_NAMESPACE {
                    self.rebuild_decoration(host);
                    self.render(host);
                }
            }
            HostEvent::ActiveDocumentChanged { document } => {
                self.active = document;
                if self.active.is_some() {
                    self.render(host);
                }
            }
            HostEvent::DocumentTextChanged { document } => {
                let is_active = self.active.as_ref().is_some_and(|ctx| ctx.id == document);
                if is_active {
                    // Each edit restarts the quiescence window.
                    self.rescan_due = Some(now + self.debounce);
                }
            }
        }
    }

    /// Run the debounced re-scan once its deadline has passed.
    ///
    /// Hosts call this from their main-loop tick. A no-op while the window is still
    /// open or when nothing is scheduled.
    pub fn poll<H: HighlightHost>(&mut self, host: &mut H, now: Instant) {
        let Some(due) = self.rescan_due else {
            return;
        };
        if now < due {
            return;
        }
        self.rescan_due = None;
        self.render(host);
    }

    /// Flip the enabled flag, refresh the status indicator, and re-render.
    pub fn toggle_highlight<H: HighlightHost>(&mut self, host: &mut H) {
        self.state.enabled = !self.state.enabled;
        self.update_status(host);
        self.render(host);
        let message = if self.state.enabled {
            "Snippet highlighting enabled"
        } else {
            "Snippet highlighting disabled"
        };
        host.show_message(MessageLevel::Info, message);
    }

    /// Prompt for a new background color, persist it, and rebuild the decoration.
    ///
    /// The prompt validates inline and re-solicits on unacceptable input; dismissing
    /// it is a no-op and mutates nothing. Only this command blocks on the user.
    pub fn change_highlight_color<H: HighlightHost>(&mut self, host: &mut H) {
        let current = Self::read_config(host).background_color;
        let prompt = InputPrompt {
            prompt: "Block background color (rgba/rgb, #hex, or a color name)".to_string(),
            initial_value: current,
            placeholder: "e.g. rgba(50, 120, 200, 0.15) or #f0f8ff".to_string(),
        };

        let entered = match host.prompt_input(&prompt, &validate_color_input) {
            Ok(entered) => entered,
            Err(err) => {
                warn!(error = %err, "color prompt failed");
                return;
            }
        };
        let Some(color) = entered else {
            return;
        };

        if let Err(err) = host.write_config(KEY_BACKGROUND_COLOR, Value::String(color.clone())) {
            host.show_message(
                MessageLevel::Error,
                &format!("Failed to save highlight color: {err}"),
            );
            return;
        }

        self.rebuild_decoration(host);
        self.render(host);
        host.show_message(
            MessageLevel::Info,
            &format!("Highlight background color updated to {color}"),
        );
    }

    /// Read and shape-check the stored configuration.
    fn read_config<H: HighlightHost>(host: &H) -> HighlightConfig {
        HighlightConfig::from_values(
            host.read_config(KEY_BACKGROUND_COLOR).as_ref(),
            host.read_config(KEY_SUPPORTED_LANGUAGES).as_ref(),
        )
    }

    /// Re-apply decorations for the active document.
    ///
    /// Host failures here are logged and swallowed: the pass is skipped and the next
    /// triggering event retries naturally.
    fn render<H: HighlightHost>(&mut self, host: &mut H) {
        let Some(active) = self.active.clone() else {
            return;
        };
        let Some(decoration) = self.decoration else {
            // Degraded: decoration construction failed earlier.
            return;
        };

        let config = Self::read_config(host);
        let text = match host.document_text(&active.id) {
            Ok(text) => text,
            Err(err) => {
                warn!(document = %active.id.0, error = %err, "skipping highlight pass");
                return;
            }
        };

        let spans = match plan_render(&self.scanner, &self.state, &config, &active.language, &text)
        {
            RenderEdit::ClearHighlights => Vec::new(),
            RenderEdit::ReplaceHighlights { ranges, .. } => ranges
                .into_iter()
                .map(|range| HighlightSpan {
                    range,
                    hover: Some(BLOCK_HOVER.to_string()),
                })
                .collect(),
        };

        if let Err(err) = host.set_decorations(&active.id, decoration, &spans) {
            warn!(document = %active.id.0, error = %err, "failed to apply decorations");
        }
    }

    /// Dispose and re-create the decoration from the stored color.
    fn rebuild_decoration<H: HighlightHost>(&mut self, host: &mut H) {
        if let Some(old) = self.decoration.take() {
            host.dispose_decoration(old);
        }

        let configured = Self::read_config(host).background_color;
        let color = if is_valid_color(&configured) {
            configured
        } else {
            host.show_message(
                MessageLevel::Warning,
                &format!(
                    "Configured background color {configured:?} is not a recognized color; \
                     using the default"
                ),
            );
            DEFAULT_BACKGROUND_COLOR.to_string()
        };
        self.state.color = color.clone();

        let style = DecorationStyle {
            background_color: color,
            border_left: Some(DECORATION_BORDER.to_string()),
            whole_line: false,
        };
        match host.create_decoration(&style) {
            Ok(handle) => self.decoration = Some(handle),
            Err(err) => {
                host.show_message(
                    MessageLevel::Error,
                    &format!("Failed to create highlight decoration: {err}"),
                );
                debug!(error = %err, "decoration rebuild failed; highlighting suspended");
            }
        }
    }

    fn init_status<H: HighlightHost>(&mut self, host: &mut H) {
        match host.create_status_item(&self.status_item()) {
            Ok(handle) => self.status = Some(handle),
            Err(err) => warn!(error = %err, "status indicator unavailable"),
        }
    }

    fn update_status<H: HighlightHost>(&self, host: &mut H) {
        if let Some(handle) = self.status {
            host.update_status_item(handle, &self.status_item());
        }
    }

    fn status_item(&self) -> StatusItem {
        let (text, color) = if self.state.enabled {
            (STATUS_TEXT_ON, STATUS_COLOR_ON)
        } else {
            (STATUS_TEXT_OFF, STATUS_COLOR_OFF)
        };
        StatusItem {
            text: text.to_string(),
            color: color.to_string(),
            tooltip: STATUS_TOOLTIP.to_string(),
            command: TOGGLE_COMMAND.to_string(),
            alignment: StatusAlignment::Right,
            priority: 100,
        }
    }
}

/// Inline validator used by the color prompt.
fn validate_color_input(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("Color must not be empty".to_string())
    } else if !is_valid_color(value) {
        Some("Unrecognized color format; use rgba()/rgb(), #hex, or a color name".to_string())
    } else {
        None
    }
}
