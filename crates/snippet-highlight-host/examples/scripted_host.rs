//! Drive a `HighlightSession` against a minimal in-memory host.
//!
//! ```sh
//! cargo run -p snippet-highlight-host --example scripted_host
//! ```

use serde_json::Value;
use snippet_highlight_host::{
    DecorationHandle, DecorationStyle, DocumentContext, DocumentId, HighlightHost,
    HighlightSession, HighlightSpan, HostError, HostEvent, InputPrompt, MessageLevel,
    SessionOptions, StatusItem, StatusItemHandle,
};
use std::collections::HashMap;
use std::time::{Duration, Instant};

struct PrintingHost {
    documents: HashMap<String, String>,
    config: HashMap<String, Value>,
    next_handle: u64,
}

impl PrintingHost {
    fn new() -> Self {
        Self {
            documents: HashMap::new(),
            config: HashMap::new(),
            next_handle: 0,
        }
    }
}

impl HighlightHost for PrintingHost {
    fn create_decoration(
        &mut self,
        style: &DecorationStyle,
    ) -> Result<DecorationHandle, HostError> {
        self.next_handle += 1;
        println!(
            "[host] decoration #{} created (background {})",
            self.next_handle, style.background_color
        );
        Ok(DecorationHandle(self.next_handle))
    }

    fn dispose_decoration(&mut self, handle: DecorationHandle) {
        println!("[host] decoration #{} disposed", handle.0);
    }

    fn set_decorations(
        &mut self,
        document: &DocumentId,
        _handle: DecorationHandle,
        spans: &[HighlightSpan],
    ) -> Result<(), HostError> {
        println!("[host] {} now carries {} highlight(s)", document.0, spans.len());
        for span in spans {
            println!("       chars {}..{}", span.range.start, span.range.end);
        }
        Ok(())
    }

    fn create_status_item(&mut self, item: &StatusItem) -> Result<StatusItemHandle, HostError> {
        self.next_handle += 1;
        println!("[host] status item: {}", item.text);
        Ok(StatusItemHandle(self.next_handle))
    }

    fn update_status_item(&mut self, _handle: StatusItemHandle, item: &StatusItem) {
        println!("[host] status item: {}", item.text);
    }

    fn dispose_status_item(&mut self, handle: StatusItemHandle) {
        println!("[host] status item #{} disposed", handle.0);
    }

    fn show_message(&mut self, level: MessageLevel, message: &str) {
        println!("[host] {level:?}: {message}");
    }

    fn prompt_input(
        &mut self,
        _prompt: &InputPrompt,
        _validate: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Option<String>, HostError> {
        // A real host would open an input box; this one always dismisses it.
        Ok(None)
    }

    fn read_config(&self, key: &str) -> Option<Value> {
        self.config.get(key).cloned()
    }

    fn write_config(&mut self, key: &str, value: Value) -> Result<(), HostError> {
        self.config.insert(key.to_string(), value);
        Ok(())
    }

    fn document_text(&self, document: &DocumentId) -> Result<String, HostError> {
        self.documents
            .get(&document.0)
            .cloned()
            .ok_or_else(|| HostError::DocumentUnavailable(document.0.clone()))
    }
}

fn main() {
    let mut host = PrintingHost::new();
    host.documents.insert(
        "file:///index.php".to_string(),
        "<body><?php render(); ?></body>".to_string(),
    );

    let mut session = HighlightSession::start(
        &mut host,
        SessionOptions {
            debounce: Duration::from_millis(100),
            initial_document: Some(DocumentContext::new("file:///index.php", "php")),
        },
    );

    // A small typing burst: only the final state is scanned.
    let t0 = Instant::now();
    for (i, text) in [
        "<body><?php render(); ?></body><?",
        "<body><?php render(); ?></body><? footer",
        "<body><?php render(); ?></body><? footer() ?>",
    ]
    .into_iter()
    .enumerate()
    {
        host.documents
            .insert("file:///index.php".to_string(), text.to_string());
        session.handle_event(
            &mut host,
            HostEvent::DocumentTextChanged {
                document: DocumentId::new("file:///index.php"),
            },
            t0 + Duration::from_millis(10 * i as u64),
        );
    }
    session.poll(&mut host, t0 + Duration::from_millis(200));

    session.toggle_highlight(&mut host);
    session.toggle_highlight(&mut host);

    session.stop(&mut host);
}
