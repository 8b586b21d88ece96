//! Console output for received callbacks.
//!
//! # Responsibilities
//! - Render the fixed callback template (request line plus extracted fields)
//! - Optional ANSI coloring for interactive use
//! - Keep concurrent callbacks from interleaving on the output stream
//!
//! # Design Decisions
//! - Callback lines go to a dedicated sink, not through `tracing`; the
//!   template is an operator-facing contract, not an operational log
//! - The whole three-line block is written under one lock, so output is
//!   block-atomic across concurrent requests
//! - The writer is injectable so tests capture output in memory

use std::io::Write;
use std::sync::{Arc, Mutex};

use axum::http::{Method, Uri};

use crate::http::callback::CallbackFields;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const RESET: &str = "\x1b[0m";

/// Sink for callback output lines.
///
/// Cheap to clone; all clones share the same writer and lock.
#[derive(Clone)]
pub struct Console {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    color: bool,
}

impl Console {
    /// Console writing to the process's standard output.
    pub fn stdout(color: bool) -> Self {
        Self::with_writer(Box::new(std::io::stdout()), color)
    }

    /// Console writing to an arbitrary sink. Used by tests to capture output.
    pub fn with_writer(writer: Box<dyn Write + Send>, color: bool) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
            color,
        }
    }

    /// Write one callback block: request line plus the extracted fields.
    pub fn log_callback(&self, method: &Method, uri: &Uri, fields: &CallbackFields) {
        let block = self.render(method, uri, fields);
        if let Ok(mut writer) = self.writer.lock() {
            // One write per callback keeps blocks contiguous under load.
            let _ = writer.write_all(block.as_bytes());
            let _ = writer.flush();
        }
    }

    fn render(&self, method: &Method, uri: &Uri, fields: &CallbackFields) -> String {
        if self.color {
            format!(
                "{GREEN}Received request:{RESET} {YELLOW}{method} {uri}{RESET}\n  \
                 {MAGENTA}hostname:{RESET} {}\n  \
                 {MAGENTA}username:{RESET} {}\n",
                fields.hostname, fields.username
            )
        } else {
            format!(
                "Received request: {method} {uri}\n  hostname: {}\n  username: {}\n",
                fields.hostname, fields.username
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(hostname: &str, username: &str) -> CallbackFields {
        CallbackFields {
            hostname: hostname.to_string(),
            username: username.to_string(),
        }
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn captured(buffer: &SharedBuffer) -> String {
        String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn plain_template_matches_contract() {
        let buffer = SharedBuffer::default();
        let console = Console::with_writer(Box::new(buffer.clone()), false);

        let uri: Uri = "/?hostname=victim01&username=admin".parse().unwrap();
        console.log_callback(&Method::GET, &uri, &fields("victim01", "admin"));

        assert_eq!(
            captured(&buffer),
            "Received request: GET /?hostname=victim01&username=admin\n  \
             hostname: victim01\n  username: admin\n"
        );
    }

    #[test]
    fn colored_output_wraps_labels() {
        let buffer = SharedBuffer::default();
        let console = Console::with_writer(Box::new(buffer.clone()), true);

        let uri: Uri = "/".parse().unwrap();
        console.log_callback(&Method::GET, &uri, &fields("", ""));

        let output = captured(&buffer);
        assert!(output.contains("\x1b[32mReceived request:\x1b[0m"));
        assert!(output.contains("\x1b[33mGET /\x1b[0m"));
        assert!(output.contains("\x1b[35mhostname:\x1b[0m"));
        assert!(output.contains("\x1b[35musername:\x1b[0m"));
    }

    #[test]
    fn empty_fields_render_as_empty_strings() {
        let buffer = SharedBuffer::default();
        let console = Console::with_writer(Box::new(buffer.clone()), false);

        let uri: Uri = "/".parse().unwrap();
        console.log_callback(&Method::POST, &uri, &fields("", ""));

        assert_eq!(
            captured(&buffer),
            "Received request: POST /\n  hostname: \n  username: \n"
        );
    }

    #[test]
    fn clones_share_one_writer() {
        let buffer = SharedBuffer::default();
        let console = Console::with_writer(Box::new(buffer.clone()), false);
        let clone = console.clone();

        let uri: Uri = "/".parse().unwrap();
        console.log_callback(&Method::GET, &uri, &fields("a", "b"));
        clone.log_callback(&Method::GET, &uri, &fields("c", "d"));

        let output = captured(&buffer);
        assert!(output.contains("hostname: a"));
        assert!(output.contains("hostname: c"));
    }
}
