//! REST error value and its terminal rendering.
//!
//! The API answers failed requests with a JSON body carrying `code`,
//! `message`, `more_info` and `status`. [`RestError`] keeps those together
//! with the request line and renders them in one of two shapes: a coloured,
//! documentation-linked block when the output is an interactive terminal, or
//! the single line `HTTP <status> error: <message>` that log scrapers match on.

use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use std::io::IsTerminal;

/// Host of the error documentation linked from rendered errors.
pub const DOCS_DOMAIN: &str = "www.signalwire.com";

const RED: u8 = 31;
const WHITE: u8 = 37;
const BLUE: u8 = 34;
const TEAL: u8 = 36;

/// Anything that can say whether it is attached to an interactive terminal.
///
/// Implemented for the process stdout/stderr handles; tests provide doubles.
pub trait TerminalProbe {
    fn is_interactive(&self) -> bool;
}

impl TerminalProbe for std::io::Stderr {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}

impl TerminalProbe for std::io::Stdout {
    fn is_interactive(&self) -> bool {
        self.is_terminal()
    }
}

/// A request the server rejected with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestError {
    pub status: u16,
    pub method: String,
    pub uri: String,
    pub message: String,
    pub code: Option<u32>,
    pub more_info: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<u32>,
    message: Option<String>,
    more_info: Option<String>,
}

impl RestError {
    pub fn new(status: u16, method: impl Into<String>, uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            method: method.into(),
            uri: uri.into(),
            message: message.into(),
            code: None,
            more_info: None,
        }
    }

    pub fn with_code(mut self, code: u32) -> Self {
        self.code = Some(code);
        self
    }

    /// Build from a failed response body. Non-JSON bodies are kept verbatim;
    /// an empty body falls back to the status reason phrase.
    pub fn from_response(status: StatusCode, method: &str, uri: &str, body: &str) -> Self {
        let fallback = || {
            if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                body.to_string()
            }
        };

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => Self {
                status: status.as_u16(),
                method: method.to_string(),
                uri: uri.to_string(),
                message: parsed
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(fallback),
                code: parsed.code,
                more_info: parsed.more_info,
            },
            Err(_) => Self::new(status.as_u16(), method, uri, fallback()),
        }
    }

    /// Documentation page for this error's code, if it has one.
    pub fn docs_url(&self) -> Option<String> {
        self.code.map(docs_url)
    }

    /// Render for the given output stream.
    pub fn render(&self, stream: &impl TerminalProbe) -> String {
        if stream.is_interactive() {
            self.render_interactive()
        } else {
            self.render_plain()
        }
    }

    pub fn render_plain(&self) -> String {
        format!("HTTP {} error: {}", self.status, self.message)
    }

    pub fn render_interactive(&self) -> String {
        let mut out = format!(
            "\n{} {}\n\n{}\n\n{}\n\n{}\n",
            paint(RED, "HTTP Error"),
            paint(WHITE, "Your request was:"),
            paint(TEAL, &format!("{} {}", self.method, self.uri)),
            paint(WHITE, "SignalWire returned the following information:"),
            paint(BLUE, &self.message),
        );
        if let Some(url) = self.docs_url() {
            out.push_str(&format!(
                "\n{}\n\n{}\n\n",
                paint(WHITE, "More information may be available here:"),
                paint(BLUE, &url),
            ));
        }
        out
    }
}

/// Renders against the process stderr, which is where these errors end up
/// when a caller lets them bubble out of `main`.
impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&std::io::stderr()))
    }
}

impl std::error::Error for RestError {}

pub fn docs_url(code: u32) -> String {
    format!("https://{DOCS_DOMAIN}/docs/errors/{code}")
}

// Foreground colour on the default background, then reset.
fn paint(fg: u8, text: &str) -> String {
    format!("\x1b[{fg}m\x1b[49m{text}\x1b[0m")
}
