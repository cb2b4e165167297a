// src/render/mod.rs
use serde::Serialize;

use crate::process::lookup::Record;
use crate::verify::Outcome;

pub const MSG_SEARCHING: &str = "Searching...";
pub const MSG_EMPTY_QUERY: &str = "Please enter a Registration / Roll Number.";
pub const MSG_EMPTY_DATASET: &str = "No data found in sheet.";
pub const MSG_NETWORK: &str = "⚠️ Error fetching verification data. If this persists, consider using a server-side proxy to load the CSV.";
pub const MSG_NOT_FOUND_PREFIX: &str = "❌ No record found for ID: ";

/// Which of the three states the result region is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayKind {
    Info,
    Success,
    Error,
}

impl DisplayKind {
    /// Only success gets its own styling; info shares the error class.
    pub fn css_class(self) -> &'static str {
        match self {
            DisplayKind::Success => "result success",
            DisplayKind::Info | DisplayKind::Error => "result error",
        }
    }
}

/// One write to the result region: a kind plus ready-to-insert markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Display {
    pub kind: DisplayKind,
    pub html: String,
}

impl Display {
    fn new(kind: DisplayKind, html: impl Into<String>) -> Self {
        Self {
            kind,
            html: html.into(),
        }
    }

    /// Wrap in the result container.
    pub fn to_fragment(&self) -> String {
        format!(r#"<div class="{}">{}</div>"#, self.kind.css_class(), self.html)
    }
}

/// Replace the five HTML-special characters with entities.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn searching() -> Display {
    Display::new(DisplayKind::Info, MSG_SEARCHING)
}

fn record_html(r: &Record) -> String {
    format!(
        "✅ <strong>Degree Verified</strong><br><br>\n\
         <strong>Name:</strong> {}<br>\n\
         <strong>Degree:</strong> {}<br>\n\
         <strong>Concentration:</strong> {}<br>\n\
         <strong>Graduation Year:</strong> {}",
        escape_html(&r.name),
        escape_html(&r.degree),
        escape_html(&r.concentration),
        escape_html(&r.year),
    )
}

/// Final display for a settled submission. Every value that came from the
/// sheet or the user is escaped.
pub fn render(outcome: &Outcome) -> Display {
    match outcome {
        Outcome::Found(record) => Display::new(DisplayKind::Success, record_html(record)),
        Outcome::NotFound(id) => Display::new(
            DisplayKind::Error,
            format!("{}{}", MSG_NOT_FOUND_PREFIX, escape_html(id.as_str())),
        ),
        Outcome::EmptyQuery => Display::new(DisplayKind::Error, MSG_EMPTY_QUERY),
        Outcome::EmptyDataset => Display::new(DisplayKind::Error, MSG_EMPTY_DATASET),
        Outcome::NetworkFailure => Display::new(DisplayKind::Error, MSG_NETWORK),
    }
}
