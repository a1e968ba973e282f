//! HTML bodies for the admin notification and submitter confirmation of each
//! intake type. Markup is cosmetic; every piece of submitted text goes through
//! [`escape`] or [`multiline`] before it is interpolated.

use chrono::{DateTime, Utc};

pub mod appointment;
pub mod contact;
pub mod health_package;

/// Subject line and HTML body of one email, before addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

/// Escapes the five HTML-significant characters.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes free text and turns its line breaks into `<br>`.
pub fn multiline(text: &str) -> String {
    escape(text)
        .replace("\r\n", "\n")
        .replace('\n', "<br>")
}

/// Subject lines are single-line plain text.
pub fn subject_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn submitted_at(created_at: &DateTime<Utc>) -> String {
    created_at.format("%d %b %Y, %H:%M UTC").to_string()
}

/// One `Label: value` row of a detail table.
pub(crate) fn detail_row(label: &str, value: &str) -> String {
    format!(
        r#"<tr><td style="padding: 8px 0; border-bottom: 1px solid #e1e5ea;"><strong>{label}:</strong></td><td style="padding: 8px 0; border-bottom: 1px solid #e1e5ea;">{value}</td></tr>"#
    )
}
