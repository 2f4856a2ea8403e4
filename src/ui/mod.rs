//! HTML presentation layer
//!
//! Server-rendered pages: a sidebar listing the View / Add / Delete / Search
//! screens of every table, and a content area with a form, a notice and
//! (for searches and listings) a result table.

pub mod forms;
pub mod screens;
pub mod table;

pub use forms::{FieldKind, FormField};
pub use screens::Screens;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::models::Table;

pub const APP_TITLE: &str = "Car Fleet Management Database";

/// The four screens offered for each table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    View,
    Add,
    Delete,
    Search,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::View,
        Operation::Add,
        Operation::Delete,
        Operation::Search,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::View => "View Data",
            Operation::Add => "Add Data",
            Operation::Delete => "Delete Data",
            Operation::Search => "Search Data",
        }
    }

    /// Verb used in headings and button captions
    pub fn verb(self) -> &'static str {
        match self {
            Operation::View => "View",
            Operation::Add => "Add",
            Operation::Delete => "Delete",
            Operation::Search => "Search",
        }
    }

    pub fn path(self, table: Table) -> String {
        match self {
            Operation::View => format!("/{}", table.slug()),
            Operation::Add => format!("/{}/add", table.slug()),
            Operation::Delete => format!("/{}/delete", table.slug()),
            Operation::Search => format!("/{}/search", table.slug()),
        }
    }
}

/// Feedback shown above a form
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    fn render(&self) -> String {
        let (class, text) = match self {
            Notice::Success(text) => ("success", text),
            Notice::Warning(text) => ("warning", text),
            Notice::Error(text) => ("error", text),
        };
        format!(r#"<p class="notice {}">{}</p>"#, class, escape(text))
    }
}

/// Escape text for use in HTML content and attribute values
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

fn sidebar(current: Option<(Operation, Table)>) -> String {
    let mut html = String::from("<nav>");
    for operation in Operation::ALL {
        html.push_str(&format!("<h3>{}</h3><ul>", operation.label()));
        for table in Table::ALL {
            let marker = if current == Some((operation, table)) {
                r#" aria-current="page""#
            } else {
                ""
            };
            html.push_str(&format!(
                r#"<li><a href="{}"{}>{}</a></li>"#,
                operation.path(table),
                marker,
                table.label()
            ));
        }
        html.push_str("</ul>");
    }
    html.push_str("</nav>");
    html
}

/// Full HTML document
pub fn page(
    heading: &str,
    current: Option<(Operation, Table)>,
    notice: Option<&Notice>,
    content: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - {heading}</title>
</head>
<body>
<h1>{title}</h1>
{sidebar}
<main>
<h2>{heading}</h2>
{notice}
{content}
</main>
</body>
</html>
"#,
        title = APP_TITLE,
        heading = escape(heading),
        sidebar = sidebar(current),
        notice = notice.map(Notice::render).unwrap_or_default(),
        content = content,
    )
}

/// Page wrapped in a response with the given status
pub fn respond(status: StatusCode, html: String) -> Response {
    (status, Html(html)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"O'Brien" & co</b>"#),
            "&lt;b&gt;&quot;O&#39;Brien&quot; &amp; co&lt;/b&gt;"
        );
    }

    #[test]
    fn test_page_links_every_screen() {
        let html = page("Home", None, None, "");
        for operation in Operation::ALL {
            for table in Table::ALL {
                assert!(html.contains(&format!(r#"href="{}""#, operation.path(table))));
            }
        }
    }

    #[test]
    fn test_page_marks_current_screen_and_escapes_notice() {
        let notice = Notice::Error("<script>".to_string());
        let html = page(
            "Add Trip",
            Some((Operation::Add, Table::Trip)),
            Some(&notice),
            "",
        );
        assert!(html.contains(r#"<a href="/trips/add" aria-current="page">Trip</a>"#));
        assert!(html.contains(r#"<p class="notice error">&lt;script&gt;</p>"#));
    }
}
