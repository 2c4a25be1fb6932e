//! Search form.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::format::escape_html;
use crate::view::Render;

/// Input placeholder.
pub const PLACEHOLDER: &str = "Search for companies (e.g., Apple, Microsoft, Tesla)...";
/// Button label when idle.
pub const LABEL_IDLE: &str = "Search";
/// Button label while searching.
pub const LABEL_BUSY: &str = "Searching...";

/// Snapshot of the form controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    /// Current input text.
    pub value: String,
    /// Input disabled.
    pub input_disabled: bool,
    /// Button disabled.
    pub button_disabled: bool,
    /// Button label.
    pub button_label: String,
    /// Inline error, while it is still visible.
    pub error: Option<String>,
}

impl Render for FormView {
    fn render_html(&self) -> String {
        let disabled = |yes: bool| if yes { " disabled" } else { "" };
        let mut out = format!(
            concat!(
                r#"<input type="text" id="searchInput" placeholder="{}" value="{}"{} />"#,
                r#"<button id="searchButton"{}>{}</button>"#
            ),
            escape_html(PLACEHOLDER),
            escape_html(&self.value),
            disabled(self.input_disabled),
            disabled(self.button_disabled),
            escape_html(&self.button_label)
        );
        if let Some(err) = &self.error {
            let _ = write!(
                out,
                r#"<div class="error-message">{}</div>"#,
                escape_html(err)
            );
        }
        out
    }

    fn render_text(&self) -> String {
        let mut out = format!("[{}] <{}>", self.value, self.button_label);
        if let Some(err) = &self.error {
            out.push('\n');
            out.push_str(err);
        }
        out
    }
}
