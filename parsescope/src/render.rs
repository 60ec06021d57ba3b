// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering a [`RulePath`] for the output area.
//!
//! Each successive ancestor-to-descendant step adds one indent unit. The HTML
//! form also wraps every rule in a label whose class is the rule name, so the
//! path is colored by the same stylesheet that colors the document's regions.

use crate::config::{PathFormat, VizConfig};
use crate::path::RulePath;

/// Turns a completed path into the block of content shown in the output area.
pub trait PathRenderer: core::fmt::Debug {
    /// Render `path` as one block, replacing whatever was shown before.
    fn render(&self, path: &RulePath) -> String;
}

/// Plain text: one rule per line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRenderer {
    indent_unit: String,
}

impl TextRenderer {
    /// Renderer indenting with `indent_unit` per level.
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self {
            indent_unit: indent_unit.into(),
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(" ")
    }
}

impl PathRenderer for TextRenderer {
    fn render(&self, path: &RulePath) -> String {
        let mut out = String::new();
        for (depth, rule) in path.levels() {
            out.push_str(&self.indent_unit.repeat(depth));
            out.push_str(rule);
            out.push('\n');
        }
        out
    }
}

/// Markup: `<span class="Rule">Rule</span><br/>` per level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlRenderer {
    indent_unit: String,
}

impl HtmlRenderer {
    /// Renderer indenting with `indent_unit` per level. The unit is inserted
    /// verbatim, so entities such as `&nbsp;` are allowed.
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self {
            indent_unit: indent_unit.into(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new("&nbsp;")
    }
}

impl PathRenderer for HtmlRenderer {
    fn render(&self, path: &RulePath) -> String {
        let mut out = String::new();
        for (depth, rule) in path.levels() {
            let rule = escape_html(rule);
            out.push_str(&self.indent_unit.repeat(depth));
            out.push_str(r#"<span class=""#);
            out.push_str(&rule);
            out.push_str(r#"">"#);
            out.push_str(&rule);
            out.push_str("</span><br/>");
        }
        out
    }
}

/// Renderer selected by `config`.
pub fn renderer_for(config: &VizConfig) -> Box<dyn PathRenderer> {
    let unit = config.indent_unit();
    match config.format {
        PathFormat::Text => Box::new(TextRenderer::new(unit)),
        PathFormat::Html => Box::new(HtmlRenderer::new(unit)),
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
