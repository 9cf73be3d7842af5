//! HTML document assembly.

use tweetime_models::{Block, PageLayout, Row, Section};

use super::{ChartRenderer, TextRenderer};

/// Style rules for the page: scrollable columns with thin scrollbars and
/// a CSS-only tab strip.
const PAGE_CSS: &str = r#"
body {
    margin: 0 auto;
    max-width: 1200px;
    padding: 20px;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    color: #212529;
}
.row {
    display: grid;
    margin-bottom: 20px;
}
.column {
    height: calc(100vh - 150px);
    overflow-y: hidden;
}
.column:hover {
    overflow-y: scroll;
}
.column img {
    max-width: 100%;
}
.block {
    padding: 8px 12px;
}
.tabs {
    display: flex;
    flex-wrap: wrap;
    border: 1px solid #dee2e6;
    border-radius: 4px;
}
.tabs > input {
    display: none;
}
.tabs > label {
    order: 1;
    padding: 8px 16px;
    cursor: pointer;
    border-bottom: 2px solid transparent;
}
.tabs > .tab-panel {
    order: 2;
    width: 100%;
    padding: 12px 16px;
    display: none;
}
.tabs > input:checked + label {
    border-bottom-color: #0d6efd;
    font-weight: bold;
}
.tabs > input:checked + label + .tab-panel {
    display: block;
}
blockquote {
    margin: 0 0 12px 0;
    padding: 4px 12px;
    border-left: 4px solid #dee2e6;
    color: #6c757d;
}
/* Works on Firefox */
* {
    scrollbar-width: thin;
}
/* Works on Chrome, Edge, and Safari */
*::-webkit-scrollbar {
    width: 7px;
}
*::-webkit-scrollbar-track {
    background: transparent;
}
*::-webkit-scrollbar-thumb {
    background-color: gray;
    border-radius: 20px;
    border: 2px;
}
"#;

/// Escapes text for use in HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders a composed page to a complete HTML5 document.
pub fn render_document(
    layout: &PageLayout,
    chart: &dyn ChartRenderer,
    text: &dyn TextRenderer,
) -> String {
    let sections: String = layout
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| render_section(i, section, text))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{session_title}</title>
    {head}
    <style>{css}</style>
</head>
<body>
    <h1>{title}</h1>
    {row}
    {chart}
    {sections}
</body>
</html>"#,
        session_title = escape_html(&layout.session_title),
        head = chart.head_markup(),
        css = PAGE_CSS,
        title = escape_html(&layout.title),
        row = render_row(&layout.row, text),
        chart = chart.render_chart(&layout.chart),
        sections = sections,
    )
}

fn render_row(row: &Row, text: &dyn TextRenderer) -> String {
    format!(
        r#"<div class="row" style="grid-template-columns: {template};">
        <div class="column" id="scope-left">{left}</div>
        <div></div>
        <div class="column" id="scope-right">{right}</div>
    </div>"#,
        template = escape_html(&row.grid_template()),
        left = render_block(&row.left, text),
        right = render_block(&row.right, text),
    )
}

fn render_block(block: &Block, text: &dyn TextRenderer) -> String {
    match block {
        Block::Markdown { text: md, style } => {
            let style = style
                .as_deref()
                .map(|s| format!(r#" style="{}""#, escape_html(s)))
                .unwrap_or_default();
            format!(
                r#"<div class="block"{}>{}</div>"#,
                style,
                text.render_markdown(md)
            )
        }
        Block::Image { src } => format!(r#"<img src="{}" alt="">"#, escape_html(src)),
    }
}

fn render_section(index: usize, section: &Section, text: &dyn TextRenderer) -> String {
    let group = format!("tabs-{}", index);
    let tabs: String = section
        .panels
        .iter()
        .enumerate()
        .map(|(i, panel)| {
            let id = format!("{}-{}", group, i);
            let body: String = panel
                .entries
                .iter()
                .map(|entry| text.render_untrusted(&entry.to_markdown()))
                .collect();
            format!(
                r#"<input type="radio" name="{group}" id="{id}"{checked}>
        <label for="{id}">{title}</label>
        <div class="tab-panel">{body}</div>
        "#,
                group = group,
                id = id,
                checked = if i == 0 { " checked" } else { "" },
                title = escape_html(&panel.title),
                body = body,
            )
        })
        .collect();

    format!(
        r#"<h3>{heading}</h3>
    <div class="tabs">
        {tabs}</div>"#,
        heading = escape_html(&section.heading),
        tabs = tabs,
    )
}
