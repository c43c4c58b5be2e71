//! # HTML Preview
//!
//! On-screen rendering of the catalog: one card-sized box per record, in
//! catalog order. This is a visual list, not the printed grid; the printed
//! sheet comes from [`crate::sheet`].

use crate::catalog::CardRecord;
use crate::sheet::render::card_lines;

/// Card styling shared by the preview page and the HTML snapshot.
pub const CARD_CSS: &str = r#"
.card-container {
    display: flex;
    flex-wrap: wrap;
    gap: 10mm;
}

.art-card {
    width: 105mm;
    height: 74.25mm;
    border: 1px solid #999;
    padding: 12mm 8mm;
    box-sizing: border-box;
    font-family: sans-serif;
    overflow: visible;
}

.card-id {
    color: #999;
    font-size: 8pt;
    font-family: monospace;
}

.card-text {
    font-size: 10pt;
    line-height: 1.4;
    margin-top: 6mm;
    white-space: pre-wrap;
}
"#;

/// Escape text for HTML element and attribute content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for a single card.
pub fn card(record: &CardRecord) -> String {
    let lines = card_lines(record)
        .iter()
        .map(|line| escape(line))
        .collect::<Vec<_>>()
        .join("<br>");

    format!(
        r#"<div class="art-card" id="card-{id}"><div class="card-id">{id}</div><div class="card-text">{lines}</div></div>"#,
        id = escape(&record.id),
        lines = lines,
    )
}

/// The card container with every record.
pub fn card_list(records: &[CardRecord]) -> String {
    let cards: String = records.iter().map(card).collect();
    format!(r#"<div class="card-container">{}</div>"#, cards)
}

/// Standalone HTML document of the catalog, for download.
pub fn snapshot_document(records: &[CardRecord]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="zh-Hant">
<head>
<meta charset="utf-8">
<title>Cards</title>
<style>{css}</style>
</head>
<body>
{cards}
</body>
</html>
"#,
        css = CARD_CSS,
        cards = card_list(records),
    )
}
