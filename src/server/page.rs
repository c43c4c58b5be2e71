//! HTML for the form page.

use crate::catalog::{CardRecord, MAX_QUANTITY};
use crate::catalog::import::COLUMNS;
use crate::preview::{self, escape};

/// Render the main page: entry form, delete and import controls, downloads,
/// and the card preview. `logo` is the configured logo key or path.
pub fn index(records: &[CardRecord], notice: Option<&str>, logo: &str) -> String {
    let options: String = records
        .iter()
        .map(|r| {
            let id = escape(&r.id);
            format!(
                r#"<option value="{id}">{id} · {title}</option>"#,
                id = id,
                title = escape(&r.fields.title)
            )
        })
        .collect();

    let notice = notice
        .map(|msg| format!(r#"<p class="notice">{}</p>"#, escape(msg)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-Hant">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Placard</title>
    <style>{page_css}{card_css}</style>
</head>
<body>
    <aside>
        <h1>Placard</h1>
        {notice}
        <form method="post" action="/cards">
            <label>作品名稱 <input name="title"></label>
            <label>作者 <input name="author"></label>
            <label>高 (cm) <input name="height"></label>
            <label>寬 (cm) <input name="width"></label>
            <label>創作媒材 <input name="medium"></label>
            <label>日期 <input name="date" type="date"></label>
            <label>Quantity <input name="quantity" type="number" min="1" max="{max_quantity}" value="1"></label>
            <button type="submit">Add Card</button>
        </form>
        <hr>
        <form method="post" action="/cards/delete">
            <label>Select Card <select name="id">{options}</select></label>
            <button type="submit">Delete Card</button>
        </form>
        <hr>
        <form method="post" action="/cards/import" enctype="multipart/form-data">
            <label>Import file <input name="file" type="file" accept=".csv,.tsv,.txt"></label>
            <p class="hint">Header columns: {columns}. Lines starting with # are ignored.</p>
            <button type="submit">Import</button>
        </form>
        <hr>
        <a class="button" href="/cards.pdf">Download PDF</a>
        <a class="button" href="/cards.html">Download HTML</a>
        <p class="hint">{count} card(s) · logo: {logo}</p>
    </aside>
    <main>{cards}</main>
</body>
</html>"#,
        page_css = PAGE_CSS,
        card_css = preview::CARD_CSS,
        notice = notice,
        options = options,
        columns = COLUMNS.join(", "),
        count = records.len(),
        logo = escape(logo),
        max_quantity = MAX_QUANTITY,
        cards = preview::card_list(records),
    )
}

const PAGE_CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    display: flex;
    gap: 24px;
    margin: 0;
    padding: 20px;
}

aside {
    width: 280px;
    flex-shrink: 0;
}

label {
    display: block;
    margin-bottom: 8px;
    font-size: 14px;
}

input, select {
    width: 100%;
    padding: 6px;
    box-sizing: border-box;
}

button, .button {
    display: block;
    width: 100%;
    margin: 8px 0;
    padding: 10px;
    text-align: center;
    border: none;
    border-radius: 6px;
    background: #4a5568;
    color: white;
    text-decoration: none;
    cursor: pointer;
    box-sizing: border-box;
}

.hint {
    color: #a0aec0;
    font-size: 13px;
}

.notice {
    color: #c53030;
}
"#;
