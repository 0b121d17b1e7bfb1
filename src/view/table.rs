//! テキスト表

/// セルの最大表示幅（文字数）
pub const MAX_CELL_WIDTH: usize = 40;

/// 文字数で切り詰める（超過分は「…」）
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// ヘッダー付きの表を文字列にする
///
/// 改行はスペースに置き換え、各列を最長セルに揃える。
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let clean = |s: &str| truncate(&s.replace(['\r', '\n'], " "), MAX_CELL_WIDTH);

    let headers: Vec<String> = headers.iter().map(|h| clean(h)).collect();
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.iter().map(|c| clean(c)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let format_line = |cells: &[String]| -> String {
        widths
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let pad = w - cell.chars().count();
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let separator = widths
        .iter()
        .map(|&w| "-".repeat(w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = vec![format_line(&headers), separator];
    lines.extend(rows.iter().map(|r| format_line(r)));
    lines.join("\n")
}
