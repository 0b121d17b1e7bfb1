//! 横棒グラフ

use project_analysis_common::CategoryCount;

/// 棒の最大長
pub const BAR_WIDTH: usize = 40;

/// 件数を横棒グラフにする（最大件数を `width` 文字に合わせる）
pub fn render_bar_chart(counts: &[CategoryCount], width: usize) -> String {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    if max == 0 {
        return String::new();
    }

    let label_width = counts
        .iter()
        .map(|c| super::table::truncate(&c.value, 24).chars().count())
        .max()
        .unwrap_or(0);

    counts
        .iter()
        .map(|c| {
            let label = super::table::truncate(&c.value, 24);
            let pad = label_width - label.chars().count();
            let len = ((c.count as f64 / max as f64) * width as f64).round() as usize;
            let bar = "█".repeat(len.max(1));
            format!("{}{} {} {}", label, " ".repeat(pad), bar, c.count)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
