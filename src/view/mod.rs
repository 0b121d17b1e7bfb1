//! 端末表示
//!
//! 概要・省庁別件数・事業一覧・類似事業を文字列に整形する。

pub mod chart;
pub mod table;

use project_analysis_common::{MinistryReport, MinistrySummary, Overview, SimilarityOutcome};

/// プレビュー表（先頭列に行番号）
pub fn render_preview(overview: &Overview) -> String {
    let mut headers = vec!["#".to_string()];
    headers.extend(overview.columns.iter().cloned());

    let rows: Vec<Vec<String>> = overview
        .preview
        .iter()
        .map(|row| {
            let mut cells = vec![row.index.to_string()];
            cells.extend((0..overview.columns.len()).map(|i| row.cell(i).to_string()));
            cells
        })
        .collect();

    table::render_table(&headers, &rows)
}

/// 省庁別件数のグラフ、または省庁列がない旨
pub fn render_ministries(summary: &MinistrySummary) -> String {
    match summary {
        MinistrySummary::MissingColumn { column } => {
            format!("データに '{}' 列がありません", column)
        }
        MinistrySummary::Counts { counts } if counts.is_empty() => {
            "省庁が入力された行がありません".to_string()
        }
        MinistrySummary::Counts { counts } => chart::render_bar_chart(counts, chart::BAR_WIDTH),
    }
}

/// 省庁の事業一覧（事業内容・金額）
pub fn render_projects(report: &MinistryReport, columns: (&str, &str)) -> String {
    let headers = vec!["#".to_string(), columns.0.to_string(), columns.1.to_string()];
    let rows: Vec<Vec<String>> = report
        .projects
        .iter()
        .map(|p| {
            vec![
                p.row.to_string(),
                p.item_description.clone().unwrap_or_default(),
                p.amount.to_string(),
            ]
        })
        .collect();

    table::render_table(&headers, &rows)
}

/// 類似事業の表、または見つからなかった旨
pub fn render_similarity(report: &MinistryReport) -> String {
    let pairs = match &report.similarity {
        SimilarityOutcome::InsufficientData { .. } => {
            return "この省庁には類似判定に必要な事業数（2件以上）がありません".to_string();
        }
        SimilarityOutcome::Pairs { pairs } if pairs.is_empty() => {
            return "類似事業は見つかりませんでした".to_string();
        }
        SimilarityOutcome::Pairs { pairs } => pairs,
    };

    let headers: Vec<String> = ["行1", "事業1", "行2", "事業2", "類似度"]
        .iter()
        .map(|h| h.to_string())
        .collect();

    let row_of = |index: usize| {
        report
            .project(index)
            .map(|p| p.row.to_string())
            .unwrap_or_default()
    };

    let rows: Vec<Vec<String>> = pairs
        .iter()
        .map(|pair| {
            vec![
                row_of(pair.index_a),
                pair.description_a.clone(),
                row_of(pair.index_b),
                pair.description_b.clone(),
                format!("{:.3}", pair.score),
            ]
        })
        .collect();

    format!("類似事業: {}組\n{}", pairs.len(), table::render_table(&headers, &rows))
}
