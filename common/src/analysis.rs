//! 解析パイプライン
//!
//! 画面の状態を持たず、読み込んだテーブルと選択された省庁を受け取って
//! 毎回最初から計算し直す。
//!
//! - overview: プレビュー・列一覧・省庁別件数
//! - analyze_ministry: 省庁の事業一覧と類似事業

use crate::error::Result;
use crate::filter::{category_counts, filter, CategoryCount};
use crate::schema::{require_column, ColumnNames, ProjectRecord, Schema};
use crate::similarity::{detect, SimilarityOutcome, SimilarityParams};
use crate::table::{ProjectTable, Row};
use serde::Serialize;

/// 省庁別の集計結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MinistrySummary {
    /// 省庁列がないため解析しない
    MissingColumn { column: String },
    Counts { counts: Vec<CategoryCount> },
}

impl MinistrySummary {
    /// 選択肢（件数の多い順）
    pub fn choices(&self) -> Vec<String> {
        match self {
            MinistrySummary::MissingColumn { .. } => Vec::new(),
            MinistrySummary::Counts { counts } => counts.iter().map(|c| c.value.clone()).collect(),
        }
    }
}

/// 読み込み直後に表示する概要
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub row_count: usize,
    pub columns: Vec<String>,
    pub preview: Vec<Row>,
    pub ministries: MinistrySummary,
}

/// 概要を作成
pub fn overview(table: &ProjectTable, names: &ColumnNames, preview_rows: usize) -> Overview {
    let ministries = match require_column(table, &names.ministry) {
        Ok(column) => MinistrySummary::Counts {
            counts: category_counts(table, column),
        },
        Err(_) => MinistrySummary::MissingColumn {
            column: names.ministry.clone(),
        },
    };

    Overview {
        row_count: table.len(),
        columns: table.columns().to_vec(),
        preview: table.head(preview_rows).to_vec(),
        ministries,
    }
}

/// 省庁単位の解析依頼
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    pub table: &'a ProjectTable,
    pub selected_ministry: &'a str,
}

/// 省庁単位の解析結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryReport {
    pub ministry: String,
    pub projects: Vec<ProjectRecord>,
    pub similarity: SimilarityOutcome,
}

impl MinistryReport {
    /// 類似組の位置に対応する事業レコード
    pub fn project(&self, index: usize) -> Option<&ProjectRecord> {
        self.projects.get(index)
    }
}

/// 選択された省庁の事業を抽出し、類似事業を検出する
///
/// 必須列が欠けていれば `Error::Schema`。
pub fn analyze_ministry(
    request: &AnalysisRequest<'_>,
    names: &ColumnNames,
    params: &SimilarityParams,
) -> Result<MinistryReport> {
    params.validate()?;
    let schema = Schema::resolve(request.table, names)?;

    let subset = filter(request.table, schema.ministry, request.selected_ministry);
    let projects: Vec<ProjectRecord> = subset.rows().iter().map(|r| schema.record(r)).collect();

    let descriptions: Vec<Option<&str>> = projects
        .iter()
        .map(|p| p.item_description.as_deref())
        .collect();
    let similarity = detect(&descriptions, params);

    tracing::info!(
        ministry = request.selected_ministry,
        projects = projects.len(),
        pairs = similarity.pairs().len(),
        "省庁解析完了"
    );

    Ok(MinistryReport {
        ministry: request.selected_ministry.to_string(),
        projects,
        similarity,
    })
}
