//! カテゴリ列による絞り込みと集計

use crate::table::ProjectTable;
use serde::Serialize;
use std::collections::HashMap;

/// カテゴリ値ごとの件数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// カテゴリ列が値に一致する行を抽出する
///
/// 行順と行番号は元のまま。欠損セルはどの値にも一致しない。
pub fn filter(table: &ProjectTable, column: usize, value: &str) -> ProjectTable {
    let rows = table
        .rows()
        .iter()
        .filter(|row| row.cell(column).as_text().as_deref() == Some(value))
        .cloned()
        .collect();

    table.with_rows(rows)
}

/// 選択肢として出すカテゴリ値（初出順、欠損除く）
pub fn distinct_values(table: &ProjectTable, column: usize) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    table
        .rows()
        .iter()
        .filter_map(|row| row.cell(column).as_text())
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// カテゴリ値ごとの件数（件数の多い順、同数は初出順）
pub fn category_counts(table: &ProjectTable, column: usize) -> Vec<CategoryCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in table.rows() {
        if let Some(value) = row.cell(column).as_text() {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    let mut result: Vec<CategoryCount> = distinct_values(table, column)
        .into_iter()
        .map(|value| {
            let count = counts.get(&value).copied().unwrap_or(0);
            CategoryCount { value, count }
        })
        .collect();

    // 安定ソートなので同数は初出順のまま
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}
