//! 列スキーマの検査
//!
//! 解析に使う列（省庁・事業内容・金額）を最初にまとめて解決し、
//! 欠けていれば `SchemaMismatch` を返す。

use crate::error::SchemaMismatch;
use crate::table::{CellValue, ProjectTable, Row};
use serde::{Deserialize, Serialize};

/// 解析に使う列名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnNames {
    pub ministry: String,
    pub description: String,
    pub amount: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            ministry: "MINISTRY".into(),
            description: "ITEM_DESCRIPTION".into(),
            amount: "AMOUNT".into(),
        }
    }
}

/// 列位置を1つ解決
pub fn require_column(table: &ProjectTable, name: &str) -> Result<usize, SchemaMismatch> {
    table.column_index(name).ok_or_else(|| SchemaMismatch {
        missing: vec![name.to_string()],
    })
}

/// 解決済みの列位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub ministry: usize,
    pub description: usize,
    pub amount: usize,
}

impl Schema {
    /// 3列すべてを解決する。不足列は省庁・事業内容・金額の順に列挙
    pub fn resolve(table: &ProjectTable, names: &ColumnNames) -> Result<Self, SchemaMismatch> {
        let lookup = |name: &str| table.column_index(name);

        match (
            lookup(&names.ministry),
            lookup(&names.description),
            lookup(&names.amount),
        ) {
            (Some(ministry), Some(description), Some(amount)) => Ok(Self {
                ministry,
                description,
                amount,
            }),
            (ministry, description, amount) => {
                let missing = [
                    (ministry, &names.ministry),
                    (description, &names.description),
                    (amount, &names.amount),
                ]
                .into_iter()
                .filter(|(index, _)| index.is_none())
                .map(|(_, name)| name.clone())
                .collect();
                Err(SchemaMismatch { missing })
            }
        }
    }

    /// 行を事業レコードとして読む
    pub fn record(&self, row: &Row) -> ProjectRecord {
        ProjectRecord {
            row: row.index,
            ministry: row.cell(self.ministry).to_string(),
            item_description: row.cell(self.description).as_text(),
            amount: row.cell(self.amount).clone(),
        }
    }
}

/// 事業レコード（省庁・事業内容・金額）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// 元テーブルでの行番号
    pub row: usize,
    pub ministry: String,
    pub item_description: Option<String>,
    pub amount: CellValue,
}
