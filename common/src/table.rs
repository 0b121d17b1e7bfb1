//! 事業テーブルの型定義
//!
//! - CellValue: セル値（空・文字列・数値・真偽値）
//! - Row: 読み込み時の行番号を保持した1行
//! - ProjectTable: 列名と行の並び（読み込み後は不変）

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// セル値
///
/// 日付などの型付きセルは表示文字列として保持する。
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// 文字列セルを生成（空文字列は欠損扱い）
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// 数値として取得
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// 表示文字列（欠損はNone）
    ///
    /// カテゴリ比較と説明文の取り出しに使う。
    pub fn as_text(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => {
                // 整数値は小数部を出さない
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// テーブルの1行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// 読み込み時の行番号（0始まり、ヘッダー除く）
    pub index: usize,
    pub cells: Vec<CellValue>,
}

impl Row {
    /// 列位置のセル（範囲外は空）
    pub fn cell(&self, column: usize) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }
}

/// 事業テーブル
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl ProjectTable {
    /// 列名と行データからテーブルを作成
    ///
    /// 列数に満たない行は空セルで埋める。
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, mut cells)| {
                if cells.len() < width {
                    cells.resize(width, CellValue::Empty);
                }
                Row { index, cells }
            })
            .collect();

        Self { columns, rows }
    }

    /// シートのセル格子からテーブルを作成
    ///
    /// 最初の空でない行をヘッダーとし、全セルが空の行は読み飛ばす。
    pub fn from_grid<I>(grid: I) -> Self
    where
        I: IntoIterator<Item = Vec<CellValue>>,
    {
        let mut lines = grid
            .into_iter()
            .filter(|row| row.iter().any(|c| !c.is_empty()));

        let header = match lines.next() {
            Some(header) => header,
            None => return Self::default(),
        };

        let body: Vec<Vec<CellValue>> = lines.collect();
        let width = body
            .iter()
            .map(|r| r.len())
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);

        Self::new(normalize_headers(&header, width), body)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 列名から列位置を取得（完全一致）
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// 先頭n行
    pub fn head(&self, n: usize) -> &[Row] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// 同じ列構成で行の部分集合を作る（行番号は元のまま）
    pub(crate) fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }
}

/// ヘッダー行を列名に変換
///
/// - 空セル → `Unnamed: {列位置}`
/// - 重複 → `名前.1`, `名前.2`, ...
pub fn normalize_headers(header: &[CellValue], width: usize) -> Vec<String> {
    let mut used = HashSet::new();
    let mut names = Vec::with_capacity(width);

    for i in 0..width {
        let base = match header.get(i) {
            Some(cell) if !cell.is_empty() => cell.to_string(),
            _ => format!("Unnamed: {}", i),
        };

        let mut name = base.clone();
        let mut suffix = 0;
        while used.contains(&name) {
            suffix += 1;
            name = format!("{}.{}", base, suffix);
        }
        used.insert(name.clone());
        names.push(name);
    }

    names
}
