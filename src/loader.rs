//! ワークブック読み込み
//!
//! calamine でシートを読み、ProjectTable に変換する。
//! 読み込みエラーは変換せずにそのまま返す。

use crate::error::{AnalysisError, Result};
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use project_analysis_common::{CellValue, ProjectTable};
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// ファイルから読み込む
pub fn load_workbook(path: &Path, sheet: Option<&str>) -> Result<ProjectTable> {
    if !path.exists() {
        return Err(AnalysisError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let table = read_sheet(&mut workbook, sheet)?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "ワークブック読み込み完了"
    );
    Ok(table)
}

/// アップロードされたバイト列から読み込む
pub fn load_workbook_from_bytes(bytes: Vec<u8>, sheet: Option<&str>) -> Result<ProjectTable> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    read_sheet(&mut workbook, sheet)
}

fn read_sheet<RS: Read + Seek>(workbook: &mut Sheets<RS>, sheet: Option<&str>) -> Result<ProjectTable> {
    let names = workbook.sheet_names();

    let name = match sheet {
        Some(name) if names.iter().any(|n| n == name) => name.to_string(),
        Some(name) => {
            return Err(AnalysisError::SheetNotFound {
                name: name.to_string(),
                available: names,
            })
        }
        None => match names.first() {
            Some(first) => first.clone(),
            None => {
                tracing::warn!("シートがありません");
                return Ok(ProjectTable::default());
            }
        },
    };

    tracing::debug!(sheet = %name, "シート読み込み");
    let range = workbook.worksheet_range(&name)?;
    Ok(range_to_table(&range))
}

fn range_to_table(range: &Range<Data>) -> ProjectTable {
    ProjectTable::from_grid(
        range
            .rows()
            .map(|row| row.iter().map(convert_cell).collect::<Vec<_>>()),
    )
}

/// calamine のセルを CellValue に変換
///
/// エラーセルは欠損、日付などは表示文字列。
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::text(s.as_str()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::text(other.to_string()),
    }
}
