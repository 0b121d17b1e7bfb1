//! テスト用ワークブック生成

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// テスト用セル
pub enum Cell<'a> {
    S(&'a str),
    N(f64),
    Blank,
}

/// シート名と行データからxlsxを書き出す
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Cell>>)]) {
    let mut workbook = Workbook::new();

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();

        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::S(s) => {
                        worksheet.write_string(r as u32, c as u16, *s).unwrap();
                    }
                    Cell::N(n) => {
                        worksheet.write_number(r as u32, c as u16, *n).unwrap();
                    }
                    Cell::Blank => {}
                }
            }
        }
    }

    workbook.save(path).unwrap();
}

/// 省庁・事業内容・金額の標準データ
pub fn project_rows() -> Vec<Vec<Cell<'static>>> {
    use Cell::*;
    vec![
        vec![S("MINISTRY"), S("ITEM_DESCRIPTION"), S("AMOUNT"), S("YEAR")],
        vec![S("Works"), S("build a road"), N(1200.0), N(2024.0)],
        vec![S("Health"), S("new rural clinic"), N(800.0), N(2024.0)],
        vec![S("Works"), S("build a road in district 5"), N(1500.0), N(2024.0)],
        vec![S("Works"), S("buy office chairs"), N(30.5), N(2023.0)],
        vec![S("Education"), Blank, N(99.0), N(2023.0)],
        vec![S("Health"), S("new rural clinic wing"), N(400.0), N(2025.0)],
    ]
}
