//! 読み込みから類似検出までの統合テスト

mod common;

use common::{project_rows, write_workbook, Cell};
use project_analysis::{loader, selector, view};
use project_analysis_common::{
    analyze_ministry, filter, overview, AnalysisRequest, ColumnNames, Error, MinistrySummary,
    Schema, SimilarityOutcome, SimilarityParams,
};
use tempfile::tempdir;

fn load_projects() -> project_analysis_common::ProjectTable {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("projects.xlsx");
    write_workbook(&path, &[("Projects", project_rows())]);
    loader::load_workbook(&path, None).expect("読み込み失敗")
}

#[test]
fn test_overview_counts() {
    let table = load_projects();
    let ov = overview(&table, &ColumnNames::default(), 5);

    assert_eq!(ov.row_count, 6);
    assert_eq!(ov.preview.len(), 5);
    match &ov.ministries {
        MinistrySummary::Counts { counts } => {
            let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.value.as_str(), c.count)).collect();
            assert_eq!(pairs, vec![("Works", 3), ("Health", 2), ("Education", 1)]);
        }
        other => panic!("unexpected summary: {:?}", other),
    }
}

#[test]
fn test_filter_matches_counts() {
    let table = load_projects();
    let schema = Schema::resolve(&table, &ColumnNames::default()).unwrap();
    let ov = overview(&table, &ColumnNames::default(), 0);

    if let MinistrySummary::Counts { counts } = &ov.ministries {
        for count in counts {
            let subset = filter(&table, schema.ministry, &count.value);
            assert_eq!(subset.len(), count.count);
        }
    } else {
        panic!("省庁列があるはず");
    }
}

#[test]
fn test_similar_projects_in_works() {
    let table = load_projects();
    let request = AnalysisRequest { table: &table, selected_ministry: "Works" };
    let report = analyze_ministry(&request, &ColumnNames::default(), &SimilarityParams::default()).unwrap();

    let rows: Vec<(usize, usize)> = report
        .similarity
        .pairs()
        .iter()
        .map(|p| (report.project(p.index_a).unwrap().row, report.project(p.index_b).unwrap().row))
        .collect();

    // 元テーブルの行0と行2（道路）が相互に類似、椅子（行3）は出ない
    assert_eq!(rows, vec![(0, 2), (2, 0)]);
}

#[test]
fn test_similar_projects_in_health() {
    let table = load_projects();
    let request = AnalysisRequest { table: &table, selected_ministry: "Health" };
    let report = analyze_ministry(&request, &ColumnNames::default(), &SimilarityParams::default()).unwrap();

    let pairs = report.similarity.pairs();
    assert_eq!(pairs.len(), 2);
    assert!(pairs.iter().all(|p| p.index_a != p.index_b));
}

#[test]
fn test_single_project_is_insufficient() {
    let table = load_projects();
    let request = AnalysisRequest { table: &table, selected_ministry: "Education" };
    let report = analyze_ministry(&request, &ColumnNames::default(), &SimilarityParams::default()).unwrap();

    assert_eq!(report.similarity, SimilarityOutcome::InsufficientData { count: 1 });
    // 欠損した事業内容はNoneのまま保持
    assert_eq!(report.projects[0].item_description, None);
}

#[test]
fn test_repeated_analysis_is_identical() {
    let table = load_projects();
    let request = AnalysisRequest { table: &table, selected_ministry: "Works" };
    let params = SimilarityParams::default();

    let first = analyze_ministry(&request, &ColumnNames::default(), &params).unwrap();
    let second = analyze_ministry(&request, &ColumnNames::default(), &params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_no_ministry_column_suppresses_analysis() {
    use Cell::*;
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("no_ministry.xlsx");
    write_workbook(
        &path,
        &[(
            "Sheet1",
            vec![
                vec![S("DEPARTMENT"), S("ITEM_DESCRIPTION"), S("AMOUNT")],
                vec![S("Works"), S("build a road"), N(10.0)],
            ],
        )],
    );

    let table = loader::load_workbook(&path, None).unwrap();
    let ov = overview(&table, &ColumnNames::default(), 5);

    assert!(matches!(ov.ministries, MinistrySummary::MissingColumn { .. }));
    assert!(ov.ministries.choices().is_empty());
    // プレビューと列一覧は表示できる
    assert!(view::render_preview(&ov).contains("DEPARTMENT"));
    assert!(view::render_ministries(&ov.ministries).contains("MINISTRY"));
}

#[test]
fn test_custom_column_names() {
    use Cell::*;
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("custom.xlsx");
    write_workbook(
        &path,
        &[(
            "Sheet1",
            vec![
                vec![S("DEPARTMENT"), S("DESC"), S("BUDGET")],
                vec![S("Works"), S("build a road"), N(10.0)],
                vec![S("Works"), S("build a road in district 5"), N(20.0)],
            ],
        )],
    );

    let names = ColumnNames {
        ministry: "DEPARTMENT".into(),
        description: "DESC".into(),
        amount: "BUDGET".into(),
    };
    let table = loader::load_workbook(&path, None).unwrap();
    let request = AnalysisRequest { table: &table, selected_ministry: "Works" };
    let report = analyze_ministry(&request, &names, &SimilarityParams::default()).unwrap();

    assert_eq!(report.similarity.pairs().len(), 2);
}

#[test]
fn test_missing_detail_columns_is_schema_mismatch() {
    use Cell::*;
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("partial.xlsx");
    write_workbook(
        &path,
        &[(
            "Sheet1",
            vec![vec![S("MINISTRY"), S("NAME")], vec![S("Works"), S("road")]],
        )],
    );

    let table = loader::load_workbook(&path, None).unwrap();
    // 省庁別件数は出せる
    let ov = overview(&table, &ColumnNames::default(), 5);
    assert_eq!(ov.ministries.choices(), vec!["Works"]);

    let request = AnalysisRequest { table: &table, selected_ministry: "Works" };
    match analyze_ministry(&request, &ColumnNames::default(), &SimilarityParams::default()) {
        Err(Error::Schema(mismatch)) => {
            assert_eq!(mismatch.missing, vec!["ITEM_DESCRIPTION", "AMOUNT"]);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_ministry_choice_validation() {
    let table = load_projects();
    let ov = overview(&table, &ColumnNames::default(), 0);

    assert!(selector::validate_ministry("Health", &ov.ministries.choices()).is_ok());
    assert!(selector::validate_ministry("Defence", &ov.ministries.choices()).is_err());
}
