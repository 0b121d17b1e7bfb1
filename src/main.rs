use clap::Parser;
use project_analysis::{cli, config, error, loader, selector, view};
use cli::{Cli, Commands, SimilarityArgs, WorkbookArgs};
use config::Config;
use error::Result;
use project_analysis_common::{
    analyze_ministry, overview, AnalysisRequest, MinistryReport, MinistrySummary, Overview,
    ProjectTable, SchemaMismatch, SimilarityParams,
};
use serde::Serialize;
use tracing::Level;

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// 省庁別の詳細（JSON出力用）
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
enum Detail {
    Report { report: MinistryReport },
    /// 事業内容・金額の列がない
    MissingColumns { missing: Vec<String> },
}

/// JSON出力用
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeOutput<'a> {
    overview: &'a Overview,
    detail: Option<Detail>,
}

fn load(workbook: &WorkbookArgs) -> Result<ProjectTable> {
    loader::load_workbook(&workbook.file, workbook.sheet.as_deref())
}

/// 設定値にコマンドライン指定を上書き
fn similarity_params(config: &Config, args: &SimilarityArgs) -> Result<SimilarityParams> {
    let defaults = config.similarity_params();
    let params = SimilarityParams {
        threshold: args.threshold.unwrap_or(defaults.threshold),
        top_k: args.top_k.unwrap_or(defaults.top_k),
    };
    params.validate()?;
    Ok(params)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_report(report: &MinistryReport, config: &Config) {
    println!("\n■ {} の事業と予算", report.ministry);
    let columns = (config.columns.description.as_str(), config.columns.amount.as_str());
    println!("{}", view::render_projects(report, columns));

    println!("\n■ 省庁内の類似事業");
    println!("{}", view::render_similarity(report));
}

fn main() {
    if let Err(e) = run() {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { workbook, ministry, similarity, rows, json } => {
            let params = similarity_params(&config, &similarity)?;
            let table = load(&workbook)?;
            let ov = overview(&table, &config.columns, rows.unwrap_or(config.preview_rows));

            if !json {
                println!("📊 project-analysis - 事業データ解析\n");
                println!("■ データプレビュー（{}行中）", ov.row_count);
                println!("{}\n", view::render_preview(&ov));
                println!("列: {}\n", ov.columns.join(", "));
                println!("■ 省庁別の事業数");
                println!("{}", view::render_ministries(&ov.ministries));
            }

            let selected = match (&ov.ministries, ministry) {
                (MinistrySummary::MissingColumn { .. }, _) => None,
                (summary, Some(name)) => Some(selector::validate_ministry(&name, &summary.choices())?),
                (MinistrySummary::Counts { .. }, None) if json => None,
                (MinistrySummary::Counts { counts }, None) => {
                    println!();
                    selector::select_ministry_interactive(counts)?
                }
            };

            let detail = match selected {
                Some(name) => {
                    let request = AnalysisRequest { table: &table, selected_ministry: &name };
                    match analyze_ministry(&request, &config.columns, &params) {
                        Ok(report) => Some(Detail::Report { report }),
                        // 事業内容・金額の列がなければ詳細だけ出さない
                        Err(project_analysis_common::Error::Schema(mismatch)) => {
                            Some(Detail::MissingColumns { missing: mismatch.missing })
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                None => None,
            };

            if json {
                print_json(&AnalyzeOutput { overview: &ov, detail })?;
            } else {
                match detail {
                    Some(Detail::Report { report }) => print_report(&report, &config),
                    Some(Detail::MissingColumns { missing }) => {
                        println!("\n{}", SchemaMismatch { missing });
                    }
                    None => {}
                }
            }
        }

        Commands::Preview { workbook, rows } => {
            let table = load(&workbook)?;
            let ov = overview(&table, &config.columns, rows.unwrap_or(config.preview_rows));

            println!("■ データプレビュー（{}行中）", ov.row_count);
            println!("{}\n", view::render_preview(&ov));
            println!("列: {}", ov.columns.join(", "));
        }

        Commands::Ministries { workbook, json } => {
            let table = load(&workbook)?;
            let ov = overview(&table, &config.columns, 0);

            if json {
                print_json(&ov.ministries)?;
            } else {
                println!("■ 省庁別の事業数");
                println!("{}", view::render_ministries(&ov.ministries));
            }
        }

        Commands::Similar { workbook, ministry, similarity, json } => {
            let params = similarity_params(&config, &similarity)?;
            let table = load(&workbook)?;
            let ov = overview(&table, &config.columns, 0);

            if let MinistrySummary::MissingColumn { .. } = ov.ministries {
                if json {
                    print_json(&ov.ministries)?;
                } else {
                    println!("{}", view::render_ministries(&ov.ministries));
                }
                return Ok(());
            }
            let name = selector::validate_ministry(&ministry, &ov.ministries.choices())?;

            let request = AnalysisRequest { table: &table, selected_ministry: &name };
            let report = analyze_ministry(&request, &config.columns, &params)?;

            if json {
                print_json(&report)?;
            } else {
                println!("■ {} の類似事業", report.ministry);
                println!("{}", view::render_similarity(&report));
            }
        }

        Commands::Config { show, set_threshold, set_top_k, set_preview_rows } => {
            let mut config = config;
            let changed = set_threshold.is_some() || set_top_k.is_some() || set_preview_rows.is_some();

            if set_threshold.is_some() || set_top_k.is_some() {
                config.set_similarity(set_threshold, set_top_k)?;
            }
            if let Some(rows) = set_preview_rows {
                config.set_preview_rows(rows)?;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  閾値: {}", config.threshold);
                println!("  候補数: {}", config.top_k);
                println!("  プレビュー行数: {}", config.preview_rows);
                println!("  省庁列: {}", config.columns.ministry);
                println!("  事業内容列: {}", config.columns.description);
                println!("  金額列: {}", config.columns.amount);
            }
        }
    }

    Ok(())
}
