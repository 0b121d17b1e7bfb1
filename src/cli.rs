use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "project-analysis")]
#[command(about = "政府事業データの集計・類似事業検出ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 読み込むワークブック
#[derive(Args, Debug, Clone)]
pub struct WorkbookArgs {
    /// Excelファイル (.xlsx/.xls/.xlsm/.xlsb/.ods)
    #[arg(required = true)]
    pub file: PathBuf,

    /// シート名（省略時は先頭シート）
    #[arg(long)]
    pub sheet: Option<String>,
}

/// 類似検出パラメータ（省略時は設定ファイルの値）
#[derive(Args, Debug, Clone, Default)]
pub struct SimilarityArgs {
    /// 類似判定の閾値（0.0-1.0、デフォルト0.5）
    #[arg(long)]
    pub threshold: Option<f64>,

    /// 各事業の候補数（自分自身を含む、デフォルト3）
    #[arg(long)]
    pub top_k: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// プレビュー・省庁別件数・類似事業を順に表示
    Analyze {
        #[command(flatten)]
        workbook: WorkbookArgs,

        /// 省庁を指定（省略時は対話選択）
        #[arg(short, long)]
        ministry: Option<String>,

        #[command(flatten)]
        similarity: SimilarityArgs,

        /// プレビュー行数
        #[arg(short, long)]
        rows: Option<usize>,

        /// JSONで出力（対話選択しない）
        #[arg(long)]
        json: bool,
    },

    /// 先頭行と列一覧を表示
    Preview {
        #[command(flatten)]
        workbook: WorkbookArgs,

        /// プレビュー行数
        #[arg(short, long)]
        rows: Option<usize>,
    },

    /// 省庁別の事業数を表示
    Ministries {
        #[command(flatten)]
        workbook: WorkbookArgs,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 1つの省庁の類似事業を表示
    Similar {
        #[command(flatten)]
        workbook: WorkbookArgs,

        /// 省庁
        #[arg(short, long, required = true)]
        ministry: String,

        #[command(flatten)]
        similarity: SimilarityArgs,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 閾値を設定
        #[arg(long)]
        set_threshold: Option<f64>,

        /// 候補数を設定
        #[arg(long)]
        set_top_k: Option<usize>,

        /// プレビュー行数を設定
        #[arg(long)]
        set_preview_rows: Option<usize>,
    },
}
