use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    /// 読み込みライブラリのエラーはそのまま表示する
    #[error("{0}")]
    Load(#[from] calamine::Error),

    #[error("シートが見つかりません: {name}（シート: {}）", available.join(", "))]
    SheetNotFound { name: String, available: Vec<String> },

    #[error("省庁が見つかりません: {name}（選択肢: {}）", choices.join(", "))]
    UnknownMinistry { name: String, choices: Vec<String> },

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] project_analysis_common::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
