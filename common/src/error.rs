//! エラー型定義

use thiserror::Error;

/// 必須列の不足
///
/// 列名による暗黙の参照の代わりに、解析前にまとめて検査した結果を返す。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("必須列がありません: {}", missing.join(", "))]
pub struct SchemaMismatch {
    /// 見つからなかった列名（検査順）
    pub missing: Vec<String>,
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaMismatch),

    #[error("パラメータが不正: {0}")]
    InvalidParams(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
