use crate::error::{AnalysisError, Result};
use project_analysis_common::{ColumnNames, SimilarityParams};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定ファイルの場所を上書きする環境変数
pub const CONFIG_ENV: &str = "PROJECT_ANALYSIS_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 類似判定の閾値
    pub threshold: f64,
    /// 各事業の候補数
    pub top_k: usize,
    /// プレビュー行数
    pub preview_rows: usize,
    pub columns: ColumnNames,
}

impl Default for Config {
    fn default() -> Self {
        let params = SimilarityParams::default();
        Self {
            threshold: params.threshold,
            top_k: params.top_k,
            preview_rows: 5,
            columns: ColumnNames::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（なければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), "設定読み込み");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        // 環境変数を優先
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let home = dirs::home_dir()
            .ok_or_else(|| AnalysisError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("project-analysis").join("config.json"))
    }

    pub fn similarity_params(&self) -> SimilarityParams {
        SimilarityParams {
            threshold: self.threshold,
            top_k: self.top_k,
        }
    }

    /// 閾値・候補数を検査して設定する
    pub fn set_similarity(&mut self, threshold: Option<f64>, top_k: Option<usize>) -> Result<()> {
        let params = SimilarityParams {
            threshold: threshold.unwrap_or(self.threshold),
            top_k: top_k.unwrap_or(self.top_k),
        };
        params.validate()?;

        self.threshold = params.threshold;
        self.top_k = params.top_k;
        Ok(())
    }

    pub fn set_preview_rows(&mut self, rows: usize) -> Result<()> {
        if rows == 0 {
            return Err(AnalysisError::Config("プレビュー行数は1以上で指定してください".into()));
        }
        self.preview_rows = rows;
        Ok(())
    }
}
