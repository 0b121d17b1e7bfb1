//! 類似事業の検出
//!
//! 1つの省庁に絞り込んだ事業内容の集合について、TF-IDFのコサイン類似度で
//! 重複に近い組を探す。
//!
//! ## 処理フロー
//! 1. 欠損した事業内容を空文字列に正規化
//! 2. 集合内だけでTF-IDFを作成
//! 3. N×Nのコサイン類似度を計算
//! 4. 各事業について自分自身を含む上位 `top_k` 件を候補にする
//! 5. 自分以外で閾値を超えた候補を出力（対称化・重複除去はしない）

pub mod tfidf;

use crate::error::{Error, Result};
use serde::Serialize;
use tfidf::TfidfMatrix;

/// 類似検出パラメータ
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityParams {
    /// この値を超えた組を出力
    pub threshold: f64,
    /// 各事業の候補数（自分自身を含む）
    pub top_k: usize,
}

impl Default for SimilarityParams {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            top_k: 3,
        }
    }
}

impl SimilarityParams {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidParams(format!(
                "閾値は0.0〜1.0で指定してください: {}",
                self.threshold
            )));
        }
        if self.top_k == 0 {
            return Err(Error::InvalidParams("候補数は1以上で指定してください".into()));
        }
        Ok(())
    }
}

/// 類似した事業の組
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityPair {
    /// 入力集合での位置
    pub index_a: usize,
    pub index_b: usize,
    pub description_a: String,
    pub description_b: String,
    pub score: f64,
}

/// 検出結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SimilarityOutcome {
    /// 事業が2件未満のため比較しなかった
    InsufficientData { count: usize },
    Pairs { pairs: Vec<SimilarityPair> },
}

impl SimilarityOutcome {
    pub fn pairs(&self) -> &[SimilarityPair] {
        match self {
            SimilarityOutcome::InsufficientData { .. } => &[],
            SimilarityOutcome::Pairs { pairs } => pairs,
        }
    }

    pub fn into_pairs(self) -> Vec<SimilarityPair> {
        match self {
            SimilarityOutcome::InsufficientData { .. } => Vec::new(),
            SimilarityOutcome::Pairs { pairs } => pairs,
        }
    }
}

/// 欠損した事業内容を空文字列にする
pub fn normalize_descriptions<S: AsRef<str>>(descriptions: &[Option<S>]) -> Vec<String> {
    descriptions
        .iter()
        .map(|d| d.as_ref().map(|s| s.as_ref().to_string()).unwrap_or_default())
        .collect()
}

/// 類似検出を実行する
///
/// 2件未満なら計算せず `InsufficientData` を返す。
pub fn detect<S: AsRef<str>>(
    descriptions: &[Option<S>],
    params: &SimilarityParams,
) -> SimilarityOutcome {
    if descriptions.len() < 2 {
        return SimilarityOutcome::InsufficientData {
            count: descriptions.len(),
        };
    }

    let texts = normalize_descriptions(descriptions);
    let matrix = TfidfMatrix::fit_transform(&texts);
    tracing::debug!(
        documents = texts.len(),
        vocabulary = matrix.vocabulary().len(),
        "TF-IDF作成"
    );

    let similarities = matrix.cosine_matrix();
    let mut pairs = Vec::new();

    for (i, row) in similarities.iter().enumerate() {
        for j in top_candidates(row, params.top_k) {
            if i != j && row[j] > params.threshold {
                pairs.push(SimilarityPair {
                    index_a: i,
                    index_b: j,
                    description_a: texts[i].clone(),
                    description_b: texts[j].clone(),
                    score: row[j],
                });
            }
        }
    }

    SimilarityOutcome::Pairs { pairs }
}

/// 類似した事業の組を返す（2件未満は空）
pub fn find_similar_pairs<S: AsRef<str>>(
    descriptions: &[Option<S>],
    params: &SimilarityParams,
) -> Vec<SimilarityPair> {
    detect(descriptions, params).into_pairs()
}

/// 類似度の高い順に上位k件の位置を返す
///
/// 同点は位置の大きい方を先にする。
fn top_candidates(row: &[f64], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..row.len()).collect();
    order.sort_by(|&a, &b| row[b].total_cmp(&row[a]).then(b.cmp(&a)));
    order.truncate(k);
    order
}
