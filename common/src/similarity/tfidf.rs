//! TF-IDFベクトル化
//!
//! 呼び出しごとに渡された文書集合だけで語彙を作り直す。
//!
//! - トークン: 小文字化後、`\b\w\w+\b` に一致する語（1文字語は除外）
//! - tf: 出現回数
//! - idf: `ln((1 + n) / (1 + df)) + 1`
//! - 各行をL2正規化（語がない行はゼロベクトル）

use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// 文書をトークン列に分割
pub fn tokenize(text: &str) -> Vec<String> {
    lazy_static::lazy_static! {
        static ref TOKEN_RE: Regex = Regex::new(r"\b\w\w+\b").unwrap();
    }

    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// 疎ベクトル（語彙番号昇順）
type SparseRow = Vec<(usize, f64)>;

/// TF-IDF行列
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    vocabulary: Vec<String>,
    rows: Vec<SparseRow>,
}

impl TfidfMatrix {
    /// 文書集合から語彙を作りベクトル化する
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let vocabulary: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let term_index: BTreeMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        // 語ごとの文書頻度
        let mut document_frequency = vec![0usize; vocabulary.len()];
        let term_counts: Vec<BTreeMap<usize, usize>> = tokenized
            .iter()
            .map(|tokens| {
                let mut counts = BTreeMap::new();
                for token in tokens {
                    *counts.entry(term_index[token.as_str()]).or_insert(0) += 1;
                }
                for term in counts.keys() {
                    document_frequency[*term] += 1;
                }
                counts
            })
            .collect();

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = term_counts
            .into_iter()
            .map(|counts| {
                let mut row: SparseRow = counts
                    .into_iter()
                    .map(|(term, count)| (term, count as f64 * idf[term]))
                    .collect();
                l2_normalize(&mut row);
                row
            })
            .collect();

        Self { vocabulary, rows }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// 全文書ペアのコサイン類似度（N×N、対称）
    ///
    /// ゼロベクトルを含む組は自分自身とでも0.0。値は[0, 1]に収める。
    pub fn cosine_matrix(&self) -> Vec<Vec<f64>> {
        let n = self.rows.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in i..n {
                let score = dot(&self.rows[i], &self.rows[j]).clamp(0.0, 1.0);
                matrix[i][j] = score;
                matrix[j][i] = score;
            }
        }

        matrix
    }
}

fn l2_normalize(row: &mut SparseRow) {
    let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in row.iter_mut() {
            *w /= norm;
        }
    }
}

/// 語彙番号昇順の疎ベクトル同士の内積
fn dot(a: &SparseRow, b: &SparseRow) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;

    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("Build a Road in District 5"), vec!["build", "road", "in", "district"]);
        assert_eq!(tokenize("x-ray, re-use"), vec!["ray", "re", "use"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("a b c 1").is_empty());
    }

    #[test]
    fn test_tokenize_unicode() {
        assert_eq!(tokenize("Réfection ÉCOLE"), vec!["réfection", "école"]);
    }

    #[test]
    fn test_vocabulary_is_per_call() {
        let a = TfidfMatrix::fit_transform(&["solar panels", "solar farm"]);
        let b = TfidfMatrix::fit_transform(&["water pipes"]);
        assert_eq!(a.vocabulary(), &["farm", "panels", "solar"]);
        assert_eq!(b.vocabulary(), &["pipes", "water"]);
    }

    #[test]
    fn test_self_similarity_is_one() {
        let m = TfidfMatrix::fit_transform(&["build a road", "buy office chairs", "road repair"]);
        let sim = m.cosine_matrix();
        for (i, row) in sim.iter().enumerate() {
            assert!((row[i] - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let m = TfidfMatrix::fit_transform(&["build a road", "build a road in district 5", "road"]);
        let sim = m.cosine_matrix();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(sim[i][j], sim[j][i]);
            }
        }
    }

    #[test]
    fn test_known_score() {
        // idf(build)=idf(road)=ln(4/3)+1, idf(in)=idf(district)=ln(2)+1
        let m = TfidfMatrix::fit_transform(&["build a road", "build a road in district 5", "buy office chairs"]);
        let sim = m.cosine_matrix();

        let shared = (4.0f64 / 3.0).ln() + 1.0;
        let unique = 2.0f64.ln() + 1.0;
        let expected = (2.0 * shared * shared)
            / ((2.0 * shared * shared).sqrt() * (2.0 * shared * shared + 2.0 * unique * unique).sqrt());

        assert!((sim[0][1] - expected).abs() < 1e-9);
        assert_eq!(sim[0][2], 0.0);
        assert_eq!(sim[1][2], 0.0);
    }

    #[test]
    fn test_empty_documents_are_zero_vectors() {
        let m = TfidfMatrix::fit_transform(&["", "", "project alpha"]);
        let sim = m.cosine_matrix();
        assert_eq!(sim[0][0], 0.0);
        assert_eq!(sim[0][1], 0.0);
        assert_eq!(sim[0][2], 0.0);
        assert!((sim[2][2] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_vocabulary() {
        let m = TfidfMatrix::fit_transform(&["", "a"]);
        assert!(m.vocabulary().is_empty());
        assert_eq!(m.cosine_matrix(), vec![vec![0.0, 0.0], vec![0.0, 0.0]]);
    }
}
