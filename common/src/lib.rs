//! Project Analysis Common Library
//!
//! 事業テーブルの型・絞り込み・類似事業検出（入出力を含まない）

pub mod analysis;
pub mod error;
pub mod filter;
pub mod schema;
pub mod similarity;
pub mod table;

pub use analysis::{analyze_ministry, overview, AnalysisRequest, MinistryReport, MinistrySummary, Overview};
pub use error::{Error, Result, SchemaMismatch};
pub use filter::{category_counts, distinct_values, filter, CategoryCount};
pub use schema::{ColumnNames, ProjectRecord, Schema};
pub use similarity::{detect, find_similar_pairs, SimilarityOutcome, SimilarityPair, SimilarityParams};
pub use table::{CellValue, ProjectTable, Row};
