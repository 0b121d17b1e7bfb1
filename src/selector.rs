//! 省庁の選択
//!
//! `--ministry` 指定があれば選択肢と照合し、なければ対話式で選ばせる。

use crate::error::{AnalysisError, Result};
use dialoguer::Select;
use project_analysis_common::CategoryCount;

/// 指定された省庁を選択肢と照合
pub fn validate_ministry(name: &str, choices: &[String]) -> Result<String> {
    if choices.iter().any(|c| c == name) {
        Ok(name.to_string())
    } else {
        Err(AnalysisError::UnknownMinistry {
            name: name.to_string(),
            choices: choices.to_vec(),
        })
    }
}

/// 選択肢の表示ラベル
fn choice_label(count: &CategoryCount) -> String {
    format!("{} ({}件)", count.value, count.count)
}

/// 対話式で省庁を選択（件数の多い順、先頭が既定）
pub fn select_ministry_interactive(counts: &[CategoryCount]) -> Result<Option<String>> {
    if counts.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = counts.iter().map(choice_label).collect();
    let selection = Select::new()
        .with_prompt("省庁を選択してください")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|i| counts[i].value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<String> {
        vec!["Works".to_string(), "Health".to_string()]
    }

    #[test]
    fn test_validate_known_ministry() {
        assert_eq!(validate_ministry("Health", &choices()).unwrap(), "Health");
    }

    #[test]
    fn test_validate_unknown_ministry() {
        let err = validate_ministry("Defence", &choices()).unwrap_err();
        match &err {
            AnalysisError::UnknownMinistry { name, choices } => {
                assert_eq!(name, "Defence");
                assert_eq!(choices.len(), 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(format!("{}", err).contains("Works, Health"));
    }

    #[test]
    fn test_validate_is_exact() {
        assert!(validate_ministry("works", &choices()).is_err());
    }

    #[test]
    fn test_choice_label() {
        let count = CategoryCount { value: "Works".into(), count: 3 };
        assert_eq!(choice_label(&count), "Works (3件)");
    }

    #[test]
    fn test_no_choices_selects_nothing() {
        assert_eq!(select_ministry_interactive(&[]).unwrap(), None);
    }
}
