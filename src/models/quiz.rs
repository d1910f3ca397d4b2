use super::question::deserialize_flexible_id;
use serde::Deserialize;

/// "全部分类"的哨兵值
pub const ALL_CATEGORIES: i64 = 0;

/// 答题请求体
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    /// 已经出过的题目 ID
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// 答题所选分类，`id == 0` 表示全部分类
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_frontend_payload() {
        let req: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [1, 4], "quiz_category": {"type": "Science", "id": "1"}}"#,
        )
        .unwrap();
        assert_eq!(req.previous_questions, vec![1, 4]);
        let category = req.quiz_category.unwrap();
        assert_eq!(category.id, 1);
        assert_eq!(category.kind.as_deref(), Some("Science"));
    }

    #[test]
    fn previous_questions_default_to_empty() {
        let req: QuizRequest =
            serde_json::from_str(r#"{"quiz_category": {"type": "click", "id": 0}}"#).unwrap();
        assert!(req.previous_questions.is_empty());
        assert_eq!(req.quiz_category.unwrap().id, ALL_CATEGORIES);
    }

    #[test]
    fn non_numeric_category_id_is_rejected() {
        let parsed: Result<QuizRequest, _> =
            serde_json::from_str(r#"{"quiz_category": {"id": "science"}}"#);
        assert!(parsed.is_err());
    }
}
