use crate::utils::truncate_text;
use serde::{Deserialize, Serialize};

/// 题目记录（同时也是对外暴露的格式）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// 分类 ID，统一以字符串形式保存
    pub category: String,
    pub difficulty: i64,
}

impl Question {
    /// 是否属于指定分类（按字符串形式比较）
    pub fn in_category(&self, category_id: i64) -> bool {
        self.category == category_id.to_string()
    }

    /// 题干是否包含关键字（忽略大小写）
    pub fn matches_term(&self, term: &str) -> bool {
        self.question.to_lowercase().contains(&term.to_lowercase())
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} [分类 {}] {}",
            self.id,
            self.category,
            truncate_text(&self.question, 60)
        )
    }
}

/// 待写入的新题目，字段均已校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub id: Option<i64>,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i64,
}

/// 创建题目的请求体，所有字段允许缺失以便逐一校验
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_category")]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<i64>,
}

// 分类 ID 既可能是字符串也可能是整数
pub(crate) fn deserialize_optional_category<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct CategoryVisitor;

    impl<'de> Visitor<'de> for CategoryVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer category id")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.trim().to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(CategoryVisitor)
}

pub(crate) fn deserialize_category<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserialize_optional_category(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("category must not be null"))
}

/// 解析整数 ID，兼容 `"3"` 这类字符串形式
pub(crate) fn deserialize_flexible_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = deserialize_category(deserializer)?;
    raw.parse()
        .map_err(|_| serde::de::Error::custom(format!("invalid id: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_accepts_string_or_integer() {
        let from_int: CreateQuestionRequest =
            serde_json::from_str(r#"{"category": 4}"#).unwrap();
        let from_str: CreateQuestionRequest =
            serde_json::from_str(r#"{"category": "4"}"#).unwrap();
        assert_eq!(from_int.category.as_deref(), Some("4"));
        assert_eq!(from_str.category.as_deref(), Some("4"));
    }

    #[test]
    fn null_and_absent_fields_stay_empty() {
        let req: CreateQuestionRequest =
            serde_json::from_str(r#"{"question": null, "category": null}"#).unwrap();
        assert!(req.question.is_none());
        assert!(req.category.is_none());
        assert!(req.answer.is_none());
        assert!(req.difficulty.is_none());
    }

    #[test]
    fn term_match_ignores_case() {
        let q = Question {
            id: 1,
            question: "Hematology is a branch of medicine involving the study of what?".into(),
            answer: "Blood".into(),
            category: "1".into(),
            difficulty: 4,
        };
        assert!(q.matches_term("HEMATOLOGY"));
        assert!(!q.matches_term("geology"));
        assert!(q.in_category(1));
        assert!(!q.in_category(2));
    }

    #[test]
    fn display_truncates_long_question() {
        let q = Question {
            id: 7,
            question: "x".repeat(80),
            answer: "y".into(),
            category: "2".into(),
            difficulty: 1,
        };
        assert_eq!(q.to_string(), format!("#7 [分类 2] {}...", "x".repeat(60)));
    }
}
