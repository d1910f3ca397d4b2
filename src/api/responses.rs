//! 接口响应体
//!
//! 字段名即线上 JSON 字段名

use crate::models::{Category, Question};
use crate::services::CategoryMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    /// 列表接口不区分分类，始终为 null
    pub current_category: Option<Category>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub success: bool,
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: String,
}

impl From<Question> for CreateResponse {
    fn from(q: Question) -> Self {
        Self {
            success: true,
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Category,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// 为 null 时表示答题结束
    pub question: Option<Question>,
}

/// 统一的错误响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

/// 搜索请求体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}
