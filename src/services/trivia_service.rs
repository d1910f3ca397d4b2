/// 题库服务
///
/// 组合存储、分页、分类查询与抽题引擎，提供接口层需要的全部操作
use crate::error::{AppError, AppResult};
use crate::infrastructure::{QuestionFilter, RandomSource, TriviaStore};
use crate::models::{Category, CreateQuestionRequest, NewQuestion, Question, QuizRequest};
use crate::services::category_lookup::{all_categories, format_categories, CategoryMap};
use crate::services::pagination::{paginate, QUESTIONS_PER_PAGE};
use crate::services::quiz::QuizEngine;
use crate::utils::logging::truncate_text;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 题目列表的一页
#[derive(Debug, Clone)]
pub struct QuestionListing {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// 搜索结果
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub questions: Vec<Question>,
    /// 未分页的匹配总数
    pub total_questions: usize,
    /// 本页题目的分类
    pub current_category: Vec<String>,
}

/// 某分类下的全部题目
#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Category,
}

/// 题库服务
pub struct TriviaService {
    store: Arc<dyn TriviaStore>,
    quiz: QuizEngine,
}

impl TriviaService {
    /// 创建新的题库服务
    pub fn new(store: Arc<dyn TriviaStore>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            store,
            quiz: QuizEngine::new(random),
        }
    }

    pub fn store(&self) -> &dyn TriviaStore {
        self.store.as_ref()
    }

    /// 全部分类，没有任何分类时视为资源不存在
    pub fn list_categories(&self) -> AppResult<CategoryMap> {
        let categories = all_categories(self.store())?;
        if categories.is_empty() {
            return Err(AppError::NotFound("categories".to_string()));
        }
        Ok(categories)
    }

    /// 按 ID 顺序分页列出题目
    pub fn list_questions(&self, page: usize) -> AppResult<QuestionListing> {
        let all = self.store.questions(&QuestionFilter::all())?;
        let questions = paginate(page, QUESTIONS_PER_PAGE, &all);
        if questions.is_empty() {
            return Err(AppError::page_not_found(page));
        }

        Ok(QuestionListing {
            questions,
            total_questions: all.len(),
            categories: format_categories(&self.store.categories()?),
        })
    }

    /// 某分类下的全部题目（不分页）
    ///
    /// 有题目但分类记录缺失时无法处理
    pub fn questions_by_category(&self, category_id: i64) -> AppResult<CategoryQuestions> {
        let filter = QuestionFilter::all().category(category_id.to_string());
        let questions = self.store.questions(&filter)?;
        if questions.is_empty() {
            return Err(AppError::category_not_found(category_id));
        }

        let current_category = self.store.category(category_id)?.ok_or_else(|| {
            AppError::Unprocessable(format!(
                "分类 {} 下有 {} 道题目，但分类记录不存在",
                category_id,
                questions.len()
            ))
        })?;

        Ok(CategoryQuestions {
            total_questions: questions.len(),
            questions,
            current_category,
        })
    }

    /// 创建题目，任何字段缺失时不会写入
    pub fn create_question(&self, request: CreateQuestionRequest) -> AppResult<Question> {
        let new_question = self.validate_new_question(request)?;
        let question = self.store.insert_question(new_question)?;
        info!("✓ 新增题目 {}", question);
        Ok(question)
    }

    /// 删除题目，返回被删除的 ID
    pub fn delete_question(&self, id: i64) -> AppResult<i64> {
        match self.store.delete_question(id)? {
            Some(deleted) => {
                info!("🗑️ 删除题目 {}", deleted);
                Ok(deleted.id)
            }
            None => {
                warn!("⚠️ 删除失败，题目 {} 不存在", id);
                Err(AppError::question_not_found(id))
            }
        }
    }

    /// 按题干搜索（忽略大小写）
    ///
    /// 关键字为空或只有空白时匹配全部题目。没有任何匹配时返回空结果，
    /// 只有页码超出非空结果范围时才视为资源不存在
    pub fn search_questions(&self, term: Option<&str>, page: usize) -> AppResult<SearchOutcome> {
        let filter = match normalize_term(term) {
            Some(term) => QuestionFilter::all().term(term),
            None => QuestionFilter::all(),
        };
        let matches = self.store.questions(&filter)?;
        let questions = paginate(page, QUESTIONS_PER_PAGE, &matches);
        if questions.is_empty() && !matches.is_empty() {
            return Err(AppError::page_not_found(page));
        }

        debug!(
            "搜索 \"{}\": 共 {} 条，第 {} 页 {} 条",
            truncate_text(term.unwrap_or_default(), 40),
            matches.len(),
            page,
            questions.len()
        );

        let current_category = questions.iter().map(|q| q.category.clone()).collect();
        Ok(SearchOutcome {
            questions,
            total_questions: matches.len(),
            current_category,
        })
    }

    /// 答题：抽取下一道未出过的题目
    pub fn next_quiz_question(&self, request: QuizRequest) -> AppResult<Option<Question>> {
        let category = request
            .quiz_category
            .ok_or_else(|| AppError::BadRequest("缺少 quiz_category".to_string()))?;
        let previous: HashSet<i64> = request.previous_questions.into_iter().collect();
        self.quiz.next_question(self.store(), category.id, &previous)
    }

    fn validate_new_question(&self, request: CreateQuestionRequest) -> AppResult<NewQuestion> {
        let question = required_text(request.question, "question")?;
        let answer = required_text(request.answer, "answer")?;
        let category = request
            .category
            .filter(|c| !c.is_empty())
            .ok_or(AppError::MissingField { field: "category" })?;
        let difficulty = request
            .difficulty
            .ok_or(AppError::MissingField { field: "difficulty" })?;

        // 统一保存规范形式，`"06"` 与 `6` 指向同一分类
        let category = match category.trim().parse::<i64>() {
            Ok(id) if self.store.category(id)?.is_some() => id.to_string(),
            _ => return Err(AppError::UnknownCategory { category }),
        };

        Ok(NewQuestion {
            id: None,
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn required_text(value: Option<String>, field: &'static str) -> AppResult<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AppError::MissingField { field }),
    }
}

/// 空白关键字视为"不限"
pub fn normalize_term(term: Option<&str>) -> Option<&str> {
    term.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::{MemoryStore, SeededRandom};
    use crate::models::{QuizCategory, SeedData, SeedQuestion};

    fn service(question_count: i64) -> TriviaService {
        let questions = (1..=question_count)
            .map(|id| SeedQuestion {
                id: Some(id),
                question: if id == 1 {
                    "Hematology is a branch of medicine involving the study of what?".into()
                } else {
                    format!("Filler question number {}", id)
                },
                answer: "answer".into(),
                category: ((id % 2) + 1).to_string(),
                difficulty: 2,
            })
            .collect();
        let store = MemoryStore::from_seed(SeedData {
            categories: vec![
                Category { id: 1, kind: "Science".into() },
                Category { id: 2, kind: "Art".into() },
                Category { id: 3, kind: "Geography".into() },
            ],
            questions,
        })
        .unwrap();
        TriviaService::new(Arc::new(store), Arc::new(SeededRandom::new(3)))
    }

    fn full_request() -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: Some("What is your name".into()),
            answer: Some("Mohammed".into()),
            category: Some("3".into()),
            difficulty: Some(4),
        }
    }

    fn count(service: &TriviaService) -> usize {
        service.store().questions(&QuestionFilter::all()).unwrap().len()
    }

    #[test]
    fn listing_reports_total_and_categories() {
        let service = service(23);
        let listing = service.list_questions(3).unwrap();
        assert_eq!(listing.questions.len(), 3);
        assert_eq!(listing.total_questions, 23);
        assert_eq!(listing.categories.len(), 3);
        assert!(matches!(service.list_questions(4), Err(AppError::NotFound(_))));
    }

    #[test]
    fn empty_bank_has_no_first_page() {
        let service = service(0);
        assert!(matches!(service.list_questions(1), Err(AppError::NotFound(_))));
    }

    #[test]
    fn create_requires_every_field() {
        let service = service(5);
        let cases: Vec<(CreateQuestionRequest, &str)> = vec![
            (CreateQuestionRequest { question: None, ..full_request() }, "question"),
            (CreateQuestionRequest { answer: None, ..full_request() }, "answer"),
            (CreateQuestionRequest { category: None, ..full_request() }, "category"),
            (CreateQuestionRequest { difficulty: None, ..full_request() }, "difficulty"),
            (CreateQuestionRequest { question: Some("   ".into()), ..full_request() }, "question"),
        ];
        for (request, missing) in cases {
            match service.create_question(request) {
                Err(AppError::MissingField { field }) => assert_eq!(field, missing),
                other => panic!("expected missing {}, got {:?}", missing, other),
            }
        }
        assert_eq!(count(&service), 5);

        let created = service.create_question(full_request()).unwrap();
        assert_eq!(created.id, 6);
        assert_eq!(count(&service), 6);
    }

    #[test]
    fn create_stores_canonical_category() {
        let service = service(5);
        for raw in ["03", "+3", " 3"] {
            let request = CreateQuestionRequest {
                category: Some(raw.into()),
                ..full_request()
            };
            let created = service.create_question(request).unwrap();
            assert_eq!(created.category, "3", "input {:?}", raw);
        }
        let geography = service.questions_by_category(3).unwrap();
        assert_eq!(geography.total_questions, 3);
    }

    #[test]
    fn create_rejects_unknown_category() {
        let service = service(5);
        let request = CreateQuestionRequest {
            category: Some("42".into()),
            ..full_request()
        };
        assert!(matches!(
            service.create_question(request),
            Err(AppError::UnknownCategory { .. })
        ));
        assert_eq!(count(&service), 5);
    }

    #[test]
    fn delete_twice_is_not_found() {
        let service = service(5);
        assert_eq!(service.delete_question(4).unwrap(), 4);
        assert!(matches!(service.delete_question(4), Err(AppError::NotFound(_))));
        let listing = service.list_questions(1).unwrap();
        assert!(listing.questions.iter().all(|q| q.id != 4));
    }

    #[test]
    fn search_hits_and_misses() {
        let service = service(12);
        let hit = service.search_questions(Some("hematology is a branch"), 1).unwrap();
        assert_eq!(hit.total_questions, 1);
        assert_eq!(hit.current_category, vec!["2".to_string()]);

        let miss = service.search_questions(Some("kgkjgkjgk"), 1).unwrap();
        assert_eq!(miss.total_questions, 0);
        assert!(miss.questions.is_empty());
    }

    #[test]
    fn empty_search_term_matches_everything() {
        let service = service(12);
        for term in [None, Some(""), Some("   ")] {
            let outcome = service.search_questions(term, 1).unwrap();
            assert_eq!(outcome.total_questions, 12);
            assert_eq!(outcome.questions.len(), QUESTIONS_PER_PAGE);
        }
        let second = service.search_questions(Some(""), 2).unwrap();
        assert_eq!(second.questions.len(), 2);
        assert!(matches!(
            service.search_questions(Some(""), 3),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn category_questions() {
        let service = service(6);
        let art = service.questions_by_category(2).unwrap();
        assert_eq!(art.total_questions, 3);
        assert_eq!(art.current_category.kind, "Art");
        assert!(matches!(service.questions_by_category(3), Err(AppError::NotFound(_))));
    }

    #[test]
    fn quiz_requires_category() {
        let service = service(6);
        let request = QuizRequest {
            previous_questions: vec![],
            quiz_category: None,
        };
        assert!(matches!(
            service.next_quiz_question(request),
            Err(AppError::BadRequest(_))
        ));

        let request = QuizRequest {
            previous_questions: vec![1, 3, 5],
            quiz_category: Some(QuizCategory { id: 2, kind: None }),
        };
        assert!(service.next_quiz_question(request).unwrap().is_none());
    }
}
