//! 题库存储 - 基础设施层
//!
//! 唯一持有题目与分类数据，只暴露查询、写入、删除能力

use crate::error::{AppError, AppResult, SeedError};
use crate::models::{Category, NewQuestion, Question, SeedData};
use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// 题目查询条件，各条件之间为"与"关系
#[derive(Debug, Clone, Default)]
pub struct QuestionFilter {
    /// 分类 ID（字符串形式，精确匹配）
    pub category: Option<String>,
    /// 题干关键字（忽略大小写的子串匹配）
    pub term: Option<String>,
    /// 需要排除的题目 ID
    pub exclude_ids: HashSet<i64>,
}

impl QuestionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn excluding(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.exclude_ids.extend(ids);
        self
    }

    fn accepts(&self, question: &Question) -> bool {
        if self.exclude_ids.contains(&question.id) {
            return false;
        }
        if let Some(category) = &self.category {
            if &question.category != category {
                return false;
            }
        }
        match &self.term {
            Some(term) => question.matches_term(term),
            None => true,
        }
    }
}

/// 题库存储接口
///
/// 所有列表结果均按 ID 升序返回，单个操作保证原子性
pub trait TriviaStore: Send + Sync {
    /// 全部分类
    fn categories(&self) -> AppResult<Vec<Category>>;

    /// 按 ID 查询分类
    fn category(&self, id: i64) -> AppResult<Option<Category>>;

    /// 按条件查询题目
    fn questions(&self, filter: &QuestionFilter) -> AppResult<Vec<Question>>;

    /// 写入新题目，返回带 ID 的记录
    fn insert_question(&self, new_question: NewQuestion) -> AppResult<Question>;

    /// 删除题目，不存在时返回 `None`
    fn delete_question(&self, id: i64) -> AppResult<Option<Question>>;
}

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    next_id: i64,
}

impl Tables {
    fn allocate_id(&mut self, requested: Option<i64>) -> AppResult<i64> {
        let id = match requested {
            Some(id) if self.questions.contains_key(&id) => {
                return Err(SeedError::DuplicateQuestion { id }.into());
            }
            Some(id) => id,
            None => self.next_id,
        };
        let following = id
            .checked_add(1)
            .ok_or(SeedError::QuestionIdOverflow { id })?;
        self.next_id = self.next_id.max(following);
        Ok(id)
    }
}

/// 内存题库
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// 创建空题库
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                next_id: 1,
                ..Default::default()
            }),
        }
    }

    /// 从种子数据创建题库
    ///
    /// 引用了不存在分类的题目会被跳过
    pub fn from_seed(seed: SeedData) -> AppResult<Self> {
        let store = Self::new();
        {
            let mut tables = store.write()?;

            for category in seed.categories {
                if tables.categories.contains_key(&category.id) {
                    return Err(SeedError::DuplicateCategory { id: category.id }.into());
                }
                tables.categories.insert(category.id, category);
            }

            for seed_question in seed.questions {
                let category = match seed_question.category.trim().parse::<i64>() {
                    Ok(id) if tables.categories.contains_key(&id) => id.to_string(),
                    _ => {
                        warn!(
                            "⚠️ 跳过题目 {:?}: 分类 {} 不存在",
                            seed_question.id, seed_question.category
                        );
                        continue;
                    }
                };

                let id = tables.allocate_id(seed_question.id)?;
                tables.questions.insert(
                    id,
                    Question {
                        id,
                        question: seed_question.question,
                        answer: seed_question.answer,
                        category,
                        difficulty: seed_question.difficulty,
                    },
                );
            }
        }
        Ok(store)
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| AppError::storage("题库读锁已中毒"))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| AppError::storage("题库写锁已中毒"))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TriviaStore for MemoryStore {
    fn categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    fn category(&self, id: i64) -> AppResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    fn questions(&self, filter: &QuestionFilter) -> AppResult<Vec<Question>> {
        let tables = self.read()?;
        let selected: Vec<Question> = tables
            .questions
            .values()
            .filter(|q| filter.accepts(q))
            .cloned()
            .collect();
        debug!("查询题目: {:?} -> {} 条", filter, selected.len());
        Ok(selected)
    }

    fn insert_question(&self, new_question: NewQuestion) -> AppResult<Question> {
        let mut tables = self.write()?;
        let id = tables.allocate_id(new_question.id)?;
        let question = Question {
            id,
            question: new_question.question,
            answer: new_question.answer,
            category: new_question.category,
            difficulty: new_question.difficulty,
        };
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    fn delete_question(&self, id: i64) -> AppResult<Option<Question>> {
        Ok(self.write()?.questions.remove(&id))
    }
}
