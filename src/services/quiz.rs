//! 抽题引擎 - 业务能力层
//!
//! 先过滤出可选题目，再一次性随机抽取，不做"抽到重复再重抽"

use crate::error::AppResult;
use crate::infrastructure::{QuestionFilter, RandomSource, TriviaStore};
use crate::models::{Question, ALL_CATEGORIES};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// 抽题引擎
pub struct QuizEngine {
    random: Arc<dyn RandomSource>,
}

impl QuizEngine {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// 抽取下一道题
    ///
    /// # 参数
    /// - `category_id`: 分类 ID，`0` 表示全部分类
    /// - `previous_ids`: 已经出过的题目
    ///
    /// # 返回
    /// 没有可选题目时返回 `None`，表示本轮答题结束
    pub fn next_question(
        &self,
        store: &dyn TriviaStore,
        category_id: i64,
        previous_ids: &HashSet<i64>,
    ) -> AppResult<Option<Question>> {
        let filter = eligibility_filter(category_id, previous_ids);
        let eligible = store.questions(&filter)?;
        debug!(
            "分类 {} 可选题目 {} 道（已排除 {} 道）",
            category_id,
            eligible.len(),
            previous_ids.len()
        );

        let picked = self.choose(eligible);
        if picked.is_none() {
            info!("🏁 分类 {} 没有剩余题目，答题结束", category_id);
        }
        Ok(picked)
    }

    /// 在可选题目中均匀随机选择一道
    pub fn choose(&self, mut eligible: Vec<Question>) -> Option<Question> {
        if eligible.is_empty() {
            return None;
        }
        let index = self.random.pick_index(eligible.len());
        Some(eligible.swap_remove(index))
    }
}

/// 构造可选题目的过滤条件
pub fn eligibility_filter(category_id: i64, previous_ids: &HashSet<i64>) -> QuestionFilter {
    let filter = QuestionFilter::all().excluding(previous_ids.iter().copied());
    if category_id == ALL_CATEGORIES {
        filter
    } else {
        filter.category(category_id.to_string())
    }
}
