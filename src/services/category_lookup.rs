use crate::error::AppResult;
use crate::infrastructure::TriviaStore;
use crate::models::Category;
use std::collections::BTreeMap;

/// 分类 ID（字符串）到名称的映射
pub type CategoryMap = BTreeMap<String, String>;

/// 将分类列表投影为 ID → 名称
pub fn format_categories(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id.to_string(), c.kind.clone()))
        .collect()
}

/// 每次请求重新读取全部分类
pub fn all_categories(store: &dyn TriviaStore) -> AppResult<CategoryMap> {
    Ok(format_categories(&store.categories()?))
}
