use crate::error::{AppResult, SeedError};
use crate::models::category::Category;
use crate::models::question::deserialize_category;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 种子文件内容
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

/// 种子文件中的题目，`id` 可省略
#[derive(Debug, Clone, Deserialize)]
pub struct SeedQuestion {
    #[serde(default)]
    pub id: Option<i64>,
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "deserialize_category")]
    pub category: String,
    pub difficulty: i64,
}

/// 从 TOML 文件加载种子数据
pub async fn load_seed_file(seed_path: &Path) -> AppResult<SeedData> {
    let path = seed_path.display().to_string();

    if !seed_path.exists() {
        return Err(SeedError::NotFound { path }.into());
    }

    let content = fs::read_to_string(seed_path)
        .await
        .map_err(|source| SeedError::ReadFailed {
            path: path.clone(),
            source,
        })?;

    let seed = parse_seed(&content, &path)?;
    tracing::info!(
        "成功加载种子文件 {}: {} 个分类, {} 个题目",
        path,
        seed.categories.len(),
        seed.questions.len()
    );

    Ok(seed)
}

/// 解析种子文件文本
pub fn parse_seed(content: &str, path: &str) -> AppResult<SeedData> {
    let seed: SeedData = toml::from_str(content).map_err(|source| SeedError::TomlParseFailed {
        path: path.to_string(),
        source,
    })?;
    Ok(seed)
}
