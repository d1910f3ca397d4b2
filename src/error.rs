use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 资源不存在（题目、分类、页码）
    #[error("资源不存在: {0}")]
    NotFound(String),
    /// 创建题目时缺少必填字段
    #[error("缺少必填字段: {field}")]
    MissingField { field: &'static str },
    /// 题目引用了不存在的分类
    #[error("分类不存在: {category}")]
    UnknownCategory { category: String },
    /// 请求参数无效
    #[error("请求无效: {0}")]
    BadRequest(String),
    /// 无法处理的请求
    #[error("无法处理: {0}")]
    Unprocessable(String),
    /// 存储层错误
    #[error("存储错误: {0}")]
    Storage(String),
    /// 种子文件错误
    #[error("种子文件错误: {0}")]
    Seed(#[from] SeedError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 种子文件错误
#[derive(Debug, Error)]
pub enum SeedError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 分类 ID 重复
    #[error("分类ID重复: {id}")]
    DuplicateCategory { id: i64 },
    /// 题目 ID 重复
    #[error("题目ID重复: {id}")]
    DuplicateQuestion { id: i64 },
    /// 题目 ID 已到上限，无法分配下一个
    #[error("题目ID超出范围: {id}")]
    QuestionIdOverflow { id: i64 },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 监听地址无效
    #[error("监听地址无效: {value}")]
    InvalidAddress { value: String },
}

impl warp::reject::Reject for AppError {}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 题目不存在
    pub fn question_not_found(id: i64) -> Self {
        AppError::NotFound(format!("question {}", id))
    }

    /// 分类不存在（用于查询）
    pub fn category_not_found(id: i64) -> Self {
        AppError::NotFound(format!("category {}", id))
    }

    /// 页码超出范围
    pub fn page_not_found(page: usize) -> Self {
        AppError::NotFound(format!("page {}", page))
    }

    /// 锁中毒等存储故障
    pub fn storage(reason: impl Into<String>) -> Self {
        AppError::Storage(reason.into())
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
