//! # Trivia API
//!
//! 题库问答服务：分类、题目列表与搜索、增删题目、随机答题
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有题库数据与随机数来源，只暴露能力
//! - `MemoryStore` - 唯一的数据 owner，提供查询、写入、删除
//! - `RandomSource` - 注入式随机数来源，测试可固定种子
//!
//! ### ② 业务能力层（Services）
//! - `pagination` - 纯函数分页，每页 10 道
//! - `category_lookup` - 分类 ID → 名称
//! - `QuizEngine` - 过滤已出过的题目后随机抽取
//! - `TriviaService` - 组合以上能力
//!
//! ### ③ 接口层（Api）
//! - `api/` - warp 路由、请求处理与统一错误响应
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{MemoryStore, RandomSource, SeededRandom, ThreadRandom, TriviaStore};
pub use models::{Category, Question};
pub use services::TriviaService;
