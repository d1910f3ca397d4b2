//! 接口层
//!
//! 负责 HTTP 路由、请求解析与错误响应，不包含业务判断

pub mod handlers;
pub mod rejection;
pub mod responses;
pub mod routes;

// 重新导出常用函数
pub use rejection::return_error;
pub use routes::routes;
