use crate::error::{AppError, AppResult, ConfigError};
use std::net::SocketAddr;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
    /// 题库种子文件（TOML）
    pub seed_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 缺少必填字段时沿用旧客户端的 405 状态码
    pub legacy_missing_field_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            seed_file: "data/trivia_seed.toml".to_string(),
            verbose_logging: false,
            legacy_missing_field_status: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            host: std::env::var("TRIVIA_HOST").unwrap_or(default.host),
            port: std::env::var("TRIVIA_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.port),
            seed_file: std::env::var("TRIVIA_SEED_FILE").unwrap_or(default.seed_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            legacy_missing_field_status: std::env::var("LEGACY_MISSING_FIELD_STATUS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.legacy_missing_field_status),
        }
    }

    /// 解析监听地址
    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| {
            AppError::Config(ConfigError::InvalidAddress { value: raw.clone() })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_address_is_valid() {
        let addr = Config::default().socket_addr().unwrap();
        assert_eq!(addr.port(), 5000);
    }

    #[test]
    fn bad_host_is_a_config_error() {
        let config = Config {
            host: "not a host".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.socket_addr(),
            Err(AppError::Config(ConfigError::InvalidAddress { .. }))
        ));
    }
}
