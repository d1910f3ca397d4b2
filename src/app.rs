use crate::api;
use crate::config::Config;
use crate::error::{AppError, SeedError};
use crate::infrastructure::{MemoryStore, QuestionFilter, ThreadRandom, TriviaStore};
use crate::models::load_seed_file;
use crate::services::TriviaService;
use crate::utils::logging::{log_bank_loaded, log_startup};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    service: Arc<TriviaService>,
}

impl App {
    /// 初始化应用：加载种子数据并组装服务
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let store = load_store(&config).await?;
        log_bank_loaded(
            store.categories()?.len(),
            store.questions(&QuestionFilter::all())?.len(),
        );

        let service = Arc::new(TriviaService::new(Arc::new(store), Arc::new(ThreadRandom)));

        Ok(Self { config, service })
    }

    pub fn service(&self) -> Arc<TriviaService> {
        self.service.clone()
    }

    /// 运行 HTTP 服务，收到 Ctrl-C 后优雅退出
    pub async fn run(&self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let routes = api::routes(self.service(), self.config.legacy_missing_field_status);

        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    warn!("⚠️ 无法监听退出信号: {}", e);
                }
            })
            .with_context(|| format!("无法监听地址: {}", addr))?;

        info!("🌐 正在监听 http://{}", bound);
        server.await;
        info!("👋 服务已停止");

        Ok(())
    }
}

/// 加载题库；种子文件不存在时以空题库启动
async fn load_store(config: &Config) -> Result<MemoryStore> {
    match load_seed_file(Path::new(&config.seed_file)).await {
        Ok(seed) => MemoryStore::from_seed(seed)
            .with_context(|| format!("种子数据无效: {}", config.seed_file)),
        Err(AppError::Seed(SeedError::NotFound { path })) => {
            warn!("⚠️ 种子文件不存在: {}，以空题库启动", path);
            Ok(MemoryStore::new())
        }
        Err(e) => Err(e).with_context(|| format!("无法加载种子文件: {}", config.seed_file)),
    }
}
