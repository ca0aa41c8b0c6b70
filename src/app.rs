use crate::api::ApiClient;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::router::{Router, View};
use crate::stores::{FileStorage, LoadingTracker, LocalStorage, MemoryStorage, ThemeStore};
use crate::utils::logging;
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// 应用主结构
///
/// 启动顺序：先初始化主题（首次渲染前），再建路由器和 API 客户端。
pub struct App {
    config: Config,
    router: Router,
    theme: ThemeStore,
    api: Arc<ApiClient>,
    loading: Arc<LoadingTracker>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        // 主题必须在任何渲染之前就绪，避免主题闪烁
        let mut theme = ThemeStore::new(open_storage(&config), config.default_theme.clone());
        theme.init_theme();

        let loading = LoadingTracker::new();
        let api = Arc::new(ApiClient::new(&config, Arc::clone(&loading))?);
        let router = Router::new();

        Ok(Self {
            config,
            router,
            theme,
            api,
            loading,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&mut self) -> Result<()> {
        logging::log_startup(&self.config);
        logging::log_routes(&self.router);
        info!("🎨 当前主题: {}", self.theme.theme());

        // 进入首页
        let home = self.navigate("/").await?;
        info!("✓ 首页视图已加载: {}", home.name());

        // 首页统计数据尽力拉取，后端不可达不阻止启动
        match self.api.dashboard_stats().await {
            Ok(stats) => {
                info!(
                    "📊 今日到期 {} / 待复习 {} / 本周完成 {}",
                    stats.tasks_due_today.len(),
                    stats.stats_cards.pending_review_count,
                    stats.stats_cards.completed_this_week_count
                );
            }
            Err(e) => warn!("⚠️ 拉取首页统计失败: {}", e),
        }

        debug_assert!(!self.loading.is_loading());
        Ok(())
    }

    /// 按路径导航，返回加载好的视图
    pub async fn navigate(&self, path: &str) -> AppResult<Arc<dyn View>> {
        let route = self
            .router
            .resolve(path)
            .ok_or_else(|| AppError::route_not_found(path))?;
        route.view().await
    }

    /// 路由器
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// 主题存储
    pub fn theme(&mut self) -> &mut ThemeStore {
        &mut self.theme
    }

    /// API 客户端
    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }
}

/// 打开主题持久化存储
///
/// 路径来自配置或默认位置；两者都拿不到时降级为内存存储。
fn open_storage(config: &Config) -> Box<dyn LocalStorage> {
    let path = config
        .theme_storage_path
        .clone()
        .or_else(FileStorage::default_path);

    match path {
        Some(path) => Box::new(FileStorage::open(path)),
        None => {
            warn!("⚠️ 无法确定存储目录，主题仅保存在内存中");
            Box::new(MemoryStorage::default())
        }
    }
}
