/// 日志工具模块
///
/// 提供 tracing 初始化和启动阶段的日志辅助函数
use crate::config::Config;
use crate::router::Router;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 过滤级别优先取 RUST_LOG，否则按 verbose_logging 选择 debug/info。
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试卷管理前端");
    info!("🌐 API 地址: {}", config.api_base_url);
    info!("🎨 默认主题: {}", config.default_theme);
    info!("{}", "=".repeat(60));
}

/// 记录路由表
pub fn log_routes(router: &Router) {
    info!("📋 已注册 {} 条路由:", router.routes().len());
    for route in router.routes() {
        match &route.meta {
            Some(meta) => info!("  {} -> {} ({})", route.path, route.name, meta.title),
            None => info!("  {} -> {}", route.path, route.name),
        }
    }
}
