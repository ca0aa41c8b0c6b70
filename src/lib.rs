//! # Paper Tracker
//!
//! 试卷管理应用的前端核心
//!
//! ## 架构设计
//!
//! 本系统分为四层：
//!
//! ### ① 数据模型层（Models）
//! - `models/` - 试卷、错题、统计数据的统一数据形状，只有形状没有行为
//!
//! ### ② 状态层（Stores）
//! - `stores/theme` - 主题偏好：持久化 + 镜像到 data-theme 属性
//! - `stores/loading` - 全局加载指示器：按请求计数的作用域令牌
//!
//! ### ③ 路由层（Router）
//! - `router/` - 静态路由表，视图按需异步构造并缓存
//!
//! ### ④ API 层（Api）
//! - `api/client` - 共用请求封装，请求生命周期驱动加载指示器
//! - `api/*` - 按后端路由分组的类型化端点
//!
//! 外围：`config` 配置、`proxy` 开发代理规则、`app` 应用壳。

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod proxy;
pub mod router;
pub mod stores;
pub mod utils;

// 重新导出常用类型
pub use api::{ApiClient, PaperFilter, PdfRequest, WrongQuestionFilter};
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{DashboardStats, Paper, ReviewSchedule, Select, WrongQuestion};
pub use proxy::DevProxy;
pub use router::{Router, View};
pub use stores::{LoadingTracker, ThemeStore};
