/// 路由表
///
/// 静态的 路径 → 视图工厂 映射。视图按需异步构造，
/// 首次访问后缓存，后续导航返回同一个实例。
use crate::error::AppResult;
use crate::router::views::{self, View, ViewFactory};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

/// 路由元数据
#[derive(Debug, Clone)]
pub struct RouteMeta {
    /// 展示标题
    pub title: &'static str,
}

/// 单条路由
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub meta: Option<RouteMeta>,
    factory: ViewFactory,
    cell: OnceCell<Arc<dyn View>>,
}

impl Route {
    fn new(path: &'static str, name: &'static str, factory: ViewFactory) -> Self {
        Self {
            path,
            name,
            meta: None,
            factory,
            cell: OnceCell::new(),
        }
    }

    fn with_meta(mut self, title: &'static str) -> Self {
        self.meta = Some(RouteMeta { title });
        self
    }

    /// 加载路由对应的视图
    ///
    /// 首次调用触发工厂异步构造并缓存，之后返回缓存的实例。
    pub async fn view(&self) -> AppResult<Arc<dyn View>> {
        let view = self
            .cell
            .get_or_try_init(|| {
                debug!("首次加载视图: {}", self.name);
                (self.factory)()
            })
            .await?;
        Ok(Arc::clone(view))
    }
}

/// 客户端路由器
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// 构建内置路由表
    pub fn new() -> Self {
        let routes = vec![
            Route::new("/", "home", views::home_view),
            Route::new("/schedule", "schedule", views::schedule_view),
            Route::new("/paper", "paper", views::paper_view),
            Route::new("/pdf-generator", "pdf-generator", views::pdf_generator_view)
                .with_meta("PDF Generator"),
            Route::new(
                "/wrong-question-book",
                "wrong-question-book",
                views::wrong_question_book_view,
            )
            .with_meta("Wrong Question Book"),
        ];
        Self { routes }
    }

    /// 按路径解析路由
    ///
    /// 精确匹配，未命中返回 None，兜底行为交给调用方。
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// 路由表（按声明顺序）
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_declared_paths_resolve_and_load() {
        let router = Router::new();
        let expected = [
            ("/", "home"),
            ("/schedule", "schedule"),
            ("/paper", "paper"),
            ("/pdf-generator", "pdf-generator"),
            ("/wrong-question-book", "wrong-question-book"),
        ];

        for (path, name) in expected {
            let route = router.resolve(path).expect("路径应该命中路由表");
            assert_eq!(route.name, name);

            let view = route.view().await.expect("视图加载不应失败");
            assert_eq!(view.name(), name);
        }
    }

    #[test]
    fn test_unmatched_path_returns_none() {
        let router = Router::new();
        assert!(router.resolve("/does-not-exist").is_none());
        assert!(router.resolve("/paper/").is_none());
    }

    #[test]
    fn test_meta_titles_where_declared() {
        let router = Router::new();

        let pdf = router.resolve("/pdf-generator").unwrap();
        assert_eq!(pdf.meta.as_ref().unwrap().title, "PDF Generator");

        let book = router.resolve("/wrong-question-book").unwrap();
        assert_eq!(book.meta.as_ref().unwrap().title, "Wrong Question Book");

        // 其余路由没有元数据
        assert!(router.resolve("/").unwrap().meta.is_none());
        assert!(router.resolve("/schedule").unwrap().meta.is_none());
        assert!(router.resolve("/paper").unwrap().meta.is_none());
    }

    #[tokio::test]
    async fn test_view_is_loaded_once_and_cached() {
        let router = Router::new();
        let route = router.resolve("/").unwrap();

        let first = route.view().await.unwrap();
        let second = route.view().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second), "重复加载应返回缓存的实例");
    }

    #[test]
    fn test_route_table_order() {
        let router = Router::new();
        let paths: Vec<&str> = router.routes().iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/schedule",
                "/paper",
                "/pdf-generator",
                "/wrong-question-book"
            ]
        );
    }
}
