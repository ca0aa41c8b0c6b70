/// 视图定义
///
/// 视图本体（渲染、交互）不属于这一层，这里只定义路由绑定所需的
/// 最小单元：一个可命名的、可延迟构造的对象。
use crate::error::AppResult;
use futures::future::BoxFuture;
use std::sync::Arc;

/// 路由绑定的 UI 单元
pub trait View: Send + Sync {
    /// 视图名称（与路由 name 一致）
    fn name(&self) -> &'static str;
}

/// 视图工厂：按需异步构造视图，对应动态 import
pub type ViewFactory = fn() -> BoxFuture<'static, AppResult<Arc<dyn View>>>;

/// 首页视图
pub struct HomeView;

impl View for HomeView {
    fn name(&self) -> &'static str {
        "home"
    }
}

/// 日程视图
pub struct ScheduleView;

impl View for ScheduleView {
    fn name(&self) -> &'static str {
        "schedule"
    }
}

/// 试卷列表视图
pub struct PaperView;

impl View for PaperView {
    fn name(&self) -> &'static str {
        "paper"
    }
}

/// PDF 生成器视图
pub struct PdfGeneratorView;

impl View for PdfGeneratorView {
    fn name(&self) -> &'static str {
        "pdf-generator"
    }
}

/// 错题本视图
pub struct WrongQuestionBookView;

impl View for WrongQuestionBookView {
    fn name(&self) -> &'static str {
        "wrong-question-book"
    }
}

pub fn home_view() -> BoxFuture<'static, AppResult<Arc<dyn View>>> {
    Box::pin(async { Ok(Arc::new(HomeView) as Arc<dyn View>) })
}

pub fn schedule_view() -> BoxFuture<'static, AppResult<Arc<dyn View>>> {
    Box::pin(async { Ok(Arc::new(ScheduleView) as Arc<dyn View>) })
}

pub fn paper_view() -> BoxFuture<'static, AppResult<Arc<dyn View>>> {
    Box::pin(async { Ok(Arc::new(PaperView) as Arc<dyn View>) })
}

pub fn pdf_generator_view() -> BoxFuture<'static, AppResult<Arc<dyn View>>> {
    Box::pin(async { Ok(Arc::new(PdfGeneratorView) as Arc<dyn View>) })
}

pub fn wrong_question_book_view() -> BoxFuture<'static, AppResult<Arc<dyn View>>> {
    Box::pin(async { Ok(Arc::new(WrongQuestionBookView) as Arc<dyn View>) })
}
