//! API 层
//!
//! 负责所有与后端 /api 的交互。client 是共用的请求封装，
//! 其余文件按后端路由分组提供类型化的端点方法。

pub mod client;
pub mod dashboard;
pub mod paper;
pub mod pdf;
pub mod settings;
pub mod wrong_question;

pub use client::{ApiClient, StatusMessage};
pub use paper::{PaperFilter, FILTER_ANY};
pub use pdf::PdfRequest;
pub use wrong_question::WrongQuestionFilter;
