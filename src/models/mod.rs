pub mod dashboard;
pub mod paper;
pub mod wrong_question;

pub use dashboard::{ActivityPoint, DashboardStats, StatsCards};
pub use paper::{Paper, ReviewSchedule, Select};
pub use wrong_question::WrongQuestion;
