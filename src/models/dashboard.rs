use crate::models::paper::Paper;
use serde::{Deserialize, Serialize};

/// 首页统计数据（`/dashboard/stats` 的响应形状）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    /// 今天到期的试卷
    pub tasks_due_today: Vec<Paper>,
    /// 待复习的试卷
    pub tasks_to_review: Vec<Paper>,
    pub stats_cards: StatsCards,
    /// 最近 7 天的活动曲线，从过去到现在排序
    pub activity_chart: Vec<ActivityPoint>,
}

/// 统计卡片
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsCards {
    pub pending_review_count: i64,
    pub in_progress_count: i64,
    pub completed_this_week_count: i64,
}

/// 单日活动数据点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityPoint {
    /// ISO 日期（YYYY-MM-DD）
    pub date: String,
    pub count: i64,
}
