/// 首页统计接口
use crate::api::client::ApiClient;
use crate::error::AppResult;
use crate::models::DashboardStats;

impl ApiClient {
    /// 拉取首页统计数据（到期任务、待复习、统计卡片、活动曲线）
    pub async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        self.get_json("/dashboard/stats", &[]).await
    }
}
