/// 试卷接口
///
/// 对应后端 /paper 路由：按条件查询、新建、更新、删除。
use crate::api::client::{ApiClient, StatusMessage};
use crate::error::AppResult;
use crate::models::Paper;

/// "任意" 过滤值
///
/// 后端约定：除 grade 外的过滤参数传 "0" 表示不过滤。
pub const FILTER_ANY: &str = "0";

/// 试卷查询条件
#[derive(Debug, Clone)]
pub struct PaperFilter {
    /// 年级（必选过滤条件）
    pub grade: String,
    pub subject: String,
    pub author: String,
    pub kind: String,
    pub status: String,
}

impl PaperFilter {
    /// 只按年级过滤，其余条件为 "任意"
    pub fn for_grade(grade: impl Into<String>) -> Self {
        Self {
            grade: grade.into(),
            subject: FILTER_ANY.to_string(),
            author: FILTER_ANY.to_string(),
            kind: FILTER_ANY.to_string(),
            status: FILTER_ANY.to_string(),
        }
    }

    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("author", self.author.clone()),
            ("type", self.kind.clone()),
            ("status", self.status.clone()),
            ("subject", self.subject.clone()),
            ("grade", self.grade.clone()),
        ]
    }
}

impl ApiClient {
    /// 按条件查询试卷列表
    pub async fn list_papers(&self, filter: &PaperFilter) -> AppResult<Vec<Paper>> {
        self.get_json("/paper/", &filter.to_query()).await
    }

    /// 新建试卷，返回后端补全 id 后的记录
    pub async fn create_paper(&self, paper: &Paper) -> AppResult<Paper> {
        self.post_json("/paper/", paper).await
    }

    /// 更新试卷（按 id 整体覆盖）
    pub async fn update_paper(&self, paper: &Paper) -> AppResult<StatusMessage> {
        self.put_json("/paper/", paper).await
    }

    /// 删除试卷
    pub async fn delete_paper(&self, id: i64) -> AppResult<StatusMessage> {
        self.delete_json(&format!("/paper/{}/", id)).await
    }
}
