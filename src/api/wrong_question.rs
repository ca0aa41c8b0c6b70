/// 错题本接口
///
/// 对应后端 /wrong_question_book 路由。过滤参数均可选，
/// 缺省或传 "0" 表示不过滤；tag 按子串匹配。
use crate::api::client::ApiClient;
use crate::api::paper::FILTER_ANY;
use crate::error::AppResult;
use crate::models::WrongQuestion;

/// 错题查询条件
#[derive(Debug, Clone, Default)]
pub struct WrongQuestionFilter {
    pub subject: Option<String>,
    pub difficulty: Option<String>,
    pub tag: Option<String>,
}

impl WrongQuestionFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(subject) = filter_value(&self.subject) {
            query.push(("subject", subject));
        }
        if let Some(difficulty) = filter_value(&self.difficulty) {
            query.push(("difficulty", difficulty));
        }
        if let Some(tag) = self.tag.clone() {
            query.push(("tag", tag));
        }
        query
    }
}

/// "0" 与缺省等价，不发送该参数
fn filter_value(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| v != FILTER_ANY)
}

impl ApiClient {
    /// 按条件查询错题列表
    pub async fn list_wrong_questions(
        &self,
        filter: &WrongQuestionFilter,
    ) -> AppResult<Vec<WrongQuestion>> {
        self.get_json("/wrong_question_book/", &filter.to_query())
            .await
    }
}
