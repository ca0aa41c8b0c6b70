/// 设置接口
///
/// 对应后端 /settings 路由，目前只有错题存储路径一项。
use crate::api::client::ApiClient;
use crate::error::AppResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
struct WrongQuestionPathBody {
    wrong_question_storage_path: String,
}

#[derive(Debug, Clone, Deserialize)]
struct WrongQuestionPathResponse {
    path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SettingsAck {
    pub message: String,
}

impl ApiClient {
    /// 读取错题存储路径，未配置时为 None
    pub async fn wrong_question_path(&self) -> AppResult<Option<String>> {
        let response: WrongQuestionPathResponse =
            self.get_json("/settings/wrong_question_path", &[]).await?;
        Ok(response.path)
    }

    /// 保存错题存储路径
    pub async fn save_wrong_question_path(&self, path: &str) -> AppResult<SettingsAck> {
        let body = WrongQuestionPathBody {
            wrong_question_storage_path: path.to_string(),
        };
        self.post_json("/settings/wrong_question_path", &body).await
    }
}
