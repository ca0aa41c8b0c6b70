/// API 客户端
///
/// 所有请求共用的预配置客户端，基础路径为 /api。
/// 每次请求派发前获取一个加载令牌，settle（成功或失败）时由
/// Drop 释放，全局加载指示器因此严格跟随请求生命周期。
/// 错误一律原样向上传播，这一层不重试、不吞错、不做分类。
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::stores::LoadingTracker;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// 预配置的 HTTP 客户端
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    loading: Arc<LoadingTracker>,
}

impl ApiClient {
    /// 创建新的 API 客户端
    pub fn new(config: &Config, loading: Arc<LoadingTracker>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Other(format!("HTTP客户端初始化失败: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            loading,
        })
    }

    /// 共享的加载指示器
    pub fn loading(&self) -> &Arc<LoadingTracker> {
        &self.loading
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET 并解析 JSON 响应
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let _guard = self.loading.acquire();
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?
            .error_for_status()
            .map_err(|e| AppError::api_bad_status(path, e))?;

        let value = response
            .json::<T>()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;
        Ok(value)
    }

    /// GET 并返回原始字节（PDF 下载用）
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<Vec<u8>> {
        let _guard = self.loading.acquire();
        let url = self.url(path);
        debug!("GET {} (bytes)", url);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?
            .error_for_status()
            .map_err(|e| AppError::api_bad_status(path, e))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;
        Ok(bytes.to_vec())
    }

    /// POST JSON 并解析 JSON 响应
    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let _guard = self.loading.acquire();
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?
            .error_for_status()
            .map_err(|e| AppError::api_bad_status(path, e))?;

        let value = response
            .json::<T>()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;
        Ok(value)
    }

    /// PUT JSON 并解析 JSON 响应
    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let _guard = self.loading.acquire();
        let url = self.url(path);
        debug!("PUT {}", url);

        let response = self
            .http
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?
            .error_for_status()
            .map_err(|e| AppError::api_bad_status(path, e))?;

        let value = response
            .json::<T>()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;
        Ok(value)
    }

    /// DELETE 并解析 JSON 响应
    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let _guard = self.loading.acquire();
        let url = self.url(path);
        debug!("DELETE {}", url);

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?
            .error_for_status()
            .map_err(|e| AppError::api_bad_status(path, e))?;

        let value = response
            .json::<T>()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;
        Ok(value)
    }
}

/// 后端更新/删除操作的确认响应
#[derive(Debug, Clone, serde::Deserialize)]
pub struct StatusMessage {
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base: &str) -> ApiClient {
        let config = Config {
            api_base_url: base.to_string(),
            ..Default::default()
        };
        ApiClient::new(&config, LoadingTracker::new()).expect("客户端创建失败")
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = test_client("http://127.0.0.1:3000/api");
        assert_eq!(client.url("/paper/"), "http://127.0.0.1:3000/api/paper/");
    }

    #[test]
    fn test_url_strips_trailing_slash_on_base() {
        let client = test_client("http://127.0.0.1:3000/api/");
        assert_eq!(
            client.url("/dashboard/stats"),
            "http://127.0.0.1:3000/api/dashboard/stats"
        );
    }
}
