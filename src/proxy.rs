/// 开发环境反向代理规则
///
/// 把 /api 前缀的请求改写到后端目标地址，改写时剥离 /api 前缀；
/// 其余路径不代理。对应开发服务器的 proxy 配置。
use tracing::debug;

const API_PREFIX: &str = "/api";

/// /api 反向代理规则
#[derive(Debug, Clone)]
pub struct DevProxy {
    target: String,
}

impl DevProxy {
    /// 创建代理规则，target 是后端基础地址
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            target: target.trim_end_matches('/').to_string(),
        }
    }

    /// 改写请求路径
    ///
    /// /api 下的路径返回剥离前缀后的完整目标 URL，其余返回 None。
    pub fn rewrite(&self, path: &str) -> Option<String> {
        let rest = path.strip_prefix(API_PREFIX)?;
        // "/apifoo" 不属于 /api 前缀
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }
        let rewritten = format!("{}{}", self.target, rest);
        debug!("代理改写: {} -> {}", path, rewritten);
        Some(rewritten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_strips_api_prefix() {
        let proxy = DevProxy::new("http://127.0.0.1:8000");
        assert_eq!(
            proxy.rewrite("/api/paper/").as_deref(),
            Some("http://127.0.0.1:8000/paper/")
        );
        assert_eq!(
            proxy.rewrite("/api/dashboard/stats").as_deref(),
            Some("http://127.0.0.1:8000/dashboard/stats")
        );
    }

    #[test]
    fn test_bare_api_path_maps_to_target_root() {
        let proxy = DevProxy::new("http://127.0.0.1:8000/");
        assert_eq!(
            proxy.rewrite("/api").as_deref(),
            Some("http://127.0.0.1:8000")
        );
    }

    #[test]
    fn test_non_api_paths_are_not_proxied() {
        let proxy = DevProxy::new("http://127.0.0.1:8000");
        assert!(proxy.rewrite("/paper").is_none());
        assert!(proxy.rewrite("/apiary").is_none());
        assert!(proxy.rewrite("/").is_none());
    }
}
