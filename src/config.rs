use crate::error::AppResult;
use serde::Deserialize;
use std::path::PathBuf;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// API 基础地址（含 /api 前缀）
    pub api_base_url: String,
    /// 开发代理目标地址（/api 前缀剥离后转发到这里）
    pub proxy_target: String,
    /// 主题存储文件路径，None 表示用默认位置
    pub theme_storage_path: Option<PathBuf>,
    /// 默认主题
    pub default_theme: String,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:3000/api".to_string(),
            proxy_target: "http://127.0.0.1:8000".to_string(),
            theme_storage_path: None,
            default_theme: "light".to_string(),
            request_timeout_secs: 30,
            verbose_logging: false,
        }
    }
}

/// 配置文件中的可选字段（缺省项回落到默认值）
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_base_url: Option<String>,
    proxy_target: Option<String>,
    theme_storage_path: Option<PathBuf>,
    default_theme: Option<String>,
    request_timeout_secs: Option<u64>,
    verbose_logging: Option<bool>,
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(default.api_base_url),
            proxy_target: std::env::var("PROXY_URL").unwrap_or(default.proxy_target),
            theme_storage_path: std::env::var("THEME_STORAGE_PATH")
                .ok()
                .map(PathBuf::from)
                .or(default.theme_storage_path),
            default_theme: std::env::var("DEFAULT_THEME").unwrap_or(default.default_theme),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
        }
    }

    /// 从 TOML 配置文件加载，缺省字段用默认值
    pub fn from_file(path: &std::path::Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)?;
        let default = Self::default();

        Ok(Self {
            api_base_url: file.api_base_url.unwrap_or(default.api_base_url),
            proxy_target: file.proxy_target.unwrap_or(default.proxy_target),
            theme_storage_path: file.theme_storage_path.or(default.theme_storage_path),
            default_theme: file.default_theme.unwrap_or(default.default_theme),
            request_timeout_secs: file
                .request_timeout_secs
                .unwrap_or(default.request_timeout_secs),
            verbose_logging: file.verbose_logging.unwrap_or(default.verbose_logging),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:3000/api");
        assert_eq!(config.default_theme, "light");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_from_file_merges_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            proxy_target = "http://192.168.1.10:8000"
            default_theme = "dark"
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).expect("配置文件加载失败");
        assert_eq!(config.proxy_target, "http://192.168.1.10:8000");
        assert_eq!(config.default_theme, "dark");
        // 未配置的字段保持默认值
        assert_eq!(config.api_base_url, "http://127.0.0.1:3000/api");
    }
}
