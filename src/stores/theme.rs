/// 主题偏好存储
///
/// 持久化到本地键值存储（键为 "theme"），同时把当前主题镜像到
/// 文档根节点的 data-theme 属性，样式表按该属性选择主题。
/// "持久化" 和 "应用到呈现层" 两个副作用分开，便于独立测试。
use crate::error::AppResult;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 存储主题的键
const THEME_KEY: &str = "theme";

/// 呈现层属性名
const THEME_ATTRIBUTE: &str = "data-theme";

/// 本地键值存储抽象
///
/// 文件实现对应浏览器的 localStorage；测试和存储不可用的
/// 降级场景用内存实现。
pub trait LocalStorage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// JSON 文件存储
///
/// 整个存储是一个扁平的字符串映射，每次写入整体落盘。
pub struct FileStorage {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStorage {
    /// 打开（或新建）指定路径的存储文件
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load_entries(&path);
        Self { path, entries }
    }

    /// 默认存储路径：用户配置目录下的 paper_tracker/storage.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("paper_tracker").join("storage.json"))
    }

    fn load_entries(path: &Path) -> HashMap<String, String> {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("存储文件损坏，忽略已有内容 ({}): {}", path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        }
    }
}

impl LocalStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                crate::error::AppError::storage_write_failed(parent.display().to_string(), e)
            })?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content).map_err(|e| {
            crate::error::AppError::storage_write_failed(self.path.display().to_string(), e)
        })?;

        Ok(())
    }
}

/// 内存存储（测试与降级用）
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl LocalStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 文档根节点句柄
///
/// 只保存呈现层属性，对应 document.documentElement。
#[derive(Debug, Default)]
pub struct DocumentRoot {
    attributes: HashMap<String, String>,
}

impl DocumentRoot {
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }
}

/// 主题偏好存储
pub struct ThemeStore {
    theme: String,
    storage: Box<dyn LocalStorage>,
    document: DocumentRoot,
}

impl ThemeStore {
    /// 创建主题存储，初始主题为默认值（未应用、未持久化）
    pub fn new(storage: Box<dyn LocalStorage>, default_theme: impl Into<String>) -> Self {
        Self {
            theme: default_theme.into(),
            storage,
            document: DocumentRoot::default(),
        }
    }

    /// 当前内存中的主题
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// 文档根节点（测试呈现层效果用）
    pub fn document(&self) -> &DocumentRoot {
        &self.document
    }

    /// 设置主题
    ///
    /// 更新内存值、写入持久存储、设置 data-theme 属性。
    /// 不校验主题名，任意字符串都接受；重复设置同一值是幂等的。
    /// 持久化失败只告警，内存与呈现层状态照常生效。
    pub fn set_theme(&mut self, new_theme: &str) {
        self.theme = new_theme.to_string();

        if let Err(e) = self.persist() {
            warn!("主题持久化失败，降级为仅内存模式: {}", e);
        }

        self.apply();
        debug!("主题已切换: {}", new_theme);
    }

    /// 初始化主题
    ///
    /// 读取持久存储中的值，存在则用它，否则用当前默认值。
    /// 必须在应用启动时、首次渲染前调用一次。
    pub fn init_theme(&mut self) {
        match self.storage.get(THEME_KEY) {
            Some(saved) => self.set_theme(&saved),
            None => self.set_theme(&self.theme.clone()),
        }
    }

    /// 持久化当前主题
    fn persist(&mut self) -> AppResult<()> {
        self.storage.set(THEME_KEY, &self.theme)
    }

    /// 把当前主题应用到呈现层
    fn apply(&mut self) {
        self.document.set_attribute(THEME_ATTRIBUTE, &self.theme);
    }
}
