use serde::{Deserialize, Serialize};

/// 错题本条目
///
/// tags 在后端以逗号分隔字符串存储，按子串匹配过滤。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WrongQuestion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub subject: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl WrongQuestion {
    /// 判断条目是否带有指定标签
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_deref()
            .map(|tags| tags.split(',').any(|t| t.trim() == tag))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_tag_splits_comma_separated_list() {
        let question = WrongQuestion {
            subject: "数学".to_string(),
            tags: Some("分数, 应用题,计算".to_string()),
            ..Default::default()
        };

        assert!(question.has_tag("应用题"));
        assert!(question.has_tag("计算"));
        assert!(!question.has_tag("几何"));
    }

    #[test]
    fn test_has_tag_without_tags() {
        let question = WrongQuestion {
            subject: "数学".to_string(),
            ..Default::default()
        };
        assert!(!question.has_tag("计算"));
    }
}
