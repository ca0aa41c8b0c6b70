use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 试卷记录
///
/// 这是前端、API 层和表单共同使用的统一数据形状。
/// 历史上 `Paper` 在不同版本中出现过三种字段集，这里收敛为一个：
/// 所有生产方都保证的字段为必填，其余一律可选，缺失时不参与序列化。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paper {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub subject: String,
    pub grade: String,
    pub title: String,
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// 试卷类型（`type` 是 Rust 关键字，字段名用 kind）
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,

    /// 间隔复习调度字段，线上格式保持扁平
    ///
    /// 内部字段各自缺失时不序列化，子结构为空时线上不出现任何调度字段
    #[serde(flatten)]
    pub review: ReviewSchedule,
}

/// 间隔复习调度字段
///
/// 单独建模为子结构，避免部分更新时语义不清；
/// 日期一律以文本时间戳（RFC 3339）序列化。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_stage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl ReviewSchedule {
    /// 所有调度字段都缺失时，整个子结构不参与序列化
    pub fn is_empty(&self) -> bool {
        self.review_stage.is_none()
            && self.next_review_date.is_none()
            && self.last_reviewed_at.is_none()
            && self.due_date.is_none()
    }
}

/// 选择控件的选项（label/value 对）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Select {
    pub label: String,
    pub value: String,
}

impl Select {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_paper_serializes_without_absent_optional_fields() {
        let paper = Paper {
            subject: "数学".to_string(),
            grade: "3".to_string(),
            title: "期中模拟卷".to_string(),
            path: "/papers/midterm.pdf".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&paper).expect("序列化失败");
        let object = value.as_object().expect("应该是 JSON 对象");

        // 缺失的可选字段不能以默认值形式出现
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("author"));
        assert!(!object.contains_key("type"));
        assert!(!object.contains_key("status"));
        assert!(!object.contains_key("memo"));
        assert!(!object.contains_key("review_stage"));
        assert!(!object.contains_key("due_date"));
        assert!(paper.review.is_empty());
        assert_eq!(object.len(), 4);
    }

    #[test]
    fn test_paper_round_trip_preserves_present_fields() {
        let due = Utc.with_ymd_and_hms(2025, 8, 26, 10, 0, 0).unwrap();
        let paper = Paper {
            id: Some(42),
            subject: "历史".to_string(),
            grade: "9".to_string(),
            title: "2025年学业水平模拟".to_string(),
            path: "/papers/history-3.pdf".to_string(),
            author: Some("王老师".to_string()),
            kind: Some("模拟卷".to_string()),
            status: Some("4".to_string()),
            memo: Some("第二遍复习".to_string()),
            review: ReviewSchedule {
                review_stage: Some(2),
                next_review_date: None,
                last_reviewed_at: None,
                due_date: Some(due),
            },
        };

        let json = serde_json::to_string(&paper).expect("序列化失败");
        let back: Paper = serde_json::from_str(&json).expect("反序列化失败");

        assert_eq!(back.id, Some(42));
        assert_eq!(back.kind.as_deref(), Some("模拟卷"));
        assert_eq!(back.memo.as_deref(), Some("第二遍复习"));
        assert_eq!(back.review.review_stage, Some(2));
        assert_eq!(back.review.due_date, Some(due));
        assert!(back.review.next_review_date.is_none());
    }

    #[test]
    fn test_paper_type_field_uses_wire_name() {
        let json = r#"{
            "subject": "英语",
            "grade": "7",
            "title": "单元测试卷",
            "path": "/papers/unit1.pdf",
            "type": "单元卷"
        }"#;

        let paper: Paper = serde_json::from_str(json).expect("反序列化失败");
        assert_eq!(paper.kind.as_deref(), Some("单元卷"));

        let value = serde_json::to_value(&paper).unwrap();
        assert!(value.get("type").is_some());
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_review_schedule_dates_are_text_timestamps() {
        let schedule = ReviewSchedule {
            review_stage: Some(1),
            due_date: Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).single(),
            ..Default::default()
        };
        let value = serde_json::to_value(&schedule).unwrap();
        assert!(value.get("due_date").unwrap().is_string());
    }

    #[test]
    fn test_select_pair() {
        let option = Select::new("全部", "0");
        let json = serde_json::to_string(&option).unwrap();
        let back: Select = serde_json::from_str(&json).unwrap();
        assert_eq!(back, option);
    }
}
