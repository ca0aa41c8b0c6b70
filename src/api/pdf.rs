/// PDF 生成接口
///
/// 对应后端的口算练习 PDF 生成端点，返回 PDF 文件字节。
use crate::api::client::ApiClient;
use crate::error::AppResult;

/// PDF 生成参数
#[derive(Debug, Clone)]
pub struct PdfRequest {
    /// 题型：simple_calculation / find_missing_number
    pub problem_type: String,
    /// 数值范围上限
    pub max_number: u32,
    /// 运算数个数
    pub num_operands: u32,
    /// 运算符集合：add_subtract / multiply_divide / all
    pub operators: String,
    /// 题目数量
    pub num_problems: u32,
    /// 运算模式：mixed / sequential
    pub op_mode: String,
}

impl Default for PdfRequest {
    fn default() -> Self {
        Self {
            problem_type: "simple_calculation".to_string(),
            max_number: 20,
            num_operands: 2,
            operators: "add_subtract".to_string(),
            num_problems: 50,
            op_mode: "mixed".to_string(),
        }
    }
}

impl PdfRequest {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("problem_type", self.problem_type.clone()),
            ("max_number", self.max_number.to_string()),
            ("num_operands", self.num_operands.to_string()),
            ("operators", self.operators.clone()),
            ("num_problems", self.num_problems.to_string()),
            ("op_mode", self.op_mode.clone()),
        ]
    }
}

impl ApiClient {
    /// 生成练习 PDF，返回文件内容
    pub async fn generate_pdf(&self, request: &PdfRequest) -> AppResult<Vec<u8>> {
        self.get_bytes("/generate-pdf", &request.to_query()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_matches_backend_defaults() {
        let request = PdfRequest::default();
        assert_eq!(request.max_number, 20);
        assert_eq!(request.num_operands, 2);
        assert_eq!(request.operators, "add_subtract");
        assert_eq!(request.num_problems, 50);
        assert_eq!(request.op_mode, "mixed");
    }

    #[test]
    fn test_query_contains_all_params() {
        let request = PdfRequest::default();
        let query = request.to_query();
        assert_eq!(query.len(), 6);
        assert!(query.contains(&("max_number", "20".to_string())));
    }
}
