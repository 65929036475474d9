use thiserror::Error;

/// 模型服务调用错误
///
/// 只有传输/服务类失败会作为错误向上传播并中止流水线运行；
/// 响应内容的格式问题一律由解析层以兜底值吸收。
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("请求模型服务失败: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("模型服务返回错误 (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("调用模型服务超时 ({0}秒)")]
    Timeout(u64),
}
