//! 运行配置模块
//!
//! 两个后端服务的地址在编译期注入（Trunk 构建时设置环境变量），
//! 未设置时退化为本地开发默认值。

/// 认证服务地址
pub fn auth_api_url() -> &'static str {
    option_env!("FOOTPERF_AUTH_API_URL").unwrap_or("http://localhost:5001")
}

/// 预测服务地址
pub fn prediction_api_url() -> &'static str {
    option_env!("FOOTPERF_PREDICTION_API_URL").unwrap_or("http://localhost:5002")
}
