//! HTTP 客户端层
//!
//! 两个后端（认证服务、预测服务）各一个逻辑客户端，共用同一个执行器：
//! - 每个出站请求自动注入持久化的 Bearer 令牌
//! - 任何 401 响应在本层直接清除会话并强制跳转登录页（横切行为，
//!   与发起请求的视图无关）
//! - 不重试、不去重、不取消：每个用户操作至多发起一次请求

use crate::config;
use crate::web::route::AppRoute;
use crate::web::storage::SessionStore;
use footperf_shared::protocol::{ApiRequest, Backend, HttpMethod};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

/// HTTP 错误类型
#[derive(Debug, Clone)]
pub enum ApiError {
    /// 网络/传输失败
    Network(String),
    /// 响应解析失败
    Parse(String),
    /// 后端返回的业务错误（HTTP 错误状态 + `{error}` 信息）
    Api { status: u16, message: String },
    /// 401：会话已在本层被清除并跳转
    Unauthorized,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Parse(msg) => write!(f, "Invalid response: {}", msg),
            ApiError::Api { status, message } => write!(f, "API error ({}): {}", status, message),
            ApiError::Unauthorized => write!(f, "Session expirée"),
        }
    }
}

impl ApiError {
    /// 后端业务错误信息（`{error}` 字段），其它情况为 None
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// 面向用户的提示：后端业务信息优先，否则用调用方给定的文案
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// 后端错误响应体
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

fn base_url(backend: Backend) -> &'static str {
    match backend {
        Backend::Auth => config::auth_api_url(),
        Backend::Prediction => config::prediction_api_url(),
    }
}

fn endpoint_url(backend: Backend, path: &str) -> String {
    let base = base_url(backend).trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// 注入 Bearer 令牌（存在时）
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match SessionStore::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// 执行一个 JSON 端点请求
pub async fn execute<R: ApiRequest>(request: &R) -> Result<R::Response, ApiError> {
    let url = endpoint_url(R::BACKEND, R::PATH);
    let builder = authorize(match R::METHOD {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
        HttpMethod::Put => Request::put(&url),
    });

    let response = match R::METHOD {
        HttpMethod::Get => builder.send().await,
        _ => builder
            .json(request)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(response).await
}

/// 执行 multipart 上传（批量预测的唯一非 JSON 调用）
///
/// 不手动设置 Content-Type，浏览器会自动带上 boundary。
pub async fn post_form<T: DeserializeOwned>(
    backend: Backend,
    path: &str,
    form: &web_sys::FormData,
) -> Result<T, ApiError> {
    let url = endpoint_url(backend, path);
    let request = authorize(Request::post(&url))
        .body(JsValue::from(form.clone()))
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if status == 401 {
        expire_session();
        return Err(ApiError::Unauthorized);
    }

    if !response.ok() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| format!("Erreur serveur ({})", status));
        return Err(ApiError::Api { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// 401 的全局处理：清除持久化会话并强制回到登录页
///
/// 这里用整页跳转而不是路由服务：跳转后应用重新初始化，
/// 会话状态自然归零。
fn expire_session() {
    web_sys::console::warn_1(&"[Http] Got 401. Clearing session and redirecting to login.".into());
    SessionStore::clear();
    if let Some(window) = web_sys::window() {
        let _ = window
            .location()
            .set_href(AppRoute::auth_failure_redirect().to_path());
    }
}
