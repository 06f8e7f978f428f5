//! 后端接口协议定义
//!
//! 两个后端服务 (认证服务、预测服务) 的请求/响应契约。
//! 所有计算都发生在后端，这里只描述线上的 JSON 形状。

use crate::attributes::AttributeValue;
use crate::serde_util::null_to_default;
use crate::User;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;

/// The backend service an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Auth,
    Prediction,
}

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The service that serves this endpoint.
    const BACKEND: Backend;
}

/// OAuth 入口：在弹窗中打开，永远不走 fetch
pub const GOOGLE_AUTH_PATH: &str = "/api/auth/google";

/// 批量预测上传路径 (multipart，不经过 `ApiRequest`)
pub const BATCH_PREDICT_PATH: &str = "/api/predict/batch";

// =========================================================
// 认证服务 (Auth Service)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 登录/注册成功的响应：令牌 + 用户快照
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub success: bool,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoutRequest;

#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserRequest;

#[derive(Debug, Clone, Serialize)]
pub struct ProfileRequest;

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/api/auth/register";
    const METHOD: HttpMethod = HttpMethod::Post;
    const BACKEND: Backend = Backend::Auth;
}

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/api/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
    const BACKEND: Backend = Backend::Auth;
}

impl ApiRequest for LogoutRequest {
    type Response = MessageResponse;
    const PATH: &'static str = "/api/auth/logout";
    const METHOD: HttpMethod = HttpMethod::Post;
    const BACKEND: Backend = Backend::Auth;
}

impl ApiRequest for CurrentUserRequest {
    type Response = UserEnvelope;
    const PATH: &'static str = "/api/auth/me";
    const METHOD: HttpMethod = HttpMethod::Get;
    const BACKEND: Backend = Backend::Auth;
}

impl ApiRequest for ProfileRequest {
    type Response = ProfileResponse;
    const PATH: &'static str = "/api/auth/profile";
    const METHOD: HttpMethod = HttpMethod::Get;
    const BACKEND: Backend = Backend::Auth;
}

impl ApiRequest for UpdateProfileRequest {
    type Response = ProfileUpdateResponse;
    const PATH: &'static str = "/api/auth/profile/update";
    const METHOD: HttpMethod = HttpMethod::Put;
    const BACKEND: Backend = Backend::Auth;
}

impl ApiRequest for ChangePasswordRequest {
    type Response = ChangePasswordResponse;
    const PATH: &'static str = "/api/auth/change-password";
    const METHOD: HttpMethod = HttpMethod::Put;
    const BACKEND: Backend = Backend::Auth;
}

// =========================================================
// 预测服务 (Prediction Service)
// =========================================================

/// 单人预测请求：只包含用户改动过的字段 (稀疏映射)
///
/// 默认值由服务端补齐；完整映射只用于后续的推荐请求。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SinglePredictionRequest(pub BTreeMap<String, AttributeValue>);

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub success: bool,
    #[serde(default)]
    pub prediction: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// 批量预测的一行结果
///
/// 预测服务会把上传 CSV 的所有原始列一并回传，
/// 固定字段之外的列收进 `extra` 以便导出和推荐。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchPrediction {
    #[serde(default, deserialize_with = "null_to_default")]
    pub id: i64,
    /// 可能是数字也可能是 `player_42` 这样的字符串
    #[serde(default)]
    pub player_id: serde_json::Value,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub prediction: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BatchPrediction {
    /// 球员编号的展示文本
    pub fn player_id_text(&self) -> String {
        match &self.player_id {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("Joueur {}", self.id)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchPredictionResponse {
    pub success: bool,
    #[serde(default)]
    pub predictions: Vec<BatchPrediction>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsRequest {
    pub player_data: BTreeMap<String, f64>,
    pub prediction: f64,
}

/// 一条训练建议：某个属性与目标门槛的差距和对应建议
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    pub attribute: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub current_value: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub threshold: f64,
    pub recommendation: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Recommendation {
    /// 进度条宽度 (百分比，封顶 100)
    pub fn progress_percent(&self) -> f64 {
        if self.threshold <= 0.0 {
            return 100.0;
        }
        ((self.current_value / self.threshold) * 100.0).min(100.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthRequest;

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub models_loaded: Option<bool>,
}

impl ApiRequest for SinglePredictionRequest {
    type Response = PredictionResponse;
    const PATH: &'static str = "/api/predict/single";
    const METHOD: HttpMethod = HttpMethod::Post;
    const BACKEND: Backend = Backend::Prediction;
}

impl ApiRequest for RecommendationsRequest {
    type Response = RecommendationsResponse;
    const PATH: &'static str = "/api/predict/recommendations";
    const METHOD: HttpMethod = HttpMethod::Post;
    const BACKEND: Backend = Backend::Prediction;
}

impl ApiRequest for HealthRequest {
    type Response = HealthResponse;
    const PATH: &'static str = "/api/predict/health";
    const METHOD: HttpMethod = HttpMethod::Get;
    const BACKEND: Backend = Backend::Prediction;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeValue;

    #[test]
    fn single_prediction_request_is_sparse() {
        let mut changed = BTreeMap::new();
        changed.insert("finishing".to_string(), AttributeValue::Number(90.0));
        let body = serde_json::to_value(SinglePredictionRequest(changed)).unwrap();
        // 只有改动过的字段出现在请求体里
        assert_eq!(body, serde_json::json!({"finishing": 90.0}));
    }

    #[test]
    fn auth_response_from_backend_payload() {
        let resp: AuthResponse = serde_json::from_str(
            r#"{
                "message": "Login successful",
                "access_token": "eyJhbGciOiJIUzI1NiJ9.x.y",
                "user": {"id": "u-1", "email": "zizou@example.com",
                         "first_name": "Zinédine", "last_name": "Zidane",
                         "auth_provider": "local",
                         "created_at": "2024-02-01T09:00:00", "is_active": true}
            }"#,
        )
        .unwrap();
        assert_eq!(resp.access_token, "eyJhbGciOiJIUzI1NiJ9.x.y");
        assert_eq!(resp.user.first_name, "Zinédine");
    }

    #[test]
    fn batch_row_splits_fixed_and_extra_columns() {
        let row: BatchPrediction = serde_json::from_str(
            r#"{
                "id": 1, "player_id": "player_1", "name": "Antoine Griezmann",
                "prediction": 82.5, "image": null,
                "finishing": 88, "club": "Atlético", "stamina": null
            }"#,
        )
        .unwrap();
        assert_eq!(row.id, 1);
        assert_eq!(row.player_id_text(), "player_1");
        assert_eq!(row.prediction, 82.5);
        assert!(row.image.is_none());
        assert_eq!(row.extra.get("finishing"), Some(&serde_json::json!(88)));
        assert_eq!(row.extra.get("club"), Some(&serde_json::json!("Atlético")));
        assert_eq!(row.extra.get("stamina"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn batch_row_numeric_player_id() {
        let row: BatchPrediction =
            serde_json::from_str(r#"{"id": 3, "player_id": 158023, "name": "Messi", "prediction": 94}"#)
                .unwrap();
        assert_eq!(row.player_id_text(), "158023");
    }

    #[test]
    fn batch_row_null_prediction_defaults_to_zero() {
        let row: BatchPrediction =
            serde_json::from_str(r#"{"id": 4, "player_id": 1, "name": "X", "prediction": null}"#)
                .unwrap();
        assert_eq!(row.prediction, 0.0);
    }

    #[test]
    fn prediction_error_payload() {
        let resp: PredictionResponse =
            serde_json::from_str(r#"{"success": false, "error": "No data provided"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("No data provided"));
        assert!(resp.prediction.is_none());
    }

    #[test]
    fn recommendation_progress_is_capped() {
        let rec = Recommendation {
            attribute: "finishing".to_string(),
            current_value: 60.0,
            threshold: 75.0,
            recommendation: "Travaillez les angles et la puissance.".to_string(),
            image: None,
        };
        assert_eq!(rec.progress_percent(), 80.0);

        let done = Recommendation {
            current_value: 90.0,
            ..rec
        };
        assert_eq!(done.progress_percent(), 100.0);
    }
}
