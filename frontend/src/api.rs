//! 后端服务调用层
//!
//! 按服务分组的薄封装：认证服务与预测服务的每个端点一个函数，
//! 全部经由 `web::http` 执行器（令牌注入与 401 处理在那一层）。

use crate::web::http::{self, ApiError};

pub mod auth {
    use super::*;
    use footperf_shared::protocol::{
        AuthResponse, ChangePasswordRequest, ChangePasswordResponse, CurrentUserRequest,
        GOOGLE_AUTH_PATH, LoginRequest, LogoutRequest, MessageResponse, ProfileRequest,
        ProfileResponse, ProfileUpdateResponse, RegisterRequest, UpdateProfileRequest,
        UserEnvelope,
    };

    pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        http::execute(request).await
    }

    pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        http::execute(request).await
    }

    pub async fn logout() -> Result<MessageResponse, ApiError> {
        http::execute(&LogoutRequest).await
    }

    /// 校验当前会话并取回用户快照
    pub async fn current_user() -> Result<UserEnvelope, ApiError> {
        http::execute(&CurrentUserRequest).await
    }

    pub async fn profile() -> Result<ProfileResponse, ApiError> {
        http::execute(&ProfileRequest).await
    }

    pub async fn update_profile(
        request: &UpdateProfileRequest,
    ) -> Result<ProfileUpdateResponse, ApiError> {
        http::execute(request).await
    }

    pub async fn change_password(
        request: &ChangePasswordRequest,
    ) -> Result<ChangePasswordResponse, ApiError> {
        http::execute(request).await
    }

    /// OAuth 弹窗打开的入口地址（不走 fetch）
    pub fn google_auth_url() -> String {
        format!(
            "{}{}",
            crate::config::auth_api_url().trim_end_matches('/'),
            GOOGLE_AUTH_PATH
        )
    }
}

pub mod prediction {
    use super::*;
    use footperf_shared::protocol::{
        BATCH_PREDICT_PATH, Backend, BatchPredictionResponse, HealthRequest, HealthResponse,
        PredictionResponse, RecommendationsRequest, RecommendationsResponse,
        SinglePredictionRequest,
    };

    pub async fn predict_single(
        request: &SinglePredictionRequest,
    ) -> Result<PredictionResponse, ApiError> {
        http::execute(request).await
    }

    /// 批量预测：上传一个 CSV 文件（multipart 字段名 `file`）
    pub async fn predict_batch(file: &web_sys::File) -> Result<BatchPredictionResponse, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Network(format!("FormData: {:?}", e)))?;
        form.append_with_blob("file", file)
            .map_err(|e| ApiError::Network(format!("FormData: {:?}", e)))?;
        http::post_form(Backend::Prediction, BATCH_PREDICT_PATH, &form).await
    }

    pub async fn recommendations(
        request: &RecommendationsRequest,
    ) -> Result<RecommendationsResponse, ApiError> {
        http::execute(request).await
    }

    #[allow(dead_code)]
    pub async fn health() -> Result<HealthResponse, ApiError> {
        http::execute(&HealthRequest).await
    }
}
