use serde::{Deserialize, Serialize};

pub mod attributes;
pub mod batch;
mod date;
pub mod performance;
pub mod protocol;
pub mod serde_util;

pub use date::format_date_fr;
pub use performance::PerformanceTier;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中持久化的令牌键
pub const STORAGE_TOKEN_KEY: &str = "access_token";
/// LocalStorage 中持久化的用户快照键
pub const STORAGE_USER_KEY: &str = "user";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 已认证用户的快照
///
/// 所有字段均由认证服务签发，客户端只读；
/// 仅能通过显式的资料更新接口修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub auth_provider: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// 头像占位符使用的首字母
    pub fn initial(&self) -> String {
        self.first_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    }

    /// 认证方式的展示文本
    pub fn provider_label(&self) -> &'static str {
        if self.auth_provider == "google" {
            "Google"
        } else {
            "Email/Mot de passe"
        }
    }

    /// 账户创建日期 (dd/mm/YYYY)，无法解析时返回 None
    pub fn created_at_fr(&self) -> Option<String> {
        self.created_at.as_deref().and_then(format_date_fr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        serde_json::from_value(serde_json::json!({
            "id": "7f9c0a7e-0000-4000-8000-000000000000",
            "email": "kylian@example.com",
            "first_name": "Kylian",
            "last_name": "Mbappé",
            "auth_provider": "local",
            "created_at": "2024-01-15T10:30:00.123456",
            "is_active": true
        }))
        .unwrap()
    }

    #[test]
    fn user_roundtrip_from_backend_payload() {
        let user = sample_user();
        assert_eq!(user.full_name(), "Kylian Mbappé");
        assert_eq!(user.initial(), "K");
        assert_eq!(user.provider_label(), "Email/Mot de passe");
        assert_eq!(user.created_at_fr().as_deref(), Some("15/01/2024"));
    }

    #[test]
    fn user_google_provider_label() {
        let mut user = sample_user();
        user.auth_provider = "google".to_string();
        assert_eq!(user.provider_label(), "Google");
    }

    #[test]
    fn user_tolerates_missing_optional_fields() {
        let user: User = serde_json::from_value(serde_json::json!({ "email": "a@b.c" })).unwrap();
        assert_eq!(user.initial(), "U");
        assert!(user.created_at_fr().is_none());
        assert!(!user.is_active);
    }
}
