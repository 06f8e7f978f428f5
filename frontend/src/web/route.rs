//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其守卫属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由，公开)
    #[default]
    Home,
    /// 登录页 (仅匿名)
    Login,
    /// 注册页 (仅匿名)
    Register,
    /// 预测表单 (需要认证)
    Prediction,
    /// 单次预测结果 (需要认证)
    PredictionResult,
    /// 批量预测结果 (需要认证)
    BatchResults,
    /// 个人资料 (需要认证)
    Profile,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举；未知路径回退到首页
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/prediction" => Self::Prediction,
            "/prediction-result" => Self::PredictionResult,
            "/prediction-results" => Self::BatchResults,
            "/profile" => Self::Profile,
            _ => Self::Home,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Prediction => "/prediction",
            Self::PredictionResult => "/prediction-result",
            Self::BatchResults => "/prediction-results",
            Self::Profile => "/profile",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Prediction | Self::PredictionResult | Self::BatchResults | Self::Profile
        )
    }

    /// 已认证用户是否应该离开此路由（登录/注册页）
    pub fn anonymous_only(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 已认证用户访问匿名页时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Prediction,
            AppRoute::PredictionResult,
            AppRoute::BatchResults,
            AppRoute::Profile,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unknown_path_falls_back_to_home() {
        assert_eq!(AppRoute::from_path("/nimporte-quoi"), AppRoute::Home);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
    }

    #[test]
    fn guard_table() {
        assert!(AppRoute::Prediction.requires_auth());
        assert!(AppRoute::PredictionResult.requires_auth());
        assert!(AppRoute::BatchResults.requires_auth());
        assert!(AppRoute::Profile.requires_auth());
        assert!(!AppRoute::Home.requires_auth());
        assert!(!AppRoute::Login.requires_auth());

        assert!(AppRoute::Login.anonymous_only());
        assert!(AppRoute::Register.anonymous_only());
        assert!(!AppRoute::Home.anonymous_only());
        assert!(!AppRoute::Prediction.anonymous_only());
    }
}
