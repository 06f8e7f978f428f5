//! Foot Perf AI 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::router`: 路由定义与路由服务（守卫在此）
//! - `session`: 会话状态管理（持久化镜像 + 后端认证操作）
//! - `state`: 视图间的内存导航状态（预测结果载荷）
//! - `api` / `web::http`: 两个后端服务的调用层
//! - `components`: UI 组件层

mod api;
mod config;
mod session;
mod state;

mod components {
    pub mod batch_results;
    pub mod header;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod prediction_form;
    pub mod prediction_result;
    pub mod profile;
    pub mod register;
}

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装：
// History 路由、会话持久化、OAuth 弹窗、文件下载。
pub(crate) mod web {
    pub mod download;
    pub mod http;
    pub mod oauth;
    pub mod route;
    pub mod router;
    pub mod storage;
}

use crate::components::batch_results::BatchResultsPage;
use crate::components::header::Header;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::prediction_form::PredictionFormPage;
use crate::components::prediction_result::PredictionResultPage;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::session::SessionContext;
use crate::state::ResultState;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Prediction => view! { <PredictionFormPage /> }.into_any(),
        AppRoute::PredictionResult => view! { <PredictionResultPage /> }.into_any(),
        AppRoute::BatchResults => view! { <BatchResultsPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文并启动一次性的会话校验
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);
    session::init_session(session_ctx);

    // 2. 结果导航状态（内存中，刷新即失）
    provide_context(ResultState::new());

    // 3. 会话信号注入路由服务（解耦）
    let is_authenticated = session_ctx.is_authenticated_signal();
    let is_loading = session_ctx.is_loading_signal();

    view! {
        <Router is_authenticated=is_authenticated is_loading=is_loading>
            <Header />
            <main>
                <RouterOutlet matcher=route_matcher />
            </main>
        </Router>
    }
}
