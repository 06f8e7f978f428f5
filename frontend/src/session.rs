//! 会话模块
//!
//! 管理当前认证用户的状态，与路由系统解耦：
//! 路由服务通过注入的信号检查认证状态。
//! 持久化镜像（令牌 + 用户快照）由 `web::storage` 负责，
//! 不变量：任何认证失败路径都同时清除两者。

use crate::api;
use crate::web::oauth::{self, OauthListener};
use crate::web::storage::SessionStore;
use footperf_shared::User;
use footperf_shared::protocol::{
    ChangePasswordRequest, LoginRequest, RegisterRequest, UpdateProfileRequest,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 会话状态
#[derive(Clone, Default)]
pub struct SessionState {
    /// 当前用户（启动校验或登录成功后才有值）
    pub user: Option<User>,
    /// 启动校验是否仍在进行
    pub loading: bool,
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState {
            user: None,
            loading: true,
        });
        Self { state, set_state }
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().user.is_some())
    }

    /// 启动校验信号（用于路由服务注入）
    pub fn is_loading_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().loading)
    }

    pub fn user_signal(&self) -> Signal<Option<User>> {
        let state = self.state;
        Signal::derive(move || state.get().user)
    }

    /// 持久化用户快照并更新内存状态（两者保持一致）
    fn store_user(&self, user: User) {
        SessionStore::set_user(&user);
        self.set_state.update(|s| s.user = Some(user));
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 初始化会话状态（每次应用加载只调用一次）
///
/// 持久化的令牌与快照都存在时向后端校验会话；
/// 校验失败则清除持久化状态。无论结果如何都清除 loading 标记。
pub fn init_session(ctx: SessionContext) {
    spawn_local(async move {
        if SessionStore::token().is_some() && SessionStore::user().is_some() {
            match api::auth::current_user().await {
                Ok(envelope) => ctx.store_user(envelope.user),
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[Session] Stored token rejected: {}", err).into(),
                    );
                    SessionStore::clear();
                }
            }
        }
        ctx.set_state.update(|s| s.loading = false);
    });
}

/// 登录；成功时持久化令牌与快照并更新会话
///
/// 永远不向调用方抛出：失败以消息返回。
pub async fn login(ctx: SessionContext, credentials: LoginRequest) -> Result<(), String> {
    match api::auth::login(&credentials).await {
        Ok(response) => {
            SessionStore::set_token(&response.access_token);
            ctx.store_user(response.user);
            Ok(())
        }
        Err(err) => Err(err.user_message("Échec de la connexion")),
    }
}

/// 注册；契约与 [`login`] 相同
pub async fn register(ctx: SessionContext, data: RegisterRequest) -> Result<(), String> {
    match api::auth::register(&data).await {
        Ok(response) => {
            SessionStore::set_token(&response.access_token);
            ctx.store_user(response.user);
            Ok(())
        }
        Err(err) => Err(err.user_message("Échec de l'inscription")),
    }
}

/// 注销
///
/// 后端调用尽力而为（失败只记日志）；
/// 本地持久化状态与内存用户无条件清除。
pub async fn logout(ctx: SessionContext) {
    if let Err(err) = api::auth::logout().await {
        web_sys::console::warn_1(&format!("[Session] Logout request failed: {}", err).into());
    }
    SessionStore::clear();
    ctx.set_state.update(|s| s.user = None);
}

/// 打开 Google OAuth 弹窗（不阻塞）
///
/// 完成信号经跨窗口消息异步到达：收到令牌后持久化、
/// 拉取用户快照并更新会话。返回的监听器由宿主视图持有，
/// 视图卸载时随之解除。
pub fn google_login(ctx: SessionContext) -> Option<OauthListener> {
    oauth::begin_google_login(move |token| {
        SessionStore::set_token(&token);
        spawn_local(async move {
            match api::auth::current_user().await {
                Ok(envelope) => ctx.store_user(envelope.user),
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("[Session] OAuth token rejected: {}", err).into(),
                    );
                    SessionStore::clear();
                }
            }
        });
    })
}

/// 更新个人资料；成功时重新持久化用户快照
pub async fn update_profile(ctx: SessionContext, data: UpdateProfileRequest) -> Result<(), String> {
    match api::auth::update_profile(&data).await {
        Ok(response) => {
            ctx.store_user(response.user);
            Ok(())
        }
        Err(err) => Err(err.user_message("Échec de la mise à jour du profil")),
    }
}

/// 修改密码（客户端校验由视图负责）
pub async fn change_password(data: ChangePasswordRequest) -> Result<(), String> {
    match api::auth::change_password(&data).await {
        Ok(_) => Ok(()),
        Err(err) => Err(err.user_message("Échec du changement de mot de passe")),
    }
}

/// 手动刷新个人资料
pub async fn fetch_profile(ctx: SessionContext) -> Result<(), String> {
    match api::auth::profile().await {
        Ok(response) => {
            ctx.store_user(response.user);
            Ok(())
        }
        Err(err) => Err(err.user_message("Échec de l'actualisation du profil")),
    }
}
