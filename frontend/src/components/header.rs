use crate::components::icons::{BarChart3, LogOut, Settings};
use crate::session::{self, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 顶部导航栏
///
/// 左侧 logo 与导航链接，右侧根据会话状态切换：
/// 用户下拉菜单（资料/登出）或 登录/注册按钮。
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let user = session.user_signal();

    let is_active = move |route: AppRoute| router.current_route().get() == route;

    let on_logout = move |_| {
        spawn_local(async move {
            session::logout(session).await;
        });
        router.navigate("/");
    };

    view! {
        <header class="navbar bg-base-100 shadow-md px-4 sticky top-0 z-40">
            <div class="flex-1 gap-1">
                <a
                    class="btn btn-ghost text-xl"
                    href="/"
                    on:click=move |ev| {
                        ev.prevent_default();
                        router.navigate("/");
                    }
                >
                    "Foot Perf" <span class="text-primary font-black">"IA"</span>
                </a>

                <a
                    class="btn btn-ghost btn-sm"
                    class=("btn-active", move || is_active(AppRoute::Home))
                    href="/"
                    on:click=move |ev| {
                        ev.prevent_default();
                        router.navigate("/");
                    }
                >
                    "Accueil"
                </a>
                <a
                    class="btn btn-ghost btn-sm gap-1"
                    class=("btn-active", move || is_active(AppRoute::Prediction))
                    href="/prediction"
                    on:click=move |ev| {
                        ev.prevent_default();
                        router.navigate("/prediction");
                    }
                >
                    <BarChart3 attr:class="h-4 w-4" /> "Prédiction"
                </a>
            </div>

            <div class="flex-none">
                <Show
                    when=move || user.get().is_some()
                    fallback=move || {
                        view! {
                            <div class="flex gap-2">
                                <a
                                    class="btn btn-outline btn-sm"
                                    href="/login"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        router.navigate("/login");
                                    }
                                >
                                    "Connexion"
                                </a>
                                <a
                                    class="btn btn-primary btn-sm"
                                    href="/register"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        router.navigate("/register");
                                    }
                                >
                                    "Inscription"
                                </a>
                            </div>
                        }
                    }
                >
                    <div class="dropdown dropdown-end">
                        <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                            <div class="avatar avatar-placeholder">
                                <div class="bg-primary text-primary-content w-8 rounded-full">
                                    <span>
                                        {move || user.get().map(|u| u.initial()).unwrap_or_default()}
                                    </span>
                                </div>
                            </div>
                            <span class="hidden md:inline">
                                {move || user.get().map(|u| u.full_name()).unwrap_or_default()}
                            </span>
                        </div>
                        <ul
                            tabindex="0"
                            class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-56"
                        >
                            <li class="menu-title">
                                <span>
                                    {move || user.get().map(|u| u.email).unwrap_or_default()}
                                </span>
                            </li>
                            <li>
                                <a
                                    class:active=move || is_active(AppRoute::Profile)
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        router.navigate("/profile");
                                    }
                                >
                                    <Settings attr:class="h-4 w-4" />
                                    "Mon Profil"
                                </a>
                            </li>
                            <li>
                                <a class="text-error" on:click=on_logout>
                                    <LogOut attr:class="h-4 w-4" />
                                    "Déconnexion"
                                </a>
                            </li>
                        </ul>
                    </div>
                </Show>
            </div>
        </header>
    }
}
