use crate::components::icons::{Eye, EyeOff, Lock, Mail, UserRound};
use crate::session::{self, use_session};
use crate::web::oauth::OauthListener;
use crate::web::router::use_router;
use footperf_shared::protocol::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 最短密码长度（与认证服务一致）
const MIN_PASSWORD_LENGTH: usize = 6;

/// 注册页
///
/// 确认密码与最短长度在客户端先行校验，通过后才调用后端。
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let oauth_listener = StoredValue::new_local(Option::<OauthListener>::None);
    on_cleanup(move || oauth_listener.set_value(None));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        if password.get() != confirm_password.get() {
            set_error_msg.set(Some("Les mots de passe ne correspondent pas".to_string()));
            return;
        }
        if password.get().chars().count() < MIN_PASSWORD_LENGTH {
            set_error_msg.set(Some(
                "Le mot de passe doit contenir au moins 6 caractères".to_string(),
            ));
            return;
        }

        set_is_submitting.set(true);

        spawn_local(async move {
            // 确认密码只用于客户端校验，不进请求体
            let data = RegisterRequest {
                first_name: first_name.get_untracked(),
                last_name: last_name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match session::register(session, data).await {
                Ok(()) => router.navigate("/"),
                Err(message) => set_error_msg.set(Some(message)),
            }
            set_is_submitting.set(false);
        });
    };

    let on_google = move |_| {
        set_error_msg.set(None);
        oauth_listener.set_value(session::google_login(session));
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-2">
                    <h2 class="text-3xl font-bold">"Créer un compte"</h2>
                    <p class="text-base-content/70">"Rejoignez Foot Perf AI dès aujourd'hui"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label" for="first_name">
                                    <span class="label-text">"Prénom"</span>
                                </label>
                                <label class="input input-bordered flex items-center gap-2 w-full">
                                    <UserRound attr:class="h-4 w-4 opacity-50" />
                                    <input
                                        id="first_name"
                                        type="text"
                                        placeholder="Prénom"
                                        class="grow min-w-0"
                                        on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                        prop:value=first_name
                                        required
                                    />
                                </label>
                            </div>
                            <div class="form-control">
                                <label class="label" for="last_name">
                                    <span class="label-text">"Nom"</span>
                                </label>
                                <label class="input input-bordered flex items-center gap-2 w-full">
                                    <UserRound attr:class="h-4 w-4 opacity-50" />
                                    <input
                                        id="last_name"
                                        type="text"
                                        placeholder="Nom"
                                        class="grow min-w-0"
                                        on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                        prop:value=last_name
                                        required
                                    />
                                </label>
                            </div>
                        </div>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Adresse email"</span>
                            </label>
                            <label class="input input-bordered flex items-center gap-2 w-full">
                                <Mail attr:class="h-4 w-4 opacity-50" />
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="Entrez votre email"
                                    class="grow"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    required
                                />
                            </label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Mot de passe"</span>
                            </label>
                            <label class="input input-bordered flex items-center gap-2 w-full">
                                <Lock attr:class="h-4 w-4 opacity-50" />
                                <input
                                    id="password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    placeholder="Min. 6 caractères"
                                    class="grow"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    required
                                />
                                <button
                                    type="button"
                                    class="btn btn-ghost btn-xs btn-circle"
                                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                                >
                                    {move || {
                                        if show_password.get() {
                                            view! { <EyeOff attr:class="h-4 w-4" /> }.into_any()
                                        } else {
                                            view! { <Eye attr:class="h-4 w-4" /> }.into_any()
                                        }
                                    }}
                                </button>
                            </label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="confirm_password">
                                <span class="label-text">"Confirmer le mot de passe"</span>
                            </label>
                            <label class="input input-bordered flex items-center gap-2 w-full">
                                <Lock attr:class="h-4 w-4 opacity-50" />
                                <input
                                    id="confirm_password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    placeholder="Confirmez votre mot de passe"
                                    class="grow"
                                    on:input=move |ev| {
                                        set_confirm_password.set(event_target_value(&ev))
                                    }
                                    prop:value=confirm_password
                                    required
                                />
                            </label>
                        </div>

                        <div class="form-control mt-4">
                            <button class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Inscription..."
                                        }
                                            .into_any()
                                    } else {
                                        "S'inscrire".into_any()
                                    }
                                }}
                            </button>
                        </div>

                        <div class="divider text-sm text-base-content/50">"Ou continuer avec"</div>

                        <button type="button" class="btn btn-outline w-full" on:click=on_google>
                            "Continuer avec Google"
                        </button>

                        <p class="text-center text-sm mt-4">
                            "Vous avez déjà un compte ? "
                            <a
                                class="link link-primary"
                                href="/login"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    router.navigate("/login");
                                }
                            >
                                "Se connecter"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
