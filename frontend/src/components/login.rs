use crate::components::icons::{Eye, EyeOff, Lock, Mail};
use crate::session::{self, use_session};
use crate::web::oauth::OauthListener;
use crate::web::router::use_router;
use footperf_shared::protocol::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 登录页
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // OAuth 弹窗的消息订阅：视图卸载时随 StoredValue 一起解除
    let oauth_listener = StoredValue::new_local(Option::<OauthListener>::None);
    on_cleanup(move || oauth_listener.set_value(None));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Veuillez remplir tous les champs".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let credentials = LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match session::login(session, credentials).await {
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
                    <h2 class="text-3xl font-bold">"Connexion"</h2>
                    <p class="text-base-content/70">"Bienvenue sur Foot Perf AI"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

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
                                    placeholder="Entrez votre mot de passe"
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

                        <div class="form-control mt-4">
                            <button class="btn btn-primary w-full" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Connexion..."
                                        }
                                            .into_any()
                                    } else {
                                        "Se connecter".into_any()
                                    }
                                }}
                            </button>
                        </div>

                        <div class="divider text-sm text-base-content/50">"Ou continuer avec"</div>

                        <button type="button" class="btn btn-outline w-full" on:click=on_google>
                            "Continuer avec Google"
                        </button>

                        <p class="text-center text-sm mt-4">
                            "Vous n'avez pas de compte ? "
                            <a
                                class="link link-primary"
                                href="/register"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    router.navigate("/register");
                                }
                            >
                                "S'inscrire"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
