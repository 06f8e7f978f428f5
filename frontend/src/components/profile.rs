use crate::components::icons::{Eye, EyeOff, Lock, Mail, UserRound};
use crate::session::{self, use_session};
use footperf_shared::protocol::{ChangePasswordRequest, UpdateProfileRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 最短密码长度（与认证服务一致）
const MIN_PASSWORD_LENGTH: usize = 6;

/// 带可见性切换的密码输入框
#[component]
fn PasswordField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <label class="input input-bordered flex items-center gap-2 w-full">
                <Lock attr:class="h-4 w-4 opacity-50" />
                <input
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder
                    class="grow"
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                    prop:value=value
                    required
                />
                <button
                    type="button"
                    class="btn btn-ghost btn-xs btn-circle"
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || {
                        if visible.get() {
                            view! { <EyeOff attr:class="h-4 w-4" /> }.into_any()
                        } else {
                            view! { <Eye attr:class="h-4 w-4" /> }.into_any()
                        }
                    }}
                </button>
            </label>
        </div>
    }
}

/// 个人资料页
///
/// 两个互相独立的表单（资料、密码），各自有忙碌标记，
/// 共用同一条消息横幅。账户信息区只读。
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let user = session.user_signal();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());

    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());

    let (saving_profile, set_saving_profile) = signal(false);
    let (saving_password, set_saving_password) = signal(false);
    // (est une erreur, texte)
    let (message, set_message) = signal(Option::<(bool, String)>::None);

    // 会话用户到表单字段的预填充
    Effect::new(move |_| {
        if let Some(user) = user.get() {
            set_first_name.set(user.first_name);
            set_last_name.set(user.last_name);
            set_email.set(user.email);
        }
    });

    let on_update_profile = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving_profile.set(true);
        set_message.set(None);

        spawn_local(async move {
            let data = UpdateProfileRequest {
                first_name: first_name.get_untracked(),
                last_name: last_name.get_untracked(),
            };
            match session::update_profile(session, data).await {
                Ok(()) => {
                    set_message.set(Some((false, "Profil mis à jour avec succès".to_string())));
                }
                Err(err) => set_message.set(Some((true, err))),
            }
            set_saving_profile.set(false);
        });
    };

    let on_change_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_message.set(None);

        // 客户端校验先行
        if new_password.get() != confirm_password.get() {
            set_message.set(Some((
                true,
                "Les nouveaux mots de passe ne correspondent pas".to_string(),
            )));
            return;
        }
        if new_password.get().chars().count() < MIN_PASSWORD_LENGTH {
            set_message.set(Some((
                true,
                "Le nouveau mot de passe doit contenir au moins 6 caractères".to_string(),
            )));
            return;
        }

        set_saving_password.set(true);

        spawn_local(async move {
            let data = ChangePasswordRequest {
                current_password: current_password.get_untracked(),
                new_password: new_password.get_untracked(),
            };
            match session::change_password(data).await {
                Ok(()) => {
                    set_message.set(Some((false, "Mot de passe modifié avec succès".to_string())));
                    // 密码字段只在成功时清空
                    set_current_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                }
                Err(err) => set_message.set(Some((true, err))),
            }
            set_saving_password.set(false);
        });
    };

    let on_refresh = move |_| {
        spawn_local(async move {
            match session::fetch_profile(session).await {
                Ok(()) => set_message.set(Some((false, "Profil actualisé".to_string()))),
                Err(err) => set_message.set(Some((true, err))),
            }
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 py-8">
            <div class="max-w-3xl mx-auto px-4 space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-3xl font-bold">"Mon Profil"</h1>
                        <p class="text-base-content/70">
                            "Gérez vos informations personnelles et votre mot de passe"
                        </p>
                    </div>
                    <button class="btn btn-outline btn-sm" on:click=on_refresh>
                        "Actualiser"
                    </button>
                </div>

                <Show when=move || message.get().is_some()>
                    <div
                        role="alert"
                        class=move || {
                            if message.get().map(|(is_err, _)| is_err).unwrap_or(false) {
                                "alert alert-error"
                            } else {
                                "alert alert-success"
                            }
                        }
                    >
                        <span>{move || message.get().map(|(_, text)| text).unwrap_or_default()}</span>
                    </div>
                </Show>

                // 个人信息表单
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body">
                        <h2 class="card-title">"Informations personnelles"</h2>
                        <form class="space-y-4" on:submit=on_update_profile>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                <div class="form-control">
                                    <label class="label" for="first_name">
                                        <span class="label-text">"Prénom"</span>
                                    </label>
                                    <label class="input input-bordered flex items-center gap-2 w-full">
                                        <UserRound attr:class="h-4 w-4 opacity-50" />
                                        <input
                                            id="first_name"
                                            type="text"
                                            placeholder="Votre prénom"
                                            class="grow min-w-0"
                                            on:input=move |ev| {
                                                set_first_name.set(event_target_value(&ev))
                                            }
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
                                            placeholder="Votre nom"
                                            class="grow min-w-0"
                                            on:input=move |ev| {
                                                set_last_name.set(event_target_value(&ev))
                                            }
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
                                <label class="input input-bordered flex items-center gap-2 w-full bg-base-200">
                                    <Mail attr:class="h-4 w-4 opacity-50" />
                                    <input
                                        id="email"
                                        type="email"
                                        class="grow"
                                        prop:value=email
                                        readonly
                                        disabled
                                    />
                                </label>
                                <span class="label-text-alt text-base-content/50 mt-1">
                                    "L'adresse email ne peut pas être modifiée"
                                </span>
                            </div>

                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || saving_profile.get()
                            >
                                {move || {
                                    if saving_profile.get() {
                                        "Mise à jour..."
                                    } else {
                                        "Mettre à jour"
                                    }
                                }}
                            </button>
                        </form>
                    </div>
                </div>

                // 密码修改表单
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body">
                        <h2 class="card-title">"Changement de mot de passe"</h2>
                        <form class="space-y-4" on:submit=on_change_password>
                            <PasswordField
                                id="current_password"
                                label="Mot de passe actuel"
                                placeholder="Votre mot de passe actuel"
                                value=current_password
                                set_value=set_current_password
                            />
                            <PasswordField
                                id="new_password"
                                label="Nouveau mot de passe"
                                placeholder="Nouveau mot de passe (min. 6 caractères)"
                                value=new_password
                                set_value=set_new_password
                            />
                            <PasswordField
                                id="confirm_password"
                                label="Confirmer le nouveau mot de passe"
                                placeholder="Confirmez votre nouveau mot de passe"
                                value=confirm_password
                                set_value=set_confirm_password
                            />

                            <button
                                type="submit"
                                class="btn btn-primary gap-2"
                                disabled=move || saving_password.get()
                            >
                                <Lock attr:class="h-4 w-4" />
                                {move || {
                                    if saving_password.get() {
                                        "Changement..."
                                    } else {
                                        "Changer le mot de passe"
                                    }
                                }}
                            </button>
                        </form>
                    </div>
                </div>

                // 账户信息（只读）
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body">
                        <h2 class="card-title">"Informations du compte"</h2>
                        <div class="space-y-2 text-sm">
                            <div class="flex justify-between">
                                <span class="text-base-content/70">
                                    "Fournisseur d'authentification :"
                                </span>
                                <span class="font-medium">
                                    {move || {
                                        user.get().map(|u| u.provider_label()).unwrap_or_default()
                                    }}
                                </span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-base-content/70">"Date de création :"</span>
                                <span class="font-medium">
                                    {move || {
                                        user.get()
                                            .and_then(|u| u.created_at_fr())
                                            .unwrap_or_else(|| "Non disponible".to_string())
                                    }}
                                </span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-base-content/70">"Compte actif :"</span>
                                <span class="font-medium">
                                    {move || {
                                        if user.get().map(|u| u.is_active).unwrap_or(false) {
                                            "Oui"
                                        } else {
                                            "Non"
                                        }
                                    }}
                                </span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
