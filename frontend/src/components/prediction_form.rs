use crate::api;
use crate::components::icons::{Sliders, Target, Upload};
use crate::state::{SingleOutcome, use_results};
use crate::web::router::use_router;
use footperf_shared::attributes::{self, AttributeValue};
use leptos::prelude::*;
use leptos::task::spawn_local;

mod form_state;
use form_state::PlayerFormState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum FormTab {
    Single,
    Batch,
}

/// 数值属性的滑杆输入（缩放属性以 1-10 展示，存储时 ×10）
#[component]
fn AttributeSlider(form: PlayerFormState, attribute: &'static str) -> impl IntoView {
    let scaled = attributes::is_scaled(attribute);
    let shown = move || attributes::display_value(attribute, form.current_number(attribute));

    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{attributes::display_label(attribute)}</span>
                <span class="badge badge-primary badge-outline">
                    {move || shown().to_string()}
                </span>
            </label>
            <input
                type="range"
                min="1"
                max={if scaled { "10" } else { "100" }}
                class="range range-primary range-sm"
                prop:value=move || shown().to_string()
                on:input=move |ev| {
                    if let Ok(raw) = event_target_value(&ev).parse::<f64>() {
                        let stored = if scaled { raw * 10.0 } else { raw };
                        form.set_attribute(attribute, AttributeValue::Number(stored));
                    }
                }
            />
        </div>
    }
}

/// 枚举属性的下拉输入
#[component]
fn AttributeSelect(form: PlayerFormState, attribute: &'static str) -> impl IntoView {
    let options = attributes::categorical_options(attribute);
    let current = move || form.current_text(attribute);

    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{attributes::display_label(attribute)}</span>
            </label>
            <select
                class="select select-bordered w-full"
                on:change=move |ev| {
                    form.set_attribute(attribute, AttributeValue::from(event_target_value(&ev)));
                }
            >
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option value=option selected=move || current() == option>
                                {option.to_uppercase()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// 预测表单页：手动输入（单人）与 CSV 导入（批量）两个标签
#[component]
pub fn PredictionFormPage() -> impl IntoView {
    let router = use_router();
    let results = use_results();

    let (active_tab, set_active_tab) = signal(FormTab::Single);
    let (loading, set_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let form = PlayerFormState::new();
    let batch_file = RwSignal::new_local(Option::<web_sys::File>::None);

    let changed_count = move || form.changed_count();

    let on_single_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if changed_count() == 0 {
            return;
        }

        set_loading.set(true);
        set_error_msg.set(None);

        // 1. 只发送改动过的字段用于预测
        let request = form.to_request();
        // 2. 完整映射（默认值 ⊕ 改动）供结果页与推荐使用
        let merged = form.merged();

        spawn_local(async move {
            match api::prediction::predict_single(&request).await {
                Ok(response) if response.success => match response.prediction {
                    Some(prediction) => {
                        results.single.set(Some(SingleOutcome {
                            prediction,
                            player_data: merged,
                            from_batch: false,
                        }));
                        router.navigate("/prediction-result");
                    }
                    None => {
                        set_error_msg.set(Some("Réponse du serveur incomplète".to_string()));
                    }
                },
                Ok(response) => {
                    set_error_msg.set(Some(response.error.unwrap_or_else(|| {
                        "La prédiction a échoué. Veuillez réessayer.".to_string()
                    })));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[Prediction] {}", err).into());
                    set_error_msg.set(Some(
                        err.user_message("La prédiction a échoué. Veuillez réessayer."),
                    ));
                }
            }
            set_loading.set(false);
        });
    };

    let on_file_change = move |ev: web_sys::Event| {
        use wasm_bindgen::JsCast;
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        batch_file.set(file);
        set_error_msg.set(None);
    };

    let on_batch_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // 客户端只校验文件是否选择；内容与大小交给后端
        let Some(file) = batch_file.get_untracked() else {
            set_error_msg.set(Some("Veuillez sélectionner un fichier CSV".to_string()));
            return;
        };

        set_loading.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match api::prediction::predict_batch(&file).await {
                Ok(response) if response.success => {
                    results.batch.set(Some(response.predictions));
                    router.navigate("/prediction-results");
                }
                Ok(response) => {
                    set_error_msg.set(Some(response.error.unwrap_or_else(|| {
                        "La prédiction par lot a échoué. Veuillez vérifier votre fichier et réessayer."
                            .to_string()
                    })));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[Prediction] {}", err).into());
                    set_error_msg.set(Some(err.user_message(
                        "La prédiction par lot a échoué. Veuillez vérifier votre fichier et réessayer.",
                    )));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 py-8">
            <div class="max-w-5xl mx-auto px-4 space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold">"Prédiction de performance"</h1>
                    <p class="text-base-content/70 mt-2">
                        "Prédisez la performance des joueurs de football grâce à nos modèles d'IA avancés"
                    </p>
                </div>

                <div role="tablist" class="tabs tabs-boxed w-fit mx-auto">
                    <a
                        role="tab"
                        class="tab gap-2"
                        class=("tab-active", move || active_tab.get() == FormTab::Single)
                        on:click=move |_| set_active_tab.set(FormTab::Single)
                    >
                        <Sliders attr:class="h-4 w-4" />
                        "Saisie manuelle"
                    </a>
                    <a
                        role="tab"
                        class="tab gap-2"
                        class=("tab-active", move || active_tab.get() == FormTab::Batch)
                        on:click=move |_| set_active_tab.set(FormTab::Batch)
                    >
                        <Upload attr:class="h-4 w-4" />
                        "Import par lot"
                    </a>
                </div>

                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                // 单人表单
                <Show when=move || active_tab.get() == FormTab::Single>
                    <form on:submit=on_single_submit class="space-y-6">
                        {attributes::CATEGORIES
                            .iter()
                            .map(|category| {
                                view! {
                                    <div class="card bg-base-100 shadow-md">
                                        <div class="card-body">
                                            <h3 class="card-title capitalize">
                                                "Attributs " {category.name}
                                            </h3>
                                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                                                {category
                                                    .attributes
                                                    .iter()
                                                    .map(|attribute| {
                                                        let attribute = *attribute;
                                                        if attributes::is_categorical(attribute) {
                                                            view! {
                                                                <AttributeSelect form=form attribute=attribute />
                                                            }
                                                                .into_any()
                                                        } else {
                                                            view! {
                                                                <AttributeSlider form=form attribute=attribute />
                                                            }
                                                                .into_any()
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}

                        <div class="card bg-base-100 shadow-md">
                            <div class="card-body text-sm text-base-content/70">
                                <p>
                                    <strong>"Note : "</strong>
                                    "Seuls les attributs modifiés seront envoyés pour la prédiction. \
                                     Tous les attributs seront disponibles pour les recommandations IA."
                                </p>
                                <p>
                                    "Attributs modifiés : "
                                    <strong>{move || changed_count().to_string()}</strong>
                                </p>
                            </div>
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary btn-lg w-full gap-2"
                            disabled=move || loading.get() || changed_count() == 0
                        >
                            <Target attr:class="h-5 w-5" />
                            {move || {
                                if loading.get() {
                                    "Prédiction en cours..."
                                } else {
                                    "Prédire la performance"
                                }
                            }}
                        </button>
                    </form>
                </Show>

                // 批量表单
                <Show when=move || active_tab.get() == FormTab::Batch>
                    <form on:submit=on_batch_submit class="space-y-6">
                        <div class="card bg-base-100 shadow-md">
                            <div class="card-body items-center text-center">
                                <Upload attr:class="h-12 w-12 text-primary" />
                                <h3 class="card-title">"Importer un fichier CSV"</h3>
                                <p class="text-base-content/70">
                                    "Sélectionnez un fichier CSV contenant les données des joueurs"
                                </p>

                                <input
                                    type="file"
                                    id="file-input"
                                    accept=".csv"
                                    class="hidden"
                                    on:change=on_file_change
                                />
                                <label for="file-input" class="btn btn-outline">
                                    "Choisir un fichier"
                                </label>

                                <Show when=move || batch_file.with(|f| f.is_some())>
                                    <div class="badge badge-success badge-outline mt-2">
                                        "Fichier sélectionné : "
                                        {move || {
                                            batch_file.with(|f| {
                                                f.as_ref().map(|file| file.name()).unwrap_or_default()
                                            })
                                        }}
                                    </div>
                                </Show>
                            </div>
                        </div>

                        <div class="card bg-base-100 shadow-md">
                            <div class="card-body">
                                <h4 class="font-bold">"Exigences du fichier :"</h4>
                                <ul class="list-disc list-inside text-sm text-base-content/70">
                                    <li>"Format CSV encodé UTF-8"</li>
                                    <li>"Toutes les colonnes nécessaires doivent être présentes"</li>
                                    <li>"Taille maximale : 10MB"</li>
                                </ul>
                            </div>
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary btn-lg w-full gap-2"
                            disabled=move || loading.get() || batch_file.with(|f| f.is_none())
                        >
                            <Target attr:class="h-5 w-5" />
                            {move || if loading.get() { "Traitement..." } else { "Prédire le lot" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
