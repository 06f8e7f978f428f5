use crate::api;
use crate::components::icons::{
    AlertCircle, ArrowLeft, CheckCircle, Lightbulb, Target, TrendingUp,
};
use crate::state::{SingleOutcome, use_results};
use crate::web::router::use_router;
use footperf_shared::PerformanceTier;
use footperf_shared::attributes;
use footperf_shared::performance::format_score;
use footperf_shared::protocol::{Recommendation, RecommendationsRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 等级对应的图标
fn tier_icon(tier: PerformanceTier) -> AnyView {
    match tier {
        PerformanceTier::Excellent => view! { <CheckCircle attr:class="h-8 w-8" /> }.into_any(),
        PerformanceTier::Good => view! { <TrendingUp attr:class="h-8 w-8" /> }.into_any(),
        _ => view! { <AlertCircle attr:class="h-8 w-8" /> }.into_any(),
    }
}

/// 一条训练建议卡片
#[component]
fn RecommendationCard(recommendation: Recommendation) -> impl IntoView {
    let rec = recommendation;
    let progress = format!("{}%", rec.progress_percent());
    let image = rec.image.clone().filter(|url| !url.is_empty());

    view! {
        <div class="card bg-base-100 shadow-md">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h4 class="font-bold">{attributes::display_label(&rec.attribute)}</h4>
                    <span class="badge badge-outline">
                        "Actuel : " {format_score(rec.current_value)}
                    </span>
                </div>

                <div class="flex items-center gap-3">
                    <div class="w-full bg-base-300 rounded-full h-2">
                        <div class="bg-primary h-2 rounded-full" style:width=progress></div>
                    </div>
                    <span class="text-sm whitespace-nowrap text-base-content/70">
                        "Cible : " {format_score(rec.threshold)}
                    </span>
                </div>

                <p class="text-sm text-base-content/80">{rec.recommendation.clone()}</p>

                {image
                    .map(|url| {
                        view! {
                            <figure class="mt-2">
                                <img src=url alt=rec.attribute.clone() class="rounded-lg" />
                            </figure>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
fn ResultContent(outcome: SingleOutcome) -> impl IntoView {
    let router = use_router();

    let tier = PerformanceTier::from_score(outcome.prediction);
    let prediction = outcome.prediction;
    let from_batch = outcome.from_batch;

    // 推荐请求用的收敛映射（34 个数值，缺失退化为 50）
    let normalized = attributes::normalize_for_recommendations(&outcome.player_data);
    let has_enough = attributes::has_enough_for_recommendations(&normalized);
    let normalized = StoredValue::new(normalized);

    let (recommendations, set_recommendations) = signal(Vec::<Recommendation>::new());
    let (loading_recs, set_loading_recs) = signal(false);
    let (show_recs, set_show_recs) = signal(false);

    let on_get_recommendations = move |_| {
        set_loading_recs.set(true);
        let request = RecommendationsRequest {
            player_data: normalized.get_value(),
            prediction,
        };
        spawn_local(async move {
            match api::prediction::recommendations(&request).await {
                Ok(response) if response.success => {
                    set_recommendations.set(response.recommendations);
                    set_show_recs.set(true);
                }
                Ok(_) => {}
                Err(err) => {
                    web_sys::console::error_1(&format!("[Recommendations] {}", err).into());
                }
            }
            set_loading_recs.set(false);
        });
    };

    let back_path = if from_batch { "/prediction-results" } else { "/prediction" };
    let back_label = if from_batch {
        "Retour aux résultats"
    } else {
        "Retour à la prédiction"
    };

    // 属性摘要：前 10 项 + 剩余计数
    let summary: Vec<(String, f64)> = normalized
        .with_value(|map| map.iter().map(|(k, v)| (k.clone(), *v)).collect());
    let extra_count = summary.len().saturating_sub(10);

    view! {
        <div class="min-h-screen bg-base-200 py-8">
            <div class="max-w-5xl mx-auto px-4 space-y-6">
                <div class="flex items-center gap-4 flex-wrap">
                    <button
                        class="btn btn-ghost gap-2"
                        on:click=move |_| router.navigate(back_path)
                    >
                        <ArrowLeft attr:class="h-5 w-5" />
                        {back_label}
                    </button>
                    <h1 class="text-3xl font-bold">"Résultat de la prédiction"</h1>
                    <Show when=move || from_batch>
                        <span class="badge badge-secondary">"Analyse depuis un fichier CSV"</span>
                    </Show>
                </div>

                // 主分数卡片
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body flex-col md:flex-row items-center gap-8">
                        <div class="flex flex-col items-center gap-1 text-primary">
                            <Target attr:class="h-12 w-12" />
                            <span class="text-6xl font-black">{format_score(prediction)}</span>
                            <span class="text-base-content/70">"Note globale"</span>
                        </div>
                        <div class="flex flex-col items-center md:items-start gap-2">
                            <div style:color=tier.color()>{tier_icon(tier)}</div>
                            <h3 class="text-2xl font-bold" style:color=tier.color()>
                                {tier.label()}
                            </h3>
                            <p class="text-base-content/80">{tier.description()}</p>
                        </div>
                    </div>
                </div>

                // 推荐区块
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body">
                        <Show
                            when=move || show_recs.get()
                            fallback=move || {
                                view! {
                                    <div class="flex flex-col items-center text-center gap-3 py-4">
                                        <Lightbulb attr:class="h-12 w-12 text-warning" />
                                        <h3 class="text-xl font-bold">
                                            "Recommandations d'entraînement personnalisées"
                                        </h3>
                                        <p class="text-base-content/70">
                                            "Générées automatiquement selon les attributs actuels du joueur"
                                        </p>

                                        {if has_enough {
                                            view! {
                                                <button
                                                    class="btn btn-primary"
                                                    disabled=move || loading_recs.get()
                                                    on:click=on_get_recommendations
                                                >
                                                    {move || {
                                                        if loading_recs.get() {
                                                            "Génération..."
                                                        } else {
                                                            "Obtenir les recommandations"
                                                        }
                                                    }}
                                                </button>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <div role="alert" class="alert alert-warning max-w-md">
                                                    <AlertCircle attr:class="h-5 w-5" />
                                                    <div>
                                                        <p>
                                                            "Données insuffisantes pour générer des recommandations."
                                                        </p>
                                                        <p class="text-xs">
                                                            "Assurez-vous que le joueur possède au moins 5 attributs valides."
                                                        </p>
                                                    </div>
                                                </div>
                                            }
                                                .into_any()
                                        }}
                                    </div>
                                }
                            }
                        >
                            <h3 class="text-xl font-bold">"Recommandations d'entraînement"</h3>
                            <p class="text-sm text-base-content/70">
                                "Basées sur l'analyse du profil du joueur"
                            </p>

                            <Show
                                when=move || !recommendations.get().is_empty()
                                fallback=|| {
                                    view! {
                                        <div class="flex flex-col items-center gap-2 py-6 text-success">
                                            <CheckCircle attr:class="h-12 w-12" />
                                            <h4 class="font-bold">"Performance excellente"</h4>
                                            <p class="text-base-content/70">
                                                "Aucune recommandation nécessaire : le joueur performe très bien."
                                            </p>
                                        </div>
                                    }
                                }
                            >
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-2">
                                    {move || {
                                        recommendations
                                            .get()
                                            .into_iter()
                                            .take(6)
                                            .map(|rec| {
                                                view! { <RecommendationCard recommendation=rec /> }
                                            })
                                            .collect_view()
                                    }}
                                </div>
                            </Show>
                        </Show>
                    </div>
                </div>

                // 属性摘要
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body">
                        <h3 class="text-xl font-bold">"Résumé des attributs du joueur"</h3>
                        <div class="grid grid-cols-2 md:grid-cols-5 gap-3 mt-2">
                            {summary
                                .iter()
                                .take(10)
                                .map(|(name, value)| {
                                    view! {
                                        <div class="bg-base-200 rounded-lg p-3 text-center">
                                            <div class="text-xs text-base-content/70">
                                                {attributes::display_label(name)}
                                            </div>
                                            <div class="font-bold">{format_score(*value)}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <Show when=move || { extra_count > 0 }>
                            <p class="text-xs text-base-content/50 mt-2">
                                "+ " {extra_count} " attributs supplémentaires"
                            </p>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// 单次预测结果页
///
/// 结果经由内存导航状态到达；刷新后状态丢失，渲染解释性空状态。
#[component]
pub fn PredictionResultPage() -> impl IntoView {
    let router = use_router();
    let results = use_results();

    move || match results.single.get() {
        Some(outcome) => view! { <ResultContent outcome=outcome /> }.into_any(),
        None => view! {
            <div class="min-h-screen bg-base-200 flex items-center justify-center">
                <div class="text-center space-y-4">
                    <AlertCircle attr:class="h-16 w-16 mx-auto text-base-content/40" />
                    <h2 class="text-2xl font-bold">"Aucune donnée disponible"</h2>
                    <p class="text-base-content/70">
                        "Veuillez effectuer une prédiction avant d'accéder à cette page."
                    </p>
                    <button
                        class="btn btn-primary gap-2"
                        on:click=move |_| router.navigate("/prediction")
                    >
                        <ArrowLeft attr:class="h-5 w-5" />
                        "Retour à la prédiction"
                    </button>
                </div>
            </div>
        }
        .into_any(),
    }
}
