use crate::components::icons::{ArrowLeft, Download, Search, UserRound};
use crate::state::{SingleOutcome, use_results};
use crate::web::download;
use crate::web::router::use_router;
use footperf_shared::PerformanceTier;
use footperf_shared::batch::{self, SortKey};
use footperf_shared::performance::format_score;
use footperf_shared::protocol::BatchPrediction;
use leptos::prelude::*;

#[component]
fn BatchContent(rows: Vec<BatchPrediction>) -> impl IntoView {
    let router = use_router();
    let results = use_results();

    let total = rows.len();
    let stats = batch::performance_stats(&rows);
    let rows = StoredValue::new(rows);

    let (search, set_search) = signal(String::new());
    let (filter_level, set_filter_level) = signal("all".to_string());
    let (sort_by, set_sort_by) = signal(SortKey::Prediction.as_key().to_string());

    // 筛选与排序完全在客户端进行
    let filtered = Memo::new(move |_| {
        rows.with_value(|rows| {
            batch::filter_and_sort(
                rows,
                &search.get(),
                PerformanceTier::from_filter_key(&filter_level.get()),
                SortKey::from_key(&sort_by.get()),
            )
        })
    });

    let export_summary = move |_| {
        let csv = batch::export_summary_csv(&filtered.get_untracked());
        let filename = batch::summary_filename(&download::today_iso_date());
        if let Err(err) = download::save_csv(&filename, &csv) {
            web_sys::console::error_1(&format!("[Export] {:?}", err).into());
        }
    };

    let export_full = move |_| {
        let csv = batch::export_full_csv(&filtered.get_untracked());
        let filename = batch::full_filename(&download::today_iso_date());
        if let Err(err) = download::save_csv(&filename, &csv) {
            web_sys::console::error_1(&format!("[Export] {:?}", err).into());
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 py-8">
            <div class="max-w-6xl mx-auto px-4 space-y-6">
                <div class="flex items-center justify-between flex-wrap gap-4">
                    <div class="flex items-center gap-4">
                        <button
                            class="btn btn-ghost gap-2"
                            on:click=move |_| router.navigate("/prediction")
                        >
                            <ArrowLeft attr:class="h-5 w-5" />
                            "Retour"
                        </button>
                        <div>
                            <h1 class="text-3xl font-bold">"Résultats des prédictions par lot"</h1>
                            <p class="text-base-content/70">{total} " joueurs analysés"</p>
                        </div>
                    </div>
                    <div class="flex gap-2">
                        <button class="btn btn-outline gap-2" on:click=export_summary>
                            <Download attr:class="h-5 w-5" />
                            "Exporter résumé"
                        </button>
                        <button class="btn btn-primary gap-2" on:click=export_full>
                            <Download attr:class="h-5 w-5" />
                            "Exporter données complètes"
                        </button>
                    </div>
                </div>

                // 等级统计卡片
                <div class="stats stats-vertical md:stats-horizontal shadow w-full bg-base-100">
                    {PerformanceTier::ALL
                        .into_iter()
                        .map(|tier| {
                            view! {
                                <div class="stat">
                                    <div class="stat-title">{tier.label()}</div>
                                    <div class="stat-value" style:color=tier.color()>
                                        {stats.count(tier)}
                                    </div>
                                    <div class="stat-desc">{tier.range_label()}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="stat">
                        <div class="stat-title">"Note moyenne"</div>
                        <div class="stat-value text-primary">{stats.mean_label()}</div>
                        <div class="stat-desc">"sur l'ensemble du lot"</div>
                    </div>
                </div>

                // 检索与筛选
                <div class="flex flex-wrap gap-3 items-center">
                    <label class="input input-bordered flex items-center gap-2 flex-1 min-w-60">
                        <Search attr:class="h-4 w-4 opacity-50" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Rechercher des joueurs..."
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                            prop:value=search
                        />
                    </label>

                    <select
                        class="select select-bordered"
                        on:change=move |ev| set_filter_level.set(event_target_value(&ev))
                    >
                        <option value="all" selected=move || filter_level.get() == "all">
                            "Tous les niveaux"
                        </option>
                        {PerformanceTier::ALL
                            .into_iter()
                            .map(|tier| {
                                view! {
                                    <option
                                        value=tier.css_class()
                                        selected=move || filter_level.get() == tier.css_class()
                                    >
                                        {tier.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <select
                        class="select select-bordered"
                        on:change=move |ev| set_sort_by.set(event_target_value(&ev))
                    >
                        <option value="prediction" selected=move || sort_by.get() == "prediction">
                            "Trier par note"
                        </option>
                        <option value="name" selected=move || sort_by.get() == "name">
                            "Trier par nom"
                        </option>
                        <option value="id" selected=move || sort_by.get() == "id">
                            "Trier par ID"
                        </option>
                    </select>
                </div>

                // 结果表格
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body p-0 overflow-x-auto">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Joueur"</th>
                                    <th>"ID"</th>
                                    <th>"Note"</th>
                                    <th>"Performance"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || filtered.get()
                                    key=|row| row.id
                                    children=move |row| {
                                        let tier = PerformanceTier::from_score(row.prediction);
                                        let has_data = batch::has_recommendation_data(&row);
                                        let detail_row = row.clone();
                                        let on_details = move |_| {
                                            results
                                                .single
                                                .set(
                                                    Some(SingleOutcome {
                                                        prediction: detail_row.prediction,
                                                        player_data: batch::player_data_from_row(&detail_row),
                                                        from_batch: true,
                                                    }),
                                                );
                                            router.navigate("/prediction-result");
                                        };

                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="flex items-center gap-3">
                                                        {match row.image.clone().filter(|u| !u.is_empty()) {
                                                            Some(url) => {
                                                                view! {
                                                                    <div class="avatar">
                                                                        <div class="w-10 rounded-full">
                                                                            <img src=url alt=row.display_name() />
                                                                        </div>
                                                                    </div>
                                                                }
                                                                    .into_any()
                                                            }
                                                            None => {
                                                                view! {
                                                                    <div class="bg-base-300 rounded-full p-2">
                                                                        <UserRound attr:class="h-5 w-5 opacity-60" />
                                                                    </div>
                                                                }
                                                                    .into_any()
                                                            }
                                                        }}
                                                        <div>
                                                            <div class="font-bold">{row.display_name()}</div>
                                                            <div class="text-xs text-base-content/60">
                                                                "ID: " {row.player_id_text()}
                                                            </div>
                                                            <Show when=move || !has_data>
                                                                <div class="text-xs text-error">"Données limitées"</div>
                                                            </Show>
                                                        </div>
                                                    </div>
                                                </td>
                                                <td>"#" {row.id}</td>
                                                <td>
                                                    <span class="font-bold">{format_score(row.prediction)}</span>
                                                </td>
                                                <td>
                                                    <span
                                                        class="badge badge-outline"
                                                        style:color=tier.color()
                                                        style:border-color=tier.color()
                                                    >
                                                        {tier.label()}
                                                    </span>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn-outline btn-sm"
                                                        disabled={!has_data}
                                                        title={if has_data {
                                                            "Voir détails et recommandations"
                                                        } else {
                                                            "Données insuffisantes pour les recommandations"
                                                        }}
                                                        on:click=on_details
                                                    >
                                                        "Voir détails"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>

                        <Show when=move || filtered.get().is_empty()>
                            <p class="text-center py-8 text-base-content/60">
                                "Aucun joueur ne correspond à vos critères de recherche."
                            </p>
                        </Show>
                    </div>
                </div>

                // 数据提示
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="card bg-base-100 shadow-md">
                        <div class="card-body">
                            <h4 class="font-bold">"Informations sur les données"</h4>
                            <ul class="list-disc list-inside text-sm text-base-content/70">
                                <li>
                                    <strong>"Joueurs avec données limitées : "</strong>
                                    {rows
                                        .with_value(|rows| {
                                            rows.iter()
                                                .filter(|r| !batch::has_recommendation_data(r))
                                                .count()
                                        })}
                                </li>
                                <li>
                                    <strong>"Note moyenne : "</strong>
                                    {stats.mean_label()}
                                </li>
                                <li>
                                    <strong>"Export disponible : "</strong>
                                    "Résumé ou données complètes"
                                </li>
                            </ul>
                        </div>
                    </div>
                    <div class="card bg-base-100 shadow-md">
                        <div class="card-body">
                            <h4 class="font-bold">"Pour les recommandations IA"</h4>
                            <p class="text-sm text-base-content/70">
                                "Pour obtenir des recommandations d'entraînement personnalisées, \
                                 assurez-vous que votre fichier CSV contient :"
                            </p>
                            <ul class="list-disc list-inside text-sm text-base-content/70">
                                <li>"Les attributs clés (potential, finishing, dribbling, etc.)"</li>
                                <li>"Minimum 5 attributs différents par joueur"</li>
                                <li>"Les valeurs doivent être numériques (1-100)"</li>
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// 批量预测结果页
#[component]
pub fn BatchResultsPage() -> impl IntoView {
    let router = use_router();
    let results = use_results();

    move || match results.batch.get() {
        Some(rows) if !rows.is_empty() => view! { <BatchContent rows=rows /> }.into_any(),
        _ => view! {
            <div class="min-h-screen bg-base-200 flex items-center justify-center">
                <div class="text-center space-y-4">
                    <h2 class="text-2xl font-bold">"Aucun résultat disponible"</h2>
                    <p class="text-base-content/70">
                        "Veuillez retourner et télécharger un fichier pour la prédiction par lot."
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
