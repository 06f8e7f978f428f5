use crate::components::icons::{Award, BarChart3, Shield, Target, Upload, Users};
use crate::session::use_session;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
fn FeatureCard(
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-md hover:shadow-xl transition-shadow">
            <div class="card-body">
                <div class="p-3 bg-primary/10 rounded-xl text-primary w-fit">{children()}</div>
                <h3 class="card-title text-lg">{title}</h3>
                <p class="text-base-content/70">{description}</p>
            </div>
        </div>
    }
}

/// 首页：主视觉、功能介绍、使用步骤与行动号召
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let user = session.user_signal();
    let is_authenticated = move || user.get().is_some();

    view! {
        <div class="bg-base-200">
            // 主视觉
            <section class="hero py-16 bg-gradient-to-br from-primary/10 to-base-200">
                <div class="hero-content flex-col lg:flex-row gap-10 max-w-6xl">
                    <div class="max-w-xl">
                        <h1 class="text-5xl font-black">"Foot Perf AI"</h1>
                        <p class="py-6 text-base-content/80">
                            "Plateforme avancée alimentée par l'IA pour l'optimisation des \
                             performances footballistiques. Prédisez la performance des joueurs, \
                             obtenez des recommandations d'entraînement personnalisées et prenez \
                             des décisions basées sur les données."
                        </p>
                        <div class="flex gap-3">
                            <Show
                                when=is_authenticated
                                fallback=move || {
                                    view! {
                                        <button
                                            class="btn btn-primary btn-lg"
                                            on:click=move |_| router.navigate("/register")
                                        >
                                            "Commencer"
                                        </button>
                                        <button
                                            class="btn btn-outline btn-lg"
                                            on:click=move |_| router.navigate("/login")
                                        >
                                            "Se connecter"
                                        </button>
                                    }
                                }
                            >
                                <button
                                    class="btn btn-primary btn-lg gap-2"
                                    on:click=move |_| router.navigate("/prediction")
                                >
                                    <Target attr:class="h-6 w-6" />
                                    "Commencer les prédictions"
                                </button>
                            </Show>
                        </div>
                    </div>
                    <div class="stats stats-vertical shadow bg-base-100">
                        <div class="stat">
                            <div class="stat-title">"Attributs analysés"</div>
                            <div class="stat-value text-primary">"37"</div>
                            <div class="stat-desc">"par joueur"</div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"Niveaux de performance"</div>
                            <div class="stat-value text-secondary">"4"</div>
                            <div class="stat-desc">"d'Excellent à À améliorer"</div>
                        </div>
                    </div>
                </div>
            </section>

            // 功能介绍
            <section id="features" class="py-16">
                <div class="max-w-6xl mx-auto px-4">
                    <div class="text-center mb-10">
                        <h2 class="text-3xl font-bold">
                            "Fonctionnalités puissantes pour le football moderne"
                        </h2>
                        <p class="text-base-content/70 mt-2">
                            "Tout ce dont vous avez besoin pour optimiser la performance des \
                             joueurs et la stratégie d'équipe"
                        </p>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <FeatureCard
                            title="Prédiction de performance"
                            description="Prédisez la performance des joueurs avec nos modèles de machine learning avancés"
                        >
                            <Target attr:class="h-8 w-8" />
                        </FeatureCard>
                        <FeatureCard
                            title="Analyse par lot"
                            description="Téléchargez des fichiers CSV pour des prédictions multiples en une fois"
                        >
                            <Upload attr:class="h-8 w-8" />
                        </FeatureCard>
                        <FeatureCard
                            title="Analyses détaillées"
                            description="Obtenez des insights complets et des analyses de performance"
                        >
                            <BarChart3 attr:class="h-8 w-8" />
                        </FeatureCard>
                        <FeatureCard
                            title="Gestion d'équipe"
                            description="Gérez et suivez plusieurs joueurs et équipes"
                        >
                            <Users attr:class="h-8 w-8" />
                        </FeatureCard>
                        <FeatureCard
                            title="Recommandations d'entraînement"
                            description="Suggestions d'entraînement personnalisées alimentées par l'IA"
                        >
                            <Award attr:class="h-8 w-8" />
                        </FeatureCard>
                        <FeatureCard
                            title="Sécurisé & Fiable"
                            description="Sécurité de niveau entreprise pour vos données"
                        >
                            <Shield attr:class="h-8 w-8" />
                        </FeatureCard>
                    </div>
                </div>
            </section>

            // 使用步骤
            <section id="how-it-works" class="py-16 bg-base-100">
                <div class="max-w-5xl mx-auto px-4">
                    <div class="text-center mb-10">
                        <h2 class="text-3xl font-bold">"Comment ça marche"</h2>
                        <p class="text-base-content/70 mt-2">
                            "Étapes simples pour obtenir des insights sur la performance des joueurs"
                        </p>
                    </div>
                    <ul class="steps steps-vertical lg:steps-horizontal w-full">
                        <li class="step step-primary">
                            <div class="text-left lg:text-center p-2">
                                <h3 class="font-bold">"Saisie des données joueur"</h3>
                                <p class="text-sm text-base-content/70">
                                    "Entrez les attributs manuellement ou téléchargez un fichier CSV"
                                </p>
                            </div>
                        </li>
                        <li class="step step-primary">
                            <div class="text-left lg:text-center p-2">
                                <h3 class="font-bold">"Analyse IA"</h3>
                                <p class="text-sm text-base-content/70">
                                    "Nos modèles analysent les données et prédisent les scores"
                                </p>
                            </div>
                        </li>
                        <li class="step step-primary">
                            <div class="text-left lg:text-center p-2">
                                <h3 class="font-bold">"Résultats & Recommandations"</h3>
                                <p class="text-sm text-base-content/70">
                                    "Recevez des prédictions détaillées et des conseils personnalisés"
                                </p>
                            </div>
                        </li>
                    </ul>
                </div>
            </section>

            // 行动号召
            <section class="py-16">
                <div class="max-w-3xl mx-auto px-4 text-center">
                    <h2 class="text-3xl font-bold">
                        "Prêt à transformer la performance de votre équipe ?"
                    </h2>
                    <p class="text-base-content/70 mt-3 mb-6">
                        "Rejoignez les entraîneurs et analystes qui utilisent déjà Foot Perf AI \
                         pour prendre des décisions basées sur les données"
                    </p>
                    <Show
                        when=is_authenticated
                        fallback=move || {
                            view! {
                                <div class="flex gap-3 justify-center">
                                    <button
                                        class="btn btn-primary btn-lg"
                                        on:click=move |_| router.navigate("/register")
                                    >
                                        "Essai gratuit"
                                    </button>
                                    <button
                                        class="btn btn-outline btn-lg"
                                        on:click=move |_| router.navigate("/login")
                                    >
                                        "Se connecter"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <button
                            class="btn btn-primary btn-lg"
                            on:click=move |_| router.navigate("/prediction")
                        >
                            "Faire une prédiction"
                        </button>
                    </Show>
                </div>
            </section>
        </div>
    }
}
