use super::*;
use crate::protocol::BatchPrediction;

// =========================================================
// Shared helpers
// =========================================================

fn make_row(id: i64, name: &str, prediction: f64) -> BatchPrediction {
    BatchPrediction {
        id,
        player_id: serde_json::json!(id * 100),
        name: name.to_string(),
        prediction,
        image: None,
        extra: serde_json::Map::new(),
    }
}

fn make_row_with_extra(
    id: i64,
    name: &str,
    prediction: f64,
    extra: serde_json::Value,
) -> BatchPrediction {
    let mut row = make_row(id, name, prediction);
    row.extra = extra.as_object().cloned().unwrap_or_default();
    row
}

fn sample_rows() -> Vec<BatchPrediction> {
    vec![
        make_row(1, "Édouard Mendy", 72.0),
        make_row(2, "Antoine Griezmann", 85.0),
        make_row(3, "Benoît Badiashile", 64.0),
        make_row(4, "Zinédine Zidane", 55.0),
    ]
}

// =========================================================
// Filtering & sorting
// =========================================================

#[test]
fn filter_by_name_is_case_insensitive() {
    let rows = sample_rows();
    let hits = filter_predictions(&rows, "griezmann", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
}

#[test]
fn filter_by_player_id_substring() {
    let rows = sample_rows();
    // player_id = 300
    let hits = filter_predictions(&rows, "300", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Benoît Badiashile");
}

#[test]
fn filter_by_tier() {
    let rows = sample_rows();
    let hits = filter_predictions(&rows, "", Some(PerformanceTier::Good));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Édouard Mendy");

    let poor = filter_predictions(&rows, "", Some(PerformanceTier::Poor));
    assert_eq!(poor.len(), 1);
    assert_eq!(poor[0].id, 4);
}

#[test]
fn sort_by_prediction_is_descending() {
    let mut rows = sample_rows();
    sort_predictions(&mut rows, SortKey::Prediction);
    let scores: Vec<f64> = rows.iter().map(|r| r.prediction).collect();
    assert_eq!(scores, vec![85.0, 72.0, 64.0, 55.0]);
}

#[test]
fn sort_by_name_ignores_accents_and_case() {
    let mut rows = sample_rows();
    sort_predictions(&mut rows, SortKey::Name);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    // É trie comme E, pas après Z
    assert_eq!(
        names,
        vec![
            "Antoine Griezmann",
            "Benoît Badiashile",
            "Édouard Mendy",
            "Zinédine Zidane"
        ]
    );
}

#[test]
fn sort_by_id_is_ascending() {
    let mut rows = sample_rows();
    rows.reverse();
    sort_predictions(&mut rows, SortKey::Id);
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn sort_key_select_values_round_trip() {
    for key in [SortKey::Prediction, SortKey::Name, SortKey::Id] {
        assert_eq!(SortKey::from_key(key.as_key()), key);
    }
    // valeur inconnue => tri par défaut
    assert_eq!(SortKey::from_key("unknown"), SortKey::Prediction);
}

// =========================================================
// Statistics
// =========================================================

#[test]
fn stats_count_each_tier_once() {
    let stats = performance_stats(&sample_rows());
    assert_eq!(stats.excellent, 1);
    assert_eq!(stats.good, 1);
    assert_eq!(stats.average, 1);
    assert_eq!(stats.poor, 1);
    assert_eq!(stats.mean_label(), "69.00");
}

#[test]
fn stats_on_empty_input() {
    let stats = performance_stats(&[]);
    assert_eq!(stats.count(PerformanceTier::Excellent), 0);
    assert_eq!(stats.mean_label(), "0.00");
}

// =========================================================
// CSV export
// =========================================================

#[test]
fn summary_export_header_and_row_count() {
    let rows = filter_and_sort(&sample_rows(), "", None, SortKey::Prediction);
    let csv = export_summary_csv(&rows);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "ID,ID Joueur,Nom,Prédiction,Niveau de performance");
    assert_eq!(lines.len(), rows.len() + 1);
    assert_eq!(lines[1], "2,200,\"Antoine Griezmann\",85,Excellent");
    assert_eq!(lines[4], "4,400,\"Zinédine Zidane\",55,À améliorer");
}

#[test]
fn summary_export_matches_filtered_rows() {
    let rows = filter_and_sort(&sample_rows(), "mendy", None, SortKey::Prediction);
    let csv = export_summary_csv(&rows);
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.lines().nth(1).unwrap().contains("Édouard Mendy"));
}

#[test]
fn full_export_appends_union_of_extra_columns() {
    let rows = vec![
        make_row_with_extra(1, "A", 80.0, serde_json::json!({"club": "PSG", "finishing": 88})),
        make_row_with_extra(2, "B", 70.0, serde_json::json!({"finishing": 75, "vision": 81})),
    ];
    let csv = export_full_csv(&rows);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "ID,ID Joueur,Nom,Prédiction,Niveau de performance,club,finishing,vision"
    );
    // colonne absente => champ vide
    assert_eq!(lines[1], "1,100,\"A\",80,Excellent,PSG,88,");
    assert_eq!(lines[2], "2,200,\"B\",70,Bon,,75,81");
}

#[test]
fn full_export_quotes_values_containing_commas() {
    let rows = vec![make_row_with_extra(
        1,
        "A",
        90.0,
        serde_json::json!({"clubs": "PSG, Monaco"}),
    )];
    let csv = export_full_csv(&rows);
    assert!(csv.lines().nth(1).unwrap().ends_with("\"PSG, Monaco\""));
}

#[test]
fn full_export_never_duplicates_fixed_columns() {
    // les clés fixes sont capturées par les champs de la ligne,
    // l'union des colonnes supplémentaires ne doit pas les reprendre
    let rows: Vec<BatchPrediction> = serde_json::from_value(serde_json::json!([
        {"id": 1, "player_id": 10, "name": "A", "prediction": 80.0,
         "image": "http://x/img.png", "stamina": 70}
    ]))
    .unwrap();
    let csv = export_full_csv(&rows);
    let header = csv.lines().next().unwrap();
    assert_eq!(
        header,
        "ID,ID Joueur,Nom,Prédiction,Niveau de performance,stamina"
    );
    assert!(!header.contains("image"));
}

#[test]
fn export_filenames_carry_the_date() {
    assert_eq!(
        summary_filename("2026-08-07"),
        "predictions_joueurs_resume_2026-08-07.csv"
    );
    assert_eq!(
        full_filename("2026-08-07"),
        "predictions_joueurs_complet_2026-08-07.csv"
    );
}

// =========================================================
// Recommendation data extraction
// =========================================================

#[test]
fn extracts_only_allowlisted_numeric_attributes() {
    let row = make_row_with_extra(
        1,
        "A",
        80.0,
        serde_json::json!({
            "finishing": 88,
            "vision": "81",
            "club": "PSG",
            "gk_diving": 12,
            "stamina": null
        }),
    );
    let attrs = recommendation_attributes(&row);
    assert_eq!(attrs.get("finishing"), Some(&88.0));
    // les chaînes numériques sont acceptées
    assert_eq!(attrs.get("vision"), Some(&81.0));
    // hors liste blanche ou non numérique
    assert!(!attrs.contains_key("club"));
    assert!(!attrs.contains_key("gk_diving"));
    assert!(!attrs.contains_key("stamina"));
}

#[test]
fn detail_gate_requires_five_attributes() {
    let sparse = make_row_with_extra(
        1,
        "A",
        80.0,
        serde_json::json!({"finishing": 88, "vision": 81, "stamina": 70, "strength": 74}),
    );
    assert!(!has_recommendation_data(&sparse));

    let enough = make_row_with_extra(
        2,
        "B",
        80.0,
        serde_json::json!({
            "finishing": 88, "vision": 81, "stamina": 70,
            "strength": 74, "dribbling": 85
        }),
    );
    assert!(has_recommendation_data(&enough));
}

#[test]
fn player_data_from_row_keeps_numbers_and_text() {
    let row = make_row_with_extra(
        1,
        "A",
        80.0,
        serde_json::json!({"finishing": 88, "preferred_foot": "gauche", "missing": null}),
    );
    let data = player_data_from_row(&row);
    assert_eq!(data["finishing"].as_number(), Some(88.0));
    assert_eq!(data["preferred_foot"].display(), "gauche");
    assert!(!data.contains_key("missing"));
}
