//! Integration tests for the nutrition targets endpoints

mod common;

use axum::http::StatusCode;
use nutrition_targets_backend::config::AppConfig;
use nutrition_targets_shared::macros::MacroRatio;
use rstest::rstest;
use serde_json::{json, Value};

const CALCULATE: &str = "/api/v1/nutrition-targets/calculate";

async fn calculate(app: &common::TestApp, profile: Value) -> (StatusCode, Value) {
    let (status, body) = app.post(CALCULATE, &profile.to_string()).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn test_calculate_typical_adult() {
    let app = common::TestApp::new();

    let (status, json) = calculate(
        &app,
        json!({
            "subject_id": "6f1c2c7e-0000-4000-8000-000000000001",
            "age": 30,
            "gender": "male",
            "height": 175,
            "weight": 70,
            "work_style": "sedentary",
            "exercise_frequency": 0,
            "exercise_intensity": "light",
            "nutrition_goal": "maintain",
            "weight_change_rate": "moderate",
            "pregnancy_status": "none"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["targets"]["subject_id"], "6f1c2c7e-0000-4000-8000-000000000001");
    assert_eq!(json["targets"]["daily_calories"], 1979);
    assert_eq!(json["targets"]["vitamin_c_mg"], 100.0);
    assert_eq!(json["basis"]["version"], "jp-dri-2020/1.0");
    assert_eq!(json["basis"]["age_group"], "30-49");
    assert_eq!(json["basis"]["energy"]["bmr"], 1649);
    assert_eq!(json["basis"]["missing_fields"], json!([]));
    assert!(json["basis"].get("health_adjustments").is_none());
}

#[tokio::test]
async fn test_calculate_empty_profile_defaults_everything() {
    let app = common::TestApp::new();

    let (status, json) = calculate(&app, json!({})).await;

    assert_eq!(status, StatusCode::OK);
    let missing = json["basis"]["missing_fields"].as_array().unwrap();
    assert_eq!(missing.len(), 10);
    assert_eq!(json["basis"]["defaults_applied"]["gender"], "unspecified");
    assert!(json["targets"]["daily_calories"].as_i64().unwrap() >= 1500);
}

#[tokio::test]
async fn test_calculate_with_conditions() {
    let app = common::TestApp::new();

    let (status, json) = calculate(
        &app,
        json!({
            "age": "52",
            "gender": "female",
            "health_conditions": ["hypertension", "kidney_disease", "hay fever"],
            "medications": ["warfarin"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["targets"]["sodium_g"], 6.0);
    assert_eq!(json["targets"]["potassium_mg"], 2000.0);
    assert_eq!(json["targets"]["vitamin_k_ug"], 80.0);
    let adjustments = &json["basis"]["health_adjustments"];
    assert_eq!(adjustments["conditions"], json!(["hypertension", "kidney_disease"]));
    assert_eq!(adjustments["superseded"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_calculate_toddler_reports_gaps() {
    let app = common::TestApp::new();

    let (status, json) = calculate(&app, json!({ "age": 2, "height": 88, "weight": 12 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["basis"]["age_group"], "1-2");
    assert!(json["targets"]["fiber_g"].is_null());
    let unavailable = json["basis"]["unavailable_nutrients"].as_array().unwrap();
    assert!(unavailable.contains(&json!("fiber")));
}

#[tokio::test]
async fn test_calculate_null_tag_lists() {
    let app = common::TestApp::new();

    let (status, json) =
        calculate(&app, json!({ "health_conditions": null, "medications": null })).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["basis"].get("health_adjustments").is_none());
}

#[tokio::test]
async fn test_calculate_extreme_age_is_clamped() {
    let app = common::TestApp::new();

    let (status, json) =
        calculate(&app, json!({ "age": "-2147483648", "nutrition_goal": "gain_muscle" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["basis"]["age_group"], "6-11m");
    assert!(json["targets"]["daily_calories"].as_i64().unwrap() >= 1500);
}

#[tokio::test]
async fn test_calculate_birth_date_with_as_of() {
    let app = common::TestApp::new();

    let (status, json) =
        calculate(&app, json!({ "birth_date": "1994-05-01", "as_of": "2024-04-30" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["basis"]["age_group"], "18-29");
}

#[rstest]
#[case(json!({ "weight": "abc" }), "weight")]
#[case(json!({ "weight": true }), "weight")]
#[case(json!({ "age": [30] }), "age")]
#[case(json!({ "height": -170 }), "height")]
#[case(json!({ "age": 30.5 }), "age")]
#[case(json!({ "work_style": "astronaut" }), "work_style")]
#[case(json!({ "exercise_frequency": -2 }), "exercise_frequency")]
#[case(json!({ "gender": "male", "pregnancy_status": "pregnant" }), "pregnancy_status")]
#[case(json!({ "birth_date": "2030-01-01", "as_of": "2024-01-01" }), "birth_date")]
#[tokio::test]
async fn test_calculate_rejects_invalid_input(#[case] profile: Value, #[case] field: &str) {
    let app = common::TestApp::new();

    let (status, json) = calculate(&app, profile).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], field);
}

#[tokio::test]
async fn test_reference_lookup() {
    let app = common::TestApp::new();

    let (status, body) = app
        .get("/api/v1/nutrition-targets/references?nutrient=folic_acid&age=28&gender=female&pregnancy_status=pregnant")
        .await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["age_group"], "18-29");
    assert_eq!(json["base"]["value"], 240.0);
    assert_eq!(json["pregnancy_addition"]["value"], 240.0);
    assert_eq!(json["total"], 480.0);
    assert_eq!(json["unit"], "µg");
    assert!(json["base"]["source"]["url"]
        .as_str()
        .unwrap()
        .starts_with("https://www.mhlw.go.jp/"));
}

#[tokio::test]
async fn test_reference_lookup_gap_is_not_found() {
    let app = common::TestApp::new();

    let (status, body) = app
        .get("/api/v1/nutrition-targets/references?nutrient=cholesterol&age=10")
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_reference_lookup_unknown_nutrient() {
    let app = common::TestApp::new();

    let (status, body) = app
        .get("/api/v1/nutrition-targets/references?nutrient=mithril&age=30")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["field"], "nutrient");
}

#[tokio::test]
async fn test_configured_macro_ratios_are_used() {
    let mut config = AppConfig::default();
    config.calculator.macro_ratios.maintain = MacroRatio::new(0.20, 0.30, 0.50);
    let app = common::TestApp::with_config(config);

    let (status, json) = calculate(&app, json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["basis"]["macros"]["ratio"]["protein"], 0.2);
}

#[tokio::test]
async fn test_readiness_fails_with_invalid_policy() {
    let mut config = AppConfig::default();
    config.calculator.macro_ratios.lose_weight = MacroRatio::new(0.5, 0.5, 0.5);
    let app = common::TestApp::with_config(config);

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("not_ready"));
}
