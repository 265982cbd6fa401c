//! Badge endpoints driven through the full router.

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use crate::utils::{get, post_json, test_app};

#[tokio::test]
async fn test_catalog_lists_milestones_in_rank_order() -> Result<()> {
    let app = test_app()?;
    let res = get(&app, "/badges").await?;
    assert_eq!(res.status, StatusCode::OK);

    let body = res.json()?;
    let thresholds: Vec<u64> = body["badges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["required_coins"].as_u64().unwrap())
        .collect();
    assert_eq!(thresholds, vec![10, 25, 50, 100, 200, 500]);
    Ok(())
}

#[tokio::test]
async fn test_get_badge_by_id() -> Result<()> {
    let app = test_app()?;

    let res = get(&app, "/badges/deal_hunter").await?;
    assert_eq!(res.status, StatusCode::OK);
    let body = res.json()?;
    assert_eq!(body["badge"]["required_coins"], json!(25));
    assert_eq!(body["badge"]["name"], json!("Deal Hunter"));

    let res = get(&app, "/badges/not_a_badge").await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json()?["success"], json!(false));
    Ok(())
}

#[tokio::test]
async fn test_status_scenarios() -> Result<()> {
    let app = test_app()?;

    let body = get(&app, "/badges/status?coins=0").await?.json()?;
    assert_eq!(body["current"], json!(null));
    assert_eq!(body["next"]["required_coins"], json!(10));
    assert_eq!(body["progress_percent"], json!(0.0));
    assert_eq!(body["unlocked"], json!([]));

    let body = get(&app, "/badges/status?coins=10").await?.json()?;
    assert_eq!(body["current"]["required_coins"], json!(10));
    assert_eq!(body["next"]["required_coins"], json!(25));
    assert_eq!(body["progress_percent"], json!(0.0));

    let body = get(&app, "/badges/status?coins=17").await?.json()?;
    assert_eq!(body["current"]["required_coins"], json!(10));
    assert_eq!(body["coins_to_next"], json!(8));
    let progress = body["progress_percent"].as_f64().unwrap();
    assert!((progress - 46.67).abs() < 0.01, "got {progress}");

    for coins in [500, 10_000] {
        let body = get(&app, &format!("/badges/status?coins={coins}"))
            .await?
            .json()?;
        assert_eq!(body["current"]["required_coins"], json!(500));
        assert_eq!(body["next"], json!(null));
        assert_eq!(body["coins_to_next"], json!(null));
        assert_eq!(body["progress_percent"], json!(100.0));
        assert_eq!(body["unlocked_count"], json!(6));
    }
    Ok(())
}

#[tokio::test]
async fn test_status_tolerates_bad_balances() -> Result<()> {
    let app = test_app()?;
    for uri in [
        "/badges/status",
        "/badges/status?coins=-50",
        "/badges/status?coins=NaN",
        "/badges/status?coins=plenty",
    ] {
        let res = get(&app, uri).await?;
        assert_eq!(res.status, StatusCode::OK, "{uri}");
        let body = res.json()?;
        assert_eq!(body["coins"], json!(0), "{uri}");
        assert_eq!(body["current"], json!(null), "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn test_unlocked_check() -> Result<()> {
    let app = test_app()?;

    let body = get(&app, "/badges/bargain_pro/unlocked?coins=49").await?.json()?;
    assert_eq!(body["unlocked"], json!(false));

    let body = get(&app, "/badges/bargain_pro/unlocked?coins=50").await?.json()?;
    assert_eq!(body["unlocked"], json!(true));
    assert_eq!(body["coins"], json!(50));

    let res = get(&app, "/badges/mystery/unlocked?coins=100000").await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()?["unlocked"], json!(false));
    Ok(())
}

#[tokio::test]
async fn test_equip_outcomes() -> Result<()> {
    let app = test_app()?;

    let res = post_json(&app, "/badges/equip", &json!({"badge_id": "deal_master", "coins": 250})).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()?["badge"]["id"], json!("deal_master"));

    let res = post_json(&app, "/badges/equip", &json!({"badge_id": "deal_master", "coins": "120"})).await?;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let res = post_json(&app, "/badges/equip", &json!({"badge_id": "ghost", "coins": 999})).await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = post_json(&app, "/badges/equip", &json!({"badge_id": null, "coins": 5})).await?;
    assert_eq!(res.status, StatusCode::OK);
    let body = res.json()?;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["badge"], json!(null));
    Ok(())
}

#[tokio::test]
async fn test_equip_rejects_non_json() -> Result<()> {
    let app = test_app()?;
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/badges/equip")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))?;
    let res = crate::utils::send(&app, request).await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()?["success"], json!(false));
    Ok(())
}
