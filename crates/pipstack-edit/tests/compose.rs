//! End-to-end composition pipeline tests against the shipped template.

use std::io::Write;

use serde_json::Value;

use pipstack_edit::{create_composition, EditError, TemplateError, TemplateStore};
use pipstack_models::CompositionRequest;

fn store() -> TemplateStore {
    TemplateStore::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/pip.json"))
}

fn valid_request() -> CompositionRequest {
    CompositionRequest {
        video: Some("https://cdn.example.com/main.mp4".to_string()),
        pip: Some("https://cdn.example.com/overlay.mp4".to_string()),
        position: Some("topLeft".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn builds_a_populated_edit() {
    let document = create_composition(&store(), &valid_request()).await.unwrap();
    let edit: Value = serde_json::from_str(&document).unwrap();

    let pip_clip = &edit["timeline"]["tracks"][0]["clips"][0];
    assert_eq!(pip_clip["asset"]["src"], "https://cdn.example.com/overlay.mp4");
    assert_eq!(pip_clip["length"], 15.0);
    assert_eq!(pip_clip["position"], "topLeft");
    assert_eq!(pip_clip["offset"]["x"], 0.02);
    assert_eq!(pip_clip["offset"]["y"], -0.035);
    assert_eq!(pip_clip["scale"], 0.25);
    // Template fields the service never writes are preserved
    assert_eq!(pip_clip["fit"], "crop");
    assert_eq!(edit["timeline"]["background"], "#000000");
    assert_eq!(edit["output"]["format"], "mp4");

    let main_clip = &edit["timeline"]["tracks"][1]["clips"][0];
    assert_eq!(main_clip["asset"]["src"], "https://cdn.example.com/main.mp4");
    assert_eq!(main_clip["length"], 15.0);
}

#[tokio::test]
async fn duration_and_scale_defaults_reach_the_document() {
    let mut req = valid_request();
    req.scale = Some(0.0); // explicit zero falls back to the default

    let document = create_composition(&store(), &req).await.unwrap();
    let edit: Value = serde_json::from_str(&document).unwrap();

    assert_eq!(edit["timeline"]["tracks"][0]["clips"][0]["length"], 15.0);
    assert_eq!(edit["timeline"]["tracks"][0]["clips"][0]["scale"], 0.25);
}

#[tokio::test]
async fn supplied_geometry_reaches_the_document() {
    let mut req = valid_request();
    req.position = Some("bottomRight".to_string());
    req.duration = Some(30.0);
    req.padding = Some(100.0);
    req.scale = Some(0.5);
    req.pip_width = Some(512.0);
    req.pip_height = Some(288.0);

    let document = create_composition(&store(), &req).await.unwrap();
    let edit: Value = serde_json::from_str(&document).unwrap();

    let pip_clip = &edit["timeline"]["tracks"][0]["clips"][0];
    assert_eq!(pip_clip["position"], "bottomRight");
    assert_eq!(pip_clip["offset"]["x"], -0.098);
    assert_eq!(pip_clip["offset"]["y"], 0.174);
    assert_eq!(pip_clip["scale"], 1.0);
    assert_eq!(pip_clip["length"], 30.0);
    assert_eq!(edit["timeline"]["tracks"][1]["clips"][0]["length"], 30.0);
}

#[tokio::test]
async fn identical_requests_yield_byte_identical_documents() {
    let req = valid_request();

    let first = create_composition(&store(), &req).await.unwrap();
    let second = create_composition(&store(), &req).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_position_is_rejected_before_template_io() {
    // A store pointing nowhere: if validation did not come first, this test
    // would see a template error instead of the validation failure.
    let unreadable = TemplateStore::new("/nonexistent/pip.json");
    let mut req = valid_request();
    req.position = None;

    let err = create_composition(&unreadable, &req).await.unwrap_err();
    match err {
        EditError::Validation(v) => {
            assert_eq!(v.field, "position");
            assert!(v.message.contains("position"));
        }
        other => panic!("expected validation error, got: {other}"),
    }
}

#[tokio::test]
async fn out_of_range_padding_is_rejected() {
    let mut req = valid_request();
    req.padding = Some(150.0);

    let err = create_composition(&store(), &req).await.unwrap_err();
    match err {
        EditError::Validation(v) => assert_eq!(v.field, "padding"),
        other => panic!("expected validation error, got: {other}"),
    }
}

#[tokio::test]
async fn unreadable_template_is_a_template_error() {
    let unreadable = TemplateStore::new("/nonexistent/pip.json");

    let err = create_composition(&unreadable, &valid_request())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EditError::Template(TemplateError::Read { .. })
    ));
}

#[tokio::test]
async fn malformed_template_is_a_template_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();

    let broken = TemplateStore::new(file.path());
    let err = create_composition(&broken, &valid_request())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EditError::Template(TemplateError::Parse { .. })
    ));
}

#[tokio::test]
async fn template_without_both_tracks_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "timeline": { "tracks": [] } }"#)
        .unwrap();

    let truncated = TemplateStore::new(file.path());
    let err = create_composition(&truncated, &valid_request())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EditError::Template(TemplateError::Invalid { .. })
    ));
}
