use dependency_selection_core::collection::WalkConfig;
use dependency_selection_core::graph::{Artifact, Dependency};
use serde_json::Value;

#[test]
fn golden_dependency_serialization() {
    let artifact = Artifact::new("org.example", "lib", "1.2.3").unwrap();
    let dep = Dependency::new(artifact, "compile").with_optional(true);

    let json_str = serde_json::to_string(&dep).unwrap();

    // "artifact" -> "scope" -> "optional"
    let art_pos = json_str.find("\"artifact\":").unwrap();
    let scope_pos = json_str.find("\"scope\":").unwrap();
    let opt_pos = json_str.find("\"optional\":").unwrap();
    assert!(art_pos < scope_pos);
    assert!(scope_pos < opt_pos);

    const EXPECTED_JSON: &str = r#"{"artifact":{"group_id":"org.example","artifact_id":"lib","version":"1.2.3"},"scope":"compile","optional":true}"#;
    assert_eq!(json_str, EXPECTED_JSON);

    let parsed: Dependency = serde_json::from_str(EXPECTED_JSON).unwrap();
    assert_eq!(parsed, dep);
}

#[test]
fn golden_walk_config_serialization() {
    let json: Value = serde_json::to_value(WalkConfig::v0()).unwrap();

    assert_eq!(json["max_depth"], Value::Null);
    assert_eq!(json["dedupe"], Value::Bool(true));
}

#[test]
fn golden_artifact_deserialization_is_validated() {
    let blank = r#"{"group_id":"","artifact_id":"  ","version":""}"#;
    let err = serde_json::from_str::<Artifact>(blank).unwrap_err();
    assert!(err.to_string().contains("group id must not be empty"), "{err}");

    let blank_version = r#"{"group_id":"org.example","artifact_id":"lib","version":" "}"#;
    assert!(serde_json::from_str::<Artifact>(blank_version).is_err());

    let nested = r#"{"artifact":{"group_id":"","artifact_id":"lib","version":"1.0"},"scope":"compile","optional":false}"#;
    assert!(serde_json::from_str::<Dependency>(nested).is_err());
}

#[test]
fn golden_artifact_deserialization_trims_coordinates() {
    let padded = r#"{"group_id":" org.example ","artifact_id":"lib","version":"1.0 "}"#;
    let artifact: Artifact = serde_json::from_str(padded).unwrap();

    assert_eq!(artifact, Artifact::new("org.example", "lib", "1.0").unwrap());
}
