use sizzle_mcp::tools::SizzleMcp;
use std::collections::HashSet;

/// All tools must be registered in the tool router.
#[test]
fn all_tools_registered() {
    let server = SizzleMcp::new();
    let tools = server.router().list_all();
    let names: HashSet<&str> = tools.iter().map(|t| t.name.as_ref()).collect();

    let expected = [
        "analyze_scene",
        "plan_sequence",
        "evaluate_sequence",
        "validate_choreography",
        "validate_guardrails",
        "get_personality",
        "get_style_pack",
        "search_primitives",
        "get_primitive",
    ];

    assert_eq!(
        tools.len(),
        expected.len(),
        "Expected {} tools, got {}: {:?}",
        expected.len(),
        tools.len(),
        names
    );

    for name in &expected {
        assert!(names.contains(name), "Missing tool: {name}");
    }
}

/// Every tool must have a non-empty description (from doc comments).
#[test]
fn all_tools_have_descriptions() {
    let server = SizzleMcp::new();
    let tools = server.router().list_all();

    for tool in &tools {
        let desc = tool.description.as_deref().unwrap_or("");
        assert!(!desc.is_empty(), "Tool '{}' has no description", tool.name);
    }
}

/// Every tool takes parameters here (no bare stdlib-style tool), so each
/// must publish a non-trivial input schema.
#[test]
fn all_tools_have_input_schema() {
    let server = SizzleMcp::new();
    let tools = server.router().list_all();

    for tool in &tools {
        let schema = serde_json::to_value(&*tool.input_schema).unwrap();
        let props = schema.get("properties");
        assert!(
            props.is_some(),
            "Tool '{}' should have properties in input schema, got: {}",
            tool.name,
            serde_json::to_string_pretty(&schema).unwrap()
        );
        let props = props.unwrap().as_object().unwrap();
        assert!(!props.is_empty(), "Tool '{}' has empty properties", tool.name);
    }
}

/// Parameter structs must deserialize correctly from JSON.
#[test]
fn param_deserialization() {
    use sizzle_mcp::tools::catalog::*;
    use sizzle_mcp::tools::guardrails::*;
    use sizzle_mcp::tools::pipeline::*;

    let p: GetPersonalityParams = serde_json::from_str(r#"{"slug": "calm_confident"}"#).unwrap();
    assert_eq!(p.slug, "calm_confident");

    let p: GetStylePackParams = serde_json::from_str(r#"{"name": "product_launch"}"#).unwrap();
    assert_eq!(p.name, "product_launch");

    let p: SearchPrimitivesParams = serde_json::from_str(r#"{"category": "transition"}"#).unwrap();
    assert_eq!(p.category.as_deref(), Some("transition"));
    assert!(p.personality.is_none());

    let p: GetPrimitiveParams = serde_json::from_str(r#"{"id": "prim_dolly_in"}"#).unwrap();
    assert_eq!(p.id, "prim_dolly_in");

    let p: AnalyzeSceneParams = serde_json::from_str(r#"{"scene": {"scene_id": "sc_1"}}"#).unwrap();
    assert_eq!(p.scene["scene_id"], "sc_1");

    let p: PlanSequenceParams =
        serde_json::from_str(r#"{"scenes": [], "style": "product_launch"}"#).unwrap();
    assert_eq!(p.style, "product_launch");
    assert!(p.sequence_id.is_none());
    assert!(p.fps.is_none());

    let p: EvaluateSequenceParams =
        serde_json::from_str(r#"{"manifest": {}, "scenes": [], "style": "product_launch"}"#)
            .unwrap();
    assert_eq!(p.style, "product_launch");

    let p: ValidateChoreographyParams =
        serde_json::from_str(r#"{"scene": {"scene_id": "sc_1"}}"#).unwrap();
    assert_eq!(p.scene["scene_id"], "sc_1");

    let p: ValidateGuardrailsParams = serde_json::from_str(
        r#"{"style": "product_launch", "camera": {}, "shot_grammar": {}, "duration_s": 2.0}"#,
    )
    .unwrap();
    assert_eq!(p.style, "product_launch");
    assert!(p.manifest.is_none());
    assert!(p.scenes.is_none());

    let p: ValidateGuardrailsParams =
        serde_json::from_str(r#"{"style": "product_launch", "manifest": {}, "scenes": []}"#)
            .unwrap();
    assert!(p.camera.is_none());
    assert!(p.manifest.is_some());
}

/// The server must report its instructions and enable the tools capability.
#[test]
fn server_info_reports_tools_capability() {
    use rmcp::ServerHandler;

    let server = SizzleMcp::new();
    let info = server.get_info();
    assert!(info.instructions.is_some());
    assert!(info.capabilities.tools.is_some());
}
