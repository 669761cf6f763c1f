pub mod catalog;
pub mod guardrails;
pub mod pipeline;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, tool_router, ServerHandler};

use sizzle_catalog::Catalog;
use sizzle_spec::manifest::{Fps, Resolution, SequenceManifest};
use sizzle_spec::scene::{Camera, Scene, ShotGrammarAxes};

use catalog::{GetPersonalityParams, GetPrimitiveParams, GetStylePackParams, SearchPrimitivesParams};
use guardrails::{ValidateChoreographyParams, ValidateGuardrailsParams};
use pipeline::{AnalyzeSceneParams, EvaluateSequenceParams, PlanSequenceParams};

fn ok_json(value: impl serde::Serialize) -> Result<CallToolResult, rmcp::ErrorData> {
    let text = serde_json::to_string_pretty(&value)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize result: {e}\"}}"));
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn err_text(message: impl std::fmt::Display) -> Result<CallToolResult, rmcp::ErrorData> {
    Ok(CallToolResult::success(vec![Content::text(format!("Error: {message}"))]))
}

fn parse_scene(value: &serde_json::Value) -> Result<Scene, serde_json::Error> {
    serde_json::from_value(value.clone())
}

#[derive(Clone)]
pub struct SizzleMcp {
    tool_router: ToolRouter<Self>,
    catalog: std::sync::Arc<Catalog>,
}

impl SizzleMcp {
    /// Access the tool router for testing/introspection.
    pub fn router(&self) -> &ToolRouter<Self> {
        &self.tool_router
    }
}

#[tool_router]
impl SizzleMcp {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            catalog: std::sync::Arc::new(Catalog::load_embedded_default()),
        }
    }

    // ── Pipeline stages ─────────────────────────────────────

    /// Classify one scene's content type, visual weight, motion energy, intent tags, and shot grammar. Returns `{metadata, _confidence}` as JSON.
    #[rmcp::tool]
    async fn analyze_scene(
        &self,
        Parameters(params): Parameters<AnalyzeSceneParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let scene = match parse_scene(&params.scene) {
            Ok(scene) => scene,
            Err(e) => return err_text(format!("invalid scene: {e}")),
        };
        let metadata = sizzle_analyzer::analyze_scene(&scene, &self.catalog);
        ok_json(serde_json::json!({
            "metadata": metadata,
            "_confidence": metadata.confidence,
        }))
    }

    /// Order, time, and transition a set of analyzed scenes into a sequence manifest under a style pack. Returns `{manifest, notes}` as JSON.
    #[rmcp::tool]
    async fn plan_sequence(
        &self,
        Parameters(params): Parameters<PlanSequenceParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let scenes: Result<Vec<Scene>, _> = params.scenes.iter().map(parse_scene).collect();
        let scenes = match scenes {
            Ok(scenes) => scenes,
            Err(e) => return err_text(format!("invalid scenes: {e}")),
        };
        let Some(fps) = Fps::from_u32(params.fps.unwrap_or(30)) else {
            return err_text("fps must be one of 24, 30, 60");
        };
        let resolution = Resolution {
            w: params.width.unwrap_or(1080),
            h: params.height.unwrap_or(1920),
        };
        let sequence_id = params.sequence_id.unwrap_or_else(|| "seq_planned".to_string());

        match sizzle_planner::plan_sequence(&scenes, &params.style, sequence_id, resolution, fps, &self.catalog) {
            Ok((manifest, notes)) => ok_json(serde_json::json!({"manifest": manifest, "notes": notes})),
            Err(e) => err_text(e),
        }
    }

    /// Score a planned manifest on pacing, variety, flow, and adherence against the scenes it was planned from. Returns `{score, dimensions, findings}` as JSON.
    #[rmcp::tool]
    async fn evaluate_sequence(
        &self,
        Parameters(params): Parameters<EvaluateSequenceParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let manifest: SequenceManifest = match serde_json::from_value(params.manifest) {
            Ok(manifest) => manifest,
            Err(e) => return err_text(format!("invalid manifest: {e}")),
        };
        let scenes: Result<Vec<Scene>, _> = params.scenes.iter().map(parse_scene).collect();
        let scenes = match scenes {
            Ok(scenes) => scenes,
            Err(e) => return err_text(format!("invalid scenes: {e}")),
        };

        match sizzle_evaluator::evaluate_sequence(&manifest, &scenes, &params.style, &self.catalog) {
            Ok(result) => ok_json(result),
            Err(e) => err_text(e),
        }
    }

    // ── Validation ───────────────────────────────────────────

    /// Validate a scene's document shape without planning it. Returns `{verdict, findings}` as JSON.
    #[rmcp::tool]
    async fn validate_choreography(
        &self,
        Parameters(params): Parameters<ValidateChoreographyParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let scene = match parse_scene(&params.scene) {
            Ok(scene) => scene,
            Err(e) => return err_text(format!("invalid scene: {e}")),
        };
        let result = sizzle_spec::validate_scene(&scene);
        let verdict = if result.is_ok() { "pass" } else { "fail" };
        ok_json(serde_json::json!({"verdict": verdict, "findings": result.errors}))
    }

    /// Judge a camera move (move + shot grammar + duration + personality) or a full planned manifest against physical and editorial safety bounds. Returns a verdict structure as JSON.
    #[rmcp::tool]
    async fn validate_guardrails(
        &self,
        Parameters(params): Parameters<ValidateGuardrailsParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let Some(style_pack) = self.catalog.style_pack(&params.style) else {
            return err_text(format!("unknown style pack '{}'", params.style));
        };
        let Some(personality) = self.catalog.personality(&style_pack.personality) else {
            return err_text(format!("style pack '{}' references an unknown personality", params.style));
        };

        if let (Some(manifest_value), Some(scenes_value)) = (&params.manifest, &params.scenes) {
            let manifest: SequenceManifest = match serde_json::from_value(manifest_value.clone()) {
                Ok(manifest) => manifest,
                Err(e) => return err_text(format!("invalid manifest: {e}")),
            };
            let scenes: Result<Vec<Scene>, _> = scenes_value.iter().map(parse_scene).collect();
            let scenes = match scenes {
                Ok(scenes) => scenes,
                Err(e) => return err_text(format!("invalid scenes: {e}")),
            };
            let scenes_by_id: std::collections::HashMap<&str, &Scene> =
                scenes.iter().map(|s| (s.scene_id.as_str(), s)).collect();
            let result = sizzle_guardrails::validate_full_manifest(
                &manifest,
                &scenes_by_id,
                &style_pack.personality,
                personality,
                &self.catalog.guardrails,
                &self.catalog.shot_grammar,
            );
            return ok_json(result);
        }

        let (Some(camera_value), Some(shot_grammar_value), Some(duration_s)) =
            (&params.camera, &params.shot_grammar, params.duration_s)
        else {
            return err_text(
                "provide either {manifest, scenes} or {camera, shot_grammar, duration_s}",
            );
        };
        let camera: Camera = match serde_json::from_value(camera_value.clone()) {
            Ok(camera) => camera,
            Err(e) => return err_text(format!("invalid camera: {e}")),
        };
        let axes: ShotGrammarAxes = match serde_json::from_value(shot_grammar_value.clone()) {
            Ok(axes) => axes,
            Err(e) => return err_text(format!("invalid shot_grammar: {e}")),
        };
        let css = sizzle_grammar::resolve_shot_grammar_css(axes, personality, &self.catalog.shot_grammar);
        let ctx = sizzle_guardrails::MoveContext {
            camera: &camera,
            shot_grammar_css: &css,
            duration_s,
            personality_slug: &style_pack.personality,
            personality,
            guardrails: &self.catalog.guardrails,
        };
        ok_json(sizzle_guardrails::validate_camera_move(&ctx))
    }

    // ── Catalog lookups ──────────────────────────────────────

    /// Look up a personality by slug. Returns the personality document as JSON, or an error if unknown.
    #[rmcp::tool]
    async fn get_personality(
        &self,
        Parameters(params): Parameters<GetPersonalityParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        match self.catalog.personality(&params.slug) {
            Some(personality) => ok_json(personality),
            None => err_text(format!("unknown personality '{}'", params.slug)),
        }
    }

    /// Look up a style pack by name. Returns the style pack document as JSON, or an error if unknown.
    #[rmcp::tool]
    async fn get_style_pack(
        &self,
        Parameters(params): Parameters<GetStylePackParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        match self.catalog.style_pack(&params.name) {
            Some(style_pack) => ok_json(style_pack),
            None => err_text(format!("unknown style pack '{}'", params.name)),
        }
    }

    /// Search the animation primitives registry by category and/or personality. Returns a JSON array of matches.
    #[rmcp::tool]
    async fn search_primitives(
        &self,
        Parameters(params): Parameters<SearchPrimitivesParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        let results = self
            .catalog
            .primitives
            .search(params.category.as_deref(), params.personality.as_deref());
        ok_json(results)
    }

    /// Look up one animation primitive by ID. Returns the primitive document as JSON, or an error if unknown.
    #[rmcp::tool]
    async fn get_primitive(
        &self,
        Parameters(params): Parameters<GetPrimitiveParams>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        match self.catalog.primitives.get(&params.id) {
            Some(primitive) => ok_json(primitive),
            None => err_text(format!("unknown primitive '{}'", params.id)),
        }
    }
}

#[tool_handler]
impl ServerHandler for SizzleMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Cinematography pipeline tools. Classify scenes with analyze_scene, \
                 order them into a timed sequence with plan_sequence, score the result \
                 with evaluate_sequence, and check moves or manifests against physical \
                 and editorial safety bounds with validate_guardrails. Catalog lookups \
                 (get_personality, get_style_pack, search_primitives, get_primitive) \
                 expose the bundled reference data."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
