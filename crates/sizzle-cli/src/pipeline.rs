//! The default pipeline run: load scenes, validate, analyze, plan, check
//! guardrails, and either write a manifest or hand off to the renderer
//! (spec §6.4 `sizzle <scenes-dir> --style <name> ...`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use colored::Colorize;

use sizzle_catalog::Catalog;
use sizzle_spec::enums::Verdict;
use sizzle_spec::manifest::{Fps, Resolution, SequenceManifest};
use sizzle_spec::scene::Scene;
use sizzle_spec::{scene_id_from_filename, validate_scene};

pub struct RunOptions {
    pub scenes_dir: PathBuf,
    pub style: String,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    pub verbose: bool,
    pub resolution: Resolution,
    pub fps: Fps,
}

/// Loads every `*.json` file directly under `scenes_dir`, alphabetically by
/// filename, deriving `scene_id` from the filename when the document omits
/// one (spec §6.4).
pub fn load_scenes(scenes_dir: &Path) -> Result<Vec<Scene>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(scenes_dir)
        .with_context(|| format!("reading scenes directory {}", scenes_dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        bail!("no scene JSON files found in {}", scenes_dir.display());
    }

    let mut scenes = Vec::with_capacity(paths.len());
    for path in &paths {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene file {}", path.display()))?;
        let mut value: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("parsing scene file {}", path.display()))?;

        if value.get("scene_id").and_then(|v| v.as_str()).is_none() {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("scene");
            if let serde_json::Value::Object(map) = &mut value {
                map.insert(
                    "scene_id".to_string(),
                    serde_json::Value::String(scene_id_from_filename(stem)),
                );
            }
        }

        let scene: Scene = serde_json::from_value(value)
            .with_context(|| format!("deserializing scene file {}", path.display()))?;
        scenes.push(scene);
    }
    Ok(scenes)
}

/// Validates every scene, printing each violation to stderr. Returns
/// `false` if any scene failed validation.
pub fn validate_scenes(scenes: &[Scene]) -> bool {
    let mut all_ok = true;
    for scene in scenes {
        let result = validate_scene(scene);
        if !result.is_ok() {
            all_ok = false;
            for error in &result.errors {
                eprintln!(
                    "{} {}: {}",
                    "invalid".red().bold(),
                    scene.scene_id,
                    error
                );
            }
        }
    }
    all_ok
}

/// Runs the Scene Analyzer over every scene missing manually authored
/// metadata, leaving any manual override untouched (spec §6.1: "metadata:
/// optional manual override of analyzer output").
pub fn analyze_scenes(scenes: &mut [Scene], catalog: &Catalog) {
    for scene in scenes.iter_mut() {
        if scene.metadata.is_none() {
            scene.metadata = Some(sizzle_analyzer::analyze_scene(scene, catalog));
        }
    }
}

pub struct PlanOutcome {
    pub manifest: SequenceManifest,
    pub guardrails: sizzle_guardrails::ManifestGuardrailResult,
}

/// Plans a sequence from already-analyzed scenes and checks it against the
/// camera guardrails, re-deriving a `sequence_id` from the scenes directory
/// name.
pub fn plan_and_check(
    scenes: &[Scene],
    scenes_dir: &Path,
    style: &str,
    resolution: Resolution,
    fps: Fps,
    catalog: &Catalog,
) -> Result<PlanOutcome> {
    let style_pack = catalog
        .style_pack(style)
        .with_context(|| format!("unknown style pack '{style}'"))?;
    let personality = catalog
        .personality(&style_pack.personality)
        .with_context(|| format!("style pack '{style}' references an unknown personality"))?;

    let dir_name = scenes_dir
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("sequence");
    let slug: String = dir_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let sequence_id = format!("seq_{slug}");

    let (manifest, _notes) = sizzle_planner::plan_sequence(
        scenes,
        style,
        sequence_id,
        resolution,
        fps,
        catalog,
    )
    .context("planning the sequence")?;

    let scenes_by_id: HashMap<&str, &Scene> =
        scenes.iter().map(|s| (s.scene_id.as_str(), s)).collect();
    let guardrails = sizzle_guardrails::validate_full_manifest(
        &manifest,
        &scenes_by_id,
        &style_pack.personality,
        personality,
        &catalog.guardrails,
        &catalog.shot_grammar,
    );

    Ok(PlanOutcome { manifest, guardrails })
}

/// Default output path per spec §6.4: `renders/sizzle-<style>-<unix>.mp4`,
/// or the dry-run `.json` equivalent.
pub fn default_output_path(style: &str, dry_run: bool, now_unix: i64) -> PathBuf {
    let ext = if dry_run { "json" } else { "mp4" };
    PathBuf::from(format!("renders/sizzle-{style}-{now_unix}.{ext}"))
}

pub fn guardrail_overall_passed(result: &sizzle_guardrails::ManifestGuardrailResult) -> bool {
    result.overall != Verdict::Block
}
