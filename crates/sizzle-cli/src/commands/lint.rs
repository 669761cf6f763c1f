//! Lint command: validates and analyzes scenes without planning a sequence,
//! for quick iteration on authored scene JSON.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use sizzle_catalog::Catalog;

use crate::pipeline;

pub fn run(scenes_dir: &Path) -> Result<ExitCode> {
    let catalog = Catalog::load_embedded_default();

    let mut scenes = match pipeline::load_scenes(scenes_dir) {
        Ok(scenes) => scenes,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            return Ok(ExitCode::from(1));
        }
    };

    let valid = pipeline::validate_scenes(&scenes);
    pipeline::analyze_scenes(&mut scenes, &catalog);

    for scene in &scenes {
        let Some(metadata) = &scene.metadata else { continue };
        println!(
            "{} {} content_type={:?} visual_weight={:?} motion_energy={:?}",
            "scene".cyan(),
            scene.scene_id,
            metadata.content_type,
            metadata.visual_weight,
            metadata.motion_energy,
        );
    }

    if valid {
        println!("{} {} scenes are valid", "ok".green().bold(), scenes.len());
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lint_reports_valid_scenes() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("sc_a.json"),
            r#"{"scene_id": "sc_a", "duration_s": 3.0}"#,
        )
        .unwrap();
        let code = run(tmp.path()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn lint_reports_invalid_scenes() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("sc_a.json"),
            r#"{"scene_id": "sc_a", "duration_s": 99.0}"#,
        )
        .unwrap();
        let code = run(tmp.path()).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }
}
