//! Canonical data model for scenes and sequence manifests.
//!
//! This crate provides the authored/analyzed `Scene` and planned
//! `SequenceManifest` types shared by every stage of the pipeline, plus the
//! validators that check them without ever raising on bad input — callers
//! decide what to do with a `ValidationResult`.
//!
//! # Modules
//!
//! - [`error`]: `ValidationError`/`ValidationResult` and the `SpecError`
//!   programmer-error enum
//! - [`enums`]: closed vocabularies drawn directly from the data model
//! - [`ids`]: `sc_`/`seq_` identifier regexes
//! - [`scene`]: the authored `Scene` type and its nested structures
//! - [`manifest`]: the planned `SequenceManifest` type
//! - [`layout_slots`]: slot-name vocabulary per layout template
//! - [`validate`]: the Scene Validator and Manifest Validator

pub mod enums;
pub mod error;
pub mod ids;
pub mod layout_slots;
pub mod manifest;
pub mod scene;
pub mod validate;

pub use error::{SpecError, ValidationError, ValidationResult};
pub use ids::{is_valid_scene_id, is_valid_sequence_id, scene_id_from_filename};
pub use manifest::{
    CameraOverride, Fps, Resolution, SceneEntry, SequenceManifest, TransitionIn,
};
pub use scene::{
    Asset, AssetTrim, Camera, Confidence, Entrance, Layer, Layout, Rect, Scene, SceneMetadata,
    ShotGrammarAxes,
};
pub use validate::{validate_manifest, validate_scene};
