//! Shot grammar CSS mapping and content-type affinity data (spec §4.4, §4.6).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use sizzle_spec::enums::{Angle, ContentType, Framing, ShotSize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotSizeCss {
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleCss {
    pub rotate_x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramingCss {
    pub transform_origin: String,
    pub rotate_z: f64,
}

/// The shot-grammar catalog document: CSS contribution per axis value, plus
/// the content-type affinity table the Analyzer consults for shot size
/// classification (spec §4.4 "content-type affinity ... for size").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotGrammarCatalog {
    pub shot_size: HashMap<ShotSize, ShotSizeCss>,
    pub angle: HashMap<Angle, AngleCss>,
    pub framing: HashMap<Framing, FramingCss>,
    pub content_type_size_affinity: HashMap<ContentType, ShotSize>,
}
