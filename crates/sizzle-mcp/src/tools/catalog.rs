//! Parameter types for the catalog lookup tools (spec §6.5: `get_personality`
//! / `get_style_pack` / `search_primitives` / `get_primitive`).

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Deserialize, JsonSchema)]
pub struct GetPersonalityParams {
    /// Personality slug, e.g. "confident-launch"
    pub slug: String,
}

#[derive(Deserialize, JsonSchema)]
pub struct GetStylePackParams {
    /// Style pack name
    pub name: String,
}

#[derive(Deserialize, JsonSchema)]
pub struct SearchPrimitivesParams {
    /// Filter by primitive category
    pub category: Option<String>,
    /// Filter by personality slug
    pub personality: Option<String>,
}

#[derive(Deserialize, JsonSchema)]
pub struct GetPrimitiveParams {
    /// Primitive identifier
    pub id: String,
}
