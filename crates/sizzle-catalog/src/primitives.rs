//! Animation primitives registry (spec §6.3: "consumed by the renderer,
//! indexed here").

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub personality: Option<String>,
    pub css: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitivesRegistry {
    pub primitives: Vec<Primitive>,
}

impl PrimitivesRegistry {
    pub fn get(&self, id: &str) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.id == id)
    }

    pub fn search(
        &self,
        category: Option<&str>,
        personality: Option<&str>,
    ) -> Vec<&Primitive> {
        self.primitives
            .iter()
            .filter(|p| category.map(|c| p.category == c).unwrap_or(true))
            .filter(|p| {
                personality
                    .map(|want| match &p.personality {
                        Some(p) => p == want,
                        None => true,
                    })
                    .unwrap_or(true)
            })
            .collect()
    }
}
