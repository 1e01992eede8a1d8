use serde::{Deserialize, Serialize};

/// Asset manifest naming every model and texture the host must fetch.
/// Loaded from a JSON file at runtime; the fleet size follows the number
/// of rocket models listed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneManifest {
    pub station: StationAssets,
    pub rockets: RocketAssets,
}

/// Station geometry and its diffuse texture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationAssets {
    /// Relative path to the OBJ file.
    pub model: String,
    /// Relative path to the diffuse PNG.
    pub texture: String,
}

/// Rocket models plus the hull textures assigned at random per craft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketAssets {
    /// One model per fleet berth.
    pub models: Vec<String>,
    #[serde(default)]
    pub textures: Vec<String>,
}

impl SceneManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for SceneManifest {
    /// The stock asset set shipped with the page.
    fn default() -> Self {
        Self {
            station: StationAssets {
                model: "spacestations/station01.obj".to_string(),
                texture: "spacestations/station01_diffuse.png".to_string(),
            },
            rockets: RocketAssets {
                models: (1..=8).map(|i| format!("rockets/Ship{i:02}.fbx")).collect(),
                textures: vec![
                    "rockets/SpaceShipsTexture.png".to_string(),
                    "rockets/SpaceShipsDark.png".to_string(),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "station": { "model": "hub.obj", "texture": "hub.png" },
            "rockets": { "models": ["a.fbx", "b.fbx"] }
        }"#;
        let manifest = SceneManifest::from_json(json).unwrap();
        assert_eq!(manifest.station.model, "hub.obj");
        assert_eq!(manifest.rockets.models.len(), 2);
        assert!(manifest.rockets.textures.is_empty());
    }

    #[test]
    fn default_matches_stock_assets() {
        let manifest = SceneManifest::default();
        assert_eq!(manifest.rockets.models.len(), 8);
        assert_eq!(manifest.rockets.models[0], "rockets/Ship01.fbx");
        assert_eq!(manifest.rockets.models[7], "rockets/Ship08.fbx");
        assert_eq!(manifest.rockets.textures.len(), 2);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(SceneManifest::from_json("{ not json").is_err());
    }
}
