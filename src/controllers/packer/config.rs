use crate::controllers::packer::errors::ControllerError;
use crate::core::data::{Bounds, Circle, Point};
use serde::{Deserialize, Serialize};

/// Construction parameters. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackerConfig {
    /// Self-drive the animation loop. When off, the host calls `update`.
    pub continuous_mode: bool,
    /// Zero is treated as unset.
    pub centering_passes: Option<u32>,
    /// Zero is treated as unset.
    pub collision_passes: Option<u32>,
    pub circles: Vec<Circle>,
    pub bounds: Bounds,
    pub target: Point,
}

impl PackerConfig {
    pub fn from_json(json: &str) -> Result<Self, ControllerError> {
        serde_json::from_str(json).map_err(ControllerError::Config)
    }
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            continuous_mode: true,
            centering_passes: None,
            collision_passes: None,
            circles: Vec::new(),
            bounds: Bounds::default(),
            target: Point::new(50.0, 50.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PackerConfig::default();

        assert!(config.continuous_mode);
        assert!(config.circles.is_empty());
        assert_eq!(config.bounds, Bounds::new(100.0, 100.0));
        assert_eq!(config.target, Point::new(50.0, 50.0));
        assert_eq!(config.centering_passes, None);
        assert_eq!(config.collision_passes, None);
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        assert_eq!(PackerConfig::from_json("{}").unwrap(), PackerConfig::default());
    }

    #[test]
    fn test_host_json_uses_camel_case_keys() {
        let json = r#"{
            "continuousMode": false,
            "centeringPasses": 2,
            "collisionPasses": 3,
            "circles": [{ "id": "a", "radius": 12, "position": { "x": 1, "y": 2 } }],
            "bounds": { "width": 640, "height": 480 },
            "target": { "x": 320, "y": 240 }
        }"#;

        let config = PackerConfig::from_json(json).unwrap();

        assert!(!config.continuous_mode);
        assert_eq!(config.centering_passes, Some(2));
        assert_eq!(config.collision_passes, Some(3));
        assert_eq!(config.circles.len(), 1);
        assert_eq!(config.circles[0].radius, 12.0);
        assert_eq!(config.bounds, Bounds::new(640.0, 480.0));
        assert_eq!(config.target, Point::new(320.0, 240.0));
    }

    #[test]
    fn test_invalid_json_is_a_config_error() {
        let result = PackerConfig::from_json(r#"{"continuousMode": "yes"}"#);

        assert!(matches!(result, Err(ControllerError::Config(_))));
    }
}
