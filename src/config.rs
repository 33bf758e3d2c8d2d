use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{texture::OwnedTexture, Pixel, Vertex};

#[derive(Clone, Debug, Deserialize)]
pub struct Scene {
    pub output: OutputConfig,
    #[serde(default)]
    pub texture: TextureConfig,
    #[serde(default)]
    pub triangles: Vec<Triangle>,
}

impl Scene {
    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read file {path:?}"))?;
        let scene = toml::from_str(&contents)
            .with_context(|| format!("failed to parse scene {path:?}"))?;
        Ok(scene)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default = "OutputConfig::default_path")]
    pub path: PathBuf,
    #[serde(
        default = "OutputConfig::default_clear_color",
        rename = "clear-color",
        deserialize_with = "detail::deser_color"
    )]
    pub clear_color: Pixel,
}

impl OutputConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("out.png")
    }

    fn default_clear_color() -> Pixel {
        [0, 0, 0, 0xff]
    }
}

/// Where texels come from. An image `path` takes precedence over the checkerboard.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TextureConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub checkerboard: CheckerboardConfig,
}

impl TextureConfig {
    pub fn load(&self) -> Result<OwnedTexture> {
        match &self.path {
            Some(path) => OwnedTexture::load(path),
            None => {
                let CheckerboardConfig { size, cell, colors } = self.checkerboard;
                Ok(OwnedTexture::checkerboard(size, cell, colors))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CheckerboardConfig {
    #[serde(default = "CheckerboardConfig::default_size")]
    pub size: usize,
    #[serde(default = "CheckerboardConfig::default_cell")]
    pub cell: usize,
    #[serde(
        default = "CheckerboardConfig::default_colors",
        deserialize_with = "detail::deser_colors"
    )]
    pub colors: [Pixel; 2],
}

impl CheckerboardConfig {
    fn default_size() -> usize {
        8
    }

    fn default_cell() -> usize {
        1
    }

    fn default_colors() -> [Pixel; 2] {
        [[0xff, 0xff, 0xff, 0xff], [0xff, 0x00, 0xff, 0xff]]
    }
}

impl Default for CheckerboardConfig {
    fn default() -> Self {
        CheckerboardConfig {
            size: Self::default_size(),
            cell: Self::default_cell(),
            colors: Self::default_colors(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

mod detail {
    use serde::de::{Deserialize, Deserializer, Error};

    use crate::Pixel;

    /// `#rrggbb` or `#rrggbbaa`.
    pub fn parse_color(hex: &str) -> Result<Pixel, String> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| format!("expected a color like #rrggbb, got {hex:?}"))?;
        let value = u32::from_str_radix(digits, 16).map_err(|e| format!("{hex:?}: {e}"))?;
        match digits.len() {
            6 => Ok(((value << 8) | 0xff).to_be_bytes()),
            8 => Ok(value.to_be_bytes()),
            _ => Err(format!("expected 6 or 8 hex digits, got {hex:?}")),
        }
    }

    pub fn deser_color<'de, D>(deserializer: D) -> Result<Pixel, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        parse_color(&hex).map_err(D::Error::custom)
    }

    pub fn deser_colors<'de, D>(deserializer: D) -> Result<[Pixel; 2], D::Error>
    where
        D: Deserializer<'de>,
    {
        let [a, b] = <[String; 2]>::deserialize(deserializer)?;
        Ok([
            parse_color(&a).map_err(D::Error::custom)?,
            parse_color(&b).map_err(D::Error::custom)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bundled_scene() {
        let scene: Scene = toml::from_str(include_str!("../scene.toml")).unwrap();
        assert!(!scene.triangles.is_empty());
        assert!(scene.output.width > 0 && scene.output.height > 0);
    }

    #[test]
    fn defaults() {
        let scene: Scene = toml::from_str(
            r#"
            [output]
            width = 16
            height = 8
            "#,
        )
        .unwrap();
        assert_eq!(scene.output.path, PathBuf::from("out.png"));
        assert_eq!(scene.output.clear_color, [0, 0, 0, 0xff]);
        assert_eq!(scene.texture.path, None);
        assert_eq!(scene.texture.checkerboard, CheckerboardConfig::default());
        assert!(scene.triangles.is_empty());
    }

    #[test]
    fn triangles_and_colors() {
        let scene: Scene = toml::from_str(
            r##"
            [output]
            width = 4
            height = 4
            path = "tri.png"
            clear-color = "#102030"

            [texture.checkerboard]
            size = 2
            colors = ["#000000", "#ffffff80"]

            [[triangles]]
            vertices = [
                { x = 0, y = 0, u = 0, v = 0 },
                { x = 3, y = 0, u = 1.0, v = 0.0 },
                { x = 0, y = 3, u = 0.0, v = 1 },
            ]
            "##,
        )
        .unwrap();
        assert_eq!(scene.output.clear_color, [0x10, 0x20, 0x30, 0xff]);
        assert_eq!(
            scene.texture.checkerboard,
            CheckerboardConfig {
                size: 2,
                cell: 1,
                colors: [[0, 0, 0, 0xff], [0xff, 0xff, 0xff, 0x80]],
            }
        );
        assert_eq!(
            scene.triangles,
            vec![Triangle {
                vertices: [
                    Vertex::new(0, 0, 0.0, 0.0),
                    Vertex::new(3, 0, 1.0, 0.0),
                    Vertex::new(0, 3, 0.0, 1.0),
                ]
            }]
        );

        let texture = scene.texture.load().unwrap();
        assert_eq!((texture.width(), texture.height()), (2, 2));
    }

    #[test]
    fn rejects_bad_color() {
        assert!(detail::parse_color("102030").is_err());
        assert!(detail::parse_color("#1020").is_err());
        assert!(detail::parse_color("#zzzzzz").is_err());

        let res = toml::from_str::<Scene>(
            r#"
            [output]
            width = 1
            height = 1
            clear-color = "red"
            "#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn missing_scene_file() {
        let err = Scene::load_toml("does/not/exist.toml").unwrap_err();
        assert!(err.to_string().contains("failed to read file"));
    }
}
