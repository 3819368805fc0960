use crate::dating::YearWindow;
use crate::error::{GalleryError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 作品画像フォルダ
    pub images_dir: PathBuf,
    /// 出力JSON
    pub output: PathBuf,
    /// ファイル名の日付として認める年の範囲
    pub min_pattern_year: i32,
    pub max_pattern_year: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("images"),
            output: PathBuf::from("data/artworks.json"),
            min_pattern_year: 2020,
            max_pattern_year: 2030,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| GalleryError::Config("找不到配置目录".into()))?;
        Ok(base.join("kaihan-gallery").join("config.json"))
    }

    pub fn year_window(&self) -> YearWindow {
        YearWindow {
            min: self.min_pattern_year,
            max: self.max_pattern_year,
        }
    }
}
