use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{ensure, Context};
use libautomata::{preset::Preset, rule::RuleSet, transition::CellModel, viewport};
use serde::{Deserialize, Serialize};

use crate::display::Palette;

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    pub width: usize,
    pub height: usize,

    /// Share of cells alive in a freshly randomized grid, 0 to 100.
    pub random_live_percentage: f64,

    /// Directory of CSV pattern files. The built-in patterns are used when unset.
    pub patterns_dir: Option<PathBuf>,

    pub preset: Preset,

    /// Born/survive sets to start from instead of the preset's, selects `Custom`.
    pub custom_rule: Option<RuleSet>,

    pub model: CellModel,
    pub totalistic: bool,

    /// Generations per second while running.
    pub fps: u32,

    pub zoom: usize,
    pub palette: Palette,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            random_live_percentage: 50.0,
            patterns_dir: None,
            preset: Preset::Conway,
            custom_rule: None,
            model: CellModel::TwoState,
            totalistic: false,
            fps: 5,
            zoom: viewport::MIN_ZOOM,
            palette: Palette::Black,
        }
    }
}

impl ClientConfig {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config: Self =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "grid size {}x{} has no cells",
            self.width,
            self.height
        );
        ensure!(
            (0.0..=100.0).contains(&self.random_live_percentage),
            "random live percentage {} is outside 0-100",
            self.random_live_percentage
        );
        ensure!(
            (viewport::MIN_ZOOM..=viewport::MAX_ZOOM).contains(&self.zoom),
            "zoom {} is outside {}-{}",
            self.zoom,
            viewport::MIN_ZOOM,
            viewport::MAX_ZOOM
        );
        frame_interval(self.fps)?;

        Ok(())
    }
}

/// Time between generations at `fps` generations per second.
pub fn frame_interval(fps: u32) -> anyhow::Result<Duration> {
    ensure!(
        (MIN_FPS..=MAX_FPS).contains(&fps),
        "fps {fps} is outside {MIN_FPS}-{MAX_FPS}"
    );

    Ok(Duration::from_millis(1000 / fps as u64))
}
