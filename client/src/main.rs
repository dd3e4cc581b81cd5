use std::{
    env,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use anyhow::Context;
use config::ClientConfig;
use display::Palette;
use libautomata::{
    factory,
    pattern::{BuiltinPatterns, PatternSource},
    preset::{Preset, RuleSelection},
    transition::TransitionConfig,
    Simulation,
};
use patterns::CsvPatternDir;
use ticker::TickerHost;

mod cli;
mod config;
mod display;
mod patterns;
mod ticker;

pub struct State {
    simulation: Simulation,
    patterns: Box<dyn PatternSource + Send + Sync>,
    patterns_dir: Option<PathBuf>,
    random_live_percentage: f64,
    fps: u32,
    zoom: usize,
    palette: Palette,

    /// Present while the simulation is running.
    ticker: Option<TickerHost>,
}

impl State {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let grid = factory::random(config.width, config.height, config.random_live_percentage)
            .context("Couldn't create the initial grid")?;

        let mut rules = RuleSelection::from_preset(config.preset);
        if let Some(custom_rule) = config.custom_rule {
            rules.set_custom(custom_rule);
        }

        let simulation = Simulation::new(
            grid,
            rules,
            TransitionConfig {
                model: config.model,
                totalistic: config.totalistic,
            },
        );

        let patterns: Box<dyn PatternSource + Send + Sync> = match &config.patterns_dir {
            Some(dir) => Box::new(CsvPatternDir::new(dir)),
            None => Box::new(BuiltinPatterns::default()),
        };

        Ok(Self {
            simulation,
            patterns,
            patterns_dir: config.patterns_dir,
            random_live_percentage: config.random_live_percentage,
            fps: config.fps,
            zoom: config.zoom,
            palette: config.palette,
            ticker: None,
        })
    }

    /// The settings currently in effect, in config file form.
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            width: self.simulation.grid.width(),
            height: self.simulation.grid.height(),
            random_live_percentage: self.random_live_percentage,
            patterns_dir: self.patterns_dir.clone(),
            preset: self.simulation.rules.preset(),
            custom_rule: (self.simulation.rules.preset() == Preset::Custom)
                .then(|| self.simulation.rules.active().clone()),
            model: self.simulation.transition.model,
            totalistic: self.simulation.transition.totalistic,
            fps: self.fps,
            zoom: self.zoom,
            palette: self.palette,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(config_path) => ClientConfig::load(&config_path)
            .with_context(|| format!("Couldn't load config from {config_path}"))?,
        None => ClientConfig::default(),
    };

    log::info!(
        "Starting with a {}x{} grid, {}",
        config.width,
        config.height,
        config.preset
    );

    let state_arc = Arc::new(RwLock::new(State::new(config)?));

    cli::run_cli(state_arc)
}
