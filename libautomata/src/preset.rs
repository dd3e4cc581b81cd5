use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::rule::RuleSet;

/// The catalog of well-known Life-like rules, plus a user editable entry.
///
/// Parses from either the short key (`high_life`) or the full display name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[strum(to_string = "Custom", serialize = "custom")]
    Custom,

    #[default]
    #[strum(to_string = "Conway's Life (B3/S23)", serialize = "conway")]
    Conway,

    #[strum(to_string = "34 Life (B34/S34)", serialize = "life_34")]
    #[serde(rename = "life_34")]
    Life34,

    #[strum(to_string = "HighLife (B36/S23)", serialize = "high_life")]
    HighLife,

    #[strum(to_string = "Day & Night (B3678/S34678)", serialize = "day_night")]
    DayNight,

    #[strum(to_string = "Seeds (B2/S)", serialize = "seeds")]
    Seeds,

    #[strum(to_string = "Replicator (B1357/S1357)", serialize = "replicator")]
    Replicator,

    #[strum(to_string = "Amoeba (B357/S1358)", serialize = "amoeba")]
    Amoeba,

    #[strum(to_string = "Diamoeba (B35678/S5678)", serialize = "diamoeba")]
    Diamoeba,

    #[strum(to_string = "2x2 (B36/S125)", serialize = "two_by_two")]
    TwoByTwo,
}

impl Preset {
    /// Short name used in config files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Preset::Custom => "custom",
            Preset::Conway => "conway",
            Preset::Life34 => "life_34",
            Preset::HighLife => "high_life",
            Preset::DayNight => "day_night",
            Preset::Seeds => "seeds",
            Preset::Replicator => "replicator",
            Preset::Amoeba => "amoeba",
            Preset::Diamoeba => "diamoeba",
            Preset::TwoByTwo => "two_by_two",
        }
    }

    /// The preset's born/survive sets, `None` for [`Preset::Custom`].
    pub fn rule_set(&self) -> Option<RuleSet> {
        let (born, survive): (&[u8], &[u8]) = match self {
            Preset::Custom => return None,
            Preset::Conway => (&[3], &[2, 3]),
            Preset::Life34 => (&[3, 4], &[3, 4]),
            Preset::HighLife => (&[3, 6], &[2, 3]),
            Preset::DayNight => (&[3, 6, 7, 8], &[3, 4, 6, 7, 8]),
            Preset::Seeds => (&[2], &[]),
            Preset::Replicator => (&[1, 3, 5, 7], &[1, 3, 5, 7]),
            Preset::Amoeba => (&[3, 5, 7], &[1, 3, 5, 8]),
            Preset::Diamoeba => (&[3, 5, 6, 7, 8], &[5, 6, 7, 8]),
            Preset::TwoByTwo => (&[3, 6], &[1, 2, 5]),
        };

        Some(RuleSet::new(born.iter().copied(), survive.iter().copied()))
    }
}

/// The rule currently driving a simulation and the catalog entry it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSelection {
    preset: Preset,
    active: RuleSet,
}

impl Default for RuleSelection {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl RuleSelection {
    /// Starts from a preset. `Custom` starts from Conway's sets.
    pub fn from_preset(preset: Preset) -> Self {
        let mut selection = Self {
            preset,
            active: RuleSet::default(),
        };
        selection.select(preset);
        selection
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn active(&self) -> &RuleSet {
        &self.active
    }

    /// Named presets overwrite the active sets, selecting `Custom` keeps them as they are.
    pub fn select(&mut self, preset: Preset) {
        if let Some(rule_set) = preset.rule_set() {
            self.active = rule_set;
        }

        self.preset = preset;
    }

    pub fn set_custom(&mut self, rule_set: RuleSet) {
        self.active = rule_set;
        self.preset = Preset::Custom;
    }

    pub fn set_born<I>(&mut self, born: I)
    where
        I: IntoIterator<Item = u8>,
    {
        self.active.born = born.into_iter().collect();
        self.preset = Preset::Custom;
    }

    pub fn set_survive<I>(&mut self, survive: I)
    where
        I: IntoIterator<Item = u8>,
    {
        self.active.survive = survive.into_iter().collect();
        self.preset = Preset::Custom;
    }
}
