//! Configuration records and TOML loading.
//!
//! Every section is `#[serde(default)]`, so a config file only needs to name
//! the values it overrides.  Values are read as-is: out-of-range numbers are
//! normalized later, at the point of use (e.g. `Need` construction), and never
//! rejected here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{KnError, KnResult, Vec2};

// ── KennelConfig ──────────────────────────────────────────────────────────────

/// Complete configuration of one kennel session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KennelConfig {
    /// Number of dogs spawned when the session starts.
    pub dog_count: usize,
    pub sim:       SimConfig,
    pub hunger:    HungerConfig,
    pub dog:       DogConfig,
    pub bowl:      BowlConfig,
    pub pension:   PensionSettings,
}

impl Default for KennelConfig {
    fn default() -> Self {
        Self {
            dog_count: 3,
            sim:       SimConfig::default(),
            hunger:    HungerConfig::default(),
            dog:       DogConfig::default(),
            bowl:      BowlConfig::default(),
            pension:   PensionSettings::default(),
        }
    }
}

impl KennelConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> KnResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded kennel config");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> KnResult<Self> {
        toml::from_str(content).map_err(KnError::Toml)
    }

    /// Render the configuration as pretty TOML.
    pub fn to_toml(&self) -> KnResult<String> {
        toml::to_string_pretty(self).map_err(KnError::TomlSerialize)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Frame loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Simulated seconds per frame.  Default: 1/30 s.
    pub frame_duration_secs: f32,
    /// Total frames to simulate when calling `Kennel::run`.
    pub total_frames: u64,
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
    /// Length of one in-game day; rewards are paid at each day boundary.
    pub day_length_secs: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame_duration_secs: 1.0 / 30.0,
            total_frames:        30 * 360,
            seed:                42,
            day_length_secs:     120.0,
        }
    }
}

// ── Needs ─────────────────────────────────────────────────────────────────────

/// Parameters shared by every need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeedConfig {
    /// Display name of the need.
    pub name: String,
    /// Value of a fully satisfied need.
    pub max_value: f32,
    /// Units lost per simulated second.
    pub decrease_rate: f32,
    /// At or below this value the need is critical.  Expected in `[0, 100]`.
    pub critical_threshold: f32,
}

impl Default for NeedConfig {
    fn default() -> Self {
        Self {
            name:               "Hunger".to_string(),
            max_value:          300.0,
            decrease_rate:      1.0,
            critical_threshold: 25.0,
        }
    }
}

/// Hunger need parameters plus the eating action it drives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HungerConfig {
    pub need: NeedConfig,
    /// Hunger restored by one meal.
    pub eat_gain: f32,
    /// Seconds a meal keeps the dog at the bowl.
    pub eat_cooldown: f32,
    /// Kibble removed from the bowl by one meal.
    pub eat_cost: u32,
}

impl Default for HungerConfig {
    fn default() -> Self {
        Self {
            need:         NeedConfig::default(),
            eat_gain:     35.0,
            eat_cooldown: 2.0,
            eat_cost:     100,
        }
    }
}

// ── DogConfig ─────────────────────────────────────────────────────────────────

/// Movement and idle-roaming parameters of a dog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DogConfig {
    /// Speed used when heading somewhere on purpose (the bowl).
    pub base_speed: f32,
    pub min_walk_speed: f32,
    pub max_walk_speed: f32,
    /// Pause between two wander destinations, drawn in `[min, max)`.
    pub cooldown_min: f32,
    pub cooldown_max: f32,
    /// A new wander point closer than this to the previous one is rejected.
    pub min_distance_from_last_point: f32,
    pub stopping_distance: f32,
    /// Radius around the pension centre in which wander points are drawn.
    pub wander_range: f32,
    /// Probability of sniffing in place instead of picking a new point.
    pub sniff_chance: f32,
    pub sniff_min_secs: f32,
    pub sniff_max_secs: f32,
}

impl Default for DogConfig {
    fn default() -> Self {
        Self {
            base_speed:                   2.5,
            min_walk_speed:               1.2,
            max_walk_speed:               2.5,
            cooldown_min:                 1.5,
            cooldown_max:                 4.0,
            min_distance_from_last_point: 1.5,
            stopping_distance:            1.5,
            wander_range:                 6.0,
            sniff_chance:                 0.3,
            sniff_min_secs:               1.0,
            sniff_max_secs:               3.0,
        }
    }
}

// ── BowlConfig ────────────────────────────────────────────────────────────────

/// The shared food bowl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BowlConfig {
    /// Kibble held by a full bowl.  The bowl starts full.
    pub capacity: f32,
    pub position: Vec2,
    /// Distance at which a dog's paws enter the bowl's trigger zone.  The
    /// kennel builder raises it to at least the dog's stopping distance plus
    /// the arrival slack.
    pub trigger_radius: f32,
}

impl Default for BowlConfig {
    fn default() -> Self {
        Self {
            capacity:       500.0,
            position:       Vec2::new(4.0, 0.0),
            trigger_radius: 2.0,
        }
    }
}

// ── PensionSettings ───────────────────────────────────────────────────────────

/// Starting values of a new pension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PensionSettings {
    /// Pension name.  Blank means "draw one from `random_names`".
    pub name: String,
    pub starting_money: i64,
    pub starting_prestige: i64,
    pub random_names: Vec<String>,
}

impl Default for PensionSettings {
    fn default() -> Self {
        let random_names = [
            "La Patte Heureuse",
            "Le Refuge Doux",
            "Chez Toutou",
            "La Maison des Museaux",
            "La Cabane à Wouf",
            "Le Panier Douillet",
            "Bark & Breakfast",
            "The Happy Tails Inn",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Self {
            name: String::new(),
            starting_money: 1000,
            starting_prestige: 0,
            random_names,
        }
    }
}
