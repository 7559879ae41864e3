use rand::Rng;
use serde::{Deserialize, Serialize};

pub const SEASON_SECTOR_DEG: f32 = 90.0;
pub const MONTH_SECTOR_DEG: f32 = 30.0;
pub const MONTH_COUNT: u32 = 12;

/// Seasons as laid out on the wheel face: spring on the right at 0°,
/// then clockwise in quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn all() -> &'static [Season] {
        &[Season::Spring, Season::Summer, Season::Autumn, Season::Winter]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    /// Pointer angle that lands the wheel on this season.
    pub fn angle(&self) -> f32 {
        match self {
            Season::Spring => 0.0,
            Season::Summer => 90.0,
            Season::Autumn => 180.0,
            Season::Winter => 270.0,
        }
    }

    pub fn pick<R: Rng>(rng: &mut R) -> Season {
        let all = Season::all();
        all[rng.gen_range(0..all.len())]
    }
}

/// Pointer angle for a month, 1 (January) through 12 (December),
/// arranged clockwise in 30° sectors. Out-of-range inputs wrap.
pub fn month_angle(month: u32) -> f32 {
    ((month.saturating_sub(1) % MONTH_COUNT) as f32) * MONTH_SECTOR_DEG
}

/// Draw a random month, 1 through 12.
pub fn pick_month<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1..=MONTH_COUNT)
}
