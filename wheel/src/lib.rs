mod sector;
mod spin;

pub use sector::{month_angle, pick_month, Season, MONTH_COUNT, MONTH_SECTOR_DEG, SEASON_SECTOR_DEG};
pub use spin::{ease_out_cubic, plan_spin, SpinAnimation, DEFAULT_FRAME_MS, SPIN_DURATION_MS};
