use rand::Rng;

/// Fixed spin length; matches the wheel's visual deceleration time.
pub const SPIN_DURATION_MS: u32 = 3000;
/// Roughly one frame per 60 Hz display refresh.
pub const DEFAULT_FRAME_MS: u32 = 16;

/// Cubic ease-out: fast start, smooth deceleration into the target.
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Pick a final rotation for a spin landing on `sector_angle`:
/// 3 to 5 full turns past the current rotation, plus the sector.
pub fn plan_spin<R: Rng>(rng: &mut R, current: f32, sector_angle: f32) -> f32 {
    let turns = 3.0 + rng.gen::<f32>() * 2.0;
    current + 360.0 * turns + sector_angle
}

/// Lazy sequence of intermediate wheel angles from start to target.
///
/// No real time passes here; the host schedules one angle per frame.
/// The last yielded angle is exactly the target normalized to
/// [0, 360), mirroring the snap at the end of the visual spin.
#[derive(Debug, Clone)]
pub struct SpinAnimation {
    start: f32,
    target: f32,
    duration_ms: u32,
    frame_ms: u32,
    elapsed_ms: u32,
    done: bool,
}

impl SpinAnimation {
    pub fn new(start: f32, target: f32) -> Self {
        Self {
            start,
            target,
            duration_ms: SPIN_DURATION_MS,
            frame_ms: DEFAULT_FRAME_MS,
            elapsed_ms: 0,
            done: false,
        }
    }

    pub fn with_timing(mut self, duration_ms: u32, frame_ms: u32) -> Self {
        self.duration_ms = duration_ms.max(1);
        self.frame_ms = frame_ms.max(1);
        self
    }

    /// Resting angle once the spin completes.
    pub fn final_angle(&self) -> f32 {
        self.target.rem_euclid(360.0)
    }
}

impl Iterator for SpinAnimation {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.done {
            return None;
        }

        self.elapsed_ms += self.frame_ms;
        if self.elapsed_ms >= self.duration_ms {
            self.done = true;
            return Some(self.final_angle());
        }

        let progress = self.elapsed_ms as f32 / self.duration_ms as f32;
        Some(self.start + (self.target - self.start) * ease_out_cubic(progress))
    }
}
