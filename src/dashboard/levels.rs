use serde::Serialize;

/// Derived gamification state; recomputed on every read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress {
    pub level: i64,
    pub progress: f64,
}

/// Anything non-finite or negative counts as zero experience.
pub fn normalize(xp: f64) -> f64 {
    if xp.is_finite() && xp >= 0.0 {
        xp
    } else {
        0.0
    }
}

/// Maps accumulated experience points to a level and within-level progress.
/// Fifty points per level.
pub fn compute(xp: f64) -> LevelProgress {
    let xp = normalize(xp);
    LevelProgress {
        level: (xp / 50.0).floor() as i64,
        progress: xp % 50.0,
    }
}
