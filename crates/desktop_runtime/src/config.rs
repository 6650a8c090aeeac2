//! Desktop configuration: stacking baseline, cascade placement, and storage keys.

use rand::Rng;

use crate::model::{WindowPosition, DEFAULT_Z_BASELINE};

pub const WINDOWS_STORAGE_KEY: &str = "desktop.windows.v1";
pub const Z_COUNTER_STORAGE_KEY: &str = "desktop.z_top.v1";
pub const WALLPAPER_STORAGE_KEY: &str = "desktop.wallpaper.v1";

/// Exclusive upper bounds of the random offset added to the cascade origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeJitter {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowManagerConfig {
    pub z_baseline: u64,
    pub cascade_origin: WindowPosition,
    pub cascade_jitter: CascadeJitter,
    pub windows_key: String,
    pub z_counter_key: String,
    pub wallpaper_key: String,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            z_baseline: DEFAULT_Z_BASELINE,
            cascade_origin: WindowPosition { x: 80, y: 80 },
            cascade_jitter: CascadeJitter { x: 80, y: 40 },
            windows_key: WINDOWS_STORAGE_KEY.to_string(),
            z_counter_key: Z_COUNTER_STORAGE_KEY.to_string(),
            wallpaper_key: WALLPAPER_STORAGE_KEY.to_string(),
        }
    }
}

impl WindowManagerConfig {
    /// Initial position for a freshly opened window: the cascade origin plus a small random
    /// offset so repeated opens do not stack exactly on top of each other.
    pub fn cascade_position<R: Rng + ?Sized>(&self, rng: &mut R) -> WindowPosition {
        self.cascade_origin
            .offset(jitter(rng, self.cascade_jitter.x), jitter(rng, self.cascade_jitter.y))
    }
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, bound: i32) -> i32 {
    if bound <= 0 {
        0
    } else {
        rng.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn cascade_positions_stay_inside_the_jitter_box() {
        let config = WindowManagerConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let pos = config.cascade_position(&mut rng);
            assert!((80..160).contains(&pos.x), "x out of range: {}", pos.x);
            assert!((80..120).contains(&pos.y), "y out of range: {}", pos.y);
        }
    }

    #[test]
    fn zero_jitter_opens_at_origin() {
        let config = WindowManagerConfig {
            cascade_jitter: CascadeJitter { x: 0, y: 0 },
            ..WindowManagerConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(config.cascade_position(&mut rng), config.cascade_origin);
    }

    #[test]
    fn default_storage_keys_are_distinct() {
        let config = WindowManagerConfig::default();
        let mut keys = vec![
            config.windows_key.as_str(),
            config.z_counter_key.as_str(),
            config.wallpaper_key.as_str(),
        ];
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 3);
    }
}
