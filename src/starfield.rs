use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of stars in the background field.
pub const STAR_COUNT: usize = 200;

const MAX_POSITION: f64 = 100.0;
const MAX_SIZE: f64 = 2.0;

/// One decorative point of the background field.
///
/// `x` and `y` are percentages of the viewport, `size` is in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
}

impl StarPoint {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(0.0..MAX_POSITION),
            y: rng.gen_range(0.0..MAX_POSITION),
            size: rng.gen_range(0.0..MAX_SIZE),
            opacity: rng.gen_range(0.0..1.0),
        }
    }

    /// Inline style placing the star inside a fixed, full-viewport container.
    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; width: {:.3}px; height: {:.3}px; opacity: {:.3};",
            self.x, self.y, self.size, self.size, self.opacity
        )
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<StarPoint> {
    (0..count).map(|_| StarPoint::random(rng)).collect()
}

pub fn generate_starfield() -> Vec<StarPoint> {
    generate(&mut rand::thread_rng(), STAR_COUNT)
}
