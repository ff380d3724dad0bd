//! The two non-deterministic inputs of generation: wall-clock time and the
//! rating offset. Both are injected so callers can pin them.

use chrono::{DateTime, Utc};
use rand::Rng;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub trait Jitter {
    /// Offset added to the baseline rating before rounding.
    fn rating_offset(&self) -> f64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Widest offset that still makes sense on a 0..=5 rating.
const MAX_HALF_WIDTH: f64 = 5.0;

/// Uniform offset in `[-half_width, half_width]` drawn from the thread RNG.
/// The width is taken as absolute and capped at [`MAX_HALF_WIDTH`].
pub struct UniformJitter {
    half_width: f64,
}

impl UniformJitter {
    pub fn new(half_width: f64) -> Self {
        let half_width = if half_width.is_finite() {
            half_width.abs().min(MAX_HALF_WIDTH)
        } else {
            0.0
        };
        UniformJitter { half_width }
    }
}

impl Jitter for UniformJitter {
    fn rating_offset(&self) -> f64 {
        if self.half_width == 0.0 {
            return 0.0;
        }
        rand::thread_rng().gen_range(-self.half_width..=self.half_width)
    }
}

pub struct NoJitter;

impl Jitter for NoJitter {
    fn rating_offset(&self) -> f64 {
        0.0
    }
}
