//! Wall-clock implementation of the [`Clock`] seam

use chrono::{DateTime, Utc};

use crate::traits::Clock;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
