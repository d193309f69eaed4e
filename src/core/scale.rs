use serde::{Deserialize, Serialize};

/// Affine map between a data interval and a pixel interval.
///
/// `extent` is signed so the vertical axis can grow upwards in data space
/// while pixels grow downwards. No guarding is performed: a collapsed domain
/// yields `NaN`/`inf`, which callers are expected to check for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    origin: f64,
    extent: f64,
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain_start: f64, domain_end: f64, origin: f64, extent: f64) -> Self {
        Self {
            domain_start,
            domain_end,
            origin,
            extent,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        self.origin + ((value - self.domain_start) / span) * self.extent
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        ((pixel - self.origin) * span) / self.extent + self.domain_start
    }
}
