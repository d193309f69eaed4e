use crate::core::scale::LinearScale;
use crate::core::types::{DataPoint, Dimensions, YAxis};

/// Value/pixel conversions derived from one set of [`Dimensions`].
///
/// The calc is a plain value: rebuild it whenever the dimensions change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelCalc {
    dimensions: Dimensions,
    x: LinearScale,
    y1: LinearScale,
    y2: LinearScale,
}

impl PixelCalc {
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        let padding = dimensions.padding;
        let plot_width = dimensions.width - padding.left - padding.right;
        let plot_height = dimensions.height - padding.top - padding.bottom;
        let baseline = dimensions.height - padding.bottom;
        let (min_y2, max_y2) = dimensions.secondary_y_range();

        Self {
            dimensions,
            x: LinearScale::new(dimensions.min_x, dimensions.max_x, padding.left, plot_width),
            y1: LinearScale::new(dimensions.min_y, dimensions.max_y, baseline, -plot_height),
            y2: LinearScale::new(min_y2, max_y2, baseline, -plot_height),
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    #[must_use]
    pub fn pix_x(&self, value: f64) -> f64 {
        self.x.domain_to_pixel(value)
    }

    #[must_use]
    pub fn pix_y1(&self, value: f64) -> f64 {
        self.y1.domain_to_pixel(value)
    }

    #[must_use]
    pub fn pix_y2(&self, value: f64) -> f64 {
        self.y2.domain_to_pixel(value)
    }

    #[must_use]
    pub fn val_x(&self, pixel: f64) -> f64 {
        self.x.pixel_to_domain(pixel)
    }

    #[must_use]
    pub fn val_y1(&self, pixel: f64) -> f64 {
        self.y1.pixel_to_domain(pixel)
    }

    #[must_use]
    pub fn val_y2(&self, pixel: f64) -> f64 {
        self.y2.pixel_to_domain(pixel)
    }

    #[must_use]
    pub fn pix_y(&self, axis: YAxis, value: f64) -> f64 {
        match axis {
            YAxis::Primary => self.pix_y1(value),
            YAxis::Secondary => self.pix_y2(value),
        }
    }

    #[must_use]
    pub fn val_y(&self, axis: YAxis, pixel: f64) -> f64 {
        match axis {
            YAxis::Primary => self.val_y1(pixel),
            YAxis::Secondary => self.val_y2(pixel),
        }
    }

    /// Maps a data point into pixel space against the selected y axis.
    #[must_use]
    pub fn pix_point(&self, axis: YAxis, point: DataPoint) -> (f64, f64) {
        (self.pix_x(point.x), self.pix_y(axis, point.y))
    }

    /// True when the mapping for `axis` cannot produce usable pixels: a
    /// collapsed range or a non-finite image of the origin.
    #[must_use]
    pub fn is_degenerate(&self, axis: YAxis) -> bool {
        self.dimensions.is_degenerate(axis)
            || !self.pix_x(0.0).is_finite()
            || !self.pix_y(axis, 0.0).is_finite()
    }

    /// Inclusive test of a data-space x value against the visible range.
    #[must_use]
    pub fn point_visible(&self, x: f64) -> bool {
        x >= self.dimensions.min_x && x <= self.dimensions.max_x
    }
}
