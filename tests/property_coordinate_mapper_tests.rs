use fin_chart::core::{Dimensions, PixelCalc};
use proptest::prelude::*;

proptest! {
    #[test]
    fn x_round_trip_property(
        min_x in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        factor in 0.0f64..1.0
    ) {
        let max_x = min_x + span;
        let value = min_x + factor * span;
        let calc = PixelCalc::new(
            Dimensions::new(2048.0, 1024.0)
                .with_padding([8.0, 16.0, 24.0, 32.0])
                .with_x_range(min_x, max_x),
        );

        let recovered = calc.val_x(calc.pix_x(value));
        prop_assert!((recovered - value).abs() <= 1e-7);
    }

    #[test]
    fn y_round_trip_property(
        min_y in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        min_y2 in -1_000.0f64..1_000.0,
        span2 in 0.001f64..1_000.0,
        factor in 0.0f64..1.0
    ) {
        let calc = PixelCalc::new(
            Dimensions::new(800.0, 600.0)
                .with_padding([5.0, 0.0, 15.0, 0.0])
                .with_y_range(min_y, min_y + span)
                .with_secondary_y_range(min_y2, min_y2 + span2),
        );

        let value = min_y + factor * span;
        prop_assert!((calc.val_y1(calc.pix_y1(value)) - value).abs() <= 1e-7);

        let value2 = min_y2 + factor * span2;
        prop_assert!((calc.val_y2(calc.pix_y2(value2)) - value2).abs() <= 1e-7);
    }
}
