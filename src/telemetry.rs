//! Telemetry helpers for applications embedding `fin-chart-rs`.
//!
//! Geometry functions only emit `tracing` events; installing a subscriber is
//! left to the host. Events emitted by the crate:
//!
//! - `debug`: a frame was built (tick and line counts) or skipped for a
//!   collapsed range; a path was skipped for a degenerate range or for
//!   non-finite pixels; a dynamically colored line was split (points, runs,
//!   paths); a time-weighted average fell back to the plain average because
//!   the resampled grid was too large; a time regime exceeded
//!   [`MAX_TIME_TICKS`](crate::core::MAX_TIME_TICKS).
//! - `trace`: the regime and count of every time tick layout, and the
//!   resampled length of every time-weighted average.
//!
//! `init_default_tracing` is a convenience for binaries and tests that do not
//! bring their own subscriber.

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter is read from `RUST_LOG` and falls back to `info`.
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
