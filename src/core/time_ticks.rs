//! Time-axis tick generation.
//!
//! A time range is bucketed into a granularity regime; each regime walks
//! forward from a round calendar boundary at or before the range start and
//! classifies every tick by the calendar unit it lands on. All calendar
//! arithmetic is UTC.

use chrono::{DateTime, Datelike, Months, NaiveDate, Timelike, Utc, Weekday};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::calc::PixelCalc;
use crate::core::primitives::snap_to_pixel_center;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Exclusive upper range bound (seconds) of each regime, coarsest last.
pub const SECONDS_FINE_MAX_RANGE: f64 = 600.0;
pub const SECONDS_COARSE_MAX_RANGE: f64 = 3600.0;
pub const MINUTE_HOUR_MAX_RANGE: f64 = 86_400.0 * 0.6;
pub const HOUR_DAY_MAX_RANGE: f64 = 86_400.0 * 8.0;
pub const DAY_WEEK_MAX_RANGE: f64 = 86_400.0 * 35.0;
pub const WEEK_MONTH_MAX_RANGE: f64 = 86_400.0 * 35.0 * 12.0;
pub const MONTH_YEAR_MAX_RANGE: f64 = 86_400.0 * 365.0 * 10.1;

/// Hard cap on generated ticks so a pathological range cannot allocate
/// unbounded output.
pub const MAX_TIME_TICKS: usize = 512;

/// Visual prominence of a time tick. Ordered so that higher wins when two
/// ticks collide on the same pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TickMajor {
    Minor = 0,
    Major = 1,
    Boundary = 2,
}

impl TickMajor {
    #[must_use]
    pub fn level(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn is_major(self) -> bool {
        self > Self::Minor
    }
}

/// Raw tick in data space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTick {
    pub time: i64,
    pub major: TickMajor,
    pub label: Option<String>,
}

/// Tick after projection onto the x axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub position: f64,
    pub major: TickMajor,
    pub label: Option<String>,
}

/// Granularity bucket selected from the total range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRegime {
    /// 30 second ticks, major on the minute.
    SecondsFine,
    /// One minute ticks, major every ten minutes.
    SecondsCoarse,
    /// Half-hour ticks, major on the hour, boundary at midnight.
    MinuteHour,
    /// Three-hour ticks, major at midnight.
    HourDay,
    /// Daily ticks, major on Sundays.
    DayWeek,
    /// Weekly ticks plus a labelled boundary tick at each new month.
    WeekMonth,
    /// Monthly ticks, major in July and January.
    MonthYear,
    /// Yearly ticks, major on half decades and decades.
    Lifetime,
}

impl TimeRegime {
    /// Returns `None` for empty, negative or non-finite ranges.
    #[must_use]
    pub fn for_range(range: f64) -> Option<Self> {
        if !range.is_finite() || range <= 0.0 {
            return None;
        }
        Some(if range < SECONDS_FINE_MAX_RANGE {
            Self::SecondsFine
        } else if range < SECONDS_COARSE_MAX_RANGE {
            Self::SecondsCoarse
        } else if range < MINUTE_HOUR_MAX_RANGE {
            Self::MinuteHour
        } else if range < HOUR_DAY_MAX_RANGE {
            Self::HourDay
        } else if range < DAY_WEEK_MAX_RANGE {
            Self::DayWeek
        } else if range < WEEK_MONTH_MAX_RANGE {
            Self::WeekMonth
        } else if range < MONTH_YEAR_MAX_RANGE {
            Self::MonthYear
        } else {
            Self::Lifetime
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum TickStep {
    Seconds(i64),
    Months(u32),
}

struct RegimeLayout {
    start: DateTime<Utc>,
    step: TickStep,
    count: usize,
    major: fn(DateTime<Utc>) -> TickMajor,
    label: fn(DateTime<Utc>) -> Option<String>,
    extra: Option<fn(DateTime<Utc>) -> Option<TimeTick>>,
}

impl RegimeLayout {
    fn fixed(
        start: DateTime<Utc>,
        step_seconds: i64,
        begin: f64,
        end: f64,
        major: fn(DateTime<Utc>) -> TickMajor,
        label: fn(DateTime<Utc>) -> Option<String>,
    ) -> Self {
        let count = ((end - begin) / step_seconds as f64).ceil() as usize + 1;
        Self {
            start,
            step: TickStep::Seconds(step_seconds),
            count,
            major,
            label,
            extra: None,
        }
    }

    fn tick_time(&self, index: usize) -> Option<DateTime<Utc>> {
        match self.step {
            TickStep::Seconds(seconds) => {
                from_unix(self.start.timestamp() + seconds * index as i64)
            }
            TickStep::Months(months) => {
                let offset = months.checked_mul(u32::try_from(index).ok()?)?;
                self.start.checked_add_months(Months::new(offset))
            }
        }
    }

    fn generate(&self) -> Vec<TimeTick> {
        let mut ticks = Vec::with_capacity(self.count);
        for index in 0..self.count {
            let Some(time) = self.tick_time(index) else {
                break;
            };
            let major = (self.major)(time);
            ticks.push(TimeTick {
                time: time.timestamp(),
                major,
                label: if major.is_major() {
                    (self.label)(time)
                } else {
                    None
                },
            });
            if let Some(extra) = self.extra.and_then(|extra| extra(time)) {
                ticks.push(extra);
            }
        }
        ticks
    }
}

/// Generates raw ticks covering `begin..=end` (unix seconds).
///
/// Degenerate, negative or non-finite ranges produce no ticks.
#[must_use]
pub fn time_series_ticks(begin: f64, end: f64) -> Vec<TimeTick> {
    let Some(regime) = TimeRegime::for_range(end - begin) else {
        return Vec::new();
    };
    let Some(layout) = regime_layout(regime, begin, end) else {
        return Vec::new();
    };
    if layout.count > MAX_TIME_TICKS {
        debug!(?regime, count = layout.count, "time tick budget exceeded");
        return Vec::new();
    }
    trace!(?regime, count = layout.count, "generating time ticks");
    layout.generate()
}

/// Projects the ticks for the calc's x range onto pixels.
///
/// `offset` shifts the labelled time range relative to the plotted x values.
/// Positions are snapped to pixel centres; when several ticks land on the
/// same pixel the most prominent one is kept at the first one's slot.
#[must_use]
pub fn time_axis_ticks(calc: &PixelCalc, offset: f64) -> Vec<AxisTick> {
    let dims = calc.dimensions();
    let raw = time_series_ticks(offset + dims.min_x, offset + dims.max_x);

    let mut by_pixel: IndexMap<OrderedFloat<f64>, AxisTick> = IndexMap::with_capacity(raw.len());
    for tick in raw {
        let position = snap_to_pixel_center(calc.pix_x(tick.time as f64 - offset));
        let candidate = AxisTick {
            position,
            major: tick.major,
            label: tick.label,
        };
        match by_pixel.get_mut(&OrderedFloat(position)) {
            Some(existing) if existing.major >= candidate.major => {}
            Some(existing) => *existing = candidate,
            None => {
                by_pixel.insert(OrderedFloat(position), candidate);
            }
        }
    }

    by_pixel.into_values().collect()
}

fn regime_layout(regime: TimeRegime, begin: f64, end: f64) -> Option<RegimeLayout> {
    let begin_time = from_unix_f64(begin)?;
    let begin_seconds = begin_time.timestamp();

    let layout = match regime {
        TimeRegime::SecondsFine => RegimeLayout::fixed(
            from_unix(floor_to(begin_seconds, MINUTE))?,
            30,
            begin,
            end,
            |time| major_if(time.second() == 0),
            clock_label,
        ),
        TimeRegime::SecondsCoarse => RegimeLayout::fixed(
            from_unix(floor_to(begin_seconds, MINUTE))?,
            MINUTE,
            begin,
            end,
            |time| major_if(time.minute() % 10 == 0),
            clock_label,
        ),
        TimeRegime::MinuteHour => RegimeLayout::fixed(
            from_unix(floor_to(begin_seconds, HOUR))?,
            30 * MINUTE,
            begin,
            end,
            |time| {
                let on_hour = time.minute() == 0;
                match (on_hour, on_hour && time.hour() == 0) {
                    (_, true) => TickMajor::Boundary,
                    (true, false) => TickMajor::Major,
                    _ => TickMajor::Minor,
                }
            },
            |time| {
                if time.hour() == 0 && time.minute() == 0 {
                    weekday_label(time)
                } else {
                    clock_label(time)
                }
            },
        ),
        TimeRegime::HourDay => {
            let hour_start = floor_to(begin_seconds, HOUR);
            let hour_offset = i64::from(begin_time.hour() % 3);
            RegimeLayout::fixed(
                from_unix(hour_start - hour_offset * HOUR)?,
                3 * HOUR,
                begin,
                end,
                |time| major_if(time.hour() == 0),
                weekday_label,
            )
        }
        TimeRegime::DayWeek => RegimeLayout::fixed(
            from_unix(floor_to(begin_seconds, DAY))?,
            DAY,
            begin,
            end,
            |time| major_if(time.weekday() == Weekday::Sun),
            |time| Some(time.format("%-d %b").to_string()),
        ),
        TimeRegime::WeekMonth => {
            let day_start = floor_to(begin_seconds, DAY);
            let days_from_monday = i64::from(begin_time.weekday().num_days_from_monday());
            let mut layout = RegimeLayout::fixed(
                from_unix(day_start - days_from_monday * DAY)?,
                WEEK,
                begin,
                end,
                |_| TickMajor::Minor,
                |_| None,
            );
            layout.extra = Some(month_boundary_tick);
            layout
        }
        TimeRegime::MonthYear => {
            let end_time = from_unix_f64(end)?;
            let start = start_of_month(begin_time)?;
            RegimeLayout {
                start,
                step: TickStep::Months(1),
                count: usize::try_from(whole_months_between(begin_time, end_time) + 1).ok()?,
                major: |time| {
                    let half_year = time.month0() % 6 == 0;
                    let new_year = time.month0() == 0;
                    match (half_year, new_year) {
                        (true, true) => TickMajor::Boundary,
                        (false, false) => TickMajor::Minor,
                        _ => TickMajor::Major,
                    }
                },
                label: |time| {
                    Some(if time.month0() == 6 {
                        "H2".to_owned()
                    } else {
                        time.format("%Y").to_string()
                    })
                },
                extra: None,
            }
        }
        TimeRegime::Lifetime => {
            let end_time = from_unix_f64(end)?;
            let start = start_of_year(begin_time)?;
            RegimeLayout {
                start,
                step: TickStep::Months(12),
                count: usize::try_from(whole_months_between(begin_time, end_time) / 12 + 1)
                    .ok()?,
                major: |time| {
                    if time.year() % 10 == 0 {
                        TickMajor::Boundary
                    } else if time.year() % 5 == 0 {
                        TickMajor::Major
                    } else {
                        TickMajor::Minor
                    }
                },
                label: |time| Some(time.format("%Y").to_string()),
                extra: None,
            }
        }
    };

    Some(layout)
}

/// Extra week-regime tick placed one second into the next month whenever the
/// following weekly tick crosses a month boundary.
fn month_boundary_tick(time: DateTime<Utc>) -> Option<TimeTick> {
    let next_week = from_unix(time.timestamp() + WEEK)?;
    if (next_week.year(), next_week.month()) == (time.year(), time.month()) {
        return None;
    }
    let next_month = start_of_month(time)?.checked_add_months(Months::new(1))?;
    let boundary = from_unix(next_month.timestamp() + 1)?;
    Some(TimeTick {
        time: boundary.timestamp(),
        major: TickMajor::Boundary,
        label: Some(boundary.format("%b").to_string()),
    })
}

fn major_if(condition: bool) -> TickMajor {
    if condition {
        TickMajor::Major
    } else {
        TickMajor::Minor
    }
}

fn clock_label(time: DateTime<Utc>) -> Option<String> {
    Some(time.format("%H:%M").to_string())
}

fn weekday_label(time: DateTime<Utc>) -> Option<String> {
    Some(time.format("%a").to_string())
}

fn floor_to(seconds: i64, unit: i64) -> i64 {
    seconds.div_euclid(unit) * unit
}

fn from_unix(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
}

fn from_unix_f64(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).floor() as i64)
}

fn start_of_month(time: DateTime<Utc>) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(time.year(), time.month(), 1)?
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
}

fn start_of_year(time: DateTime<Utc>) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(time.year(), 1, 1)?
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
}

/// Number of whole calendar months from `earlier` to `later`.
fn whole_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let calendar = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month0())
        - i64::from(earlier.month0());
    if calendar <= 0 {
        return calendar.max(0);
    }
    let reached = u32::try_from(calendar)
        .ok()
        .and_then(|months| earlier.checked_add_months(Months::new(months)));
    match reached {
        Some(reached) if reached > later => calendar - 1,
        _ => calendar,
    }
}
