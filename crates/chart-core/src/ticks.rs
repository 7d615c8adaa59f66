// File: crates/chart-core/src/ticks.rs
// Summary: Round-number tick steps, domain "nicing", and calendar tick intervals.

use chrono::{Datelike, Days, NaiveDate, Weekday};

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

#[inline]
fn step_factor(error: f64) -> f64 {
    if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 }
}

/// Round step for roughly `count` intervals over [start, stop].
///
/// Positive results are the step itself; negative results `-k` encode a step of `1/k`
/// so that sub-unit steps stay exact. Zero means no usable step.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let factor = step_factor(step / 10f64.powf(power));
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Decoded step size, always positive (or zero).
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    if inc < 0.0 { -1.0 / inc } else { inc }
}

/// Extend [start, stop] outward to multiples of the tick step. Never shrinks.
pub fn nice_domain(start: f64, stop: f64, count: usize) -> (f64, f64) {
    let reversed = stop < start;
    let (mut lo, mut hi) = if reversed { (stop, start) } else { (start, stop) };
    let mut previous = None;
    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if previous == Some(step) {
            break;
        }
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        previous = Some(step);
    }
    if reversed { (hi, lo) } else { (lo, hi) }
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count;
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let factor = step_factor(step / 10f64.powf(power));
    let mut i1;
    let mut i2;
    let inc;
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round() as i64;
        i2 = (stop * k).round() as i64;
        if (i1 as f64) / k < start { i1 += 1; }
        if (i2 as f64) / k > stop { i2 -= 1; }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round() as i64;
        i2 = (stop / k).round() as i64;
        if (i1 as f64) * k < start { i1 += 1; }
        if (i2 as f64) * k > stop { i2 -= 1; }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

/// Round-number values inside [start, stop], about `count` of them, ascending
/// unless the domain is reversed.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reversed = stop < start;
    let (lo, hi) = if reversed { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };
    let mut out: Vec<f64> = (i1..=i2)
        .map(|i| if inc < 0.0 { i as f64 / -inc } else { i as f64 * inc })
        .collect();
    if reversed {
        out.reverse();
    }
    out
}

/// Format `v` with just enough decimals for `step`, grouping thousands.
pub fn format_tick(v: f64, step: f64) -> String {
    let precision = if step > 0.0 { (-step.abs().log10().floor()).max(0.0) as usize } else { 0 };
    let text = format!("{:.*}", precision, v);
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) if v != 0.0 => ("-", rest),
        Some(rest) => ("", rest),
        None => ("", text.as_str()),
    };
    let (int, frac) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body, None),
    };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Calendar boundaries used for time-axis ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    /// Every `n`th day of the month, counting from the 1st.
    Day(u32),
    /// Sundays.
    Week,
    /// First day of every `n`th month, counting from January.
    Month(u32),
    Year,
}

const TIME_INTERVALS: [TimeInterval; 6] = [
    TimeInterval::Day(1),
    TimeInterval::Day(2),
    TimeInterval::Week,
    TimeInterval::Month(1),
    TimeInterval::Month(3),
    TimeInterval::Year,
];

impl TimeInterval {
    pub fn approx_days(self) -> f64 {
        match self {
            TimeInterval::Day(n) => n as f64,
            TimeInterval::Week => 7.0,
            TimeInterval::Month(n) => 30.0 * n as f64,
            TimeInterval::Year => 365.0,
        }
    }

    pub fn is_boundary(self, d: NaiveDate) -> bool {
        match self {
            TimeInterval::Day(n) => (d.day() - 1) % n == 0,
            TimeInterval::Week => d.weekday() == Weekday::Sun,
            TimeInterval::Month(n) => d.day() == 1 && d.month0() % n == 0,
            TimeInterval::Year => d.ordinal() == 1,
        }
    }

    /// Interval whose length is closest (by ratio) to `span_days / count`.
    pub fn choose(span_days: f64, count: usize) -> Self {
        let target = span_days / count.max(1) as f64;
        match TIME_INTERVALS.iter().position(|t| t.approx_days() > target) {
            None => TimeInterval::Year,
            Some(0) => TIME_INTERVALS[0],
            Some(i) => {
                let (lo, hi) = (TIME_INTERVALS[i - 1], TIME_INTERVALS[i]);
                if target / lo.approx_days() < hi.approx_days() / target { lo } else { hi }
            }
        }
    }
}

/// Interval boundaries in [start, stop] (inclusive), about `count` of them.
pub fn time_ticks(start: NaiveDate, stop: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let span = (hi - lo).num_days() as f64;
    let interval = TimeInterval::choose(span, count);
    let mut out = Vec::new();
    let mut d = lo;
    while d <= hi {
        if interval.is_boundary(d) {
            out.push(d);
        }
        match d.checked_add_days(Days::new(1)) {
            Some(next) => d = next,
            None => break,
        }
    }
    if stop < start {
        out.reverse();
    }
    out
}
