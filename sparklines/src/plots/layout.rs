use crate::error::{Result, SparklineError};
use crate::options::{SparklineKind, SparklineOptions};
use num_traits::ToPrimitive;
use plotters::style::RGBColor;
use std::ops::Range;

/// Half-width of the padding added around a flat series
const FLAT_PADDING: f64 = 0.5;

/// Fraction of a slot covered by a bar
const BAR_WIDTH: f64 = 0.8;

/// A highlighted point in data coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub point: (f64, f64),
    pub color: RGBColor,
}

/// Everything the backend needs to draw one sparkline, in data coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct SparklineLayout {
    pub kind: SparklineKind,
    /// `(index, value)` with values clipped into `y_range`
    pub points: Vec<(f64, f64)>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub baseline: f64,
    pub markers: Vec<Marker>,
}

/// Convert a sample sequence to `f64`, rejecting empty and non-finite input
pub fn collect_samples<I, T>(data: I) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = T>,
    T: ToPrimitive,
{
    let mut samples = Vec::new();
    for (index, value) in data.into_iter().enumerate() {
        let value = value.to_f64().ok_or_else(|| {
            SparklineError::invalid_input(format!(
                "sample {index} is not representable as a float"
            ))
        })?;
        if !value.is_finite() {
            return Err(SparklineError::invalid_input(format!(
                "sample {index} is not finite ({value})"
            )));
        }
        samples.push(value);
    }

    if samples.is_empty() {
        return Err(SparklineError::invalid_input(
            "cannot draw a sparkline from an empty series",
        ));
    }

    Ok(samples)
}

/// Index of the first extreme value according to `better`
fn first_extreme(samples: &[f64], better: impl Fn(f64, f64) -> bool) -> usize {
    let mut best = 0;
    for (i, &value) in samples.iter().enumerate().skip(1) {
        if better(value, samples[best]) {
            best = i;
        }
    }
    best
}

impl SparklineLayout {
    /// Compute the layout for validated samples and options
    pub fn compute(samples: &[f64], options: &SparklineOptions) -> Result<Self> {
        let Some(&last) = samples.last() else {
            return Err(SparklineError::invalid_input(
                "cannot draw a sparkline from an empty series",
            ));
        };
        let n = samples.len();

        let data_min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let data_max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let y_range = match &options.y_range {
            Some(range) => *range.start()..*range.end(),
            None => {
                let (lo, hi) = match options.kind {
                    SparklineKind::Line => (data_min, data_max),
                    SparklineKind::Bar => {
                        let origin = options.baseline.unwrap_or(0.0);
                        (data_min.min(origin), data_max.max(origin))
                    }
                };
                if lo == hi {
                    (lo - FLAT_PADDING)..(hi + FLAT_PADDING)
                } else {
                    lo..hi
                }
            }
        };

        let baseline = options
            .baseline
            .unwrap_or(match options.kind {
                SparklineKind::Line => y_range.start,
                SparklineKind::Bar => 0.0,
            })
            .clamp(y_range.start, y_range.end);

        let x_range = match options.kind {
            SparklineKind::Bar => -0.5..(n as f64 - 0.5),
            SparklineKind::Line if n == 1 => -0.5..0.5,
            SparklineKind::Line => 0.0..(n - 1) as f64,
        };

        let clip = |value: f64| value.clamp(y_range.start, y_range.end);
        let points: Vec<(f64, f64)> = samples
            .iter()
            .enumerate()
            .map(|(i, &value)| (i as f64, clip(value)))
            .collect();

        let highlights = options.highlights;
        let mut markers = Vec::new();
        if highlights.first {
            markers.push(Marker {
                point: (0.0, clip(samples[0])),
                color: options.marker_color,
            });
        }
        if highlights.last {
            markers.push(Marker {
                point: ((n - 1) as f64, clip(last)),
                color: options.marker_color,
            });
        }
        if highlights.min {
            let i = first_extreme(samples, |a, b| a < b);
            markers.push(Marker {
                point: (i as f64, clip(samples[i])),
                color: options.min_marker_color(),
            });
        }
        if highlights.max {
            let i = first_extreme(samples, |a, b| a > b);
            markers.push(Marker {
                point: (i as f64, clip(samples[i])),
                color: options.max_marker_color(),
            });
        }

        Ok(Self {
            kind: options.kind,
            points,
            x_range,
            y_range,
            baseline,
            markers,
        })
    }

    /// Bar rectangles as `[(left, baseline), (right, value)]` corners
    pub fn bars(&self) -> impl Iterator<Item = [(f64, f64); 2]> + '_ {
        let half = BAR_WIDTH / 2.0;
        self.points
            .iter()
            .map(move |&(x, y)| [(x - half, self.baseline), (x + half, y)])
    }
}
