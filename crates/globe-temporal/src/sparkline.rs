//! Downsampled trend lines for the global series.

/// Sample caps for the two trend lines.
pub const SEA_LEVEL_SPARK_POINTS: usize = 60;
pub const GLOBAL_TEMPERATURE_SPARK_POINTS: usize = 70;

/// Drawing box in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparklineFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for SparklineFrame {
    fn default() -> Self {
        Self {
            width: 260.0,
            height: 44.0,
            padding: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    pub frame: SparklineFrame,
    /// Sampled points in drawing coordinates, left to right.
    pub points: Vec<(f64, f64)>,
    /// SVG path data, `M x y L x y ...`.
    pub path: String,
    /// Sampled point nearest the current selection.
    pub highlight: Option<(f64, f64)>,
}

/// Indexes kept when thinning `len` samples to roughly `cap`.
///
/// Every `ceil(len / cap)`-th sample is kept, and the last sample is always
/// appended, so the result never exceeds `cap + 1` entries and always starts
/// and ends on the real first and last samples.
pub fn sample_indices(len: usize, cap: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let step = len.div_ceil(cap.max(1)).max(1);
    let mut indices: Vec<usize> = (0..len).step_by(step).collect();
    if indices.last() != Some(&(len - 1)) {
        indices.push(len - 1);
    }
    indices
}

impl Sparkline {
    /// Build from `(position, value)` samples ordered by position.
    ///
    /// `position` is the time key used to place the highlight; `selected`
    /// is the position of the current reading. Returns `None` for an empty
    /// series.
    pub fn build(
        series: &[(i32, f64)],
        cap: usize,
        selected: Option<i32>,
        frame: SparklineFrame,
    ) -> Option<Self> {
        let sampled: Vec<(i32, f64)> = sample_indices(series.len(), cap)
            .into_iter()
            .filter_map(|idx| series.get(idx).copied())
            .collect();
        if sampled.is_empty() {
            return None;
        }

        let mut min = sampled.iter().map(|s| s.1).fold(f64::INFINITY, f64::min);
        let mut max = sampled.iter().map(|s| s.1).fold(f64::NEG_INFINITY, f64::max);
        if min == max {
            min -= 1.0;
            max += 1.0;
        }

        let SparklineFrame {
            width,
            height,
            padding,
        } = frame;
        let last = (sampled.len() - 1) as f64;
        let x_for = |i: usize| {
            if last <= 0.0 {
                padding
            } else {
                padding + (i as f64 / last) * (width - padding * 2.0)
            }
        };
        let y_for = |v: f64| padding + (1.0 - (v - min) / (max - min)) * (height - padding * 2.0);

        let points: Vec<(f64, f64)> = sampled
            .iter()
            .enumerate()
            .map(|(i, &(_, v))| (x_for(i), y_for(v)))
            .collect();
        let path = points
            .iter()
            .enumerate()
            .map(|(i, (x, y))| {
                let verb = if i == 0 { "M" } else { "L" };
                format!("{verb} {x} {y}")
            })
            .collect::<Vec<_>>()
            .join(" ");

        let highlight = selected.and_then(|target| {
            let mut best: Option<(usize, i64)> = None;
            for (i, &(pos, _)) in sampled.iter().enumerate() {
                let dist = (i64::from(pos) - i64::from(target)).abs();
                if best.is_none_or(|(_, d)| dist < d) {
                    best = Some((i, dist));
                }
            }
            best.and_then(|(i, _)| points.get(i).copied())
        });

        Some(Self {
            frame,
            points,
            path,
            highlight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampling_keeps_first_and_last() {
        assert_eq!(sample_indices(0, 60), Vec::<usize>::new());
        assert_eq!(sample_indices(3, 60), vec![0, 1, 2]);
        let idx = sample_indices(1000, 60);
        assert_eq!(idx.first(), Some(&0));
        assert_eq!(idx.last(), Some(&999));
        assert!(idx.len() <= 61);
    }

    #[test]
    fn path_spans_the_frame() {
        let series = [(1993, 0.0), (1994, 5.0), (1995, 10.0)];
        let spark = Sparkline::build(&series, 60, Some(1994), SparklineFrame::default()).unwrap();
        assert_eq!(spark.path, "M 2 42 L 130 22 L 258 2");
        assert_eq!(spark.highlight, Some((130.0, 22.0)));
    }

    #[test]
    fn flat_series_is_centered() {
        let series = [(1, 3.0), (2, 3.0)];
        let spark = Sparkline::build(&series, 60, None, SparklineFrame::default()).unwrap();
        assert_eq!(spark.points, vec![(2.0, 22.0), (258.0, 22.0)]);
        assert_eq!(spark.highlight, None);
    }

    #[test]
    fn single_point_sits_at_the_left_padding() {
        let spark = Sparkline::build(&[(7, 1.0)], 60, Some(100), SparklineFrame::default()).unwrap();
        assert_eq!(spark.path, "M 2 22");
        assert_eq!(spark.highlight, Some((2.0, 22.0)));
    }
}
