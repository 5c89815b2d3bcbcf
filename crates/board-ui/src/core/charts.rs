//! SVG chart geometry.
//!
//! # Design
//! - Pure functions from data and a plot area to coordinates and path strings.
//! - Series visibility is passed in explicitly so legends stay presentation state.
//! - Non-finite or negative values are treated as zero.

use std::collections::BTreeSet;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write as _;

/// Default series palette.
pub const PALETTE: [&str; 5] = ["#3b82f6", "#ef4444", "#eab308", "#22c55e", "#a855f7"];

/// `viewBox` width shared by the cartesian charts.
pub const VIEW_WIDTH: f64 = 480.0;
/// `viewBox` height shared by the cartesian charts.
pub const VIEW_HEIGHT: f64 = 260.0;

/// Palette colour for the `index`-th series, cycling.
#[must_use]
pub const fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Drawing region inside the SVG viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            left: 44.0,
            top: 16.0,
            width: VIEW_WIDTH - 44.0 - 44.0,
            height: VIEW_HEIGHT - 16.0 - 36.0,
        }
    }
}

impl PlotArea {
    /// Bottom edge (the zero line).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Vertical position of `value` on a `0..=max` axis.
    #[must_use]
    pub fn y(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.bottom();
        }
        let ratio = (clean(value) / max).min(1.0);
        self.height.mul_add(-ratio, self.bottom())
    }

    /// Horizontal position of point `index` out of `count`, spread edge to edge.
    #[must_use]
    pub fn point_x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        let step = self.width / to_f64(count - 1);
        step.mul_add(to_f64(index), self.left)
    }

    /// Start and width of band `index` out of `count`.
    #[must_use]
    pub fn band(&self, index: usize, count: usize) -> (f64, f64) {
        if count == 0 {
            return (self.left, 0.0);
        }
        let slot = self.width / to_f64(count);
        let inner = slot * 0.7;
        let start = slot.mul_add(to_f64(index), self.left) + (slot - inner) / 2.0;
        (start, inner)
    }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// One segment of a stacked bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackSegment {
    /// Row (category) index.
    pub row: usize,
    /// Series index.
    pub series: usize,
    /// Segment geometry.
    pub rect: Rect,
}

/// One donut slice.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSlice {
    /// Index of the value the slice represents.
    pub index: usize,
    /// Share of the total in `0..=1`.
    pub fraction: f64,
    /// SVG path data.
    pub path: String,
}

/// Round `value` up to 1, 2 or 5 times a power of ten.
#[must_use]
pub fn nice_ceiling(value: f64) -> f64 {
    let value = clean(value);
    if value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let normalized = value / magnitude;
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .find(|step| normalized <= *step)
        .unwrap_or(10.0);
    step * magnitude
}

/// Evenly spaced tick values from zero to `max` inclusive.
#[must_use]
pub fn ticks(max: f64, intervals: usize) -> Vec<f64> {
    let intervals = intervals.max(1);
    (0..=intervals)
        .map(|index| max * to_f64(index) / to_f64(intervals))
        .collect()
}

/// Bars for a single series on a shared `0..=max` axis.
#[must_use]
pub fn bar_rects(values: &[f64], max: f64, area: &PlotArea) -> Vec<Rect> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let (x, width) = area.band(index, values.len());
            let y = area.y(*value, max);
            Rect {
                x,
                y,
                width,
                height: area.bottom() - y,
            }
        })
        .collect()
}

/// Largest row total across visible series.
#[must_use]
pub fn stacked_max(rows: &[Vec<f64>], visible: &[bool]) -> f64 {
    rows.iter()
        .map(|row| visible_values(row, visible).map(|(_, value)| value).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Stacked bar segments, bottom-up in series order, skipping hidden series.
#[must_use]
pub fn stacked_bar_segments(
    rows: &[Vec<f64>],
    visible: &[bool],
    max: f64,
    area: &PlotArea,
) -> Vec<StackSegment> {
    let mut segments = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        let (x, width) = area.band(row_index, rows.len());
        let mut running = 0.0;
        for (series, value) in visible_values(row, visible) {
            let lower = area.y(running, max);
            running += value;
            let upper = area.y(running, max);
            segments.push(StackSegment {
                row: row_index,
                series,
                rect: Rect {
                    x,
                    y: upper,
                    width,
                    height: lower - upper,
                },
            });
        }
    }
    segments
}

/// Closed area paths per series for a stacked area chart; hidden series yield `None`.
#[must_use]
pub fn stacked_area_paths(
    rows: &[Vec<f64>],
    visible: &[bool],
    max: f64,
    area: &PlotArea,
) -> Vec<Option<String>> {
    let series_count = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut baseline = vec![0.0; rows.len()];
    (0..series_count)
        .map(|series| {
            if !is_visible(visible, series) {
                return None;
            }
            let lower: Vec<(f64, f64)> = baseline
                .iter()
                .enumerate()
                .map(|(index, base)| (area.point_x(index, rows.len()), area.y(*base, max)))
                .collect();
            for (index, row) in rows.iter().enumerate() {
                baseline[index] += clean(row.get(series).copied().unwrap_or(0.0));
            }
            let upper: Vec<(f64, f64)> = baseline
                .iter()
                .enumerate()
                .map(|(index, top)| (area.point_x(index, rows.len()), area.y(*top, max)))
                .collect();
            let mut path = line_path(&upper);
            for (x, y) in lower.iter().rev() {
                let _ = write!(path, " L{x:.2},{y:.2}");
            }
            path.push_str(" Z");
            Some(path)
        })
        .collect()
}

/// Points of a line series; missing values leave a gap.
#[must_use]
pub fn line_points(values: &[Option<f64>], max: f64, area: &PlotArea) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| {
            value.map(|value| (area.point_x(index, values.len()), area.y(value, max)))
        })
        .collect()
}

/// Open `M … L …` path through `points`.
#[must_use]
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (index, (x, y)) in points.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        if index > 0 {
            path.push(' ');
        }
        let _ = write!(path, "{command}{x:.2},{y:.2}");
    }
    path
}

/// Donut slices clockwise from twelve o'clock; non-positive values are skipped.
#[must_use]
pub fn donut_slices(values: &[f64], center: (f64, f64), inner: f64, outer: f64) -> Vec<ArcSlice> {
    let total: f64 = values.iter().map(|value| clean(*value)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    values
        .iter()
        .enumerate()
        .filter(|(_, value)| clean(**value) > 0.0)
        .map(|(index, value)| {
            let fraction = clean(*value) / total;
            let sweep = (fraction * TAU).min(TAU - 1e-4);
            let path = arc_path(center, inner, outer, start, start + sweep);
            start += fraction * TAU;
            ArcSlice {
                index,
                fraction,
                path,
            }
        })
        .collect()
}

fn arc_path(center: (f64, f64), inner: f64, outer: f64, from: f64, to: f64) -> String {
    let (cx, cy) = center;
    let large = u8::from(to - from > PI);
    let point = |radius: f64, angle: f64| {
        (
            radius.mul_add(angle.cos(), cx),
            radius.mul_add(angle.sin(), cy),
        )
    };
    let (ox0, oy0) = point(outer, from);
    let (ox1, oy1) = point(outer, to);
    let (ix1, iy1) = point(inner, to);
    let (ix0, iy0) = point(inner, from);
    format!(
        "M{ox0:.2},{oy0:.2} A{outer:.2},{outer:.2} 0 {large} 1 {ox1:.2},{oy1:.2} \
         L{ix1:.2},{iy1:.2} A{inner:.2},{inner:.2} 0 {large} 0 {ix0:.2},{iy0:.2} Z"
    )
}

/// Legend visibility keyed by series key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegendState {
    hidden: BTreeSet<String>,
}

impl LegendState {
    /// Flip one series between shown and hidden.
    pub fn toggle(&mut self, key: &str) {
        if !self.hidden.remove(key) {
            self.hidden.insert(key.to_string());
        }
    }

    /// Whether the series is shown.
    #[must_use]
    pub fn is_visible(&self, key: &str) -> bool {
        !self.hidden.contains(key)
    }

    /// Visibility mask in `keys` order.
    #[must_use]
    pub fn mask(&self, keys: &[&str]) -> Vec<bool> {
        keys.iter().map(|key| self.is_visible(key)).collect()
    }
}

fn visible_values<'a>(
    row: &'a [f64],
    visible: &'a [bool],
) -> impl Iterator<Item = (usize, f64)> + 'a {
    row.iter()
        .enumerate()
        .filter(move |(series, _)| is_visible(visible, *series))
        .map(|(series, value)| (series, clean(*value)))
}

fn is_visible(visible: &[bool], series: usize) -> bool {
    visible.get(series).copied().unwrap_or(true)
}

fn clean(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn to_f64(value: usize) -> f64 {
    f64::from(u32::try_from(value).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn nice_ceiling_rounds_up() {
        assert!(close(nice_ceiling(87.0), 100.0));
        assert!(close(nice_ceiling(3.2), 5.0));
        assert!(close(nice_ceiling(20.0), 20.0));
        assert!(close(nice_ceiling(0.0), 1.0));
        assert!(close(nice_ceiling(f64::NAN), 1.0));
    }

    #[test]
    fn ticks_span_zero_to_max() {
        let values = ticks(100.0, 4);
        assert_eq!(values.len(), 5);
        assert!(close(values[0], 0.0));
        assert!(close(values[4], 100.0));
    }

    #[test]
    fn bars_scale_with_values() {
        let area = PlotArea::default();
        let rects = bar_rects(&[50.0, 100.0], 100.0, &area);
        assert!(close(rects[1].height, area.height));
        assert!(close(rects[0].height, area.height / 2.0));
        assert!(rects[0].x < rects[1].x);
    }

    #[test]
    fn stacked_segments_sit_on_each_other() {
        let area = PlotArea::default();
        let rows = vec![vec![20.0, 30.0, 50.0]];
        let segments = stacked_bar_segments(&rows, &[true, true, true], 100.0, &area);
        assert_eq!(segments.len(), 3);
        assert!(close(segments[0].rect.y + segments[0].rect.height, area.bottom()));
        assert!(close(segments[1].rect.y + segments[1].rect.height, segments[0].rect.y));
        assert!(close(segments[2].rect.y, area.top));

        let hidden = stacked_bar_segments(&rows, &[true, false, true], 100.0, &area);
        assert_eq!(hidden.len(), 2);
        assert_eq!(hidden[1].series, 2);
        assert!(close(stacked_max(&rows, &[true, false, true]), 70.0));
    }

    #[test]
    fn area_paths_skip_hidden_series() {
        let area = PlotArea::default();
        let rows = vec![vec![10.0, 5.0], vec![20.0, 5.0]];
        let paths = stacked_area_paths(&rows, &[false, true], 30.0, &area);
        assert!(paths[0].is_none());
        let path = paths[1].as_deref().expect("visible");
        assert!(path.starts_with('M'));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn line_points_leave_gaps() {
        let area = PlotArea::default();
        let points = line_points(&[Some(1.0), None, Some(2.0)], 2.0, &area);
        assert_eq!(points.len(), 2);
        assert!(close(points[0].0, area.left));
        assert!(close(points[1].0, area.right()));
        assert!(close(points[1].1, area.top));
        assert_eq!(line_path(&[(1.0, 2.0), (3.0, 4.0)]), "M1.00,2.00 L3.00,4.00");
    }

    #[test]
    fn donut_fractions_cover_total() {
        let slices = donut_slices(&[1.0, 0.0, 3.0], (50.0, 50.0), 20.0, 40.0);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[1].index, 2);
        let total: f64 = slices.iter().map(|slice| slice.fraction).sum();
        assert!(close(total, 1.0));
        assert!(slices[1].path.contains(" 0 1 1 "), "large arc for 75%");

        let full = donut_slices(&[5.0], (0.0, 0.0), 1.0, 2.0);
        assert!(close(full[0].fraction, 1.0));
        assert!(donut_slices(&[0.0], (0.0, 0.0), 1.0, 2.0).is_empty());
    }

    #[test]
    fn legend_toggles_visibility() {
        let mut legend = LegendState::default();
        legend.toggle("running");
        assert_eq!(legend.mask(&["running", "cycling"]), vec![false, true]);
        legend.toggle("running");
        assert!(legend.is_visible("running"));
    }
}
