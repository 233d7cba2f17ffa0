use egui::{pos2, Pos2, Rect};

use crate::ChartData;

/// Maps sample indices and values to screen positions inside the chart frame.
///
/// The i:th sample lands `i * step_width` from the left edge; values are
/// scaled by `step_height` up from the bottom edge. Degenerate input (fewer
/// than two samples, or an empty/zero value range) collapses the respective
/// step to zero instead of failing, which flattens the chart onto its
/// baseline.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScreenTransform {
    /// The allocated screen rectangle.
    frame: Rect,
    /// Horizontal distance between two consecutive samples.
    step_width: f32,
    /// Screen points per data unit. Zero when the value range is degenerate.
    step_height: f64,
    /// The data value that maps onto the baseline.
    offset: f64,
}

impl ScreenTransform {
    /// `fixed_min`/`fixed_max` override the data's own range, but only when
    /// both are given. `padding` is vertical headroom kept above the tallest
    /// sample.
    pub fn new(
        frame: Rect,
        data: &ChartData,
        fixed_min: Option<f64>,
        fixed_max: Option<f64>,
        padding: f32,
    ) -> Self {
        let step_width = if data.len() < 2 {
            0.0
        } else {
            frame.width() / (data.len() - 1) as f32
        };

        let bounds = match (fixed_min, fixed_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => data.min().zip(data.max()),
        };
        let (step_height, offset) = match bounds {
            Some((min, max)) if min != max => {
                (f64::from(frame.height() - padding) / (max - min), min)
            }
            _ => (0.0, 0.0),
        };

        Self {
            frame,
            step_width,
            step_height,
            offset,
        }
    }

    /// Screen y of the value mapped to the bottom of the frame.
    pub fn baseline(&self) -> f32 {
        self.frame.bottom()
    }

    pub fn position(&self, index: usize, value: f64) -> Pos2 {
        let x = self.frame.left() + index as f32 * self.step_width;
        let y = f64::from(self.frame.bottom()) - (value - self.offset) * self.step_height; // negated y axis!
        pos2(x, y as f32)
    }

    /// All samples mapped to screen space, in sample order.
    pub fn scaled_points(&self, data: &ChartData) -> Vec<Pos2> {
        data.points()
            .iter()
            .enumerate()
            .map(|(i, &value)| self.position(i, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use egui::vec2;

    use super::*;

    fn frame() -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(320.0, 160.0))
    }

    const PADDING: f32 = 30.0;

    #[test]
    fn step_width_needs_two_samples() {
        let empty = ScreenTransform::new(frame(), &ChartData::default(), None, None, PADDING);
        assert_eq!(empty.step_width, 0.0);

        let single = ScreenTransform::new(frame(), &ChartData::from([5.0]), None, None, PADDING);
        assert_eq!(single.step_width, 0.0);

        let pair = ScreenTransform::new(frame(), &ChartData::from([1.0, 2.0]), None, None, PADDING);
        assert_eq!(pair.step_width, 320.0);
    }

    #[test]
    fn equal_samples_collapse_onto_baseline() {
        let data = ChartData::from([3.0, 3.0, 3.0]);
        let tf = ScreenTransform::new(frame(), &data, None, None, PADDING);
        assert_eq!(tf.step_height, 0.0);
        for point in tf.scaled_points(&data) {
            assert_eq!(point.y, tf.baseline());
        }
    }

    #[test]
    fn preview_series_spans_the_frame() {
        let data = ChartData::from([12.0, -230.0, 10.0, 54.0]);
        let tf = ScreenTransform::new(frame(), &data, None, None, PADDING);

        assert!((tf.step_width - 320.0 / 3.0).abs() < 1e-4);
        assert!((tf.step_height - 130.0 / 284.0).abs() < 1e-9);

        let points = tf.scaled_points(&data);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[3].x, 320.0);
        for pair in points.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }

        // The minimum sits on the baseline, the maximum `padding` below the top.
        assert!((points[1].y - 160.0).abs() < 1e-4);
        assert!((points[3].y - 30.0).abs() < 1e-4);
    }

    #[test]
    fn fixed_bounds_override_the_data_range() {
        let data = ChartData::from([0.0, 10.0]);

        let tf = ScreenTransform::new(frame(), &data, Some(0.0), Some(20.0), PADDING);
        assert!((tf.step_height - 130.0 / 20.0).abs() < 1e-9);

        // An equal fixed pair degrades to zero scale; it does not fall back
        // to the data's own range.
        let tf = ScreenTransform::new(frame(), &data, Some(5.0), Some(5.0), PADDING);
        assert_eq!(tf.step_height, 0.0);

        // A half-given override is ignored.
        let tf = ScreenTransform::new(frame(), &data, Some(0.0), None, PADDING);
        assert!((tf.step_height - 130.0 / 10.0).abs() < 1e-9);
    }
}
