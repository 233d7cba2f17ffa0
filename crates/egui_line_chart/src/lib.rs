//! An animated line chart widget for [`egui`], in the style of mobile
//! dashboard charts: smoothed line, gradient stroke, soft area fill,
//! entrance animation and a hover indicator knob.
//!
//! ```
//! # egui::__run_test_ui(|ui| {
//! use egui_line_chart::{ChartData, GradientColor, LineChart};
//!
//! let data = ChartData::from([12.0, -230.0, 10.0, 54.0]);
//! ui.add(LineChart::new(&data).gradient(GradientColor::ORANGE));
//! # });
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!
#![forbid(unsafe_code)]

mod data;
mod gradient;
mod path;
mod reveal;
mod transform;

pub use crate::data::ChartData;
pub use crate::gradient::{palette, GradientColor};

use egui::epaint::{Mesh, PathStroke};
use egui::{
    lerp, pos2, vec2, Color32, NumExt as _, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Widget,
    WidgetInfo, WidgetType,
};

use crate::reveal::Reveal;
use crate::transform::ScreenTransform;

/// Radius of the indicator knob.
const KNOB_RADIUS: f32 = 7.0;

/// Width of the white ring around the indicator knob.
const KNOB_RING_WIDTH: f32 = 4.0;

/// An animated line chart.
///
/// Renders [`ChartData`] as a smoothed (or straight) line with a horizontal
/// gradient stroke, an optional vertical-gradient area fill, and a knob
/// marking the chart point nearest the pointer. On first appearance the line
/// sweeps in from the left while the fill fades in; [`Self::visible`] plays
/// the same animation backwards.
///
/// ```
/// # egui::__run_test_ui(|ui| {
/// # use egui_line_chart::{ChartData, LineChart};
/// let data = ChartData::from([4.0, 8.0, 3.0, 9.0]);
/// ui.add(LineChart::new(&data).curved(false).show_background(false));
/// # });
/// ```
#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub struct LineChart<'a> {
    data: &'a ChartData,
    gradient: GradientColor,
    background_gradient: GradientColor,
    curved: bool,
    show_background: bool,
    show_indicator: bool,
    visible: bool,
    animate: bool,
    index: usize,
    min_value: Option<f64>,
    max_value: Option<f64>,
    touch: Option<Pos2>,
    desired_width: Option<f32>,
    desired_height: Option<f32>,
    stroke_width: f32,
    padding: f32,
}

impl<'a> LineChart<'a> {
    pub fn new(data: &'a ChartData) -> Self {
        Self {
            data,
            gradient: GradientColor::default(),
            background_gradient: GradientColor::new(palette::GRADIENT_UPPER_BLUE, Color32::WHITE),
            curved: true,
            show_background: true,
            show_indicator: true,
            visible: true,
            animate: true,
            index: 0,
            min_value: None,
            max_value: None,
            touch: None,
            desired_width: None,
            desired_height: None,
            stroke_width: 3.0,
            padding: 30.0,
        }
    }

    /// The gradient the line is stroked with, start at the left edge.
    #[inline]
    pub fn gradient(mut self, gradient: GradientColor) -> Self {
        self.gradient = gradient;
        self
    }

    /// The gradient of the area fill, start at the baseline.
    #[inline]
    pub fn background_gradient(mut self, gradient: GradientColor) -> Self {
        self.background_gradient = gradient;
        self
    }

    /// Smooth the line with quadratic Bézier segments. Defaults to `true`.
    #[inline]
    pub fn curved(mut self, curved: bool) -> Self {
        self.curved = curved;
        self
    }

    /// Whether to fill the area between line and baseline. Defaults to `true`.
    #[inline]
    pub fn show_background(mut self, show_background: bool) -> Self {
        self.show_background = show_background;
        self
    }

    /// Whether to mark the chart point nearest the pointer. Defaults to `true`.
    #[inline]
    pub fn show_indicator(mut self, show_indicator: bool) -> Self {
        self.show_indicator = show_indicator;
        self
    }

    /// Setting this to `false` animates the chart out (and back in when set
    /// to `true` again). The chart keeps its allocated space while hidden.
    #[inline]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Whether to play the entrance/exit animation.
    /// Note that this will cause the UI to be redrawn while it runs.
    /// Defaults to `true`.
    #[inline]
    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Stacking slot of this chart; each slot delays the line sweep a bit
    /// more, so stacked charts reveal one after the other.
    #[inline]
    pub fn index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Fixed lower bound of the value range.
    ///
    /// Overrides the data's own range, but only when [`Self::max_value`] is
    /// also set.
    #[inline]
    pub fn min_value(mut self, min_value: f64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    /// Fixed upper bound of the value range, see [`Self::min_value`].
    #[inline]
    pub fn max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    /// Use this position for the indicator instead of the hover position,
    /// e.g. for touch input forwarded by the host.
    #[inline]
    pub fn touch(mut self, touch: Pos2) -> Self {
        self.touch = Some(touch);
        self
    }

    /// The desired width of the chart. Will use all horizontal space if not set.
    #[inline]
    pub fn desired_width(mut self, desired_width: f32) -> Self {
        self.desired_width = Some(desired_width);
        self
    }

    /// The desired height of the chart. Defaults to 160.
    #[inline]
    pub fn desired_height(mut self, desired_height: f32) -> Self {
        self.desired_height = Some(desired_height);
        self
    }

    /// Width of the line stroke. Defaults to 3.
    #[inline]
    pub fn stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Vertical headroom kept above the tallest sample. Defaults to 30.
    #[inline]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }
}

impl Widget for LineChart<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            data,
            gradient,
            background_gradient,
            curved,
            show_background,
            show_indicator,
            visible,
            animate,
            index,
            min_value,
            max_value,
            touch,
            desired_width,
            desired_height,
            stroke_width,
            padding,
        } = self;

        let desired_width =
            desired_width.unwrap_or_else(|| ui.available_size_before_wrap().x.at_least(96.0));
        let desired_height = desired_height.unwrap_or(160.0);
        let (rect, response) =
            ui.allocate_exact_size(vec2(desired_width, desired_height), Sense::hover());

        response.widget_info(|| {
            WidgetInfo::labeled(WidgetType::Other, ui.is_enabled(), "line chart")
        });

        if !ui.is_rect_visible(rect) {
            return response;
        }

        let fill_visible = visible && show_background;
        let (stroke_t, fill_t) = if animate {
            let now = ui.input(|i| i.time);
            let delay = Reveal::delay_for_index(index);
            let mut reveal = Reveal::load(ui.ctx(), response.id)
                .unwrap_or_else(|| Reveal::new(visible, fill_visible, now));
            reveal.set_targets(visible, fill_visible, now, delay);
            if !reveal.is_settled(now, delay) {
                ui.ctx().request_repaint();
            }
            let stroke_t = reveal.stroke_t(now, delay);
            let fill_t = reveal.fill_t(now);
            reveal.store(ui.ctx(), response.id);
            (stroke_t, fill_t)
        } else {
            (
                if visible { 1.0 } else { 0.0 },
                if fill_visible { 1.0 } else { 0.0 },
            )
        };

        let transform = ScreenTransform::new(rect, data, min_value, max_value, padding);
        let open = path::open_points(&transform.scaled_points(data), curved);
        if open.len() < 2 {
            return response;
        }

        if show_background && fill_t > 0.0 {
            let closed = path::closed_points(&open, transform.baseline());
            ui.painter()
                .add(Shape::mesh(fill_mesh(&closed, &background_gradient, fill_t)));
        }

        // Resolve the indicator before the chain is consumed by the stroke.
        let knob = (show_indicator && visible)
            .then(|| touch.or_else(|| response.hover_pos()))
            .flatten()
            .and_then(|pointer| path::closest_point(&open, pointer.x));

        if stroke_t > 0.0 {
            // The clip rect sweeps across the chart to reveal the line; the
            // margin keeps stroke ends visible once fully revealed.
            let margin = stroke_width;
            let sweep_right = lerp((rect.left() - margin)..=(rect.right() + margin), stroke_t);
            let sweep = Rect::from_min_max(
                pos2(rect.left() - margin, rect.top() - margin),
                pos2(sweep_right, rect.bottom() + margin),
            );
            let stroke = PathStroke::new_uv(stroke_width, move |bbox, pos| {
                let t = if bbox.width() > 0.0 {
                    (pos.x - bbox.left()) / bbox.width()
                } else {
                    0.0
                };
                gradient.color_at(t)
            });
            ui.painter()
                .with_clip_rect(sweep)
                .add(Shape::line(open, stroke));
        }

        if let Some(center) = knob {
            ui.painter()
                .circle_filled(center, KNOB_RADIUS, palette::INDICATOR_KNOB);
            ui.painter()
                .circle_stroke(center, KNOB_RADIUS, Stroke::new(KNOB_RING_WIDTH, Color32::WHITE));
        }

        response
    }
}

/// Triangle strip filling the area between chain and baseline with a
/// vertical gradient: `background` start at the baseline, end at the chain's
/// highest point, scaled by `opacity`.
///
/// `closed` is the output of `path::closed_points`: baseline start, the
/// chain itself, baseline end.
fn fill_mesh(closed: &[Pos2], background: &GradientColor, opacity: f32) -> Mesh {
    let mut mesh = Mesh::default();
    if closed.len() < 4 {
        return mesh;
    }
    let baseline = closed[0].y;
    let chain = &closed[1..closed.len() - 1];

    let top = chain.iter().fold(baseline, |top, point| top.min(point.y));
    let height = baseline - top;
    let color = |pos: Pos2| {
        let t = if height > 0.0 {
            (baseline - pos.y) / height
        } else {
            0.0
        };
        background.color_at(t).gamma_multiply(opacity)
    };

    mesh.reserve_triangles((chain.len() - 1) * 2);
    mesh.reserve_vertices(chain.len() * 2);
    for pair in chain.windows(2) {
        let i = mesh.vertices.len() as u32;
        let below = pos2(pair[0].x, baseline);
        mesh.colored_vertex(pair[0], color(pair[0]));
        mesh.colored_vertex(below, color(below));
        mesh.add_triangle(i, i + 1, i + 2);
        mesh.add_triangle(i + 1, i + 2, i + 3);
    }
    let last = chain[chain.len() - 1];
    mesh.colored_vertex(last, color(last));
    mesh.colored_vertex(pos2(last.x, baseline), color(pos2(last.x, baseline)));

    mesh
}
