//! Bar chart data for the delayed reward analysis view.
//!
//! The chart shows one group per delayed reward goal with a progress bar next to a target bar.
//! Geometry is computed here in SVG user units so the client only has to draw rectangles, and
//! so the scaling rules can be tested without a renderer.

use crate::model::goal::{Goal, Reward};

const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 10.0;
const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 30.0;

/// Number of intervals the y axis is split into.
const TICK_INTERVALS: u32 = 4;

/// Share of a group's width taken by each bar.
const BAR_RATIO: f64 = 0.35;
/// Share of a group's width left between its two bars.
const GAP_RATIO: f64 = 0.05;

/// One entry of the chart: a delayed reward goal's progress against its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub name: String,
    pub progress: u32,
    pub target: u32,
}

impl From<&Goal> for ChartPoint {
    fn from(goal: &Goal) -> Self {
        Self {
            name: goal.text.clone(),
            progress: goal.progress,
            target: goal.target,
        }
    }
}

/// Builds chart points for every delayed reward goal, in list order.
pub fn chart_points<'a>(goals: impl IntoIterator<Item = &'a Goal>) -> Vec<ChartPoint> {
    goals
        .into_iter()
        .filter(|goal| goal.reward == Reward::Delayed)
        .map(ChartPoint::from)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub label_x: f64,
    pub progress: Bar,
    pub target: Bar,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: u64,
    pub y: f64,
}

/// Computed SVG geometry of the analysis chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_top: f64,
    pub plot_bottom: f64,
    /// Value at the top of the y axis, a multiple of the tick step. Wider than a target since
    /// rounding up can pass `u32::MAX`.
    pub axis_max: u64,
    pub ticks: Vec<Tick>,
    pub groups: Vec<BarGroup>,
}

/// Distance between y axis ticks for a chart whose tallest bar is `max`.
pub fn tick_step(max: u32) -> u32 {
    max.div_ceil(TICK_INTERVALS).max(1)
}

/// Lays out the bar chart for `points` inside a `width` x `height` viewport.
///
/// The y axis is scaled to the largest target, rounded up to a whole number of tick steps.
/// Progress never exceeds its target, so targets decide the scale.
///
/// # Arguments
/// - `points` - Chart entries in display order
/// - `width` - Viewport width in SVG user units
/// - `height` - Viewport height in SVG user units
///
/// # Returns
/// A [`ChartLayout`] with one [`BarGroup`] per point; no groups when `points` is empty.
pub fn layout(points: &[ChartPoint], width: f64, height: f64) -> ChartLayout {
    let plot_left = MARGIN_LEFT;
    let plot_right = (width - MARGIN_RIGHT).max(plot_left);
    let plot_top = MARGIN_TOP;
    let plot_bottom = (height - MARGIN_BOTTOM).max(plot_top);
    let plot_width = plot_right - plot_left;
    let plot_height = plot_bottom - plot_top;

    let max = points
        .iter()
        .map(|point| point.target.max(point.progress))
        .max()
        .unwrap_or(0)
        .max(1);
    let step = u64::from(tick_step(max));
    let axis_max = step * u64::from(max).div_ceil(step);

    let scale = |value: u64| value as f64 / axis_max as f64 * plot_height;

    let ticks = (0..=axis_max / step)
        .map(|i| {
            let value = i * step;
            Tick {
                value,
                y: plot_bottom - scale(value),
            }
        })
        .collect();

    let group_width = if points.is_empty() {
        0.0
    } else {
        plot_width / points.len() as f64
    };
    let bar_width = group_width * BAR_RATIO;
    let gap = group_width * GAP_RATIO;

    let groups = points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let center = plot_left + group_width * index as f64 + group_width / 2.0;
            let bar = |x: f64, value: u32| Bar {
                x,
                y: plot_bottom - scale(u64::from(value)),
                width: bar_width,
                height: scale(u64::from(value)),
                value,
            };

            BarGroup {
                label: point.name.clone(),
                label_x: center,
                progress: bar(center - gap / 2.0 - bar_width, point.progress),
                target: bar(center + gap / 2.0, point.target),
            }
        })
        .collect();

    ChartLayout {
        width,
        height,
        plot_left,
        plot_right,
        plot_top,
        plot_bottom,
        axis_max,
        ticks,
        groups,
    }
}
