use dioxus::prelude::*;
use goal_tracker::model::{chart::layout, ChartPoint};

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 300.0;

const PROGRESS_COLOR: &str = "#4ade80";
const TARGET_COLOR: &str = "#f87171";
const AXIS_COLOR: &str = "#9ca3af";

/// Bar chart comparing progress with target for every delayed reward goal.
#[component]
pub fn AnalysisChart(points: Vec<ChartPoint>) -> Element {
    let chart = layout(&points, WIDTH, HEIGHT);

    rsx!(
        div { class: "flex flex-col gap-2",
            h2 { class: "font-semibold text-xl", "Delayed Reward Progress" }
            svg {
                view_box: format!("0 0 {WIDTH} {HEIGHT}"),
                width: "100%",
                height: "{HEIGHT}",
                line {
                    x1: chart.plot_left,
                    y1: chart.plot_top,
                    x2: chart.plot_left,
                    y2: chart.plot_bottom,
                    stroke: AXIS_COLOR,
                }
                line {
                    x1: chart.plot_left,
                    y1: chart.plot_bottom,
                    x2: chart.plot_right,
                    y2: chart.plot_bottom,
                    stroke: AXIS_COLOR,
                }
                {chart.ticks.iter().map(|tick| rsx!(
                    g { key: "tick-{tick.value}",
                        line {
                            x1: chart.plot_left - 4.0,
                            y1: tick.y,
                            x2: chart.plot_left,
                            y2: tick.y,
                            stroke: AXIS_COLOR,
                        }
                        text {
                            x: chart.plot_left - 6.0,
                            y: tick.y,
                            text_anchor: "end",
                            dominant_baseline: "middle",
                            font_size: "10",
                            "{tick.value}"
                        }
                    }
                ))}
                {chart.groups.iter().enumerate().map(|(index, group)| rsx!(
                    g { key: "group-{index}",
                        rect {
                            x: group.progress.x,
                            y: group.progress.y,
                            width: group.progress.width,
                            height: group.progress.height,
                            fill: PROGRESS_COLOR,
                            title { "Progress: {group.progress.value}" }
                        }
                        rect {
                            x: group.target.x,
                            y: group.target.y,
                            width: group.target.width,
                            height: group.target.height,
                            fill: TARGET_COLOR,
                            title { "Target: {group.target.value}" }
                        }
                        text {
                            x: group.label_x,
                            y: chart.plot_bottom + 16.0,
                            text_anchor: "middle",
                            font_size: "11",
                            "{group.label}"
                        }
                    }
                ))}
            }
            div { class: "flex justify-center gap-4 text-sm",
                LegendEntry { color: PROGRESS_COLOR, label: "Progress" }
                LegendEntry { color: TARGET_COLOR, label: "Target" }
            }
        }
    )
}

#[component]
fn LegendEntry(color: &'static str, label: &'static str) -> Element {
    rsx!(
        div { class: "flex items-center gap-1",
            span {
                class: "inline-block w-3 h-3",
                style: "background-color: {color}",
            }
            "{label}"
        }
    )
}
