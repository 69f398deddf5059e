use playlog_core::{
    slug,
    MonthlyCount,
};
use serde::Serialize;

use crate::{
    escape,
    Fragment,
};

const BAR_FILL: &str = "rgba(211, 211, 211, 0.5)";
const BAR_BORDER: &str = "lightgray";

/// A complete bar-chart configuration, returned to and owned by the caller.
#[derive(Debug, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    kind: &'static str,
    data: ChartData,
    options: ChartOptions,
}

#[derive(Debug, Serialize)]
struct ChartData {
    labels: Vec<String>,
    datasets: Vec<Dataset>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dataset {
    data: Vec<u64>,
    label: String,
    background_color: &'static str,
    border_color: &'static str,
    border_width: u8,
}

#[derive(Debug, Serialize)]
struct ChartOptions {
    responsive: bool,
    legend: Toggle,
    title: Toggle,
    scales: Scales,
}

#[derive(Debug, Serialize)]
struct Toggle {
    display: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Scales {
    x_axes: Vec<Axis>,
    y_axes: Vec<Axis>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Axis {
    grid_lines: Toggle,
    #[serde(skip_serializing_if = "Option::is_none")]
    ticks: Option<Ticks>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Ticks {
    begin_at_zero: bool,
}

fn bar_chart(labels: Vec<String>, data: Vec<u64>, label: &str) -> ChartConfig {
    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                data,
                label: label.to_owned(),
                background_color: BAR_FILL,
                border_color: BAR_BORDER,
                border_width: 1,
            }],
        },
        options: ChartOptions {
            responsive: true,
            legend: Toggle { display: false },
            title: Toggle { display: false },
            scales: Scales {
                x_axes: vec![Axis {
                    grid_lines: Toggle { display: false },
                    ticks: None,
                }],
                y_axes: vec![Axis {
                    grid_lines: Toggle { display: false },
                    ticks: Some(Ticks { begin_at_zero: true }),
                }],
            },
        },
    }
}

/// One bar per month, input order preserved on the category axis, value
/// axis anchored at zero.
pub fn plays_by_month(months: &[MonthlyCount]) -> ChartConfig {
    bar_chart(
        months.iter().map(|m| m.pretty.clone()).collect(),
        months.iter().map(|m| m.count).collect(),
        "Plays",
    )
}

/// The series for one track's lifetime graph.
pub fn lifetime_chart(track: &str, series: &[MonthlyCount]) -> ChartConfig {
    bar_chart(
        series.iter().map(|m| m.pretty.clone()).collect(),
        series.iter().map(|m| m.count).collect(),
        track,
    )
}

/// Mount a lifetime graph requested on demand.
///
/// The series may arrive after the user has navigated away; a gone target is
/// a no-op and nothing is rendered or returned.
pub fn mount_lifetime_chart(target: Option<&mut Fragment>, track: &str, series: &[MonthlyCount]) -> Option<ChartConfig> {
    let target = target?;
    target.push(&format!(
        "<canvas id=\"lifetime-{}\" data-track=\"{}\"></canvas>",
        slug(track),
        escape(track)
    ));
    Some(lifetime_chart(track, series))
}

#[cfg(test)]
mod tests;
