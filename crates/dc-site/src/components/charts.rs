//! Inline SVG charts for the research article.
//!
//! The originals were rendered by a charting library; these are small
//! static equivalents, enough for the article's four figures.

use leptos::*;

#[derive(Debug, Clone, Copy)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Percentage arcs for a donut: (length, offset) pairs on a 100-unit ring.
fn donut_arcs(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return values.iter().map(|_| (0.0, 0.0)).collect();
    }

    let mut consumed = 0.0;
    values
        .iter()
        .map(|value| {
            let length = value / total * 100.0;
            // Dash offset 25 starts the first arc at twelve o'clock.
            let offset = 25.0 - consumed;
            consumed += length;
            (length, offset)
        })
        .collect()
}

/// Scale a value into pixel space, clamped to the plot area.
fn scale(value: f64, min: f64, max: f64, size: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0) * size
}

/// `x,y` pairs for a polyline over evenly spaced samples.
fn line_points(values: &[f64], min: f64, max: f64, width: f64, height: f64) -> String {
    if values.len() < 2 {
        return String::new();
    }
    let step = width / (values.len() - 1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = index as f64 * step;
            let y = height - scale(*value, min, max, height);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn DonutChart(slices: Vec<ChartSlice>) -> impl IntoView {
    let arcs = donut_arcs(&slices.iter().map(|s| s.value).collect::<Vec<_>>());

    view! {
        <div class="flex flex-col items-center">
            <svg viewBox="0 0 42 42" class="w-56 h-56" role="img">
                {slices
                    .iter()
                    .zip(arcs)
                    .map(|(slice, (length, offset))| {
                        view! {
                            <circle
                                cx="21"
                                cy="21"
                                r="15.915"
                                fill="none"
                                stroke=slice.color
                                stroke-width="6"
                                stroke-dasharray=format!("{length:.2} {:.2}", 100.0 - length)
                                stroke-dashoffset=format!("{offset:.2}")
                            ></circle>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
            <ul class="mt-4 space-y-1 text-sm">
                {slices
                    .into_iter()
                    .map(|slice| {
                        view! {
                            <li class="flex items-center gap-2">
                                <span
                                    class="inline-block w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", slice.color)
                                ></span>
                                {format!("{} ({:.0}%)", slice.label, slice.value)}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
pub fn BarCompareChart(
    categories: Vec<&'static str>,
    series: Vec<ChartSeries>,
    max_value: f64,
    #[prop(optional)] unit: Option<&'static str>,
) -> impl IntoView {
    let plot_height = 120.0;
    let group_width = 300.0 / categories.len() as f64;
    let bar_width = (group_width * 0.6) / series.len() as f64;

    view! {
        <div>
            <svg viewBox="0 0 300 150" class="w-full" role="img">
                <line x1="0" y1="120" x2="300" y2="120" stroke="currentColor" stroke-opacity="0.2"/>
                {categories
                    .iter()
                    .enumerate()
                    .map(|(cat_index, category)| {
                        let group_x = cat_index as f64 * group_width + group_width * 0.2;
                        view! {
                            <g>
                                {series
                                    .iter()
                                    .enumerate()
                                    .map(|(series_index, s)| {
                                        let value = s.values.get(cat_index).copied().unwrap_or(0.0);
                                        let height = scale(value, 0.0, max_value, plot_height);
                                        view! {
                                            <rect
                                                x=format!("{:.1}", group_x + series_index as f64 * bar_width)
                                                y=format!("{:.1}", plot_height - height)
                                                width=format!("{bar_width:.1}")
                                                height=format!("{height:.1}")
                                                rx="1"
                                                fill=s.color
                                            ></rect>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                                <text
                                    x=format!("{:.1}", cat_index as f64 * group_width + group_width / 2.0)
                                    y="135"
                                    text-anchor="middle"
                                    class="fill-current text-muted-foreground"
                                    font-size="8"
                                >
                                    {*category}
                                </text>
                            </g>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
            <div class="mt-2 flex flex-wrap gap-4 text-sm">
                {series
                    .into_iter()
                    .map(|s| {
                        view! {
                            <span class="flex items-center gap-2">
                                <span
                                    class="inline-block w-3 h-3 rounded-sm"
                                    style=format!("background-color: {}", s.color)
                                ></span>
                                {s.label}
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()}
                {unit
                    .map(|unit| view! { <span class="text-muted-foreground">{format!("({unit})")}</span> })}
            </div>
        </div>
    }
}

#[component]
pub fn LineChart(
    labels: Vec<&'static str>,
    values: Vec<f64>,
    min: f64,
    max: f64,
    color: &'static str,
    /// Horizontal guide line, e.g. a safety threshold.
    #[prop(optional)] threshold: Option<f64>,
) -> impl IntoView {
    let width = 300.0;
    let plot_height = 120.0;
    let points = line_points(&values, min, max, width, plot_height);

    view! {
        <div>
            <svg viewBox="0 0 300 150" class="w-full" role="img">
                <line x1="0" y1="120" x2="300" y2="120" stroke="currentColor" stroke-opacity="0.2"/>
                {threshold
                    .map(|threshold| {
                        let y = plot_height - scale(threshold, min, max, plot_height);
                        view! {
                            <line
                                x1="0"
                                y1=format!("{y:.1}")
                                x2="300"
                                y2=format!("{y:.1}")
                                stroke="#DC2626"
                                stroke-width="1"
                                stroke-dasharray="4 4"
                            />
                        }
                    })}
                <polyline
                    points=points
                    fill="none"
                    stroke=color
                    stroke-width="2"
                ></polyline>
            </svg>
            <div class="mt-1 flex justify-between text-xs text-muted-foreground">
                {labels
                    .into_iter()
                    .map(|label| view! { <span>{label}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donut_arcs_cover_the_ring() {
        let arcs = donut_arcs(&[70.0, 25.0, 5.0]);
        let total: f64 = arcs.iter().map(|(length, _)| length).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!((arcs[0].1 - 25.0).abs() < 1e-9);
        assert!((arcs[1].1 - (25.0 - 70.0)).abs() < 1e-9);
    }

    #[test]
    fn test_donut_arcs_empty_total() {
        let arcs = donut_arcs(&[0.0, 0.0]);
        assert!(arcs.iter().all(|(length, _)| *length == 0.0));
    }

    #[test]
    fn test_scale_clamps() {
        assert_eq!(scale(50.0, 0.0, 100.0, 120.0), 60.0);
        assert_eq!(scale(-10.0, 0.0, 100.0, 120.0), 0.0);
        assert_eq!(scale(200.0, 0.0, 100.0, 120.0), 120.0);
        assert_eq!(scale(1.0, 5.0, 5.0, 120.0), 0.0);
    }

    #[test]
    fn test_line_points_spacing() {
        let points = line_points(&[0.0, 50.0, 100.0], 0.0, 100.0, 300.0, 120.0);
        assert_eq!(points, "0.0,120.0 150.0,60.0 300.0,0.0");
    }
}
