//! Chart data and SVG rendering: the portfolio line chart with its period
//! selector, the allocation doughnut and stat-card sparklines.

use yew::prelude::*;

use crate::format::format_currency_whole;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortfolioPeriod {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl PortfolioPeriod {
    pub const ALL: [PortfolioPeriod; 4] = [
        PortfolioPeriod::OneMonth,
        PortfolioPeriod::ThreeMonths,
        PortfolioPeriod::SixMonths,
        PortfolioPeriod::OneYear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PortfolioPeriod::OneMonth => "1M",
            PortfolioPeriod::ThreeMonths => "3M",
            PortfolioPeriod::SixMonths => "6M",
            PortfolioPeriod::OneYear => "1Y",
        }
    }

    pub fn series(self) -> LineSeries {
        match self {
            PortfolioPeriod::OneMonth => LineSeries {
                labels: vec!["Week 1", "Week 2", "Week 3", "Week 4"],
                values: vec![12000.0, 12200.0, 12100.0, 12450.0],
            },
            PortfolioPeriod::ThreeMonths => LineSeries {
                labels: vec!["Month 1", "Month 2", "Month 3"],
                values: vec![11000.0, 11800.0, 12450.0],
            },
            PortfolioPeriod::SixMonths => LineSeries {
                labels: vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
                values: vec![10000.0, 10500.0, 10200.0, 11000.0, 11800.0, 12450.0],
            },
            PortfolioPeriod::OneYear => LineSeries {
                labels: vec!["Q1", "Q2", "Q3", "Q4"],
                values: vec![9500.0, 10200.0, 11500.0, 12450.0],
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
}

pub const ALLOCATION: [(&str, f64, &str); 4] = [
    ("Crypto", 40.0, "#10B981"),
    ("Stocks", 30.0, "#3B82F6"),
    ("Forex", 20.0, "#F59E0B"),
    ("Bonds", 10.0, "#8B5CF6"),
];

/// Maps values into a `width` × `height` box, first value on the left edge
/// and the minimum on the bottom edge. A flat series sits on the bottom.
pub fn scale_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    let min = values.iter().cloned().fold(f64::MAX, f64::min);
    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let steps = (values.len() - 1).max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 / steps * width;
            let y = height - (v - min) / range * height;
            (x, y)
        })
        .collect()
}

pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoughnutSegment {
    pub label: &'static str,
    pub color: &'static str,
    pub percent: f64,
    /// Percent of the ring already used by earlier segments.
    pub offset: f64,
}

pub fn doughnut_segments(slices: &[(&'static str, f64, &'static str)]) -> Vec<DoughnutSegment> {
    let total: f64 = slices.iter().map(|(_, v, _)| v.max(0.0)).sum();
    let mut offset = 0.0;
    slices
        .iter()
        .map(|(label, value, color)| {
            let percent = if total > 0.0 { value.max(0.0) / total * 100.0 } else { 0.0 };
            let segment = DoughnutSegment {
                label: *label,
                color: *color,
                percent,
                offset,
            };
            offset += percent;
            segment
        })
        .collect()
}

const CHART_W: f64 = 600.0;
const CHART_H: f64 = 240.0;
const AXIS_W: f64 = 70.0;

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub series: LineSeries,
    pub symbol: &'static str,
    #[prop_or("#10B981")]
    pub color: &'static str,
}

/// Top and bottom axis ticks, in the configured currency.
pub fn axis_ticks(values: &[f64], symbol: &str) -> Option<(String, String)> {
    let max = values.iter().cloned().fold(f64::NAN, f64::max);
    let min = values.iter().cloned().fold(f64::NAN, f64::min);
    if max.is_nan() || min.is_nan() {
        return None;
    }
    Some((format_currency_whole(max, symbol), format_currency_whole(min, symbol)))
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let plot_w = CHART_W - AXIS_W;
    let points = scale_points(&props.series.values, plot_w, CHART_H - 30.0)
        .into_iter()
        .map(|(x, y)| (x + AXIS_W, y + 10.0))
        .collect::<Vec<_>>();
    let (max_tick, min_tick) = axis_ticks(&props.series.values, props.symbol).unwrap_or_default();
    let mut area = points.clone();
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        area.push((last.0, CHART_H - 20.0));
        area.push((first.0, CHART_H - 20.0));
    }

    html! {
        <svg class="line-chart" viewBox={format!("0 0 {} {}", CHART_W, CHART_H + 20.0)} preserveAspectRatio="none" width="100%" height="100%">
            if !points.is_empty() {
                <>
                <text x="0" y="16" class="chart-tick" font-size="12" fill="#6B7280">{ max_tick }</text>
                <text x="0" y={format!("{}", CHART_H - 20.0)} class="chart-tick" font-size="12" fill="#6B7280">{ min_tick }</text>
                <polygon points={points_attr(&area)} fill="rgba(16, 185, 129, 0.1)" stroke="none"></polygon>
                <polyline points={points_attr(&points)} fill="none" stroke={props.color} stroke-width="3" stroke-linejoin="round"></polyline>
                { for points.iter().zip(props.series.labels.iter()).map(|((x, y), label)| html! {
                    <>
                        <circle cx={format!("{:.1}", x)} cy={format!("{:.1}", y)} r="6" fill={props.color} stroke="#ffffff" stroke-width="2"></circle>
                        <text x={format!("{:.1}", x)} y={format!("{}", CHART_H + 10.0)} font-size="12" text-anchor="middle" fill="#6B7280">{ *label }</text>
                    </>
                }) }
                </>
            }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct DoughnutChartProps {
    #[prop_or(true)]
    pub show_legend: bool,
}

#[function_component(DoughnutChart)]
pub fn doughnut_chart(props: &DoughnutChartProps) -> Html {
    let segments = doughnut_segments(&ALLOCATION);
    // cutout 60%: ring drawn as a thick stroke between r = 60 and r = 100
    let radius = 80.0;
    let circumference = 2.0 * std::f64::consts::PI * radius;

    html! {
        <div class="doughnut-chart">
            <svg viewBox="0 0 220 220" width="100%" height="220">
                <g transform="rotate(-90 110 110)">
                    { for segments.iter().map(|s| {
                        let dash = s.percent / 100.0 * circumference;
                        html! {
                            <circle cx="110" cy="110" r={radius.to_string()} fill="none" stroke={s.color} stroke-width="40"
                                stroke-dasharray={format!("{:.2} {:.2}", dash, circumference - dash)}
                                stroke-dashoffset={format!("{:.2}", -(s.offset / 100.0 * circumference))}>
                            </circle>
                        }
                    }) }
                </g>
            </svg>
            if props.show_legend {
                <ul class="chart-legend list-unstyled">
                    { for segments.iter().map(|s| html! {
                        <li class="d-flex align-items-center gap-2">
                            <span class="legend-dot" style={format!("background:{}; width:10px; height:10px; border-radius:50%; display:inline-block;", s.color)}></span>
                            <span>{ s.label }</span>
                            <span class="ms-auto fw-bold">{ format!("{:.0}%", s.percent) }</span>
                        </li>
                    }) }
                </ul>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SparklineProps {
    pub values: Vec<f64>,
    #[prop_or(120.0)]
    pub width: f64,
    #[prop_or(40.0)]
    pub height: f64,
}

#[function_component(Sparkline)]
pub fn sparkline(props: &SparklineProps) -> Html {
    let points = scale_points(&props.values, props.width, props.height);
    html! {
        <svg class="sparkline" viewBox={format!("0 0 {} {}", props.width, props.height)} width={props.width.to_string()} height={props.height.to_string()}>
            <polyline points={points_attr(&points)} fill="none" stroke="#28a745" stroke-width="2"></polyline>
        </svg>
    }
}

/// Stat-card sparkline samples.
pub const SPARKLINE_SAMPLES: [[f64; 10]; 3] = [
    [42.0, 48.0, 45.0, 52.0, 58.0, 55.0, 61.0, 67.0, 64.0, 72.0],
    [18.0, 25.0, 22.0, 30.0, 27.0, 35.0, 31.0, 29.0, 38.0, 41.0],
    [60.0, 55.0, 58.0, 49.0, 52.0, 47.0, 50.0, 44.0, 46.0, 40.0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_ticks_use_given_symbol() {
        let ticks = axis_ticks(&PortfolioPeriod::OneMonth.series().values, "€");
        let (top, bottom) = ticks.unwrap();
        assert!(top.starts_with('€'));
        assert!(bottom.starts_with('€'));
        assert_eq!(top, "€12,450");
        assert!(axis_ticks(&[], "€").is_none());
    }

    #[test]
    fn period_labels_select_datasets() {
        let one_month = PortfolioPeriod::OneMonth.series();
        assert_eq!(one_month.labels, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);
        assert_eq!(one_month.values.last(), Some(&12450.0));
        let labels: Vec<_> = PortfolioPeriod::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["1M", "3M", "6M", "1Y"]);
        for period in PortfolioPeriod::ALL {
            let s = period.series();
            assert_eq!(s.labels.len(), s.values.len());
        }
    }

    #[test]
    fn sparkline_geometry() {
        let pts = scale_points(&[0.0, 50.0, 100.0], 100.0, 40.0);
        assert_eq!(pts, vec![(0.0, 40.0), (50.0, 20.0), (100.0, 0.0)]);
        assert_eq!(points_attr(&pts), "0.0,40.0 50.0,20.0 100.0,0.0");
    }

    #[test]
    fn flat_and_tiny_series_do_not_divide_by_zero() {
        let flat = scale_points(&[5.0, 5.0, 5.0], 90.0, 30.0);
        assert!(flat.iter().all(|(_, y)| *y == 30.0));
        assert_eq!(scale_points(&[7.0], 90.0, 30.0), vec![(0.0, 30.0)]);
        assert!(scale_points(&[], 90.0, 30.0).is_empty());
    }

    #[test]
    fn allocation_split_sums_to_hundred() {
        let segments = doughnut_segments(&ALLOCATION);
        let total: f64 = segments.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(segments[0].percent, 40.0);
        assert_eq!(segments[2].offset, 70.0);

        let uneven = doughnut_segments(&[("A", 1.0, "#000"), ("B", 3.0, "#fff")]);
        assert_eq!(uneven[0].percent, 25.0);
        assert_eq!(uneven[1].offset, 25.0);
        assert!(doughnut_segments(&[("A", 0.0, "#000")])[0].percent == 0.0);
    }
}
