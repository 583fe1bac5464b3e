//! Minimal monthly bar chart rendered with scaled divs.

use dioxus::prelude::*;
use vaultnotes_core::MonthlyCount;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_label(month: u32) -> &'static str {
    MONTH_LABELS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?")
}

/// Bars are scaled against the largest count in the series.
#[component]
pub fn BarChart(title: String, color: String, data: Vec<MonthlyCount>) -> Element {
    let max = data.iter().map(|point| point.count).max().unwrap_or(0);

    rsx! {
        div {
            class: "bar-chart",
            style: "
                flex: 1;
                padding: 20px 24px;
                background: #ffffff;
                border: 1px solid #dadce0;
                border-radius: 12px;
            ",
            div {
                style: "font-size: 14px; font-weight: 600; margin-bottom: 16px;",
                "{title}"
            }
            if data.is_empty() {
                div {
                    style: "color: #5f6368; font-size: 13px;",
                    "No data yet"
                }
            } else {
                div {
                    style: "display: flex; align-items: flex-end; gap: 12px; height: 140px;",
                    for point in data {
                        {
                            let height = if max == 0 {
                                0
                            } else {
                                (point.count * 100).div_euclid(max)
                            };
                            let label = month_label(point.month);
                            rsx! {
                                div {
                                    key: "{point.month}",
                                    style: "
                                        flex: 1;
                                        display: flex;
                                        flex-direction: column;
                                        align-items: center;
                                        gap: 4px;
                                        height: 100%;
                                        justify-content: flex-end;
                                    ",
                                    div {
                                        style: "font-size: 11px; color: #5f6368;",
                                        "{point.count}"
                                    }
                                    div {
                                        style: "
                                            width: 100%;
                                            height: {height}%;
                                            min-height: 2px;
                                            background: {color};
                                            border-radius: 4px 4px 0 0;
                                        ",
                                    }
                                    div {
                                        style: "font-size: 11px; color: #5f6368;",
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
