//! Plain terminal rendering of a tab using ANSI escapes.

use std::fmt::Write;

use crate::config::BAR_WIDTH;
use crate::dashboard::{CardValue, ComparisonRow, MetricCard, PercentChart, Tab, TabContent, NO_DATA};
use super::format::{DeltaStyle, Delta};


// Constants
const AMBER: &str = "\x1b[38;5;214m";
const PINK: &str = "\x1b[38;5;205m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const CARD_WIDTH: usize = 28;
const CARDS_PER_ROW: usize = 3;
const PANEL_WIDTH: usize = 88;


/// Escape sequences in use; all empty when color is off.
#[derive(Debug, Clone, Copy)]
struct Palette {
    accent: &'static str,
    highlight: &'static str,
    up: &'static str,
    down: &'static str,
    dim: &'static str,
    bold: &'static str,
    reset: &'static str,
}


impl Palette {
    fn new(color: bool) -> Self {
        if color {
            Self {
                accent: AMBER,
                highlight: PINK,
                up: GREEN,
                down: RED,
                dim: DIM,
                bold: BOLD,
                reset: RESET,
            }
        } else {
            Self {
                accent: "",
                highlight: "",
                up: "",
                down: "",
                dim: "",
                bold: "",
                reset: "",
            }
        }
    }

    fn delta(&self, delta: &Delta) -> &'static str {
        match delta.style {
            DeltaStyle::Positive => self.up,
            DeltaStyle::Negative => self.down,
        }
    }
}


/// Render one tab as a block of text.
pub fn render_tab(content: &TabContent, color: bool) -> String {
    let p = Palette::new(color);
    let mut out = String::new();

    render_header(&mut out, content.tab(), &p);
    let _ = writeln!(out, "{}{}{}", p.dim, content.subtitle(), p.reset);
    out.push('\n');

    match content {
        TabContent::Overview { cards, secondary, charts, .. } => {
            render_cards(&mut out, cards, &p);
            render_cards(&mut out, secondary, &p);
            render_charts(&mut out, charts, &p);
        }
        TabContent::Period { cards, charts, .. }
        | TabContent::Monetization { cards, charts, .. }
        | TabContent::Gaming { cards, charts, .. } => {
            render_cards(&mut out, cards, &p);
            render_charts(&mut out, charts, &p);
        }
        TabContent::Comparison { rows, .. } => render_comparison(&mut out, rows, &p),
    }

    out
}


/// Print one tab to stdout.
pub fn print_tab(content: &TabContent, color: bool) {
    print!("{}", render_tab(content, color));
}


/// Title line and tab bar.
fn render_header(out: &mut String, active: Tab, p: &Palette) {
    let _ = writeln!(
        out,
        "{}{}Gaming Analytics{}  {}Game metrics dashboard{}  {}[Live]{}",
        p.bold, p.accent, p.reset, p.dim, p.reset, p.up, p.reset
    );

    let tabs: Vec<String> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            if *tab == active {
                format!("{}{}[{} {}]{}", p.bold, p.accent, i + 1, tab.title(), p.reset)
            } else {
                format!("{} {} {} {}", p.dim, i + 1, tab.title(), p.reset)
            }
        })
        .collect();

    let _ = writeln!(out, "{}", tabs.join(" "));
    let _ = writeln!(out, "{}", "─".repeat(PANEL_WIDTH));
}


/// Render cards as rows of boxes, three per row.
fn render_cards(out: &mut String, cards: &[MetricCard], p: &Palette) {
    let inner = CARD_WIDTH - 2;
    let border = "─".repeat(inner);

    for row in cards.chunks(CARDS_PER_ROW) {
        let mut top = Vec::new();
        let mut titles = Vec::new();
        let mut values = Vec::new();
        let mut deltas = Vec::new();
        let mut bottom = Vec::new();

        for card in row {
            top.push(format!("┌{}┐", border));
            titles.push(format!("│{:^inner$}│", truncate(&card.label, inner)));

            let value_color = match card.value {
                CardValue::NoData => p.dim,
                CardValue::Ready { .. } => p.accent,
            };
            values.push(format!(
                "│{}{}{:^inner$}{}│",
                p.bold,
                value_color,
                truncate(card.value_text(), inner),
                p.reset
            ));

            match card.delta() {
                Some(delta) => deltas.push(format!(
                    "│{}{:^inner$}{}│",
                    p.delta(delta),
                    truncate(&format!("{} this week", delta), inner),
                    p.reset
                )),
                None => deltas.push(format!("│{:inner$}│", "")),
            }

            bottom.push(format!("└{}┘", border));
        }

        for line in [&top, &titles, &values, &deltas, &bottom] {
            let _ = writeln!(out, "{}", line.join("  "));
        }
    }
    out.push('\n');
}


/// Render percentage charts as labelled text bars.
fn render_charts(out: &mut String, charts: &[PercentChart], p: &Palette) {
    let inner = PANEL_WIDTH - 2;

    for chart in charts {
        let _ = writeln!(out, "┌{}┐", "─".repeat(inner));
        let _ = writeln!(
            out,
            "│ {}{:<w$}{} │",
            p.bold,
            truncate(&chart.title, inner - 2),
            p.reset,
            w = inner - 2
        );
        let _ = writeln!(
            out,
            "│ {}{:<w$}{} │",
            p.dim,
            truncate(&chart.description, inner - 2),
            p.reset,
            w = inner - 2
        );
        let _ = writeln!(out, "├{}┤", "─".repeat(inner));

        match &chart.rows {
            Some(rows) => {
                for row in rows {
                    let label_width = inner - BAR_WIDTH - 12;
                    let _ = writeln!(
                        out,
                        "│ {:<lw$} {} {}{:>8}{} │",
                        truncate(&row.label, label_width),
                        create_bar(row.ratio, BAR_WIDTH, p),
                        p.highlight,
                        truncate(&row.value_text, 8),
                        p.reset,
                        lw = label_width
                    );
                }
            }
            None => {
                let _ = writeln!(out, "│ {}{:<w$}{} │", p.dim, NO_DATA, p.reset, w = inner - 2);
            }
        }

        let _ = writeln!(out, "└{}┘", "─".repeat(inner));
    }
}


/// Render the comparison table.
fn render_comparison(out: &mut String, rows: &[ComparisonRow], p: &Palette) {
    let _ = writeln!(
        out,
        "{}{:<38} {:>14} {:>14} {:>14}{}",
        p.bold, "Metric", "Current", "Previous", "Change", p.reset
    );
    let _ = writeln!(out, "{}", "─".repeat(PANEL_WIDTH - 5));

    for row in rows {
        let (delta_text, delta_color) = match &row.delta {
            Some(delta) => (delta.to_string(), p.delta(delta)),
            None => ("-".to_string(), p.dim),
        };

        let _ = writeln!(
            out,
            "{:<38} {}{:>14}{} {:>14} {}{:>14}{}",
            truncate(&row.label, 38),
            p.accent,
            truncate(row.current.as_deref().unwrap_or(NO_DATA), 14),
            p.reset,
            truncate(row.previous.as_deref().unwrap_or(NO_DATA), 14),
            delta_color,
            delta_text,
            p.reset
        );
    }
}


/// Create a simple text bar for visualization.
fn create_bar(ratio: f64, width: usize, p: &Palette) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);

    format!(
        "{}{}{}{}{}{}",
        p.accent,
        "█".repeat(filled),
        p.reset,
        p.dim,
        "░".repeat(width - filled),
        p.reset,
    )
}


/// Shorten to `max` characters, marking the cut with `…`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::dashboard::{DateSelector, ViewContext};
    use crate::data::SnapshotSource;
    use crate::visualization::format_change;

    fn build(tab: Tab) -> TabContent {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let source = SnapshotSource::sample(today);
        let ctx = ViewContext::new(DateSelector::starting_at(Some(today)), today);
        TabContent::build(tab, &source, &ctx)
    }

    #[test]
    fn test_overview_plain_text() {
        let text = render_tab(&build(Tab::Overview), false);

        assert!(text.contains("[1 Overview]"));
        assert!(text.contains("Data for: 18 October 2026"));
        assert!(text.contains("12,547"));
        assert!(text.contains("$89,420"));
        assert!(text.contains("▼ 2.1% this week"));
        assert!(text.contains("Retention Rate"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_retention_lines_in_order() {
        let text = render_tab(&build(Tab::Overview), false);
        let positions: Vec<usize> = ["Day 1 ", "Day 3 ", "Day 7 ", "Day 30 "]
            .iter()
            .map(|label| text.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_colored_output() {
        let text = render_tab(&build(Tab::Overview), true);
        assert!(text.contains(GREEN));
        assert!(text.contains(RED));
    }

    #[test]
    fn test_comparison_table() {
        let text = render_tab(&build(Tab::Comparison), false);
        assert!(text.contains("Previous"));
        assert!(text.contains("11,596"));
        assert!(text.contains("▲ 8.2%"));
    }

    #[test]
    fn test_long_text_stays_inside_boxes() {
        let content = TabContent::Period {
            range_label: "12 Oct 2026 - 18 Oct 2026".to_string(),
            cards: vec![MetricCard {
                label: "Revenue".to_string(),
                value: CardValue::Ready {
                    text: "$".to_string() + &"9,999".repeat(10),
                    delta: Some(format_change(123_456_789.125).unwrap()),
                },
            }],
            charts: vec![PercentChart {
                title: "Retention ".repeat(12),
                description: String::new(),
                rows: None,
            }],
        };

        let text = render_tab(&content, false);
        assert!(text.contains('…'));
        for line in text.lines() {
            assert!(line.chars().count() <= PANEL_WIDTH, "line too wide: {}", line);
        }
    }

    #[test]
    fn test_bar() {
        let p = Palette::new(false);
        assert_eq!(create_bar(0.5, 10, &p), "█████░░░░░");
        assert_eq!(create_bar(1.5, 4, &p), "████");
        assert_eq!(create_bar(0.0, 3, &p), "░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ARPPU (Avg Revenue)", 8), "ARPPU (…");
    }
}
