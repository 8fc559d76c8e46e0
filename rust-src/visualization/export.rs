//! Export a dashboard tab as SVG or PNG.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::dashboard::{MetricCard, PercentChart, TabContent, NO_DATA};
use super::format::DeltaStyle;


// Dashboard color scheme
const NAVY_BG: &str = "#0F1629";
const CARD_BG: &str = "#1B2338";
const CARD_BORDER: &str = "#2E3850";
const TEXT: &str = "#FFFFFF";
const TEXT_SECONDARY: &str = "#9CA3AF";
const AMBER: &str = "#F59E0B";
const PINK: &str = "#EC4899";
const GREEN: &str = "#22C55E";
const RED: &str = "#EF4444";
const TRACK: &str = "#374151";

// Layout (scaled for sharp output)
const SCALE_FACTOR: i32 = 2;
const MARGIN: i32 = 20 * SCALE_FACTOR;
const CARD_W: i32 = 220 * SCALE_FACTOR;
const CARD_H: i32 = 96 * SCALE_FACTOR;
const GAP: i32 = 16 * SCALE_FACTOR;
const CARDS_PER_ROW: i32 = 3;
const HEADER_H: i32 = 70 * SCALE_FACTOR;
const CHART_ROW_H: i32 = 34 * SCALE_FACTOR;
const TABLE_ROW_H: i32 = 28 * SCALE_FACTOR;


/// Export a tab as SVG.
pub fn export_tab_svg(content: &TabContent, output_path: &Path) -> Result<()> {
    let svg_content = generate_svg(content);

    std::fs::write(output_path, svg_content)
        .with_context(|| format!("Failed to write SVG to {}", output_path.display()))?;

    Ok(())
}


/// Export a tab as PNG.
pub fn export_tab_png(content: &TabContent, output_path: &Path) -> Result<()> {
    let svg_content = generate_svg(content);

    let tree = parse_svg(&svg_content)?;

    // Render to pixmap
    let size = tree.size();
    let width = size.width() as u32;
    let height = size.height() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .context("Failed to create pixmap")?;

    let bg = hex_to_rgb(NAVY_BG);
    pixmap.fill(tiny_skia::Color::from_rgba8(bg.0, bg.1, bg.2, 255));

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap.save_png(output_path)
        .with_context(|| format!("Failed to save PNG to {}", output_path.display()))?;

    Ok(())
}


/// Generate SVG content for one tab.
pub fn generate_svg(content: &TabContent) -> String {
    let width = MARGIN * 2 + CARDS_PER_ROW * CARD_W + (CARDS_PER_ROW - 1) * GAP;

    let mut body = Vec::new();
    let mut y = HEADER_H;

    let cards = content.cards();
    for (i, row) in cards.chunks(CARDS_PER_ROW as usize).enumerate() {
        let row_y = y + i as i32 * (CARD_H + GAP);
        for (j, card) in row.iter().enumerate() {
            let x = MARGIN + j as i32 * (CARD_W + GAP);
            body.push(card_svg(card, x, row_y));
        }
    }
    let card_rows = (cards.len() as i32 + CARDS_PER_ROW - 1) / CARDS_PER_ROW;
    y += card_rows * (CARD_H + GAP);

    for chart in content.charts() {
        let (svg, height) = chart_svg(chart, MARGIN, y, width - MARGIN * 2);
        body.push(svg);
        y += height + GAP;
    }

    if let TabContent::Comparison { rows, .. } = content {
        let columns = [MARGIN, MARGIN + 200 * SCALE_FACTOR, MARGIN + 330 * SCALE_FACTOR, MARGIN + 460 * SCALE_FACTOR];
        let headers = ["Metric", "Current", "Previous", "Change"];
        for (x, header) in columns.iter().zip(headers) {
            body.push(format!(r#"<text x="{}" y="{}" class="label">{}</text>"#, x, y + 16 * SCALE_FACTOR, header));
        }
        y += TABLE_ROW_H;

        for row in rows {
            let baseline = y + 18 * SCALE_FACTOR;
            let (delta_text, delta_color) = match &row.delta {
                Some(delta) => (delta.to_string(), delta_fill(delta.style)),
                None => ("-".to_string(), TEXT_SECONDARY),
            };
            body.push(format!(r#"<text x="{}" y="{}" class="row">{}</text>"#, columns[0], baseline, escape(&row.label)));
            body.push(format!(
                r#"<text x="{}" y="{}" class="row" fill="{}">{}</text>"#,
                columns[1], baseline, AMBER, row.current.as_deref().unwrap_or(NO_DATA)
            ));
            body.push(format!(
                r#"<text x="{}" y="{}" class="row">{}</text>"#,
                columns[2], baseline, row.previous.as_deref().unwrap_or(NO_DATA)
            ));
            body.push(format!(
                r#"<text x="{}" y="{}" class="row" fill="{}">{}</text>"#,
                columns[3], baseline, delta_color, delta_text
            ));
            y += TABLE_ROW_H;
        }
        y += GAP;
    }

    let height = y + MARGIN;

    let mut svg_parts = vec![
        format!(r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#, width, height),
        "<style>".to_string(),
        format!("  .title {{ fill: {}; font: bold {}px sans-serif; }}", TEXT, 22 * SCALE_FACTOR),
        format!("  .subtitle {{ fill: {}; font: {}px sans-serif; }}", TEXT_SECONDARY, 12 * SCALE_FACTOR),
        format!("  .label {{ fill: {}; font: {}px sans-serif; }}", TEXT_SECONDARY, 12 * SCALE_FACTOR),
        format!("  .value {{ fill: {}; font: bold {}px sans-serif; }}", TEXT, 24 * SCALE_FACTOR),
        format!("  .delta {{ font: {}px sans-serif; }}", 11 * SCALE_FACTOR),
        format!("  .row {{ fill: {}; font: {}px sans-serif; }}", TEXT, 13 * SCALE_FACTOR),
        "</style>".to_string(),
        format!(r#"<rect width="{}" height="{}" fill="{}"/>"#, width, height, NAVY_BG),
        format!(
            r#"<text x="{}" y="{}" class="title">Gaming Analytics: {}</text>"#,
            MARGIN, 32 * SCALE_FACTOR, content.tab().title()
        ),
        format!(
            r#"<text x="{}" y="{}" class="subtitle">{}</text>"#,
            MARGIN, 52 * SCALE_FACTOR, escape(&content.subtitle())
        ),
    ];
    svg_parts.extend(body);
    svg_parts.push("</svg>".to_string());

    svg_parts.join("\n")
}


fn card_svg(card: &MetricCard, x: i32, y: i32) -> String {
    let mut parts = vec![
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" stroke="{}"/>"#,
            x, y, CARD_W, CARD_H, 8 * SCALE_FACTOR, CARD_BG, CARD_BORDER
        ),
        format!(
            r#"<text x="{}" y="{}" class="label">{}</text>"#,
            x + 12 * SCALE_FACTOR, y + 22 * SCALE_FACTOR, escape(&card.label)
        ),
        format!(
            r#"<text x="{}" y="{}" class="value">{}</text>"#,
            x + 12 * SCALE_FACTOR, y + 56 * SCALE_FACTOR, escape(card.value_text())
        ),
    ];

    if let Some(delta) = card.delta() {
        parts.push(format!(
            r#"<text x="{}" y="{}" class="delta" fill="{}">{} this week</text>"#,
            x + 12 * SCALE_FACTOR,
            y + 80 * SCALE_FACTOR,
            delta_fill(delta.style),
            delta
        ));
    }

    parts.join("\n")
}


/// Chart markup and its height.
fn chart_svg(chart: &PercentChart, x: i32, y: i32, width: i32) -> (String, i32) {
    let row_count = chart.rows.as_ref().map_or(1, |rows| rows.len().max(1)) as i32;
    let height = 56 * SCALE_FACTOR + row_count * CHART_ROW_H;

    let mut parts = vec![
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" stroke="{}"/>"#,
            x, y, width, height, 8 * SCALE_FACTOR, CARD_BG, CARD_BORDER
        ),
        format!(
            r#"<text x="{}" y="{}" class="row" font-weight="bold">{}</text>"#,
            x + 12 * SCALE_FACTOR, y + 24 * SCALE_FACTOR, escape(&chart.title)
        ),
        format!(
            r#"<text x="{}" y="{}" class="label">{}</text>"#,
            x + 12 * SCALE_FACTOR, y + 42 * SCALE_FACTOR, escape(&chart.description)
        ),
    ];

    let bar_x = x + 12 * SCALE_FACTOR;
    let bar_w = width - 24 * SCALE_FACTOR;
    let mut row_y = y + 56 * SCALE_FACTOR;

    match &chart.rows {
        Some(rows) => {
            for row in rows {
                parts.push(format!(
                    r#"<text x="{}" y="{}" class="label">{}</text>"#,
                    bar_x, row_y + 12 * SCALE_FACTOR, escape(&row.label)
                ));
                parts.push(format!(
                    r#"<text x="{}" y="{}" class="label" text-anchor="end" fill="{}">{}</text>"#,
                    bar_x + bar_w, row_y + 12 * SCALE_FACTOR, PINK, row.value_text
                ));
                parts.push(format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"/>"#,
                    bar_x, row_y + 18 * SCALE_FACTOR, bar_w, 6 * SCALE_FACTOR, 3 * SCALE_FACTOR, TRACK
                ));
                parts.push(format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"/>"#,
                    bar_x,
                    row_y + 18 * SCALE_FACTOR,
                    (bar_w as f64 * row.ratio).round() as i32,
                    6 * SCALE_FACTOR,
                    3 * SCALE_FACTOR,
                    AMBER
                ));
                row_y += CHART_ROW_H;
            }
        }
        None => parts.push(format!(
            r#"<text x="{}" y="{}" class="label">{}</text>"#,
            bar_x, row_y + 14 * SCALE_FACTOR, NO_DATA
        )),
    }

    (parts.join("\n"), height)
}


fn delta_fill(style: DeltaStyle) -> &'static str {
    match style {
        DeltaStyle::Positive => GREEN,
        DeltaStyle::Negative => RED,
    }
}


/// Escape text for use inside SVG elements.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}


/// Convert hex color to RGB tuple.
fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
    (r, g, b)
}


/// Parse SVG markup with the system fonts loaded, so `<text>` survives.
fn parse_svg(svg: &str) -> Result<resvg::usvg::Tree> {
    let mut opt = resvg::usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    if opt.fontdb.is_empty() {
        warn!("no system fonts found, exported PNG will have no text");
    }

    resvg::usvg::Tree::from_str(svg, &opt).context("Failed to parse SVG")
}


/// Open file with default application.
pub fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.to_string_lossy()])
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use crate::dashboard::{DateSelector, Tab, ViewContext};
    use crate::data::SnapshotSource;

    fn build(tab: Tab) -> TabContent {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let source = SnapshotSource::sample(today);
        let ctx = ViewContext::new(DateSelector::starting_at(Some(today)), today);
        TabContent::build(tab, &source, &ctx)
    }

    #[test]
    fn test_svg_contains_cards_and_chart() {
        let svg = generate_svg(&build(Tab::Overview));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("$89,420"));
        assert!(svg.contains("Day 30"));
        assert!(svg.contains(RED));
        assert!(svg.contains(GREEN));
    }

    #[test]
    fn test_svg_comparison_table() {
        let svg = generate_svg(&build(Tab::Comparison));
        assert!(svg.contains("Previous"));
        assert!(svg.contains("11,596"));
    }

    #[test]
    fn test_export_svg_file() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("gaming.svg");
        export_tab_svg(&build(Tab::Gaming), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Quest Completion"));
    }

    fn count_text_nodes(group: &resvg::usvg::Group) -> usize {
        group
            .children()
            .iter()
            .map(|node| match node {
                resvg::usvg::Node::Group(child) => count_text_nodes(child),
                resvg::usvg::Node::Text(_) => 1,
                _ => 0,
            })
            .sum()
    }

    #[test]
    fn test_parsed_svg_keeps_text() {
        let svg = generate_svg(&build(Tab::Overview));
        let tree = parse_svg(&svg).unwrap();

        let mut fonts = resvg::usvg::Options::default();
        fonts.fontdb_mut().load_system_fonts();
        if fonts.fontdb.is_empty() {
            eprintln!("skipping: no system fonts installed");
            return;
        }

        assert_eq!(count_text_nodes(tree.root()), svg.matches("<text ").count());
    }

    #[test]
    fn test_export_png_file() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("overview.png");
        export_tab_png(&build(Tab::Overview), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("A & B <c>"), "A &amp; B &lt;c&gt;");
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#0F1629"), (15, 22, 41));
    }
}
