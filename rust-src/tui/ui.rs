//! Frame rendering for the interactive dashboard.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Gauge, Paragraph, Row, Table, Tabs},
    Frame,
};

use super::app::App;
use super::theme::Theme;
use crate::dashboard::{CardValue, ComparisonRow, MetricCard, PercentChart, Tab, TabContent, NO_DATA};

const CARD_HEIGHT: u16 = 5;
const CARDS_PER_ROW: usize = 4;


/// Draw the whole screen.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tab bar
            Constraint::Min(8),    // Panel
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    let content = app.content();

    render_header(f, chunks[0]);
    render_tabs(f, chunks[1], app.active_tab());
    render_panel(f, chunks[2], &content);
    render_footer(f, chunks[3], app);
}


fn render_header(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(12)])
        .split(block.inner(area));
    f.render_widget(block, area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled("Gaming Analytics", Theme::title())),
        Line::from(Span::styled("Game metrics dashboard", Theme::text_dim())),
    ]);
    f.render_widget(title, halves[0]);

    let badge = Paragraph::new(Span::styled("● Live", Theme::live())).alignment(Alignment::Right);
    f.render_widget(badge, halves[1]);
}


fn render_tabs(f: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border()),
        )
        .style(Theme::text_dim())
        .highlight_style(Theme::active_tab())
        .select(active.index());

    f.render_widget(tabs, area);
}


fn render_panel(f: &mut Frame, area: Rect, content: &TabContent) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", content.tab().title()), Theme::title()))
        .title_bottom(Span::styled(format!(" {} ", content.subtitle()), Theme::text_dim()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if let TabContent::Comparison { rows, .. } = content {
        render_comparison(f, inner, rows);
        return;
    }

    let cards = content.cards();
    let card_rows = cards.len().div_ceil(CARDS_PER_ROW) as u16;

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(card_rows * CARD_HEIGHT), Constraint::Min(0)])
        .split(inner);

    render_card_grid(f, sections[0], &cards);

    let charts = content.charts();
    if charts.is_empty() {
        return;
    }
    let chart_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, charts.len() as u32); charts.len()])
        .split(sections[1]);
    for (chart, chart_area) in charts.iter().zip(chart_areas.iter()) {
        render_chart(f, *chart_area, chart);
    }
}


fn render_card_grid(f: &mut Frame, area: Rect, cards: &[&MetricCard]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); cards.len().div_ceil(CARDS_PER_ROW)])
        .split(area);

    for (row_area, row_cards) in rows.iter().zip(cards.chunks(CARDS_PER_ROW)) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, CARDS_PER_ROW as u32); CARDS_PER_ROW])
            .split(*row_area);

        for (card, card_area) in row_cards.iter().zip(columns.iter()) {
            render_card(f, *card_area, card);
        }
    }
}


fn render_card(f: &mut Frame, area: Rect, card: &MetricCard) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", card.label), Theme::text_dim()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());

    let value_style = match card.value {
        CardValue::NoData => Theme::text_dim(),
        CardValue::Ready { .. } => Theme::value(),
    };

    let mut lines = vec![Line::from(Span::styled(card.value_text().to_string(), value_style))];
    if let Some(delta) = card.delta() {
        lines.push(Line::from(vec![
            Span::styled(delta.to_string(), Theme::delta(delta.style)),
            Span::styled(" this week", Theme::text_dim()),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}


fn render_chart(f: &mut Frame, area: Rect, chart: &PercentChart) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", chart.title), Theme::title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(rows) = &chart.rows else {
        f.render_widget(Paragraph::new(Span::styled(NO_DATA, Theme::text_dim())), inner);
        return;
    };

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(rows.iter().map(|_| Constraint::Length(2)));
    constraints.push(Constraint::Min(0));
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(chart.description.as_str(), Theme::text_dim())),
        slots[0],
    );

    for (row, slot) in rows.iter().zip(slots.iter().skip(1)) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(*slot);

        let label = Line::from(vec![
            Span::styled(row.label.as_str(), Theme::text_dim()),
            Span::raw("  "),
            Span::styled(row.value_text.as_str(), Theme::highlight()),
        ]);
        f.render_widget(Paragraph::new(label), parts[0]);

        let gauge = Gauge::default()
            .gauge_style(Theme::gauge())
            .ratio(row.ratio)
            .label("");
        f.render_widget(gauge, parts[1]);
    }
}


fn render_comparison(f: &mut Frame, area: Rect, rows: &[ComparisonRow]) {
    let header = Row::new(["Metric", "Current", "Previous", "Change"].map(|h| {
        Cell::from(Span::styled(h, Theme::title()))
    }))
    .bottom_margin(1);

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            let change = match &row.delta {
                Some(delta) => Cell::from(Span::styled(delta.to_string(), Theme::delta(delta.style))),
                None => Cell::from(Span::styled("-", Theme::text_dim())),
            };
            Row::new(vec![
                Cell::from(Span::styled(row.label.clone(), Theme::text())),
                Cell::from(Span::styled(
                    row.current.clone().unwrap_or_else(|| NO_DATA.to_string()),
                    Theme::accent(),
                )),
                Cell::from(Span::styled(
                    row.previous.clone().unwrap_or_else(|| NO_DATA.to_string()),
                    Theme::text_dim(),
                )),
                change,
            ])
        })
        .collect();

    let table = Table::new(
        body,
        [
            Constraint::Percentage(46),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
        ],
    )
    .header(header)
    .column_spacing(1);

    f.render_widget(table, area);
}


fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(" q", Theme::accent()),
        Span::styled(" quit  ", Theme::text_dim()),
        Span::styled("Tab/1-5", Theme::accent()),
        Span::styled(" switch  ", Theme::text_dim()),
        Span::styled("[ ] { }", Theme::accent()),
        Span::styled(" date  ", Theme::text_dim()),
        Span::styled("t/x", Theme::accent()),
        Span::styled(" today/clear  ", Theme::text_dim()),
        Span::styled("e", Theme::accent()),
        Span::styled(" export", Theme::text_dim()),
    ];

    if let Some(status) = app.status() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(status.to_string(), Theme::highlight()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    use crate::dashboard::{DateSelector, TabSelector};
    use crate::data::SnapshotSource;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn app() -> App {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        App::new(
            Box::new(SnapshotSource::sample(today)),
            TabSelector::new(),
            DateSelector::starting_at(Some(today)),
            today,
            std::env::temp_dir(),
        )
    }

    #[test]
    fn test_render_overview() {
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        let app = app();
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Gaming Analytics"));
        assert!(text.contains("12,547"));
        assert!(text.contains("Retention Rate"));
        assert!(text.contains("Day 30"));
    }

    #[test]
    fn test_render_comparison() {
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE));
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Previous"));
        assert!(text.contains("11,596"));
    }

    #[test]
    fn test_render_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let app = app();
        terminal.draw(|f| render(f, &app)).unwrap();
    }
}
