//! Interactive dashboard state and event loop.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{info, warn};

use super::ui;
use crate::config::TICK_RATE_MS;
use crate::dashboard::{DateSelector, Tab, TabContent, TabSelector, ViewContext};
use crate::data::MetricsSource;
use crate::visualization::export_tab_svg;


/// Dashboard state owned by the rendering surface.
pub struct App {
    source: Box<dyn MetricsSource>,
    tabs: TabSelector,
    date: DateSelector,
    today: NaiveDate,
    export_dir: PathBuf,
    status: Option<String>,
    should_quit: bool,
}


impl App {
    pub fn new(
        source: Box<dyn MetricsSource>,
        tabs: TabSelector,
        date: DateSelector,
        today: NaiveDate,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            source,
            tabs,
            date,
            today,
            export_dir,
            status: None,
            should_quit: false,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Content of the active tab, read from the source on every call.
    pub fn content(&self) -> TabContent {
        let ctx = ViewContext::new(self.date, self.today);
        TabContent::build(self.tabs.active(), self.source.as_ref(), &ctx)
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.status = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.tabs.next();
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.tabs.prev();
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Err(e) = self.tabs.select_index(index) {
                    warn!(error = %e, "tab selection ignored");
                }
            }
            KeyCode::Char('[') => self.shift_date(-1),
            KeyCode::Char(']') => self.shift_date(1),
            KeyCode::Char('{') => self.shift_date(-7),
            KeyCode::Char('}') => self.shift_date(7),
            KeyCode::Char('t') => {
                self.date.reset_to(self.today);
                self.status = Some(format!("Date: {}", self.date.label()));
            }
            KeyCode::Char('x') => {
                self.date.clear();
                self.status = Some("Date cleared".to_string());
            }
            KeyCode::Char('e') => self.export_current(),
            _ => {}
        }
    }

    fn shift_date(&mut self, days: i64) {
        self.date.shift_days(days, self.today);
        self.status = Some(format!("Date: {}", self.date.label()));
    }

    /// Write the active tab as SVG into the export directory.
    fn export_current(&mut self) {
        let content = self.content();
        let path = self
            .export_dir
            .join(format!("gamedash-{}.svg", content.tab().id()));

        let result = std::fs::create_dir_all(&self.export_dir)
            .map_err(anyhow::Error::from)
            .and_then(|_| export_tab_svg(&content, &path));

        self.status = Some(match result {
            Ok(()) => {
                info!(path = %path.display(), "exported tab");
                format!("Exported to {}", path.display())
            }
            Err(e) => {
                warn!(error = %e, "export failed");
                format!("Export failed: {}", e)
            }
        });
    }
}


/// Run the event loop until the user quits.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(TICK_RATE_MS);

    while !app.should_quit() {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}


/// Raw mode and the alternate screen, undone on drop (including unwinding).
struct TerminalGuard;


impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}


impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}


/// Set up the terminal, run the dashboard, and restore the terminal.
pub fn run_dashboard(mut app: App) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, &mut app)?;
    Ok(())
}
