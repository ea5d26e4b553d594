//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod board;
pub mod component;
pub mod detail;
pub mod exports;
pub mod gallery;
pub mod handlers;
pub mod help_overlay;
pub mod overview;
pub mod status_bar;
pub mod theme;
pub mod wizard;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::data::SampleData;
use crate::models::UgcScript;

// Re-export TUI components
pub use board::BoardState;
pub use component::Component;
pub use gallery::GalleryState;
pub use help_overlay::HelpOverlayState;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Dashboard tabs in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Stat cards, rollups, charts
    Overview,
    /// Ad variation gallery
    Ads,
    /// UGC script gallery
    Scripts,
    /// Status board
    Board,
    /// Export history and actions
    Exports,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Self; 5] = [
        Self::Overview,
        Self::Ads,
        Self::Scripts,
        Self::Board,
        Self::Exports,
    ];

    /// Tab title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Ads => "Ads",
            Self::Scripts => "Scripts",
            Self::Board => "Board",
            Self::Exports => "Exports",
        }
    }

    /// The next tab, wrapping around.
    #[must_use]
    pub fn next(&self) -> Self {
        let pos = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// The previous tab, wrapping around.
    #[must_use]
    pub fn previous(&self) -> Self {
        let pos = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Currently open popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupType {
    /// Ad detail for the given record id
    AdDetail(String),
    /// Script detail for the given record id
    ScriptDetail(String),
    /// Help overlay
    Help,
}

/// Outcome of a dashboard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardOutcome {
    /// The user quit the application
    Quit,
    /// The user asked for the setup wizard
    OpenSetup,
}

/// Application state for the dashboard.
pub struct AppState {
    /// The sample catalogue
    pub data: SampleData,
    /// Loaded configuration
    pub config: Config,
    /// Active theme
    pub theme: Theme,
    /// Active tab
    pub tab: Tab,
    /// Ads gallery state
    pub ads_gallery: GalleryState,
    /// Scripts gallery state
    pub scripts_gallery: GalleryState,
    /// Status board (owns its working copy of the scripts)
    pub board: BoardState,
    /// Help overlay state
    pub help: HelpOverlayState,
    /// Currently open popup
    pub active_popup: Option<PopupType>,
    /// Status message shown in the status bar
    pub status_message: String,
    /// Error message shown in the status bar
    pub error_message: Option<String>,
    /// Set when the user asks for the setup wizard
    pub open_setup: bool,
}

impl AppState {
    /// Creates dashboard state over the given catalogue and configuration.
    ///
    /// The board is seeded with its own copy of the script list, so status
    /// moves are session-local and reset on the next launch.
    #[must_use]
    pub fn new(data: SampleData, config: Config) -> Self {
        let board = BoardState::new(data.scripts.clone());
        let theme = Theme::from_mode(config.ui.theme_mode);
        Self {
            data,
            config,
            theme,
            tab: Tab::Overview,
            ads_gallery: GalleryState::new(),
            scripts_gallery: GalleryState::new(),
            board,
            help: HelpOverlayState::new(),
            active_popup: None,
            status_message: String::new(),
            error_message: None,
            open_setup: false,
        }
    }

    /// Sets a status message, clearing any error.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Sets an error message.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clears status and error messages.
    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message = None;
    }

    /// Looks up a script by id.
    ///
    /// On the board tab the board's working copy wins, since its statuses may
    /// have diverged from the catalogue.
    #[must_use]
    pub fn find_script(&self, id: &str) -> Option<&UgcScript> {
        if self.tab == Tab::Board {
            self.board.scripts().iter().find(|s| s.id == id)
        } else {
            self.data.scripts.iter().find(|s| s.id == id)
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main dashboard event loop.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<DashboardOutcome> {
    loop {
        // Apply theme based on user preference (Auto detects OS theme)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handlers::handle_key_event(state, key)? {
                        return Ok(DashboardOutcome::Quit);
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        if state.open_setup {
            state.open_setup = false;
            return Ok(DashboardOutcome::OpenSetup);
        }
    }
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(1), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_tabs(f, chunks[1], state);
    render_content(f, chunks[2], state);
    StatusBar::render(f, chunks[3], state, &state.theme);

    if let Some(popup) = &state.active_popup {
        render_popup(f, popup, state);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let brand = if state.config.is_configured() {
        state.config.brand.business_name.clone()
    } else {
        "unconfigured".to_string()
    };
    let title = format!(" {} - {} ", APP_NAME, brand);

    let title_widget = Paragraph::new(title).style(
        Style::default()
            .fg(state.theme.primary)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title_widget, area);
}

fn render_tabs(f: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", i + 1),
                    Style::default().fg(state.theme.text_muted),
                ),
                Span::styled(tab.title(), Style::default().fg(state.theme.text)),
            ])
        })
        .collect();

    let selected = Tab::ALL.iter().position(|t| *t == state.tab).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(state.theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("|", Style::default().fg(state.theme.text_muted)));

    f.render_widget(tabs, area);
}

fn render_content(f: &mut Frame, area: Rect, state: &AppState) {
    match state.tab {
        Tab::Overview => overview::render_overview(f, area, &state.data, &state.theme),
        Tab::Ads => gallery::render_ads_gallery(
            f,
            area,
            &state.data.ads,
            &state.ads_gallery,
            &state.theme,
        ),
        Tab::Scripts => gallery::render_scripts_gallery(
            f,
            area,
            &state.data.scripts,
            &state.scripts_gallery,
            &state.theme,
        ),
        Tab::Board => state.board.render(f, area, &state.theme),
        Tab::Exports => exports::render_exports(f, area, &state.data, &state.config, &state.theme),
    }
}

fn render_popup(f: &mut Frame, popup: &PopupType, state: &AppState) {
    match popup {
        PopupType::Help => help_overlay::render(f, &state.help, &state.theme),
        PopupType::AdDetail(id) => {
            if let Some(ad) = state.data.ads.iter().find(|a| a.id == *id) {
                detail::render_ad_detail(f, ad, &state.theme);
            }
        }
        PopupType::ScriptDetail(id) => {
            if let Some(script) = state.find_script(id) {
                detail::render_script_detail(f, script, &state.theme);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_round_trips() {
        let mut tab = Tab::Overview;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Overview);
        assert_eq!(Tab::Overview.previous(), Tab::Exports);
    }

    #[test]
    fn test_board_copy_is_independent_of_catalogue() {
        let data = SampleData::build();
        let state = AppState::new(data, Config::new());
        assert_eq!(state.board.scripts().len(), state.data.scripts.len());
        // Same records, distinct storage.
        assert_eq!(state.board.scripts(), &state.data.scripts[..]);
    }

    #[test]
    fn test_set_status_clears_error() {
        let state_data = SampleData::build();
        let mut state = AppState::new(state_data, Config::new());
        state.set_error("boom");
        assert!(state.error_message.is_some());
        state.set_status("ok");
        assert!(state.error_message.is_none());
        assert_eq!(state.status_message, "ok");
    }
}
