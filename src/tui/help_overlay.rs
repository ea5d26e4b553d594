//! Help overlay listing all keyboard shortcuts, accessible via '?'.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::detail::centered_rect;
use super::Theme;

/// State for the help overlay.
#[derive(Debug, Clone, Default)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll up by one line.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < help_content_len() {
            self.scroll_offset += 1;
        }
    }
}

fn binding<'a>(key: &'a str, action: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("  {:<12}", key),
            Style::default().fg(theme.success),
        ),
        Span::styled(action, Style::default().fg(theme.text)),
    ])
}

fn section(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("=== {} ===", title),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn help_content(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        section("NAVIGATION", theme),
        binding("Tab/Shift+Tab", "Next / previous tab", theme),
        binding("1-5", "Jump to tab", theme),
        binding("s", "Open setup wizard", theme),
        binding("q", "Quit", theme),
        Line::from(""),
        section("GALLERIES", theme),
        binding("Up/Down, j/k", "Move selection", theme),
        binding("f", "Cycle status filter", theme),
        binding("Enter", "Open record detail", theme),
        binding("y", "Copy brief to clipboard (in detail)", theme),
        Line::from(""),
        section("BOARD", theme),
        binding("Left/Right, h/l", "Focus lane", theme),
        binding("Up/Down, j/k", "Select card", theme),
        binding("Space", "Pick up / drop card", theme),
        binding("Esc", "Cancel carry", theme),
        Line::from(""),
        section("EXPORTS", theme),
        binding("e", "Export catalogue now", theme),
        Line::from(""),
        section("SYSTEM", theme),
        binding("?", "Toggle this help", theme),
    ]
}

fn help_content_len() -> usize {
    help_content(&Theme::dark()).len()
}

/// Renders the help overlay.
pub fn render(f: &mut Frame, state: &HelpOverlayState, theme: &Theme) {
    let area: Rect = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let lines = help_content(theme);
    let visible: Vec<Line> = lines.into_iter().skip(state.scroll_offset).collect();

    let popup = Paragraph::new(visible)
        .style(Style::default().bg(theme.surface))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Help (Esc closes) "),
        );
    f.render_widget(popup, area);
}
