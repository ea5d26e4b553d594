//! Status bar widget for displaying status messages and contextual help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, PopupType, Tab, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        if let Some(error) = &state.error_message {
            lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ]));
        } else if !state.status_message.is_empty() {
            lines.push(Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            )));
        } else {
            lines.push(Line::from(""));
        }

        lines.push(Self::help_line(state, theme));

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Contextual hints for the active popup or tab.
    fn hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
        match &state.active_popup {
            Some(PopupType::AdDetail(_) | PopupType::ScriptDetail(_)) => {
                &[("y", "Copy brief"), ("Esc", "Close")]
            }
            Some(PopupType::Help) => &[("j/k", "Scroll"), ("Esc", "Close")],
            None => match state.tab {
                Tab::Overview => &[("Tab", "Next tab"), ("s", "Setup"), ("q", "Quit")],
                Tab::Ads | Tab::Scripts => &[
                    ("j/k", "Select"),
                    ("f", "Filter"),
                    ("Enter", "Detail"),
                    ("q", "Quit"),
                ],
                Tab::Board => &[
                    ("h/l", "Lane"),
                    ("j/k", "Card"),
                    ("Space", "Pick up/drop"),
                    ("Esc", "Cancel"),
                ],
                Tab::Exports => &[("e", "Export now"), ("Tab", "Next tab"), ("q", "Quit")],
            },
        }
    }

    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));

        for (i, (key, action)) in Self::hints(state).iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw((*action).to_string()));
        }

        spans.push(Span::raw(" | "));
        spans.push(Span::styled("?".to_string(), Style::default().fg(theme.accent)));
        spans.push(Span::raw(": Help"));

        Line::from(spans)
    }
}
