//! Exports tab: previously exported files plus the live export action.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::config::Config;
use crate::data::SampleData;
use crate::tui::Theme;

/// Renders the exports tab.
pub fn render_exports(
    f: &mut Frame,
    area: Rect,
    data: &SampleData,
    config: &Config,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(area);

    let header = Row::new(vec!["File", "Format", "Records", "Exported"]).style(
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = data
        .export_records
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.file.clone()),
                Cell::from(record.format.slug()),
                Cell::from(record.records.to_string()),
                Cell::from(record.exported_at.clone()),
            ])
            .style(Style::default().fg(theme.text))
        })
        .collect();

    let widths = [
        Constraint::Min(34),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Export History "),
    );
    f.render_widget(table, chunks[0]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("e", Style::default().fg(theme.accent)),
        Span::styled(
            format!(
                ": export catalogue as {} to {}",
                config.output.format,
                config.output.export_dir.display()
            ),
            Style::default().fg(theme.text_muted),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[1]);
}
