//! Overview tab: stat cards, platform rollups, output history, quality checks.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::data::SampleData;
use crate::models::Status;
use crate::tui::Theme;

/// Renders the overview tab.
pub fn render_overview(f: &mut Frame, area: Rect, data: &SampleData, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Stat cards
            Constraint::Length(8),  // Platform rollup table
            Constraint::Min(8),     // Output chart + quality checks
        ])
        .split(area);

    render_stat_cards(f, chunks[0], data, theme);
    render_platform_table(f, chunks[1], data, theme);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    render_output_chart(f, bottom[0], data, theme);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(bottom[1]);

    render_quality_checks(f, right[0], data, theme);
    render_product_counts(f, right[1], data, theme);
}

fn stat_card(f: &mut Frame, area: Rect, value: String, label: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_muted));

    let content = vec![
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(theme.text_muted),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_stat_cards(f: &mut Frame, area: Rect, data: &SampleData, theme: &Theme) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let ready = data
        .ads
        .iter()
        .filter(|a| a.status == Status::Ready)
        .count();

    stat_card(f, cards[0], data.ads.len().to_string(), "AD VARIATIONS", theme);
    stat_card(f, cards[1], ready.to_string(), "READY TO PUBLISH", theme);
    stat_card(f, cards[2], data.scripts.len().to_string(), "UGC SCRIPTS", theme);
    stat_card(
        f,
        cards[3],
        data.product_ad_counts.len().to_string(),
        "PRODUCTS TRACKED",
        theme,
    );
}

fn render_platform_table(f: &mut Frame, area: Rect, data: &SampleData, theme: &Theme) {
    let header = Row::new(vec![
        "Platform",
        "Campaigns",
        "Ad sets",
        "Ads",
        "Reach",
        "Budget/mo",
        "Ready",
    ])
    .style(
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = data
        .platform_summaries
        .iter()
        .map(|summary| {
            Row::new(vec![
                Cell::from(summary.platform.label()),
                Cell::from(summary.campaigns.to_string()),
                Cell::from(summary.ad_sets.to_string()),
                Cell::from(summary.ads.to_string()),
                Cell::from(format_reach(summary.reach)),
                Cell::from(format!("${}", summary.monthly_budget)),
                Cell::from(summary.ready.to_string()),
            ])
            .style(Style::default().fg(theme.text))
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Platforms "),
    );

    f.render_widget(table, area);
}

/// Formats a reach figure compactly (182000 -> "182k").
fn format_reach(reach: u32) -> String {
    if reach >= 1_000 {
        format!("{}k", reach / 1_000)
    } else {
        reach.to_string()
    }
}

fn render_output_chart(f: &mut Frame, area: Rect, data: &SampleData, theme: &Theme) {
    let bars: Vec<(&str, u64)> = data
        .weekly_output
        .iter()
        .map(|week| (week.week.as_str(), u64::from(week.ads + week.scripts)))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Weekly Output (ads + scripts) "),
        )
        .data(&bars)
        .bar_width(6)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme.accent))
        .value_style(Style::default().fg(theme.text).bg(theme.accent));

    f.render_widget(chart, area);
}

fn render_quality_checks(f: &mut Frame, area: Rect, data: &SampleData, theme: &Theme) {
    let mut lines: Vec<Line> = Vec::new();
    for check in &data.quality_checks {
        let color = if check.failed == 0 {
            theme.success
        } else {
            theme.warning
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<18}", check.name),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                format!("{} passed", check.passed),
                Style::default().fg(theme.success),
            ),
            Span::styled(
                format!("  {} failed", check.failed),
                Style::default().fg(color),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Quality Checks "),
    );
    f.render_widget(paragraph, area);
}

fn render_product_counts(f: &mut Frame, area: Rect, data: &SampleData, theme: &Theme) {
    let lines: Vec<Line> = data
        .product_ad_counts
        .iter()
        .map(|count| {
            Line::from(vec![
                Span::styled(
                    format!("{:<26}", count.product),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{} ads", count.ads),
                    Style::default().fg(theme.text_secondary),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(" Ads per Product "),
    );
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_reach_compacts_thousands() {
        assert_eq!(format_reach(182_000), "182k");
        assert_eq!(format_reach(950), "950");
    }
}
