//! Detail popups for ad variations and UGC scripts.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::{AdVariation, UgcScript};
use crate::tui::Theme;

/// Computes a centered rectangle taking the given percentages of `area`.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn count_line<'a>(
    label: &'a str,
    text: &'a str,
    count: usize,
    limit: usize,
    theme: &Theme,
) -> Vec<Line<'a>> {
    // Over-limit counts use the error color; the counts shown are the
    // authored values, not recomputed lengths.
    let count_color = if count > limit {
        theme.error
    } else {
        theme.success
    };
    vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", label),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({}/{})", count, limit),
                Style::default().fg(count_color),
            ),
        ]),
        Line::from(Span::styled(text, Style::default().fg(theme.text))),
        Line::from(""),
    ]
}

/// Renders the ad variation detail popup.
pub fn render_ad_detail(f: &mut Frame, ad: &AdVariation, theme: &Theme) {
    let area = centered_rect(70, 80, f.area());
    f.render_widget(Clear, area);

    let limits = ad.platform.char_limits();
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(
                ad.product.clone(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", ad.sku),
                Style::default().fg(theme.text_muted),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} - {}", ad.platform, ad.angle),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled(
                format!("  [{}]", ad.status),
                Style::default().fg(theme.status_color(ad.status)),
            ),
            Span::styled(
                format!("  created {}", ad.created),
                Style::default().fg(theme.text_muted),
            ),
        ]),
        Line::from(""),
    ];

    lines.extend(count_line(
        "Headline",
        &ad.headline,
        ad.headline_chars,
        limits.headline,
        theme,
    ));
    lines.extend(count_line("Body", &ad.body, ad.body_chars, limits.body, theme));
    lines.extend(count_line(
        "Description",
        &ad.description,
        ad.description_chars,
        limits.description,
        theme,
    ));
    lines.push(Line::from(vec![
        Span::styled(
            "CTA ",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(ad.cta.as_str(), Style::default().fg(theme.accent)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "y: copy brief | Esc: close",
        Style::default().fg(theme.text_muted),
    )));

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.surface))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Ad Detail "),
        );
    f.render_widget(popup, area);
}

/// Renders the UGC script detail popup.
pub fn render_script_detail(f: &mut Frame, script: &UgcScript, theme: &Theme) {
    let area = centered_rect(70, 80, f.area());
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(
                script.product.clone(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} - {}", script.script_type, script.duration),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled(
                format!("  [{}]", script.status),
                Style::default().fg(theme.status_color(script.status)),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "HOOK ",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(script.hook.as_str(), Style::default().fg(theme.text)),
        ]),
        Line::from(""),
    ];

    for (i, scene) in script.scenes.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("Scene {} ", i + 1),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(scene.timestamp(), Style::default().fg(theme.accent)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", scene.direction),
            Style::default().fg(theme.text_secondary),
        )));
        lines.push(Line::from(Span::styled(
            format!("  VO: {}", scene.voiceover),
            Style::default().fg(theme.text),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(
            "CTA ",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(script.cta.as_str(), Style::default().fg(theme.accent)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "y: copy brief | Esc: close",
        Style::default().fg(theme.text_muted),
    )));

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(theme.surface))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .title(" Script Detail "),
        );
    f.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(70, 80, parent);
        assert!(rect.x >= parent.x);
        assert!(rect.y >= parent.y);
        assert!(rect.right() <= parent.right());
        assert!(rect.bottom() <= parent.bottom());
    }
}
