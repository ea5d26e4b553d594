//! Record galleries with status filtering.
//!
//! One gallery state instance backs the ads tab and another the scripts tab.
//! The gallery never owns records: it holds the filter and cursor, and is
//! handed the catalogue slice when rendering or resolving the selection.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{AdVariation, HasStatus, Status, StatusFilter, UgcScript};
use crate::tui::Theme;

/// Filter and cursor state for one gallery.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    /// Active status filter
    pub filter: StatusFilter,
    /// Selected position within the filtered view
    pub selected: usize,
}

impl GalleryState {
    /// Creates a gallery showing everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The filtered view: original indices paired with records.
    ///
    /// `All` yields the full list in original order; a status filter yields
    /// exactly the records with that status, order preserved.
    #[must_use]
    pub fn visible<'a, T: HasStatus>(&self, records: &'a [T]) -> Vec<(usize, &'a T)> {
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.filter.matches(r.status()))
            .collect()
    }

    /// Advances to the next filter and clamps the cursor.
    pub fn cycle_filter<T: HasStatus>(&mut self, records: &[T]) {
        self.filter = self.filter.next();
        let len = self.visible(records).len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Moves the cursor within the filtered view.
    pub fn select_shift<T: HasStatus>(&mut self, records: &[T], delta: isize) {
        let len = self.visible(records).len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected.min(len - 1) as isize;
        self.selected = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    /// Resolves the cursor to an original-list index.
    #[must_use]
    pub fn selected_index<T: HasStatus>(&self, records: &[T]) -> Option<usize> {
        let visible = self.visible(records);
        visible
            .get(self.selected.min(visible.len().saturating_sub(1)))
            .map(|(i, _)| *i)
    }
}

/// Renders the filter row shared by both galleries.
fn render_filter_row(f: &mut Frame, area: Rect, filter: StatusFilter, theme: &Theme) {
    let mut spans = vec![Span::styled("Filter: ", Style::default().fg(theme.primary))];
    let options = [
        StatusFilter::All,
        StatusFilter::Only(Status::Ready),
        StatusFilter::Only(Status::Review),
        StatusFilter::Only(Status::Draft),
        StatusFilter::Only(Status::Exported),
    ];
    for option in options {
        let style = if option == filter {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        spans.push(Span::styled(format!("[{}] ", option.label()), style));
    }
    spans.push(Span::styled(
        "(f cycles)",
        Style::default().fg(theme.text_muted),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the ad variation gallery.
pub fn render_ads_gallery(
    f: &mut Frame,
    area: Rect,
    ads: &[AdVariation],
    state: &GalleryState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    render_filter_row(f, chunks[0], state.filter, theme);

    let visible = state.visible(ads);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(format!(" Ad Variations ({}) ", visible.len()));

    let mut lines: Vec<Line> = Vec::new();
    for (pos, (_, ad)) in visible.iter().enumerate() {
        let is_selected = pos == state.selected.min(visible.len().saturating_sub(1));
        let name_style = if is_selected {
            Style::default()
                .fg(theme.text)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(vec![
            Span::styled("o ", Style::default().fg(theme.status_color(ad.status))),
            Span::styled(format!("{} ", ad.product), name_style),
            Span::styled(
                format!("[{} / {}] ", ad.platform, ad.angle),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled(
                ad.status.label().to_string(),
                Style::default().fg(theme.status_color(ad.status)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", ad.headline),
            Style::default().fg(theme.text_muted),
        )));
    }
    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No records match this filter.",
            Style::default().fg(theme.text_muted),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), chunks[1]);
}

/// Renders the UGC script gallery.
pub fn render_scripts_gallery(
    f: &mut Frame,
    area: Rect,
    scripts: &[UgcScript],
    state: &GalleryState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    render_filter_row(f, chunks[0], state.filter, theme);

    let visible = state.visible(scripts);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .title(format!(" UGC Scripts ({}) ", visible.len()));

    let mut lines: Vec<Line> = Vec::new();
    for (pos, (_, script)) in visible.iter().enumerate() {
        let is_selected = pos == state.selected.min(visible.len().saturating_sub(1));
        let name_style = if is_selected {
            Style::default()
                .fg(theme.text)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(vec![
            Span::styled("o ", Style::default().fg(theme.status_color(script.status))),
            Span::styled(format!("{} ", script.product), name_style),
            Span::styled(
                format!(
                    "[{} / {} / {} scenes] ",
                    script.script_type,
                    script.duration,
                    script.scenes.len()
                ),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled(
                script.status.label().to_string(),
                Style::default().fg(theme.status_color(script.status)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    \"{}\"", script.hook),
            Style::default().fg(theme.text_muted),
        )));
    }
    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No records match this filter.",
            Style::default().fg(theme.text_muted),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleData;

    #[test]
    fn test_all_filter_preserves_order_and_length() {
        let data = SampleData::build();
        let gallery = GalleryState::new();
        let visible = gallery.visible(&data.ads);
        assert_eq!(visible.len(), data.ads.len());
        for (pos, (idx, _)) in visible.iter().enumerate() {
            assert_eq!(pos, *idx);
        }
    }

    #[test]
    fn test_status_filter_selects_exact_subset() {
        let data = SampleData::build();
        for status in Status::ALL {
            let gallery = GalleryState {
                filter: StatusFilter::Only(status),
                selected: 0,
            };
            let visible = gallery.visible(&data.ads);
            assert!(visible.iter().all(|(_, ad)| ad.status == status));
            let expected = data.ads.iter().filter(|a| a.status == status).count();
            assert_eq!(visible.len(), expected);
            // Original order is preserved.
            let indices: Vec<usize> = visible.iter().map(|(i, _)| *i).collect();
            let mut sorted = indices.clone();
            sorted.sort_unstable();
            assert_eq!(indices, sorted);
        }
    }

    #[test]
    fn test_cycle_filter_clamps_selection() {
        let data = SampleData::build();
        let mut gallery = GalleryState::new();
        gallery.selected = data.ads.len() - 1;
        gallery.cycle_filter(&data.ads); // now Only(Ready), a shorter list
        let len = gallery.visible(&data.ads).len();
        assert!(gallery.selected < len);
    }

    #[test]
    fn test_selected_index_resolves_to_original_list() {
        let data = SampleData::build();
        let mut gallery = GalleryState {
            filter: StatusFilter::Only(Status::Ready),
            selected: 0,
        };
        gallery.select_shift(&data.ads, 1);
        let idx = gallery.selected_index(&data.ads).unwrap();
        assert_eq!(data.ads[idx].status, Status::Ready);
    }

    #[test]
    fn test_select_shift_on_empty_view() {
        let ads: Vec<AdVariation> = Vec::new();
        let mut gallery = GalleryState::new();
        gallery.select_shift(&ads, 1);
        assert_eq!(gallery.selected, 0);
        assert!(gallery.selected_index(&ads).is_none());
    }
}
