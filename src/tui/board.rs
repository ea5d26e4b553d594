//! Status board for UGC scripts.
//!
//! Groups a session-local copy of the script list into four status lanes and
//! lets the user move a card between lanes with a keyboard pick-up/drop
//! gesture: Space lifts the selected card, left/right choose the target lane
//! (which renders highlighted while a card is carried), Space or Enter drops
//! it, Esc cancels. Moves only touch the board's own copy; nothing is
//! persisted and the board reseeds from the catalogue on every launch.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Status, UgcScript};
use crate::tui::component::Component;
use crate::tui::Theme;

/// Events emitted by the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A card was dropped into a new lane
    Moved {
        /// Record id that moved
        id: String,
        /// The lane it now belongs to
        to: Status,
    },
    /// A card was lifted
    PickedUp(String),
    /// The carry was cancelled or the drop was a no-op
    CarryCleared,
    /// The user asked to open the selected card's detail view
    OpenDetail(String),
}

/// Board state: the working copy plus cursor and carry state.
#[derive(Debug, Clone)]
pub struct BoardState {
    scripts: Vec<UgcScript>,
    /// Index into [`Status::ALL`] of the focused lane
    pub focused_lane: usize,
    /// Per-lane selected card index
    selected: [usize; 4],
    /// Id of the card currently being carried, if any
    carrying: Option<String>,
}

impl BoardState {
    /// Creates a board seeded with its own copy of the script list.
    #[must_use]
    pub fn new(scripts: Vec<UgcScript>) -> Self {
        Self {
            scripts,
            focused_lane: 0,
            selected: [0; 4],
            carrying: None,
        }
    }

    /// The board's working copy, in original order.
    #[must_use]
    pub fn scripts(&self) -> &[UgcScript] {
        &self.scripts
    }

    /// The records in one lane, preserving list order.
    #[must_use]
    pub fn lane(&self, status: Status) -> Vec<&UgcScript> {
        self.scripts.iter().filter(|s| s.status == status).collect()
    }

    /// The status of the focused lane.
    #[must_use]
    pub fn focused_status(&self) -> Status {
        Status::ALL[self.focused_lane]
    }

    /// The id of the carried card, if a carry is pending.
    #[must_use]
    pub fn carrying(&self) -> Option<&str> {
        self.carrying.as_deref()
    }

    /// The selected card in the focused lane.
    #[must_use]
    pub fn selected_script(&self) -> Option<&UgcScript> {
        let lane = self.lane(self.focused_status());
        let idx = self.selected[self.focused_lane].min(lane.len().saturating_sub(1));
        lane.get(idx).copied()
    }

    /// Moves lane focus one step left or right, clamped to the board edges.
    pub fn focus_shift(&mut self, delta: isize) {
        let lanes = Status::ALL.len() as isize;
        let next = (self.focused_lane as isize + delta).clamp(0, lanes - 1);
        self.focused_lane = next as usize;
        self.clamp_selection();
    }

    /// Moves the selection within the focused lane.
    pub fn select_shift(&mut self, delta: isize) {
        let len = self.lane(self.focused_status()).len();
        if len == 0 {
            return;
        }
        let current = self.selected[self.focused_lane].min(len - 1) as isize;
        self.selected[self.focused_lane] = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.lane(self.focused_status()).len();
        let slot = &mut self.selected[self.focused_lane];
        if len == 0 {
            *slot = 0;
        } else if *slot >= len {
            *slot = len - 1;
        }
    }

    /// Lifts the selected card in the focused lane.
    ///
    /// Returns the lifted id, or `None` for an empty lane.
    pub fn pick_up(&mut self) -> Option<String> {
        let id = self.selected_script().map(|s| s.id.clone())?;
        self.carrying = Some(id.clone());
        Some(id)
    }

    /// Drops the carried card into the focused lane.
    ///
    /// A drop with nothing carried is a no-op. Dropping a card onto the lane
    /// it already belongs to clears the carry without changing anything.
    /// Otherwise the card's status becomes the lane's status and the board
    /// re-groups. Last assignment wins.
    pub fn drop_carried(&mut self) -> Option<BoardEvent> {
        let id = self.carrying.take()?;
        let target = self.focused_status();

        let script = self.scripts.iter_mut().find(|s| s.id == id)?;
        if script.status == target {
            return Some(BoardEvent::CarryCleared);
        }

        script.status = target;
        self.clamp_selection();
        Some(BoardEvent::Moved { id, to: target })
    }

    /// Cancels a pending carry.
    pub fn cancel_carry(&mut self) -> bool {
        self.carrying.take().is_some()
    }
}

impl Component for BoardState {
    type Event = BoardEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<BoardEvent> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.focus_shift(-1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.focus_shift(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_shift(-1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_shift(1);
                None
            }
            KeyCode::Char(' ') => {
                if self.carrying.is_some() {
                    self.drop_carried()
                } else {
                    self.pick_up().map(BoardEvent::PickedUp)
                }
            }
            KeyCode::Enter => {
                if self.carrying.is_some() {
                    self.drop_carried()
                } else {
                    self.selected_script()
                        .map(|s| BoardEvent::OpenDetail(s.id.clone()))
                }
            }
            KeyCode::Esc => {
                if self.cancel_carry() {
                    Some(BoardEvent::CarryCleared)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lanes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); 4])
            .split(area);

        for (i, status) in Status::ALL.iter().enumerate() {
            let records = self.lane(*status);
            let focused = i == self.focused_lane;
            // Drag-over highlight: the focused lane lights up while a card is
            // carried; moving focus away clears it.
            let border_color = if focused && self.carrying.is_some() {
                theme.accent
            } else if focused {
                theme.primary
            } else {
                theme.text_muted
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {} ({}) ", status.label(), records.len()))
                .title_style(Style::default().fg(theme.status_color(*status)));

            let selected_idx = self.selected[i].min(records.len().saturating_sub(1));
            let mut lines: Vec<Line> = Vec::new();
            for (j, script) in records.iter().enumerate() {
                let is_selected = focused && j == selected_idx && !records.is_empty();
                let is_carried = self.carrying.as_deref() == Some(script.id.as_str());

                let marker = if is_carried { "* " } else { "  " };
                let style = if is_selected {
                    Style::default()
                        .fg(theme.text)
                        .bg(theme.highlight_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_secondary)
                };

                lines.push(Line::from(vec![
                    Span::styled(marker.to_string(), Style::default().fg(theme.accent)),
                    Span::styled(script.product.clone(), style),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("    {} - {}", script.script_type, script.duration),
                    Style::default().fg(theme.text_muted),
                )));
                lines.push(Line::from(""));
            }

            let paragraph = Paragraph::new(lines).block(block);
            f.render_widget(paragraph, lanes[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleData;
    use std::collections::HashSet;

    fn board() -> BoardState {
        BoardState::new(SampleData::build().scripts)
    }

    fn focus_lane(board: &mut BoardState, status: Status) {
        let target = Status::ALL.iter().position(|s| *s == status).unwrap();
        while board.focused_lane != target {
            if board.focused_lane < target {
                board.focus_shift(1);
            } else {
                board.focus_shift(-1);
            }
        }
    }

    #[test]
    fn test_lanes_partition_the_record_set() {
        let board = board();
        let mut seen: HashSet<String> = HashSet::new();
        let mut total = 0;
        for status in Status::ALL {
            for script in board.lane(status) {
                assert_eq!(script.status, status);
                assert!(seen.insert(script.id.clone()), "duplicate in lanes");
                total += 1;
            }
        }
        assert_eq!(total, board.scripts().len());
    }

    #[test]
    fn test_drop_moves_record_between_lanes() {
        let mut board = board();
        focus_lane(&mut board, Status::Draft);
        let id = board.pick_up().expect("draft lane has cards");

        focus_lane(&mut board, Status::Ready);
        let event = board.drop_carried().expect("drop emits event");
        assert_eq!(
            event,
            BoardEvent::Moved {
                id: id.clone(),
                to: Status::Ready
            }
        );

        // The record left its old lane and landed in the new one.
        assert!(board.lane(Status::Draft).iter().all(|s| s.id != id));
        assert!(board.lane(Status::Ready).iter().any(|s| s.id == id));
        assert!(board.carrying().is_none());
    }

    #[test]
    fn test_drop_only_changes_the_moved_record() {
        let mut board = board();
        let before: Vec<(String, Status)> = board
            .scripts()
            .iter()
            .map(|s| (s.id.clone(), s.status))
            .collect();

        focus_lane(&mut board, Status::Review);
        let id = board.pick_up().unwrap();
        focus_lane(&mut board, Status::Exported);
        board.drop_carried();

        for (record_id, old_status) in before {
            let now = board
                .scripts()
                .iter()
                .find(|s| s.id == record_id)
                .unwrap()
                .status;
            if record_id == id {
                assert_eq!(now, Status::Exported);
            } else {
                assert_eq!(now, old_status);
            }
        }
    }

    #[test]
    fn test_drop_without_carry_is_noop() {
        let mut board = board();
        let before = board.scripts().to_vec();
        assert!(board.drop_carried().is_none());
        assert_eq!(board.scripts(), &before[..]);
    }

    #[test]
    fn test_drop_on_own_lane_is_noop() {
        let mut board = board();
        focus_lane(&mut board, Status::Draft);
        let id = board.pick_up().unwrap();
        let before = board.scripts().to_vec();

        let event = board.drop_carried().unwrap();
        assert_eq!(event, BoardEvent::CarryCleared);
        assert_eq!(board.scripts(), &before[..]);
        assert!(board.carrying().is_none());
        // The record is still in its original lane.
        assert!(board.lane(Status::Draft).iter().any(|s| s.id == id));
    }

    #[test]
    fn test_cancel_clears_carry_without_moving() {
        let mut board = board();
        focus_lane(&mut board, Status::Ready);
        board.pick_up().unwrap();
        let before = board.scripts().to_vec();

        assert!(board.cancel_carry());
        assert!(board.carrying().is_none());
        assert_eq!(board.scripts(), &before[..]);
        // A second cancel has nothing to clear.
        assert!(!board.cancel_carry());
    }

    #[test]
    fn test_last_assignment_wins() {
        let mut board = board();
        focus_lane(&mut board, Status::Draft);
        let id = board.pick_up().unwrap();
        focus_lane(&mut board, Status::Review);
        board.drop_carried();

        // Move the same card again; the later drop decides its lane.
        focus_lane(&mut board, Status::Review);
        let lane = board.lane(Status::Review);
        let pos = lane.iter().position(|s| s.id == id).unwrap();
        // Walk selection to the top, then down to the card.
        board.select_shift(-(lane.len() as isize));
        for _ in 0..pos {
            board.select_shift(1);
        }
        assert_eq!(board.pick_up().unwrap(), id);
        focus_lane(&mut board, Status::Exported);
        board.drop_carried();

        assert_eq!(
            board
                .scripts()
                .iter()
                .find(|s| s.id == id)
                .unwrap()
                .status,
            Status::Exported
        );
    }

    #[test]
    fn test_focus_clamps_at_edges() {
        let mut board = board();
        board.focus_shift(-3);
        assert_eq!(board.focused_lane, 0);
        board.focus_shift(10);
        assert_eq!(board.focused_lane, Status::ALL.len() - 1);
    }
}
