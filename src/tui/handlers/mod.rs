//! Keyboard input handlers for the dashboard.

pub mod popups;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::export;
use crate::tui::board::BoardEvent;
use crate::tui::component::Component;
use crate::tui::{AppState, PopupType, Tab};

/// Handles a key event against the dashboard state.
///
/// Returns `true` when the application should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Popups swallow all input while open.
    if state.active_popup.is_some() {
        popups::handle_popup_input(state, key);
        return Ok(false);
    }

    // Global keys first.
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('?') => {
            state.help.scroll_offset = 0;
            state.active_popup = Some(PopupType::Help);
            return Ok(false);
        }
        KeyCode::Char('s') => {
            state.open_setup = true;
            return Ok(false);
        }
        KeyCode::Tab => {
            state.tab = state.tab.next();
            state.clear_messages();
            return Ok(false);
        }
        KeyCode::BackTab => {
            state.tab = state.tab.previous();
            state.clear_messages();
            return Ok(false);
        }
        KeyCode::Char(c @ '1'..='5') => {
            state.tab = Tab::ALL[(c as usize) - ('1' as usize)];
            state.clear_messages();
            return Ok(false);
        }
        _ => {}
    }

    match state.tab {
        Tab::Overview => {}
        Tab::Ads => handle_ads_input(state, key),
        Tab::Scripts => handle_scripts_input(state, key),
        Tab::Board => handle_board_input(state, key),
        Tab::Exports => handle_exports_input(state, key)?,
    }

    Ok(false)
}

fn handle_ads_input(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.ads_gallery.select_shift(&state.data.ads, -1),
        KeyCode::Down | KeyCode::Char('j') => state.ads_gallery.select_shift(&state.data.ads, 1),
        KeyCode::Char('f') => {
            state.ads_gallery.cycle_filter(&state.data.ads);
            state.set_status(format!("Filter: {}", state.ads_gallery.filter.label()));
        }
        KeyCode::Enter => {
            if let Some(idx) = state.ads_gallery.selected_index(&state.data.ads) {
                let id = state.data.ads[idx].id.clone();
                state.active_popup = Some(PopupType::AdDetail(id));
            }
        }
        _ => {}
    }
}

fn handle_scripts_input(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.scripts_gallery.select_shift(&state.data.scripts, -1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.scripts_gallery.select_shift(&state.data.scripts, 1);
        }
        KeyCode::Char('f') => {
            state.scripts_gallery.cycle_filter(&state.data.scripts);
            state.set_status(format!("Filter: {}", state.scripts_gallery.filter.label()));
        }
        KeyCode::Enter => {
            if let Some(idx) = state.scripts_gallery.selected_index(&state.data.scripts) {
                let id = state.data.scripts[idx].id.clone();
                state.active_popup = Some(PopupType::ScriptDetail(id));
            }
        }
        _ => {}
    }
}

fn handle_board_input(state: &mut AppState, key: KeyEvent) {
    if let Some(event) = state.board.handle_input(key) {
        match event {
            BoardEvent::Moved { id, to } => {
                let product = state
                    .board
                    .scripts()
                    .iter()
                    .find(|s| s.id == id)
                    .map_or_else(|| id.clone(), |s| s.product.clone());
                state.set_status(format!("Moved \"{}\" to {}", product, to));
            }
            BoardEvent::PickedUp(_) => {
                state.set_status("Carrying card - pick a lane and press Space");
            }
            BoardEvent::CarryCleared => state.set_status("Carry cancelled"),
            BoardEvent::OpenDetail(id) => {
                state.active_popup = Some(PopupType::ScriptDetail(id));
            }
        }
    }
}

fn handle_exports_input(state: &mut AppState, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('e') {
        let dir = state.config.output.export_dir.clone();
        let result = match state.config.output.format {
            crate::models::ExportFormat::Csv => {
                export::export_csv(&state.data.ads, &state.data.scripts, &dir)
                    .map(|files| format!("Exported {} files to {}", files.len(), dir.display()))
            }
            crate::models::ExportFormat::Json => {
                export::export_json(&state.data.ads, &state.data.scripts, &dir)
                    .map(|path| format!("Exported {}", path.display()))
            }
        };
        match result {
            Ok(message) => state.set_status(message),
            Err(e) => state.set_error(format!("Export failed: {e}")),
        }
    }
    Ok(())
}
