//! Popup input handlers.

use crossterm::event::{KeyCode, KeyEvent};

use crate::export::brief;
use crate::tui::{AppState, PopupType};

/// Handles input while a popup is open.
pub fn handle_popup_input(state: &mut AppState, key: KeyEvent) {
    let Some(popup) = state.active_popup.clone() else {
        return;
    };

    match popup {
        PopupType::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                state.active_popup = None;
            }
            KeyCode::Up | KeyCode::Char('k') => state.help.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => state.help.scroll_down(),
            _ => {}
        },
        PopupType::AdDetail(id) => match key.code {
            KeyCode::Esc => {
                state.active_popup = None;
            }
            KeyCode::Char('y') => {
                let text = state
                    .data
                    .ads
                    .iter()
                    .find(|a| a.id == id)
                    .map(brief::format_ad_brief);
                if let Some(text) = text {
                    copy_to_clipboard(state, text, "Ad brief");
                }
            }
            _ => {}
        },
        PopupType::ScriptDetail(id) => match key.code {
            KeyCode::Esc => {
                state.active_popup = None;
            }
            KeyCode::Char('y') => {
                let text = state.find_script(&id).map(brief::format_script_brief);
                if let Some(text) = text {
                    copy_to_clipboard(state, text, "Script brief");
                }
            }
            _ => {}
        },
    }
}

/// Places text on the system clipboard and reports the outcome.
fn copy_to_clipboard(state: &mut AppState, text: String, what: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => state.set_status(format!("{} copied to clipboard", what)),
        Err(e) => state.set_error(format!("Failed to copy to clipboard: {e}")),
    }
}
