//! Application flow: switching between the dashboard and the setup wizard.

use anyhow::Result;
use crossterm::event::{self, Event};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::data::SampleData;
use crate::tui::{self, DashboardOutcome};

/// Runs the application: dashboard and wizard alternate until the user quits.
///
/// The sample catalogue is rebuilt for every dashboard session, so board
/// moves from a previous session are gone, mirroring the demo's
/// reset-on-reload behavior.
pub fn run(mut config: Config, start_in_setup: bool) -> Result<()> {
    let mut in_setup = start_in_setup;

    loop {
        if in_setup {
            run_setup_wizard_terminal(&mut config)?;
            in_setup = false;
        } else {
            let data = SampleData::build();
            let mut state = tui::AppState::new(data, config.clone());

            let mut terminal = tui::setup_terminal()?;
            let result = tui::run_tui(&mut state, &mut terminal);
            tui::restore_terminal(terminal)?;

            match result? {
                DashboardOutcome::Quit => return Ok(()),
                DashboardOutcome::OpenSetup => in_setup = true,
            }
        }
    }
}

/// Runs the setup wizard and saves the configuration on completion.
///
/// Returning from this function drops the wizard state, and with it any
/// in-flight simulated scrape or generation run.
pub fn run_setup_wizard_terminal(config: &mut Config) -> Result<()> {
    let mut terminal = tui::setup_terminal()?;
    let mut wizard_state = tui::wizard::SetupWizardState::new(config);
    let theme_mode = config.ui.theme_mode;

    let run_result = (|| -> Result<()> {
        loop {
            let theme = tui::Theme::from_mode(theme_mode);
            terminal.draw(|f| tui::wizard::render(f, &wizard_state, &theme))?;

            // Poll for events with timeout
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if wizard_state.handle_input(key, Instant::now()) {
                        return Ok(());
                    }
                }
            }

            // Advance pending simulations from the loop, never from timers.
            wizard_state.tick(Instant::now());
            if wizard_state.is_complete {
                return Ok(());
            }
        }
    })();

    tui::restore_terminal(terminal)?;
    run_result?;

    if wizard_state.is_complete {
        wizard_state.apply_to_config(config);
        config.save()?;
    }

    Ok(())
}
