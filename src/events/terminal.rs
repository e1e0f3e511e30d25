use crate::state::{State, StateError, View};
use anyhow::{anyhow, Result};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel. The polling thread
/// owns the only sender, so the channel closes when the thread stops.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    /// Fails once the polling thread has stopped.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        let event = self
            .rx
            .recv()
            .map_err(|_| anyhow!("Terminal event polling stopped"))?;
        match event {
            Event::Input(key) => Ok(handle_key(state, key)?),
            Event::Tick => Ok(true),
        }
    }
}

/// Apply a single key press to the state. Returns false if exit was
/// requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> Result<bool, StateError> {
    if key.kind != KeyEventKind::Press {
        return Ok(true);
    }
    let view = state.current_view();
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return Ok(false);
        }
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
            debug!("Processing toggle log event '{:?}'...", key);
            state.toggle_log();
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) if view == View::Login => {
            debug!("Processing open register event '{:?}'...", key);
            state.open_register();
        }
        (KeyCode::Esc, _) => {
            debug!("Processing view navigation (Esc) event '{:?}'...", key);
            state.pop_view();
        }
        (KeyCode::Char('q'), KeyModifiers::NONE) if !view.has_form() => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return Ok(false);
        }
        (KeyCode::Tab, _) if view.has_form() => {
            state.focus_next_field()?;
        }
        (KeyCode::BackTab, _) if view.has_form() => {
            state.focus_prev_field()?;
        }
        (KeyCode::Enter, _) if view.has_form() => {
            debug!("Processing submit form event '{:?}'...", key);
            state.submit_active_form()?;
        }
        (KeyCode::Backspace, _) if view.has_form() => {
            state.clear_status();
            state.backspace()?;
        }
        (KeyCode::Char(c), modifiers) if view.has_form() && is_text_input(modifiers) => {
            state.clear_status();
            state.input_char(c)?;
        }
        _ => {
            debug!("Skipping processing of terminal event '{:?}'...", key);
        }
    }
    Ok(true)
}

/// Plain and shifted characters are text. AltGr arrives as Ctrl+Alt on some
/// platforms and composes characters such as `@` on many layouts.
///
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
    modifiers.difference(KeyModifiers::SHIFT).is_empty() || modifiers.contains(altgr)
}
