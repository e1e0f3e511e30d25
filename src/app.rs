use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::LogBuffer;
use crate::state::State;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
}

impl App {
    /// Start a new application according to the given configuration. Log
    /// records captured in `log` are shown in the log pane. Returns the
    /// result of the application execution.
    ///
    pub fn start(config: Config, log: LogBuffer) -> AppResult<()> {
        info!("Starting application...");
        let theme = config.theme()?;
        let mut state = State::new(config.authenticated, config.form_options(), theme)?;
        state.set_log(log);
        debug!(
            "Initial view {:?} with {:?} validation",
            state.current_view(),
            config.validation_mode
        );
        let mut app = App { state };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored even if the
    /// loop fails.
    ///
    fn start_ui(&mut self) -> AppResult<()> {
        debug!("Starting user interface on main thread...");
        enable_raw_mode()?;
        let mut stdout = stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode()?;
            return Err(e.into());
        }

        let result = self.run_loop(CrosstermBackend::new(stdout));

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        result
    }

    fn run_loop(&mut self, backend: CrosstermBackend<io::Stdout>) -> AppResult<()> {
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &self.state))?;
            let keep_running = terminal_event_handler
                .handle_next(&mut self.state)
                .map_err(|e| AppError::Terminal(e.to_string()))?;
            if !keep_running {
                debug!("Received application exit request.");
                break;
            }
        }
        terminal.show_cursor()?;
        Ok(())
    }
}
