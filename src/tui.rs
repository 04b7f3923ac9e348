use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use crate::state::{AppState, Dialog, InputMode, Screen};

pub fn run_tui(mut state: AppState) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let result = main_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            if let Event::Key(key) = event::read().map_err(|e| format!("Read error: {}", e))? {
                handle_key(key, state);
            }
        }
    }

    Ok(())
}

fn handle_key(key: KeyEvent, state: &mut AppState) {
    // Dialog keys take priority over the screen underneath
    if state.has_dialog() {
        handle_dialog_key(key, state);
        return;
    }

    match state.screen {
        Screen::Working => handle_working_key(key, state),
        Screen::Results => handle_results_key(key, state),
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) {
    let Some(dialog) = state.top_dialog().cloned() else {
        return;
    };

    match dialog {
        Dialog::ConfirmQuit => match key.code {
            KeyCode::Enter => {
                state.pop_dialog();
                state.should_quit = true;
            }
            KeyCode::Esc => {
                state.pop_dialog();
            }
            _ => {}
        },
    }
}

fn handle_working_key(key: KeyEvent, state: &mut AppState) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('q')) {
        state.push_dialog(Dialog::ConfirmQuit);
        return;
    }

    match state.input_mode {
        InputMode::NumberInput => match key.code {
            KeyCode::Char(c) if !ctrl && (c.is_ascii_digit() || c == '-') => {
                state.number_input.push(c);
                let raw = state.number_input.clone();
                state.record_answer(state.current_index, raw);
            }
            KeyCode::Backspace => {
                state.number_input.pop();
                let raw = state.number_input.clone();
                state.record_answer(state.current_index, raw);
            }
            _ => handle_navigation_key(key, state),
        },
        InputMode::ChoiceSelect => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if state.choice_cursor > 0 {
                    state.choice_cursor -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = state.choice_count();
                if count > 0 && state.choice_cursor + 1 < count {
                    state.choice_cursor += 1;
                }
            }
            KeyCode::Char(' ') => {
                state.select_choice(state.choice_cursor);
            }
            _ => handle_navigation_key(key, state),
        },
    }
}

fn handle_navigation_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Left => state.retreat(),
        KeyCode::Right | KeyCode::Enter => {
            if state.can_advance() {
                state.advance();
                if state.completed {
                    state.screen = Screen::Results;
                }
            }
        }
        _ => {}
    }
}

fn handle_results_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('r') => state.restart(),
        KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc => {
            state.should_quit = true;
        }
        _ => {}
    }
}
