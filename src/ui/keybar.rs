use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, InputMode};

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let next_action = if state.is_last_question() {
        "finish"
    } else {
        "next"
    };

    let bindings: Vec<(&str, &str)> = match state.input_mode {
        InputMode::NumberInput => vec![
            ("0-9", "answer"),
            ("←", "back"),
            ("Enter/→", next_action),
            ("Esc", "quit"),
        ],
        InputMode::ChoiceSelect => vec![
            ("↑/↓", "move"),
            ("Space", "select"),
            ("←", "back"),
            ("Enter/→", next_action),
            ("Esc", "quit"),
        ],
    };

    let gate_open = state.can_advance();

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        // The advance binding is dimmed while the gate is closed
        let key_style = if *action == next_action && !gate_open {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(key.to_string(), key_style));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
