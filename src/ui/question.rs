use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;

use crate::model::QuestionKind;
use crate::state::AppState;

pub fn draw_progress(f: &mut Frame, area: Rect, state: &AppState) {
    let gauge = Gauge::default()
        .ratio(state.progress())
        .label(format!(
            "{}/{}",
            state.current_index + 1,
            state.dataset.questions.len()
        ))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Rgb(40, 40, 40)));
    f.render_widget(gauge, area);
}

pub fn draw_question(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(question) = state.current_question() else {
        let p = Paragraph::new("No questions");
        f.render_widget(p, area);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    // Question header
    let header_width = (area.width as usize).saturating_sub(4);
    for (i, wline) in wrap_text(&question.text, header_width).iter().enumerate() {
        let prefix = if i == 0 {
            format!("  {}. ", question.id)
        } else {
            "     ".to_string()
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", prefix, wline),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(ref description) = question.description {
        lines.push(Line::from(""));
        for wline in wrap_text(description, header_width) {
            lines.push(Line::from(Span::styled(
                format!("  {}", wline),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    // Answer widget
    let qid = question.id;
    match &question.kind {
        QuestionKind::Number { min, max } => {
            lines.push(Line::from(""));

            let input = &state.number_input;

            // Input box: frame is W-4 wide, inner text area W-8
            let dashes = area.width.saturating_sub(6) as usize;
            let inner = area.width.saturating_sub(8) as usize;

            lines.push(Line::from(vec![
                Span::raw("  ┌"),
                Span::raw("─".repeat(dashes)),
                Span::raw("┐"),
            ]));

            if input.is_empty() {
                let placeholder = format!("Enter a number from {} to {}", min, max);
                let ph_len = placeholder.len().min(inner);
                let padding = inner.saturating_sub(ph_len);
                lines.push(Line::from(vec![
                    Span::raw("  │ "),
                    Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
                    Span::raw(" ".repeat(padding)),
                    Span::raw(" │"),
                ]));
            } else {
                // Digits are only appended or popped, so the cursor sits at the end
                let display_len = input.len().min(inner.saturating_sub(1));
                lines.push(Line::from(vec![
                    Span::raw("  │ "),
                    Span::styled(
                        input[..display_len].to_string(),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(" ", Style::default().fg(Color::Black).bg(Color::White)),
                    Span::raw(" ".repeat(inner.saturating_sub(display_len + 1))),
                    Span::raw(" │"),
                ]));
            }

            lines.push(Line::from(vec![
                Span::raw("  └"),
                Span::raw("─".repeat(dashes)),
                Span::raw("┘"),
            ]));

            if state.number_answer_out_of_range(qid) {
                lines.push(Line::from(Span::styled(
                    "  Please enter a number from 1 to 10",
                    Style::default().fg(Color::Red),
                )));
            }
        }
        QuestionKind::Radio { options } => {
            lines.push(Line::from(""));
            for (i, option) in options.iter().enumerate() {
                let is_selected = state.is_choice_selected(qid, &option.value);
                let on_cursor = i == state.choice_cursor;

                let radio = if is_selected { "(●)" } else { "( )" };
                let marker = if on_cursor { "▸" } else { " " };

                let style = if is_selected {
                    Style::default().fg(Color::Green)
                } else if on_cursor {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };

                // Prefix: " ▸ (●) " = 7 chars
                let prefix = format!(" {} {} ", marker, radio);
                let prefix_len = prefix.len();
                let text_width = (area.width as usize).saturating_sub(prefix_len + 2);
                let wrapped = wrap_text(&option.label, text_width);
                for (li, wline) in wrapped.iter().enumerate() {
                    if li == 0 {
                        lines.push(Line::from(vec![
                            Span::styled(prefix.clone(), style),
                            Span::styled(wline.clone(), style),
                        ]));
                    } else {
                        lines.push(Line::from(vec![
                            Span::raw(" ".repeat(prefix_len)),
                            Span::styled(wline.clone(), style),
                        ]));
                    }
                }
            }
        }
    }

    let widget = Paragraph::new(lines);
    f.render_widget(widget, area);
}

/// Wrap text to fit within `width` columns, breaking at word boundaries.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut result = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            result.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        result.push(current);
    }
    if result.is_empty() {
        result.push(String::new());
    }
    result
}
