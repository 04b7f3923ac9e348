use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;

use crate::score::{score_category, score_total};
use crate::state::AppState;

pub fn draw_results(f: &mut Frame, area: Rect, state: &AppState) {
    let total = score_total(&state.dataset, &state.answers);

    let mut constraints = vec![Constraint::Length(7)];
    for _ in &state.dataset.categories {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut header_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Results",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("  Total: {} points", total.points)),
    ];
    match total.description {
        Some(ref description) => {
            header_lines.push(Line::from(Span::styled(
                format!("  {}", description),
                Style::default().fg(Color::Green),
            )));
        }
        None => {
            header_lines.push(Line::from(Span::styled(
                "  (no matching outcome)",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    header_lines.push(Line::from(""));
    header_lines.push(Line::from(Span::styled(
        "  By category",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    f.render_widget(Paragraph::new(header_lines), rows[0]);

    for (i, category) in state.dataset.categories.iter().enumerate() {
        let rect = rows[1 + i];
        if rect.height < 3 {
            continue;
        }
        let score = score_category(&state.dataset, &state.answers, category);

        // Name left, rounded percentage right
        let pct_text = format!("{}%", score.percentage.round() as i64);
        let name_width = (rect.width as usize).saturating_sub(pct_text.len() + 6);
        let name: String = category.name.chars().take(name_width).collect();
        let padding = (rect.width as usize)
            .saturating_sub(2 + name.len() + pct_text.len() + 4);
        let name_line = Line::from(vec![
            Span::raw("  "),
            Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(padding)),
            Span::raw(pct_text),
        ]);
        f.render_widget(
            Paragraph::new(name_line),
            Rect::new(rect.x, rect.y, rect.width, 1),
        );

        let gauge_rect = Rect::new(
            rect.x + 2,
            rect.y + 1,
            rect.width.saturating_sub(4),
            1,
        );
        let gauge = Gauge::default()
            .ratio((score.percentage / 100.0).clamp(0.0, 1.0))
            .label("")
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Rgb(40, 40, 40)));
        f.render_widget(gauge, gauge_rect);

        let points_line = Line::from(Span::styled(
            format!("  {} of {} points", score.points, score.max_points),
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(
            Paragraph::new(points_line),
            Rect::new(rect.x, rect.y + 2, rect.width, 1),
        );
    }

    let hints = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" restart   "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" quit"),
    ]);
    let keybar_rect = rows[rows.len() - 1];
    f.render_widget(
        Paragraph::new(hints).style(Style::default().bg(Color::Rgb(20, 20, 20))),
        keybar_rect,
    );
}
