//! Overlay rendering (error notification, help popup)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::ViewState;
use super::utils::centered_rect;

pub fn render_error_notification(frame: &mut Frame, state: &ViewState) {
    let Some(ref error_msg) = state.ui.error_message else {
        return;
    };
    let area = frame.area();

    // Fixed width popup (responsive to screen size)
    let popup_width = 52.min(area.width.saturating_sub(4));
    let inner_width = popup_width.saturating_sub(4).max(1);

    // Calculate how many lines the error message will take when wrapped
    let error_line_count = ((error_msg.chars().count() as f32) / f32::from(inner_width)).ceil() as u16;
    let popup_height = (2 + error_line_count.max(1)).min(area.height.saturating_sub(4));

    let popup_area = centered_rect(area, popup_width, popup_height);

    // Clear the area behind the popup first
    frame.render_widget(Clear, popup_area);

    let title = match state.ui.error_logged_at {
        Some(at) => format!(" {} · Error (Esc to dismiss) ", at.format("%H:%M:%S")),
        None => " Error (Esc to dismiss) ".to_string(),
    };

    let error_widget = Paragraph::new(error_msg.as_str())
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(title)
                .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(error_widget, popup_area);
}

pub fn render_help_popup(frame: &mut Frame, state: &ViewState) {
    let area = frame.area();
    let palette = state.palette;

    let keybindings = [
        ("", "── Browsing ──"),
        ("Click album / 1-9", "Select album"),
        ("← / → PgUp / PgDn", "Previous / next page"),
        ("", ""),
        ("", "── Playback ──"),
        ("Click track", "Play track (click again to pause)"),
        ("Space", "Play / Pause"),
        ("Enter", "Replay current track"),
        ("S", "Stop"),
        ("N / P", "Next / previous track"),
        ("L", "Toggle loop"),
        ("R", "Toggle shuffle"),
        ("+ / -", "Volume up / down"),
        ("", ""),
        ("", "── General ──"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_height = (keybindings.len() as u16 + 2).min(area.height.saturating_sub(4));
    let popup_area = centered_rect(area, 62, popup_height);

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^58}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>20}", key),
                        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(palette.text)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
