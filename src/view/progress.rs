//! Transport bar rendering (buttons, mode indicators, volume gauge)

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::model::{SessionState, ViewState};
use super::layout::{ScreenLayout, TransportButton};
use super::utils::format_volume;

pub fn render_transport(frame: &mut Frame, layout: &ScreenLayout, state: &ViewState) {
    let palette = state.palette;
    let session = &state.session;

    let status_text = match session.state {
        SessionState::Idle => " No album selected ",
        SessionState::AlbumSelected => " Ready ",
        SessionState::Playing => " ▶ Playing ",
        SessionState::Stopped => " ⏸ Paused ",
    };
    let mode_text = format!(" Mode: {} | Vol: {} ", session.mode.label(), format_volume(session.volume));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(status_text)
        .title_bottom(Line::from(mode_text).right_aligned())
        .border_style(Style::default().fg(palette.dim));
    frame.render_widget(block, layout.transport);

    for (button, area) in &layout.buttons {
        let active = match button {
            TransportButton::Play => session.is_playing,
            TransportButton::Pause => session.state == SessionState::Stopped,
            TransportButton::Loop => session.mode.is_loop(),
            TransportButton::Shuffle => session.mode.is_shuffle(),
            _ => false,
        };
        let style = if active {
            Style::default()
                .fg(Color::Black)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text).bg(palette.highlight)
        };
        let widget = Paragraph::new(button.label())
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(widget, *area);
    }

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.accent).bg(palette.highlight))
        .ratio(f64::from(session.volume).clamp(0.0, 1.0))
        .label(format!("Volume {}", format_volume(session.volume)));
    frame.render_widget(gauge, layout.volume_gauge);
}
