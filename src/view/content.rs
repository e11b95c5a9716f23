//! Album grid and track list rendering

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::catalog::Album;
use crate::model::ViewState;
use super::layout::ScreenLayout;
use super::utils::{calculate_num_width, truncate_string};

pub fn render_album_grid(frame: &mut Frame, layout: &ScreenLayout, state: &ViewState) {
    let palette = state.palette;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Albums ")
        .border_style(Style::default().fg(palette.dim));
    frame.render_widget(block, layout.grid);

    let visible = state.paging.visible(state.catalog.len());
    if visible.is_empty() {
        let empty = Paragraph::new("No albums on this page")
            .style(Style::default().fg(palette.dim))
            .block(Block::default().padding(Padding::uniform(1)));
        frame.render_widget(empty, layout.grid);
        return;
    }

    for (slot, index) in visible.enumerate() {
        let (Some(cell), Some(album)) = (layout.album_cells.get(slot), state.catalog.album(index)) else {
            continue;
        };
        render_album_cell(frame, *cell, slot, index, album, state);
    }
}

fn render_album_cell(
    frame: &mut Frame,
    area: Rect,
    slot: usize,
    index: usize,
    album: &Album,
    state: &ViewState,
) {
    let palette = state.palette;
    let is_selected = state.session.selected_album == Some(index);
    let is_hovered = state.ui.hovered_album == Some(index);
    let is_playing = is_selected && state.session.is_playing;

    let border_style = if is_selected {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", slot + 1));
    if is_hovered {
        block = block.style(Style::default().bg(palette.highlight));
    }

    let width = usize::from(area.width.saturating_sub(2));
    let track_summary = match album.tracks.len() {
        0 => "no tracks".to_string(),
        1 => "1 track".to_string(),
        n => format!("{n} tracks"),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            truncate_string(&album.title, width),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_string(&album.artist, width),
            Style::default().fg(palette.text),
        )),
        Line::from(Span::styled(track_summary, Style::default().fg(palette.dim))),
    ];
    if is_playing {
        lines.push(Line::from(Span::styled(
            "♪ playing",
            Style::default().fg(palette.playing).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_track_list(frame: &mut Frame, layout: &ScreenLayout, state: &ViewState) {
    let palette = state.palette;
    let album = state.session.selected_album.and_then(|i| state.catalog.album(i));

    let title = match album {
        Some(album) => format!(" {} · {} ", album.title, album.artist),
        None => " Tracks ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(palette.dim));

    let Some(album) = album else {
        let hint = Paragraph::new("Click an album or press 1-9 to pick one")
            .style(Style::default().fg(palette.dim))
            .block(block.padding(Padding::horizontal(1)));
        frame.render_widget(hint, layout.tracks);
        return;
    };
    frame.render_widget(block, layout.tracks);

    if album.tracks.is_empty() {
        let empty = Paragraph::new("No tracks available").style(Style::default().fg(palette.dim));
        frame.render_widget(empty, layout.now_playing);
        return;
    }

    if let Some(track) = state.session.playing_track.and_then(|i| album.track(i)) {
        let prefix = if state.session.is_playing { "Now playing: " } else { "Stopped: " };
        let banner = Paragraph::new(Line::from(vec![
            Span::styled(prefix, Style::default().fg(palette.dim)),
            Span::styled(
                track.name.as_str(),
                Style::default().fg(palette.playing).add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(banner, layout.now_playing);
    }

    let num_width = calculate_num_width(album.tracks.len());
    for (index, row) in &layout.track_rows {
        let Some(track) = album.track(*index) else {
            continue;
        };
        let unusable = state.unusable_tracks.contains(index);
        let is_current = state.session.playing_track == Some(*index);

        let style = if unusable {
            Style::default().fg(palette.dim).add_modifier(Modifier::CROSSED_OUT)
        } else if is_current {
            Style::default().fg(palette.playing).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        let marker = if is_current && state.session.is_playing { "▶" } else { " " };
        let name_width = usize::from(row.width).saturating_sub(num_width + 4);
        let text = format!(
            "{marker} {:>num_width$}. {}",
            index + 1,
            truncate_string(&track.name, name_width)
        );

        frame.render_widget(Paragraph::new(text).style(style), *row);
    }
}
