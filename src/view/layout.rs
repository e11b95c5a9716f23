//! Screen layout shared by rendering and click resolution
//!
//! `ScreenLayout::compute` is the only place that decides where things are.
//! The renderer draws into these rects and the controller hit-tests against
//! the same rects, so a click always lands on what was drawn.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::ViewConfig;
use crate::model::ViewState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportButton {
    Play,
    Pause,
    Stop,
    Loop,
    Shuffle,
    VolumeDown,
    VolumeUp,
}

impl TransportButton {
    pub const ALL: [TransportButton; 7] = [
        Self::Play,
        Self::Pause,
        Self::Stop,
        Self::Loop,
        Self::Shuffle,
        Self::VolumeDown,
        Self::VolumeUp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Play => "▶ Play",
            Self::Pause => "⏸ Pause",
            Self::Stop => "■ Stop",
            Self::Loop => "↻ Loop",
            Self::Shuffle => "⤮ Shuffle",
            Self::VolumeDown => " - ",
            Self::VolumeUp => " + ",
        }
    }

    fn width(self) -> u16 {
        self.label().chars().count() as u16 + 2
    }
}

/// What a screen position resolves to before session state is applied
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hit {
    /// Cell slot on the current page, not yet an album index
    AlbumCell(usize),
    Track(usize),
    Button(TransportButton),
    /// Position along the volume gauge in `[0, 1]`
    Volume(f32),
    PreviousPage,
    NextPage,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenLayout {
    pub previous_page: Rect,
    pub page_label: Rect,
    pub next_page: Rect,
    pub grid: Rect,
    pub album_cells: Vec<Rect>,
    pub tracks: Rect,
    pub now_playing: Rect,
    /// Visible track rows as `(track index, row rect)`
    pub track_rows: Vec<(usize, Rect)>,
    pub transport: Rect,
    pub buttons: Vec<(TransportButton, Rect)>,
    pub volume_gauge: Rect,
}

impl ScreenLayout {
    /// `focus` is the track that must stay visible when the list scrolls.
    pub fn compute(area: Rect, config: &ViewConfig, track_count: usize, focus: Option<usize>) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + paging
                Constraint::Min(0),    // Grid + tracks
                Constraint::Length(3), // Transport
            ])
            .split(area);

        let header_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(5),
            ])
            .split(rows[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Album grid
                Constraint::Percentage(40), // Track list
            ])
            .split(rows[1]);

        let album_cells = grid_cells(
            body[0].inner(Margin::new(1, 1)),
            config.grid_columns,
            config.grid_rows,
        );

        let tracks_inner = body[1].inner(Margin::new(1, 1));
        let now_playing = Rect { height: tracks_inner.height.min(1), ..tracks_inner };
        let list_top = tracks_inner.y.saturating_add(2);
        let list_height = tracks_inner.bottom().saturating_sub(list_top);
        let track_rows = track_rows(tracks_inner, list_top, list_height, track_count, focus);

        let (buttons, volume_gauge) = transport_row(rows[2].inner(Margin::new(1, 1)));

        Self {
            previous_page: header_chunks[0],
            page_label: header_chunks[1],
            next_page: header_chunks[2],
            grid: body[0],
            album_cells,
            tracks: body[1],
            now_playing,
            track_rows,
            transport: rows[2],
            buttons,
            volume_gauge,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let position = Position::new(column, row);

        if self.previous_page.contains(position) {
            return Some(Hit::PreviousPage);
        }
        if self.next_page.contains(position) {
            return Some(Hit::NextPage);
        }
        if let Some(slot) = self.album_cells.iter().position(|cell| cell.contains(position)) {
            return Some(Hit::AlbumCell(slot));
        }
        if let Some((track, _)) = self.track_rows.iter().find(|(_, rect)| rect.contains(position)) {
            return Some(Hit::Track(*track));
        }
        if let Some((button, _)) = self.buttons.iter().find(|(_, rect)| rect.contains(position)) {
            return Some(Hit::Button(*button));
        }
        if self.volume_gauge.contains(position) {
            let span = self.volume_gauge.width.saturating_sub(1).max(1);
            let offset = column - self.volume_gauge.x;
            return Some(Hit::Volume(f32::from(offset) / f32::from(span)));
        }
        None
    }
}

pub fn render_header(frame: &mut Frame, layout: &ScreenLayout, state: &ViewState) {
    let total = state.catalog.len();
    let page = state.paging.page_index();
    let page_count = state.paging.page_count(total);
    let palette = state.palette;

    let can_go_back = page > 0;
    let can_go_forward = page + 1 < page_count;
    let arrow_style = |enabled: bool| {
        if enabled {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        }
    };

    let previous = Paragraph::new("◀")
        .alignment(Alignment::Center)
        .style(arrow_style(can_go_back))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(previous, layout.previous_page);

    let label = format!(
        "Page {} / {}  ·  {} albums  ·  {}",
        page + 1,
        page_count,
        total,
        state.session.mode.label()
    );
    let title = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Album Deck ")
                .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(title, layout.page_label);

    let next = Paragraph::new("▶")
        .alignment(Alignment::Center)
        .style(arrow_style(can_go_forward))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(next, layout.next_page);
}

fn grid_cells(area: Rect, columns: u16, rows: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    let rows = rows.max(1);
    let cell_width = area.width / columns;
    let cell_height = area.height / rows;

    let mut cells = Vec::with_capacity(usize::from(columns) * usize::from(rows));
    for row in 0..rows {
        for column in 0..columns {
            cells.push(Rect {
                x: area.x + column * cell_width,
                y: area.y + row * cell_height,
                width: cell_width,
                height: cell_height,
            });
        }
    }
    cells
}

fn track_rows(
    inner: Rect,
    top: u16,
    height: u16,
    track_count: usize,
    focus: Option<usize>,
) -> Vec<(usize, Rect)> {
    let capacity = usize::from(height);
    if capacity == 0 || track_count == 0 {
        return Vec::new();
    }
    let first = match focus {
        Some(track) if track >= capacity => track + 1 - capacity,
        _ => 0,
    };

    (first..track_count.min(first + capacity))
        .enumerate()
        .map(|(line, track)| {
            let rect = Rect {
                x: inner.x,
                y: top + line as u16,
                width: inner.width,
                height: 1,
            };
            (track, rect)
        })
        .collect()
}

fn transport_row(inner: Rect) -> (Vec<(TransportButton, Rect)>, Rect) {
    let mut x = inner.x;
    let mut buttons = Vec::with_capacity(TransportButton::ALL.len());

    for button in TransportButton::ALL {
        if button == TransportButton::VolumeUp {
            continue;
        }
        let width = button.width().min(inner.right().saturating_sub(x));
        buttons.push((button, Rect { x, y: inner.y, width, height: inner.height.min(1) }));
        x = x.saturating_add(width + 1);
    }

    let up_width = TransportButton::VolumeUp.width();
    let up_x = inner.right().saturating_sub(up_width).max(x);
    let gauge = Rect {
        x,
        y: inner.y,
        width: up_x.saturating_sub(x).saturating_sub(1),
        height: inner.height.min(1),
    };
    buttons.push((
        TransportButton::VolumeUp,
        Rect {
            x: up_x,
            y: inner.y,
            width: inner.right().saturating_sub(up_x).min(up_width),
            height: inner.height.min(1),
        },
    ));

    (buttons, gauge)
}
