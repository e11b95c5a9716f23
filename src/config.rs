//! View and playback configuration
//!
//! A single JSON file drives the whole presentation layer. Every field is
//! optional; missing fields fall back to the defaults below and out-of-range
//! values are clamped.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;

use crate::audio::DEFAULT_VOLUME;
use crate::model::ContinuationMode;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub accent: String,
    pub highlight: String,
    pub playing: String,
    pub text: String,
    pub dim: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "green".to_string(),
            highlight: "darkgray".to_string(),
            playing: "lightred".to_string(),
            text: "white".to_string(),
            dim: "gray".to_string(),
        }
    }
}

/// Resolved colours
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub accent: Color,
    pub highlight: Color,
    pub playing: Color,
    pub text: Color,
    pub dim: Color,
}

impl Default for Palette {
    fn default() -> Self {
        ThemeConfig::default().palette()
    }
}

impl ThemeConfig {
    /// Unknown colour names fall back to the default palette entry.
    pub fn palette(&self) -> Palette {
        fn parse(name: &str, fallback: Color) -> Color {
            Color::from_str(name).unwrap_or_else(|_| {
                tracing::warn!(colour = name, "Unknown colour in theme, using default");
                fallback
            })
        }
        Palette {
            accent: parse(&self.accent, Color::Green),
            highlight: parse(&self.highlight, Color::DarkGray),
            playing: parse(&self.playing, Color::LightRed),
            text: parse(&self.text, Color::White),
            dim: parse(&self.dim, Color::Gray),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub grid_columns: u16,
    pub grid_rows: u16,
    /// UI loop period, which also bounds track-end detection latency
    pub tick_ms: u64,
    pub volume: f32,
    pub volume_step: f32,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub shuffle: bool,
    pub theme: ThemeConfig,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            grid_columns: 3,
            grid_rows: 2,
            tick_ms: 50,
            volume: DEFAULT_VOLUME,
            volume_step: 0.05,
            looping: false,
            shuffle: false,
            theme: ThemeConfig::default(),
        }
    }
}

impl ViewConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json_str(&source)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::info!(path = %path.display(), ?config, "Config loaded");
        Ok(config)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: ViewConfig = serde_json::from_str(source)?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.grid_columns = self.grid_columns.clamp(1, 6);
        self.grid_rows = self.grid_rows.clamp(1, 4);
        self.tick_ms = self.tick_ms.clamp(10, 1000);
        self.volume = crate::model::clamp_volume(self.volume);
        self.volume_step = if self.volume_step.is_nan() {
            0.05
        } else {
            self.volume_step.clamp(0.01, 0.5)
        };
        self
    }

    pub fn page_size(&self) -> usize {
        usize::from(self.grid_columns) * usize::from(self.grid_rows)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn initial_mode(&self) -> ContinuationMode {
        ContinuationMode::from_flags(self.looping, self.shuffle)
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }
}
