//! UseCase: エクスプローラーのトップレベル状態管理
//!
//! 検索クエリ、選択中の都市、開いているオーバーレイ（天気 / チャット）、
//! 直近の天気スナップショット、地図の表示状態を保持します。
//!
//! - 都市を選択するとオーバーレイは閉じられ、チャットセッションは破棄され、
//!   天気スナップショットも消えます。
//! - 天気とチャットは同時に開けません（一方を開くともう一方が閉じます）。

use std::sync::Arc;

use machi_shared::time::Clock;
use serde::Serialize;

use crate::domain::{City, CityId, MapViewport, RandomProvider, WeatherForecast, ZoomLevel};

use super::{ActivityConfig, ChatSession, CityDirectory, ExplorerError, WeatherSampler};

/// Which panel is shown over the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overlay {
    None,
    Weather,
    Chat,
}

/// Top-level controller of the city explorer
pub struct ExplorerShell {
    directory: CityDirectory,
    query: String,
    selected: City,
    viewport: MapViewport,
    weather: Option<WeatherForecast>,
    weather_open: bool,
    chat: Option<ChatSession>,
    sampler: WeatherSampler,
    random: Arc<dyn RandomProvider>,
    clock: Arc<dyn Clock>,
    activity: ActivityConfig,
}

impl ExplorerShell {
    /// Create a shell with the first city of `directory` selected.
    pub fn new(
        directory: CityDirectory,
        activity: ActivityConfig,
        random: Arc<dyn RandomProvider>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ExplorerError> {
        let selected = directory
            .first()
            .cloned()
            .ok_or(ExplorerError::EmptyDirectory)?;
        let viewport = MapViewport::new(selected.coordinates);
        let sampler = WeatherSampler::new(random.source());

        Ok(Self {
            directory,
            query: String::new(),
            selected,
            viewport,
            weather: None,
            weather_open: false,
            chat: None,
            sampler,
            random,
            clock,
            activity,
        })
    }

    pub fn directory(&self) -> &CityDirectory {
        &self.directory
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Cities matching the current query, in directory order
    pub fn visible_cities(&self) -> Vec<&City> {
        self.directory.filter(&self.query)
    }

    pub fn selected(&self) -> &City {
        &self.selected
    }

    /// Select the city with `id`, closing any open overlay.
    ///
    /// An unknown id leaves the shell untouched.
    pub fn select(&mut self, id: CityId) -> Result<&City, ExplorerError> {
        let city = self
            .directory
            .find(id)
            .cloned()
            .ok_or(ExplorerError::CityNotFound(id))?;
        self.apply_selection(city);
        Ok(&self.selected)
    }

    /// Select a city by its exact name, ignoring case.
    pub fn select_by_name(&mut self, name: &str) -> Result<&City, ExplorerError> {
        let city = self
            .directory
            .find_by_name(name)
            .cloned()
            .ok_or_else(|| ExplorerError::NoMatchingCity(name.trim().to_string()))?;
        self.apply_selection(city);
        Ok(&self.selected)
    }

    fn apply_selection(&mut self, city: City) {
        self.close_chat();
        self.weather_open = false;
        self.weather = None;
        self.viewport.recenter(city.coordinates);
        tracing::info!("Selected {} ({})", city.name, city.country);
        self.selected = city;
    }

    pub fn overlay(&self) -> Overlay {
        if self.chat.is_some() {
            Overlay::Chat
        } else if self.weather_open {
            Overlay::Weather
        } else {
            Overlay::None
        }
    }

    /// Sample a fresh forecast for the selected city and show it.
    ///
    /// Closes the chat if it is open.
    pub fn open_weather(&mut self) -> &WeatherForecast {
        self.close_chat();
        self.weather_open = true;
        self.weather.insert(self.sampler.sample())
    }

    /// Hide the weather panel; the last snapshot is kept until the selection changes.
    pub fn close_weather(&mut self) {
        self.weather_open = false;
    }

    /// Last sampled forecast for the selected city
    pub fn weather(&self) -> Option<&WeatherForecast> {
        self.weather.as_ref()
    }

    /// Show the chat for the selected city, mounting a session if none is open.
    ///
    /// Closes the weather panel.
    pub fn open_chat(&mut self) -> &ChatSession {
        self.weather_open = false;
        let selected = &self.selected;
        let activity = self.activity;
        let random = &self.random;
        let clock = &self.clock;
        self.chat.get_or_insert_with(|| {
            ChatSession::open(selected.clone(), activity, random.source(), clock.clone())
        })
    }

    /// Unmount the chat session, if any.
    pub fn close_chat(&mut self) {
        if let Some(mut session) = self.chat.take() {
            session.close();
        }
    }

    pub fn chat(&self) -> Option<&ChatSession> {
        self.chat.as_ref()
    }

    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.viewport.zoom
    }

    pub fn zoom_in(&mut self) -> ZoomLevel {
        self.viewport.zoom = self.viewport.zoom.zoomed_in();
        tracing::debug!("Zoom level: {}", self.viewport.zoom.factor());
        self.viewport.zoom
    }

    pub fn zoom_out(&mut self) -> ZoomLevel {
        self.viewport.zoom = self.viewport.zoom.zoomed_out();
        tracing::debug!("Zoom level: {}", self.viewport.zoom.factor());
        self.viewport.zoom
    }
}
