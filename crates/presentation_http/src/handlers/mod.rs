//! HTTP request handlers

pub mod api;
pub mod dashboard;
pub mod health;
pub mod map;
pub mod weather;

use application::{ApplicationError, parse_focus};
use domain::{ALL_DAYS, DateFilter, MapSize};
use serde::Deserialize;

use crate::error::ApiError;

/// Map selections shared by the dashboard and the map endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapQuery {
    /// `All Days` (default) or a date
    pub date: Option<String>,
    /// Location to center on; `None` or absent for no focus
    pub focus: Option<String>,
    /// `standard` (default) or `large`
    pub size: Option<String>,
}

/// Parsed map selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSelection {
    pub filter: DateFilter,
    pub focus: Option<String>,
    pub size: MapSize,
}

impl MapQuery {
    /// Validate the raw query values
    pub fn selection(&self) -> Result<MapSelection, ApiError> {
        let filter = self
            .date
            .as_deref()
            .unwrap_or(ALL_DAYS)
            .parse::<DateFilter>()
            .map_err(ApplicationError::from)?;
        let size = match self.size.as_deref().map(str::trim) {
            None | Some("") => MapSize::default(),
            Some(raw) => raw.parse::<MapSize>().map_err(ApplicationError::from)?,
        };

        Ok(MapSelection {
            filter,
            focus: parse_focus(self.focus.as_deref()).map(str::to_string),
            size,
        })
    }
}
