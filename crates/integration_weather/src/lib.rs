//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap current-weather endpoint
//! (<https://openweathermap.org/current>). Looks up conditions by city name
//! and requires an API key.

pub mod client;
mod models;

pub use client::{OpenWeatherMapClient, UNITS, WeatherClient, WeatherConfig, WeatherError};
pub use models::CurrentConditions;
