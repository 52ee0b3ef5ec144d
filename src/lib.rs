//! Terminal widget that looks up a LeetCode username and shows how many
//! Easy, Medium and Hard problems the user has solved.
//!
//! The pipeline is small: [`validate::validate_username`] gates the input,
//! [`api::StatsClient`] runs one GraphQL request, [`presenter::ProgressPresenter`]
//! turns the result into gauges and cards, and [`app::App`] drives the
//! `Idle`/`Searching` cycle between them.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod logger;
pub mod presenter;
pub mod ui;
pub mod validate;

pub use api::{StatsClient, UserStats};
pub use app::App;
pub use config::Config;
pub use error::{InvalidInput, StatsError};
