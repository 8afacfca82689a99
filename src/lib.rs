//! A terminal maze game: generate random mazes, watch the solver trace the escape, or run them
//! yourself.
//!
//! The library is split by concern: the grid model in [`maze`], the random generator in
//! [`generator`], the breadth-first route search in [`pathfinding`], the digit-grid file format
//! in [`storage`], and the ratatui front end across [`app`], [`events`], [`types`] and [`ui`].

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod cli;
mod events;
mod generator;
mod maze;
mod pathfinding;
mod runner;
mod storage;
mod types;
mod ui;

pub use app::App;
pub use cli::Cli;
