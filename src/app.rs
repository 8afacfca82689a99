//! Core application state and logic for the maze game.

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    cli::Cli,
    events,
    maze::{Maze, Point},
    pathfinding::PathAnimation,
    runner::Runner,
    storage::{self, MapEntry},
    types::{MainMenuItem, Screen},
    ui,
};

/// Milliseconds between celebration frames.
pub(crate) const CELEBRATION_FRAME_DELAY_MS: u64 = 300;

/// Frame-cycling state for the victory screen.
///
/// This structure advances a monotonic frame counter on a fixed delay; the renderer wraps the
/// counter over its frame set.
pub(crate) struct Celebration {
    /// Monotonic frame counter.
    frame: usize,
    /// Timestamp of the last frame flip.
    last_flip: Instant,
}

impl Celebration {
    /// Starts the animation at its first frame.
    pub(crate) fn new() -> Self {
        Self {
            frame: 0,
            last_flip: Instant::now(),
        }
    }

    /// Returns the current frame counter.
    pub(crate) const fn frame(&self) -> usize {
        self.frame
    }

    /// Flips to the next frame when the delay has elapsed.
    pub(crate) fn update(&mut self) {
        if self.last_flip.elapsed() >= Duration::from_millis(CELEBRATION_FRAME_DELAY_MS) {
            self.last_flip = Instant::now();
            self.frame = self.frame.wrapping_add(1);
        }
    }
}

/// Application state container for the maze game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the
    /// user wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Active maze, if one was generated or loaded already.
    pub(crate) maze: Option<Maze>,
    /// Grid shown on the viewer screen, possibly carrying a marked route.
    pub(crate) view: Option<Maze>,
    /// Route replay overlaid on the viewer screen while solving.
    pub(crate) animation: Option<PathAnimation>,
    /// Scan results backing the map selection screen.
    pub(crate) maps: Vec<MapEntry>,
    /// Cursor index into the map list.
    pub(crate) cursor: usize,
    /// Scroll offset of the map list viewport.
    ///
    /// This field holds the offset by which to scroll the sliding window into the
    /// [`maps`](App::maps) vector on the map selection screen.
    pub(crate) viewport_offset: usize,
    /// Height of the map list rendering area.
    ///
    /// This field holds the height of the area in which the list of maps was rendered during the
    /// last redraw of the on-screen frame, as a measure of terminal cells.
    pub(crate) viewport_height: usize,
    /// Player state while the escape mode is active.
    pub(crate) runner: Option<Runner>,
    /// Exit cell the current escape attempt is heading for.
    pub(crate) goal: Option<Point>,
    /// Victory animation state.
    pub(crate) celebration: Celebration,
    /// Text buffer of the active input prompt.
    pub(crate) input: String,
    /// One-line diagnostic shown under the current screen, when set.
    pub(crate) status: Option<String>,
    /// Directory scanned for map files.
    pub(crate) maps_dir: PathBuf,
}

impl App {
    /// Builds the application state from the command line options.
    ///
    /// A maze file named on the command line is loaded up front; content that does not parse only
    /// leaves a diagnostic behind.
    ///
    /// # Errors
    ///
    /// Fails when the maze file named on the command line does not exist.
    pub fn new(cli: &Cli) -> Result<Self> {
        let mut app = Self {
            exit: false,
            screen: Screen::MainMenu(MainMenuItem::Generate),
            maze: None,
            view: None,
            animation: None,
            maps: Vec::new(),
            cursor: 0,
            viewport_offset: 0,
            viewport_height: 0,
            runner: None,
            goal: None,
            celebration: Celebration::new(),
            input: String::new(),
            status: None,
            maps_dir: cli.maps_dir.clone(),
        };

        if let Some(path) = &cli.map {
            match storage::load(path)? {
                Some(maze) => app.maze = Some(maze),
                None => {
                    app.status =
                        Some(format!("Cannot load {}: invalid format", path.display()));
                }
            }
        }

        Ok(app)
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues
    /// until the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_cli() -> Cli {
        Cli {
            maps_dir: PathBuf::from("."),
            map: None,
        }
    }

    #[test]
    fn fresh_state_starts_on_the_menu() {
        let app = App::new(&test_cli()).expect("no startup file to fail on");
        assert!(!app.exit);
        assert_eq!(app.screen, Screen::MainMenu(MainMenuItem::Generate));
        assert!(app.maze.is_none());
        assert!(app.status.is_none());
    }

    #[test]
    fn missing_startup_file_is_fatal() {
        let cli = Cli {
            maps_dir: PathBuf::from("."),
            map: Some(PathBuf::from("definitely/not/here.maze")),
        };
        assert!(App::new(&cli).is_err());
    }

    #[test]
    fn celebration_frames_start_at_zero() {
        let celebration = Celebration::new();
        assert_eq!(celebration.frame(), 0);
    }
}
