//! Event handling functions for user input and application state updates.

use std::{
    path::{Path, PathBuf, MAIN_SEPARATOR},
    time::Duration,
};

use color_eyre::eyre::Result;
use rand::thread_rng;
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::{
    app::Celebration,
    generator,
    pathfinding::{self, PathAnimation},
    runner::Runner,
    storage,
    types::{MainMenuItem, Screen},
    App,
};

/// Side length used when the size prompt holds zero or nothing usable.
const FALLBACK_SIZE: usize = 10;

/// Polls for keyboard input and advances time-based state.
///
/// This function waits a short moment for a key press, dispatches it to the handler for the
/// active screen, and then ticks whatever animation the screen carries. The timeout keeps the
/// animations moving when no key arrives.
///
/// # Errors
///
/// Fails when the terminal event stream breaks, or when saving the maze hits an I/O error.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            handle_key(app, key.code)?;
        }
    }

    if matches!(app.screen, Screen::Viewer) {
        if let Some(animation) = app.animation.as_mut() {
            animation.update();
        }
    }
    if matches!(app.screen, Screen::Victory) {
        app.celebration.update();
    }

    Ok(())
}

/// Routes a key press to the handler for the active screen.
///
/// # Errors
///
/// Fails when saving the maze hits an I/O error.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => handle_menu_key(app, item, code),
        Screen::SizeInput | Screen::SaveInput => handle_input_key(app, code)?,
        Screen::MapMenu => handle_map_key(app, code),
        Screen::Viewer => handle_viewer_key(app, code),
        Screen::RunGame => handle_run_key(app, code),
        Screen::Victory => handle_victory_key(app, code),
    }

    Ok(())
}

/// Handles key presses on the main menu.
fn handle_menu_key(app: &mut App, item: MainMenuItem, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') | KeyCode::Down => app.screen = Screen::MainMenu(item.next()),
        KeyCode::Char('k') | KeyCode::Up => app.screen = Screen::MainMenu(item.prev()),
        KeyCode::Char('l') | KeyCode::Enter => select_menu_item(app, item),
        _ => {}
    }
}

/// Performs the action behind a main menu entry.
///
/// Entries that need a maze bounce off with a diagnostic while none is present.
fn select_menu_item(app: &mut App, item: MainMenuItem) {
    if item.needs_maze() && app.maze.is_none() {
        app.status = Some("Generate or load a maze first".to_owned());
        return;
    }
    app.status = None;

    match item {
        MainMenuItem::Generate => {
            app.input.clear();
            app.screen = Screen::SizeInput;
        }
        MainMenuItem::Load => open_map_menu(app),
        MainMenuItem::Save => {
            app.input.clear();
            app.screen = Screen::SaveInput;
        }
        MainMenuItem::Display => {
            app.view.clone_from(&app.maze);
            app.animation = None;
            app.screen = Screen::Viewer;
        }
        MainMenuItem::Solve => solve(app),
        MainMenuItem::Run => start_run(app),
        MainMenuItem::Quit => app.exit = true,
    }
}

/// Opens the map selection screen with a fresh directory scan.
fn open_map_menu(app: &mut App) {
    match storage::fetch_files(&app.maps_dir) {
        Ok(maps) if maps.is_empty() => {
            app.status = Some(format!(
                "No .{} files in {}",
                storage::MAP_EXTENSION,
                app.maps_dir.display()
            ));
        }
        Ok(maps) => {
            app.maps = maps;
            app.cursor = 0;
            app.viewport_offset = 0;
            app.screen = Screen::MapMenu;
        }
        Err(err) => {
            app.status = Some(format!("Cannot read {}: {err}", app.maps_dir.display()));
        }
    }
}

/// Runs the route search and shows the outcome.
///
/// A found route plays back step by step on the viewer screen; a failed search only leaves a
/// diagnostic behind.
fn solve(app: &mut App) {
    let Some(maze) = app.maze.as_ref() else {
        return;
    };

    match pathfinding::shortest_path(maze) {
        Some(route) => {
            app.view = Some(maze.clone());
            app.animation = Some(PathAnimation::new(route));
            app.screen = Screen::Viewer;
        }
        None => app.status = Some("Couldn't find the escape!".to_owned()),
    }
}

/// Enters the escape mode with the runner on the first opening.
///
/// The first boundary opening in scan order is the start, the last one the goal. Without two
/// openings there is nothing to run between.
fn start_run(app: &mut App) {
    let Some(maze) = app.maze.as_ref() else {
        return;
    };

    let openings = pathfinding::boundary_openings(maze);
    if openings.len() < 2 {
        app.status = Some("The maze has no entry and exit to run between".to_owned());
        return;
    }

    let Some(start) = openings.first().copied() else {
        return;
    };
    app.runner = Some(Runner::new(start));
    app.goal = openings.last().copied();
    app.screen = Screen::RunGame;
}

/// Handles key presses on the size and save prompts.
///
/// # Errors
///
/// Fails when saving the maze hits an I/O error.
fn handle_input_key(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Esc => {
            let origin = if app.screen == Screen::SizeInput {
                MainMenuItem::Generate
            } else {
                MainMenuItem::Save
            };
            app.input.clear();
            app.screen = Screen::MainMenu(origin);
        }
        KeyCode::Backspace => {
            let _ = app.input.pop();
        }
        KeyCode::Enter => confirm_input(app)?,
        KeyCode::Char(typed) => app.input.push(typed),
        _ => {}
    }

    Ok(())
}

/// Commits the active prompt.
///
/// # Errors
///
/// Fails when saving the maze hits an I/O error; a failed save aborts the whole session rather
/// than pretending the maze landed on disk.
fn confirm_input(app: &mut App) -> Result<()> {
    match app.screen {
        Screen::SizeInput => match parse_sizes(&app.input) {
            Some((rows, cols)) => {
                let maze = generator::generate(rows, cols, &mut thread_rng());
                app.view = Some(maze.clone());
                app.maze = Some(maze);
                app.animation = None;
                app.input.clear();
                app.status = None;
                app.screen = Screen::Viewer;
            }
            None => {
                app.status = Some("Enter one or two positive numbers".to_owned());
                app.input.clear();
            }
        },
        Screen::SaveInput => {
            let Some(maze) = app.maze.as_ref() else {
                return Ok(());
            };
            if app.input.trim().is_empty() {
                app.status = Some("Enter a file name".to_owned());
                return Ok(());
            }

            let path = save_path(&app.maps_dir, app.input.trim());
            storage::save(&path, maze)?;
            app.status = Some(format!("Saved the maze at {}", path.display()));
            app.input.clear();
            app.screen = Screen::MainMenu(MainMenuItem::Save);
        }
        _ => {}
    }

    Ok(())
}

/// Parses the size prompt into a rows/columns pair.
///
/// One number makes a square maze. Zeroes fall back to [`FALLBACK_SIZE`] cells per side; anything
/// unparsable rejects the whole input.
fn parse_sizes(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let rows: usize = parts.next()?.parse().ok()?;
    let cols: usize = match parts.next() {
        Some(text) => text.parse().ok()?,
        None => rows,
    };

    let rows = if rows == 0 { FALLBACK_SIZE } else { rows };
    let cols = if cols == 0 { FALLBACK_SIZE } else { cols };
    Some((rows, cols))
}

/// Resolves the save prompt text to a file path.
///
/// A bare name lands in the maps directory with the maze extension attached; anything that
/// already looks like a path is used as typed.
fn save_path(maps_dir: &Path, input: &str) -> PathBuf {
    let typed = PathBuf::from(input);
    if typed.is_absolute() || typed.extension().is_some() || input.contains(MAIN_SEPARATOR) {
        typed
    } else {
        maps_dir.join(format!("{input}.{}", storage::MAP_EXTENSION))
    }
}

/// Handles key presses on the map selection screen.
///
/// Cursor moves keep the selection inside the viewport window; selecting an entry makes its maze
/// the active one.
fn handle_map_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.maps.len() {
                app.cursor += 1;
                if app.cursor >= app.viewport_offset + app.viewport_height.max(1) {
                    app.viewport_offset += 1;
                }
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.cursor > 0 {
                app.cursor -= 1;
                if app.cursor < app.viewport_offset {
                    app.viewport_offset = app.cursor;
                }
            }
        }
        KeyCode::Char('l') | KeyCode::Enter => {
            if let Some(entry) = app.maps.get(app.cursor) {
                app.maze = Some(entry.maze.clone());
                app.status = Some(format!("Loaded {}", entry.key));
                app.screen = Screen::MainMenu(MainMenuItem::Load);
            }
        }
        KeyCode::Char('h') | KeyCode::Esc => app.screen = Screen::MainMenu(MainMenuItem::Load),
        _ => {}
    }
}

/// Handles key presses on the viewer screen.
fn handle_viewer_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('h') | KeyCode::Esc | KeyCode::Enter => {
            app.animation = None;
            app.screen = Screen::MainMenu(MainMenuItem::Display);
        }
        _ => {}
    }
}

/// Handles key presses in the escape mode.
fn handle_run_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('w') | KeyCode::Up => move_runner(app, -1, 0),
        KeyCode::Char('s') | KeyCode::Down => move_runner(app, 1, 0),
        KeyCode::Char('a') | KeyCode::Left => move_runner(app, 0, -1),
        KeyCode::Char('d') | KeyCode::Right => move_runner(app, 0, 1),
        KeyCode::Char('1') => reveal_route(app),
        KeyCode::Char('h') | KeyCode::Esc => {
            app.runner = None;
            app.screen = Screen::MainMenu(MainMenuItem::Run);
        }
        _ => {}
    }
}

/// Moves the runner and checks for the goal.
fn move_runner(app: &mut App, drow: isize, dcol: isize) {
    let Some(maze) = app.maze.as_ref() else {
        return;
    };
    let Some(runner) = app.runner.as_mut() else {
        return;
    };

    runner.step(drow, dcol, maze);
    let reached = runner.pos();
    if app.goal == Some(reached) {
        app.celebration = Celebration::new();
        app.screen = Screen::Victory;
    }
}

/// Reveals the full solved route and ends the escape attempt.
fn reveal_route(app: &mut App) {
    let Some(maze) = app.maze.as_ref() else {
        return;
    };

    match pathfinding::find_path(maze) {
        Some(marked) => {
            app.view = Some(marked);
            app.animation = None;
            app.runner = None;
            app.status = Some("Path revealed. Game over.".to_owned());
            app.screen = Screen::Viewer;
        }
        None => app.status = Some("Couldn't find the escape!".to_owned()),
    }
}

/// Handles key presses on the victory screen.
fn handle_victory_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.exit = true,
        _ => {
            app.runner = None;
            app.screen = Screen::MainMenu(MainMenuItem::Run);
        }
    }
}
