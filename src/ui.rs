//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::{Marker, DOT},
    text::{Line, Text},
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::{
    maze::{Maze, Point, Tile},
    types::{MainMenuItem, MenuType, Screen},
    App,
};

/// Frames of the victory animation, cycled on a timer.
const CELEBRATION_FRAMES: [&str; 3] = [
    "   *   \n  ***  \n   *   ",
    "  \\|/  \n --*-- \n  /|\\  ",
    " ' . ' \n.  * . \n ' . ' ",
];

/// Colors paired with the celebration frames.
const CELEBRATION_COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from drawing operations or data conversion failures.
pub(crate) fn draw(app: &mut App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(app, frame, item),
        Screen::SizeInput => input_prompt(app, frame, &MenuType::SizePrompt(2)),
        Screen::SaveInput => input_prompt(app, frame, &MenuType::SavePrompt(2)),
        Screen::MapMenu => map_menu(app, frame),
        Screen::Viewer => maze_view(app, frame)?,
        Screen::RunGame => run_view(app, frame)?,
        Screen::Victory => victory(app, frame),
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
fn clear(frame: &mut Frame) {
    let widget = Clear;
    frame.render_widget(widget, frame.area());
}

/// Renders the generic layout structure shared by the boxed menus and prompts.
///
/// This function creates the centered positioning and bordered block every [`MenuType`] shares;
/// the rows inside are handed back for the caller to fill.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
fn init_menu(frame: &mut Frame, menu: &MenuType) -> Rc<[Rect]> {
    let space = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .split(frame.area())[1];
    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Max(u16::from(menu.value() + 2))])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(menu.repr())
        .title_bottom(menu.keys())
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Max(1); menu.value() as usize]).split(inner_space)
}

/// Renders the main menu screen with its navigation entries.
///
/// The selected entry is highlighted; entries that need a maze render dimmed while none is
/// present, the way the menu ignores them when selected.
fn main_menu(app: &App, frame: &mut Frame, item: MainMenuItem) {
    clear(frame);

    let inner_layout = init_menu(frame, &MenuType::MainMenu(7));

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);
    let disabled_style = Style::default().fg(Color::DarkGray);

    for (idx, entry) in MainMenuItem::ALL.iter().enumerate() {
        let style = if *entry == item {
            active_content_style
        } else if entry.needs_maze() && app.maze.is_none() {
            disabled_style
        } else {
            content_style
        };

        let line = Line::raw(entry.label()).centered().style(style);
        if let Some(area) = inner_layout.get(idx) {
            frame.render_widget(line, *area);
        }
    }

    status_line(app, frame);
}

/// Renders a line-editor prompt inside the shared menu box.
///
/// The first row carries the typed buffer with a trailing cursor mark, the second a dimmed hint
/// about the expected input.
fn input_prompt(app: &App, frame: &mut Frame, menu: &MenuType) {
    clear(frame);

    let inner_layout = init_menu(frame, menu);

    let buffer = Line::raw(format!("{}_", app.input))
        .centered()
        .style(Style::default().fg(Color::White));
    let hint_text = match menu {
        MenuType::SizePrompt(_) => "rows [columns]",
        _ => "file name",
    };
    let hint = Line::raw(hint_text)
        .centered()
        .style(Style::default().fg(Color::DarkGray));

    if let Some(area) = inner_layout.first() {
        frame.render_widget(buffer, *area);
    }
    if let Some(area) = inner_layout.get(1) {
        frame.render_widget(hint, *area);
    }

    status_line(app, frame);
}

/// Renders the map selection screen with its scrollable list of loadable mazes.
///
/// This function displays a viewport over the scan results. The cursor row is highlighted and the
/// maze that is currently active carries a dot marker in the selector gutter.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
fn map_menu(app: &mut App, frame: &mut Frame) {
    clear(frame);

    let space = Layout::horizontal([
        Constraint::Percentage(30),
        Constraint::Fill(1),
        Constraint::Percentage(30),
    ])
    .split(frame.area())[1];
    let space = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Fill(1),
        Constraint::Percentage(40),
    ])
    .split(space)[1];

    let layout = Layout::vertical([Constraint::Min(1)]).split(space)[0];
    let block = Block::bordered()
        .title_top("Map list")
        .title_bottom("(j) down / (k) up / (l) select / (h) return")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    app.viewport_height = inner_space.height.into();

    let inner_layout = Layout::horizontal([Constraint::Percentage(5), Constraint::Percentage(100)])
        .split(inner_space);
    let inner_selector = Layout::vertical(vec![Constraint::Max(1); inner_space.height.into()])
        .split(inner_layout[0]);
    let inner_list = Layout::vertical(vec![Constraint::Max(1); inner_space.height.into()])
        .split(inner_layout[1]);

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    let window = app
        .maps
        .iter()
        .enumerate()
        .skip(app.viewport_offset)
        .take(app.viewport_height);
    for (idx, entry) in window {
        let row = idx - app.viewport_offset;
        let style = if idx == app.cursor {
            active_content_style
        } else {
            content_style
        };
        let marker = if Some(&entry.maze) == app.maze.as_ref() {
            DOT
        } else {
            " "
        };

        if let (Some(selector_area), Some(entry_area)) =
            (inner_selector.get(row), inner_list.get(row))
        {
            frame.render_widget(Line::styled(marker, style).centered(), *selector_area);
            frame.render_widget(Line::styled(entry.key.clone(), style), *entry_area);
        }
    }
}

/// Renders the viewer screen with the current maze and any route replay.
///
/// Walls come out green and route cells red; while a replay is active the revealed prefix of the
/// route is drawn instead of the marked tiles.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn maze_view(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let Some(maze) = app.view.as_ref() else {
        status_line(app, frame);
        return Ok(());
    };

    let (space, tooltip_area) = maze_layout(frame, maze)?;

    let wall_screen = to_screen_coords(&tile_points(maze, Tile::Wall), maze)?;
    let route_points = app.animation.as_ref().map_or_else(
        || tile_points(maze, Tile::Route),
        |animation| animation.visible().to_vec(),
    );
    let route_screen = to_screen_coords(&route_points, maze)?;

    render_canvas(frame, space, &wall_screen, Color::Green);
    render_canvas(frame, space, &route_screen, Color::Red);

    tooltip(frame, tooltip_area, "(h) return to menu");
    status_line(app, frame);

    Ok(())
}

/// Renders the escape mode screen with the runner on the maze.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
fn run_view(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let Some(maze) = app.maze.as_ref() else {
        return Ok(());
    };

    let (space, tooltip_area) = maze_layout(frame, maze)?;

    let wall_screen = to_screen_coords(&tile_points(maze, Tile::Wall), maze)?;
    render_canvas(frame, space, &wall_screen, Color::Green);

    if let Some(runner) = app.runner.as_ref() {
        let runner_screen = to_screen_coords(&[runner.pos()], maze)?;
        render_canvas(frame, space, &runner_screen, Color::Yellow);
    }

    tooltip(
        frame,
        tooltip_area,
        "(w/a/s/d) move / (1) reveal the path / (h) give up",
    );

    Ok(())
}

/// Renders the victory screen with its cycling celebration frames.
fn victory(app: &App, frame: &mut Frame) {
    clear(frame);

    let index = app.celebration.frame() % CELEBRATION_FRAMES.len();
    let Some(art) = CELEBRATION_FRAMES.get(index) else {
        return;
    };
    let color = CELEBRATION_COLORS.get(index).copied().unwrap_or(Color::White);

    let mut lines = vec![
        Line::raw("YOU DID IT!")
            .centered()
            .style(Style::default().fg(Color::White)),
        Line::raw("").centered(),
    ];
    lines.extend(
        art.lines()
            .map(|row| Line::raw(row).centered().style(Style::default().fg(color))),
    );
    lines.push(Line::raw("").centered());
    lines.push(
        Line::raw("press any key to return to the menu")
            .centered()
            .style(Style::default().fg(Color::DarkGray)),
    );

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let layout = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(frame.area());
    if let Some(space) = layout.first() {
        frame.render_widget(Paragraph::new(Text::from(lines)), *space);
    }
}

/// Renders the one-line status message under the active screen, when set.
fn status_line(app: &App, frame: &mut Frame) {
    let Some(status) = app.status.as_ref() else {
        return;
    };

    let layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());
    if let Some(area) = layout.last() {
        let line = Line::raw(status.clone())
            .centered()
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(line, *area);
    }
}

/// Carves the centered maze area and the bottom tooltip strip out of the frame.
///
/// # Errors
///
/// This function may return errors when the maze dimensions overflow the terminal coordinate
/// range.
fn maze_layout(frame: &Frame, maze: &Maze) -> Result<(Rect, Rect)> {
    let maze_rows = maze.rows();
    let maze_columns = maze.cols();

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    // Center the tooltip horizontally like the maze
    let tooltip_area = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_columns)?),
        Constraint::Min(1),
    ])
    .split(tooltip_full_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered tooltip area from horizontal layout")?;

    let main_layout = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_rows)?),
        Constraint::Min(1),
    ])
    .split(maze_content_area);

    let maze_area = main_layout
        .get(1)
        .ok_or_eyre("failed to get maze area from layout")?;

    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_columns)?),
        Constraint::Min(1),
    ])
    .split(*maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    Ok((space, tooltip_area))
}

/// Paints a point set onto a centered canvas over the given area.
fn render_canvas(frame: &mut Frame, space: Rect, coords: &[(f64, f64)], color: Color) {
    let canvas = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points { coords, color });
        });

    frame.render_widget(canvas, space);
}

/// Renders the bottom key-hint strip.
fn tooltip(frame: &mut Frame, area: Rect, text: &str) {
    let block = Block::bordered()
        .title(text.to_owned())
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(block, area);
}

/// Collects the coordinates of every tile with the given value.
fn tile_points(maze: &Maze, wanted: Tile) -> Vec<Point> {
    let mut points = Vec::new();
    for (row_idx, row) in maze.rows_of_tiles().enumerate() {
        for (col_idx, tile) in row.iter().enumerate() {
            if *tile == wanted {
                points.push(Point::new(row_idx, col_idx));
            }
        }
    }

    points
}

/// Transforms maze coordinates into centered canvas coordinates.
///
/// Rows map top-down onto descending y values and columns left-right onto ascending x values,
/// with the grid centered on the canvas origin.
///
/// # Errors
///
/// This function may return errors when a coordinate overflows the terminal coordinate range.
fn to_screen_coords(points: &[Point], maze: &Maze) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(maze.rows())?);
    let cols_n = f64::from(u16::try_from(maze.cols())?);

    points
        .iter()
        .map(|point| {
            // Row transformation: coordinate[i] = (n - 1) / 2 - i
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(point.row)?);

            // Column transformation: coordinate[i] = i - (n - 1) / 2
            let screen_x = f64::from(u16::try_from(point.col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
