//! Loading and saving mazes as digit-grid text files.
//!
//! One line per row, each cell a single digit: 0 for floor, 1 for wall, 2 for a marked route. A
//! missing file is an error the caller has to handle; unreadable or malformed content is reported
//! as an absent result instead, so the caller can keep whatever maze it already had.

use std::{
    ffi::OsStr,
    fs,
    io::ErrorKind,
    path::Path,
};

use color_eyre::eyre::{eyre, Result};

use crate::maze::{Maze, Tile};

/// File extension recognized by the map-directory scan.
pub(crate) const MAP_EXTENSION: &str = "maze";

/// Named maze entry for the load menu.
///
/// This structure couples the file stem under which a maze was found with its parsed grid,
/// keeping the scan results in a plain ordered list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MapEntry {
    /// File stem the maze was loaded from.
    pub key: String,
    /// Parsed maze grid.
    pub maze: Maze,
}

/// Parses the text encoding into a maze.
///
/// `None` flags an invalid format: empty input, a byte outside the digit set, or rows of unequal
/// length.
pub(crate) fn parse_maze(contents: &str) -> Option<Maze> {
    let mut rows = Vec::new();
    for line in contents.lines() {
        let row = line
            .bytes()
            .map(Tile::from_digit)
            .collect::<Option<Vec<Tile>>>()?;
        rows.push(row);
    }

    Maze::from_rows(rows)
}

/// Serializes a maze into the text encoding.
pub(crate) fn encode_maze(maze: &Maze) -> String {
    let mut out = String::new();
    for row in maze.rows_of_tiles() {
        for tile in row {
            out.push(tile.digit());
        }
        out.push('\n');
    }

    out
}

/// Loads a maze from a file.
///
/// # Errors
///
/// Fails when the file does not exist; that outcome is distinct from content problems on purpose.
/// Content that cannot be read or does not parse is reported as `Ok(None)` instead.
pub(crate) fn load(path: &Path) -> Result<Option<Maze>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(parse_maze(&contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(eyre!("the file {} does not exist", path.display()))
        }
        Err(_) => Ok(None),
    }
}

/// Saves a maze to a file.
///
/// # Errors
///
/// Any I/O failure is passed through untouched; the target's contents are unspecified after a
/// failed write.
pub(crate) fn save(path: &Path, maze: &Maze) -> Result<()> {
    fs::write(path, encode_maze(maze))?;

    Ok(())
}

/// Scans a directory for maze files.
///
/// Collects every regular `.maze` file whose content parses, keyed by file stem, in directory
/// iteration order. Files that cannot be read or do not parse are skipped silently; the menu only
/// ever lists usable mazes.
///
/// # Errors
///
/// Fails when the directory itself cannot be read or iterated.
pub(crate) fn fetch_files(dir: &Path) -> Result<Vec<MapEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file()
            || path.extension().and_then(OsStr::to_str) != Some(MAP_EXTENSION)
        {
            continue;
        }

        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        let Some(maze) = parse_maze(&contents) else {
            continue;
        };

        let key = path
            .file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or("unnamed")
            .to_owned();
        entries.push(MapEntry { key, maze });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::maze::Point;

    fn maze_of(rows: &[&str]) -> Maze {
        let tiles = rows
            .iter()
            .map(|line| {
                line.bytes()
                    .map(|digit| Tile::from_digit(digit).expect("test rows use valid digits"))
                    .collect()
            })
            .collect();
        Maze::from_rows(tiles).expect("test rows are rectangular")
    }

    /// Creates an empty scratch directory under the system temp directory.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mazewalker_{name}_{}", std::process::id()));
        if dir.exists() {
            fs::remove_dir_all(&dir).expect("stale scratch directory should be removable");
        }
        fs::create_dir_all(&dir).expect("scratch directory should be creatable");
        dir
    }

    #[test]
    fn parse_accepts_the_digit_grid() {
        let maze = parse_maze("010\n000\n212\n").expect("three valid rows");
        assert_eq!(maze.rows(), 3);
        assert_eq!(maze.cols(), 3);
        assert_eq!(maze.tile(Point::new(2, 0)), Some(Tile::Route));
    }

    #[test]
    fn parse_rejects_foreign_characters() {
        assert!(parse_maze("010\n0x0\n010").is_none());
        assert!(parse_maze("010\n0 0\n010").is_none());
        assert!(parse_maze("010\n030\n010").is_none());
    }

    #[test]
    fn parse_rejects_empty_and_ragged_input() {
        assert!(parse_maze("").is_none());
        assert!(parse_maze("010\n01\n010").is_none());
        assert!(parse_maze("\n\n").is_none());
    }

    #[test]
    fn encoding_round_trips() {
        let maze = maze_of(&["0110", "0020", "1111"]);
        let reparsed = parse_maze(&encode_maze(&maze)).expect("own encoding parses");
        assert_eq!(reparsed, maze);
    }

    #[test]
    fn load_distinguishes_missing_files() {
        let dir = scratch_dir("missing");
        let result = load(&dir.join("nowhere.maze"));
        assert!(result.is_err(), "a missing file is the caller's problem");
        fs::remove_dir_all(&dir).expect("scratch directory should be removable");
    }

    #[test]
    fn load_reports_bad_content_as_absent() {
        let dir = scratch_dir("invalid");
        let path = dir.join("broken.maze");
        fs::write(&path, "01a\n010\n").expect("scratch file should be writable");

        let result = load(&path).expect("an existing file never errors");
        assert_eq!(result, None);
        fs::remove_dir_all(&dir).expect("scratch directory should be removable");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("loop.maze");
        let maze = maze_of(&["11111", "10001", "10101", "10001", "11011"]);

        save(&path, &maze).expect("saving into the scratch directory succeeds");
        let reloaded = load(&path)
            .expect("the file exists")
            .expect("own encoding parses");
        assert_eq!(reloaded, maze);
        fs::remove_dir_all(&dir).expect("scratch directory should be removable");
    }

    #[test]
    fn scan_keeps_only_parsable_maze_files() {
        let dir = scratch_dir("scan");
        fs::write(dir.join("good.maze"), "111\n101\n111\n").expect("scratch write");
        fs::write(dir.join("bad.maze"), "he110\nworld\n").expect("scratch write");
        fs::write(dir.join("notes.txt"), "010\n").expect("scratch write");

        let entries = fetch_files(&dir).expect("the scratch directory is readable");
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries.first().map(|entry| entry.key.as_str()),
            Some("good")
        );
        fs::remove_dir_all(&dir).expect("scratch directory should be removable");
    }
}
