//! Command line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// Command line options for the maze game.
///
/// The game is fully usable without any options; these only pick where map files are looked up
/// and optionally preload a maze before the menu opens.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Directory scanned for .maze files in the load menu.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub maps_dir: PathBuf,

    /// Maze file to load before the menu opens.
    #[arg(value_name = "FILE")]
    pub map: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_working_directory() {
        let cli = Cli::parse_from(["mazewalker"]);
        assert_eq!(cli.maps_dir, PathBuf::from("."));
        assert_eq!(cli.map, None);
    }

    #[test]
    fn options_override_the_defaults() {
        let cli = Cli::parse_from(["mazewalker", "--maps-dir", "mazes", "intro.maze"]);
        assert_eq!(cli.maps_dir, PathBuf::from("mazes"));
        assert_eq!(cli.map, Some(PathBuf::from("intro.maze")));
    }
}
