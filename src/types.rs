//! Type definitions and enums for the application state and navigation.

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the game. It is used to
/// determine which screen to render and what actions to take based on user input.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen of the game.
    MainMenu(MainMenuItem),
    /// Size prompt shown before generating a maze.
    SizeInput,
    /// File-name prompt shown before saving the maze.
    SaveInput,
    /// Map selection screen listing the loadable maze files.
    MapMenu,
    /// Read-only maze display, with or without a marked route.
    Viewer,
    /// Interactive escape mode with the runner on the grid.
    RunGame,
    /// Celebration screen shown after the runner reaches the exit.
    Victory,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu. It is used to determine which
/// items can the user select in the main menu and which of them need a maze to act on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MainMenuItem {
    /// "Generate a new maze" menu option.
    Generate,
    /// "Load a maze" menu option.
    Load,
    /// "Save the maze" menu option.
    Save,
    /// "Display the maze" menu option.
    Display,
    /// "Find the escape" menu option.
    Solve,
    /// "Run the maze" menu option.
    Run,
    /// "Quit" menu option.
    Quit,
}

impl MainMenuItem {
    /// Menu entries in display order.
    pub(crate) const ALL: [Self; 7] = [
        Self::Generate,
        Self::Load,
        Self::Save,
        Self::Display,
        Self::Solve,
        Self::Run,
        Self::Quit,
    ];

    /// Returns the label shown for the entry.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Generate => "Generate a new maze",
            Self::Load => "Load a maze",
            Self::Save => "Save the maze",
            Self::Display => "Display the maze",
            Self::Solve => "Find the escape",
            Self::Run => "Run the maze",
            Self::Quit => "Quit",
        }
    }

    /// Checks whether the entry needs a maze to act on.
    pub(crate) const fn needs_maze(self) -> bool {
        !matches!(self, Self::Generate | Self::Load | Self::Quit)
    }

    /// Returns the entry after this one, wrapping at the end.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Generate => Self::Load,
            Self::Load => Self::Save,
            Self::Save => Self::Display,
            Self::Display => Self::Solve,
            Self::Solve => Self::Run,
            Self::Run => Self::Quit,
            Self::Quit => Self::Generate,
        }
    }

    /// Returns the entry before this one, wrapping at the start.
    pub(crate) const fn prev(self) -> Self {
        match self {
            Self::Generate => Self::Quit,
            Self::Load => Self::Generate,
            Self::Save => Self::Load,
            Self::Display => Self::Save,
            Self::Solve => Self::Display,
            Self::Run => Self::Solve,
            Self::Quit => Self::Run,
        }
    }
}

/// Generic menu type configuration.
///
/// This enumeration holds the specifics particular to each boxed menu in the interface: the title
/// over the border, the key hints under it, and the number of content rows to lay out.
pub(crate) enum MenuType {
    /// Main menu configuration.
    MainMenu(u8),
    /// Maze-size prompt configuration.
    SizePrompt(u8),
    /// Save-file prompt configuration.
    SavePrompt(u8),
}

impl MenuType {
    /// Returns the title shown over the menu border.
    pub(crate) const fn repr(&self) -> &str {
        match self {
            Self::MainMenu(_) => "Menu",
            Self::SizePrompt(_) => "New maze size",
            Self::SavePrompt(_) => "Save as",
        }
    }

    /// Returns the key hints shown under the menu border.
    pub(crate) const fn keys(&self) -> &str {
        match self {
            Self::MainMenu(_) => "(j) down / (k) up / (l) select",
            Self::SizePrompt(_) | Self::SavePrompt(_) => "(Enter) confirm / (Esc) cancel",
        }
    }

    /// Returns the number of content rows the menu lays out.
    pub(crate) const fn value(&self) -> u8 {
        match self {
            Self::MainMenu(value) | Self::SizePrompt(value) | Self::SavePrompt(value) => *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_navigation_wraps_both_ways() {
        assert_eq!(MainMenuItem::Quit.next(), MainMenuItem::Generate);
        assert_eq!(MainMenuItem::Generate.prev(), MainMenuItem::Quit);

        let mut item = MainMenuItem::Generate;
        for _ in MainMenuItem::ALL {
            item = item.next();
        }
        assert_eq!(item, MainMenuItem::Generate);
    }

    #[test]
    fn maze_bound_entries_are_flagged() {
        assert!(!MainMenuItem::Generate.needs_maze());
        assert!(!MainMenuItem::Load.needs_maze());
        assert!(!MainMenuItem::Quit.needs_maze());
        assert!(MainMenuItem::Save.needs_maze());
        assert!(MainMenuItem::Display.needs_maze());
        assert!(MainMenuItem::Solve.needs_maze());
        assert!(MainMenuItem::Run.needs_maze());
    }

    #[test]
    fn labels_follow_display_order() {
        let labels: Vec<&str> = MainMenuItem::ALL.iter().map(|item| item.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Generate a new maze",
                "Load a maze",
                "Save the maze",
                "Display the maze",
                "Find the escape",
                "Run the maze",
                "Quit",
            ]
        );
    }

    #[test]
    fn menu_type_carries_its_layout_data() {
        let menu = MenuType::MainMenu(7);
        assert_eq!(menu.repr(), "Menu");
        assert_eq!(menu.value(), 7);

        let prompt = MenuType::SizePrompt(2);
        assert_eq!(prompt.repr(), "New maze size");
        assert_eq!(prompt.keys(), "(Enter) confirm / (Esc) cancel");
        assert_eq!(prompt.value(), 2);
    }
}
