//! Command registry
//!
//! Maps the first word of an input line to a [`Command`].

/// A REPL command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    Mapb,
    Explore,
    Catch,
    Inspect,
}

/// Name and help text for a command.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub command: Command,
    pub name: &'static str,
    pub description: &'static str,
}

/// Every command, in the order `help` lists them (and in variant order).
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        command: Command::Help,
        name: "help",
        description: "Displays a help message",
    },
    CommandInfo {
        command: Command::Exit,
        name: "exit",
        description: "Exit the Pokedex",
    },
    CommandInfo {
        command: Command::Map,
        name: "map",
        description: "Displays the names of 20 location areas",
    },
    CommandInfo {
        command: Command::Mapb,
        name: "mapb",
        description: "Displays the previous 20 location areas",
    },
    CommandInfo {
        command: Command::Explore,
        name: "explore",
        description: "Explore a location area",
    },
    CommandInfo {
        command: Command::Catch,
        name: "catch",
        description: "Attempt to catch a Pokemon",
    },
    CommandInfo {
        command: Command::Inspect,
        name: "inspect",
        description: "Inspect a caught Pokemon",
    },
];

impl Command {
    /// Looks up a command by its exact (already lowercased) name.
    pub fn from_name(name: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|info| info.name == name)
            .map(|info| info.command)
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    // COMMANDS is laid out in variant order
    fn info(self) -> &'static CommandInfo {
        &COMMANDS[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Command::from_name("map"), Some(Command::Map));
        assert_eq!(Command::from_name("mapb"), Some(Command::Mapb));
        assert_eq!(Command::from_name("MAP"), None);
        assert_eq!(Command::from_name("fly"), None);
    }

    #[test]
    fn test_every_command_round_trips_by_name() {
        for (index, info) in COMMANDS.iter().enumerate() {
            assert_eq!(info.command as usize, index);
            assert_eq!(Command::from_name(info.name), Some(info.command));
            assert_eq!(info.command.name(), info.name);
            assert!(!info.command.description().is_empty());
        }
    }
}
