//! Command registry
//!
//! Names, usage strings and help text for every REPL command.

// == Command ==
/// A REPL command, resolved from the first word of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cache,
    Catch,
    Exit,
    Explore,
    Help,
    Inspect,
    Map,
    MapBack,
    Pokedex,
}

/// Help entry for one command.
#[derive(Debug, Clone, Copy)]
pub struct CliCommand {
    pub command: Command,
    /// Word typed to invoke the command
    pub name: &'static str,
    /// Name plus parameters, as shown by `help`
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command, sorted by name.
pub const COMMANDS: &[CliCommand] = &[
    CliCommand {
        command: Command::Cache,
        name: "cache",
        usage: "cache",
        description: "Shows response cache statistics",
    },
    CliCommand {
        command: Command::Catch,
        name: "catch",
        usage: "catch <pokemon>",
        description: "Attempts to catch a Pokemon and add it to the Pokedex",
    },
    CliCommand {
        command: Command::Exit,
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
    },
    CliCommand {
        command: Command::Explore,
        name: "explore",
        usage: "explore <location>",
        description: "Lists available Pokemon from a provided <location>",
    },
    CliCommand {
        command: Command::Help,
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    CliCommand {
        command: Command::Inspect,
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "See the stats for a Pokemon if you have successfully caught it (and added it to the Pokedex)",
    },
    CliCommand {
        command: Command::Map,
        name: "map",
        usage: "map",
        description: "List locations in the Pokemon world",
    },
    CliCommand {
        command: Command::MapBack,
        name: "mapb",
        usage: "mapb",
        description: "Cycle back through list of locations in the Pokemon world",
    },
    CliCommand {
        command: Command::Pokedex,
        name: "pokedex",
        usage: "pokedex",
        description: "List all the currently caught Pokemon",
    },
];

impl Command {
    /// Looks up a command by the word that invokes it.
    pub fn parse(word: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find(|entry| entry.name == word)
            .map(|entry| entry.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("map"), Some(Command::Map));
        assert_eq!(Command::parse("mapb"), Some(Command::MapBack));
        assert_eq!(Command::parse("catch"), Some(Command::Catch));
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(Command::parse("fly"), None);
        assert_eq!(Command::parse(""), None);
        // Parsing happens after lower-casing
        assert_eq!(Command::parse("MAP"), None);
    }

    #[test]
    fn test_registry_sorted_and_unique() {
        let names: Vec<&str> = COMMANDS.iter().map(|entry| entry.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_usage_starts_with_name() {
        for entry in COMMANDS {
            assert!(entry.usage.starts_with(entry.name), "{}", entry.name);
            assert_eq!(Command::parse(entry.name), Some(entry.command));
        }
    }
}
