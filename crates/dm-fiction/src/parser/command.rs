//! Command parsing for player input.

use dm_core::dungeon::BACK;

/// Direction for movement commands.
///
/// The compass points and `back` can be typed on their own; anything else
/// is only reachable through `go <label>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// The way a generated room was entered from.
    Back,
    /// Any other exit label, lower-cased.
    Other(String),
}

impl Direction {
    /// Parse a token that is a movement command on its own.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            BACK => Some(Self::Back),
            _ => None,
        }
    }

    /// Parse the label following `go`. Every label is a valid direction.
    pub fn from_label(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| Self::Other(s.to_lowercase()))
    }

    /// The exit label this direction is stored under.
    pub fn name(&self) -> &str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Back => BACK,
            Self::Other(label) => label.as_str(),
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Nothing but whitespace was received.
    Empty,
    /// Move through an exit.
    Move {
        /// The exit to take.
        direction: Direction,
    },
    /// `go` without a direction.
    MissingDirection,
    /// Describe the current room.
    Look,
    /// Fight a monster, or a random one if no name is given.
    Fight {
        /// The monster's name.
        target: Option<String>,
    },
    /// Talk to a monster, or a random one if no name is given.
    Talk {
        /// The monster's name.
        target: Option<String>,
    },
    /// Show the friends count.
    Status,
    /// Unrecognised verb.
    Unknown {
        /// The original input, trimmed.
        input: String,
    },
}

impl Command {
    /// Whether executing this command can change player or dungeon state.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Self::Empty | Self::MissingDirection | Self::Look | Self::Status | Self::Unknown { .. }
        )
    }
}

const MOVE_VERBS: &[&str] = &["go"];
const LOOK_VERBS: &[&str] = &["look", "l"];
const FIGHT_VERBS: &[&str] = &["fight"];
const TALK_VERBS: &[&str] = &["talk"];
const STATUS_VERBS: &[&str] = &["status"];

/// Parse a player input string into a command.
///
/// Never fails: blank input becomes [`Command::Empty`] and anything
/// unrecognised becomes [`Command::Unknown`].
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((first, rest)) = words.split_first() else {
        return Command::Empty;
    };
    let verb = first.to_lowercase();

    // Check for bare direction
    if let Some(direction) = Direction::parse(&verb) {
        return Command::Move { direction };
    }

    if MOVE_VERBS.contains(&verb.as_str()) {
        return parse_move(rest);
    }
    if LOOK_VERBS.contains(&verb.as_str()) {
        return Command::Look;
    }
    if FIGHT_VERBS.contains(&verb.as_str()) {
        return Command::Fight {
            target: parse_target(rest),
        };
    }
    if TALK_VERBS.contains(&verb.as_str()) {
        return Command::Talk {
            target: parse_talk_target(rest),
        };
    }
    if STATUS_VERBS.contains(&verb.as_str()) {
        return Command::Status;
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

fn parse_move(rest: &[&str]) -> Command {
    match rest.first() {
        Some(label) => Command::Move {
            direction: Direction::from_label(label),
        },
        None => Command::MissingDirection,
    }
}

fn parse_target(rest: &[&str]) -> Option<String> {
    if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    }
}

fn parse_talk_target(rest: &[&str]) -> Option<String> {
    // Skip "to" or "with" if present
    match rest.split_first() {
        Some((word, remaining))
            if word.eq_ignore_ascii_case("to") || word.eq_ignore_ascii_case("with") =>
        {
            parse_target(remaining)
        }
        _ => parse_target(rest),
    }
}
