//! Fixed narrative text sent to players.

use crate::player::Ending;

/// Sent once when a connection opens.
pub const INTRODUCTION: &str = "You are a normal student walking on campus. In front of you, a little robot is delivering food. \
The robot gets stuck on the sidewalk, and you decide to help it. \
Suddenly, you get hit by a car and die! \
When you open your eyes, you find yourself transformed into a small food delivery robot. Your adventure begins!\n\n\
Available commands:\n\
go [direction] - Move in a direction (north, south, east, west)\n\
look - Get a description of your current location\n\
fight [monster] - Engage in combat with a monster\n\
talk [monster] - Attempt to talk to a monster\n\
status - See your current friends count\n\
quit or exit - Exit game\n";

/// Reply to blank input.
pub const NO_COMMAND: &str = "No command received. Please enter a valid command.";
/// Reply to an unrecognised verb.
pub const UNKNOWN_COMMAND: &str = "Unknown command.";
/// Reply to `go` without a direction.
pub const GO_WHERE: &str = "Go where?";
/// Reply when no monster matches a fight or talk target.
pub const NO_SUCH_MONSTER: &str = "No such monster here.";
/// Encounter text for an empty room.
pub const QUIET_ROOM: &str = "The room is quiet... too quiet.";
/// Reply to `quit` or `exit`.
pub const GOODBYE: &str = "Goodbye!";
/// Reply when a command failed unexpectedly.
pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";

/// Fighting a Goblin.
pub const FIGHT_GOBLIN: &str =
    "You bravely engage the Goblin in combat, gaining respect from others.";
/// Fighting a Robot.
pub const FIGHT_ROBOT: &str = "Fighting the Robot loses you a friend.";
/// Talking to a Robot.
pub const TALK_ROBOT: &str = "The robot beeps happily, and you feel a bond forming.";
/// Talking to a Goblin.
pub const TALK_GOBLIN: &str =
    "The goblin grunts and turns away, clearly uninterested in friendship.";

/// Text shown when the friends count reaches -3.
pub const BAD_ENDING: &str =
    "Bad ending achieved. You have made too many enemies. You can either quit or continue playing.";
/// Text shown when the friends count reaches 3.
pub const GOOD_ENDING: &str = "Good ending achieved. You have made so many friends along the way that now they have joined you in building a society. You can either quit or continue playing.";

/// The message for a reached ending.
pub fn ending_text(ending: Ending) -> &'static str {
    match ending {
        Ending::Bad => BAD_ENDING,
        Ending::Good => GOOD_ENDING,
    }
}
