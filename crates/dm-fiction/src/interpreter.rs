//! Command execution against the shared dungeon.
//!
//! Every expected outcome (unknown verb, empty room, missing monster) is a
//! reply string. Only dungeon failures surface as [`FictionError`].
//!
//! [`FictionError`]: crate::FictionError

use dm_core::{Dungeon, Monster, RoomId};
use tracing::debug;

use crate::error::FictionResult;
use crate::narrative::{
    FIGHT_GOBLIN, FIGHT_ROBOT, GO_WHERE, NO_COMMAND, NO_SUCH_MONSTER, QUIET_ROOM, TALK_GOBLIN,
    TALK_ROBOT, UNKNOWN_COMMAND, ending_text,
};
use crate::parser::{Command, Direction, parse_command};
use crate::player::Player;

/// Parse and execute one line of input for `player`.
pub fn process_command(
    dungeon: &Dungeon,
    player: &mut Player,
    input: &str,
) -> FictionResult<String> {
    let command = parse_command(input);
    debug!(?command, location = %player.location, "dispatching command");
    execute(dungeon, player, command)
}

/// Execute a parsed command.
pub fn execute(dungeon: &Dungeon, player: &mut Player, command: Command) -> FictionResult<String> {
    match command {
        Command::Empty => Ok(NO_COMMAND.to_string()),
        Command::Move { direction } => do_move(dungeon, player, &direction),
        Command::MissingDirection => Ok(GO_WHERE.to_string()),
        Command::Look => do_look(dungeon, player),
        Command::Fight { target } => do_fight(dungeon, player, target.as_deref()),
        Command::Talk { target } => do_talk(dungeon, player, target.as_deref()),
        Command::Status => Ok(player.status()),
        Command::Unknown { .. } => Ok(UNKNOWN_COMMAND.to_string()),
    }
}

fn do_move(dungeon: &Dungeon, player: &mut Player, direction: &Direction) -> FictionResult<String> {
    let traversal = dungeon.traverse(player.location, direction.name())?;
    let room = dungeon.room(traversal.room)?;
    player.location = traversal.room;

    let encounter = encounter(dungeon, traversal.room)?;
    Ok(format!(
        "You move {}.\n{}\n{encounter}",
        direction.name(),
        room.description()
    ))
}

fn encounter(dungeon: &Dungeon, room: RoomId) -> FictionResult<String> {
    Ok(match dungeon.random_monster(room)? {
        Some(monster) => format!(
            "You encounter a {}! {}",
            monster.name(),
            monster.description()
        ),
        None => QUIET_ROOM.to_string(),
    })
}

fn do_look(dungeon: &Dungeon, player: &Player) -> FictionResult<String> {
    Ok(dungeon.room(player.location)?.description().to_string())
}

/// A named monster in the player's room, or a random one when unnamed.
fn resolve_target(
    dungeon: &Dungeon,
    player: &Player,
    target: Option<&str>,
) -> FictionResult<Option<Monster>> {
    Ok(match target {
        Some(name) => dungeon.room(player.location)?.monster_by_name(name)?,
        None => dungeon.random_monster(player.location)?,
    })
}

fn do_fight(dungeon: &Dungeon, player: &mut Player, target: Option<&str>) -> FictionResult<String> {
    let Some(monster) = resolve_target(dungeon, player, target)? else {
        return Ok(NO_SUCH_MONSTER.to_string());
    };

    let reply = if monster.is_hostile() {
        if monster.is_named("goblin") {
            player.befriend();
            after_mutation(player, FIGHT_GOBLIN.to_string())
        } else {
            format!("You engage the {} in combat!", monster.name())
        }
    } else if monster.is_named("robot") {
        player.estrange();
        after_mutation(player, FIGHT_ROBOT.to_string())
    } else {
        format!("The {} does not seem to want to fight you.", monster.name())
    };

    debug!(monster = monster.name(), friends = player.friends, "fight");
    Ok(reply)
}

fn do_talk(dungeon: &Dungeon, player: &mut Player, target: Option<&str>) -> FictionResult<String> {
    let Some(monster) = resolve_target(dungeon, player, target)? else {
        return Ok(NO_SUCH_MONSTER.to_string());
    };

    let reply = if monster.is_named("robot") {
        player.befriend();
        after_mutation(player, TALK_ROBOT.to_string())
    } else if monster.is_named("goblin") {
        player.estrange();
        after_mutation(player, TALK_GOBLIN.to_string())
    } else {
        format!(
            "You try to talk to the {}. {}",
            monster.name(),
            monster.description()
        )
    };

    debug!(monster = monster.name(), friends = player.friends, "talk");
    Ok(reply)
}

/// Replace `reply` with the ending text once a threshold is crossed.
fn after_mutation(player: &Player, reply: String) -> String {
    match player.ending() {
        Some(ending) => ending_text(ending).to_string(),
        None => reply,
    }
}
