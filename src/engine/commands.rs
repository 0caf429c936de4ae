use tracing::{debug, info};

use crate::engine::console::{Terminal, split_verb};
use crate::engine::inventory::Inventory;
use crate::engine::output::Output;
use crate::world::Item;

pub const EXIT_COMMAND: &str = "exit";

const HELP_TEXT: &str = "\
On a floor:
  go <direction>   take the stairs, e.g. 'go up'
  enter <room>     enter one of the rooms listed on this floor
  look             look around again
Anywhere:
  inventory (i)    show what you are carrying
  take <item>      pick up the item in the room you are in
  drop <item>      leave an item in the room you are in
  help             show this text
  exit (quit)      stop the game";

/// State that the controller owns and every loop mutates.
#[derive(Debug)]
pub struct Player {
    pub inventory: Inventory,
    pub game_active: bool,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            inventory: Inventory::new(),
            game_active: true,
        }
    }
}

/// Shared context handed explicitly to room behavior.
pub struct Scene<'a> {
    pub term: &'a mut dyn Terminal,
    pub handler: &'a CommandHandler,
    pub player: &'a mut Player,
}

/// Commands that behave the same at any nesting depth.
#[derive(Debug, Default)]
pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        CommandHandler
    }

    /// Returns true if `action` was a global command. Only `exit` also clears
    /// `player.game_active`; callers check both.
    ///
    /// `room_item` is the item slot of the room the player is in, if any.
    pub fn handle_global_commands(
        &self,
        action: &str,
        player: &mut Player,
        room_item: Option<&mut Option<Item>>,
        out: &mut Output,
    ) -> bool {
        let (verb, rest) = split_verb(action);

        match verb {
            "exit" | "quit" if rest.is_empty() => {
                debug!("global command: exit");
                player.game_active = false;
                out.say("You decide you've seen enough. Goodbye.");
                true
            }
            "help" if rest.is_empty() => {
                out.say(HELP_TEXT);
                true
            }
            "inventory" | "i" if rest.is_empty() => {
                handle_inventory(out, &player.inventory);
                true
            }
            "take" => {
                handle_take(out, &mut player.inventory, room_item, rest);
                true
            }
            "drop" => {
                handle_drop(out, &mut player.inventory, room_item, rest);
                true
            }
            _ => false,
        }
    }
}

pub fn handle_inventory(out: &mut Output, inventory: &Inventory) {
    if inventory.is_empty() {
        out.say("You are carrying nothing.");
        return;
    }

    out.say("You are carrying:");
    for item in inventory.iter() {
        out.say(format!("  {} - {}", item.name, item.description));
    }
}

pub fn handle_take(
    out: &mut Output,
    inventory: &mut Inventory,
    room_item: Option<&mut Option<Item>>,
    target_name: &str,
) {
    let query = target_name.trim();
    if query.is_empty() {
        out.say("Take what?");
        return;
    }

    let Some(slot) = room_item else {
        out.say("You are standing in the hallway. There is nothing here to take.");
        return;
    };

    match slot {
        Some(item) if item.name.eq_ignore_ascii_case(query) => {
            if !item.movable {
                out.say(format!("You can't take the {}.", item.name));
                return;
            }
        }
        _ => {
            out.say("You don't see that here.");
            return;
        }
    }

    let Some(item) = slot.take() else {
        return;
    };
    let name = item.name.clone();
    match inventory.insert(item) {
        Ok(()) => {
            info!(item = %name, "item taken");
            out.say(format!("You take the {name}."));
        }
        // same name already carried: the item stays in the room
        Err(item) => {
            out.say(format!("You already carry something called '{name}'."));
            *slot = Some(item);
        }
    }
}

pub fn handle_drop(
    out: &mut Output,
    inventory: &mut Inventory,
    room_item: Option<&mut Option<Item>>,
    target_name: &str,
) {
    let query = target_name.trim();
    if query.is_empty() {
        out.say("Drop what?");
        return;
    }

    if !inventory.contains(query) {
        out.say("You aren't carrying that.");
        return;
    }

    let Some(slot) = room_item else {
        out.say("Better not leave that lying in the hallway. Enter a room first.");
        return;
    };

    if let Some(existing) = slot.as_ref() {
        out.say(format!(
            "There is no room for it here; the {} is already lying around.",
            existing.name
        ));
        return;
    }

    if let Some(item) = inventory.remove(query) {
        info!(item = %item.name, "item dropped");
        out.say(format!("You drop the {}.", item.name));
        *slot = Some(item);
    }
}
