pub mod engine;
pub mod error;
pub mod world;

use tracing::{debug, info};

use engine::{
    COMMAND_PROMPT, CommandHandler, EXIT_COMMAND, Output, Player, Scene, Terminal, normalize,
    render_floor, split_verb,
};
use world::{Building, Floor, FloorId, Room, World};

pub use error::{GameError, WorldError};
pub use world::{load_bundled_world, load_world_from_file, load_world_from_str};

/// Top-level controller: where the player is, what they carry, and the read/dispatch loop.
pub struct Adventure {
    title: String,
    intro: String,
    building: Building,
    current_floor: FloorId,
    current_room: Option<String>,
    player: Player,
    handler: CommandHandler,
}

impl Adventure {
    pub fn new(world: World) -> Self {
        Adventure {
            title: world.title,
            intro: world.intro,
            building: world.building,
            current_floor: world.start_floor,
            current_room: None,
            player: Player::default(),
            handler: CommandHandler::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.player.game_active
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn current_floor(&self) -> &Floor {
        self.building.floor(self.current_floor)
    }

    /// Label of the room the player last entered on this floor, if any.
    pub fn current_room_label(&self) -> Option<&str> {
        self.current_room.as_deref()
    }

    pub fn current_room(&self) -> Option<&Room> {
        let label = self.current_room.as_deref()?;
        self.current_floor().get_room(label)
    }

    /// Runs until the player exits or input ends.
    pub fn play(&mut self, term: &mut dyn Terminal) -> Result<(), GameError> {
        let mut out = Output::new();
        out.title(self.title.clone());
        out.say(self.intro.clone());
        out.divider();
        term.show(out)?;

        while self.player.game_active {
            let mut out = Output::new();
            render_floor(&mut out, self.current_floor());
            term.show(out)?;

            let Some(line) = term.prompt(COMMAND_PROMPT)? else {
                info!("input closed, stopping");
                self.player.game_active = false;
                break;
            };
            self.step(&line, term)?;
        }

        Ok(())
    }

    /// Processes one top-level command, including any room loop it hands control to.
    pub fn step(&mut self, line: &str, term: &mut dyn Terminal) -> Result<(), GameError> {
        let action = normalize(line);
        let mut out = Output::new();

        if action.is_empty() {
            out.say("Please type a command.");
            term.show(out)?;
            return Ok(());
        }

        debug!(action = %action, floor = %self.current_floor().name, "dispatch");

        // 1) global commands
        let room_item = match self.current_room.as_deref() {
            Some(label) => self
                .building
                .floor_mut(self.current_floor)
                .get_room_mut(label)
                .map(|room| &mut room.item),
            None => None,
        };
        if self
            .handler
            .handle_global_commands(&action, &mut self.player, room_item, &mut out)
        {
            term.show(out)?;
            return Ok(());
        }

        let (verb, rest) = split_verb(&action);
        match verb {
            // 2) change floors
            "go" => {
                self.go(rest, &mut out);
                term.show(out)?;
            }
            // 3) enter a room
            "enter" => {
                term.show(out)?;
                self.enter(rest, term)?;
            }
            // 4) re-render only
            "look" if rest.is_empty() => term.show(out)?,
            _ => {
                out.say(format!(
                    "Unknown command! Type '{EXIT_COMMAND}' to stop the game or 'help' for help."
                ));
                term.show(out)?;
            }
        }

        Ok(())
    }

    fn go(&mut self, direction: &str, out: &mut Output) {
        if direction.is_empty() {
            out.say("Please specify a direction, e.g. 'go up'.");
            return;
        }

        match self.current_floor().get_floor_in_direction(direction) {
            Some(next) => {
                info!(
                    from = %self.current_floor().name,
                    to = %self.building.floor(next).name,
                    "changing floor"
                );
                self.current_floor = next;
                self.current_room = None;
            }
            None => out.say("You can't go in that direction!"),
        }
    }

    fn enter(&mut self, label: &str, term: &mut dyn Terminal) -> Result<(), GameError> {
        let mut out = Output::new();
        if label.is_empty() {
            out.say("Please specify a room label, e.g. 'enter archive'.");
            term.show(out)?;
            return Ok(());
        }

        let floor = self.building.floor_mut(self.current_floor);
        let Some(resolved) = floor.resolve_room_label(label).map(str::to_string) else {
            out.say("There is no such room...");
            term.show(out)?;
            return Ok(());
        };

        self.current_room = Some(resolved.clone());
        if let Some(room) = floor.get_room_mut(&resolved) {
            let mut scene = Scene {
                term,
                handler: &self.handler,
                player: &mut self.player,
            };
            room.enter_room(&mut scene)?;
        }
        Ok(())
    }
}
