use tracing::{debug, info};

use crate::engine::commands::Scene;
use crate::engine::console::{COMMAND_PROMPT, normalize};
use crate::engine::output::Output;
use crate::error::GameError;
use crate::world::{Item, LockerPuzzle};

const PASSWORD_PROMPT: &str = "> Enter password: ";

/// Outcome of one guess at the locker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    AlreadyOpen,
    Opened,
    Wrong,
}

impl LockerPuzzle {
    /// Compares the guess verbatim against the code. Once solved, stays solved.
    pub fn attempt(&mut self, guess: &str) -> Attempt {
        if self.solved {
            return Attempt::AlreadyOpen;
        }
        if guess == self.code {
            self.solved = true;
            Attempt::Opened
        } else {
            Attempt::Wrong
        }
    }

    /// One line of beeps per digit of the code.
    pub fn beeps(&self) -> Vec<String> {
        self.code
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|n| "Beep ".repeat(n as usize).trim_end().to_string())
            .collect()
    }
}

fn menu(out: &mut Output) {
    out.say("You can:");
    out.say("  - Inspect the machines   (inspect)");
    out.say("  - Listen to the sounds   (listen)");
    out.say("  - Try to open the locker (open)");
    out.say("  - Check the terminal     (terminal)");
    out.say("  - Leave the puzzle menu  (back)");
}

/// The locker room's modal loop. Global commands are offered to the handler first;
/// `back` is the only normal way out.
pub fn run_locker(
    locker: &mut LockerPuzzle,
    room_item: &mut Option<Item>,
    scene: &mut Scene<'_>,
) -> Result<(), GameError> {
    loop {
        let mut out = Output::new();
        menu(&mut out);
        scene.term.show(out)?;

        let Some(line) = scene.term.prompt(COMMAND_PROMPT)? else {
            scene.player.game_active = false;
            return Ok(());
        };
        let action = normalize(&line);
        let mut out = Output::new();

        if action.is_empty() {
            out.say("Please type one of the actions above.");
            scene.term.show(out)?;
            continue;
        }

        if scene.handler.handle_global_commands(
            &action,
            scene.player,
            Some(&mut *room_item),
            &mut out,
        ) {
            scene.term.show(out)?;
            if !scene.player.game_active {
                return Ok(());
            }
            continue;
        }

        debug!(action = %action, "locker action");
        match action.as_str() {
            "back" => {
                out.say("You step away from the machines.");
                scene.term.show(out)?;
                return Ok(());
            }
            "inspect" => out.say("The machines are dusty and ancient. They don't seem operational."),
            "terminal" => out.say("The terminal is dead. No power, no display."),
            "listen" => {
                out.say("You close your eyes and listen carefully...");
                out.hint("Count the number of beeps in each group.");
                for beeps in locker.beeps() {
                    out.say(beeps);
                    out.say("---");
                }
            }
            "open" => {
                scene.term.show(out)?;
                try_open_locker(locker, room_item, scene)?;
                if !scene.player.game_active {
                    return Ok(());
                }
                continue;
            }
            _ => out.say("That's not a valid action."),
        }
        scene.term.show(out)?;
    }
}

fn try_open_locker(
    locker: &mut LockerPuzzle,
    room_item: &mut Option<Item>,
    scene: &mut Scene<'_>,
) -> Result<(), GameError> {
    let mut out = Output::new();

    if locker.is_solved() {
        out.say("The locker is already open.");
        scene.term.show(out)?;
        return Ok(());
    }

    let Some(line) = scene.term.prompt(PASSWORD_PROMPT)? else {
        scene.player.game_active = false;
        return Ok(());
    };

    // global commands still win here; codes are digits only
    if scene.handler.handle_global_commands(
        &normalize(&line),
        scene.player,
        Some(room_item),
        &mut out,
    ) {
        scene.term.show(out)?;
        return Ok(());
    }

    match locker.attempt(line.trim()) {
        Attempt::Opened => {
            info!("locker opened");
            out.say("The lock clicks open!");
            out.say(locker.reveal.trim());
        }
        Attempt::Wrong => {
            out.say("Incorrect password.");
            out.hint("Maybe listening to the beeps will help...");
        }
        Attempt::AlreadyOpen => out.say("The locker is already open."),
    }
    scene.term.show(out)?;
    Ok(())
}
