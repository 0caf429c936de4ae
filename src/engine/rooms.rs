use tracing::info;

use crate::engine::commands::Scene;
use crate::engine::inventory::Inventory;
use crate::engine::output::Output;
use crate::engine::puzzle;
use crate::error::GameError;
use crate::world::{Room, RoomKind};

impl Room {
    /// One "enter" event: bump the visit counter, run the story hook, then show items
    /// (or whatever the room shows instead).
    pub fn enter_room(&mut self, scene: &mut Scene<'_>) -> Result<(), GameError> {
        self.visited += 1;
        info!(room = %self.label, visited = self.visited, "entering room");

        let mut out = Output::new();
        out.title(self.label.clone());
        out.say(self.description.trim());
        self.run_story(&mut scene.player.inventory, &mut out);
        scene.term.show(out)?;

        self.show_items(scene)
    }

    /// Narrative hook. May print and may take things out of the carried set.
    pub fn run_story(&mut self, inventory: &mut Inventory, out: &mut Output) {
        if self.visited == 1 {
            if let Some(text) = &self.first_visit {
                out.say(text.trim());
            }
        }

        if let RoomKind::Sink(sink) = &self.kind {
            out.say(sink.story.trim());
            if inventory.remove(&sink.swallows).is_some() {
                info!(room = %self.label, item = %sink.swallows, "item lost to the story");
                out.say(sink.swallow_text.trim());
            }
        }
    }

    pub fn show_items(&mut self, scene: &mut Scene<'_>) -> Result<(), GameError> {
        match &mut self.kind {
            RoomKind::Locker(locker) => puzzle::run_locker(locker, &mut self.item, scene),
            RoomKind::Plain | RoomKind::Sink(_) => {
                let mut out = Output::new();
                match &self.item {
                    Some(item) => {
                        out.say(format!("You see: {} ({})", item.name, item.description));
                        if item.movable {
                            out.hint(format!("Type 'take {}' to pick it up.", item.name));
                        }
                    }
                    None => {
                        out.say("There is nothing of interest lying around.");
                        if !scene.player.inventory.is_empty() {
                            out.hint("You could 'drop' something here.");
                        }
                    }
                }
                scene.term.show(out)?;
                Ok(())
            }
        }
    }
}
