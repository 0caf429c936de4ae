use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::model::{Building, Floor, Item, LockerPuzzle, Room, RoomKind, SinkStory, World};
use super::validator::{ValidationError, validate_world_file};
use crate::error::WorldError;

const BUNDLED_WORLD: &str = include_str!("../../worlds/zdd.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
pub(super) struct WorldFile {
    pub(super) game: GameHeader,
    #[serde(default)]
    pub(super) floor: Vec<FloorConfig>, // [[floor]] blocks
    #[serde(default)]
    pub(super) connection: Vec<ConnectionConfig>, // [[connection]] blocks
    #[serde(default)]
    pub(super) item: Vec<ItemConfig>, // [[item]] blocks
    #[serde(default)]
    pub(super) room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
pub(super) struct GameHeader {
    pub(super) title: String,
    pub(super) start_floor: String,
    #[serde(default)]
    pub(super) intro: String,
}

#[derive(Deserialize)]
pub(super) struct FloorConfig {
    pub(super) name: String,
    #[serde(default)]
    pub(super) description: String,
}

#[derive(Deserialize)]
pub(super) struct ConnectionConfig {
    pub(super) from: String,
    pub(super) direction: String,
    pub(super) to: String,
}

#[derive(Deserialize)]
pub(super) struct ItemConfig {
    pub(super) name: String,
    #[serde(default)]
    pub(super) description: String,
    #[serde(default = "default_true")]
    pub(super) movable: bool,
}

#[derive(Deserialize, Default, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub(super) enum RoomKindConfig {
    #[default]
    Plain,
    Sink,
    Locker,
}

#[derive(Deserialize)]
pub(super) struct RoomConfig {
    pub(super) floor: String,
    pub(super) label: String,
    #[serde(default)]
    pub(super) description: String,
    #[serde(default)]
    pub(super) first_visit: Option<String>,
    #[serde(default)]
    pub(super) item: Option<String>,
    #[serde(default)]
    pub(super) kind: RoomKindConfig,

    // sink rooms
    #[serde(default)]
    pub(super) story: String,
    #[serde(default)]
    pub(super) swallows: Option<String>,
    #[serde(default)]
    pub(super) swallow_text: String,

    // locker rooms
    #[serde(default)]
    pub(super) code: Option<String>,
    #[serde(default)]
    pub(super) reveal: String,
}

// Helper for serde default
fn default_true() -> bool {
    true
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path)?;
    info!(path = %path.display(), "loading world file");
    load_world_from_str(&contents)
}

/// The building that ships with the binary.
pub fn load_bundled_world() -> Result<World, WorldError> {
    load_world_from_str(BUNDLED_WORLD)
}

pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;

    let problems = validate_world_file(&world_file);
    if !problems.is_empty() {
        return Err(WorldError::Invalid(problems));
    }

    build_world(world_file)
}

/// Assumes the file already passed validation; lookups that would fail there are skipped here.
fn build_world(world_file: WorldFile) -> Result<World, WorldError> {
    let mut building = Building::new();

    for floor_cfg in world_file.floor {
        building.add_floor(Floor::new(
            floor_cfg.name,
            normalize_multiline_desc(&floor_cfg.description),
        ));
    }

    for conn in &world_file.connection {
        if let (Some(from), Some(to)) = (building.floor_id(&conn.from), building.floor_id(&conn.to))
        {
            building.connect(from, &conn.direction, to);
        }
    }

    let mut items: HashMap<String, Item> = world_file
        .item
        .into_iter()
        .map(|ic| {
            let item = Item::new(
                ic.name.clone(),
                normalize_multiline_desc(&ic.description),
                ic.movable,
            );
            (ic.name, item)
        })
        .collect();

    for room_cfg in world_file.room {
        let Some(floor_id) = building.floor_id(&room_cfg.floor) else {
            continue;
        };

        let kind = match room_cfg.kind {
            RoomKindConfig::Plain => RoomKind::Plain,
            RoomKindConfig::Sink => RoomKind::Sink(SinkStory {
                story: normalize_multiline_desc(&room_cfg.story),
                swallows: room_cfg.swallows.clone().unwrap_or_default(),
                swallow_text: normalize_multiline_desc(&room_cfg.swallow_text),
            }),
            RoomKindConfig::Locker => RoomKind::Locker(LockerPuzzle::new(
                room_cfg.code.clone().unwrap_or_default(),
                normalize_multiline_desc(&room_cfg.reveal),
            )),
        };

        let mut room = Room::new(
            room_cfg.label.clone(),
            normalize_multiline_desc(&room_cfg.description),
        )
        .with_kind(kind);

        if let Some(text) = &room_cfg.first_visit {
            room = room.with_first_visit(normalize_multiline_desc(text));
        }
        if let Some(item) = room_cfg.item.as_deref().and_then(|name| items.remove(name)) {
            room = room.with_item(item);
        }

        building.floor_mut(floor_id).add_room(room_cfg.label, room);
    }

    for (id, floor) in building.floors() {
        if floor.directions().next().is_none() {
            warn!(floor = %floor.name, ?id, "floor has no way out");
        }
    }

    let start_floor = building
        .floor_id(&world_file.game.start_floor)
        .ok_or_else(|| {
            WorldError::Invalid(vec![ValidationError::new(format!(
                "start_floor '{}' not found among floors",
                world_file.game.start_floor
            ))])
        })?;

    Ok(World {
        title: world_file.game.title,
        intro: normalize_multiline_desc(&world_file.game.intro),
        building,
        start_floor,
    })
}

fn normalize_multiline_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_blank_lines = 0usize;
    let mut first_text_seen = false;

    for line in raw.lines() {
        // Indentation in the TOML file never reaches the player.
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank_lines += 1;
            continue;
        }

        if first_text_seen {
            match pending_blank_lines {
                // wrapped line
                0 => result.push(' '),
                1 => result.push('\n'),
                _ => result.push_str("\n\n"),
            }
        }
        result.push_str(trimmed);
        first_text_seen = true;
        pending_blank_lines = 0;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
        [game]
        title = "TEST TOWER"
        start_floor = "cellar"
        intro = """
        You wake up.

        It is dark.
        """

        [[floor]]
        name = "cellar"
        description = "Chilly."

        [[floor]]
        name = "ground floor"
        description = "Open space."

        [[connection]]
        from = "cellar"
        direction = "Up"
        to = "ground floor"

        [[item]]
        name = "old book"
        description = "a real book made of paper"

        [[room]]
        floor = "cellar"
        label = "archive"
        description = "Dusty."
        item = "old book"

        [[room]]
        floor = "cellar"
        label = "Room 51"
        description = "Hidden."
        kind = "locker"
        code = "2431"
        reveal = "A notebook."
    "#;

    #[test]
    fn builds_floors_rooms_and_items() {
        let world = load_world_from_str(SMALL).unwrap();
        let b = &world.building;

        let cellar = b.floor_id("cellar").unwrap();
        let ground = b.floor_id("ground floor").unwrap();
        assert_eq!(world.start_floor, cellar);
        assert_eq!(b.floor(cellar).get_floor_in_direction("up"), Some(ground));
        assert_eq!(b.floor(ground).get_floor_in_direction("down"), None);

        let archive = b.floor(cellar).get_room("archive").unwrap();
        let book = archive.item.as_ref().unwrap();
        assert_eq!(book.name, "old book");
        assert!(book.movable);

        let locker = b.floor(cellar).get_room("Room 51").unwrap();
        assert!(matches!(&locker.kind, RoomKind::Locker(p) if !p.is_solved()));
        assert_eq!(world.intro, "You wake up.\nIt is dark.");
    }

    #[test]
    fn syntax_errors_surface_as_parse_errors() {
        let err = load_world_from_str("[game\ntitle = 1").unwrap_err();
        assert!(matches!(err, WorldError::Parse(_)));
    }

    #[test]
    fn invalid_worlds_are_rejected_at_load() {
        let broken = SMALL.replace("code = \"2431\"", "");
        let err = load_world_from_str(&broken).unwrap_err();
        match err {
            WorldError::Invalid(problems) => {
                assert!(problems.iter().any(|p| p.message.contains("Room 51")));
            }
            other => panic!("expected validation failure, got {other}"),
        }
    }

    #[test]
    fn bundled_world_loads() {
        let world = load_bundled_world().unwrap();
        assert_eq!(world.building.floors().count(), 5);
        let cellar = world.building.floor(world.start_floor);
        assert_eq!(cellar.name, "cellar");
        assert_eq!(
            cellar.room_labels().collect::<Vec<_>>(),
            vec!["archive", "toilet", "Room 51"]
        );
    }

    #[test]
    fn wrapped_lines_join_and_blank_lines_break() {
        assert_eq!(normalize_multiline_desc("  a\n  b\n\n  c\n\n\n d"), "a b\nc\n\nd");
        assert_eq!(normalize_multiline_desc("\n\n"), "");
    }
}
