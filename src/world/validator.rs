use std::collections::{HashMap, HashSet};

use super::loader::{RoomKindConfig, WorldFile};

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Checks a parsed world file for wiring mistakes before anything is built from it.
pub(super) fn validate_world_file(world: &WorldFile) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.game.title.trim().is_empty() {
        errors.push(ValidationError::new("game.title may not be empty"));
    }

    // Floors must exist and be uniquely named
    if world.floor.is_empty() {
        errors.push(ValidationError::new("world has no floors"));
    }

    let mut floor_names: HashSet<&str> = HashSet::new();
    for floor in &world.floor {
        if floor.name.trim().is_empty() {
            errors.push(ValidationError::new("a floor has an empty name"));
        }
        if !floor_names.insert(floor.name.as_str()) {
            errors.push(ValidationError::new(format!(
                "duplicate floor name '{}'",
                floor.name
            )));
        }
    }

    if !floor_names.contains(world.game.start_floor.as_str()) {
        errors.push(ValidationError::new(format!(
            "start_floor '{}' not found among floors",
            world.game.start_floor
        )));
    }

    for conn in &world.connection {
        if conn.direction.trim().is_empty() {
            errors.push(ValidationError::new(format!(
                "connection from '{}' to '{}' has an empty direction",
                conn.from, conn.to
            )));
        }
        for end in [&conn.from, &conn.to] {
            if !floor_names.contains(end.as_str()) {
                errors.push(ValidationError::new(format!(
                    "connection '{}' --{}--> '{}' references missing floor '{}'",
                    conn.from, conn.direction, conn.to, end
                )));
            }
        }
    }

    // Items: unique names, placed at most once
    let mut item_names: HashSet<&str> = HashSet::new();
    for item in &world.item {
        if item.name.trim().is_empty() {
            errors.push(ValidationError::new("an item has an empty name"));
        }
        if !item_names.insert(item.name.as_str()) {
            errors.push(ValidationError::new(format!(
                "duplicate item name '{}'",
                item.name
            )));
        }
    }

    let mut placed: HashMap<&str, &str> = HashMap::new();
    let mut labels: HashSet<(&str, &str)> = HashSet::new();

    for room in &world.room {
        let place = format!("room '{}' on floor '{}'", room.label, room.floor);

        if room.label.trim().is_empty() {
            errors.push(ValidationError::new(format!(
                "a room on floor '{}' has an empty label",
                room.floor
            )));
        }
        if !labels.insert((room.floor.as_str(), room.label.as_str())) {
            errors.push(ValidationError::new(format!(
                "duplicate {place}"
            )));
        }
        if !floor_names.contains(room.floor.as_str()) {
            errors.push(ValidationError::new(format!(
                "{place} references missing floor"
            )));
        }

        if let Some(item) = &room.item {
            if !item_names.contains(item.as_str()) {
                errors.push(ValidationError::new(format!(
                    "{place} holds missing item '{item}'"
                )));
            } else if let Some(first) = placed.insert(item.as_str(), room.label.as_str()) {
                errors.push(ValidationError::new(format!(
                    "item '{item}' is placed in both '{first}' and '{}'",
                    room.label
                )));
            }
        }

        match room.kind {
            RoomKindConfig::Plain => {}
            RoomKindConfig::Sink => match room.swallows.as_deref() {
                Some(name) if !name.trim().is_empty() => {}
                _ => errors.push(ValidationError::new(format!(
                    "{place} is a sink room without 'swallows'"
                ))),
            },
            RoomKindConfig::Locker => {
                let valid = room.code.as_deref().is_some_and(|code| {
                    !code.is_empty() && code.chars().all(|c| ('1'..='9').contains(&c))
                });
                if !valid {
                    errors.push(ValidationError::new(format!(
                        "{place} is a locker room without a code of digits 1-9"
                    )));
                }
            }
        }
    }

    errors
}
