//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Runtime world type handed to the adventure controller.
#[derive(Debug)]
pub struct World {
    pub title: String,
    pub intro: String,
    pub building: Building,
    pub start_floor: FloorId,
}

/// Index of a floor inside its [`Building`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloorId(pub(crate) usize);

/// Owns every floor; floors refer to each other by [`FloorId`].
#[derive(Debug, Default)]
pub struct Building {
    floors: Vec<Floor>,
}

#[derive(Debug)]
pub struct Floor {
    pub name: String,
    pub description: String,
    rooms: Vec<(String, Room)>,           // insertion order is display order
    connections: Vec<(String, FloorId)>, // direction keys are stored lowercased
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub movable: bool,
}

#[derive(Debug)]
pub struct Room {
    pub label: String,
    pub description: String,
    pub first_visit: Option<String>,
    pub item: Option<Item>,
    pub kind: RoomKind,
    pub(crate) visited: u32,
}

#[derive(Debug)]
pub enum RoomKind {
    /// Narrative-only room: description, optional first-visit text, default item listing.
    Plain,
    /// Runs a story on every entry and swallows a named item if the player carries it.
    Sink(SinkStory),
    /// Replaces the item listing with the locker puzzle menu.
    Locker(LockerPuzzle),
}

#[derive(Debug)]
pub struct SinkStory {
    pub story: String,
    pub swallows: String,
    pub swallow_text: String,
}

#[derive(Debug)]
pub struct LockerPuzzle {
    pub(crate) code: String,
    pub(crate) solved: bool,
    pub(crate) reveal: String,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, movable: bool) -> Self {
        Item {
            name: name.into(),
            description: description.into(),
            movable,
        }
    }
}

impl Room {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Room {
            label: label.into(),
            description: description.into(),
            first_visit: None,
            item: None,
            kind: RoomKind::Plain,
            visited: 0,
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }

    pub fn with_kind(mut self, kind: RoomKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_first_visit(mut self, text: impl Into<String>) -> Self {
        self.first_visit = Some(text.into());
        self
    }

    /// Number of times the room has been entered.
    pub fn visited(&self) -> u32 {
        self.visited
    }
}

impl LockerPuzzle {
    pub fn new(code: impl Into<String>, reveal: impl Into<String>) -> Self {
        LockerPuzzle {
            code: code.into(),
            solved: false,
            reveal: reveal.into(),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }
}

impl Floor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Floor {
            name: name.into(),
            description: description.into(),
            rooms: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Registers a one-way edge. An existing edge in the same direction is replaced.
    pub fn add_connection(&mut self, direction: &str, target: FloorId) {
        let key = direction.trim().to_lowercase();
        match self.connections.iter_mut().find(|(d, _)| *d == key) {
            Some(slot) => slot.1 = target,
            None => self.connections.push((key, target)),
        }
    }

    pub fn get_floor_in_direction(&self, direction: &str) -> Option<FloorId> {
        let key = direction.trim().to_lowercase();
        self.connections
            .iter()
            .find(|(d, _)| *d == key)
            .map(|(_, id)| *id)
    }

    /// Registers a room under `label`, replacing any room already there.
    pub fn add_room(&mut self, label: impl Into<String>, room: Room) {
        let label = label.into();
        match self.rooms.iter_mut().find(|(l, _)| *l == label) {
            Some(slot) => slot.1 = room,
            None => self.rooms.push((label, room)),
        }
    }

    /// Maps player input onto a registered label.
    ///
    /// An exact match wins; otherwise the first label equal ignoring ASCII case is used,
    /// so lowercased input still reaches labels like "Room 51".
    pub fn resolve_room_label(&self, input: &str) -> Option<&str> {
        self.rooms
            .iter()
            .find(|(l, _)| l == input)
            .or_else(|| self.rooms.iter().find(|(l, _)| l.eq_ignore_ascii_case(input)))
            .map(|(l, _)| l.as_str())
    }

    pub fn get_room(&self, label: &str) -> Option<&Room> {
        self.rooms.iter().find(|(l, _)| l == label).map(|(_, r)| r)
    }

    pub fn get_room_mut(&mut self, label: &str) -> Option<&mut Room> {
        self.rooms
            .iter_mut()
            .find(|(l, _)| l == label)
            .map(|(_, r)| r)
    }

    pub fn room_labels(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(|(l, _)| l.as_str())
    }

    pub fn directions(&self) -> impl Iterator<Item = &str> {
        self.connections.iter().map(|(d, _)| d.as_str())
    }

    /// Human-readable listing of directions and rooms.
    pub fn get_orientation(&self) -> String {
        let dirs = self.directions().collect::<Vec<&str>>();
        let rooms = self.room_labels().collect::<Vec<&str>>();

        let dirs = if dirs.is_empty() {
            "(none)".to_string()
        } else {
            dirs.join(", ")
        };
        let rooms = if rooms.is_empty() {
            "(none)".to_string()
        } else {
            rooms.join(", ")
        };

        format!("Directions: {dirs}\nRooms: {rooms}")
    }
}

impl Building {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_floor(&mut self, floor: Floor) -> FloorId {
        self.floors.push(floor);
        FloorId(self.floors.len() - 1)
    }

    pub fn floor(&self, id: FloorId) -> &Floor {
        &self.floors[id.0]
    }

    pub fn floor_mut(&mut self, id: FloorId) -> &mut Floor {
        &mut self.floors[id.0]
    }

    pub fn floor_id(&self, name: &str) -> Option<FloorId> {
        self.floors
            .iter()
            .position(|f| f.name == name)
            .map(FloorId)
    }

    pub fn connect(&mut self, from: FloorId, direction: &str, to: FloorId) {
        self.floor_mut(from).add_connection(direction, to);
    }

    pub fn floors(&self) -> impl Iterator<Item = (FloorId, &Floor)> {
        self.floors.iter().enumerate().map(|(i, f)| (FloorId(i), f))
    }
}
