mod loader;
mod model;
mod validator;

pub use loader::{load_bundled_world, load_world_from_file, load_world_from_str};

pub use model::{
    Building, Floor, FloorId, Item, LockerPuzzle, Room, RoomKind, SinkStory, World,
};
pub use validator::ValidationError;
