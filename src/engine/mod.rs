mod commands;
mod console;
mod inventory;
mod output;
mod puzzle;
mod render;
mod rooms;

pub use commands::{
    CommandHandler, EXIT_COMMAND, Player, Scene, handle_drop, handle_inventory, handle_take,
};
pub use console::{COMMAND_PROMPT, Console, Terminal, normalize, split_verb};
pub use inventory::Inventory;
pub use output::{Output, OutputBlock};
pub use puzzle::{Attempt, run_locker};
pub use render::{render_block, render_floor};
