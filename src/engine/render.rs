use crate::engine::output::{Output, OutputBlock};
use crate::world;

const DIVIDER_WIDTH: usize = 48;

/// Floor header shown at the start of every top-level cycle.
pub fn render_floor(out: &mut Output, floor: &world::Floor) {
    out.title(floor.name.to_uppercase());
    out.panel("AREA", floor.description.trim());
    out.say(floor.get_orientation());
    out.hint("Type 'help' for commands or 'inventory' to check what you're carrying.");
    out.divider();
}

/// Turns one block into the lines that reach the terminal.
pub fn render_block(block: &OutputBlock) -> String {
    match block {
        OutputBlock::Title(t) => {
            let bar = "=".repeat(t.chars().count() + 8);
            format!("\n{bar}\n    {t}\n{bar}")
        }
        OutputBlock::Panel { heading, body } => {
            let mut s = format!("[{heading}]");
            for line in body.lines() {
                s.push_str("\n  ");
                s.push_str(line);
            }
            s
        }
        OutputBlock::Text(line) => line.clone(),
        OutputBlock::Hint(h) => format!("(hint) {h}"),
        OutputBlock::Divider => "-".repeat(DIVIDER_WIDTH),
    }
}
