#[derive(Debug, Clone, PartialEq)]
pub enum OutputBlock {
    Title(String),
    Panel { heading: String, body: String },
    Text(String),
    Hint(String),
    Divider,
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn panel(&mut self, heading: impl Into<String>, body: impl Into<String>) {
        let body = body.into();
        if !body.trim().is_empty() {
            self.blocks.push(OutputBlock::Panel {
                heading: heading.into(),
                body,
            });
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn hint(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Hint(s));
        }
    }

    pub fn divider(&mut self) {
        // never two in a row
        if !matches!(self.blocks.last(), Some(OutputBlock::Divider)) {
            self.blocks.push(OutputBlock::Divider);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All text, panel and hint lines, joined. Handy for assertions.
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                OutputBlock::Title(s) | OutputBlock::Text(s) | OutputBlock::Hint(s) => {
                    Some(s.as_str())
                }
                OutputBlock::Panel { body, .. } => Some(body.as_str()),
                OutputBlock::Divider => None,
            })
            .collect::<Vec<&str>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_dropped() {
        let mut out = Output::new();
        out.say("   ");
        out.title("");
        out.hint("\n");
        out.panel("AREA", " ");
        assert!(out.is_empty());
    }

    #[test]
    fn dividers_do_not_stack() {
        let mut out = Output::new();
        out.divider();
        out.divider();
        out.say("x");
        out.divider();
        assert_eq!(out.blocks.len(), 3);
    }
}
