use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    /// Heading such as a room name; set off by a blank line.
    Title(String),
    /// A line directly following the previous one.
    Text(String),
    /// A message that starts a new paragraph.
    Event(String),
    /// Labeled bullet list ("Exits:", "Inventory:", ...).
    List { label: String, entries: Vec<String> },
    /// An empty separator line.
    Blank,
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    /// Empty lists are dropped entirely, label included.
    pub fn list<I, S>(&mut self, label: impl Into<String>, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if !entries.is_empty() {
            self.blocks.push(OutputBlock::List {
                label: label.into(),
                entries,
            });
        }
    }

    pub fn blank_line(&mut self) {
        self.blocks.push(OutputBlock::Blank);
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            match block {
                OutputBlock::Title(t) => writeln!(f, "\n== {} ==", t)?,
                OutputBlock::Text(line) => writeln!(f, "{}", line)?,
                OutputBlock::Event(ev) => writeln!(f, "\n{}", ev)?,
                OutputBlock::Blank => writeln!(f)?,
                OutputBlock::List { label, entries } => {
                    writeln!(f, "\n{}:", label)?;
                    for entry in entries {
                        writeln!(f, " - {}", entry)?;
                    }
                }
            }
        }
        Ok(())
    }
}
