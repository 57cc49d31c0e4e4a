use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSection {
    Application,
    Edit,
    Window,
}

/// Ordered menu sections handed to the host. Built once, never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuDescriptor {
    sections: Vec<MenuSection>,
}

impl MenuDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section: MenuSection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
