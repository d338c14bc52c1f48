use std::fmt;

/// Visual mode of a view, the secondary axis of style lookup.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum VisualState {
    #[default]
    Normal,
    Focused,
    Selected,
    Disabled,
}

impl VisualState {
    pub const ALL: [VisualState; 4] = [
        VisualState::Normal,
        VisualState::Focused,
        VisualState::Selected,
        VisualState::Disabled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VisualState::Normal => "normal",
            VisualState::Focused => "focused",
            VisualState::Selected => "selected",
            VisualState::Disabled => "disabled",
        }
    }

    /// Parses the lowercase state name used in theme sources.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
