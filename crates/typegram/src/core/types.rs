//! Core type definitions shared by the analyzer and the formatters
//!
//! Access levels, the output character set and the rendering configuration.

use std::fmt;

/// Access level of a member or method as shown in a diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessModifier {
    Public,
    Private,
    Protected,
    Internal,
}

impl AccessModifier {
    /// Display priority: Public (0), Private (1), Protected (2), Internal (3)
    pub fn priority(self) -> u8 {
        match self {
            AccessModifier::Public => 0,
            AccessModifier::Private => 1,
            AccessModifier::Protected => 2,
            AccessModifier::Internal => 3,
        }
    }

    /// UML visibility glyph followed by a space
    pub fn glyph(self) -> &'static str {
        match self {
            AccessModifier::Public => "+ ",
            AccessModifier::Private => "- ",
            AccessModifier::Protected => "# ",
            AccessModifier::Internal => "~ ",
        }
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessModifier::Public => write!(f, "public"),
            AccessModifier::Private => write!(f, "private"),
            AccessModifier::Protected => write!(f, "protected"),
            AccessModifier::Internal => write!(f, "internal"),
        }
    }
}

/// Character set for the ASCII box renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CharacterSet {
    /// Pure ASCII characters only: + - |
    Ascii,
    /// Unicode box-drawing characters: ┌ ─ ┐ ├ ┤ └ ┘ │
    #[default]
    Unicode,
}

impl CharacterSet {
    /// Returns true if this character set uses only ASCII
    pub fn is_ascii(&self) -> bool {
        matches!(self, CharacterSet::Ascii)
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterSet::Ascii => write!(f, "ascii"),
            CharacterSet::Unicode => write!(f, "unicode"),
        }
    }
}

/// Rendering configuration shared by all formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramConfig {
    /// Total box width in columns, borders included
    pub box_width: usize,
    /// Members shown before a "+K more fields" indicator
    pub max_members: usize,
    /// Methods shown before a "+K more methods" indicator
    pub max_methods: usize,
    pub character_set: CharacterSet,
}

impl DiagramConfig {
    pub const DEFAULT_BOX_WIDTH: usize = 50;
    pub const DEFAULT_MAX_MEMBERS: usize = 8;
    pub const DEFAULT_MAX_METHODS: usize = 10;
    /// Narrowest box that still fits "x..." between the borders
    pub const MIN_BOX_WIDTH: usize = 8;
    pub const MAX_BOX_WIDTH: usize = 1024;

    pub fn new() -> Self {
        Self {
            box_width: Self::DEFAULT_BOX_WIDTH,
            max_members: Self::DEFAULT_MAX_MEMBERS,
            max_methods: Self::DEFAULT_MAX_METHODS,
            character_set: CharacterSet::default(),
        }
    }

    pub fn with_box_width(mut self, width: usize) -> Self {
        self.box_width = Self::clamp_box_width(width);
        self
    }

    /// Clamp a width into `MIN_BOX_WIDTH..=MAX_BOX_WIDTH`
    pub fn clamp_box_width(width: usize) -> usize {
        width.clamp(Self::MIN_BOX_WIDTH, Self::MAX_BOX_WIDTH)
    }

    pub fn with_max_members(mut self, limit: usize) -> Self {
        self.max_members = limit;
        self
    }

    pub fn with_max_methods(mut self, limit: usize) -> Self {
        self.max_methods = limit;
        self
    }

    pub fn with_character_set(mut self, character_set: CharacterSet) -> Self {
        self.character_set = character_set;
        self
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self::new()
    }
}
