use std::fmt;
use std::str::FromStr;

/// Semantic category of a filesystem change.
///
/// The discriminant order matches the bit order of [`EventMask`]:
/// `Create` is the least significant bit, `Rename` the most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Create,
    Modify,
    Delete,
    Rename,
}

impl EventCategory {
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Create,
        EventCategory::Modify,
        EventCategory::Delete,
        EventCategory::Rename,
    ];

    /// Bit of this category inside an [`EventMask`].
    pub fn bit(self) -> u8 {
        match self {
            EventCategory::Create => 0b0001,
            EventCategory::Modify => 0b0010,
            EventCategory::Delete => 0b0100,
            EventCategory::Rename => 0b1000,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::Create => "create",
            EventCategory::Modify => "modify",
            EventCategory::Delete => "delete",
            EventCategory::Rename => "rename",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 4-bit set of [`EventCategory`] values.
///
/// Written as a bitstring in the order `RENAME|DELETE|MODIFY|CREATE`, so
/// `"0010"` enables modify events only and `"1100"` enables rename and
/// delete events.
///
/// The same type doubles as the result of classifying a raw event, which may
/// map to more than one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventMask(u8);

impl EventMask {
    pub const NONE: EventMask = EventMask(0);
    pub const ALL: EventMask = EventMask(0b1111);

    /// Default mask: modify and create.
    pub const DEFAULT: EventMask = EventMask(0b0011);

    /// Build a mask from raw bits; bits above the lowest four are dropped.
    pub fn from_bits(bits: u8) -> Self {
        EventMask(bits & 0b1111)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn with(self, category: EventCategory) -> Self {
        EventMask(self.0 | category.bit())
    }

    /// Whether `category` is enabled in this mask.
    pub fn enabled(self, category: EventCategory) -> bool {
        self.0 & category.bit() != 0
    }

    /// Whether at least one category is present in both masks.
    pub fn intersects(self, other: EventMask) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn categories(self) -> impl Iterator<Item = EventCategory> {
        EventCategory::ALL
            .into_iter()
            .filter(move |c| self.enabled(*c))
    }
}

impl Default for EventMask {
    fn default() -> Self {
        EventMask::DEFAULT
    }
}

impl FromIterator<EventCategory> for EventMask {
    fn from_iter<I: IntoIterator<Item = EventCategory>>(iter: I) -> Self {
        iter.into_iter().fold(EventMask::NONE, EventMask::with)
    }
}

impl FromStr for EventMask {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 4 {
            return Err(format!(
                "invalid events: {s:?} (expected 4 binary digits, RENAME|DELETE|MODIFY|CREATE)"
            ));
        }

        let mut bits = 0u8;
        for c in s.chars() {
            bits <<= 1;
            match c {
                '0' => {}
                '1' => bits |= 1,
                other => {
                    return Err(format!(
                        "invalid events: {s:?} (unexpected character {other:?})"
                    ));
                }
            }
        }

        Ok(EventMask(bits))
    }
}

impl fmt::Display for EventMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}
