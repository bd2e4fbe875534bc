//! iCalendar component types (RFC 5545 §3.4-3.6).

use serde::{Serialize, Serializer};

use super::Property;

/// Component kind for iCalendar.
///
/// Only the names listed here can be opened by a `BEGIN:` line; anything else
/// is reported as an unknown component and never enters the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VTODO component.
    Todo,
    /// VJOURNAL component.
    Journal,
    /// VFREEBUSY component.
    FreeBusy,
    /// VTIMEZONE component.
    Timezone,
    /// VALARM component (nested within VEVENT/VTODO).
    Alarm,
    /// STANDARD sub-component of VTIMEZONE.
    Standard,
    /// DAYLIGHT sub-component of VTIMEZONE.
    Daylight,
}

impl ComponentKind {
    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
            Self::FreeBusy => "VFREEBUSY",
            Self::Timezone => "VTIMEZONE",
            Self::Alarm => "VALARM",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
        }
    }

    /// Looks up a component kind by its exact (uppercase) name.
    ///
    /// Matching is case-sensitive: `BEGIN:vevent` does not open a VEVENT.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "VCALENDAR" => Some(Self::Calendar),
            "VEVENT" => Some(Self::Event),
            "VTODO" => Some(Self::Todo),
            "VJOURNAL" => Some(Self::Journal),
            "VFREEBUSY" => Some(Self::FreeBusy),
            "VTIMEZONE" => Some(Self::Timezone),
            "VALARM" => Some(Self::Alarm),
            "STANDARD" => Some(Self::Standard),
            "DAYLIGHT" => Some(Self::Daylight),
            _ => None,
        }
    }

    /// Returns whether this is a STANDARD or DAYLIGHT observance block.
    #[must_use]
    pub const fn is_timezone_observance(self) -> bool {
        matches!(self, Self::Standard | Self::Daylight)
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ComponentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One `BEGIN:`/`END:` block and everything nested inside it.
///
/// Sub-components are owned by their parent; the tree mirrors source nesting
/// even where RFC 5545 would not allow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarComponent {
    /// Component type.
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Properties in order of appearance.
    pub properties: Vec<Property>,
    /// Nested sub-components in order of appearance.
    pub sub_components: Vec<CalendarComponent>,
    /// Logical line of the `BEGIN:` line (1-based).
    pub start_line: usize,
    /// Logical line of the matching `END:` line, `None` while still open.
    pub end_line: Option<usize>,
}

impl CalendarComponent {
    /// Creates an open component with no properties or children.
    #[must_use]
    pub fn new(kind: ComponentKind, start_line: usize) -> Self {
        Self {
            kind,
            properties: Vec::new(),
            sub_components: Vec::new(),
            start_line,
            end_line: None,
        }
    }

    /// Returns the component's type name, e.g. `VEVENT`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Returns whether a matching `END:` line was seen.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.end_line.is_some()
    }

    /// Returns the first direct property with the given (uppercase) name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns whether a direct property with the given name exists.
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// Returns all direct properties with the given name.
    #[must_use]
    pub fn properties_named(&self, name: &str) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.name == name).collect()
    }

    /// Returns direct children of a specific kind.
    #[must_use]
    pub fn children_of_kind(&self, kind: ComponentKind) -> Vec<&CalendarComponent> {
        self.sub_components
            .iter()
            .filter(|c| c.kind == kind)
            .collect()
    }

    /// Returns whether any direct child satisfies `predicate`.
    #[must_use]
    pub fn has_child(&self, predicate: impl Fn(ComponentKind) -> bool) -> bool {
        self.sub_components.iter().any(|c| predicate(c.kind))
    }
}
