use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Sales unit offered by the unit selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    #[default]
    Item,
    Box,
    Pack,
}

impl Unit {
    /// Every option in selector order.
    pub const ALL: [Unit; 3] = [Unit::Item, Unit::Box, Unit::Pack];

    pub fn label(self) -> &'static str {
        match self {
            Unit::Item => "Item",
            Unit::Box => "Box",
            Unit::Pack => "Pack",
        }
    }

    /// Looks up an option by label, ignoring ASCII case.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|unit| unit.label().eq_ignore_ascii_case(label))
    }

    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        match self {
            Unit::Item => 0,
            Unit::Box => 1,
            Unit::Pack => 2,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Unknown labels select the first option, the way a select element does
/// when its default value is not among its options.
impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Unit::from_label(&label).unwrap_or_else(|| {
            tracing::warn!(unit = %label, fallback = %Unit::default(), "unknown unit label");
            Unit::default()
        }))
    }
}
