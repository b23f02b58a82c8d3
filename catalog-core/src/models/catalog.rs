//! Kind and status tables shared with the web frontend.
//!
//! The backend stores ordinals, not names, so the numbers below are the wire
//! format and must match the frontend tables exactly.

use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const KNOWN_LANGUAGES: [&str; 6] = ["ca", "es", "en", "grc", "la", "it"];

pub fn is_known_language(code: &str) -> bool {
    KNOWN_LANGUAGES.contains(&code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    None,
    Poetry,
    Theater,
    Essay,
    Shorts,
}

const KINDS: [(&str, Kind); 5] = [
    ("none", Kind::None),
    ("poetry", Kind::Poetry),
    ("theater", Kind::Theater),
    ("essay", Kind::Essay),
    ("shorts", Kind::Shorts),
];

impl Kind {
    pub const ALL: [Kind; 5] = [
        Kind::None,
        Kind::Poetry,
        Kind::Theater,
        Kind::Essay,
        Kind::Shorts,
    ];

    pub const DEFAULT_NAME: &'static str = "none";

    pub fn name(self) -> &'static str {
        KINDS[self.ordinal() as usize].0
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn from_name(name: &str) -> Option<Self> {
        KINDS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, kind)| *kind)
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Read,
    NotRead,
    ToBuy,
    Selected,
    ToBePublished,
}

const STATUSES: [(&str, Status); 5] = [
    ("read", Status::Read),
    ("notread", Status::NotRead),
    ("tobuy", Status::ToBuy),
    ("selected", Status::Selected),
    ("tobepublished", Status::ToBePublished),
];

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Read,
        Status::NotRead,
        Status::ToBuy,
        Status::Selected,
        Status::ToBePublished,
    ];

    pub fn name(self) -> &'static str {
        STATUSES[self.ordinal() as usize].0
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    // No default status, unlike kind.
    pub fn from_name(name: &str) -> Option<Self> {
        STATUSES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, status)| *status)
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.ordinal())
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ordinal = u8::deserialize(deserializer)?;
        Kind::from_ordinal(ordinal).ok_or_else(|| {
            de::Error::invalid_value(
                Unexpected::Unsigned(ordinal as u64),
                &"a kind ordinal between 0 and 4",
            )
        })
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.ordinal())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ordinal = u8::deserialize(deserializer)?;
        Status::from_ordinal(ordinal).ok_or_else(|| {
            de::Error::invalid_value(
                Unexpected::Unsigned(ordinal as u64),
                &"a status ordinal between 0 and 4",
            )
        })
    }
}
