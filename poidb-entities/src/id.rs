use std::{fmt, num::ParseIntError, str::FromStr};

pub type RawId = i64;

/// Identifier that is assigned by the storage on creation
/// and never reused afterwards.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(RawId);

impl Id {
    pub const fn from_raw(raw: RawId) -> Self {
        Self(raw)
    }

    pub const fn to_raw(self) -> RawId {
        self.0
    }
}

impl From<RawId> for Id {
    fn from(from: RawId) -> Self {
        Self(from)
    }
}

impl From<Id> for RawId {
    fn from(from: Id) -> Self {
        from.0
    }
}

impl FromStr for Id {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Id, Self::Err> {
        s.parse::<RawId>().map(Self)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}
