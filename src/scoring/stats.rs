//! Counting statistics for a fixture or an aggregation period.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Named counting statistics that can carry a scoring weight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum StatKey {
    Apps,
    Subs,
    Goals,
    Assists,
    CleanSheets,
    Conceded,
    PensSaved,
    YellowCards,
    RedCards,
}

impl StatKey {
    pub const ALL: [StatKey; 9] = [
        StatKey::Apps,
        StatKey::Subs,
        StatKey::Goals,
        StatKey::Assists,
        StatKey::CleanSheets,
        StatKey::Conceded,
        StatKey::PensSaved,
        StatKey::YellowCards,
        StatKey::RedCards,
    ];

    /// Appearance counters are totalled even when they carry no weight for a position.
    pub fn always_summed(&self) -> bool {
        matches!(self, StatKey::Apps | StatKey::Subs)
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatKey::Apps => "apps",
            StatKey::Subs => "subs",
            StatKey::Goals => "goals",
            StatKey::Assists => "assists",
            StatKey::CleanSheets => "cleanSheets",
            StatKey::Conceded => "conceded",
            StatKey::PensSaved => "pensSaved",
            StatKey::YellowCards => "yellowCards",
            StatKey::RedCards => "redCards",
        };
        f.write_str(name)
    }
}

/// Spreadsheet cells arrive as numbers, numeric strings, blanks or nulls.
fn de_count<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Option::<RawCount>::deserialize(deserializer)? {
        None => Ok(0),
        Some(RawCount::Int(n)) => i32::try_from(n).map_err(de::Error::custom),
        Some(RawCount::Float(f)) => Ok(f.round() as i32),
        Some(RawCount::Text(s)) if s.trim().is_empty() => Ok(0),
        Some(RawCount::Text(s)) => s.trim().parse().map_err(de::Error::custom),
    }
}

/// A bag of counting statistics plus the points they are worth.
///
/// Unknown keys in the feed are ignored. `points` on a raw fixture line is
/// never trusted; aggregation recomputes it from the scoring rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatLine {
    #[serde(deserialize_with = "de_count")]
    pub apps: i32,
    #[serde(deserialize_with = "de_count")]
    pub subs: i32,
    #[serde(alias = "gls", deserialize_with = "de_count")]
    pub goals: i32,
    #[serde(alias = "asts", deserialize_with = "de_count")]
    pub assists: i32,
    #[serde(alias = "cs", deserialize_with = "de_count")]
    pub clean_sheets: i32,
    #[serde(alias = "con", deserialize_with = "de_count")]
    pub conceded: i32,
    #[serde(alias = "pensv", deserialize_with = "de_count")]
    pub pens_saved: i32,
    #[serde(alias = "ycard", deserialize_with = "de_count")]
    pub yellow_cards: i32,
    #[serde(alias = "rcard", deserialize_with = "de_count")]
    pub red_cards: i32,
    #[serde(deserialize_with = "de_count")]
    pub points: i32,
}

impl StatLine {
    pub fn get(&self, key: StatKey) -> i32 {
        match key {
            StatKey::Apps => self.apps,
            StatKey::Subs => self.subs,
            StatKey::Goals => self.goals,
            StatKey::Assists => self.assists,
            StatKey::CleanSheets => self.clean_sheets,
            StatKey::Conceded => self.conceded,
            StatKey::PensSaved => self.pens_saved,
            StatKey::YellowCards => self.yellow_cards,
            StatKey::RedCards => self.red_cards,
        }
    }

    pub fn get_mut(&mut self, key: StatKey) -> &mut i32 {
        match key {
            StatKey::Apps => &mut self.apps,
            StatKey::Subs => &mut self.subs,
            StatKey::Goals => &mut self.goals,
            StatKey::Assists => &mut self.assists,
            StatKey::CleanSheets => &mut self.clean_sheets,
            StatKey::Conceded => &mut self.conceded,
            StatKey::PensSaved => &mut self.pens_saved,
            StatKey::YellowCards => &mut self.yellow_cards,
            StatKey::RedCards => &mut self.red_cards,
        }
    }

    /// Builder-style setter, mostly for fixtures and tests.
    pub fn with(mut self, key: StatKey, value: i32) -> Self {
        *self.get_mut(key) = value;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == StatLine::default()
    }
}

/// Element-wise, saturating at the `i32` bounds.
impl AddAssign<&StatLine> for StatLine {
    fn add_assign(&mut self, rhs: &StatLine) {
        for key in StatKey::ALL {
            let value = self.get_mut(key);
            *value = value.saturating_add(rhs.get(key));
        }
        self.points = self.points.saturating_add(rhs.points);
    }
}

impl AddAssign for StatLine {
    fn add_assign(&mut self, rhs: StatLine) {
        *self += &rhs;
    }
}

impl Add for StatLine {
    type Output = StatLine;

    fn add(mut self, rhs: StatLine) -> StatLine {
        self += &rhs;
        self
    }
}

impl Sum for StatLine {
    fn sum<I: Iterator<Item = StatLine>>(iter: I) -> Self {
        iter.fold(StatLine::default(), Add::add)
    }
}

impl<'a> Sum<&'a StatLine> for StatLine {
    fn sum<I: Iterator<Item = &'a StatLine>>(iter: I) -> Self {
        iter.fold(StatLine::default(), |mut acc, line| {
            acc += line;
            acc
        })
    }
}
