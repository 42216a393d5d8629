//! Faction registry.
//!
//! Eighteen factions split into three fixed rosters of six, one per race.
//! Classification is an exact string match; anything else is
//! `Race::Unclassified`.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Human factions, in display order.
pub const HUMAN_FACTIONS: [&str; 6] = ["女儿村", "方寸山", "天机城", "神木林", "大唐官府", "化生寺"];

/// Demon factions, in display order.
pub const DEMON_FACTIONS: [&str; 6] = ["盘丝洞", "阴曹地府", "狮驼岭", "无底洞", "魔王寨", "女魃墓"];

/// Immortal factions, in display order.
pub const IMMORTAL_FACTIONS: [&str; 6] = ["普陀山", "花果山", "五庄观", "天宫", "龙宫", "凌波城"];

/// Race a faction belongs to; selects the growth table.
///
/// `Unclassified` is the result for any name outside the three rosters.
/// It is not an error: it selects an empty growth table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Race {
    Human,
    Demon,
    Immortal,
    Unclassified,
}

impl Race {
    /// The three races that own a roster.
    pub const CLASSIFIED: [Race; 3] = [Race::Human, Race::Demon, Race::Immortal];

    /// Whether a growth table exists for this race.
    pub fn is_classified(self) -> bool {
        self != Race::Unclassified
    }

    /// The identifier used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Race::Human => "Human",
            Race::Demon => "Demon",
            Race::Immortal => "Immortal",
            Race::Unclassified => "Unclassified",
        }
    }

    /// The in-game label.
    pub fn label(self) -> &'static str {
        match self {
            Race::Human => "人族",
            Race::Demon => "魔族",
            Race::Immortal => "仙族",
            Race::Unclassified => "未知门派",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Race::Human, Race::Demon, Race::Immortal, Race::Unclassified]
            .into_iter()
            .find(|race| race.as_str() == s || race.label() == s)
            .ok_or_else(|| CalcError::UnknownRace(s.to_string()))
    }
}

/// Classify a faction name.
///
/// # Examples
///
/// ```rust
/// use sectcalc::faction::{race_of, Race};
///
/// assert_eq!(race_of("女儿村"), Race::Human);
/// assert_eq!(race_of("龙宫"), Race::Immortal);
/// assert_eq!(race_of("未知门派"), Race::Unclassified);
/// ```
pub fn race_of(faction: &str) -> Race {
    Race::CLASSIFIED
        .into_iter()
        .find(|race| roster(*race).contains(&faction))
        .unwrap_or(Race::Unclassified)
}

/// The ordered roster for a race. Empty for `Unclassified`.
pub fn roster(race: Race) -> &'static [&'static str] {
    match race {
        Race::Human => &HUMAN_FACTIONS,
        Race::Demon => &DEMON_FACTIONS,
        Race::Immortal => &IMMORTAL_FACTIONS,
        Race::Unclassified => &[],
    }
}

/// Every roster, one ordered sequence per race, for grouping selections.
///
/// # Examples
///
/// ```rust
/// use sectcalc::faction::{rosters, Race};
///
/// let listing = rosters();
/// assert_eq!(listing.len(), 3);
/// assert_eq!(listing[0].0, Race::Human);
/// assert_eq!(listing[0].1[0], "女儿村");
/// ```
pub fn rosters() -> [(Race, &'static [&'static str]); 3] {
    Race::CLASSIFIED.map(|race| (race, roster(race)))
}
