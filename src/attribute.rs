//! Attribute identifier module.
//!
//! Provides the canonical identifiers shared by every component:
//! `RawAttribute` for the seven player-assigned points and `SecondaryStat`
//! for the eight derived quantities. `RawAttributes` holds one value per
//! raw attribute and is addressed through the enumeration, never by name.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven raw attributes a weapon carries.
///
/// # Examples
///
/// ```rust
/// use sectcalc::RawAttribute;
///
/// let agility: RawAttribute = "agility".parse().unwrap();
/// let also_agility: RawAttribute = "敏捷".parse().unwrap();
///
/// assert_eq!(agility, also_agility);
/// assert_eq!(agility.label(), "敏捷");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RawAttribute {
    Hit,
    Damage,
    Strength,
    Endurance,
    Agility,
    Constitution,
    Magic,
}

impl RawAttribute {
    /// All raw attributes, in input-form order.
    pub const ALL: [RawAttribute; 7] = [
        RawAttribute::Hit,
        RawAttribute::Damage,
        RawAttribute::Constitution,
        RawAttribute::Magic,
        RawAttribute::Strength,
        RawAttribute::Endurance,
        RawAttribute::Agility,
    ];

    /// The identifier used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            RawAttribute::Hit => "hit",
            RawAttribute::Damage => "damage",
            RawAttribute::Strength => "strength",
            RawAttribute::Endurance => "endurance",
            RawAttribute::Agility => "agility",
            RawAttribute::Constitution => "constitution",
            RawAttribute::Magic => "magic",
        }
    }

    /// The in-game label shown next to the input field.
    pub fn label(self) -> &'static str {
        match self {
            RawAttribute::Hit => "命中",
            RawAttribute::Damage => "伤害",
            RawAttribute::Strength => "力量",
            RawAttribute::Endurance => "耐力",
            RawAttribute::Agility => "敏捷",
            RawAttribute::Constitution => "体质",
            RawAttribute::Magic => "魔力",
        }
    }
}

impl fmt::Display for RawAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RawAttribute {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RawAttribute::ALL
            .into_iter()
            .find(|attr| attr.as_str() == s || attr.label() == s)
            .ok_or_else(|| CalcError::UnknownAttribute(s.to_string()))
    }
}

/// One of the eight secondary stats derived from raw attributes.
///
/// # Examples
///
/// ```rust
/// use sectcalc::SecondaryStat;
///
/// assert_eq!(SecondaryStat::SpiritPower.as_str(), "spiritPower");
/// assert_eq!(SecondaryStat::SpiritPower.label(), "灵力");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecondaryStat {
    Health,
    MagicPower,
    HitBonus,
    DamageBonus,
    Defense,
    Speed,
    Evasion,
    SpiritPower,
}

impl SecondaryStat {
    /// All secondary stats, in display order.
    pub const ALL: [SecondaryStat; 8] = [
        SecondaryStat::Health,
        SecondaryStat::MagicPower,
        SecondaryStat::HitBonus,
        SecondaryStat::DamageBonus,
        SecondaryStat::Defense,
        SecondaryStat::Speed,
        SecondaryStat::Evasion,
        SecondaryStat::SpiritPower,
    ];

    /// The identifier used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            SecondaryStat::Health => "health",
            SecondaryStat::MagicPower => "magicPower",
            SecondaryStat::HitBonus => "hitBonus",
            SecondaryStat::DamageBonus => "damageBonus",
            SecondaryStat::Defense => "defense",
            SecondaryStat::Speed => "speed",
            SecondaryStat::Evasion => "evasion",
            SecondaryStat::SpiritPower => "spiritPower",
        }
    }

    /// The in-game label.
    pub fn label(self) -> &'static str {
        match self {
            SecondaryStat::Health => "气血",
            SecondaryStat::MagicPower => "魔法",
            SecondaryStat::HitBonus => "命中",
            SecondaryStat::DamageBonus => "伤害",
            SecondaryStat::Defense => "防御",
            SecondaryStat::Speed => "速度",
            SecondaryStat::Evasion => "躲避",
            SecondaryStat::SpiritPower => "灵力",
        }
    }
}

impl fmt::Display for SecondaryStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecondaryStat {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SecondaryStat::ALL
            .into_iter()
            .find(|stat| stat.as_str() == s || stat.label() == s)
            .ok_or_else(|| CalcError::UnknownStat(s.to_string()))
    }
}

/// The seven raw attribute values supplied for one calculation.
///
/// Every field defaults to zero. Values are unbounded; negative points
/// flow through the formulas unchanged.
///
/// # Examples
///
/// ```rust
/// use sectcalc::{RawAttribute, RawAttributes};
///
/// let mut attrs = RawAttributes::default();
/// attrs.set(RawAttribute::Damage, 100.0);
///
/// assert_eq!(attrs.get(RawAttribute::Damage), 100.0);
/// assert_eq!(attrs.damage, 100.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAttributes {
    pub hit: f64,
    pub damage: f64,
    pub strength: f64,
    pub endurance: f64,
    pub agility: f64,
    pub constitution: f64,
    pub magic: f64,
}

impl RawAttributes {
    /// Create an all-zero attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one attribute.
    pub fn get(&self, attr: RawAttribute) -> f64 {
        match attr {
            RawAttribute::Hit => self.hit,
            RawAttribute::Damage => self.damage,
            RawAttribute::Strength => self.strength,
            RawAttribute::Endurance => self.endurance,
            RawAttribute::Agility => self.agility,
            RawAttribute::Constitution => self.constitution,
            RawAttribute::Magic => self.magic,
        }
    }

    /// Overwrite one attribute.
    pub fn set(&mut self, attr: RawAttribute, value: f64) {
        *self.slot_mut(attr) = value;
    }

    /// Builder-style variant of [`RawAttributes::set`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sectcalc::{RawAttribute, RawAttributes};
    ///
    /// let attrs = RawAttributes::new()
    ///     .with(RawAttribute::Hit, 30.0)
    ///     .with(RawAttribute::Strength, 10.0);
    /// assert_eq!(attrs.hit, 30.0);
    /// ```
    pub fn with(mut self, attr: RawAttribute, value: f64) -> Self {
        self.set(attr, value);
        self
    }

    /// Coerce text-field input into an attribute value.
    ///
    /// Empty input stores zero. Otherwise surrounding whitespace is ignored
    /// and full-width digits (`０`-`９`) count as ASCII digits. Input that
    /// does not parse as a number, whitespace-only input included, is
    /// rejected and the stored value is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sectcalc::{RawAttribute, RawAttributes};
    ///
    /// let mut attrs = RawAttributes::new();
    /// attrs.set_from_input(RawAttribute::Magic, "12.5").unwrap();
    /// assert_eq!(attrs.magic, 12.5);
    ///
    /// attrs.set_from_input(RawAttribute::Magic, "１２").unwrap();
    /// assert_eq!(attrs.magic, 12.0);
    ///
    /// attrs.set_from_input(RawAttribute::Magic, "").unwrap();
    /// assert_eq!(attrs.magic, 0.0);
    ///
    /// assert!(attrs.set_from_input(RawAttribute::Magic, "abc").is_err());
    /// assert!(attrs.set_from_input(RawAttribute::Magic, "   ").is_err());
    /// ```
    pub fn set_from_input(&mut self, attr: RawAttribute, input: &str) -> Result<(), CalcError> {
        let value = if input.is_empty() {
            0.0
        } else {
            parse_number(input).ok_or_else(|| CalcError::InvalidNumber {
                attribute: attr,
                input: input.to_string(),
            })?
        };
        self.set(attr, value);
        Ok(())
    }

    fn slot_mut(&mut self, attr: RawAttribute) -> &mut f64 {
        match attr {
            RawAttribute::Hit => &mut self.hit,
            RawAttribute::Damage => &mut self.damage,
            RawAttribute::Strength => &mut self.strength,
            RawAttribute::Endurance => &mut self.endurance,
            RawAttribute::Agility => &mut self.agility,
            RawAttribute::Constitution => &mut self.constitution,
            RawAttribute::Magic => &mut self.magic,
        }
    }
}

/// Parse a number typed into a text field, accepting full-width digits.
fn parse_number(input: &str) -> Option<f64> {
    let normalized: String = input
        .trim()
        .chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            _ => c,
        })
        .collect();
    normalized.parse().ok()
}
