//! Bonus calculator.
//!
//! Folds a race's growth rows over a set of raw attributes into a
//! `BonusVector`. No clamping, rounding or interaction terms: every
//! secondary stat is a plain sum of `attribute * coefficient` terms.

use crate::attribute::{RawAttribute, RawAttributes, SecondaryStat};
use crate::faction::Race;
use crate::growth::contributions;
use serde::{Deserialize, Serialize};

/// Accumulated secondary-stat bonuses, one slot per `SecondaryStat`.
///
/// # Examples
///
/// ```rust
/// use sectcalc::{BonusVector, SecondaryStat};
///
/// let mut bonus = BonusVector::default();
/// bonus.add(SecondaryStat::Speed, 1.5);
/// bonus.add(SecondaryStat::Speed, 0.5);
/// assert_eq!(bonus.get(SecondaryStat::Speed), 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusVector {
    pub health: f64,
    pub magic_power: f64,
    pub hit_bonus: f64,
    pub damage_bonus: f64,
    pub defense: f64,
    pub speed: f64,
    pub evasion: f64,
    pub spirit_power: f64,
}

impl BonusVector {
    /// Read one stat.
    pub fn get(&self, stat: SecondaryStat) -> f64 {
        match stat {
            SecondaryStat::Health => self.health,
            SecondaryStat::MagicPower => self.magic_power,
            SecondaryStat::HitBonus => self.hit_bonus,
            SecondaryStat::DamageBonus => self.damage_bonus,
            SecondaryStat::Defense => self.defense,
            SecondaryStat::Speed => self.speed,
            SecondaryStat::Evasion => self.evasion,
            SecondaryStat::SpiritPower => self.spirit_power,
        }
    }

    /// Add `value` into one stat.
    pub fn add(&mut self, stat: SecondaryStat, value: f64) {
        let slot = match stat {
            SecondaryStat::Health => &mut self.health,
            SecondaryStat::MagicPower => &mut self.magic_power,
            SecondaryStat::HitBonus => &mut self.hit_bonus,
            SecondaryStat::DamageBonus => &mut self.damage_bonus,
            SecondaryStat::Defense => &mut self.defense,
            SecondaryStat::Speed => &mut self.speed,
            SecondaryStat::Evasion => &mut self.evasion,
            SecondaryStat::SpiritPower => &mut self.spirit_power,
        };
        *slot += value;
    }

    /// Every stat with its value, in display order, zeros included.
    pub fn entries(&self) -> impl Iterator<Item = (SecondaryStat, f64)> + '_ {
        SecondaryStat::ALL.into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// Whether every stat is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.entries().all(|(_, value)| value == 0.0)
    }
}

/// Compute secondary-stat bonuses from the five growth attributes.
///
/// `Race::Unclassified` has no growth table and always yields zeros.
///
/// # Examples
///
/// ```rust
/// use sectcalc::{compute_bonus, Race};
///
/// // constitution, magic, strength, endurance, agility
/// let bonus = compute_bonus(Race::Human, 10.0, 0.0, 0.0, 0.0, 0.0);
/// assert_eq!(bonus.health, 50.0);
/// assert_eq!(bonus.spirit_power, 3.0);
/// ```
pub fn compute_bonus(
    race: Race,
    constitution: f64,
    magic: f64,
    strength: f64,
    endurance: f64,
    agility: f64,
) -> BonusVector {
    let attrs = RawAttributes::new()
        .with(RawAttribute::Constitution, constitution)
        .with(RawAttribute::Magic, magic)
        .with(RawAttribute::Strength, strength)
        .with(RawAttribute::Endurance, endurance)
        .with(RawAttribute::Agility, agility);
    compute_bonus_for(race, &attrs)
}

/// Compute bonuses from a full attribute set; `hit` and `damage` are ignored.
pub fn compute_bonus_for(race: Race, attrs: &RawAttributes) -> BonusVector {
    contributions(race, attrs).fold(BonusVector::default(), |mut bonus, term| {
        bonus.add(term.growth.to, term.value);
        bonus
    })
}
