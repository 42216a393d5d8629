//! Growth tables.
//!
//! Each race owns a table of `Growth` rows: a raw attribute scaled by a
//! coefficient and added into a secondary stat. Rows are linear and
//! independent; a stat fed by several attributes is the sum of its rows.
//! Row order is the accumulation order (constitution, magic, strength,
//! endurance, agility), which keeps floating-point sums reproducible.

use crate::attribute::{RawAttribute, RawAttributes, SecondaryStat};
use crate::faction::Race;
use serde::Serialize;

use crate::attribute::RawAttribute::{Agility, Constitution, Endurance, Magic, Strength};
use crate::attribute::SecondaryStat::{
    DamageBonus, Defense, Evasion, Health, HitBonus, MagicPower, Speed, SpiritPower,
};

/// One growth coefficient: `to += from * coefficient`.
///
/// # Examples
///
/// ```rust
/// use sectcalc::growth::Growth;
/// use sectcalc::{RawAttribute, SecondaryStat};
///
/// let row = Growth::new(RawAttribute::Strength, SecondaryStat::HitBonus, 2.0);
/// assert_eq!(row.apply(10.0), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Growth {
    pub from: RawAttribute,
    pub to: SecondaryStat,
    pub coefficient: f64,
}

impl Growth {
    pub const fn new(from: RawAttribute, to: SecondaryStat, coefficient: f64) -> Self {
        Self {
            from,
            to,
            coefficient,
        }
    }

    /// The contribution of `points` in the source attribute.
    pub fn apply(&self, points: f64) -> f64 {
        points * self.coefficient
    }

    /// Human-readable form, e.g. `体质 → 气血 ×5.00`.
    pub fn description(&self) -> String {
        format!(
            "{} → {} ×{:.2}",
            self.from.label(),
            self.to.label(),
            self.coefficient
        )
    }
}

const HUMAN_GROWTH: [Growth; 14] = [
    Growth::new(Constitution, Health, 5.0),
    Growth::new(Constitution, Speed, 0.1),
    Growth::new(Constitution, SpiritPower, 0.3),
    Growth::new(Magic, MagicPower, 3.0),
    Growth::new(Magic, SpiritPower, 0.7),
    Growth::new(Strength, HitBonus, 2.0),
    Growth::new(Strength, DamageBonus, 0.7),
    Growth::new(Strength, Speed, 0.1),
    Growth::new(Strength, SpiritPower, 0.4),
    Growth::new(Endurance, Defense, 1.5),
    Growth::new(Endurance, Speed, 0.1),
    Growth::new(Endurance, SpiritPower, 0.2),
    Growth::new(Agility, Speed, 0.7),
    Growth::new(Agility, Evasion, 1.0),
];

const DEMON_GROWTH: [Growth; 14] = [
    Growth::new(Constitution, Health, 6.0),
    Growth::new(Constitution, Speed, 0.1),
    Growth::new(Constitution, SpiritPower, 0.3),
    Growth::new(Magic, MagicPower, 2.5),
    Growth::new(Magic, SpiritPower, 0.7),
    Growth::new(Strength, HitBonus, 2.3),
    Growth::new(Strength, DamageBonus, 0.7),
    Growth::new(Strength, Speed, 0.1),
    Growth::new(Strength, SpiritPower, 0.4),
    Growth::new(Endurance, Defense, 1.4),
    Growth::new(Endurance, Speed, 0.1),
    Growth::new(Endurance, SpiritPower, 0.2),
    Growth::new(Agility, Speed, 0.7),
    Growth::new(Agility, Evasion, 1.0),
];

const IMMORTAL_GROWTH: [Growth; 14] = [
    Growth::new(Constitution, Health, 4.5),
    Growth::new(Constitution, Speed, 0.1),
    Growth::new(Constitution, SpiritPower, 0.3),
    Growth::new(Magic, MagicPower, 3.5),
    Growth::new(Magic, SpiritPower, 0.7),
    Growth::new(Strength, HitBonus, 1.7),
    Growth::new(Strength, DamageBonus, 0.6),
    Growth::new(Strength, Speed, 0.1),
    Growth::new(Strength, SpiritPower, 0.4),
    Growth::new(Endurance, Defense, 1.6),
    Growth::new(Endurance, Speed, 0.1),
    Growth::new(Endurance, SpiritPower, 0.2),
    Growth::new(Agility, Speed, 0.7),
    Growth::new(Agility, Evasion, 1.0),
];

/// The growth table for a race. Empty for `Unclassified`.
pub fn growth_table(race: Race) -> &'static [Growth] {
    match race {
        Race::Human => &HUMAN_GROWTH,
        Race::Demon => &DEMON_GROWTH,
        Race::Immortal => &IMMORTAL_GROWTH,
        Race::Unclassified => &[],
    }
}

/// The coefficient linking `from` to `to` for a race, 0 when unmapped.
///
/// # Examples
///
/// ```rust
/// use sectcalc::growth::coefficient;
/// use sectcalc::{Race, RawAttribute, SecondaryStat};
///
/// assert_eq!(coefficient(Race::Demon, RawAttribute::Constitution, SecondaryStat::Health), 6.0);
/// assert_eq!(coefficient(Race::Demon, RawAttribute::Agility, SecondaryStat::Health), 0.0);
/// ```
pub fn coefficient(race: Race, from: RawAttribute, to: SecondaryStat) -> f64 {
    growth_table(race)
        .iter()
        .find(|row| row.from == from && row.to == to)
        .map_or(0.0, |row| row.coefficient)
}

/// A single evaluated growth row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub growth: Growth,
    pub value: f64,
}

impl Contribution {
    pub fn description(&self) -> String {
        format!("{} = {:.2}", self.growth.description(), self.value)
    }
}

/// Evaluate every growth row of a race against a set of attributes.
///
/// Yields in table order. `hit` and `damage` never appear as sources.
pub fn contributions(
    race: Race,
    attrs: &RawAttributes,
) -> impl Iterator<Item = Contribution> + '_ {
    growth_table(race).iter().map(move |growth| Contribution {
        growth: *growth,
        value: growth.apply(attrs.get(growth.from)),
    })
}
