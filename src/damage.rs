//! Damage composer.
//!
//! Combines weapon hit/damage with the bonus vector into actual damage
//! and actual spell damage, plus the faction-specific fixed damage term.

use crate::bonus::BonusVector;
use serde::{Deserialize, Serialize};

/// How a faction derives its fixed damage.
///
/// # Examples
///
/// ```rust
/// use sectcalc::damage::FixedDamageRule;
///
/// let rule = FixedDamageRule::Agility { damage: 0.18, agility: 0.5 };
/// assert_eq!(rule.apply(100.0, 20.0, 0.0), 28.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FixedDamageRule {
    /// `weapon_damage * damage + agility * agility`
    Agility { damage: f64, agility: f64 },
    /// `weapon_damage * damage + actual_damage / divisor`
    ActualDamage { damage: f64, divisor: f64 },
}

impl FixedDamageRule {
    pub fn apply(self, weapon_damage: f64, agility: f64, actual_damage: f64) -> f64 {
        match self {
            FixedDamageRule::Agility {
                damage,
                agility: agility_coef,
            } => weapon_damage * damage + agility * agility_coef,
            FixedDamageRule::ActualDamage { damage, divisor } => {
                weapon_damage * damage + actual_damage / divisor
            }
        }
    }
}

/// Factions with a fixed damage term. Every other faction scores 0.
// 无底洞 is 0.125 * 2 in the in-game formula; both factors are powers of
// two so the collapsed 0.25 is bit-identical.
pub const FIXED_DAMAGE_RULES: [(&str, FixedDamageRule); 6] = [
    ("女儿村", FixedDamageRule::Agility { damage: 0.18, agility: 0.5 }),
    ("无底洞", FixedDamageRule::Agility { damage: 0.25, agility: 0.7 }),
    ("阴曹地府", FixedDamageRule::Agility { damage: 0.15, agility: 0.35 }),
    ("普陀山", FixedDamageRule::Agility { damage: 0.24, agility: 0.7 }),
    ("盘丝洞", FixedDamageRule::ActualDamage { damage: 0.18, divisor: 3.0 }),
    ("天机城", FixedDamageRule::ActualDamage { damage: 0.18, divisor: 3.0 }),
];

/// The fixed damage rule for a faction, if it has one.
pub fn fixed_damage_rule(faction: &str) -> Option<FixedDamageRule> {
    FIXED_DAMAGE_RULES
        .iter()
        .find(|(name, _)| *name == faction)
        .map(|(_, rule)| *rule)
}

/// The three damage figures of one calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageFigures {
    pub actual_damage: f64,
    pub actual_spell_damage: f64,
    pub fixed_damage: f64,
}

/// `hit / 3 + damage + damage_bonus`
pub fn actual_damage(hit: f64, damage: f64, bonus: &BonusVector) -> f64 {
    hit / 3.0 + damage + bonus.damage_bonus
}

/// `damage / 4 + spirit_power`
pub fn actual_spell_damage(damage: f64, bonus: &BonusVector) -> f64 {
    damage / 4.0 + bonus.spirit_power
}

/// Compose all three damage figures.
///
/// `agility` is the raw attribute; it only matters for factions whose
/// fixed damage scales with it.
///
/// # Examples
///
/// ```rust
/// use sectcalc::{compose_damage, BonusVector};
///
/// let figures = compose_damage("大唐官府", 30.0, 50.0, 0.0, &BonusVector::default());
/// assert_eq!(figures.actual_damage, 60.0);
/// assert_eq!(figures.actual_spell_damage, 12.5);
/// assert_eq!(figures.fixed_damage, 0.0);
/// ```
pub fn compose_damage(
    faction: &str,
    hit: f64,
    damage: f64,
    agility: f64,
    bonus: &BonusVector,
) -> DamageFigures {
    let actual = actual_damage(hit, damage, bonus);
    let fixed = fixed_damage_rule(faction).map_or(0.0, |rule| rule.apply(damage, agility, actual));
    DamageFigures {
        actual_damage: actual,
        actual_spell_damage: actual_spell_damage(damage, bonus),
        fixed_damage: fixed,
    }
}
