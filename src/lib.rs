//! # sectcalc - Deterministic Sect Damage Calculator
//!
//! Turns a weapon's seven raw attributes and a faction (sect) into an
//! equivalent-damage breakdown:
//! - **Deterministic**: a pure function, same input → same output
//! - **Race-aware**: the faction's race selects the growth coefficients
//! - **Presentation-ready**: zero entries are pruned from the report
//!
//! ## Pipeline
//!
//! ```text
//! faction ─► [race_of] ─► Race
//! attributes + Race ─► [compute_bonus] ─► BonusVector
//! hit, damage, agility + BonusVector ─► [compose_damage] ─► DamageFigures
//! everything ─► [assemble] ─► DamageResult ─► [prune] ─► DamageReport
//! ```
//!
//! An unknown faction is not an error. It classifies as
//! `Race::Unclassified`, contributes no bonuses and no fixed damage, while
//! actual damage and spell damage are still computed from hit and damage.
//!
//! ## Example
//!
//! ```rust
//! use sectcalc::*;
//!
//! // faction, hit, damage, strength, endurance, agility, constitution, magic
//! let report = calculate("女儿村", 0.0, 100.0, 0.0, 0.0, 20.0, 0.0, 0.0);
//!
//! assert_eq!(report.race, Race::Human);
//! assert_eq!(report.actual_damage, Some(100.0));
//! assert_eq!(report.actual_spell_damage, Some(25.0));
//! assert_eq!(report.fixed_damage, Some(28.0));
//! ```
//!
//! ## Modules
//!
//! - [`attribute`] - Raw attribute and secondary stat identifiers
//! - [`faction`] - Faction rosters and race classification
//! - [`growth`] - Per-race growth coefficients
//! - [`bonus`] - Bonus calculator
//! - [`damage`] - Damage composer and fixed damage rules
//! - [`report`] - Result assembly and zero pruning
//! - [`weapon`] - Named weapon records
//! - [`error`] - Error types

pub mod attribute;
pub mod bonus;
pub mod damage;
pub mod error;
pub mod faction;
pub mod growth;
pub mod report;
pub mod weapon;

pub use attribute::{RawAttribute, RawAttributes, SecondaryStat};
pub use bonus::{compute_bonus, compute_bonus_for, BonusVector};
pub use damage::{compose_damage, DamageFigures, FixedDamageRule};
pub use error::CalcError;
pub use faction::{race_of, rosters, Race};
pub use report::{assemble, DamageReport, DamageResult};
pub use weapon::Weapon;

/// Run the full calculation and return the pruned report.
///
/// Inputs are unbounded; negative values flow through unchanged.
#[allow(clippy::too_many_arguments)]
pub fn calculate(
    faction: &str,
    hit: f64,
    damage: f64,
    strength: f64,
    endurance: f64,
    agility: f64,
    constitution: f64,
    magic: f64,
) -> DamageReport {
    let attrs = RawAttributes {
        hit,
        damage,
        strength,
        endurance,
        agility,
        constitution,
        magic,
    };
    calculate_attributes(faction, &attrs)
}

/// Run the full calculation from an attribute set.
pub fn calculate_attributes(faction: &str, attrs: &RawAttributes) -> DamageReport {
    calculate_unpruned(faction, attrs).prune()
}

/// Run the calculation without pruning zero entries.
///
/// # Examples
///
/// ```rust
/// use sectcalc::{calculate_unpruned, Race, RawAttributes};
///
/// let result = calculate_unpruned("龙宫", &RawAttributes::default());
/// assert_eq!(result.race, Race::Immortal);
/// assert_eq!(result.fixed_damage, 0.0);
/// ```
pub fn calculate_unpruned(faction: &str, attrs: &RawAttributes) -> DamageResult {
    let race = race_of(faction);
    if !race.is_classified() {
        log::debug!("faction {:?} is not in any roster; no growth applies", faction);
    }

    let bonus = compute_bonus_for(race, attrs);
    let figures = compose_damage(faction, attrs.hit, attrs.damage, attrs.agility, &bonus);
    log::trace!(
        "calculated {} ({}): actual={} spell={} fixed={}",
        faction,
        race,
        figures.actual_damage,
        figures.actual_spell_damage,
        figures.fixed_damage
    );

    assemble(faction, race, bonus, figures)
}
