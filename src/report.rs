//! Result assembly and pruning.
//!
//! `DamageResult` is the complete output of one calculation. Pruning turns
//! it into a `DamageReport` from which every exactly-zero number has been
//! removed, and the bonus section dropped entirely when nothing in it
//! survives. Names (faction, race) are always kept.

use crate::attribute::SecondaryStat;
use crate::bonus::BonusVector;
use crate::damage::DamageFigures;
use crate::faction::Race;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Full, unpruned output of one calculation.
///
/// This is ephemeral: recompute it whenever an input changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageResult {
    pub faction: String,
    pub race: Race,
    pub bonus: BonusVector,
    pub actual_damage: f64,
    pub actual_spell_damage: f64,
    pub fixed_damage: f64,
}

/// Package classification, bonuses and damage figures.
pub fn assemble(
    faction: impl Into<String>,
    race: Race,
    bonus: BonusVector,
    figures: DamageFigures,
) -> DamageResult {
    DamageResult {
        faction: faction.into(),
        race,
        bonus,
        actual_damage: figures.actual_damage,
        actual_spell_damage: figures.actual_spell_damage,
        fixed_damage: figures.fixed_damage,
    }
}

impl DamageResult {
    /// The damage figures without the classification.
    pub fn figures(&self) -> DamageFigures {
        DamageFigures {
            actual_damage: self.actual_damage,
            actual_spell_damage: self.actual_spell_damage,
            fixed_damage: self.fixed_damage,
        }
    }

    /// Drop every zero-valued entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sectcalc::report::assemble;
    /// use sectcalc::{BonusVector, DamageFigures, Race};
    ///
    /// let figures = DamageFigures { actual_damage: 100.0, ..DamageFigures::default() };
    /// let report = assemble("大唐官府", Race::Human, BonusVector::default(), figures).prune();
    ///
    /// assert_eq!(report.actual_damage, Some(100.0));
    /// assert_eq!(report.fixed_damage, None);
    /// assert!(report.bonus.is_none());
    /// ```
    pub fn prune(&self) -> DamageReport {
        DamageReport {
            faction: self.faction.clone(),
            race: self.race,
            bonus: Some(self.bonus.entries().collect()),
            actual_damage: Some(self.actual_damage),
            actual_spell_damage: Some(self.actual_spell_damage),
            fixed_damage: Some(self.fixed_damage),
        }
        .prune()
    }
}

/// Presentational form of a `DamageResult`: absent means zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageReport {
    pub faction: String,
    pub race: Race,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<BTreeMap<SecondaryStat, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_damage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_spell_damage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_damage: Option<f64>,
}

fn non_zero(value: f64) -> Option<f64> {
    (value != 0.0).then_some(value)
}

impl DamageReport {
    /// Remove zero entries. Pruning an already pruned report is a no-op.
    pub fn prune(self) -> Self {
        let bonus = self
            .bonus
            .map(|stats| {
                stats
                    .into_iter()
                    .filter(|(_, value)| *value != 0.0)
                    .collect::<BTreeMap<_, _>>()
            })
            .filter(|stats| !stats.is_empty());

        Self {
            faction: self.faction,
            race: self.race,
            bonus,
            actual_damage: self.actual_damage.and_then(non_zero),
            actual_spell_damage: self.actual_spell_damage.and_then(non_zero),
            fixed_damage: self.fixed_damage.and_then(non_zero),
        }
    }

    /// A surviving bonus value.
    pub fn bonus(&self, stat: SecondaryStat) -> Option<f64> {
        self.bonus.as_ref().and_then(|stats| stats.get(&stat).copied())
    }

    /// The report as a JSON value, pruned entries absent.
    ///
    /// Fails only if a bonus key cannot be written as a JSON object key.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl fmt::Display for DamageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "门派: {}", self.faction)?;
        write!(f, "种族: {}", self.race.label())?;
        if let Some(stats) = &self.bonus {
            write!(f, "\n属性加成:")?;
            for (stat, value) in stats {
                write!(f, "\n  {}: {}", stat.label(), value)?;
            }
        }
        let figures = [
            ("实际伤害", self.actual_damage),
            ("实际法伤", self.actual_spell_damage),
            ("固伤", self.fixed_damage),
        ];
        for (label, value) in figures {
            if let Some(value) = value {
                write!(f, "\n{}: {}", label, value)?;
            }
        }
        Ok(())
    }
}
