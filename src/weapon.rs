//! Named weapon records.

use crate::attribute::RawAttributes;
use crate::report::DamageReport;
use serde::{Deserialize, Serialize};

/// Name given to freshly created weapons.
pub const DEFAULT_WEAPON_NAME: &str = "新武器";

/// A weapon: a display name and its seven raw attributes.
///
/// # Examples
///
/// ```rust
/// use sectcalc::Weapon;
///
/// let weapon = Weapon::numbered(2);
/// assert_eq!(weapon.name, "新武器 2");
/// assert_eq!(weapon.attributes.damage, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    #[serde(default)]
    pub attributes: RawAttributes,
}

impl Default for Weapon {
    fn default() -> Self {
        Self::new(DEFAULT_WEAPON_NAME)
    }
}

impl Weapon {
    /// An all-zero weapon with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: RawAttributes::default(),
        }
    }

    /// The `n`-th weapon added to a list, named `新武器 n`.
    pub fn numbered(n: usize) -> Self {
        Self::new(format!("{} {}", DEFAULT_WEAPON_NAME, n))
    }

    /// Replace the attributes.
    pub fn with_attributes(mut self, attributes: RawAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Run the calculation for this weapon under a faction.
    pub fn calculate(&self, faction: &str) -> DamageReport {
        crate::calculate_attributes(faction, &self.attributes)
    }
}
