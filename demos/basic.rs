//! Basic example: equivalent damage for one weapon under every faction
//!
//! This example demonstrates:
//! - Filling a weapon from text-field input
//! - Grouping factions by race
//! - Printing the pruned report and the growth breakdown

use sectcalc::growth::contributions;
use sectcalc::*;

fn main() -> Result<(), CalcError> {
    let mut weapon = Weapon::numbered(1);
    for (label, input) in [("命中", "30"), ("伤害", "50"), ("力量", "10"), ("敏捷", "8")] {
        let attr: RawAttribute = label.parse()?;
        weapon.attributes.set_from_input(attr, input)?;
    }
    println!("Weapon: {} {:?}", weapon.name, weapon.attributes);

    for (race, factions) in rosters() {
        println!("\n=== {} ({}) ===", race.label(), race);
        for faction in factions {
            println!("\n{}", weapon.calculate(faction));
        }
    }

    println!("\n=== Growth breakdown (盘丝洞) ===");
    for term in contributions(race_of("盘丝洞"), &weapon.attributes) {
        if term.value != 0.0 {
            println!("  {}", term.description());
        }
    }

    println!("\n=== Unknown faction ===");
    println!("{}", weapon.calculate("未知门派"));

    Ok(())
}
