use sectcalc::faction::{DEMON_FACTIONS, HUMAN_FACTIONS, IMMORTAL_FACTIONS};
use sectcalc::growth::growth_table;
use sectcalc::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

const GROWTH_ATTRIBUTES: [RawAttribute; 5] = [
    RawAttribute::Constitution,
    RawAttribute::Magic,
    RawAttribute::Strength,
    RawAttribute::Endurance,
    RawAttribute::Agility,
];

/// Zero attributes produce zero bonus for every race.
#[test]
fn test_zero_attributes_zero_bonus() {
    for race in [Race::Human, Race::Demon, Race::Immortal, Race::Unclassified] {
        let bonus = compute_bonus(race, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert!(bonus.is_zero(), "{:?}", race);
    }
}

/// Doubling one raw attribute doubles every stat it feeds.
#[test]
fn test_bonus_linearity() {
    for race in Race::CLASSIFIED {
        for attr in GROWTH_ATTRIBUTES {
            let single = compute_bonus_for(race, &RawAttributes::new().with(attr, 7.0));
            let double = compute_bonus_for(race, &RawAttributes::new().with(attr, 14.0));
            for stat in SecondaryStat::ALL {
                assert_eq!(double.get(stat), 2.0 * single.get(stat), "{:?} {} {}", race, attr, stat);
            }
        }
    }
}

/// Every growth row shows up in the bonus with its coefficient.
#[test]
fn test_bonus_matches_growth_table() {
    for race in Race::CLASSIFIED {
        for attr in GROWTH_ATTRIBUTES {
            let bonus = compute_bonus_for(race, &RawAttributes::new().with(attr, 1.0));
            for stat in SecondaryStat::ALL {
                let expected: f64 = growth_table(race)
                    .iter()
                    .filter(|row| row.from == attr && row.to == stat)
                    .map(|row| row.coefficient)
                    .sum();
                assert_eq!(bonus.get(stat), expected);
            }
        }
    }
}

#[test]
fn test_roster_classification() {
    for faction in HUMAN_FACTIONS {
        assert_eq!(race_of(faction), Race::Human);
    }
    for faction in DEMON_FACTIONS {
        assert_eq!(race_of(faction), Race::Demon);
    }
    for faction in IMMORTAL_FACTIONS {
        assert_eq!(race_of(faction), Race::Immortal);
    }
    assert_eq!(race_of("未知门派"), Race::Unclassified);
    assert_eq!(race_of("Daughter Village"), Race::Unclassified);
}

/// Only the six listed factions have fixed damage.
#[test]
fn test_fixed_damage_only_for_listed_factions() {
    let with_rule = ["女儿村", "无底洞", "阴曹地府", "普陀山", "盘丝洞", "天机城"];
    for (_, factions) in rosters() {
        for faction in factions {
            let report = calculate(faction, 30.0, 100.0, 10.0, 10.0, 20.0, 10.0, 10.0);
            if with_rule.contains(faction) {
                assert!(report.fixed_damage.is_some(), "{}", faction);
            } else {
                assert_eq!(report.fixed_damage, None, "{}", faction);
            }
        }
    }
}

/// Daughter Village, damage 100 and agility 20.
#[test]
fn test_scenario_daughter_village() {
    let result = calculate_unpruned(
        "女儿村",
        &RawAttributes::new()
            .with(RawAttribute::Damage, 100.0)
            .with(RawAttribute::Agility, 20.0),
    );
    assert_eq!(result.race, Race::Human);
    assert_eq!(result.bonus.damage_bonus, 0.0);
    assert!(close(result.actual_damage, 100.0));
    assert!(close(result.actual_spell_damage, 25.0));
    assert!(close(result.fixed_damage, 28.0));

    // agility still feeds speed and evasion
    assert!(close(result.bonus.speed, 14.0));
    assert!(close(result.bonus.evasion, 20.0));
}

/// Silk Cave, hit 30, damage 50, strength 10.
#[test]
fn test_scenario_silk_cave() {
    let report = calculate("盘丝洞", 30.0, 50.0, 10.0, 0.0, 0.0, 0.0, 0.0);
    assert_eq!(report.race, Race::Demon);
    assert!(close(report.bonus(SecondaryStat::HitBonus).unwrap(), 23.0));
    assert!(close(report.bonus(SecondaryStat::DamageBonus).unwrap(), 7.0));
    assert!(close(report.actual_damage.unwrap(), 67.0));
    assert!(close(report.fixed_damage.unwrap(), 9.0 + 67.0 / 3.0));
    // 50 / 4 + strength * 0.4 spirit
    assert!(close(report.actual_spell_damage.unwrap(), 16.5));
}

/// Unknown faction: no bonus, no fixed damage, raw damage figures.
#[test]
fn test_scenario_unknown_faction() {
    let report = calculate("未知门派", 30.0, 50.0, 10.0, 10.0, 10.0, 10.0, 10.0);
    assert_eq!(report.race, Race::Unclassified);
    assert!(report.bonus.is_none());
    assert_eq!(report.fixed_damage, None);
    assert_eq!(report.actual_damage, Some(30.0 / 3.0 + 50.0));
    assert_eq!(report.actual_spell_damage, Some(50.0 / 4.0));
}

#[test]
fn test_negative_inputs_flow_through() {
    let report = calculate("女儿村", 0.0, 0.0, 0.0, 0.0, -10.0, 0.0, 0.0);
    assert_eq!(report.bonus(SecondaryStat::Evasion), Some(-10.0));
    assert!(close(report.fixed_damage.unwrap(), -5.0));
    assert_eq!(report.actual_damage, None);
}

/// Same inputs twice give bit-identical output.
#[test]
fn test_deterministic() {
    let a = calculate("无底洞", 31.0, 77.7, 13.0, 9.0, 41.0, 5.5, 17.0);
    let b = calculate("无底洞", 31.0, 77.7, 13.0, 9.0, 41.0, 5.5, 17.0);
    assert_eq!(a, b);
    assert_eq!(
        a.fixed_damage.unwrap().to_bits(),
        b.fixed_damage.unwrap().to_bits()
    );
}

#[test]
fn test_all_zero_known_faction() {
    let report = calculate("大唐官府", 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    assert_eq!(report.faction, "大唐官府");
    assert_eq!(report.race, Race::Human);
    assert!(report.bonus.is_none());
    assert_eq!(report.actual_damage, None);
    assert_eq!(report.actual_spell_damage, None);
    assert_eq!(report.fixed_damage, None);
}
