//! Tests for the presentational side of a calculation:
//! - zero pruning and its idempotence
//! - JSON shape
//! - text rendering
//! - weapon records and text input coercion

use sectcalc::*;

#[test]
fn test_prune_idempotent_on_calculated_reports() {
    let inputs = [
        ("女儿村", [0.0, 100.0, 0.0, 0.0, 20.0, 0.0, 0.0]),
        ("盘丝洞", [30.0, 50.0, 10.0, 0.0, 0.0, 0.0, 0.0]),
        ("龙宫", [12.0, 0.0, 3.0, 4.0, 0.0, 8.0, 1.0]),
        ("未知门派", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    ];
    for (faction, [hit, damage, strength, endurance, agility, constitution, magic]) in inputs {
        let report = calculate(
            faction, hit, damage, strength, endurance, agility, constitution, magic,
        );
        assert_eq!(report.clone().prune(), report, "{}", faction);
    }
}

#[test]
fn test_unpruned_and_pruned_agree() {
    let attrs = RawAttributes::new()
        .with(RawAttribute::Magic, 10.0)
        .with(RawAttribute::Constitution, 4.0);
    let result = calculate_unpruned("凌波城", &attrs);
    let report = calculate_attributes("凌波城", &attrs);
    assert_eq!(result.prune(), report);

    for (stat, value) in result.bonus.entries() {
        if value == 0.0 {
            assert_eq!(report.bonus(stat), None);
        } else {
            assert_eq!(report.bonus(stat), Some(value));
        }
    }
}

#[test]
fn test_report_json_for_unknown_faction() {
    let json = calculate("未知门派", 30.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
        .to_json()
        .unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "faction": "未知门派",
            "race": "Unclassified",
            "actualDamage": 10.0,
        })
    );
}

#[test]
fn test_report_deserializes_with_absent_entries() {
    let report: DamageReport = serde_json::from_str(
        r#"{"faction": "普陀山", "race": "Immortal", "bonus": {"evasion": 5.0}, "fixedDamage": 3.5}"#,
    )
    .unwrap();
    assert_eq!(report.race, Race::Immortal);
    assert_eq!(report.bonus(SecondaryStat::Evasion), Some(5.0));
    assert_eq!(report.actual_damage, None);
    assert_eq!(report.fixed_damage, Some(3.5));
    assert_eq!(report.clone().prune(), report);
}

/// Fractional values survive a JSON text round trip bit for bit.
#[test]
fn test_report_json_text_round_trip() {
    for faction in ["盘丝洞", "无底洞", "龙宫", "未知门派"] {
        for step in 1..200 {
            let x = step as f64 * 0.37;
            let report = calculate(
                faction,
                x * 1.3,
                x * 2.9,
                x / 7.0,
                x * 0.11,
                x / 3.0,
                x * 0.77,
                x * 0.0893,
            );
            let text = serde_json::to_string(&report).unwrap();
            let back: DamageReport = serde_json::from_str(&text).unwrap();
            assert_eq!(back, report, "{}", text);
        }
    }
}

#[test]
fn test_weapon_json_text_round_trip() {
    let mut weapon = Weapon::numbered(7);
    for (i, attr) in RawAttribute::ALL.into_iter().enumerate() {
        weapon.attributes.set(attr, 0.1 * (i as f64 + 1.0) / 3.0);
    }
    let text = serde_json::to_string(&weapon).unwrap();
    let back: Weapon = serde_json::from_str(&text).unwrap();
    assert_eq!(back, weapon);
}

#[test]
fn test_report_display_for_human() {
    let report = calculate("女儿村", 0.0, 100.0, 0.0, 0.0, 20.0, 0.0, 0.0);
    let text = report.to_string();
    assert!(text.starts_with("门派: 女儿村\n种族: 人族\n属性加成:"));
    assert!(text.contains("\n  躲避: 20"));
    assert!(text.contains("\n实际伤害: 100"));
    assert!(text.contains("\n实际法伤: 25"));
    assert!(text.ends_with("\n固伤: 28"));
    assert!(!text.contains("气血"));
}

#[test]
fn test_weapon_from_text_fields() {
    let mut weapon = Weapon::numbered(3);
    let fields = [
        ("命中", "30"),
        ("伤害", "50"),
        ("力量", "10"),
        ("耐力", ""),
        ("敏捷", ""),
        ("体质", "0"),
        ("魔力", ""),
    ];
    for (label, input) in fields {
        let attr: RawAttribute = label.parse().unwrap();
        weapon.attributes.set_from_input(attr, input).unwrap();
    }
    assert_eq!(
        weapon.calculate("盘丝洞"),
        calculate("盘丝洞", 30.0, 50.0, 10.0, 0.0, 0.0, 0.0, 0.0)
    );
}

#[test]
fn test_rejected_text_input_keeps_previous_value() {
    let mut weapon = Weapon::default();
    weapon
        .attributes
        .set_from_input(RawAttribute::Damage, "100")
        .unwrap();
    let err = weapon
        .attributes
        .set_from_input(RawAttribute::Damage, "一百")
        .unwrap_err();
    assert_eq!(
        err,
        CalcError::InvalidNumber {
            attribute: RawAttribute::Damage,
            input: "一百".to_string(),
        }
    );
    assert_eq!(weapon.attributes.damage, 100.0);
}
