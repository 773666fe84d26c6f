//! Integration tests for park state validation and production planning.

mod common;

use windpark::park::{Park, ParkError};
use windpark::planner::{PlanSummary, compute_production_plan};
use windpark::registry::{InMemoryRegistry, TurbineRegistry};
use windpark::turbine::Turbine;

const SEEDS: std::ops::Range<u64> = 0..200;

#[test]
fn reference_scenario_matches_expected_plan() {
    let mut park = common::reference_park();
    park.set_market_price(6).unwrap();
    park.update_production_target(10).unwrap();

    let plan = park.compute_production_plan();
    let actual: Vec<(&str, u32)> = plan
        .iter()
        .map(|e| (e.identifier.as_str(), e.expected_production))
        .collect();
    assert_eq!(
        actual,
        [("A", 0), ("B", 2), ("C", 0), ("D", 0), ("E", 5)]
    );
}

#[test]
fn zero_target_yields_all_zero_plan_at_any_price() {
    let mut park = common::reference_park();
    for price in [0, 6, 16, 1000] {
        park.set_market_price(price).unwrap();
        assert!(
            park.compute_production_plan()
                .iter()
                .all(|e| e.expected_production == 0)
        );
    }
}

#[test]
fn no_profitable_turbines_yields_all_zero_plan_at_any_target() {
    let mut park = common::reference_park();
    park.set_market_price(3).unwrap();
    for delta in [1, 5, 15] {
        park.update_production_target(delta).unwrap();
        assert!(
            park.compute_production_plan()
                .iter()
                .all(|e| e.expected_production == 0)
        );
    }
}

#[test]
fn market_price_accepted_iff_non_negative() {
    let mut park = common::reference_park();
    for p in -5..=5 {
        let result = park.set_market_price(p);
        if p < 0 {
            assert_eq!(
                result,
                Err(ParkError::InvalidArgument(
                    "Market price must be non-negative.".to_string()
                ))
            );
        } else {
            assert!(result.is_ok());
            assert_eq!(park.market_price(), p);
        }
    }
    assert_eq!(park.market_price(), 5);
}

#[test]
fn target_accepted_iff_within_fleet_capacity() {
    for seed in SEEDS {
        let mut rng = common::seeded(seed);
        let fleet = common::random_fleet(&mut rng);
        let capacity: i64 = fleet.iter().map(|t| i64::from(t.capacity())).sum();
        let mut park = Park::new(InMemoryRegistry::from_turbines(fleet).unwrap());

        for t in [-1, 0, capacity / 2, capacity, capacity + 1] {
            let before = park.production_target();
            let result = park.set_production_target(t);
            if (0..=capacity).contains(&t) {
                assert!(result.is_ok(), "seed {seed}: target {t} within [0, {capacity}]");
                assert_eq!(park.production_target(), t);
            } else {
                let err = result.expect_err("out of range target must fail");
                assert_eq!(
                    err.to_string(),
                    format!("Production target must be in range [0, {capacity}] but is {t}.")
                );
                assert_eq!(park.production_target(), before);
            }
        }
    }
}

#[test]
fn failed_delta_leaves_target_unchanged() {
    let mut park = common::reference_park();
    park.update_production_target(7).unwrap();
    for delta in [-8, 15, i64::MIN, i64::MAX] {
        assert!(park.update_production_target(delta).is_err());
        assert_eq!(park.production_target(), 7);
    }
}

#[test]
fn plan_has_one_entry_per_turbine_in_registry_order() {
    for seed in SEEDS {
        let mut rng = common::seeded(seed);
        let fleet = common::random_fleet(&mut rng);
        let capacity: i64 = fleet.iter().map(|t| i64::from(t.capacity())).sum();
        let plan = compute_production_plan(&fleet, 4, capacity / 2);

        assert_eq!(plan.len(), fleet.len());
        for (t, e) in fleet.iter().zip(&plan) {
            assert_eq!(t.identifier(), e.identifier);
        }
    }
}

#[test]
fn plan_respects_target_and_profitability() {
    for seed in SEEDS {
        let mut rng = common::seeded(seed);
        let fleet = common::random_fleet(&mut rng);
        let capacity: i64 = fleet.iter().map(|t| i64::from(t.capacity())).sum();

        for price in 0..=7 {
            for target in [0, capacity / 3, capacity / 2, capacity] {
                let plan = compute_production_plan(&fleet, price, target);
                let summary = PlanSummary::new(&plan, price, target);
                assert!(summary.total_production <= target, "seed {seed}");
                assert!(summary.shortfall() >= 0);

                for (t, e) in fleet.iter().zip(&plan) {
                    assert!(
                        e.expected_production == 0 || e.expected_production == t.capacity(),
                        "no partial output"
                    );
                    if e.expected_production > 0 {
                        assert!(t.is_profitable_at(price), "seed {seed}: {} unprofitable", t.identifier());
                    }
                }
            }
        }
    }
}

#[test]
fn selection_is_a_prefix_of_the_cost_order() {
    // The online set must be exactly the first k eligible turbines in stable
    // cost order, and turbine k+1 (if any) must overshoot what remains.
    for seed in SEEDS {
        let mut rng = common::seeded(seed);
        let fleet = common::random_fleet(&mut rng);
        let capacity: i64 = fleet.iter().map(|t| i64::from(t.capacity())).sum();
        let price = 5;
        let target = capacity / 2;
        let plan = compute_production_plan(&fleet, price, target);

        let mut order: Vec<usize> = (0..fleet.len())
            .filter(|&i| fleet[i].is_profitable_at(price))
            .collect();
        order.sort_by_key(|&i| fleet[i].production_cost());

        let online: Vec<bool> = plan.iter().map(|e| e.expected_production > 0).collect();
        let mut remaining = target;
        let mut stopped = false;
        for i in order {
            let cap = i64::from(fleet[i].capacity());
            if stopped {
                assert!(!online[i] || cap == 0, "seed {seed}: selected past stop point");
                continue;
            }
            if remaining - cap < 0 {
                stopped = true;
                assert!(!online[i]);
            } else {
                remaining -= cap;
                if cap > 0 {
                    assert!(online[i], "seed {seed}: {} should be online", fleet[i].identifier());
                }
            }
        }
    }
}

#[test]
fn plan_is_deterministic() {
    for seed in SEEDS {
        let mut rng = common::seeded(seed);
        let fleet = common::random_fleet(&mut rng);
        let a = compute_production_plan(&fleet, 4, 9);
        let b = compute_production_plan(&fleet, 4, 9);
        assert_eq!(a, b);
    }
}

#[test]
fn fleet_changes_are_seen_by_next_validation_and_plan() {
    let mut park = common::reference_park();
    park.set_market_price(6).unwrap();
    assert!(park.update_production_target(22).is_err());

    park.registry_mut().insert(Turbine::new("F", 1, 1)).unwrap();
    park.update_production_target(22).unwrap();
    assert_eq!(park.max_capacity(), 22);

    // F (cost 1) fills first, then E, B, C, D; A stays unprofitable.
    let plan = park.compute_production_plan();
    let total: u32 = plan.iter().map(|e| e.expected_production).sum();
    assert_eq!(plan.len(), 6);
    assert_eq!(plan[5].identifier, "F");
    assert_eq!(total, 1 + 5 + 2 + 6 + 6);
    assert_eq!(park.registry().list_all().len(), 6);
}
