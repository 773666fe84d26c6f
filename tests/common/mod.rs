//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use windpark::park::Park;
use windpark::registry::InMemoryRegistry;
use windpark::turbine::Turbine;

/// Reference fleet: A(2, 15), B(2, 5), C(6, 5), D(6, 5), E(5, 3).
pub fn reference_turbines() -> Vec<Turbine> {
    vec![
        Turbine::new("A", 2, 15),
        Turbine::new("B", 2, 5),
        Turbine::new("C", 6, 5),
        Turbine::new("D", 6, 5),
        Turbine::new("E", 5, 3),
    ]
}

/// Park over the reference fleet with price and target at zero.
pub fn reference_park() -> Park<InMemoryRegistry> {
    let registry = InMemoryRegistry::from_turbines(reference_turbines())
        .expect("reference fleet has unique identifiers");
    Park::new(registry)
}

/// Random fleet of up to 12 turbines with small capacities and costs.
///
/// Costs are drawn from a narrow range so ties are common.
pub fn random_fleet(rng: &mut StdRng) -> Vec<Turbine> {
    let n = rng.random_range(0..=12);
    (0..n)
        .map(|i| {
            Turbine::new(
                format!("T{i}"),
                rng.random_range(0..=8),
                rng.random_range(0..=6),
            )
        })
        .collect()
}

/// Seeded RNG so failures are reproducible.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
