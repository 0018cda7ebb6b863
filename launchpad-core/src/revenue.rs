//! Simulated revenue verification for new launches.
//!
//! Each connected commerce integration contributes a random monthly figure
//! drawn from its own range; the draft's monthly revenue is the sum.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// A commerce integration that can vouch for revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum RevenueSource {
    Shopify,
    PayPal,
    Stripe,
    QuickBooks,
}

impl RevenueSource {
    /// Every supported integration.
    pub const ALL: [RevenueSource; 4] = [
        RevenueSource::Shopify,
        RevenueSource::PayPal,
        RevenueSource::Stripe,
        RevenueSource::QuickBooks,
    ];

    /// Half-open range of monthly revenue this source reports.
    pub fn monthly_range(self) -> std::ops::Range<u32> {
        match self {
            RevenueSource::Shopify => 5_000..35_000,
            RevenueSource::PayPal => 1_000..11_000,
            RevenueSource::Stripe => 2_000..22_000,
            RevenueSource::QuickBooks => 1_000..16_000,
        }
    }
}

/// Sum one random monthly figure per connected source.
///
/// Duplicate sources count once. No sources yields zero.
pub fn simulate_monthly_revenue<R: Rng + ?Sized>(sources: &[RevenueSource], rng: &mut R) -> f64 {
    RevenueSource::ALL
        .iter()
        .filter(|s| sources.contains(s))
        .map(|s| rng.gen_range(s.monthly_range()) as f64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_no_sources() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(simulate_monthly_revenue(&[], &mut rng), 0.0);
    }

    #[test]
    fn test_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let shopify = simulate_monthly_revenue(&[RevenueSource::Shopify], &mut rng);
            assert!((5_000.0..35_000.0).contains(&shopify));

            let all = simulate_monthly_revenue(&RevenueSource::ALL, &mut rng);
            assert!((9_000.0..84_000.0).contains(&all));
        }
    }

    #[test]
    fn test_duplicates_count_once() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let v = simulate_monthly_revenue(&[RevenueSource::PayPal, RevenueSource::PayPal], &mut rng);
            assert!(v < 11_000.0);
        }
    }
}
