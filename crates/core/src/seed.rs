// Synthetic return generation
//
// Records are generated once at startup. Counts and initial flags come from
// the stable hash of the marketplace name, ids from UUIDv5 over
// "returns:{marketplace}:{index}", so two processes seeded with the same
// marketplaces hold identical data.

use uuid::Uuid;

use crate::hash::stable_hash;
use crate::record::ReturnRecord;

/// Marketplaces seeded when none are configured.
pub const DEFAULT_MARKETPLACES: [&str; 5] = ["EBay", "Amazon", "Newegg", "Jet", "Walmart"];

/// Upper bound (exclusive) on returns generated per marketplace.
pub const MAX_RETURNS_PER_MARKETPLACE: u64 = 40;

/// Deterministic id of the `index`-th return of `marketplace`.
pub fn return_id(marketplace: &str, index: u64) -> Uuid {
    let name = format!("returns:{marketplace}:{index}");
    Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes())
}

/// Number of returns generated for `marketplace`.
pub fn return_count(marketplace: &str) -> u64 {
    u64::from(stable_hash(marketplace)) % MAX_RETURNS_PER_MARKETPLACE
}

/// Generate the returns for `marketplace` in index order.
pub fn generate_for_marketplace(marketplace: &str) -> Vec<ReturnRecord> {
    let hash = u64::from(stable_hash(marketplace));
    (0..return_count(marketplace))
        .map(|i| {
            let mut record = ReturnRecord::new(return_id(marketplace, i), marketplace);
            record.is_rejected = (hash + i) % 5 == 0;
            record.is_completed = (hash + i) % 2 == 0;
            record
        })
        .collect()
}

/// Generate returns for every marketplace, in marketplace order.
pub fn generate_returns<S: AsRef<str>>(marketplaces: &[S]) -> Vec<ReturnRecord> {
    marketplaces
        .iter()
        .flat_map(|m| generate_for_marketplace(m.as_ref()))
        .collect()
}
