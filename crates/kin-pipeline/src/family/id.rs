//! Family id assignment via xxh3 content hashing.

use xxhash_rust::xxh3::xxh3_64;

/// Prefix carried by every family id.
pub const FAMILY_ID_PREFIX: &str = "fam_";

/// Deterministic family id for a (brand, title) pair.
///
/// Same pair → same id, across runs and across independently discovered
/// clusters; this is the merge key that unions clusters resolving to the
/// same canonical title.
pub fn family_id(brand: &str, title: &str) -> String {
    let input = format!("{brand}-{title}").to_lowercase();
    let hash = xxh3_64(input.as_bytes());
    // Truncate to 12 hex digits (high 48 bits).
    format!("{FAMILY_ID_PREFIX}{:012x}", hash >> 16)
}
