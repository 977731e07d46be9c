//! Name registries, sorted by zone name for binary search.

use crate::types::ZoneInfo;

use super::zone_infos::{
    ZONE_AMERICA_BAHIA_BANDERAS, ZONE_AMERICA_LOS_ANGELES, ZONE_ASIA_HONG_KONG,
    ZONE_ASIA_UST_NERA, ZONE_ATLANTIC_AZORES, ZONE_EUROPE_MADRID, ZONE_PACIFIC_RAROTONGA,
    ZONE_US_PACIFIC,
};

/// True zones only.
pub static ZONE_REGISTRY: [&ZoneInfo; 7] = [
    &ZONE_AMERICA_BAHIA_BANDERAS,
    &ZONE_AMERICA_LOS_ANGELES,
    &ZONE_ASIA_HONG_KONG,
    &ZONE_ASIA_UST_NERA,
    &ZONE_ATLANTIC_AZORES,
    &ZONE_EUROPE_MADRID,
    &ZONE_PACIFIC_RAROTONGA,
];

/// True zones and links.
pub static ZONE_AND_LINK_REGISTRY: [&ZoneInfo; 8] = [
    &ZONE_AMERICA_BAHIA_BANDERAS,
    &ZONE_AMERICA_LOS_ANGELES,
    &ZONE_ASIA_HONG_KONG,
    &ZONE_ASIA_UST_NERA,
    &ZONE_ATLANTIC_AZORES,
    &ZONE_EUROPE_MADRID,
    &ZONE_PACIFIC_RAROTONGA,
    &ZONE_US_PACIFIC,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registries_are_sorted() {
        for registry in [&ZONE_REGISTRY[..], &ZONE_AND_LINK_REGISTRY[..]] {
            for pair in registry.windows(2) {
                assert!(pair[0].name < pair[1].name);
            }
        }
    }
}
