//! A hand-curated subset of the IANA tz database (release 2021a),
//! rendered in the compiled record layout the engine consumes.
//!
//! The subset carries the zones and policies exercised by the crate's
//! test suite, with era histories truncated to the periods the tests
//! probe. Rule and era entries are annotated with the tz database source
//! lines they were transcribed from; transition instants were
//! cross-checked against the corresponding compiled TZif data.
//!
//! Every policy's rule list begins with a synthetic anchor rule pinned at
//! the `-INF` sentinel year, so that a matching era always owns a prior
//! transition no matter how early the requested window, the same device
//! the database compiler emits.

mod zone_infos;
mod zone_policies;
mod zone_registry;

pub use zone_infos::{
    CONTEXT, ZONE_AMERICA_BAHIA_BANDERAS, ZONE_AMERICA_LOS_ANGELES, ZONE_ASIA_HONG_KONG,
    ZONE_ASIA_UST_NERA, ZONE_ATLANTIC_AZORES, ZONE_EUROPE_MADRID, ZONE_PACIFIC_RAROTONGA,
    ZONE_US_PACIFIC,
};
pub use zone_policies::{
    POLICY_COOK, POLICY_EU, POLICY_HK, POLICY_MEXICO, POLICY_PORT, POLICY_RUSSIA, POLICY_SPAIN,
    POLICY_US,
};
pub use zone_registry::{ZONE_AND_LINK_REGISTRY, ZONE_REGISTRY};
