//! Zone records. Each era cites the tz database zone line it encodes;
//! histories are truncated to the periods the test suite probes, with
//! the first kept era extending back to `-INF`.

use crate::date_tuple::TimeSuffix;
use crate::types::{ZoneContext, ZoneEra, ZoneInfo, MAX_UNTIL_YEAR};

use super::zone_policies::{
    POLICY_COOK, POLICY_EU, POLICY_HK, POLICY_MEXICO, POLICY_PORT, POLICY_RUSSIA, POLICY_SPAIN,
    POLICY_US,
};

pub static CONTEXT: ZoneContext = ZoneContext {
    tzdb_version: "2021a",
    start_year: 1930,
    until_year: 2100,
    base_epoch_year: 2000,
};

use crate::date_tuple::TimeSuffix::{Standard as S, Wall as W};

const fn era(
    offset_seconds: i32,
    policy: Option<&'static crate::types::ZonePolicy>,
    delta_seconds: i32,
    format: &'static str,
    until_year: i16,
    until_month: u8,
    until_day: u8,
    until_seconds: i32,
    until_suffix: TimeSuffix,
) -> ZoneEra {
    ZoneEra {
        offset_seconds,
        policy,
        delta_seconds,
        format,
        until_year,
        until_month,
        until_day,
        until_seconds,
        until_suffix,
    }
}

//---------------------------------------------------------------------
// Zone America/Los_Angeles
//---------------------------------------------------------------------

static ERAS_AMERICA_LOS_ANGELES: [ZoneEra; 1] = [
    // -8:00 US P%sT
    era(-28800, Some(&POLICY_US), 0, "P%sT", MAX_UNTIL_YEAR, 1, 1, 0, W),
];

pub static ZONE_AMERICA_LOS_ANGELES: ZoneInfo = ZoneInfo {
    name: "America/Los_Angeles",
    target: None,
    eras: &ERAS_AMERICA_LOS_ANGELES,
    context: &CONTEXT,
    transition_buf_size: 8,
};

// Link US/Pacific -> America/Los_Angeles
pub static ZONE_US_PACIFIC: ZoneInfo = ZoneInfo {
    name: "US/Pacific",
    target: Some(&ZONE_AMERICA_LOS_ANGELES),
    eras: &[],
    context: &CONTEXT,
    transition_buf_size: 8,
};

//---------------------------------------------------------------------
// Zone America/Bahia_Banderas
//---------------------------------------------------------------------

static ERAS_AMERICA_BAHIA_BANDERAS: [ZoneEra; 4] = [
    // -8:00 - PST 1970
    era(-28800, None, 0, "PST", 1970, 1, 1, 0, W),
    // -7:00 Mexico M%sT 2010 Apr 4 3:00
    era(-25200, Some(&POLICY_MEXICO), 0, "M%sT", 2010, 4, 4, 10800, W),
    // -6:00 Mexico C%sT 2022 Oct 30 2:00
    era(-21600, Some(&POLICY_MEXICO), 0, "C%sT", 2022, 10, 30, 7200, W),
    // -6:00 - CST
    era(-21600, None, 0, "CST", MAX_UNTIL_YEAR, 1, 1, 0, W),
];

pub static ZONE_AMERICA_BAHIA_BANDERAS: ZoneInfo = ZoneInfo {
    name: "America/Bahia_Banderas",
    target: None,
    eras: &ERAS_AMERICA_BAHIA_BANDERAS,
    context: &CONTEXT,
    transition_buf_size: 10,
};

//---------------------------------------------------------------------
// Zone Pacific/Rarotonga
//---------------------------------------------------------------------

static ERAS_PACIFIC_RAROTONGA: [ZoneEra; 2] = [
    // -10:30 - -1030 1978 Nov 12
    era(-37800, None, 0, "-1030", 1978, 11, 12, 0, W),
    // -10:00 Cook -10/-0930
    era(-36000, Some(&POLICY_COOK), 0, "-10/-0930", MAX_UNTIL_YEAR, 1, 1, 0, W),
];

pub static ZONE_PACIFIC_RAROTONGA: ZoneInfo = ZoneInfo {
    name: "Pacific/Rarotonga",
    target: None,
    eras: &ERAS_PACIFIC_RAROTONGA,
    context: &CONTEXT,
    transition_buf_size: 8,
};

//---------------------------------------------------------------------
// Zone Europe/Madrid
//---------------------------------------------------------------------

static ERAS_EUROPE_MADRID: [ZoneEra; 3] = [
    // 0:00 Spain WE%sT 1940 Mar 16 23:00s
    era(0, Some(&POLICY_SPAIN), 0, "WE%sT", 1940, 3, 16, 82800, S),
    // 1:00 Spain CE%sT 1979
    era(3600, Some(&POLICY_SPAIN), 0, "CE%sT", 1979, 1, 1, 0, W),
    // 1:00 EU CE%sT
    era(3600, Some(&POLICY_EU), 0, "CE%sT", MAX_UNTIL_YEAR, 1, 1, 0, W),
];

pub static ZONE_EUROPE_MADRID: ZoneInfo = ZoneInfo {
    name: "Europe/Madrid",
    target: None,
    eras: &ERAS_EUROPE_MADRID,
    context: &CONTEXT,
    transition_buf_size: 12,
};

//---------------------------------------------------------------------
// Zone Atlantic/Azores
//---------------------------------------------------------------------

static ERAS_ATLANTIC_AZORES: [ZoneEra; 5] = [
    // -2:00 Port -02/-01 1942 Apr 25 22:00s
    era(-7200, Some(&POLICY_PORT), 0, "-02/-01", 1942, 4, 25, 79200, S),
    // -2:00 Port +00 1942 Aug 15 22:00s
    era(-7200, Some(&POLICY_PORT), 0, "+00", 1942, 8, 15, 79200, S),
    // -2:00 Port -02/-01 1943 Apr 17 22:00s
    era(-7200, Some(&POLICY_PORT), 0, "-02/-01", 1943, 4, 17, 79200, S),
    // -2:00 Port +00 1943 Aug 28 22:00s
    era(-7200, Some(&POLICY_PORT), 0, "+00", 1943, 8, 28, 79200, S),
    // -2:00 Port -02/-01
    era(-7200, Some(&POLICY_PORT), 0, "-02/-01", MAX_UNTIL_YEAR, 1, 1, 0, W),
];

pub static ZONE_ATLANTIC_AZORES: ZoneInfo = ZoneInfo {
    name: "Atlantic/Azores",
    target: None,
    eras: &ERAS_ATLANTIC_AZORES,
    context: &CONTEXT,
    transition_buf_size: 12,
};

//---------------------------------------------------------------------
// Zone Asia/Hong_Kong
//---------------------------------------------------------------------

static ERAS_ASIA_HONG_KONG: [ZoneEra; 5] = [
    // 8:00 - HKT 1941 Jun 15 3:00
    era(28800, None, 0, "HKT", 1941, 6, 15, 10800, W),
    // 8:00 1:00 HKST 1941 Oct 1 4:00
    era(28800, None, 3600, "HKST", 1941, 10, 1, 14400, W),
    // 8:00 0:30 HKWT 1941 Dec 25
    era(28800, None, 1800, "HKWT", 1941, 12, 25, 0, W),
    // 9:00 - JST 1945 Nov 18 2:00
    era(32400, None, 0, "JST", 1945, 11, 18, 7200, W),
    // 8:00 HK HK%sT
    era(28800, Some(&POLICY_HK), 0, "HK%sT", MAX_UNTIL_YEAR, 1, 1, 0, W),
];

pub static ZONE_ASIA_HONG_KONG: ZoneInfo = ZoneInfo {
    name: "Asia/Hong_Kong",
    target: None,
    eras: &ERAS_ASIA_HONG_KONG,
    context: &CONTEXT,
    transition_buf_size: 8,
};

//---------------------------------------------------------------------
// Zone Asia/Ust-Nera
//---------------------------------------------------------------------

static ERAS_ASIA_UST_NERA: [ZoneEra; 3] = [
    // 9:00 - +09 1981 Apr 1
    era(32400, None, 0, "+09", 1981, 4, 1, 0, W),
    // 11:00 Russia +11/+12 1991 Mar 31 2:00s
    era(39600, Some(&POLICY_RUSSIA), 0, "+11/+12", 1991, 3, 31, 7200, S),
    // 11:00 - +11
    era(39600, None, 0, "+11", MAX_UNTIL_YEAR, 1, 1, 0, W),
];

pub static ZONE_ASIA_UST_NERA: ZoneInfo = ZoneInfo {
    name: "Asia/Ust-Nera",
    target: None,
    eras: &ERAS_ASIA_UST_NERA,
    context: &CONTEXT,
    transition_buf_size: 8,
};
