//! Rule policies. Each entry cites the tz database line it encodes.
//!
//! Day encoding: `on_day_of_week` is ISO (1 = Monday .. 7 = Sunday) or 0
//! for an exact day; `on_day_of_month` 0 selects the last weekday of the
//! month ("lastSun"), a positive value the weekday on or after it
//! ("Sun>=8").

use crate::date_tuple::TimeSuffix;
use crate::types::{ZonePolicy, ZoneRule, MAX_TO_YEAR, MIN_YEAR};

const fn anchor_rule(letter: &'static str) -> ZoneRule {
    ZoneRule {
        from_year: MIN_YEAR,
        to_year: MIN_YEAR,
        in_month: 1,
        on_day_of_week: 0,
        on_day_of_month: 1,
        at_seconds: 0,
        at_suffix: TimeSuffix::Wall,
        delta_seconds: 0,
        letter,
    }
}

const fn rule(
    from_year: i16,
    to_year: i16,
    in_month: u8,
    on_day_of_week: u8,
    on_day_of_month: i8,
    at_seconds: i32,
    at_suffix: TimeSuffix,
    delta_seconds: i32,
    letter: &'static str,
) -> ZoneRule {
    ZoneRule {
        from_year,
        to_year,
        in_month,
        on_day_of_week,
        on_day_of_month,
        at_seconds,
        at_suffix,
        delta_seconds,
        letter,
    }
}

use crate::date_tuple::TimeSuffix::{Standard as S, Universal as U, Wall as W};

//---------------------------------------------------------------------
// Policy US
//---------------------------------------------------------------------

static RULES_US: [ZoneRule; 12] = [
    anchor_rule("S"),
    // Rule US 1942 only - Feb  9 2:00  1:00 W # War
    rule(1942, 1942, 2, 0, 9, 7200, W, 3600, "W"),
    // Rule US 1945 only - Aug 14 23:00u 1:00 P # Peace
    rule(1945, 1945, 8, 0, 14, 82800, U, 3600, "P"),
    // Rule US 1945 only - Sep 30 2:00  0    S
    rule(1945, 1945, 9, 0, 30, 7200, W, 0, "S"),
    // Rule US 1967 2006 - Oct lastSun 2:00 0    S
    rule(1967, 2006, 10, 7, 0, 7200, W, 0, "S"),
    // Rule US 1967 1973 - Apr lastSun 2:00 1:00 D
    rule(1967, 1973, 4, 7, 0, 7200, W, 3600, "D"),
    // Rule US 1974 only - Jan  6 2:00 1:00 D
    rule(1974, 1974, 1, 0, 6, 7200, W, 3600, "D"),
    // Rule US 1975 only - Feb 23 2:00 1:00 D
    rule(1975, 1975, 2, 0, 23, 7200, W, 3600, "D"),
    // Rule US 1976 1986 - Apr lastSun 2:00 1:00 D
    rule(1976, 1986, 4, 7, 0, 7200, W, 3600, "D"),
    // Rule US 1987 2006 - Apr Sun>=1  2:00 1:00 D
    rule(1987, 2006, 4, 7, 1, 7200, W, 3600, "D"),
    // Rule US 2007 max  - Mar Sun>=8  2:00 1:00 D
    rule(2007, MAX_TO_YEAR, 3, 7, 8, 7200, W, 3600, "D"),
    // Rule US 2007 max  - Nov Sun>=1  2:00 0    S
    rule(2007, MAX_TO_YEAR, 11, 7, 1, 7200, W, 0, "S"),
];

pub static POLICY_US: ZonePolicy = ZonePolicy {
    name: "US",
    rules: &RULES_US,
};

//---------------------------------------------------------------------
// Policy Mexico
//---------------------------------------------------------------------

static RULES_MEXICO: [ZoneRule; 7] = [
    anchor_rule("S"),
    // Rule Mexico 1996 2000 - Apr Sun>=1  2:00 1:00 D
    rule(1996, 2000, 4, 7, 1, 7200, W, 3600, "D"),
    // Rule Mexico 1996 2000 - Oct lastSun 2:00 0    S
    rule(1996, 2000, 10, 7, 0, 7200, W, 0, "S"),
    // Rule Mexico 2001 only - May Sun>=1  2:00 1:00 D
    rule(2001, 2001, 5, 7, 1, 7200, W, 3600, "D"),
    // Rule Mexico 2001 only - Sep lastSun 2:00 0    S
    rule(2001, 2001, 9, 7, 0, 7200, W, 0, "S"),
    // Rule Mexico 2002 2022 - Apr Sun>=1  2:00 1:00 D
    rule(2002, 2022, 4, 7, 1, 7200, W, 3600, "D"),
    // Rule Mexico 2002 2022 - Oct lastSun 2:00 0    S
    rule(2002, 2022, 10, 7, 0, 7200, W, 0, "S"),
];

pub static POLICY_MEXICO: ZonePolicy = ZonePolicy {
    name: "Mexico",
    rules: &RULES_MEXICO,
};

//---------------------------------------------------------------------
// Policy Cook
//---------------------------------------------------------------------

static RULES_COOK: [ZoneRule; 4] = [
    anchor_rule(""),
    // Rule Cook 1978 only - Nov 12 0:00 0:30 -
    rule(1978, 1978, 11, 0, 12, 0, W, 1800, ""),
    // Rule Cook 1979 1991 - Mar Sun>=1  0:00 0    -
    rule(1979, 1991, 3, 7, 1, 0, W, 0, ""),
    // Rule Cook 1979 1990 - Oct lastSun 0:00 0:30 -
    rule(1979, 1990, 10, 7, 0, 0, W, 1800, ""),
];

pub static POLICY_COOK: ZonePolicy = ZonePolicy {
    name: "Cook",
    rules: &RULES_COOK,
};

//---------------------------------------------------------------------
// Policy Spain
//---------------------------------------------------------------------

static RULES_SPAIN: [ZoneRule; 20] = [
    anchor_rule(""),
    // Rule Spain 1937 only - Jun 16 23:00  1:00 S
    rule(1937, 1937, 6, 0, 16, 82800, W, 3600, "S"),
    // Rule Spain 1937 only - Oct Sat>=1 24:00s 0 -
    rule(1937, 1937, 10, 6, 1, 86400, S, 0, ""),
    // Rule Spain 1938 only - Apr  2 23:00  1:00 S
    rule(1938, 1938, 4, 0, 2, 82800, W, 3600, "S"),
    // Rule Spain 1938 only - Apr 30 23:00  2:00 M # midsummer
    rule(1938, 1938, 4, 0, 30, 82800, W, 7200, "M"),
    // Rule Spain 1938 only - Oct  2 24:00  1:00 S
    rule(1938, 1938, 10, 0, 2, 86400, W, 3600, "S"),
    // Rule Spain 1939 only - Apr 15 23:00  1:00 S
    rule(1939, 1939, 4, 0, 15, 82800, W, 3600, "S"),
    // Rule Spain 1939 only - Oct Sat>=1 24:00s 0 -
    rule(1939, 1939, 10, 6, 1, 86400, S, 0, ""),
    // Rule Spain 1940 only - Mar 16 23:00  1:00 S
    rule(1940, 1940, 3, 0, 16, 82800, W, 3600, "S"),
    // Rule Spain 1942 1945 - May Sat>=1 23:00 1:00 S
    rule(1942, 1945, 5, 6, 1, 82800, W, 3600, "S"),
    // Rule Spain 1942 1946 - Oct Sat>=1  1:00 0    -
    rule(1942, 1946, 10, 6, 1, 3600, W, 0, ""),
    // Rule Spain 1949 only - Apr 30 23:00  1:00 S
    rule(1949, 1949, 4, 0, 30, 82800, W, 3600, "S"),
    // Rule Spain 1949 only - Sep 30  1:00  0    -
    rule(1949, 1949, 9, 0, 30, 3600, W, 0, ""),
    // Rule Spain 1974 1975 - Apr Sat>=12 23:00 1:00 S
    rule(1974, 1975, 4, 6, 12, 82800, W, 3600, "S"),
    // Rule Spain 1974 1975 - Oct Sun>=1   1:00 0    -
    rule(1974, 1975, 10, 7, 1, 3600, W, 0, ""),
    // Rule Spain 1976 only - Mar 27 23:00  1:00 S
    rule(1976, 1976, 3, 0, 27, 82800, W, 3600, "S"),
    // Rule Spain 1976 1977 - Sep lastSun  1:00 0    -
    rule(1976, 1977, 9, 7, 0, 3600, W, 0, ""),
    // Rule Spain 1977 only - May 24 23:00  1:00 S
    rule(1977, 1977, 5, 0, 24, 82800, W, 3600, "S"),
    // Rule Spain 1978 only - Mar  2 23:00  1:00 S
    rule(1978, 1978, 3, 0, 2, 82800, W, 3600, "S"),
    // Rule Spain 1978 only - Oct  1  1:00  0    -
    rule(1978, 1978, 10, 0, 1, 3600, W, 0, ""),
];

pub static POLICY_SPAIN: ZonePolicy = ZonePolicy {
    name: "Spain",
    rules: &RULES_SPAIN,
};

//---------------------------------------------------------------------
// Policy EU
//---------------------------------------------------------------------

static RULES_EU: [ZoneRule; 7] = [
    anchor_rule(""),
    // Rule EU 1977 1980 - Apr Sun>=1  1:00u 1:00 S
    rule(1977, 1980, 4, 7, 1, 3600, U, 3600, "S"),
    // Rule EU 1977 only - Sep lastSun 1:00u 0    -
    rule(1977, 1977, 9, 7, 0, 3600, U, 0, ""),
    // Rule EU 1978 only - Oct  1      1:00u 0    -
    rule(1978, 1978, 10, 0, 1, 3600, U, 0, ""),
    // Rule EU 1979 1995 - Sep lastSun 1:00u 0    -
    rule(1979, 1995, 9, 7, 0, 3600, U, 0, ""),
    // Rule EU 1981 max  - Mar lastSun 1:00u 1:00 S
    rule(1981, MAX_TO_YEAR, 3, 7, 0, 3600, U, 3600, "S"),
    // Rule EU 1996 max  - Oct lastSun 1:00u 0    -
    rule(1996, MAX_TO_YEAR, 10, 7, 0, 3600, U, 0, ""),
];

pub static POLICY_EU: ZonePolicy = ZonePolicy {
    name: "EU",
    rules: &RULES_EU,
};

//---------------------------------------------------------------------
// Policy Port
//---------------------------------------------------------------------

static RULES_PORT: [ZoneRule; 10] = [
    anchor_rule(""),
    // Rule Port 1941 only - Apr  5 23:00s 1:00 S
    rule(1941, 1941, 4, 0, 5, 82800, S, 3600, "S"),
    // Rule Port 1941 only - Oct  5 23:00s 0    -
    rule(1941, 1941, 10, 0, 5, 82800, S, 0, ""),
    // Rule Port 1942 1945 - Mar Sat>=8 23:00s 1:00 S
    rule(1942, 1945, 3, 6, 8, 82800, S, 3600, "S"),
    // Rule Port 1942 only - Apr 25 22:00s 2:00 M # midsummer
    rule(1942, 1942, 4, 0, 25, 79200, S, 7200, "M"),
    // Rule Port 1942 only - Aug 15 22:00s 1:00 S
    rule(1942, 1942, 8, 0, 15, 79200, S, 3600, "S"),
    // Rule Port 1942 1945 - Oct Sat>=24 23:00s 0 -
    rule(1942, 1945, 10, 6, 24, 82800, S, 0, ""),
    // Rule Port 1943 only - Apr 17 22:00s 2:00 M
    rule(1943, 1943, 4, 0, 17, 79200, S, 7200, "M"),
    // Rule Port 1943 1945 - Aug Sat>=25 22:00s 1:00 S
    rule(1943, 1945, 8, 6, 25, 79200, S, 3600, "S"),
    // Rule Port 1944 1945 - Apr Sat>=21 22:00s 2:00 M
    rule(1944, 1945, 4, 6, 21, 79200, S, 7200, "M"),
];

pub static POLICY_PORT: ZonePolicy = ZonePolicy {
    name: "Port",
    rules: &RULES_PORT,
};

//---------------------------------------------------------------------
// Policy HK
//---------------------------------------------------------------------

static RULES_HK: [ZoneRule; 15] = [
    anchor_rule(""),
    // Rule HK 1946 only - Apr 21 0:00   1:00 S
    rule(1946, 1946, 4, 0, 21, 0, W, 3600, "S"),
    // Rule HK 1946 only - Dec  1 3:30s  0    -
    rule(1946, 1946, 12, 0, 1, 12600, S, 0, ""),
    // Rule HK 1947 only - Apr 13 3:30s  1:00 S
    rule(1947, 1947, 4, 0, 13, 12600, S, 3600, "S"),
    // Rule HK 1947 only - Nov 30 3:30s  0    -
    rule(1947, 1947, 11, 0, 30, 12600, S, 0, ""),
    // Rule HK 1948 only - May  2 3:30s  1:00 S
    rule(1948, 1948, 5, 0, 2, 12600, S, 3600, "S"),
    // Rule HK 1948 1952 - Oct Sun>=28 3:30s 0 -
    rule(1948, 1952, 10, 7, 28, 12600, S, 0, ""),
    // Rule HK 1949 1953 - Apr Sun>=1  3:30  1:00 S
    rule(1949, 1953, 4, 7, 1, 12600, W, 3600, "S"),
    // Rule HK 1953 1964 - Nov Sun>=1  3:30  0    -
    rule(1953, 1964, 11, 7, 1, 12600, W, 0, ""),
    // Rule HK 1954 1964 - Mar Sun>=18 3:30  1:00 S
    rule(1954, 1964, 3, 7, 18, 12600, W, 3600, "S"),
    // Rule HK 1965 1976 - Apr Sun>=16 3:30  1:00 S
    rule(1965, 1976, 4, 7, 16, 12600, W, 3600, "S"),
    // Rule HK 1965 1976 - Oct Sun>=16 3:30  0    -
    rule(1965, 1976, 10, 7, 16, 12600, W, 0, ""),
    // Rule HK 1973 only - Dec 30 3:30   1:00 S
    rule(1973, 1973, 12, 0, 30, 12600, W, 3600, "S"),
    // Rule HK 1979 only - May 13 3:30   1:00 S
    rule(1979, 1979, 5, 0, 13, 12600, W, 3600, "S"),
    // Rule HK 1979 only - Oct 21 3:30   0    -
    rule(1979, 1979, 10, 0, 21, 12600, W, 0, ""),
];

pub static POLICY_HK: ZonePolicy = ZonePolicy {
    name: "HK",
    rules: &RULES_HK,
};

//---------------------------------------------------------------------
// Policy Russia
//---------------------------------------------------------------------

static RULES_RUSSIA: [ZoneRule; 6] = [
    anchor_rule(""),
    // Rule Russia 1981 1984 - Apr  1      0:00  1:00 -
    rule(1981, 1984, 4, 0, 1, 0, W, 3600, ""),
    // Rule Russia 1981 1983 - Oct  1      0:00  0    -
    rule(1981, 1983, 10, 0, 1, 0, W, 0, ""),
    // Rule Russia 1984 1995 - Sep lastSun 2:00s 0    -
    rule(1984, 1995, 9, 7, 0, 7200, S, 0, ""),
    // Rule Russia 1985 2010 - Mar lastSun 2:00s 1:00 -
    rule(1985, 2010, 3, 7, 0, 7200, S, 3600, ""),
    // Rule Russia 1996 2010 - Oct lastSun 2:00s 0    -
    rule(1996, 2010, 10, 7, 0, 7200, S, 0, ""),
];

pub static POLICY_RUSSIA: ZonePolicy = ZonePolicy {
    name: "Russia",
    rules: &RULES_RUSSIA,
};
