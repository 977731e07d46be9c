//! Adapter-level tests: the DST witness instants, the end-to-end
//! gap/overlap scenarios, and round-trip sweeps over the whole database.

use zonetime::zonedb;
use zonetime::{ErrorKind, LocalDateTime, TimeZone, ZoneManager};

fn manager() -> ZoneManager {
    ZoneManager::new(&zonedb::ZONE_AND_LINK_REGISTRY)
}

fn timezone(name: &str) -> TimeZone {
    manager().timezone(name).unwrap_or_else(|| panic!("zone {name} missing"))
}

/// DST components taken from the IANA rule SAVE columns, which differ
/// from the "offset minus standard" a TZif reader would infer for
/// double-DST and re-based eras.
#[test]
fn dst_witnesses() {
    let cases: [(&str, i64, i32); 6] = [
        ("America/Bahia_Banderas", 1_270_371_600, 3600),
        ("Pacific/Rarotonga", 279_714_600, 1800),
        ("Europe/Madrid", -999_482_400, 7200),
        ("Atlantic/Azores", -873_676_800, 7200),
        ("Asia/Hong_Kong", -891_579_600, 1800),
        ("Asia/Ust-Nera", 354_898_800, 3600),
    ];
    for (name, epoch_seconds, expected_dst) in cases {
        let tz = timezone(name);
        assert_eq!(
            tz.dst(epoch_seconds).unwrap(),
            expected_dst,
            "{name} at {epoch_seconds}"
        );
    }
}

#[test]
fn witness_abbreviations() {
    assert_eq!(
        timezone("Europe/Madrid").tzname(-999_482_400).unwrap().as_str(),
        "WEMT"
    );
    assert_eq!(
        timezone("Atlantic/Azores").tzname(-873_676_800).unwrap().as_str(),
        "+00"
    );
    assert_eq!(
        timezone("Asia/Hong_Kong").tzname(-891_579_600).unwrap().as_str(),
        "HKWT"
    );
    assert_eq!(
        timezone("Pacific/Rarotonga").tzname(279_714_600).unwrap().as_str(),
        "-0930"
    );
    assert_eq!(
        timezone("Asia/Ust-Nera").tzname(354_898_800).unwrap().as_str(),
        "+12"
    );
}

#[test]
fn los_angeles_spring_forward() {
    let tz = timezone("America/Los_Angeles");

    // 2000-04-02T03:00:00-07:00.
    let info = tz.offset_info(954_669_600).unwrap();
    assert_eq!(info.utc_offset, -8 * 3600);
    assert_eq!(info.dst_offset, 3600);
    assert_eq!(info.abbrev.as_str(), "PDT");
    assert_eq!(info.fold, 0);

    let zdt = tz.fromutc(954_669_600).unwrap();
    assert_eq!(zdt.local, LocalDateTime::from_hms(2000, 4, 2, 3, 0, 0));

    // The same wall time maps back regardless of fold.
    let local = LocalDateTime::from_hms(2000, 4, 2, 3, 0, 0);
    assert_eq!(tz.localize(local, 0).unwrap(), 954_669_600);
    assert_eq!(tz.localize(local, 1).unwrap(), 954_669_600);

    // One second before the transition is still PST.
    let info = tz.offset_info(954_669_599).unwrap();
    assert_eq!(info.utc_offset, -8 * 3600);
    assert_eq!(info.dst_offset, 0);
    assert_eq!(info.abbrev.as_str(), "PST");
}

#[test]
fn los_angeles_fall_back_overlap() {
    let tz = timezone("America/Los_Angeles");
    let local = LocalDateTime::from_hms(2000, 10, 29, 1, 59, 59);

    // First occurrence is PDT, second is PST.
    assert_eq!(tz.offset_info_for_local(local, 0).unwrap().total_offset, -25200);
    assert_eq!(tz.offset_info_for_local(local, 1).unwrap().total_offset, -28800);

    let first = tz.localize(local, 0).unwrap();
    let second = tz.localize(local, 1).unwrap();
    assert_eq!(first, 972_809_999);
    assert_eq!(second, first + 3600);

    // Both instants round-trip to the same wall time with the fold that
    // recovers them.
    let zdt = tz.fromutc(first).unwrap();
    assert_eq!(zdt.local, local);
    assert_eq!(zdt.fold, 0);
    assert_eq!(tz.localize(zdt.local, zdt.fold).unwrap(), first);

    let zdt = tz.fromutc(second).unwrap();
    assert_eq!(zdt.local, local);
    assert_eq!(zdt.fold, 1);
    assert_eq!(tz.localize(zdt.local, zdt.fold).unwrap(), second);
}

#[test]
fn los_angeles_spring_gap() {
    let tz = timezone("America/Los_Angeles");
    // 02:30 never happened on 2000-04-02.
    let local = LocalDateTime::from_hms(2000, 4, 2, 2, 30, 0);

    // fold=0 resolves with the pre-gap offsets, landing after the gap;
    // fold=1 the reverse. Neither is an error.
    let with_pre_gap = tz.localize(local, 0).unwrap();
    let with_post_gap = tz.localize(local, 1).unwrap();
    assert_eq!(with_pre_gap, 954_642_600 + 28800);
    assert_eq!(with_post_gap, 954_642_600 + 25200);

    // Gap total offsets reverse the overlap ordering.
    let info0 = tz.offset_info_for_local(local, 0).unwrap();
    let info1 = tz.offset_info_for_local(local, 1).unwrap();
    assert!(info0.total_offset < info1.total_offset);
}

#[test]
fn us_pacific_link_transparency() {
    let link = timezone("US/Pacific");
    let target = timezone("America/Los_Angeles");

    assert!(link.is_link());
    assert_eq!(link.tzfullname(), "US/Pacific");
    assert_eq!(link.targetname(), Some("America/Los_Angeles"));
    assert!(!target.is_link());
    assert_eq!(target.targetname(), None);

    // Offsets agree at every sampled instant across the DST seam years.
    let mut epoch_seconds: i64 = 0;
    while epoch_seconds < 1_700_000_000 {
        assert_eq!(
            link.offset_info(epoch_seconds).unwrap(),
            target.offset_info(epoch_seconds).unwrap(),
            "diverged at {epoch_seconds}"
        );
        epoch_seconds += 5_000_017;
    }
}

#[test]
fn out_of_range_queries() {
    let tz = timezone("America/Los_Angeles");

    // 1929-06-01T00:00:00Z precedes the database coverage.
    let err = tz.offset_info(-1_281_744_000).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);

    let err = tz
        .localize(LocalDateTime::from_hms(1929, 6, 1, 12, 0, 0), 0)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);

    let err = tz
        .localize(LocalDateTime::from_hms(2100, 1, 1, 0, 0, 0), 0)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

/// Round-trip 1: instant -> local -> instant is the identity when the
/// local conversion's fold is honoured.
#[test]
fn instant_round_trip_sweep() {
    // 1931-01-01T00:00:00Z .. 2098-12-01T00:00:00Z.
    const LO: i64 = -1_230_768_000;
    const HI: i64 = 4_068_000_000;

    for zone in zonedb::ZONE_AND_LINK_REGISTRY {
        let tz = TimeZone::from_zone_info(zone);
        let mut epoch_seconds = LO;
        while epoch_seconds < HI {
            let zdt = tz.fromutc(epoch_seconds).unwrap_or_else(|e| {
                panic!("{} at {epoch_seconds}: {e}", zone.name);
            });
            let round_trip = tz.localize(zdt.local, zdt.fold).unwrap_or_else(|e| {
                panic!("{} at {epoch_seconds}: {e}", zone.name);
            });
            assert_eq!(
                round_trip, epoch_seconds,
                "{} at {epoch_seconds} via {:?} fold {}",
                zone.name, zdt.local, zdt.fold
            );
            epoch_seconds += 8_381_009;
        }
    }
}

/// Round-trip 1, concentrated on the seconds surrounding every
/// transition the database generates for a band of years.
#[test]
fn transition_edge_round_trips() {
    for zone in zonedb::ZONE_REGISTRY {
        let tz = TimeZone::from_zone_info(zone);
        for year in [1938, 1942, 1946, 1953, 1978, 1981, 2000, 2007, 2010, 2022] {
            let starts: Vec<i64> = {
                let mut processor = tz.processor().borrow_mut();
                if processor.init_for_year(year).is_err() {
                    continue;
                }
                processor
                    .transitions()
                    .iter()
                    .map(|t| t.start_epoch_second())
                    .collect()
            };
            for start in starts {
                for probe in [start - 3600, start - 1, start, start + 1, start + 3599] {
                    let zdt = tz.fromutc(probe).unwrap();
                    let round_trip = tz.localize(zdt.local, zdt.fold).unwrap();
                    assert_eq!(
                        round_trip, probe,
                        "{} year {year} near transition {start}",
                        zone.name
                    );
                }
            }
        }
    }
}

/// Round-trip 2: away from any transition, both folds resolve a local
/// time to the same instant.
#[test]
fn unambiguous_local_round_trip() {
    for zone in zonedb::ZONE_REGISTRY {
        let tz = TimeZone::from_zone_info(zone);
        let mut year = 1935i16;
        while year < 2095 {
            for (month, day) in [(1, 15), (7, 15)] {
                let local = LocalDateTime::from_hms(year, month, day, 12, 0, 0);
                let fold0 = tz.localize(local, 0).unwrap();
                let fold1 = tz.localize(local, 1).unwrap();
                assert_eq!(fold0, fold1, "{} {year}-{month}-{day}", zone.name);
            }
            year += 7;
        }
    }
}

/// Fold sign: the overlap's fold=0 mapping carries the larger total
/// offset, the gap's the smaller.
#[test]
fn fold_sign() {
    let tz = timezone("America/Los_Angeles");

    let overlap = LocalDateTime::from_hms(2000, 10, 29, 1, 30, 0);
    let overlap0 = tz.offset_info_for_local(overlap, 0).unwrap();
    let overlap1 = tz.offset_info_for_local(overlap, 1).unwrap();
    assert!(overlap0.total_offset > overlap1.total_offset);

    let gap = LocalDateTime::from_hms(2000, 4, 2, 2, 30, 0);
    let gap0 = tz.offset_info_for_local(gap, 0).unwrap();
    let gap1 = tz.offset_info_for_local(gap, 1).unwrap();
    assert!(gap0.total_offset < gap1.total_offset);
}

/// The fold reported for an instant marks only the repeated segment of
/// an overlap.
#[test]
fn instant_fold_reporting() {
    let tz = timezone("America/Los_Angeles");

    // Before the 2000 fall-back transition: not repeated.
    assert_eq!(tz.offset_info(972_809_999).unwrap().fold, 0);
    // First hour after fall back: the repeated 01:xx hour.
    assert_eq!(tz.offset_info(972_810_000).unwrap().fold, 1);
    assert_eq!(tz.offset_info(972_813_599).unwrap().fold, 1);
    // Past the repeated hour.
    assert_eq!(tz.offset_info(972_813_600).unwrap().fold, 0);
    // Spring forward creates a gap, never a fold.
    assert_eq!(tz.offset_info(954_669_600).unwrap().fold, 0);
}

#[test]
fn sub_hour_dst_rarotonga() {
    let tz = timezone("Pacific/Rarotonga");
    let info = tz.offset_info(279_714_600).unwrap();
    assert_eq!(info.utc_offset, -10 * 3600);
    assert_eq!(info.dst_offset, 1800);
    assert_eq!(info.total_offset, -(9 * 3600 + 1800));

    // Pre-transition the zone sat on a raw -10:30.
    let info = tz.offset_info(279_714_599).unwrap();
    assert_eq!(info.utc_offset, -(10 * 3600 + 1800));
    assert_eq!(info.dst_offset, 0);
}

#[test]
fn manager_misses_return_none() {
    let manager = manager();
    assert!(manager.timezone("Mars/Olympus_Mons").is_none());
    assert!(manager.get("").is_none());
}
