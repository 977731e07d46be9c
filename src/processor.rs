//! The zone processor: per-year transition materialisation and the two
//! query paths over the resulting buffer.
//!
//! For a bound zone and a requested year the processor runs a five-pass
//! recompute:
//!
//! 1. select the eras overlapping a 14-month window around the year and
//!    clip them into [`MatchingEra`]s,
//! 2. expand each matching era's policy rules (plus one synthetic
//!    era-start record) into candidate [`Transition`]s, keeping the most
//!    recent prior transition,
//! 3. express every transition time in all three frames using the
//!    offsets in effect just before it,
//! 4. assign each active transition its wall start/until interval and
//!    its UTC start instant,
//! 5. resolve abbreviations from the era templates.
//!
//! Queries then scan the small ordered buffer: by UTC start instant for
//! epoch-second queries, by wall interval for local date-time queries
//! with PEP 495 fold disambiguation.

use alloc::string::String;
use alloc::vec::Vec;

use log::trace;
use tinystr::TinyAsciiStr;

use crate::date_tuple::{subtract_date_tuple, DateTuple, TimeSuffix, YearMonth};
use crate::error::TzError;
use crate::types::{ZoneEra, ZoneInfo, ZoneRule, INVALID_YEAR, MIN_YEAR};
use crate::utils;
use crate::TzResult;

/// Matching eras per window. Two era changes inside the 14-month window
/// plus the bracketing eras; the database compiler verifies no zone
/// needs more.
const MAX_MATCHES: usize = 4;

/// The offset data in effect at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetInfo {
    /// `utc_offset + dst_offset`.
    pub total_offset: i32,
    /// Standard offset from UTC in seconds.
    pub utc_offset: i32,
    /// DST saving in seconds.
    pub dst_offset: i32,
    /// Resolved abbreviation, e.g. `PDT`.
    pub abbrev: TinyAsciiStr<8>,
    /// PEP 495 fold: 1 iff the instant lies in the repeated segment of an
    /// overlap.
    pub fold: u8,
}

/// How a transition relates to its enclosing matching era.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchStatus {
    /// Superseded by a later prior transition; dropped.
    FarPast,
    /// The most recent transition before the era's start.
    Prior,
    /// Falls exactly on the era's start boundary.
    ExactMatch,
    /// Falls inside the era's interval.
    WithinMatch,
    /// Falls after the era's interval; dropped.
    FarFuture,
}

impl MatchStatus {
    fn is_active(self) -> bool {
        matches!(self, Self::Prior | Self::ExactMatch | Self::WithinMatch)
    }
}

/// An era clipped to the processor's current 14-month window.
#[derive(Debug, Clone, Copy)]
pub struct MatchingEra {
    start_date_time: DateTuple,
    until_date_time: DateTuple,
    era: &'static ZoneEra,
    /// `(standard offset, DST saving)` observed when leaving the previous
    /// matching era; `None` for the first, which seeds with
    /// `(era.offset_seconds, 0)`.
    prev_exit: Option<(i32, i32)>,
}

impl MatchingEra {
    /// Start bound: the previous era's until, clipped to the window, in
    /// the previous era's frame.
    pub fn start_date_time(&self) -> DateTuple {
        self.start_date_time
    }

    /// Until bound: this era's until, clipped to the window.
    pub fn until_date_time(&self) -> DateTuple {
        self.until_date_time
    }

    pub fn era(&self) -> &'static ZoneEra {
        self.era
    }

    /// Name of the era's policy, if it has one.
    pub fn policy_name(&self) -> Option<&'static str> {
        self.era.policy.map(|p| p.name)
    }

    fn exit_offsets(&self) -> (i32, i32) {
        self.prev_exit
            .unwrap_or((self.era.offset_seconds, 0))
    }
}

/// A concrete change of `(utc_offset, dst_offset)` within or at the
/// boundary of a matching era.
#[derive(Debug, Clone)]
pub struct Transition {
    era: &'static ZoneEra,
    rule: Option<&'static ZoneRule>,
    /// The raw transition time: a rule's AT instant, or the era's start
    /// for an era-start record. Frame as declared by the source field.
    transition_time: DateTuple,
    transition_time_w: DateTuple,
    transition_time_s: DateTuple,
    transition_time_u: DateTuple,
    /// Wall interval of this transition's reign, filled in pass 4.
    start_date_time: DateTuple,
    until_date_time: DateTuple,
    /// UTC start instant in epoch seconds, filled in pass 4.
    start_epoch_second: i64,
    abbrev: Option<TinyAsciiStr<8>>,
    match_status: MatchStatus,
}

impl Transition {
    fn new(matching: &MatchingEra, transition_time: DateTuple) -> Self {
        Self {
            era: matching.era,
            rule: None,
            transition_time,
            transition_time_w: transition_time,
            transition_time_s: transition_time,
            transition_time_u: transition_time,
            start_date_time: matching.start_date_time,
            until_date_time: matching.until_date_time,
            start_epoch_second: 0,
            abbrev: None,
            match_status: MatchStatus::WithinMatch,
        }
    }

    /// Standard offset in effect from this transition on.
    pub fn offset_seconds(&self) -> i32 {
        self.era.offset_seconds
    }

    /// DST saving in effect from this transition on.
    pub fn delta_seconds(&self) -> i32 {
        match self.rule {
            Some(rule) => rule.delta_seconds,
            None => self.era.delta_seconds,
        }
    }

    fn letter(&self) -> &'static str {
        self.rule.map(|r| r.letter).unwrap_or("")
    }

    /// The originating rule, or `None` for an era-start transition.
    pub fn rule(&self) -> Option<&'static ZoneRule> {
        self.rule
    }

    pub fn era(&self) -> &'static ZoneEra {
        self.era
    }

    /// Wall date-time at which this transition takes effect.
    pub fn start_date_time(&self) -> DateTuple {
        self.start_date_time
    }

    /// Wall date-time at which the next transition takes over.
    pub fn until_date_time(&self) -> DateTuple {
        self.until_date_time
    }

    /// UTC start instant in epoch seconds.
    pub fn start_epoch_second(&self) -> i64 {
        self.start_epoch_second
    }

    /// Resolved abbreviation; empty until pass 5 has run.
    pub fn abbrev(&self) -> &str {
        self.abbrev.as_ref().map(TinyAsciiStr::as_str).unwrap_or("")
    }
}

fn to_offset_info(transition: &Transition, fold: u8) -> TzResult<OffsetInfo> {
    let abbrev = transition
        .abbrev
        .ok_or_else(|| TzError::bad_zone_data().with_message("unresolved abbreviation"))?;
    Ok(OffsetInfo {
        total_offset: transition.offset_seconds() + transition.delta_seconds(),
        utc_offset: transition.offset_seconds(),
        dst_offset: transition.delta_seconds(),
        abbrev,
        fold,
    })
}

/// Accounting twin of the fixed-capacity transition buffer used by the
/// embedded implementations: one reserved prior slot, one free agent per
/// examined candidate, actives accumulated at the bottom. Only the high
/// water mark matters here.
#[derive(Debug, Default)]
struct TransitionStorage {
    index_free: usize,
    index_beyond: usize,
}

impl TransitionStorage {
    fn clear(&mut self) {
        self.index_free = 0;
        self.index_beyond = 0;
    }

    fn push(&mut self, delta: usize) {
        self.index_free += delta;
        if self.index_free > self.index_beyond {
            self.index_beyond = self.index_free;
        }
    }

    fn pop(&mut self, delta: usize) {
        self.index_free -= delta;
    }

    fn high_water(&self) -> usize {
        self.index_beyond
    }
}

/// The per-zone transition engine.
///
/// A processor is bound to one [`ZoneInfo`] and caches the transitions of
/// one year at a time; queries for a different year trigger a recompute.
/// A processor is single-writer: share across threads only behind
/// external synchronisation, or give each thread its own.
#[derive(Debug)]
pub struct ZoneProcessor {
    zone: &'static ZoneInfo,
    data: &'static ZoneInfo,
    year: i16,
    matches: Vec<MatchingEra>,
    transitions: Vec<Transition>,
    storage: TransitionStorage,
}

impl ZoneProcessor {
    /// Create a processor bound to the given zone, following a Link to
    /// its target once.
    pub fn new(zone: &'static ZoneInfo) -> Self {
        Self {
            zone,
            data: zone.data(),
            year: INVALID_YEAR,
            matches: Vec::new(),
            transitions: Vec::new(),
            storage: TransitionStorage::default(),
        }
    }

    /// Rebind to a different zone, discarding the cached year.
    pub fn bind(&mut self, zone: &'static ZoneInfo) {
        self.zone = zone;
        self.data = zone.data();
        self.year = INVALID_YEAR;
        self.matches.clear();
        self.transitions.clear();
        self.storage.clear();
    }

    /// The bound zone's display name (the link name for a Link).
    pub fn name(&self) -> &'static str {
        self.zone.name
    }

    /// The data source's name when the bound zone is a Link.
    pub fn target_name(&self) -> Option<&'static str> {
        self.zone.target.map(|t| t.name)
    }

    pub fn is_link(&self) -> bool {
        self.zone.is_link()
    }

    /// The year whose transitions are cached, if any.
    pub fn cached_year(&self) -> Option<i16> {
        (self.year != INVALID_YEAR).then_some(self.year)
    }

    /// The matching eras of the cached year.
    pub fn matches(&self) -> &[MatchingEra] {
        &self.matches
    }

    /// The active transitions of the cached year, ascending by UTC start
    /// instant.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// `(active transition count, storage high water mark)` for the
    /// cached year.
    pub fn buffer_sizes(&self) -> (usize, usize) {
        (self.transitions.len(), self.storage.high_water())
    }

    /// The offset data governing the given epoch second.
    pub fn offset_for_instant(&mut self, epoch_seconds: i64) -> TzResult<OffsetInfo> {
        self.init_for_year(utils::year_for_epoch_seconds(epoch_seconds))?;
        let (index, fold) = self
            .find_transition_for_seconds(epoch_seconds)
            .ok_or_else(|| {
                TzError::bad_zone_data().with_message("no governing transition for instant")
            })?;
        to_offset_info(&self.transitions[index], fold)
    }

    /// The offset data for a local wall date-time, disambiguated by
    /// `fold` when the local time falls in a gap or an overlap.
    pub fn offset_for_local(
        &mut self,
        year: i16,
        month: u8,
        day: u8,
        second_of_day: i32,
        fold: u8,
    ) -> TzResult<OffsetInfo> {
        self.init_for_year(i32::from(year))?;
        let local = DateTuple::new(year, month, day, second_of_day, TimeSuffix::Wall);
        let transition = self.find_transition_for_datetime(&local, fold).ok_or_else(|| {
            TzError::bad_zone_data().with_message("no governing transition for local time")
        })?;
        to_offset_info(transition, fold)
    }

    /// Compute and cache the active transitions for `year`.
    ///
    /// On failure the cache is left invalid, so the next query recomputes
    /// from scratch.
    pub fn init_for_year(&mut self, year: i32) -> TzResult<()> {
        if i32::from(self.year) == year {
            return Ok(());
        }
        let context = self.data.context;
        if year < i32::from(context.start_year) || year >= i32::from(context.until_year) {
            return Err(TzError::out_of_range()
                .with_message("requested year outside the zone database coverage"));
        }
        let year = year as i16;
        trace!("{}: computing transitions for {}", self.zone.name, year);

        self.year = INVALID_YEAR;
        self.matches.clear();
        self.transitions.clear();
        self.storage.clear();

        // 14 months: December of the previous year through January of the
        // next. December rules that land in early January of `year`, and
        // January rules that land slightly before it, stay in view.
        let start_ym = YearMonth::new(year - 1, 12);
        let until_ym = YearMonth::new(year + 1, 2);

        self.find_matches(start_ym, until_ym)?;
        self.create_transitions()?;
        fix_transition_times(&mut self.transitions);
        self.generate_start_until_times();
        self.calc_abbrevs()?;

        if self.storage.high_water() > usize::from(self.data.transition_buf_size) {
            return Err(
                TzError::bad_zone_data().with_message("transition buffer capacity exceeded")
            );
        }
        trace!(
            "{}: {} active transitions, high water {}",
            self.zone.name,
            self.transitions.len(),
            self.storage.high_water()
        );
        self.year = year;
        Ok(())
    }

    /// Whether `year` is late enough that the zone's transition pattern
    /// has stabilised: the last era governs and none of its policy's
    /// finite rules can still start or stop. Database tooling uses this
    /// to bound buffer estimation.
    pub fn is_terminal_year(&self, year: i16) -> bool {
        let eras = self.data.eras;
        let Some(last) = eras.last() else {
            return true;
        };
        if year > last.until_year {
            return true;
        }
        let prev_until = if eras.len() > 1 {
            eras[eras.len() - 2].until_year
        } else {
            MIN_YEAR
        };
        if year < prev_until {
            return false;
        }
        let Some(policy) = last.policy else {
            return true;
        };
        let mut finite_matches = 0usize;
        for rule in policy.rules {
            if year < rule.from_year {
                // An upcoming rule can still change the pattern.
                return false;
            }
            if rule.to_year != crate::types::MAX_TO_YEAR && year <= rule.to_year {
                finite_matches += 1;
            }
        }
        finite_matches == 0
    }

    fn find_matches(&mut self, start_ym: YearMonth, until_ym: YearMonth) -> TzResult<()> {
        let mut prev_era: Option<&'static ZoneEra> = None;
        for era in self.data.eras {
            if era_overlaps_interval(prev_era, era, start_ym, until_ym) {
                if self.matches.len() == MAX_MATCHES {
                    return Err(
                        TzError::bad_zone_data().with_message("matching era capacity exceeded")
                    );
                }
                self.matches
                    .push(create_match(prev_era, era, start_ym, until_ym));
                prev_era = Some(era);
            }
        }
        trace!("{}: {} matching eras", self.zone.name, self.matches.len());
        Ok(())
    }

    fn create_transitions(&mut self) -> TzResult<()> {
        let mut prev_exit: Option<(i32, i32)> = None;
        for index in 0..self.matches.len() {
            self.matches[index].prev_exit = prev_exit;
            let matching = self.matches[index];
            prev_exit = Some(self.create_transitions_for_match(&matching)?);
        }
        Ok(())
    }

    /// Create the transitions of one matching era and return the
    /// `(offset, saving)` in effect when leaving it.
    fn create_transitions_for_match(&mut self, matching: &MatchingEra) -> TzResult<(i32, i32)> {
        let Some(policy) = matching.era.policy else {
            // A simple era defines its offsets itself: one transition at
            // the era's start, straight into the active pool.
            let mut transition = Transition::new(matching, matching.start_date_time);
            transition.match_status = MatchStatus::ExactMatch;
            self.storage.push(1);
            let exit = (transition.offset_seconds(), transition.delta_seconds());
            self.transitions.push(transition);
            return Ok(exit);
        };

        // Pass 2a: candidates from whole-year rule expansion, plus the
        // most recent prior transition.
        let candidates = self.find_candidate_transitions(matching, policy.rules)?;
        check_transitions_sorted(policy.name, &candidates)?;
        self.storage.pop(candidates.len());

        // Pass 2b: normalize candidate times into all three frames.
        let mut candidates = candidates;
        fix_transition_times(&mut candidates);
        check_transitions_sorted(policy.name, &candidates)?;

        // Pass 2c: keep only candidates overlapping the matching era's
        // actual interval.
        let active = select_active_transitions(matching, candidates);
        check_transitions_sorted(policy.name, &active)?;

        let last = active.last().ok_or_else(|| {
            TzError::bad_zone_data().with_message("policy produced no active transitions")
        })?;
        let exit = (last.offset_seconds(), last.delta_seconds());
        self.storage.push(active.len());
        self.transitions.extend(active);
        Ok(exit)
    }

    /// Expand the policy's rules over the matching era's whole years,
    /// filtering with a coarse month-level comparison. The storage
    /// account mirrors the embedded buffer: one reserved prior slot, one
    /// free agent per examined candidate.
    fn find_candidate_transitions(
        &mut self,
        matching: &MatchingEra,
        rules: &'static [ZoneRule],
    ) -> TzResult<Vec<Transition>> {
        let start_year = matching.start_date_time.year;
        let until = matching.until_date_time;
        let mut end_year = until.year;
        // An until of exactly Jan 1 00:00 pulls in nothing from its year.
        if until.month == 1 && until.day == 1 && until.seconds == 0 {
            end_year -= 1;
        }

        let mut prior: Option<Transition> = None;
        self.storage.push(1);

        let mut candidates: Vec<Transition> = Vec::new();
        for rule in rules {
            for year in interior_years(rule.from_year, rule.to_year, start_year, end_year) {
                let transition = create_transition_for_year(year, Some(rule), matching);
                self.storage.push(1);
                match compare_transition_to_match_fuzzy(&transition, matching) {
                    MatchStatus::Prior => {
                        prior = Some(select_prior_transition(prior, transition));
                        self.storage.pop(1);
                    }
                    MatchStatus::WithinMatch => add_transition_sorted(&mut candidates, transition),
                    MatchStatus::FarFuture => self.storage.pop(1),
                    status => {
                        debug_assert!(false, "unexpected fuzzy status {status:?}");
                        return Err(TzError::bad_zone_data()
                            .with_message("invalid candidate classification"));
                    }
                }
            }

            // The most recent year of this rule wholly before the match,
            // if any, competes for the prior slot.
            let prior_year =
                most_recent_prior_year(rule.from_year, rule.to_year, start_year);
            if prior_year != INVALID_YEAR {
                let transition = create_transition_for_year(prior_year, Some(rule), matching);
                self.storage.push(1);
                prior = Some(select_prior_transition(prior, transition));
                self.storage.pop(1);
            }
        }

        match prior {
            Some(prior) => add_transition_sorted(&mut candidates, prior),
            None => self.storage.pop(1),
        }
        Ok(candidates)
    }

    /// Pass 4: wall start/until intervals and UTC start instants.
    ///
    /// Each transition's until is the next transition's wall time; its
    /// own wall start is its transition time re-expressed in its own
    /// total offset; its UTC start instant follows from that start and
    /// offset. Transition times at 24:00 or beyond shift into the
    /// neighbouring day via normalization.
    fn generate_start_until_times(&mut self) {
        if self.transitions.is_empty() {
            return;
        }
        for index in 0..self.transitions.len() {
            let tt = self.transitions[index].transition_time_w;
            let (prev_offset, prev_delta) = if index == 0 {
                let first = &self.transitions[0];
                (first.offset_seconds(), first.delta_seconds())
            } else {
                self.transitions[index - 1].until_date_time = tt;
                let prev = &self.transitions[index - 1];
                (prev.offset_seconds(), prev.delta_seconds())
            };

            let transition = &mut self.transitions[index];
            let total = transition.offset_seconds() + transition.delta_seconds();
            let seconds = tt.seconds - prev_offset - prev_delta + total;
            let start =
                DateTuple::new(tt.year, tt.month, tt.day, seconds, tt.suffix).normalize();
            transition.start_date_time = start;
            transition.start_epoch_second = start.epoch_seconds() - i64::from(total);
        }

        // The last until is still the matching era's bound in its native
        // frame; re-express it as wall.
        if let Some(last) = self.transitions.last_mut() {
            let (w, _, _) = last
                .until_date_time
                .expand(last.offset_seconds(), last.delta_seconds());
            last.until_date_time = w;
        }
    }

    /// Pass 5: abbreviations from the era templates.
    fn calc_abbrevs(&mut self) -> TzResult<()> {
        for transition in &mut self.transitions {
            let format = transition.era.format;
            let resolved: String = if let Some(slash) = format.find('/') {
                if transition.delta_seconds() == 0 {
                    String::from(&format[..slash])
                } else {
                    String::from(&format[slash + 1..])
                }
            } else if format.contains("%s") {
                format.replace("%s", transition.letter())
            } else {
                String::from(format)
            };
            let abbrev = TinyAsciiStr::try_from_str(&resolved).map_err(|_| {
                TzError::bad_zone_data().with_message("abbreviation exceeds 8 ASCII bytes")
            })?;
            transition.abbrev = Some(abbrev);
        }
        Ok(())
    }

    /// The governing transition for an epoch second, with its fold.
    fn find_transition_for_seconds(&self, epoch_seconds: i64) -> Option<(usize, u8)> {
        let mut matching: Option<usize> = None;
        for (index, transition) in self.transitions.iter().enumerate() {
            if transition.start_epoch_second > epoch_seconds {
                break;
            }
            matching = Some(index);
        }
        let index = matching?;
        Some((index, self.determine_fold(epoch_seconds, index)))
    }

    /// Fold is 1 iff the previous transition's until overlaps this
    /// transition's start and the instant falls inside the repeated
    /// segment.
    fn determine_fold(&self, epoch_seconds: i64, index: usize) -> u8 {
        if index < 1 {
            return 0;
        }
        let overlap = subtract_date_tuple(
            &self.transitions[index - 1].until_date_time,
            &self.transitions[index].start_date_time,
        );
        if overlap <= 0 {
            return 0;
        }
        let since_start = epoch_seconds - self.transitions[index].start_epoch_second;
        if since_start >= overlap {
            return 0;
        }
        1
    }

    /// PEP 495 resolution of a wall date-time.
    ///
    /// In an overlap, `fold` selects the earlier (0) or later (1)
    /// transition. In a gap, `fold == 0` resolves with the pre-gap
    /// transition (mapping the local time to the later UTC instant) and
    /// `fold == 1` with the post-gap transition.
    fn find_transition_for_datetime(&self, local: &DateTuple, fold: u8) -> Option<&Transition> {
        let mut prev_exact: Option<&Transition> = None;
        let mut prev: Option<&Transition> = None;
        for transition in &self.transitions {
            let start = transition.start_date_time;
            let until = transition.until_date_time;
            let exact = start <= *local && *local < until;
            if exact {
                if fold == 0 {
                    return Some(transition);
                }
                if prev_exact.is_some() {
                    // The second half of the overlap.
                    return Some(transition);
                }
                prev_exact = Some(transition);
            } else if start > *local {
                if prev_exact.is_some() {
                    return prev_exact;
                }
                // In the gap.
                return if fold == 0 { prev } else { Some(transition) };
            }
            prev = Some(transition);
        }
        prev_exact.or(prev)
    }
}

/// Does the era's interval `[prev.until, era.until)` overlap the window,
/// at month granularity?
fn era_overlaps_interval(
    prev_era: Option<&ZoneEra>,
    era: &ZoneEra,
    start_ym: YearMonth,
    until_ym: YearMonth,
) -> bool {
    let starts_before_window_end = match prev_era {
        None => true,
        Some(prev) => compare_era_to_year_month(prev, until_ym.year, until_ym.month) < 0,
    };
    starts_before_window_end && compare_era_to_year_month(era, start_ym.year, start_ym.month) > 0
}

/// Compare an era's until bound against `(year, month, 1, 00:00)`,
/// ignoring its frame suffix.
fn compare_era_to_year_month(era: &ZoneEra, year: i16, month: u8) -> i8 {
    if era.until_year != year {
        return if era.until_year < year { -1 } else { 1 };
    }
    if era.until_month != month {
        return if era.until_month < month { -1 } else { 1 };
    }
    if era.until_day > 1 {
        return 1;
    }
    match era.until_seconds {
        s if s < 0 => -1,
        0 => 0,
        _ => 1,
    }
}

/// Clip an era to the window. The start bound comes from the previous
/// matched era's until (or `-INF` for the first), which is expressed in
/// the *previous* era's frame; the frame mismatch is resolved later by
/// the exact-start comparison in [`compare_transition_to_match`].
fn create_match(
    prev_era: Option<&'static ZoneEra>,
    era: &'static ZoneEra,
    start_ym: YearMonth,
    until_ym: YearMonth,
) -> MatchingEra {
    let mut start = match prev_era {
        None => DateTuple::new(MIN_YEAR, 1, 1, 0, TimeSuffix::Wall),
        Some(prev) => prev.until_date_tuple(),
    };
    let lower = DateTuple::new(start_ym.year, start_ym.month, 1, 0, TimeSuffix::Wall);
    if start < lower {
        start = lower;
    }

    let mut until = era.until_date_tuple();
    let upper = DateTuple::new(until_ym.year, until_ym.month, 1, 0, TimeSuffix::Wall);
    if until > upper {
        until = upper;
    }

    MatchingEra {
        start_date_time: start,
        until_date_time: until,
        era,
        prev_exit: None,
    }
}

/// The rule years overlapping `[start_year, end_year]`.
fn interior_years(
    from_year: i16,
    to_year: i16,
    start_year: i16,
    end_year: i16,
) -> impl Iterator<Item = i16> {
    (start_year..=end_year).filter(move |&year| from_year <= year && year <= to_year)
}

/// The most recent rule year wholly before `start_year`, or
/// `INVALID_YEAR`.
fn most_recent_prior_year(from_year: i16, to_year: i16, start_year: i16) -> i16 {
    if from_year < start_year {
        if to_year < start_year {
            to_year
        } else {
            start_year - 1
        }
    } else {
        INVALID_YEAR
    }
}

/// The rule's transition moment in the given year, in the rule's
/// declared frame. The `-INF` sentinel year maps to the sentinel origin
/// (used by anchor rules).
fn get_transition_time(year: i16, rule: &ZoneRule) -> DateTuple {
    if year == MIN_YEAR {
        return DateTuple::new(MIN_YEAR, 1, 1, 0, TimeSuffix::Wall);
    }
    let (year, month, day) = utils::calc_day_of_month(
        i32::from(year),
        rule.in_month,
        rule.on_day_of_week,
        rule.on_day_of_month,
    );
    DateTuple::new(year as i16, month, day, rule.at_seconds, rule.at_suffix)
}

fn create_transition_for_year(
    year: i16,
    rule: Option<&'static ZoneRule>,
    matching: &MatchingEra,
) -> Transition {
    let transition_time = match rule {
        Some(rule) => get_transition_time(year, rule),
        None => matching.start_date_time,
    };
    let mut transition = Transition::new(matching, transition_time);
    transition.rule = rule;
    transition
}

/// Latest-wins selection for the prior slot; ties keep the incumbent.
fn select_prior_transition(prior: Option<Transition>, transition: Transition) -> Transition {
    match prior {
        Some(prior) if transition.transition_time <= prior.transition_time => prior,
        _ => transition,
    }
}

/// Insertion into a buffer kept sorted by raw transition time, mirroring
/// the embedded incremental sort (the buffer holds at most a handful of
/// records).
fn add_transition_sorted(transitions: &mut Vec<Transition>, transition: Transition) {
    transitions.push(transition);
    let mut index = transitions.len() - 1;
    while index > 0 {
        if transitions[index].transition_time < transitions[index - 1].transition_time {
            transitions.swap(index, index - 1);
        }
        index -= 1;
    }
}

/// Coarse month-level classification, usable before transition times are
/// normalized. Bounds are widened by a month on each side, so this only
/// filters obvious non-candidates.
fn compare_transition_to_match_fuzzy(
    transition: &Transition,
    matching: &MatchingEra,
) -> MatchStatus {
    let tt = transition.transition_time;
    let transition_months = i32::from(tt.year) * 12 + i32::from(tt.month);

    let start = matching.start_date_time;
    let match_start = i32::from(start.year) * 12 + i32::from(start.month);
    if transition_months < match_start - 1 {
        return MatchStatus::Prior;
    }

    let until = matching.until_date_time;
    let match_until = i32::from(until.year) * 12 + i32::from(until.month);
    if match_until + 2 <= transition_months {
        return MatchStatus::FarFuture;
    }

    MatchStatus::WithinMatch
}

/// Exact classification of a normalized transition against its matching
/// era.
///
/// The start comparison expands the era's start bound with the offsets in
/// effect when leaving the previous matching era; a transition whose
/// `w`, `s`, or `u` time equals the corresponding frame of that start is
/// the era's start. The until comparison picks the frame the era bound is
/// declared in, which matches the frame family of the transition times.
fn compare_transition_to_match(transition: &Transition, matching: &MatchingEra) -> MatchStatus {
    let (offset_seconds, delta_seconds) = matching.exit_offsets();
    let (start_w, start_s, start_u) = matching
        .start_date_time
        .expand(offset_seconds, delta_seconds);

    if transition.transition_time_u == start_u
        || transition.transition_time_w == start_w
        || transition.transition_time_s == start_s
    {
        return MatchStatus::ExactMatch;
    }

    if transition.transition_time_u < start_u {
        return MatchStatus::Prior;
    }

    let until = matching.until_date_time;
    let transition_time = match until.suffix {
        TimeSuffix::Wall => transition.transition_time_w,
        TimeSuffix::Standard => transition.transition_time_s,
        TimeSuffix::Universal => transition.transition_time_u,
    };
    if until <= transition_time {
        return MatchStatus::FarFuture;
    }

    MatchStatus::WithinMatch
}

/// Pass 3: express each transition time in all three frames, using the
/// offsets of the transition *before* it. The first transition
/// bootstraps with its own offsets, effectively extending it backwards.
fn fix_transition_times(transitions: &mut [Transition]) {
    let Some(first) = transitions.first() else {
        return;
    };
    let mut prev_offsets = (first.offset_seconds(), first.delta_seconds());
    for transition in transitions.iter_mut() {
        let (w, s, u) = transition
            .transition_time
            .expand(prev_offsets.0, prev_offsets.1);
        transition.transition_time_w = w;
        transition.transition_time_s = s;
        transition.transition_time_u = u;
        prev_offsets = (transition.offset_seconds(), transition.delta_seconds());
    }
}

/// Pass 2c: classify each candidate against the matching era and keep
/// the active ones. The surviving prior (or exact) transition has its
/// transition time replaced by the era's start bound, which is the frame
/// in which that record is meant to be read.
fn select_active_transitions(
    matching: &MatchingEra,
    mut candidates: Vec<Transition>,
) -> Vec<Transition> {
    let mut prior_index: Option<usize> = None;
    for index in 0..candidates.len() {
        let status = compare_transition_to_match(&candidates[index], matching);
        candidates[index].match_status = status;
        match status {
            MatchStatus::ExactMatch => {
                // An exact start invalidates any prior candidate and
                // claims the slot itself.
                if let Some(previous) = prior_index {
                    candidates[previous].match_status = MatchStatus::FarPast;
                }
                prior_index = Some(index);
            }
            MatchStatus::Prior => match prior_index {
                Some(previous) => {
                    if candidates[index].transition_time_u
                        >= candidates[previous].transition_time_u
                    {
                        candidates[previous].match_status = MatchStatus::FarPast;
                        prior_index = Some(index);
                    } else {
                        candidates[index].match_status = MatchStatus::FarPast;
                    }
                }
                None => prior_index = Some(index),
            },
            _ => {}
        }
    }

    if let Some(index) = prior_index {
        candidates[index].transition_time = matching.start_date_time;
    }

    candidates.retain(|t| t.match_status.is_active());
    candidates
}

/// The transitions must stay sorted by raw transition time through every
/// pass; a violation means the zone record breaks the algorithm's
/// ordering assumptions.
fn check_transitions_sorted(policy_name: &str, transitions: &[Transition]) -> TzResult<()> {
    for pair in transitions.windows(2) {
        if pair[0].transition_time > pair[1].transition_time {
            log::error!("policy {policy_name}: transitions out of order");
            return Err(TzError::bad_zone_data().with_message("transitions out of order"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ZoneContext, ZonePolicy, MAX_TO_YEAR, MAX_UNTIL_YEAR};
    use alloc::vec::Vec;

    #[test]
    fn interior_year_selection() {
        fn collect(from: i16, to: i16, start: i16, end: i16) -> Vec<i16> {
            interior_years(from, to, start, end).collect()
        }
        assert_eq!(collect(1, 4, 2, 3), [2, 3]);
        assert_eq!(collect(0, 4, 2, 3), [2, 3]);
        assert_eq!(collect(4, 5, 2, 3), Vec::<i16>::new());
        assert_eq!(collect(0, 2, 5, 6), Vec::<i16>::new());
        assert_eq!(collect(0, 5, 5, 6), [5]);
        assert_eq!(collect(0, 2, 0, 2), [0, 1, 2]);
        assert_eq!(collect(0, 4, 2, 4), [2, 3, 4]);
    }

    #[test]
    fn prior_year_selection() {
        assert_eq!(most_recent_prior_year(1, 4, 5), 4);
        assert_eq!(most_recent_prior_year(1, 8, 5), 4);
        assert_eq!(most_recent_prior_year(5, 8, 5), INVALID_YEAR);
        assert_eq!(most_recent_prior_year(6, 8, 5), INVALID_YEAR);
    }

    static TEST_CONTEXT: ZoneContext = ZoneContext {
        tzdb_version: "test",
        start_year: 1900,
        until_year: 2100,
        base_epoch_year: 2000,
    };

    // until 2001-03-01T00:00w
    static ERA1: ZoneEra = ZoneEra {
        offset_seconds: 0,
        policy: None,
        delta_seconds: 0,
        format: "EST",
        until_year: 2001,
        until_month: 3,
        until_day: 1,
        until_seconds: 0,
        until_suffix: TimeSuffix::Wall,
    };

    // until 2002-03-01T00:00w
    static ERA2: ZoneEra = ZoneEra {
        offset_seconds: 0,
        policy: None,
        delta_seconds: 0,
        format: "EST",
        until_year: 2002,
        until_month: 3,
        until_day: 1,
        until_seconds: 0,
        until_suffix: TimeSuffix::Wall,
    };

    #[test]
    fn era_window_comparison() {
        assert_eq!(compare_era_to_year_month(&ERA1, 2001, 4), -1);
        assert_eq!(compare_era_to_year_month(&ERA1, 2001, 3), 0);
        assert_eq!(compare_era_to_year_month(&ERA1, 2001, 2), 1);
    }

    #[test]
    fn era_overlap_window() {
        // ERA1 is the interval [2001-03, 2002-03) when preceded by ERA1's
        // own until; probe the window edges.
        assert!(!era_overlaps_interval(
            Some(&ERA1),
            &ERA2,
            YearMonth::new(2000, 1),
            YearMonth::new(2001, 3),
        ));
        assert!(!era_overlaps_interval(
            Some(&ERA2),
            &ERA2,
            YearMonth::new(2002, 3),
            YearMonth::new(2002, 12),
        ));
        assert!(era_overlaps_interval(
            Some(&ERA1),
            &ERA2,
            YearMonth::new(2001, 3),
            YearMonth::new(2001, 4),
        ));
        assert!(era_overlaps_interval(
            None,
            &ERA1,
            YearMonth::new(2000, 12),
            YearMonth::new(2002, 2),
        ));
    }

    fn matching_era(start: DateTuple, until: DateTuple, era: &'static ZoneEra) -> MatchingEra {
        MatchingEra {
            start_date_time: start,
            until_date_time: until,
            era,
            prev_exit: None,
        }
    }

    #[test]
    fn fuzzy_classification() {
        let matching = matching_era(
            DateTuple::new(2000, 1, 1, 0, TimeSuffix::Wall),
            DateTuple::new(2001, 1, 1, 0, TimeSuffix::Wall),
            &ERA1,
        );
        let probe = |tt: DateTuple| {
            let t = Transition::new(&matching, tt);
            compare_transition_to_match_fuzzy(&t, &matching)
        };
        assert_eq!(
            probe(DateTuple::new(1999, 11, 1, 0, TimeSuffix::Wall)),
            MatchStatus::Prior
        );
        assert_eq!(
            probe(DateTuple::new(1999, 12, 1, 0, TimeSuffix::Wall)),
            MatchStatus::WithinMatch
        );
        assert_eq!(
            probe(DateTuple::new(2001, 2, 1, 0, TimeSuffix::Wall)),
            MatchStatus::WithinMatch
        );
        assert_eq!(
            probe(DateTuple::new(2001, 3, 1, 0, TimeSuffix::Wall)),
            MatchStatus::FarFuture
        );
    }

    #[test]
    fn exact_classification() {
        // The previous matching era left with (0, 0).
        let mut matching = matching_era(
            DateTuple::new(2001, 3, 1, 0, TimeSuffix::Wall),
            DateTuple::new(2001, 9, 1, 0, TimeSuffix::Wall),
            &ERA2,
        );
        matching.prev_exit = Some((0, 0));

        let probe = |tt: DateTuple| {
            let mut transitions = [Transition::new(&matching, tt)];
            fix_transition_times(&mut transitions);
            compare_transition_to_match(&transitions[0], &matching)
        };
        assert_eq!(
            probe(DateTuple::new(2000, 1, 2, 0, TimeSuffix::Wall)),
            MatchStatus::Prior
        );
        assert_eq!(
            probe(DateTuple::new(2001, 3, 1, 0, TimeSuffix::Wall)),
            MatchStatus::ExactMatch
        );
        assert_eq!(
            probe(DateTuple::new(2001, 4, 1, 0, TimeSuffix::Wall)),
            MatchStatus::WithinMatch
        );
        assert_eq!(
            probe(DateTuple::new(2001, 10, 1, 0, TimeSuffix::Wall)),
            MatchStatus::FarFuture
        );
    }

    static TERMINAL_RULES: [ZoneRule; 3] = [
        ZoneRule {
            from_year: MIN_YEAR,
            to_year: MIN_YEAR,
            in_month: 1,
            on_day_of_week: 0,
            on_day_of_month: 1,
            at_seconds: 0,
            at_suffix: TimeSuffix::Wall,
            delta_seconds: 0,
            letter: "",
        },
        ZoneRule {
            from_year: 1990,
            to_year: 2005,
            in_month: 4,
            on_day_of_week: 7,
            on_day_of_month: 1,
            at_seconds: 7200,
            at_suffix: TimeSuffix::Wall,
            delta_seconds: 3600,
            letter: "S",
        },
        ZoneRule {
            from_year: 2006,
            to_year: MAX_TO_YEAR,
            in_month: 10,
            on_day_of_week: 7,
            on_day_of_month: 0,
            at_seconds: 7200,
            at_suffix: TimeSuffix::Wall,
            delta_seconds: 0,
            letter: "",
        },
    ];

    static TERMINAL_POLICY: ZonePolicy = ZonePolicy {
        name: "Test",
        rules: &TERMINAL_RULES,
    };

    static TERMINAL_ERAS: [ZoneEra; 1] = [ZoneEra {
        offset_seconds: 3600,
        policy: Some(&TERMINAL_POLICY),
        delta_seconds: 0,
        format: "T%sT",
        until_year: MAX_UNTIL_YEAR,
        until_month: 1,
        until_day: 1,
        until_seconds: 0,
        until_suffix: TimeSuffix::Wall,
    }];

    static TERMINAL_ZONE: ZoneInfo = ZoneInfo {
        name: "Test/Terminal",
        target: None,
        eras: &TERMINAL_ERAS,
        context: &TEST_CONTEXT,
        transition_buf_size: 8,
    };

    #[test]
    fn terminal_year_detection() {
        let processor = ZoneProcessor::new(&TERMINAL_ZONE);
        // Before the finite rule ends, and before the infinite rule
        // starts, the pattern can still change.
        assert!(!processor.is_terminal_year(1989));
        assert!(!processor.is_terminal_year(2000));
        assert!(!processor.is_terminal_year(2005));
        // From 2006 only the open-ended rule matches.
        assert!(processor.is_terminal_year(2006));
        assert!(processor.is_terminal_year(2100));
        assert!(processor.is_terminal_year(9999));
    }
}
