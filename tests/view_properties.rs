//! Property tests for view invariants.
//!
//! Views are pure functions of the store, so counts they report must
//! always add up to the records they were built from.

use chrono::NaiveDate;
use proptest::prelude::*;

use siama_toolbox::domain::analysis::{ConflictEntry, RelationshipRating, StakeholderGroup};
use siama_toolbox::domain::foundation::{ActorId, Role, Score, SessionId};
use siama_toolbox::domain::identification::Actor;
use siama_toolbox::domain::market::{Complaint, ComplaintCategory, MarketRecord, Severity};
use siama_toolbox::domain::session::SessionStore;
use siama_toolbox::domain::views::{
    ComplaintSummary, ConflictMatrix, ConflictStrategy, QuadrantAxis, QuadrantView,
    RoleDistribution,
};

// =============================================================================
// Strategies
// =============================================================================

fn role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::all().to_vec())
}

fn score() -> impl Strategy<Value = Score> {
    (1u8..=10).prop_map(|v| Score::try_new(v).unwrap())
}

fn category() -> impl Strategy<Value = ComplaintCategory> {
    prop::sample::select(ComplaintCategory::all().to_vec())
}

fn severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::all().to_vec())
}

/// Store with the given actors, one rating and one conflict per score tuple.
fn store_with(
    roles: &[Role],
    scores: &[(Score, Score, Score, Score)],
) -> (SessionStore, Vec<ActorId>) {
    let mut store = SessionStore::new(SessionId::new());
    let ids: Vec<ActorId> = roles
        .iter()
        .enumerate()
        .map(|(i, role)| {
            store
                .add_actor(Actor::new(format!("Actor {}", i), *role).unwrap())
                .unwrap()
        })
        .collect();

    for (i, (power, interest, legitimacy, urgency)) in scores.iter().enumerate() {
        let id = ids[i % ids.len()];
        store
            .record_rating(RelationshipRating::new(
                id,
                *power,
                *interest,
                *legitimacy,
                *urgency,
            ))
            .unwrap();
        store
            .record_conflict(ConflictEntry::new(id, *power, *interest, ""))
            .unwrap();
    }
    (store, ids)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn role_distribution_counts_only_accepted_actors(
        additions in prop::collection::vec(
            (role(), prop::option::of("[A-Za-z][A-Za-z ]{0,7}")),
            0..30,
        ),
    ) {
        let mut store = SessionStore::new(SessionId::new());
        let mut accepted: Vec<Role> = Vec::new();
        for (role, name) in &additions {
            // A missing name stands for a blank form submission.
            let name = name.clone().unwrap_or_else(|| "   ".to_string());
            let added = Actor::new(name, *role)
                .ok()
                .and_then(|actor| store.add_actor(actor).ok());
            if added.is_some() {
                accepted.push(*role);
            }
        }
        let distribution = RoleDistribution::from_store(&store);

        prop_assert_eq!(distribution.counts.len(), 5);
        prop_assert_eq!(distribution.total, accepted.len());
        prop_assert_eq!(distribution.total, store.identification().actor_count());
        let blanks = additions.iter().filter(|(_, name)| name.is_none()).count();
        prop_assert_eq!(accepted.len(), additions.len() - blanks);
        let summed: usize = distribution.counts.iter().map(|c| c.count).sum();
        prop_assert_eq!(summed, accepted.len());
        for r in Role::all() {
            let expected = accepted.iter().filter(|x| *x == r).count();
            prop_assert_eq!(distribution.count(*r), expected);
        }
    }

    #[test]
    fn quadrant_counts_cover_every_rating(
        roles in prop::collection::vec(role(), 1..6),
        scores in prop::collection::vec((score(), score(), score(), score()), 0..25),
    ) {
        let (store, _) = store_with(&roles, &scores);

        for axis in QuadrantAxis::all() {
            let view = QuadrantView::from_store(&store, *axis);
            let summed: usize = view.counts.iter().map(|c| c.count).sum();
            prop_assert_eq!(summed, scores.len());
            prop_assert_eq!(view.points.len(), scores.len());
            for point in &view.points {
                let high_power = point.x > 5;
                let high_other = point.y > 5;
                let expected = match (high_power, high_other) {
                    (true, true) => StakeholderGroup::KeyPlayers,
                    (true, false) => StakeholderGroup::KeepSatisfied,
                    (false, true) => StakeholderGroup::KeepInformed,
                    (false, false) => StakeholderGroup::Monitor,
                };
                prop_assert_eq!(point.group, expected);
            }
        }
    }

    #[test]
    fn key_stakeholders_match_manage_closely_quadrant(
        roles in prop::collection::vec(role(), 1..6),
        scores in prop::collection::vec((score(), score(), score(), score()), 0..25),
    ) {
        let (store, _) = store_with(&roles, &scores);
        let view = QuadrantView::from_store(&store, QuadrantAxis::Interest);

        prop_assert_eq!(
            store.analysis().key_stakeholder_count(),
            view.count(StakeholderGroup::KeyPlayers)
        );
    }

    #[test]
    fn conflict_strategy_counts_cover_every_entry(
        roles in prop::collection::vec(role(), 1..6),
        scores in prop::collection::vec((score(), score(), score(), score()), 0..25),
    ) {
        let (store, _) = store_with(&roles, &scores);
        let matrix = ConflictMatrix::from_store(&store);

        let summed: usize = ConflictStrategy::all()
            .iter()
            .map(|s| matrix.count(*s))
            .sum();
        prop_assert_eq!(summed, scores.len());
    }

    #[test]
    fn complaint_breakdowns_sum_to_total(
        complaints in prop::collection::vec((category(), severity()), 0..40),
    ) {
        let mut store = SessionStore::new(SessionId::new());
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        for (category, severity) in &complaints {
            store.set_market_record(MarketRecord::Complaint(Complaint::new(
                date, *category, *severity,
            )));
        }

        let summary = ComplaintSummary::from_store(&store);
        prop_assert_eq!(summary.total, complaints.len());
        prop_assert_eq!(summary.by_severity.len(), 4);
        let by_category: usize = summary.by_category.iter().map(|c| c.count).sum();
        let by_severity: usize = summary.by_severity.iter().map(|c| c.count).sum();
        prop_assert_eq!(by_category, complaints.len());
        prop_assert_eq!(by_severity, complaints.len());
        prop_assert!(summary.by_category.iter().all(|c| c.count > 0));
    }
}
