//! One round of pairwise meetings.
//!
//! The listing is first partitioned into participants and non-participants.
//! Participants meet in consecutive non-overlapping pairs; each meeting
//! either improves one side (when the other holds `Cure`) or worsens both.
//! Non-participants carry through unchanged, after the updated participants.

use log::trace;

use crate::agent::Agent;
use crate::condition::Condition;

/// Splits a listing into `(participants, non_participants)`, preserving
/// relative order within each half. Participants are the agents whose
/// condition can change through contact: `Cure`, `Sick` and `Dying` holders.
#[must_use]
pub fn partition(listing: &[Agent]) -> (Vec<Agent>, Vec<Agent>) {
    listing
        .iter()
        .cloned()
        .partition(|agent| agent.category().participates())
}

/// Resolves a single meeting. A `Cure` holder is unchanged and improves its
/// partner; with no `Cure` in the pair, both sides worsen.
fn resolve_meeting(a: &Agent, b: &Agent) -> (Agent, Agent) {
    if a.category() == Condition::Cure || b.category() == Condition::Cure {
        let new_a = if a.category() == Condition::Cure {
            a.clone()
        } else {
            a.with_category(a.category().improve())
        };
        let new_b = if b.category() == Condition::Cure {
            b.clone()
        } else {
            b.with_category(b.category().improve())
        };
        (new_a, new_b)
    } else {
        (
            a.with_category(a.category().worsen()),
            b.with_category(b.category().worsen()),
        )
    }
}

/// Models the outcome of one round of meetings of pairs of agents.
///
/// The pairs are consecutive participants: indices 0&1, 2&3, and so on. With
/// an odd participant count the trailing agent carries through unchanged.
/// The output lists the updated participants in pair-processing order,
/// followed by the non-participants in their original relative order, so the
/// listing may be reordered relative to the input. The input is not
/// modified; every output record is a fresh value.
#[must_use]
pub fn meetup(listing: &[Agent]) -> Vec<Agent> {
    trace!("Running a meetup round over {} agents", listing.len());
    let (participants, non_participants) = partition(listing);

    let mut updated = Vec::with_capacity(listing.len());
    let mut pairs = participants.chunks_exact(2);
    for pair in pairs.by_ref() {
        let (new_a, new_b) = resolve_meeting(&pair[0], &pair[1]);
        updated.push(new_a);
        updated.push(new_b);
    }
    if let [unpaired] = pairs.remainder() {
        trace!("Participant {} left unpaired this round", unpaired.name());
        updated.push(unpaired.clone());
    }

    updated.extend(non_participants);
    updated
}

/// Applies [`meetup`] the given number of times, feeding each round's output
/// into the next. Zero rounds returns the listing unchanged (cloned).
#[must_use]
pub fn meetup_rounds(listing: &[Agent], rounds: usize) -> Vec<Agent> {
    let mut current = listing.to_vec();
    for _ in 0..rounds {
        current = meetup(&current);
    }
    current
}
