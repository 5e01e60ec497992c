use rustc_hash::FxHashMap;

use crate::agent::Agent;
use crate::condition::Condition;

/// Counts how many agents in the listing hold each condition. Conditions
/// held by no agent are absent from the map.
#[must_use]
pub fn tabulate_conditions(listing: &[Agent]) -> FxHashMap<Condition, usize> {
    let mut counts = FxHashMap::default();
    for agent in listing {
        *counts.entry(agent.category()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meetup::meetup;

    #[test]
    fn test_tabulate_counts() {
        let listing = vec![
            Agent::new("a", Condition::Sick),
            Agent::new("b", Condition::Sick),
            Agent::new("c", Condition::Dead),
        ];
        let counts = tabulate_conditions(&listing);
        assert_eq!(counts.get(&Condition::Sick), Some(&2));
        assert_eq!(counts.get(&Condition::Dead), Some(&1));
        assert_eq!(counts.get(&Condition::Cure), None);
        assert_eq!(counts.values().sum::<usize>(), listing.len());
    }

    #[test]
    fn test_tabulate_empty_listing() {
        assert!(tabulate_conditions(&[]).is_empty());
    }

    #[test]
    fn test_counts_sum_is_preserved_by_meetup() {
        let listing = vec![
            Agent::new("a", Condition::Dying),
            Agent::new("b", Condition::Healthy),
            Agent::new("c", Condition::Sick),
            Agent::new("d", Condition::Cure),
        ];
        let updated = meetup(&listing);
        let counts = tabulate_conditions(&updated);
        assert_eq!(counts.values().sum::<usize>(), listing.len());
    }
}
