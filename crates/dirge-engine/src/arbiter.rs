//! Single-writer authority arbitration.
//!
//! Every connected process observes every host event, so mutation must be
//! gated to exactly one of them or counters double-increment and death
//! toggles double-fire. The designated authority is the active privileged
//! user with the deterministically lowest stable id. The check is
//! recomputed on every mutating event — never cached — because disconnects
//! and reconnects change the eligible set between events.

use dirge_core::{ConnectedUser, UserId};

/// Returns true iff `self_id` is the single designated authority among the
/// currently-connected users. Read-only inspection need not be gated; every
/// mutating handler must check this before its first write.
pub fn is_sole_authority(self_id: UserId, users: &[ConnectedUser]) -> bool {
    users
        .iter()
        .filter(|u| u.privileged && u.active)
        .map(|u| u.id)
        .min()
        .is_some_and(|lowest| lowest == self_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn uid(n: u128) -> UserId {
        UserId(Uuid::from_u128(n))
    }

    #[test]
    fn sole_gamemaster_is_authority() {
        let gm = uid(5);
        let users = vec![ConnectedUser::gamemaster(gm), ConnectedUser::player(uid(1))];
        assert!(is_sole_authority(gm, &users));
    }

    #[test]
    fn lowest_of_two_gamemasters_wins() {
        let low = uid(1);
        let high = uid(2);
        let users = vec![
            ConnectedUser::gamemaster(high),
            ConnectedUser::gamemaster(low),
        ];
        assert!(is_sole_authority(low, &users));
        assert!(!is_sole_authority(high, &users));
    }

    #[test]
    fn exactly_one_authority_among_eligible() {
        let users: Vec<ConnectedUser> = (1..=4).map(|n| ConnectedUser::gamemaster(uid(n))).collect();
        let claims = users
            .iter()
            .filter(|u| is_sole_authority(u.id, &users))
            .count();
        assert_eq!(claims, 1);
    }

    #[test]
    fn inactive_gamemaster_is_skipped() {
        let low = uid(1);
        let high = uid(2);
        let mut disconnected = ConnectedUser::gamemaster(low);
        disconnected.active = false;
        let users = vec![disconnected, ConnectedUser::gamemaster(high)];
        assert!(!is_sole_authority(low, &users));
        assert!(is_sole_authority(high, &users));
    }

    #[test]
    fn player_is_never_authority() {
        let player = uid(1);
        let users = vec![
            ConnectedUser::player(player),
            ConnectedUser::gamemaster(uid(9)),
        ];
        assert!(!is_sole_authority(player, &users));
    }

    #[test]
    fn empty_roster_has_no_authority() {
        assert!(!is_sole_authority(uid(1), &[]));
    }
}
