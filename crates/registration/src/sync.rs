//! Copy-forward of household-context fields between players.
//!
//! Guardians registering siblings usually share city, school, emergency
//! contact and so on. Two mechanisms reduce the re-typing: new players
//! are seeded from the first player's shared fields, and later edits to
//! the first player flow into the other players' fields as long as those
//! are still empty. A value the guardian already typed for another
//! player is never overwritten.

use tracing::debug;

use crate::draft::PlayerDraft;
use crate::field::PlayerField;

/// Build a new player pre-filled with `source`'s shared fields.
/// Identity fields (name, birth date, photo) stay blank.
pub fn seed_from(source: &PlayerDraft) -> PlayerDraft {
    let mut seeded = PlayerDraft::default();
    for field in PlayerField::SHARED {
        seeded.set_field(field, source.field(field));
    }
    seeded
}

/// Propagate an edit on `edited_index` to the other players.
///
/// Only edits to the first player's shared fields propagate, and only
/// into fields that are currently empty. Applying the same edit twice
/// leaves the list unchanged.
pub fn propagate_shared_field(
    players: &mut [PlayerDraft],
    edited_index: usize,
    field: PlayerField,
    value: &str,
) {
    if edited_index != 0 || field.is_identity() || players.len() < 2 {
        return;
    }
    for (index, player) in players.iter_mut().enumerate().skip(1) {
        if player.field(field).is_empty() {
            debug!(target: "registration", player = index, field = field.key(), "copy-forward");
            player.set_field(field, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn squad(n: usize) -> Vec<PlayerDraft> {
        (0..n).map(|_| PlayerDraft::default()).collect()
    }

    #[test]
    fn seeding_copies_shared_fields_only() {
        let mut source = PlayerDraft::default();
        source.name = "Asha".into();
        source.date_of_birth = "2012-04-01".into();
        source.photo_url = "https://example.com/a.jpg".into();
        source.school = "St. Mary's".into();
        source.emergency_contact_phone = "+1 868 555 0101".into();

        let seeded = seed_from(&source);
        assert_eq!(seeded.name, "");
        assert_eq!(seeded.date_of_birth, "");
        assert_eq!(seeded.photo_url, "");
        assert_eq!(seeded.school, "St. Mary's");
        assert_eq!(seeded.emergency_contact_phone, "+1 868 555 0101");
    }

    #[test]
    fn propagation_fills_empty_fields_and_keeps_edited_ones() {
        let mut players = squad(3);
        players[2].city = "Chaguanas".into();
        players[0].city = "Arima".into();

        propagate_shared_field(&mut players, 0, PlayerField::City, "Arima");
        assert_eq!(players[1].city, "Arima");
        assert_eq!(players[2].city, "Chaguanas");
    }

    #[test]
    fn propagation_is_idempotent() {
        let mut players = squad(2);
        players[0].school = "Fatima".into();
        propagate_shared_field(&mut players, 0, PlayerField::School, "Fatima");
        let snapshot = players.clone();
        propagate_shared_field(&mut players, 0, PlayerField::School, "Fatima");
        assert_eq!(players, snapshot);
    }

    #[test]
    fn edits_to_later_players_do_not_propagate() {
        let mut players = squad(3);
        players[1].city = "San Fernando".into();
        propagate_shared_field(&mut players, 1, PlayerField::City, "San Fernando");
        assert_eq!(players[0].city, "");
        assert_eq!(players[2].city, "");
    }

    #[test]
    fn identity_fields_never_propagate() {
        let mut players = squad(2);
        players[0].name = "Asha".into();
        propagate_shared_field(&mut players, 0, PlayerField::Name, "Asha");
        assert_eq!(players[1].name, "");
    }
}
