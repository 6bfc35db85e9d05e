//! Round transitions: game start and drawer rotation.
//!
//! Both entry points reset the per-round transient state (chat, word,
//! drawer) and return the same pair of emissions: a `game_started`
//! broadcast for the whole room — with the word withheld — and a
//! `your_word` delivery for the drawer alone. Clients treat
//! `game_started` as the signal to clear their canvas.

use rand::Rng;

use scrawl_protocol::{Recipient, ServerEvent};

use crate::{Room, RoomError, words};

/// Starts the game: zeroes scores for the current roster, picks a
/// uniformly random starting drawer, and opens the first round.
///
/// This is the one place drawer selection is random rather than
/// rotational. The caller is responsible for the creator-only and
/// only-once guards; this function only refuses an empty roster.
pub fn begin(
    room: &mut Room,
) -> Result<Vec<(Recipient, ServerEvent)>, RoomError> {
    if room.players.is_empty() {
        return Err(RoomError::NoPlayers(room.code.clone()));
    }
    room.started = true;
    room.current_drawer_index =
        rand::rng().random_range(0..room.players.len());
    room.scores = room.players.iter().map(|p| (p.id, 0)).collect();
    Ok(open_round(room))
}

/// Advances to the next round by rotating the drawer:
/// `index = (index + 1) % players.len()`.
///
/// Called after every correct guess (via the deferred reveal pause). The
/// roster may have shrunk since the guess — the modulo keeps the index in
/// range, and an emptied roster is refused rather than crashing.
pub fn advance(
    room: &mut Room,
) -> Result<Vec<(Recipient, ServerEvent)>, RoomError> {
    if room.players.is_empty() {
        return Err(RoomError::NoPlayers(room.code.clone()));
    }
    room.current_drawer_index =
        (room.current_drawer_index + 1) % room.players.len();
    Ok(open_round(room))
}

/// Common round setup: assign drawer and word, clear the chat, emit.
fn open_round(room: &mut Room) -> Vec<(Recipient, ServerEvent)> {
    let drawer = room.players[room.current_drawer_index].clone();
    let word = words::random_word();
    room.drawer_id = drawer.id;
    room.word = word.to_string();
    room.chat.clear();

    tracing::info!(
        room = %room.code,
        drawer = %drawer.name,
        word,
        "round started"
    );

    vec![
        (
            Recipient::All,
            ServerEvent::GameStarted {
                drawer_id: drawer.id,
                players: room.roster(),
                scores: room.scores.clone(),
            },
        ),
        (
            Recipient::Connection(drawer.id),
            ServerEvent::YourWord {
                word: word.to_string(),
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrawl_protocol::{ChatEntry, ConnectionId, RoomCode};

    fn conn(id: u64) -> ConnectionId {
        ConnectionId::new(id)
    }

    fn lobby_of_three() -> Room {
        let mut room = Room::new(RoomCode::new("AB12C"), conn(1), "ada");
        room.add_player(conn(2), "grace");
        room.add_player(conn(3), "linus");
        room
    }

    #[test]
    fn test_begin_zeroes_scores_and_marks_started() {
        let mut room = lobby_of_three();
        room.scores.insert(conn(1), 9);

        let events = begin(&mut room).unwrap();

        assert!(room.started);
        assert!(room.scores.values().all(|s| *s == 0));
        assert_eq!(room.scores.len(), 3);
        assert!(room.current_drawer_index < room.players.len());
        assert_eq!(
            room.drawer_id,
            room.players[room.current_drawer_index].id
        );
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_begin_sends_word_only_to_drawer() {
        let mut room = lobby_of_three();
        let events = begin(&mut room).unwrap();

        let (recipient, event) = &events[1];
        assert_eq!(*recipient, Recipient::Connection(room.drawer_id));
        let ServerEvent::YourWord { word } = event else {
            panic!("expected YourWord, got {event:?}");
        };
        assert_eq!(*word, room.word);

        // The broadcast carries no word field at all.
        assert!(matches!(
            events[0],
            (Recipient::All, ServerEvent::GameStarted { .. })
        ));
    }

    #[test]
    fn test_advance_rotates_in_join_order() {
        let mut room = lobby_of_three();
        begin(&mut room).unwrap();

        for _ in 0..7 {
            let prev = room.current_drawer_index;
            advance(&mut room).unwrap();
            assert_eq!(
                room.current_drawer_index,
                (prev + 1) % room.players.len()
            );
            assert_eq!(
                room.drawer_id,
                room.players[room.current_drawer_index].id
            );
        }
    }

    #[test]
    fn test_rounds_clear_chat() {
        let mut room = lobby_of_three();
        begin(&mut room).unwrap();
        room.chat.push(ChatEntry {
            player_name: "grace".into(),
            message: "is it a dog?".into(),
        });

        advance(&mut room).unwrap();
        assert!(room.chat.is_empty());
    }

    #[test]
    fn test_empty_roster_is_refused() {
        let mut room = Room::new(RoomCode::new("AB12C"), conn(1), "ada");
        room.remove_player(conn(1));

        assert!(matches!(
            begin(&mut room),
            Err(RoomError::NoPlayers(_))
        ));
        assert!(matches!(
            advance(&mut room),
            Err(RoomError::NoPlayers(_))
        ));
    }

    #[test]
    fn test_advance_survives_roster_shrink() {
        let mut room = lobby_of_three();
        begin(&mut room).unwrap();
        room.current_drawer_index = 2;

        // Two players leave; the stale index must wrap, not panic.
        room.remove_player(conn(2));
        room.remove_player(conn(3));
        advance(&mut room).unwrap();
        assert_eq!(room.current_drawer_index, 0);
        assert_eq!(room.drawer_id, conn(1));
    }
}
