//! Guess evaluation and scoring.

use scrawl_protocol::{ChatEntry, ConnectionId, Recipient, ServerEvent};

use crate::Room;

/// The outcome of evaluating one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The guess matched the word; a new round should follow after the
    /// reveal pause.
    Correct,
    /// The guess missed and was recorded as chat.
    Incorrect,
}

/// Compares a guess against the room's current word.
///
/// Matching is exact string equality after trimming surrounding
/// whitespace and lower-casing both sides — no partial credit, no fuzzy
/// matching. A correct guess awards the guesser exactly one point
/// (seeding a zero entry first if the guesser has none — a join can race
/// the guess) and reveals the word to the whole room. An incorrect guess
/// becomes a chat line.
///
/// The current drawer is deliberately not excluded: the word's own
/// author "guessing" it counts, for compatibility with existing clients.
pub fn evaluate(
    room: &mut Room,
    guesser: ConnectionId,
    player_name: &str,
    message: &str,
) -> (Verdict, Vec<(Recipient, ServerEvent)>) {
    if normalized(message) == normalized(&room.word) {
        let score = room.scores.entry(guesser).or_insert(0);
        *score += 1;

        tracing::info!(
            room = %room.code,
            player = player_name,
            word = %room.word,
            "correct guess"
        );

        let events = vec![(
            Recipient::All,
            ServerEvent::CorrectGuess {
                player_name: player_name.to_string(),
                word: room.word.clone(),
                scores: room.scores.clone(),
            },
        )];
        (Verdict::Correct, events)
    } else {
        let entry = ChatEntry {
            player_name: player_name.to_string(),
            message: message.to_string(),
        };
        room.chat.push(entry.clone());
        (
            Verdict::Incorrect,
            vec![(Recipient::All, ServerEvent::ChatMessage(entry))],
        )
    }
}

fn normalized(text: &str) -> String {
    text.trim().to_lowercase()
}
