//! Room code generation.

use rand::Rng;

use scrawl_protocol::RoomCode;

use crate::RoomStore;

/// Code length for freshly generated rooms.
const CODE_LEN: usize = 5;

/// Upper-case alphanumerics only, so codes survive being read aloud and
/// typed back without case confusion.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Attempts at one length before widening the code by a character.
const MAX_ATTEMPTS_PER_LEN: usize = 32;

/// Generates a code not currently present in the store.
///
/// Collisions at five characters are vanishingly rare until the store
/// holds millions of rooms, but the retry loop is still bounded per
/// length: after [`MAX_ATTEMPTS_PER_LEN`] collisions the length grows by
/// one, so termination does not depend on luck.
pub fn generate(store: &RoomStore) -> RoomCode {
    let mut rng = rand::rng();
    let mut len = CODE_LEN;
    loop {
        for _ in 0..MAX_ATTEMPTS_PER_LEN {
            let code = random_code(&mut rng, len);
            if !store.contains(&code) {
                return code;
            }
        }
        len += 1;
    }
}

fn random_code(rng: &mut impl Rng, len: usize) -> RoomCode {
    let raw: String = (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    RoomCode::new(raw)
}
