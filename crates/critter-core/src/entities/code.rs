//! Random code generation shared by games and email verification

use rand::Rng;

/// Length of game pairing codes
pub const GAME_CODE_LENGTH: usize = 6;

/// Length of email verification codes
pub const VERIFICATION_CODE_LENGTH: usize = 8;

/// Generate a random uppercase alphanumeric code.
///
/// Uniform choice per character over `[A-Z0-9]`. Not cryptographically
/// secure, which is acceptable for pairing and verification codes in
/// this domain.
pub fn generate_code(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
