use lazy_static::lazy_static;
use rand::Rng;

/// Length of every generated event key.
pub const KEY_LENGTH: usize = 10;

/// Characters that read ambiguously on a venue screen.
const CONFUSABLE: [char; 4] = ['O', 'I', '0', '1'];

lazy_static! {
    /// Uppercase letters and digits minus the confusable set.
    static ref KEY_ALPHABET: Vec<char> = ('A'..='Z')
        .chain('0'..='9')
        .filter(|c| !CONFUSABLE.contains(c))
        .collect();
}

/// Sample a key from `rng`: `KEY_LENGTH` independent uniform draws, with
/// replacement. Keys are not checked for collisions against the store.
pub fn generate_key_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..KEY_LENGTH)
        .map(|_| KEY_ALPHABET[rng.random_range(0..KEY_ALPHABET.len())])
        .collect()
}

/// Sample a key from the thread-local generator.
pub fn generate_key() -> String {
    generate_key_with(&mut rand::rng())
}
