// SLP1 sound classification.
//
// All engine text is SLP1-encoded: one ASCII byte per sound, with capital
// letters used for long vowels and retroflex/aspirate consonants.

/// SLP1 vowels.
const VOWELS: &str = "aAiIuUfFxXeEoO";

/// SLP1 consonants, including the sibilants and `h`.
const CONSONANTS: &str = "kKgGNcCjJYwWqQRtTdDnpPbBmyrlvSzsh";

/// Sounds that may legally end a Sanskrit word before sandhi is applied.
///
/// This is deliberately permissive: it includes `s` and `r`, which surface
/// as visarga in final position but are the forms stored in the lexicon.
const VALID_FINALS: &str = "aAiIuUfFxXeEoOHMkNwtpnmrsl";

/// Returns true if `c` is an SLP1 vowel.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Returns true if `c` is an SLP1 consonant.
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(c)
}

/// Returns true if `c` is any SLP1 sound (vowel, consonant, anusvara,
/// or visarga).
pub fn is_sound(c: char) -> bool {
    is_vowel(c) || is_consonant(c) || c == 'M' || c == 'H'
}

/// Returns true if a word-form ending in `c` is phonotactically plausible.
pub fn is_valid_final(c: char) -> bool {
    VALID_FINALS.contains(c)
}

/// Returns true if every character of `text` is an SLP1 sound.
pub fn is_sanskrit(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_sound)
}
