//! Shared vocabulary types for the Chedaka Sanskrit toolkit.
//!
//! # Architecture
//!
//! - [`pada`] -- Grammatical analyses (*pada*s) and their category enums
//! - [`token`] -- The segmenter's output token type
//! - [`sounds`] -- SLP1 sound classification helpers

pub mod pada;
pub mod sounds;
pub mod token;

pub use pada::{
    Avyaya, Dhatu, Lakara, Linga, Pada, PadaPrayoga, PartOfSpeech, Pratipadika, Purusha, Subanta,
    Tinanta, Vacana, Vibhakti,
};
pub use token::Token;
