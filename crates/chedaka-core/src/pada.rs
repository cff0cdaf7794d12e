// Grammatical analyses.
//
// A `Pada` is one reading of an inflected Sanskrit word: a closed variant
// over the three part-of-speech families, each carrying exactly the fields
// that are meaningful for that family. Invalid partial analyses cannot be
// constructed; every field of a variant is required at construction time.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category enums
// ---------------------------------------------------------------------------

/// The three part-of-speech families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    /// Invariant particle.
    Avyaya,
    /// Nominal (declined form).
    Subanta,
    /// Finite verb.
    Tinanta,
}

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Purusha {
    /// Third person.
    Prathama,
    /// Second person.
    Madhyama,
    /// First person.
    Uttama,
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vacana {
    Eka,
    Dvi,
    Bahu,
}

/// Grammatical gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Linga {
    Pum,
    Stri,
    Napumsaka,
}

/// Nominal case, plus the vocative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vibhakti {
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
    V7,
    Sambodhana,
}

/// Verb tense-mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lakara {
    Lat,
    Lit,
    Lut,
    Lrt,
    Let,
    Lot,
    Lan,
    LinVidhi,
    LinAshih,
    Lun,
    LunNoAgama,
    Lrn,
}

/// Verb voice as it surfaces in the ending set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PadaPrayoga {
    Parasmaipada,
    AtmanepadaKartari,
    AtmanepadaNotKartari,
}

// ---------------------------------------------------------------------------
// Stems
// ---------------------------------------------------------------------------

/// A verb root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dhatu(pub String);

impl Dhatu {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

/// A nominal stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pratipadika(pub String);

impl Pratipadika {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Per-family payloads
// ---------------------------------------------------------------------------

/// A finite verb reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tinanta {
    pub dhatu: Dhatu,
    pub purusha: Purusha,
    pub vacana: Vacana,
    pub lakara: Lakara,
    pub pada_prayoga: PadaPrayoga,
}

/// A nominal reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subanta {
    pub pratipadika: Pratipadika,
    pub linga: Linga,
    pub vibhakti: Vibhakti,
    pub vacana: Vacana,
    /// True when this form is the prior member of a compound.
    pub is_purvapada: bool,
}

/// An invariant-particle reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Avyaya {
    pub pratipadika: Pratipadika,
}

// ---------------------------------------------------------------------------
// Pada
// ---------------------------------------------------------------------------

/// One grammatical reading of a surface word-form.
///
/// Two readings are equal iff their variant and every field match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pada {
    Tinanta(Tinanta),
    Subanta(Subanta),
    Avyaya(Avyaya),
}

impl Pada {
    /// The part-of-speech family of this reading.
    pub fn part_of_speech(&self) -> PartOfSpeech {
        match self {
            Pada::Tinanta(_) => PartOfSpeech::Tinanta,
            Pada::Subanta(_) => PartOfSpeech::Subanta,
            Pada::Avyaya(_) => PartOfSpeech::Avyaya,
        }
    }

    /// The lemma of this reading: the dhatu for verbs, the pratipadika
    /// otherwise.
    pub fn lemma(&self) -> &str {
        match self {
            Pada::Tinanta(t) => t.dhatu.text(),
            Pada::Subanta(s) => s.pratipadika.text(),
            Pada::Avyaya(a) => a.pratipadika.text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gam_lat() -> Pada {
        Pada::Tinanta(Tinanta {
            dhatu: Dhatu::new("gam"),
            purusha: Purusha::Prathama,
            vacana: Vacana::Eka,
            lakara: Lakara::Lat,
            pada_prayoga: PadaPrayoga::Parasmaipada,
        })
    }

    #[test]
    fn tinanta_lemma_is_dhatu() {
        assert_eq!(gam_lat().lemma(), "gam");
        assert_eq!(gam_lat().part_of_speech(), PartOfSpeech::Tinanta);
    }

    #[test]
    fn subanta_lemma_is_pratipadika() {
        let p = Pada::Subanta(Subanta {
            pratipadika: Pratipadika::new("arjuna"),
            linga: Linga::Pum,
            vibhakti: Vibhakti::V1,
            vacana: Vacana::Eka,
            is_purvapada: false,
        });
        assert_eq!(p.lemma(), "arjuna");
        assert_eq!(p.part_of_speech(), PartOfSpeech::Subanta);
    }

    #[test]
    fn avyaya_lemma_is_pratipadika() {
        let p = Pada::Avyaya(Avyaya {
            pratipadika: Pratipadika::new("ca"),
        });
        assert_eq!(p.lemma(), "ca");
        assert_eq!(p.part_of_speech(), PartOfSpeech::Avyaya);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(gam_lat(), gam_lat());

        let mut other = gam_lat();
        if let Pada::Tinanta(t) = &mut other {
            t.vacana = Vacana::Bahu;
        }
        assert_ne!(gam_lat(), other);
    }
}
