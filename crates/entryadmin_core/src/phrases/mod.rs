//! Fake phrase generator used to bulk-populate the store.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const OPENERS: &[&str] = &[
    "¿Cuál es",
    "¿Por qué",
    "¿Cómo",
    "¿Dónde",
    "¿Cuándo",
    "¿Quién",
    "¿Qué",
];

const SUBJECTS: &[&str] = &[
    "el gato",
    "la luna",
    "mi vecino",
    "el tren",
    "la biblioteca",
    "un pingüino",
    "el profesor",
    "la tormenta",
    "el café",
    "la ciudad",
    "un dragón",
    "el río",
    "la montaña",
    "el ordenador",
    "la abuela",
];

const VERBS: &[&str] = &[
    "canta",
    "duerme",
    "viaja",
    "cocina",
    "pinta",
    "baila",
    "escribe",
    "corre",
    "sueña",
    "programa",
    "navega",
    "recuerda",
];

const COMPLEMENTS: &[&str] = &[
    "por la mañana",
    "sin hacer ruido",
    "en el parque",
    "bajo la lluvia",
    "con mucha prisa",
    "cada domingo",
    "junto al mar",
    "antes de cenar",
    "en silencio",
    "a medianoche",
];

/// Random phrase source; seedable for reproducible runs.
#[derive(Debug)]
pub struct PhraseGenerator {
    rng: StdRng,
}

impl PhraseGenerator {
    /// Generator seeded from `seed`, or from entropy when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Generate one phrase.
    pub fn phrase(&mut self) -> String {
        let subject = pick(&mut self.rng, SUBJECTS);
        let verb = pick(&mut self.rng, VERBS);
        let complement = pick(&mut self.rng, COMPLEMENTS);
        if self.rng.gen_bool(0.5) {
            let opener = pick(&mut self.rng, OPENERS);
            format!("{} {} {} {}?", opener, subject, verb, complement)
        } else {
            let mut sentence = format!("{} {} {}.", subject, verb, complement);
            capitalize_first(&mut sentence);
            sentence
        }
    }

    /// Generate `count` phrases.
    pub fn phrases(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.phrase()).collect()
    }
}

fn pick<'a>(rng: &mut StdRng, words: &[&'a str]) -> &'a str {
    words.choose(rng).copied().unwrap_or("")
}

fn capitalize_first(value: &mut String) {
    if let Some(first) = value.chars().next() {
        let upper: String = first.to_uppercase().collect();
        value.replace_range(..first.len_utf8(), &upper);
    }
}
