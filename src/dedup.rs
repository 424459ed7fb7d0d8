/*! Same-word deduplication

Taggers sometimes give one surface word several lemmas, some of them
invented by gluing a verb ending onto the word (`bella` -> `bellar`).
Entries sharing a word are merged into the best scored one.
!*/
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::vocabulary::VocabEntry;

lazy_static! {
    static ref INFINITIVE_LIKE: Regex =
        Regex::new(r"^.{2,}(ir|ar|er|ír|ér)$").expect("infinitive regex is valid");

    /// Infinitives that are never considered invented.
    pub static ref KNOWN_REAL_VERBS: HashSet<&'static str> = [
        "ir", "ser", "ver", "dar", "estar", "haber", "hacer", "poder", "tener", "decir", "querer",
        "saber", "poner", "venir", "salir", "pasar", "llamar", "llegar", "llevar", "dejar",
        "seguir", "creer", "hablar", "pensar", "quedar", "vivir", "sentir", "mirar", "caer",
        "dormir", "morir", "escribir", "abrir", "andar", "durar", "cantar", "bailar", "tirar",
        "tocar", "meter", "comer", "beber", "correr", "perder", "romper", "mover", "coger",
        "subir", "partir", "pedir", "servir", "repetir", "vestir", "medir", "reír", "oír", "huir",
        "jugar", "soñar", "volar", "llorar", "gritar", "rezar", "amar", "odiar", "matar", "robar",
        "fumar", "gastar", "ganar", "perdonar", "olvidar", "recordar", "buscar", "encontrar",
        "esperar", "cambiar", "usar", "parar", "acabar", "empezar", "comenzar", "terminar",
        "necesitar", "gustar", "faltar", "importar", "parecer", "conocer", "nacer", "crecer",
        "existir", "sufrir", "compartir", "permitir", "recibir", "producir", "traducir",
        "conducir", "reducir", "brillar", "perrear", "bellaquear", "janguear", "gozar",
        "disfrutar", "disparar", "tumbar", "trepar", "prendar", "prender", "encender", "apagar",
        "cerrar", "curar", "soltar", "juntar",
    ]
    .into_iter()
    .collect();
}

const VERB_SUFFIXES: [&str; 5] = ["ir", "ar", "er", "ír", "ér"];

/// `true` if `lemma` looks invented for `word`.
pub fn is_likely_hallucinated(lemma: &str, word: &str) -> bool {
    if lemma.is_empty() {
        return true;
    }
    if lemma == word || KNOWN_REAL_VERBS.contains(lemma) {
        return false;
    }
    if !INFINITIVE_LIKE.is_match(lemma) {
        return false;
    }
    let stem = VERB_SUFFIXES
        .iter()
        .find_map(|suffix| lemma.strip_suffix(suffix))
        .unwrap_or(lemma);
    word.starts_with(stem) && stem.chars().count() + 2 >= word.chars().count()
}

/// Higher is better.
type Score = (bool, bool, usize, usize, i64);

fn score(entry: &VocabEntry) -> Score {
    (
        !is_likely_hallucinated(&entry.lemma, &entry.word),
        KNOWN_REAL_VERBS.contains(entry.lemma.as_str()),
        entry.example_count(),
        entry.meanings.len(),
        -(entry.rank as i64),
    )
}

/// Merge a group of entries sharing a word.
///
/// The best scored entry is kept, and receives the meanings of the others for
/// parts of speech it does not have. Without a display form of its own, it
/// takes the first one found in input order.
pub fn merge_entries(entries: Vec<VocabEntry>) -> Option<VocabEntry> {
    let first_display = entries.iter().find_map(|e| e.display_form.clone());
    let mut scored: Vec<(Score, VocabEntry)> = entries.into_iter().map(|e| (score(&e), e)).collect();
    // stable: equal scores keep input order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    let mut scored = scored.into_iter().map(|(_, e)| e);
    let mut merged = scored.next()?;

    let mut seen_pos: HashSet<String> = merged.meanings.iter().map(|m| m.pos.clone()).collect();
    for other in scored {
        for meaning in other.meanings {
            if seen_pos.insert(meaning.pos.clone()) {
                merged.meanings.push(meaning);
            }
        }
        merged.is_english |= other.is_english;
        merged.is_interjection |= other.is_interjection;
        merged.is_propernoun |= other.is_propernoun;
        merged.is_transparent_cognate |= other.is_transparent_cognate;
    }
    if merged.display_form.is_none() {
        merged.display_form = first_display;
    }
    merged.most_frequent_lemma_instance = true;
    Some(merged)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupReport {
    pub groups_merged: usize,
    pub removed: usize,
}

/// One entry per word, ordered by previous rank and re-ranked from 1.
pub fn dedup(entries: Vec<VocabEntry>) -> (Vec<VocabEntry>, DedupReport) {
    let total = entries.len();
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<VocabEntry>> = HashMap::new();
    for entry in entries {
        groups
            .entry(entry.word.clone())
            .or_insert_with(|| {
                order.push(entry.word.clone());
                vec![]
            })
            .push(entry);
    }

    let mut report = DedupReport::default();
    let mut out = Vec::with_capacity(order.len());
    for word in order {
        let group = match groups.remove(&word) {
            Some(g) => g,
            None => continue,
        };
        if group.len() == 1 {
            out.extend(group);
            continue;
        }
        let lemmas: Vec<String> = group.iter().map(|e| e.lemma.clone()).collect();
        if let Some(merged) = merge_entries(group) {
            debug!(
                "{}: kept {:?}, dropped {:?}",
                word,
                merged.lemma,
                lemmas.iter().filter(|l| **l != merged.lemma).collect::<Vec<_>>()
            );
            report.groups_merged += 1;
            out.push(merged);
        }
    }

    out.sort_by_key(|e| e.rank);
    for (idx, entry) in out.iter_mut().enumerate() {
        entry.rank = idx + 1;
    }
    report.removed = total - out.len();
    (out, report)
}
