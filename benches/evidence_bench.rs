use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lyricvocab::evidence::{select_examples, Candidate};

const WORDS: [&str; 8] = ["que", "yo", "tú", "bebé", "noche", "perreo", "calle", "luna"];

fn corpus(songs: u64) -> (HashMap<String, u64>, HashMap<String, Vec<Candidate>>) {
    let mut counts = HashMap::new();
    let mut candidates: HashMap<String, Vec<Candidate>> = HashMap::new();
    for song_id in 0..songs {
        for (i, word) in WORDS.iter().enumerate() {
            if (song_id as usize + i) % 3 == 0 {
                continue;
            }
            *counts.entry(word.to_string()).or_insert(0) += song_id % 7 + 1;
            candidates.entry(word.to_string()).or_default().push(Candidate {
                score: (song_id % 5) as i32,
                batch: (song_id / 25) as usize,
                song_id,
                line_no: i + 1,
                line_text: format!("una línea con {} en la canción {}", word, song_id),
                song_title: format!("canción {}", song_id),
            });
        }
    }
    (counts, candidates)
}

pub fn select_benchmark(c: &mut Criterion) {
    let (counts, candidates) = corpus(500);
    c.bench_function("select_examples", |b| {
        b.iter_batched(
            || candidates.clone(),
            |cands| select_examples(black_box(&counts), cands, 10),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, select_benchmark);
criterion_main!(benches);
