use criterion::{Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use std::io::Write;
use tempfile::TempDir;
use yaml_metadata_reader::prelude::*;

const TAGS: &[&str] = &["rust", "yaml", "markdown", "web", "static site", "parsing"];

fn generate_document(id: usize) -> String {
    let mut rng = rand::rng();
    let mut text = String::new();

    text.push_str("---\n");
    text.push_str(&format!("Title: Post {id}\n"));
    text.push_str(&format!(
        "date: 2024-{:02}-{:02} 10:00\n",
        rng.random_range(1..=12),
        rng.random_range(1..=28)
    ));
    text.push_str(&format!("slug: post-{id}\n"));

    if rng.random::<bool>() {
        text.push_str("author: [Jane Doe, Bob Roe]\n");
    } else {
        text.push_str("author: Jane Doe\n");
    }

    let tags: Vec<_> = (0..rng.random_range(1..=4))
        .map(|_| TAGS[rng.random_range(0..TAGS.len())])
        .collect();
    text.push_str(&format!("tags: [{}]\n", tags.join(", ")));
    text.push_str("summary: A *short* summary\n");
    text.push_str("---\n");

    for _ in 0..rng.random_range(10..=30) {
        text.push_str("Some **body** text with a [link](https://example.com).\n\n");
    }

    text
}

fn generate_content_dir(num_files: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    for i in 0..num_files {
        let file_path = temp_dir.path().join(format!("post_{i}.md"));
        std::fs::File::create(file_path)
            .unwrap()
            .write_all(generate_document(i).as_bytes())
            .unwrap();
    }

    temp_dir
}

fn read_string_benchmark(c: &mut Criterion) {
    let reader = YamlMetadataReader::new(Settings::default());
    let documents: Vec<_> = (0..100).map(generate_document).collect();

    c.bench_function("read_string_100", |b| {
        b.iter(|| {
            for text in &documents {
                black_box(reader.read_string(text, None::<&str>).unwrap());
            }
        });
    });
}

fn read_dir_benchmark(c: &mut Criterion) {
    let dir = generate_content_dir(1000);
    let mut readers = Readers::new();
    register(&mut readers, &Settings::default());

    c.bench_function("read_dir_1000", |b| {
        b.iter(|| black_box(read_dir(&readers, dir.path()).unwrap()));
    });
}

#[cfg(feature = "rayon")]
fn par_read_dir_benchmark(c: &mut Criterion) {
    let dir = generate_content_dir(1000);
    let mut readers = Readers::new();
    register(&mut readers, &Settings::default());

    c.bench_function("par_read_dir_1000", |b| {
        b.iter(|| black_box(par_read_dir(&readers, dir.path()).unwrap()));
    });
}

#[cfg(not(feature = "rayon"))]
criterion_group!(benches, read_string_benchmark, read_dir_benchmark);

#[cfg(feature = "rayon")]
criterion_group!(
    benches,
    read_string_benchmark,
    read_dir_benchmark,
    par_read_dir_benchmark
);

criterion_main!(benches);
