//! Benchmarks for WebVTT parsing
//!
//! Generates synthetic documents programmatically so the benchmarks need no
//! external files. Covers whole-file parsing at several sizes and markup
//! densities, the cue-text pipeline on its own, and the DOM projection.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write;
use std::hint::black_box as std_black_box;
use vtt_core::{
    parse, parse_with_options,
    parser::cue_text::{build_dom, parse_cue_text},
    ParserOptions,
};

/// Synthetic WebVTT document generator
struct DocumentGenerator {
    /// Number of cues to generate
    cue_count: usize,
    /// Number of REGION blocks to declare
    region_count: usize,
    /// Markup density of cue payloads
    complexity_level: ComplexityLevel,
}

/// Payload complexity levels
#[derive(Debug, Clone, Copy)]
enum ComplexityLevel {
    /// Plain text
    Simple,
    /// A few inline tags
    Moderate,
    /// Voices, ruby, timestamps and settings on every cue
    Complex,
}

impl DocumentGenerator {
    fn simple(cue_count: usize) -> Self {
        Self {
            cue_count,
            region_count: 0,
            complexity_level: ComplexityLevel::Simple,
        }
    }

    fn moderate(cue_count: usize) -> Self {
        Self {
            cue_count,
            region_count: 2,
            complexity_level: ComplexityLevel::Moderate,
        }
    }

    fn complex(cue_count: usize) -> Self {
        Self {
            cue_count,
            region_count: 8,
            complexity_level: ComplexityLevel::Complex,
        }
    }

    /// Generate the complete document
    fn generate(&self) -> String {
        let mut document = String::with_capacity(64 + self.region_count * 80 + self.cue_count * 120);
        document.push_str("WEBVTT - Benchmark\nKind: captions\n\n");
        document.push_str("STYLE\n::cue { color: white }\n::cue(.loud) { font-weight: bold }\n\n");

        for i in 0..self.region_count {
            writeln!(
                document,
                "REGION\nid:r{i} width:{}% lines:3\nregionanchor:0%,100% viewportanchor:10%,90% scroll:up\n",
                20 + i * 5
            )
            .unwrap();
        }

        for i in 0..self.cue_count {
            let start = Self::format_time(i * 3000);
            let end = Self::format_time(i * 3000 + 2500);
            let settings = self.generate_settings(i);
            let text = self.generate_payload(i);
            writeln!(document, "{}\n{start} --> {end}{settings}\n{text}\n", i + 1).unwrap();
        }

        document
    }

    /// Format milliseconds as `HH:MM:SS.mmm`
    fn format_time(millis: usize) -> String {
        let hours = millis / 3_600_000;
        let minutes = (millis % 3_600_000) / 60_000;
        let seconds = (millis % 60_000) / 1000;
        let ms = millis % 1000;
        format!("{hours:02}:{minutes:02}:{seconds:02}.{ms:03}")
    }

    fn generate_settings(&self, index: usize) -> String {
        match self.complexity_level {
            ComplexityLevel::Simple => String::new(),
            ComplexityLevel::Moderate => " align:start".to_string(),
            ComplexityLevel::Complex => format!(
                " region:r{} position:{}%,line-left align:left",
                index % self.region_count.max(1),
                index % 100
            ),
        }
    }

    fn generate_payload(&self, index: usize) -> String {
        let base = format!("This is cue number {}", index + 1);
        match self.complexity_level {
            ComplexityLevel::Simple => base,
            ComplexityLevel::Moderate => format!("<b>{base}</b> with <i>some</i> markup"),
            ComplexityLevel::Complex => format!(
                "<v.loud Speaker {index}><c.yellow>{base}</c></v>\n<ruby>漢<rt>kan</rt></ruby> <00:00:01.000><i><b>nested</i></b>"
            ),
        }
    }
}

/// Benchmark whole-document parsing
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for &size in &[10, 100, 1000] {
        let documents = [
            ("simple", DocumentGenerator::simple(size).generate()),
            ("moderate", DocumentGenerator::moderate(size).generate()),
            ("complex", DocumentGenerator::complex(size).generate()),
        ];

        for (name, document) in &documents {
            group.throughput(Throughput::Bytes(document.len() as u64));
            group.bench_with_input(BenchmarkId::new(*name, size), document, |b, document| {
                b.iter(|| std_black_box(parse(black_box(document))));
            });
        }
    }

    group.finish();
}

/// Benchmark parsing with markup trees disabled
fn bench_without_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("without_trees");
    let document = DocumentGenerator::complex(1000).generate();
    let options = ParserOptions::default().with_cue_text_nodes(false);

    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("complex_1000", |b| {
        b.iter(|| std_black_box(parse_with_options(black_box(&document), &options)));
    });

    group.finish();
}

/// Benchmark the cue-text pipeline on single payloads
fn bench_cue_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("cue_text");

    let flat = "Plain text without any markup at all, repeated. ".repeat(20);
    let tagged = "<c.a.b>class</c> <i>italic</i> <b>bold</b> <u>under</u> ".repeat(20);
    let deep = format!("{}deep{}", "<i><b>".repeat(500), "</b></i>".repeat(500));

    for (name, payload) in [("flat", &flat), ("tagged", &tagged), ("deep", &deep)] {
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("tree", name), payload, |b, payload| {
            b.iter(|| std_black_box(parse_cue_text(black_box(payload))));
        });

        let tree = parse_cue_text(payload);
        group.bench_with_input(BenchmarkId::new("dom", name), &tree, |b, tree| {
            b.iter(|| std_black_box(build_dom(black_box(tree))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_without_trees, bench_cue_text);
criterion_main!(benches);
