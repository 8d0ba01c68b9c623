use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kata_rs::cards::{Card, Rank, Suit};
use kata_rs::glyph::{decode, encode, GlyphDecoder};
use kata_rs::poker::rank_hand;
use kata_rs::selector::{CssSelectorBuilder as css, Render};

fn bench_decode(c: &mut Criterion) {
    let single = encode("123456789").unwrap();
    let batch = encode("123456789 987654321 111111111").unwrap();

    let mut g = c.benchmark_group("glyph_decode");
    g.bench_with_input(BenchmarkId::new("single", "9 digits"), &single, |b, input| {
        b.iter(|| decode(black_box(input)))
    });
    let decoder = GlyphDecoder::new();
    g.bench_with_input(BenchmarkId::new("batch", "3 x 9 digits"), &batch, |b, input| {
        b.iter(|| decoder.decode_batch(black_box(input)))
    });
    g.finish();
}

fn bench_selector(c: &mut Criterion) {
    c.bench_function("selector_build_and_render", |b| {
        b.iter(|| {
            let sel = css::combine(
                css::element(black_box("div")).class("container").pseudo_class("hover"),
                ">",
                css::element("a").attr(r#"href$=".png""#),
            )
            .unwrap();
            sel.render()
        })
    });
}

fn bench_rank_hand(c: &mut Criterion) {
    let sf = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
    ];
    c.bench_function("rank_hand", |b| b.iter(|| rank_hand(black_box(&sf))));
}

criterion_group!(benches, bench_decode, bench_selector, bench_rank_hand);
criterion_main!(benches);
