use booru_prompt_builder::bpb_filter::prelude::*;
use booru_prompt_builder::{ImageBoards, Post, Rating, Tag, TagType};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{seq::SliceRandom, thread_rng, Rng};

const TAGS: [&str; 27] = [
    "1girl",
    "2girls",
    "solo",
    "blue_hair",
    "red_eyes",
    "skadi_(arknights)",
    "school_uniform",
    "no_bra",
    "watermark",
    "japanese_text",
    "fox_ears",
    "witch_hat",
    "halo",
    "smile",
    "looking_at_viewer",
    "holding_sword",
    "thighhighs",
    "monochrome",
    "pink_hair",
    "green_eyes",
    "outdoors",
    "cherry_blossoms",
    "touhou",
    "speech_bubble",
    "dragon_horns",
    "Blue-Hair",
    "(character_name)",
];

const REMOVAL: [&str; 8] = [
    "watermark",
    "*_text",
    "holding_*",
    "*horn*",
    "grayscale",
    "hair*ribbon",
    "signature",
    "*_censor",
];

const RATINGS: [Rating; 4] = [
    Rating::General,
    Rating::Sensitive,
    Rating::Questionable,
    Rating::Explicit,
];

fn seed_data(num: u64) -> Vec<Post> {
    let mut rng = thread_rng();

    (0..num)
        .map(|id| {
            let rn = rng.gen_range(1..=TAGS.len());
            let tags = TAGS
                .choose_multiple(&mut rng, rn)
                .map(|t| Tag::new(t, TagType::General))
                .collect();
            Post {
                id,
                website: ImageBoards::Danbooru,
                score: rng.gen_range(-10..500),
                url: format!("https://cdn.example/{id}.png"),
                rating: *RATINGS.choose(&mut rng).unwrap_or(&Rating::General),
                tags,
            }
        })
        .collect()
}

fn build_filter(toggles: FilterToggles) -> PostFilter {
    PostFilter::new(
        RemovalContext::compile(&REMOVAL, &["blue_hair"]),
        toggles,
        SessionColorBasis::from_prompt("blue hair, red eyes"),
        AllowedSubjectSet::default(),
        false,
    )
}

fn post_filter_bench(c: &mut Criterion) {
    for size in [20, 100, 1000, 10000] {
        let list = seed_data(size);

        c.bench_function(&format!("Filter {size} Posts (removal list only)"), |b| {
            b.iter(|| {
                let filter = build_filter(FilterToggles::empty());
                black_box(filter.filter(list.clone()))
            })
        });

        c.bench_function(&format!("Filter {size} Posts (all toggles)"), |b| {
            b.iter(|| {
                let filter = build_filter(FilterToggles::all());
                black_box(filter.filter(list.clone()))
            })
        });
    }
}

fn compile_bench(c: &mut Criterion) {
    let large: Vec<String> = (0..500).map(|i| format!("*term_{i}*")).collect();
    let ctx = RemovalContext::compile(&large, &[] as &[&str]);

    c.bench_function("Compile 500 contains entries", |b| {
        b.iter(|| black_box(RemovalContext::compile(&large, &[] as &[&str])))
    });
    c.bench_function("Match against 500 contains entries", |b| {
        b.iter(|| black_box(ctx.matches("long tag with term_499 inside")))
    });
}

criterion_group!(benches, post_filter_bench, compile_bench);
criterion_main!(benches);
