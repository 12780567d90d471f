use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use quizbase_core::{Base, IdAllocator, Question, Tag};

fn filled_base(ids: &IdAllocator, questions: usize) -> (Base, Vec<quizbase_core::QuestionId>) {
    let mut base = Base::new();
    let mut pooled = Vec::with_capacity(questions);
    for i in 0..questions {
        let tag = Tag::ALL[i % Tag::ALL.len()];
        let question = if i % 2 == 0 {
            Question::free(ids, format!("question {i}"), "answer")
        } else {
            Question::choice(
                ids,
                format!("question {i}"),
                vec!["a".into(), "b".into(), "c".into()],
                2,
            )
        };
        let id = base
            .add_element(tag, question)
            .expect("ids come from one allocator");
        base.add_tag(id, Tag::General);
        pooled.push(id);
    }
    (base, pooled)
}

fn bench_add_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_element");

    for size in [100usize, 1_000] {
        group.bench_function(format!("n={size}"), |b| {
            let ids = IdAllocator::new();
            b.iter(|| filled_base(&ids, black_box(size)))
        });
    }

    group.finish();
}

fn bench_remove_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_element");

    for size in [100usize, 1_000] {
        group.bench_function(format!("n={size}"), |b| {
            let ids = IdAllocator::new();
            b.iter_batched(
                || filled_base(&ids, size),
                |(mut base, pooled)| {
                    for id in pooled {
                        black_box(base.remove_element(id));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_subject_size(c: &mut Criterion) {
    let ids = IdAllocator::new();
    let question = Question::choice(
        &ids,
        "Which of these rivers is the longest?",
        vec![
            "Amazon".into(),
            "Nile".into(),
            "Yangtze".into(),
            "Mississippi".into(),
        ],
        1,
    );

    c.bench_function("subject_size/choice", |b| {
        b.iter(|| black_box(&question).subject_size())
    });
}

criterion_group!(
    benches,
    bench_add_element,
    bench_remove_element,
    bench_subject_size
);
criterion_main!(benches);
