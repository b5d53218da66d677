//! Parse, strip and print throughput.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use ts2js::{StripOptions, convert_source};
use ts2js_emitter::{print, strip};
use ts2js_parser::parse;

fn sample_source(copies: usize) -> String {
    let unit = r#"
import type { Options } from "./options";
import { helper, type Helper } from "./helper";

/** A queue of jobs. */
export interface Job<T> {
    id: number;
    run(input: T): Promise<void>;
}

export enum Priority { Low, Normal = 5, High }

export class Queue<T> implements Iterable<Job<T>> {
    private readonly jobs: Job<T>[] = [];
    constructor(private options: Options, public name?: string) {}

    push(job: Job<T>, priority: Priority = Priority.Normal): number {
        const wrapped = { ...job, priority } as Job<T> & { priority: Priority };
        this.jobs.push(wrapped);
        return helper(this.jobs.length)!;
    }

    *[Symbol.iterator](): Iterator<Job<T>> {
        yield* this.jobs;
    }
}
"#;
    unit.repeat(copies)
}

fn bench_convert(c: &mut Criterion) {
    let source = sample_source(50);
    let options = StripOptions::default();
    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("parse", |b| {
        b.iter(|| parse("bench.ts", black_box(source.as_str())))
    });

    let Ok(tree) = parse("bench.ts", source.as_str()) else {
        return;
    };
    group.bench_function("strip", |b| b.iter(|| strip(black_box(&tree), &options)));

    let stripped = strip(&tree, &options);
    group.bench_function("print", |b| {
        b.iter(|| print(black_box(&stripped.tree), &source))
    });

    group.bench_function("convert_source", |b| {
        b.iter(|| convert_source("bench.ts", black_box(&source), &options))
    });
    group.finish();
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
