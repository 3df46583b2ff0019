use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::{Rng, rng};
use seqds::{DoublyLinkedList, DynamicArray};
use std::collections::LinkedList;

fn add_benchmark_dynamic_array(c: &mut Criterion) {
    c.bench_function("dynamic array add", |c| {
        c.iter(|| {
            let mut arr = DynamicArray::<u32>::new();
            for i in 0..(1 << 16) {
                arr.add(i);
            }
            arr
        });
    });
}

fn push_benchmark_vec(c: &mut Criterion) {
    c.bench_function("vec push", |c| {
        c.iter(|| {
            let mut vec = Vec::<u32>::new();
            for i in 0..(1 << 16) {
                vec.push(i);
            }
            vec
        });
    });
}

fn drain_benchmark_dynamic_array(c: &mut Criterion) {
    c.bench_function("dynamic array add/pop", |c| {
        c.iter(|| {
            let mut arr = DynamicArray::<u32>::new();
            for i in 0..(1 << 14) {
                arr.add(i);
            }
            while let Some(x) = arr.pop() {
                black_box(x);
            }
        });
    });
}

fn sort_benchmark_list(c: &mut Criterion) {
    let mut rng = rng();
    let values: Vec<u32> = (0..(1 << 14)).map(|_| rng.random()).collect();

    c.bench_function("list sort", |c| {
        c.iter(|| {
            let mut list: DoublyLinkedList<u32> = values.iter().copied().collect();
            list.sort();
            list
        });
    });
}

fn push_benchmark_std_list(c: &mut Criterion) {
    c.bench_function("std list push_back", |c| {
        c.iter(|| {
            let mut list = LinkedList::<u32>::new();
            for i in 0..(1 << 14) {
                list.push_back(black_box(i));
            }
            list
        });
    });
}

fn add_benchmark_list(c: &mut Criterion) {
    c.bench_function("list add_last", |c| {
        c.iter(|| {
            let mut list = DoublyLinkedList::<u32>::new();
            for i in 0..(1 << 14) {
                list.add_last(black_box(i));
            }
            list
        });
    });
}

criterion_group!(
    benches,
    add_benchmark_dynamic_array,
    push_benchmark_vec,
    drain_benchmark_dynamic_array,
    add_benchmark_list,
    push_benchmark_std_list,
    sort_benchmark_list
);
criterion_main!(benches);
