use chat_wire::{ChatMessage, Message, RegisterRequest, UserId};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

fn chat(len: usize) -> Message {
    ChatMessage::new(UserId::new(42).unwrap(), "x".repeat(len)).into()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    // Short chat line
    let small_msg = chat(16);
    group.throughput(Throughput::Bytes(16));
    group.bench_function("encode_chat_16b", |b| {
        b.iter(|| {
            black_box(small_msg.to_bytes().unwrap());
        });
    });

    // Longest text a frame can carry
    let large_msg = chat(u16::MAX as usize);
    group.throughput(Throughput::Bytes(u64::from(u16::MAX)));
    group.bench_function("encode_chat_64kb", |b| {
        b.iter(|| {
            black_box(large_msg.to_bytes().unwrap());
        });
    });

    let register: Message =
        RegisterRequest::new(UserId::new(7).unwrap(), "example.org", 5000).into();
    group.bench_function("encode_register", |b| {
        b.iter(|| {
            black_box(register.to_bytes().unwrap());
        });
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let small_encoded = chat(16).to_bytes().unwrap();
    group.throughput(Throughput::Bytes(16));
    group.bench_function("decode_chat_16b", |b| {
        b.iter(|| {
            black_box(Message::from_bytes(&small_encoded).unwrap());
        });
    });

    let large_encoded = chat(u16::MAX as usize).to_bytes().unwrap();
    group.throughput(Throughput::Bytes(u64::from(u16::MAX)));
    group.bench_function("decode_chat_64kb", |b| {
        b.iter(|| {
            black_box(Message::from_bytes(&large_encoded).unwrap());
        });
    });

    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let msg = chat(256);
    group.throughput(Throughput::Bytes(256));
    group.bench_function("roundtrip_chat_256b", |b| {
        b.iter(|| {
            let encoded = msg.to_bytes().unwrap();
            black_box(Message::from_bytes(&encoded).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_roundtrip);
criterion_main!(benches);
