use circle_packer::{
    Circle, CircleId, Command, Event, Message, Point, PositionUpdate, PositionUpdates, decode,
    encode,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn move_event(size: usize) -> Message {
    let updates: PositionUpdates = (0..size)
        .map(|index| {
            (
                CircleId::new(format!("c{index}")),
                PositionUpdate::new(Point::new(index as f64, 1.0), Point::new(0.25, -0.25)),
            )
        })
        .collect();
    Message::Event(Event::Move(updates))
}

fn bench_codec(c: &mut Criterion) {
    let add = Message::Command(Command::AddCircles(
        (0..256)
            .map(|index| Circle::new(format!("c{index}"), 4.0, Point::new(0.0, index as f64)))
            .collect(),
    ));
    let moved = move_event(1024);
    let moved_frame = encode(&moved).unwrap();

    c.bench_function("encode_addcircles_256", |b| {
        b.iter(|| encode(black_box(&add)).unwrap());
    });

    c.bench_function("encode_move_1024", |b| {
        b.iter(|| encode(black_box(&moved)).unwrap());
    });

    c.bench_function("decode_move_1024", |b| {
        b.iter(|| decode(black_box(moved_frame.as_str())).unwrap());
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
