use criterion::{black_box, criterion_group, criterion_main, Criterion};
use smoltcp::wire::{EthernetFrame, EthernetProtocol};

static FRAME_BYTES: [u8; 108] = {
    let mut bytes = [0x45; 108];
    let header = [
        0x00, 0x0b, 0x86, 0x64, 0x8b, 0xa0, 0x00, 0x50, 0x56, 0xae, 0x76, 0xf5, 0x08, 0x00,
    ];
    let mut i = 0;
    while i < header.len() {
        bytes[i] = header[i];
        i += 1;
    }
    bytes
};

// Baseline: header-only view without copying addresses or payload.
pub fn b(c: &mut Criterion) {
    c.bench_function("smol_parse", |b| {
        b.iter(|| {
            let frame = EthernetFrame::new_checked(black_box(&FRAME_BYTES[..])).unwrap();
            assert_eq!(frame.ethertype(), EthernetProtocol::Ipv4);
            black_box(frame.payload().len())
        })
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
