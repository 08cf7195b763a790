use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ethframe::ether::*;
use ethframe::vlan::VlanTag;

fn encoded(tags: usize, fcs: bool) -> Vec<u8> {
    let frame = Frame {
        destination: EtherAddr([0x00, 0x0b, 0x86, 0x64, 0x8b, 0xa0]),
        source: EtherAddr([0x00, 0x50, 0x56, 0xae, 0x76, 0xf5]),
        vlan: (0..tags).map(|i| VlanTag::new(0, false, 100 + i as u16)).collect(),
        ether_type: EtherType::IPV4,
        payload: vec![0x45; 94],
    };
    if fcs {
        frame.encode_with_fcs().unwrap()
    } else {
        frame.encode().unwrap()
    }
}

pub fn b(c: &mut Criterion) {
    c.bench_function("frame_parse", |b| {
        let bytes = encoded(0, false);
        b.iter(|| Frame::decode(black_box(&bytes[..])).unwrap())
    });

    c.bench_function("frame_parse_qinq", |b| {
        let bytes = encoded(2, false);
        b.iter(|| Frame::decode(black_box(&bytes[..])).unwrap())
    });

    c.bench_function("frame_parse_fcs", |b| {
        let bytes = encoded(1, true);
        b.iter(|| Frame::decode_with_fcs(black_box(&bytes[..])).unwrap())
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
