use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ethframe::ether::*;
use ethframe::vlan::VlanTag;

fn udp_frame(payload_len: usize, tags: usize) -> Frame {
    Frame {
        destination: EtherAddr([0x00, 0x0b, 0x86, 0x64, 0x8b, 0xa0]),
        source: EtherAddr([0x00, 0x50, 0x56, 0xae, 0x76, 0xf5]),
        vlan: (0..tags).map(|i| VlanTag::new(0, false, 100 + i as u16)).collect(),
        ether_type: EtherType::IPV4,
        payload: vec![0x45; payload_len],
    }
}

pub fn b(c: &mut Criterion) {
    c.bench_function("frame_build", |b| {
        let frame = udp_frame(94, 0);
        let mut buf = [0; 200];
        b.iter(|| {
            black_box(&frame).encode_into(black_box(&mut buf[..])).unwrap();
        })
    });

    c.bench_function("frame_build_qinq", |b| {
        let frame = udp_frame(94, 2);
        let mut buf = [0; 200];
        b.iter(|| {
            black_box(&frame).encode_into(black_box(&mut buf[..])).unwrap();
        })
    });

    c.bench_function("frame_build_fcs", |b| {
        let frame = udp_frame(94, 1);
        b.iter(|| black_box(&frame).encode_with_fcs().unwrap())
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
