use std::collections::BTreeMap;

use bitmask::{layout::Layout, section::Section};
use criterion::{Criterion, criterion_group, criterion_main};

fn gen_layout(section_count: usize, length: u32) -> Layout {
    let sections: Vec<Section> = (0..section_count)
        .map(|i| Section::new(format!("s{}", i), length))
        .collect();

    Layout::compile(&sections).unwrap()
}

fn gen_values(section_count: usize, length: u32) -> BTreeMap<String, u32> {
    let max = (1u32 << length) - 1;

    // Deterministic but non-trivial pattern
    (0..section_count)
        .map(|i| (format!("s{}", i), (i as u32 * 31) & max))
        .collect()
}

fn bench_layout_pack(c: &mut Criterion) {
    for &(section_count, length) in &[(2usize, 16u32), (8, 4), (16, 2), (32, 1)] {
        let layout = gen_layout(section_count, length);
        let values = gen_values(section_count, length);

        c.bench_function(&format!("pack_{}_sections", section_count), |b| {
            b.iter(|| {
                let _ = layout.pack(&values).unwrap();
            })
        });

        let packed = layout.pack(&values).unwrap();
        c.bench_function(&format!("unpack_all_{}_sections", section_count), |b| {
            b.iter(|| {
                let _ = layout.unpack_all(packed);
            })
        });
    }
}

criterion_group!(benches, bench_layout_pack);
criterion_main!(benches);
