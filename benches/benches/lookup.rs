use criterion::{black_box, criterion_group, criterion_main, Criterion};

use unicode_breaking::BreakData;
use unicode_breaking_prepare::encode::encode;
use unicode_breaking_prepare::normalize::normalize;
use unicode_breaking_prepare::registry::PropertyRegistry;

const WARM_UP_TIME: u64 = 3;
const MEASUREMENT_TIME: u64 = 7;

/// синтетический источник: count диапазонов по 16 кодпоинтов
/// с промежутками, свойства чередуются
fn synthetic_source(count: u32) -> String
{
    let mut text = String::new();

    for i in 0 .. count {
        let start = i * 0x20;
        let name = match i % 3 {
            0 => "Extend",
            1 => "ZWJ",
            _ => "Prepend",
        };

        text.push_str(format!("{:04X}..{:04X} ; {}\n", start, start + 0x0F, name).as_str());
    }

    text
}

fn lookup(c: &mut Criterion)
{
    let mut group = c.benchmark_group("lookup");

    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));

    for count in [0x10u32, 0x100, 0x1000] {
        let source = synthetic_source(count);

        let mut registry = PropertyRegistry::new();
        let runs = normalize(source.as_str(), None, None, &mut registry);
        let table = encode(runs.as_slice()).unwrap();
        let names: Vec<&str> = registry.names().collect();

        let data = BreakData {
            table: table.as_slice(),
            names: names.as_slice(),
        };

        let limit = count * 0x20;

        group.bench_with_input(
            criterion::BenchmarkId::new("property_of", count),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut sum = 0u32;

                    for code in 0 .. limit {
                        sum += data.property_of(black_box(code)) as u32;
                    }

                    sum
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, lookup);
criterion_main!(benches);
