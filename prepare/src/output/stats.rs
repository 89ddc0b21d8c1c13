use std::collections::HashMap;

use crate::normalize::Run;
use crate::registry::PropertyRegistry;

/// информация о подготовленной таблице
pub fn print(name: &str, runs: &[Run], registry: &PropertyRegistry, table_bytes: usize)
{
    println!(
        "\n{}:\n  \
        диапазонов: {}\n  \
        свойств (с зарезервированными): {}\n  \
        размер таблицы: {} байт",
        name,
        runs.len(),
        registry.len(),
        table_bytes,
    );

    println!();

    let mut counts: HashMap<&str, usize> = HashMap::new();

    for run in runs {
        let name = registry.name_for(run.code).unwrap_or("?");

        counts.entry(name).and_modify(|c| *c += 1).or_insert(1);
    }

    let mut keys: Vec<&&str> = counts.keys().collect();
    keys.sort_by(|a, b| counts[*b].cmp(&counts[*a]));

    for key in keys {
        println!("  {}: {}", key, counts[key]);
    }

    println!();
}
