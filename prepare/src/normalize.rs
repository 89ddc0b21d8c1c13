use crate::registry::PropertyRegistry;
use crate::source::parse_source;
use crate::source::RawAssignment;

/// нормализованный диапазон: кодпоинты start ..= end с кодом свойства
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run
{
    pub start: u32,
    pub end: u32,
    pub code: u16,
}

/// применить источник переопределений к разобранному основному источнику
///
/// переопределение с диапазоном, в точности совпадающим с диапазоном записи
/// основного источника, заменяет её свойство; частично пересекающиеся
/// диапазоны не сопоставляются - это сравнение интервалов на равенство,
/// а не слияние; новые диапазоны добавляются в конец
pub fn apply_overrides(assignments: &mut Vec<RawAssignment>, overrides: Vec<RawAssignment>)
{
    for over in overrides {
        let mut replaced = false;

        for assignment in assignments.iter_mut() {
            if assignment.start == over.start && assignment.end == over.end {
                assignment.name = over.name.clone();
                replaced = true;
            }
        }

        if !replaced {
            assignments.push(over);
        }
    }
}

/// полная нормализация: основной источник, затем переопределения,
/// затем стабильная сортировка по первому кодпоинту диапазона
///
/// переопределения применяются только после полного разбора основного
/// источника; при совпадающих стартах записи сохраняют порядок источника,
/// т.е. раньше определённая запись остаётся первой
pub fn normalize(
    primary: &str,
    overrides: Option<&str>,
    exclude: Option<&str>,
    registry: &mut PropertyRegistry,
) -> Vec<Run>
{
    let mut assignments = parse_source(primary, exclude);

    if let Some(overrides) = overrides {
        apply_overrides(&mut assignments, parse_source(overrides, exclude));
    }

    let mut runs: Vec<Run> = assignments
        .iter()
        .map(|assignment| Run {
            start: assignment.start,
            end: assignment.end,
            code: registry.code_for(assignment.name.as_str()),
        })
        .collect();

    runs.sort_by_key(|run| run.start);

    runs
}
