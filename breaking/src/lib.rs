pub use data::BreakData;
pub use iter::BreakRun;
pub use iter::BreakRuns;

mod data;
mod iter;

/// дефолтное свойство: кодпоинт не входит ни в один диапазон таблицы
pub const BREAK_OTHER: u16 = 0;
/// синтетическое свойство - начало текста; в таблицах не встречается,
/// его порождает только автомат сегментации
pub const BREAK_SOT: u16 = 1;
/// синтетическое свойство - конец текста; в таблицах не встречается
pub const BREAK_EOT: u16 = 2;

/// длина записи таблицы в байтах:
/// u32 LE - первый кодпоинт диапазона, u16 LE - длина диапазона, u16 LE - код свойства
///
/// количество записей = длина таблицы / длина записи, заголовка у таблицы нет
pub const BREAK_RECORD_LENGTH: usize = 8;
