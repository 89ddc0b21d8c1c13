use unicode_breaking::BREAK_RECORD_LENGTH;

use crate::error::PrepareError;
use crate::normalize::Run;

/// сериализация списка диапазонов: на каждый диапазон ровно 8 байт -
/// u32 LE старт, u16 LE длина (end - start + 1), u16 LE код свойства
///
/// порядок байтового потока повторяет порядок списка - это обязательное
/// условие для бинарного поиска на стороне потребителя
pub fn encode(runs: &[Run]) -> Result<Vec<u8>, PrepareError>
{
    let mut table = Vec::with_capacity(runs.len() * BREAK_RECORD_LENGTH);

    for run in runs {
        let length = run.end as u64 - run.start as u64 + 1;

        // усечение недопустимо - слишком длинный диапазон прерывает генерацию
        if length > 0xFFFF {
            return Err(PrepareError::RangeOverflow {
                start: run.start,
                end: run.end,
            });
        }

        table.extend_from_slice(&run.start.to_le_bytes());
        table.extend_from_slice(&(length as u16).to_le_bytes());
        table.extend_from_slice(&run.code.to_le_bytes());
    }

    Ok(table)
}
