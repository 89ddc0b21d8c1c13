use core::fmt;
use std::io;

/// ошибки генерации таблиц; повторных попыток нет - любая из них
/// прерывает запуск целиком, частичная таблица хуже её отсутствия
#[derive(Debug)]
pub enum PrepareError
{
    /// не удалось прочитать исходный файл
    SourceUnavailable(io::Error),
    /// не удалось записать подготовленные данные
    OutputUnavailable(io::Error),
    /// длина диапазона не помещается в 2-байтовое поле записи
    RangeOverflow { start: u32, end: u32 },
}

impl fmt::Display for PrepareError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::SourceUnavailable(e) => write!(f, "не удалось прочитать исходник: {}", e),
            Self::OutputUnavailable(e) => write!(f, "не удалось записать данные: {}", e),
            Self::RangeOverflow { start, end } => write!(
                f,
                "диапазон {:04X}..{:04X} длиннее 0xFFFF кодпоинтов и не может быть закодирован",
                start, end
            ),
        }
    }
}

impl std::error::Error for PrepareError {}
