use crate::BREAK_RECORD_LENGTH;

/// распакованная запись таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakRun
{
    /// первый кодпоинт диапазона
    pub start: u32,
    /// длина диапазона
    pub length: u16,
    /// код свойства
    pub property: u16,
}

/// итератор по записям таблицы в порядке их следования
pub struct BreakRuns<'a>
{
    table: &'a [u8],
}

impl<'a> BreakRuns<'a>
{
    #[inline]
    pub fn new(table: &'a [u8]) -> Self
    {
        Self { table }
    }
}

impl Iterator for BreakRuns<'_>
{
    type Item = BreakRun;

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        if self.table.len() < BREAK_RECORD_LENGTH {
            return None;
        }

        let record = &self.table[.. BREAK_RECORD_LENGTH];
        self.table = &self.table[BREAK_RECORD_LENGTH ..];

        Some(BreakRun {
            start: u32::from_le_bytes([record[0], record[1], record[2], record[3]]),
            length: u16::from_le_bytes([record[4], record[5]]),
            property: u16::from_le_bytes([record[6], record[7]]),
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>)
    {
        let count = self.table.len() / BREAK_RECORD_LENGTH;

        (count, Some(count))
    }
}

impl ExactSizeIterator for BreakRuns<'_> {}
