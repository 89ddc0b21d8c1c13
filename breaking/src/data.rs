use crate::iter::BreakRuns;
use crate::BREAK_OTHER;
use crate::BREAK_RECORD_LENGTH;

/// таблица свойств сегментации: отсортированные по первому кодпоинту записи
/// по 8 байт и список названий свойств в порядке их кодов
///
/// таблица неизменяема после построения, поиск не аллоцирует и не блокирует -
/// её можно разделять между потоками без синхронизации
#[derive(Clone, Copy)]
pub struct BreakData<'a>
{
    /// записи таблицы, длина кратна 8
    pub table: &'a [u8],
    /// названия свойств, индекс в массиве - код свойства
    pub names: &'a [&'a str],
}

impl<'a> BreakData<'a>
{
    /// количество записей таблицы
    #[inline]
    pub fn records(&self) -> usize
    {
        self.table.len() / BREAK_RECORD_LENGTH
    }

    /// код свойства для кодпоинта
    ///
    /// бинарный поиск записи с наибольшим стартом <= кодпоинта; если такой
    /// записи нет, или кодпоинт лежит за концом её диапазона - значит он
    /// не покрыт таблицей, и его свойство - дефолтный 0
    #[inline]
    pub fn property_of(&self, code: u32) -> u16
    {
        let mut lo = 0;
        let mut hi = self.records();

        while lo < hi {
            let mid = (lo + hi) / 2;

            match self.start(mid) <= code {
                true => lo = mid + 1,
                false => hi = mid,
            }
        }

        if lo == 0 {
            return BREAK_OTHER;
        }

        let mut index = lo - 1;

        // при совпадающих стартах действует запись, определённая в источнике раньше
        while index > 0 && self.start(index - 1) == self.start(index) {
            index -= 1;
        }

        match code - self.start(index) < self.length(index) as u32 {
            true => self.property(index),
            false => BREAK_OTHER,
        }
    }

    /// код свойства по названию, None - если такое название таблице неизвестно
    #[inline]
    pub fn code_for_name(&self, name: &str) -> Option<u16>
    {
        self.names.iter().position(|&n| n == name).map(|i| i as u16)
    }

    /// название свойства по коду
    #[inline]
    pub fn name_for(&self, code: u16) -> Option<&'a str>
    {
        self.names.get(code as usize).copied()
    }

    /// итератор по диапазонам таблицы в порядке записи
    #[inline]
    pub fn runs(&self) -> BreakRuns<'a>
    {
        BreakRuns::new(self.table)
    }

    /// первый кодпоинт диапазона записи
    #[inline(always)]
    fn start(&self, index: usize) -> u32
    {
        let o = index * BREAK_RECORD_LENGTH;

        u32::from_le_bytes([
            self.table[o],
            self.table[o + 1],
            self.table[o + 2],
            self.table[o + 3],
        ])
    }

    /// длина диапазона записи
    #[inline(always)]
    fn length(&self, index: usize) -> u16
    {
        let o = index * BREAK_RECORD_LENGTH + 4;

        u16::from_le_bytes([self.table[o], self.table[o + 1]])
    }

    /// код свойства записи
    #[inline(always)]
    fn property(&self, index: usize) -> u16
    {
        let o = index * BREAK_RECORD_LENGTH + 6;

        u16::from_le_bytes([self.table[o], self.table[o + 1]])
    }
}
