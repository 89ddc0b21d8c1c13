/// одна запись исходного файла свойств: диапазон кодпоинтов и название свойства
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAssignment
{
    /// первый кодпоинт диапазона
    pub start: u32,
    /// последний кодпоинт диапазона (включительно)
    pub end: u32,
    /// название свойства, как оно записано в источнике
    pub name: String,
}

/// разбор одной строки вида `<hex>[..<hex>] ; <название>`
///
/// комментарий (от `#` до конца строки) отбрасывается; одиночный кодпоинт -
/// диапазон длины 1; строка, не подходящая под грамматику - не ошибка,
/// в исходниках UCD ожидаются заголовки и служебные строки
pub fn parse_line(line: &str) -> Option<RawAssignment>
{
    let line = match line.find('#') {
        Some(pos) => &line[.. pos],
        None => line,
    };

    let line = line.trim();

    if line.is_empty() {
        return None;
    }

    let (range, name) = line.split_once(';')?;

    let name = name.trim();

    if name.is_empty() {
        return None;
    }

    let range = range.trim();

    let (start, end) = match range.split_once("..") {
        Some((start, end)) => (start, end),
        None => (range, range),
    };

    let start = u32::from_str_radix(start, 16).ok()?;
    let end = u32::from_str_radix(end, 16).ok()?;

    if start > end {
        return None;
    }

    Some(RawAssignment {
        start,
        end,
        name: name.to_owned(),
    })
}

/// разбор источника целиком, в порядке строк
///
/// exclude - название категории, записи которой выбрасываются из таблицы
pub fn parse_source(text: &str, exclude: Option<&str>) -> Vec<RawAssignment>
{
    let mut assignments = vec![];

    for line in text.lines() {
        let assignment = match parse_line(line) {
            Some(assignment) => assignment,
            None => continue,
        };

        if exclude == Some(assignment.name.as_str()) {
            continue;
        }

        assignments.push(assignment);
    }

    assignments
}
