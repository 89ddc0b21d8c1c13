use std::io::Write;

use crate::encode::encode;
use crate::error::PrepareError;
use crate::normalize::normalize;
use crate::registry::PropertyRegistry;

use self::format::format_bytes;
use self::format::format_names;

mod format;
mod stats;

/// длина строки в файле с подготовленными данными
const FORMAT_STRING_LENGTH: usize = 120;

/// параметры генерируемой таблицы
pub struct TableParams<'a>
{
    /// название таблицы для статистики
    pub name: &'a str,
    /// префикс констант свойств (GBP, WBP)
    pub const_prefix: &'a str,
}

/// пишем подготовленную таблицу свойств
///
/// data_out получает литерал BreakData для встраивания через include!,
/// consts_out - константы кодов свойств; вывод детерминирован: одинаковые
/// источники дают байт-в-байт одинаковые файлы
pub fn write<W: Write>(
    primary: &str,
    overrides: Option<&str>,
    exclude: Option<&str>,
    params: &TableParams,
    data_out: &mut W,
    consts_out: &mut W,
) -> Result<(), PrepareError>
{
    let mut registry = PropertyRegistry::new();

    let runs = normalize(primary, overrides, exclude, &mut registry);
    let table = encode(&runs)?;

    let output = format!(
        "BreakData {{\n  \
            table: &[{}  ],\n  \
            names: &[{}  ],\n\
        }}\n",
        format_bytes(table.as_slice(), FORMAT_STRING_LENGTH),
        format_names(registry.names(), FORMAT_STRING_LENGTH),
    );

    write!(data_out, "{}", output).map_err(PrepareError::OutputUnavailable)?;

    let mut consts = String::new();

    for (code, name) in registry.names().enumerate() {
        consts.push_str(
            format!(
                "pub const {}: u16 = {};\n",
                const_name(params.const_prefix, name),
                code
            )
            .as_str(),
        );
    }

    write!(consts_out, "{}", consts).map_err(PrepareError::OutputUnavailable)?;

    stats::print(params.name, runs.as_slice(), &registry, table.len());

    Ok(())
}

/// название константы кода свойства: WBP + ALetter -> WBP_ALETTER
fn const_name(prefix: &str, name: &str) -> String
{
    let name: String = name
        .chars()
        .map(|c| match c.is_ascii_alphanumeric() {
            true => c.to_ascii_uppercase(),
            false => '_',
        })
        .collect();

    format!("{}_{}", prefix, name)
}
