use std::fs;
use std::fs::File;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use unicode_breaking_prepare::error::PrepareError;
use unicode_breaking_prepare::output;
use unicode_breaking_prepare::output::TableParams;

/// каталог с исходными файлами UCD (auxiliary/GraphemeBreakProperty.txt и др.,
/// загрузка файлов - внешняя задача)
const UCD_DIR: &str = "./data/ucd";
/// каталог для подготовленных данных
const DATA_DIR: &str = "./../data";

fn main() -> ExitCode
{
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), PrepareError>
{
    // grapheme break: только основной источник
    output::write(
        read_source("GraphemeBreakProperty.txt")?.as_str(),
        None,
        None,
        &TableParams {
            name: "grapheme break",
            const_prefix: "GBP",
        },
        &mut create("grapheme_break.rs.txt")?,
        &mut create("grapheme_break_consts.rs.txt")?,
    )?;

    // word break: категория Katakana исключается, поверх применяются переопределения
    let overrides = read_overrides("WordBreakOverrides.txt")?;

    output::write(
        read_source("WordBreakProperty.txt")?.as_str(),
        overrides.as_deref(),
        Some("Katakana"),
        &TableParams {
            name: "word break",
            const_prefix: "WBP",
        },
        &mut create("word_break.rs.txt")?,
        &mut create("word_break_consts.rs.txt")?,
    )?;

    Ok(())
}

/// прочитать обязательный исходник UCD
fn read_source(filename: &str) -> Result<String, PrepareError>
{
    fs::read_to_string(Path::new(UCD_DIR).join(filename)).map_err(PrepareError::SourceUnavailable)
}

/// прочитать файл переопределений; его отсутствие - не ошибка
fn read_overrides(filename: &str) -> Result<Option<String>, PrepareError>
{
    match fs::read_to_string(Path::new(UCD_DIR).join(filename)) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PrepareError::SourceUnavailable(e)),
    }
}

fn create(filename: &str) -> Result<File, PrepareError>
{
    File::create(Path::new(DATA_DIR).join(filename)).map_err(PrepareError::OutputUnavailable)
}
