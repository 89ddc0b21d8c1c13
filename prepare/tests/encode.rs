use unicode_breaking::BreakData;
use unicode_breaking::BREAK_RECORD_LENGTH;

use unicode_breaking_prepare::encode::encode;
use unicode_breaking_prepare::error::PrepareError;
use unicode_breaking_prepare::normalize::normalize;
use unicode_breaking_prepare::normalize::Run;
use unicode_breaking_prepare::output;
use unicode_breaking_prepare::output::TableParams;
use unicode_breaking_prepare::registry::PropertyRegistry;

#[test]
fn record_layout()
{
    let runs = [
        Run { start: 0x300, end: 0x36F, code: 3 },
        Run { start: 0x200D, end: 0x200D, code: 4 },
    ];

    let table = encode(&runs).unwrap();

    // на каждый диапазон ровно 8 байт: u32 LE старт, u16 LE длина, u16 LE код
    assert_eq!(
        table,
        vec![
            0x00, 0x03, 0x00, 0x00, 0x70, 0x00, 0x03, 0x00, // 0x300, 112, Extend
            0x0D, 0x20, 0x00, 0x00, 0x01, 0x00, 0x04, 0x00, // 0x200D, 1, ZWJ
        ]
    );
}

#[test]
fn max_length_fits()
{
    let runs = [Run { start: 0, end: 0xFFFE, code: 3 }];

    let table = encode(&runs).unwrap();

    assert_eq!(&table[4 .. 6], &[0xFF, 0xFF]);
}

#[test]
fn overflow_aborts_encoding()
{
    // диапазон длиной 70000 кодпоинтов не помещается в 2 байта -
    // генерация прерывается, а не усекает длину
    let mut registry = PropertyRegistry::new();
    let runs = normalize("0000..1116F ; Huge\n", None, None, &mut registry);

    assert_eq!(runs[0].end - runs[0].start + 1, 70000);

    match encode(&runs) {
        Err(PrepareError::RangeOverflow { start, end }) => {
            assert_eq!(start, 0);
            assert_eq!(end, 0x1116F);
        }
        other => panic!("ожидали RangeOverflow, получили {:?}", other),
    }
}

#[test]
fn runs_round_trip()
{
    let text = "\
        0300..036F ; Extend\n\
        200D ; ZWJ\n\
        AC00..D7A3 ; LV\n";

    let mut registry = PropertyRegistry::new();
    let runs = normalize(text, None, None, &mut registry);
    let table = encode(&runs).unwrap();

    let names: Vec<&str> = registry.names().collect();
    let data = BreakData {
        table: table.as_slice(),
        names: names.as_slice(),
    };

    // декодирование потока восстанавливает каждый диапазон байт-в-байт
    let decoded: Vec<(u32, u16, u16)> = data
        .runs()
        .map(|run| (run.start, run.length, run.property))
        .collect();

    let expected: Vec<(u32, u16, u16)> = runs
        .iter()
        .map(|run| (run.start, (run.end - run.start + 1) as u16, run.code))
        .collect();

    assert_eq!(decoded, expected);
    assert_eq!(table.len(), runs.len() * BREAK_RECORD_LENGTH);
}

#[test]
fn end_to_end_example()
{
    let text = "\
        0300..036F ; Extend\n\
        200D ; ZWJ\n";

    let mut registry = PropertyRegistry::new();
    let runs = normalize(text, None, None, &mut registry);
    let table = encode(&runs).unwrap();

    assert_eq!(table.len(), 16);

    let names: Vec<&str> = registry.names().collect();
    let data = BreakData {
        table: table.as_slice(),
        names: names.as_slice(),
    };

    let extend = data.code_for_name("Extend").unwrap();
    let zwj = data.code_for_name("ZWJ").unwrap();

    assert_eq!(data.property_of(0x301), extend);
    assert_eq!(data.property_of(0x200D), zwj);

    // кодпоинт вне диапазонов таблицы - дефолтное свойство
    assert_eq!(data.property_of(0x200E), 0);
}

#[test]
fn generation_is_deterministic()
{
    let text = "\
        0300..036F ; Extend\n\
        200D ; ZWJ\n\
        0600..0605 ; Prepend\n";

    let params = TableParams {
        name: "пример",
        const_prefix: "GBP",
    };

    let mut first_data = vec![];
    let mut first_consts = vec![];
    output::write(text, None, None, &params, &mut first_data, &mut first_consts).unwrap();

    let mut second_data = vec![];
    let mut second_consts = vec![];
    output::write(text, None, None, &params, &mut second_data, &mut second_consts).unwrap();

    // повторный запуск на тех же источниках даёт байт-в-байт тот же результат
    assert_eq!(first_data, second_data);
    assert_eq!(first_consts, second_consts);
    assert!(!first_data.is_empty());

    let consts = String::from_utf8(first_consts).unwrap();

    assert!(consts.contains("pub const GBP_OTHER: u16 = 0;"));
    assert!(consts.contains("pub const GBP_SOT: u16 = 1;"));
    assert!(consts.contains("pub const GBP_EOT: u16 = 2;"));
    assert!(consts.contains("pub const GBP_EXTEND: u16 = 3;"));
    assert!(consts.contains("pub const GBP_ZWJ: u16 = 4;"));
}
