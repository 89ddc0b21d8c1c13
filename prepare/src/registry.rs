use std::collections::HashMap;

/// зарезервированное свойство - кодпоинты, не покрытые таблицей
pub const PROP_OTHER: &str = "Other";
/// зарезервированное синтетическое свойство - начало текста
pub const PROP_SOT: &str = "SOT";
/// зарезервированное синтетическое свойство - конец текста
pub const PROP_EOT: &str = "EOT";

/// реестр свойств сегментации: название <-> код
///
/// коды выделяются в порядке первого появления названия; реестр только растёт,
/// его время жизни - один запуск генерации
pub struct PropertyRegistry
{
    names: Vec<String>,
    codes: HashMap<String, u16>,
}

impl PropertyRegistry
{
    /// новый реестр; Other / SOT / EOT получают коды 0 / 1 / 2 до разбора источников
    pub fn new() -> Self
    {
        let mut registry = Self {
            names: vec![],
            codes: HashMap::new(),
        };

        registry.code_for(PROP_OTHER);
        registry.code_for(PROP_SOT);
        registry.code_for(PROP_EOT);

        registry
    }

    /// код свойства; неизвестное название получает следующий свободный код
    pub fn code_for(&mut self, name: &str) -> u16
    {
        if let Some(&code) = self.codes.get(name) {
            return code;
        }

        let code = self.names.len() as u16;

        self.names.push(name.to_owned());
        self.codes.insert(name.to_owned(), code);

        code
    }

    /// название свойства по коду
    pub fn name_for(&self, code: u16) -> Option<&str>
    {
        self.names.get(code as usize).map(|name| name.as_str())
    }

    /// названия свойств в порядке кодов
    pub fn names(&self) -> impl Iterator<Item = &str>
    {
        self.names.iter().map(|name| name.as_str())
    }

    /// количество свойств в реестре, включая зарезервированные
    pub fn len(&self) -> usize
    {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.names.is_empty()
    }
}

impl Default for PropertyRegistry
{
    fn default() -> Self
    {
        Self::new()
    }
}
