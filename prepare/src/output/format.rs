/// представить байты таблицы в текстовом виде
pub fn format_bytes(input: &[u8], boundary: usize) -> String
{
    let mut output = String::new();

    let mut cur_len = boundary;

    for &e in input {
        let e_str = match e == 0 {
            true => "0, ".to_owned(),
            false => format!("0x{:X}, ", e),
        };

        match cur_len + e_str.len() > boundary {
            true => {
                output.push_str("\n    ");
                cur_len = e_str.len();
            }
            false => {
                cur_len += e_str.len();
            }
        };

        output.push_str(e_str.as_str());
    }
    output.push('\n');

    output
}

/// представить список названий свойств в текстовом виде
pub fn format_names<'a>(input: impl Iterator<Item = &'a str>, boundary: usize) -> String
{
    let mut output = String::new();

    let mut cur_len = boundary;

    for e in input {
        let e_str = format!("\"{}\", ", e);

        match cur_len + e_str.len() > boundary {
            true => {
                output.push_str("\n    ");
                cur_len = e_str.len();
            }
            false => {
                cur_len += e_str.len();
            }
        };

        output.push_str(e_str.as_str());
    }
    output.push('\n');

    output
}
