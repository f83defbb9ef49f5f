//! Утилиты форматирования денежных сумм и размеров файлов (локаль ru-RU)

/// Неразрывный пробел: разделитель разрядов и отступ перед символом валюты в ru-RU
const NBSP: char = '\u{a0}';

/// Вставляет разделитель каждые 3 цифры с конца целой части
fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}

/// Форматирует число с разделителем разрядов и запятой в качестве десятичного разделителя
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_decimal;
/// assert_eq!(format_decimal(1234567.891, 2), "1\u{a0}234\u{a0}567,89");
/// ```
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    let grouped = group_thousands(integer_part, NBSP);

    match fraction_part {
        Some(f) => format!("{}{},{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Символ валюты по ISO-коду; неизвестные коды выводятся как есть
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "RUB" => "₽",
        "USD" => "$",
        "EUR" => "€",
        other => other,
    }
}

/// Денежная сумма как в `Intl.NumberFormat('ru-RU', { style: 'currency' })`
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_currency;
/// assert_eq!(format_currency(1234.5, "RUB"), "1\u{a0}234,50\u{a0}₽");
/// ```
pub fn format_currency(value: f64, currency: &str) -> String {
    format!("{}{}{}", format_decimal(value, 2), NBSP, currency_symbol(currency))
}

/// Человекочитаемый размер файла: "512 Б", "1,5 МБ"
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Б", "КБ", "МБ", "ГБ"];
    if bytes < 1024 {
        return format!("{} {}", bytes, UNITS[0]);
    }
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{} {}", format_decimal(size, 1), UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5, "RUB"), "1\u{a0}234,50\u{a0}₽");
        assert_eq!(format_currency(1234567.891, "RUB"), "1\u{a0}234\u{a0}567,89\u{a0}₽");
        assert_eq!(format_currency(0.0, "RUB"), "0,00\u{a0}₽");
        assert_eq!(format_currency(999.999, "USD"), "1\u{a0}000,00\u{a0}$");
        assert_eq!(format_currency(12.0, "KZT"), "12,00\u{a0}KZT");
    }

    #[test]
    fn test_format_currency_is_deterministic() {
        let first = format_currency(1234.5, "RUB");
        for _ in 0..10 {
            assert_eq!(format_currency(1234.5, "RUB"), first);
        }
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_currency(-1234.56, "RUB"), "-1\u{a0}234,56\u{a0}₽");
        assert_eq!(format_currency(-0.001, "RUB"), "0,00\u{a0}₽");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(100.0, 0), "100");
        assert_eq!(format_decimal(123456.0, 0), "123\u{a0}456");
        assert_eq!(format_decimal(1.26, 1), "1,3");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 Б");
        assert_eq!(format_file_size(1536), "1,5 КБ");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5,0 МБ");
    }
}
