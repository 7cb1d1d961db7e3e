//! Утилиты форматирования чисел

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// ```text
/// format_number_with_decimals(1234.567, 2) → "1 234.57"
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    // Форматируем с нужным количеством знаков после запятой
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value), // По умолчанию 2 знака
    };

    // Разделяем целую и дробную части
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Форматирует денежное значение с 2 знаками после запятой и разделителем тысяч
///
/// ```text
/// format_money(1234567.89) → "1 234 567.89"
/// ```
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Сумма в рублях (ru-RU): 2 знака, запятая, знак валюты
///
/// ```text
/// format_currency_rub(1234.56) → "1 234,56 ₽"
/// ```
pub fn format_currency_rub(value: f64) -> String {
    format!("{} ₽", format_money(value).replace('.', ","))
}

/// Число в ru-RU без обязательных дробных знаков (не больше двух)
///
/// ```text
/// format_amount(1200.0) → "1 200"
/// format_amount(1234.5) → "1 234,5"
/// ```
pub fn format_amount(value: f64) -> String {
    let formatted = format_money(value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };
    trimmed.replace('.', ",")
}
