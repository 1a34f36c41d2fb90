use lazy_static::lazy_static;
use regex::Regex;

/// A single food report pulled out of an SMS line, e.g. `BEANS 1C`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFoodItem {
    /// Lowercased food token, ready for table lookup.
    pub food_name: String,
    pub quantity: f64,
    /// Quantity exactly as sent, unit suffix included (`1C`, `2.5KG`).
    pub quantity_text: String,
}

lazy_static! {
    // One uppercase token, whitespace, a number, an optional unit of letters.
    static ref FOOD_LOG_RE: Regex =
        Regex::new(r"^([A-Z]+)\s+([0-9]+(?:\.[0-9]*)?|\.[0-9]+)([a-zA-Z]*)$").unwrap();
}

/// Parses one line of free text. `None` is the normal outcome for anything
/// that is not a `FOOD QTY[UNIT]` message.
pub fn parse_food_log(raw_body: &str) -> Option<ParsedFoodItem> {
    let caps = FOOD_LOG_RE.captures(raw_body.trim())?;
    let number = caps.get(2)?.as_str();
    let quantity = number.parse::<f64>().ok().filter(|q| q.is_finite())?;
    let unit = caps.get(3).map(|m| m.as_str()).unwrap_or_default();

    Some(ParsedFoodItem {
        food_name: caps.get(1)?.as_str().to_lowercase(),
        quantity,
        quantity_text: format!("{}{}", number, unit),
    })
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn parses_food_and_cup_quantity() {
        let item = parse_food_log("BEANS 1C").unwrap();
        assert_eq!(item.food_name, "beans");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.quantity_text, "1C");
    }

    #[test]
    fn accepts_decimal_quantity_with_unit() {
        let item = parse_food_log("RICE 2.5KG").unwrap();
        assert_eq!(item.food_name, "rice");
        assert_eq!(item.quantity, 2.5);
    }

    #[test]
    fn accepts_bare_number_and_surrounding_whitespace() {
        let item = parse_food_log("  MILK   2  ").unwrap();
        assert_eq!(item.food_name, "milk");
        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.quantity_text, "2");
    }

    #[test]
    fn rejects_lowercase_food_token() {
        assert_eq!(parse_food_log("beans 1c"), None);
        assert_eq!(parse_food_log("Beans 1C"), None);
    }

    #[test]
    fn rejects_missing_quantity() {
        assert_eq!(parse_food_log("BEANS"), None);
        assert_eq!(parse_food_log("BEANS C"), None);
    }

    #[test]
    fn rejects_multi_word_food() {
        assert_eq!(parse_food_log("RED BEANS 1C"), None);
    }

    #[test]
    fn rejects_malformed_numbers_and_trailing_text() {
        assert_eq!(parse_food_log("BEANS 1.2.3C"), None);
        assert_eq!(parse_food_log("BEANS 1C today"), None);
        assert_eq!(parse_food_log(""), None);
    }

    #[test]
    fn rejects_quantity_too_large_for_a_float() {
        let huge = format!("MILK {}", "9".repeat(400));
        assert_eq!(parse_food_log(&huge), None);
        assert_eq!(parse_food_log(&format!("{}C", huge)), None);
    }

    #[test]
    fn parsing_is_deterministic() {
        for s in ["BEANS 1C", "beans", "EGGS 3", "RED BEANS 1C"] {
            assert_eq!(parse_food_log(s), parse_food_log(s));
        }
    }
}
