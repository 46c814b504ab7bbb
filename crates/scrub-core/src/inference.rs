//! Column type inference.
//!
//! Missing cells (`Null` or `""`) are ignored. The remaining values are:
//! 1. `Numeric` when every one reads as a finite number (blank strings count)
//! 2. `Text` when every one is a string
//! 3. `Mixed` otherwise
//!
//! A column with no present values is `Mixed`.

use scrub_model::{InferredType, Value};

/// Classifies a sequence of cell values.
pub fn classify<'a, I>(values: I) -> InferredType
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut seen_any = false;
    let mut all_numeric = true;
    let mut all_text = true;

    for value in values.into_iter().filter(|v| !v.is_missing()) {
        seen_any = true;
        if value.numeric_value().is_none() {
            all_numeric = false;
        }
        if value.as_text().is_none() {
            all_text = false;
        }
        if !all_numeric && !all_text {
            break;
        }
    }

    if !seen_any {
        InferredType::Mixed
    } else if all_numeric {
        InferredType::Numeric
    } else if all_text {
        InferredType::Text
    } else {
        InferredType::Mixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(values: &[&str]) -> Vec<Value> {
        values.iter().map(|v| Value::text(*v)).collect()
    }

    #[test]
    fn numeric_strings_and_numbers_are_numeric() {
        let mut values = text(&["1", " 2.5 ", "-3e2"]);
        values.push(Value::Number(4.0));
        assert_eq!(classify(&values), InferredType::Numeric);
    }

    #[test]
    fn missing_values_are_ignored() {
        let values = vec![Value::Null, Value::text(""), Value::text("10")];
        assert_eq!(classify(&values), InferredType::Numeric);
    }

    #[test]
    fn whitespace_only_string_is_numeric_compatible() {
        assert_eq!(classify(&text(&["   ", "7"])), InferredType::Numeric);
    }

    #[test]
    fn strings_are_text() {
        assert_eq!(classify(&text(&["apple", "12"])), InferredType::Text);
    }

    #[test]
    fn numbers_and_words_are_mixed() {
        let values = vec![Value::Number(1.0), Value::text("apple")];
        assert_eq!(classify(&values), InferredType::Mixed);
    }

    #[test]
    fn all_missing_is_mixed() {
        assert_eq!(classify(&[]), InferredType::Mixed);
        assert_eq!(
            classify(&[Value::Null, Value::text("")]),
            InferredType::Mixed
        );
    }

    #[test]
    fn non_finite_text_is_not_numeric() {
        assert_eq!(classify(&text(&["1", "inf"])), InferredType::Text);
    }
}
