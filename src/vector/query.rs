//! Query parsing
//!
//! Turns one line of user input into a query vector.

use crate::error::{Result, SimrankError};

/// Parse `input` into exactly `dimension` finite numbers.
///
/// Components may be separated by whitespace, commas, or both.
pub fn parse_query(input: &str, dimension: usize) -> Result<Vec<f64>> {
    let query = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| match t.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            Ok(_) => Err(SimrankError::InputParse(format!(
                "'{}' is not a finite number",
                t
            ))),
            Err(_) => Err(SimrankError::InputParse(format!(
                "'{}' is not a number",
                t
            ))),
        })
        .collect::<Result<Vec<f64>>>()?;

    if query.len() != dimension {
        return Err(SimrankError::InputParse(format!(
            "expected {} values, got {}",
            dimension,
            query.len()
        )));
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse_query("1 2 3", 3).unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(
            parse_query("  0.5\t-2   1e2 \n", 3).unwrap(),
            vec![0.5, -2.0, 100.0]
        );
    }

    #[test]
    fn test_parse_commas() {
        assert_eq!(parse_query("1,2, 3", 3).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_wrong_count() {
        let err = parse_query("1 2", 3).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: expected 3 values, got 2");
        assert!(matches!(
            parse_query("1 2 3 4", 3),
            Err(SimrankError::InputParse(_))
        ));
        assert!(matches!(parse_query("", 3), Err(SimrankError::InputParse(_))));
    }

    #[test]
    fn test_not_a_number() {
        let err = parse_query("1 two 3", 3).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: 'two' is not a number");
    }

    #[test]
    fn test_non_finite() {
        assert!(matches!(
            parse_query("1 NaN 3", 3),
            Err(SimrankError::InputParse(_))
        ));
        assert!(matches!(
            parse_query("inf 0 0", 3),
            Err(SimrankError::InputParse(_))
        ));
    }
}
