use super::*;
use crate::args::parsers::parse_duration_arg;

#[test]
fn parse_duration_bare_number_is_seconds() -> AppResult<()> {
    let duration = parse_duration_arg("5")?;
    if duration != Duration::from_secs(5) {
        return Err(AppError::validation("Expected 5s"));
    }
    Ok(())
}

#[test]
fn parse_duration_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("3s", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
        (" 4s ", Duration::from_secs(4)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "Unexpected duration for '{}': {:?}",
                input, parsed
            )));
        }
    }
    Ok(())
}

#[test]
fn parse_duration_rejects_invalid_values() -> AppResult<()> {
    let cases = ["", "0", "0ms", "abc", "5d", "-1"];
    for input in cases {
        if parse_duration_arg(input).is_ok() {
            return Err(AppError::validation(format!(
                "Expected '{}' to be rejected",
                input
            )));
        }
    }
    Ok(())
}

#[test]
fn parse_bool_env_accepts_common_spellings() -> AppResult<()> {
    for value in ["1", "true", "YES", "on"] {
        if !parse_bool_env(value)? {
            return Err(AppError::validation(format!("Expected true for {}", value)));
        }
    }
    for value in ["0", "false", "No", "off"] {
        if parse_bool_env(value)? {
            return Err(AppError::validation(format!("Expected false for {}", value)));
        }
    }
    if parse_bool_env("maybe").is_ok() {
        return Err(AppError::validation("Expected 'maybe' to be rejected"));
    }
    Ok(())
}
