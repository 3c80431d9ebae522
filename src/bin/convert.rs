//! One-shot command-line conversion
//!
//! Usage: unitconv-convert <category> <value> <from_unit> <to_unit>

use std::process::ExitCode;

fn usage() -> String {
    let units: Vec<String> = unitconv::conversion::Category::ALL
        .iter()
        .map(|c| format!("  {}: {}", c, c.unit_codes().join(", ")))
        .collect();
    format!(
        "Usage: unitconv-convert <category> <value> <from_unit> <to_unit>\n\nUnits:\n{}",
        units.join("\n")
    )
}

fn run(args: &[String]) -> Result<f64, Box<dyn std::error::Error>> {
    let [category, value, from_unit, to_unit] = args else {
        return Err(usage().into());
    };

    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("Could not parse value '{}': {}", value, e))?;

    Ok(unitconv::convert(category, value, from_unit, to_unit)?)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_converts() {
        assert_eq!(run(&args(&["length", "1", "m", "cm"])).unwrap(), 100.0);
        assert_eq!(run(&args(&["TEMP", "100", "C", "F"])).unwrap(), 212.0);
    }

    #[test]
    fn test_run_rejects_nan() {
        let err = run(&args(&["length", "NaN", "m", "cm"])).unwrap_err();
        assert!(err.to_string().starts_with("Value must be a finite number"));
    }

    #[test]
    fn test_run_wrong_arg_count_prints_usage() {
        let err = run(&args(&["length", "1", "m"])).unwrap_err();
        assert!(err.to_string().starts_with("Usage:"));
    }

    #[test]
    fn test_run_unparseable_value() {
        let err = run(&args(&["length", "ten", "m", "cm"])).unwrap_err();
        assert!(err.to_string().contains("'ten'"));
    }
}
