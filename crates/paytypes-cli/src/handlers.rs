//! Command handlers.

use crate::config::{CliConfig, OutputFormat};
use console::style;
use paytypes_schema::{
    ObjectRegistry, PayloadValidator, ValidationIssue, ValidationReport, export_all,
    schema_for_object,
};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Target shape of `validate --object`.
pub struct Target {
    pub object: String,
    pub deleted: bool,
}

/// Report for one payload of one file.
#[derive(Debug, Serialize)]
pub struct PayloadResult {
    pub path: PathBuf,
    /// Position within an array or list envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub report: ValidationReport,
}

impl PayloadResult {
    /// A file that could not be read or parsed.
    fn unreadable(path: &Path, message: String) -> Self {
        Self {
            path: path.to_path_buf(),
            index: None,
            report: ValidationReport {
                errors: vec![ValidationIssue {
                    path: "/".to_string(),
                    message,
                    expected: None,
                    actual: None,
                }],
                ..Default::default()
            },
        }
    }
}

/// Split a file's JSON into payloads: array elements, the `data` of a list
/// envelope, or the value itself.
pub fn collect_payloads(value: Value) -> Vec<(Option<usize>, Value)> {
    let value = match value {
        Value::Object(mut map) if object_of_map(&map) == Some("list") => {
            match map.remove("data") {
                Some(data @ Value::Array(_)) => data,
                Some(other) => {
                    map.insert("data".to_string(), other);
                    Value::Object(map)
                }
                None => Value::Object(map),
            }
        }
        other => other,
    };

    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| (Some(idx), item))
            .collect(),
        single => vec![(None, single)],
    }
}

fn object_of_map(map: &serde_json::Map<String, Value>) -> Option<&str> {
    map.get("object").and_then(Value::as_str)
}

/// Validate every payload in `path`.
pub fn validate_file(
    validator: &PayloadValidator,
    path: &Path,
    target: Option<&Target>,
) -> Result<Vec<PayloadResult>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| format!("{}: invalid JSON: {}", path.display(), e))?;

    let results: Vec<PayloadResult> = collect_payloads(value)
        .into_iter()
        .map(|(index, payload)| {
            let report = match target {
                Some(t) => validator.validate_as(&t.object, t.deleted, &payload),
                None => validator.validate_object(&payload),
            };
            PayloadResult {
                path: path.to_path_buf(),
                index,
                report,
            }
        })
        .collect();

    tracing::debug!(path = %path.display(), payloads = results.len(), "Validated file");
    Ok(results)
}

/// Validate every file, reporting a file that cannot be read or parsed as a
/// failed result instead of stopping.
pub fn validate_files(
    validator: &PayloadValidator,
    paths: &[PathBuf],
    target: Option<&Target>,
) -> Vec<PayloadResult> {
    let mut results = Vec::new();
    for path in paths {
        match validate_file(validator, path, target) {
            Ok(file_results) => results.extend(file_results),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Could not validate file");
                results.push(PayloadResult::unreadable(path, e.to_string()));
            }
        }
    }
    results
}

/// Validate payload files.
pub fn validate(
    config: &CliConfig,
    paths: &[PathBuf],
    target: Option<Target>,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let strict = strict || config.strict;
    let validator = PayloadValidator::standard();
    let results = validate_files(&validator, paths, target.as_ref());

    match config.output_format {
        OutputFormat::Table => print_table(&results, strict),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&results)?),
    }

    let failed = results.iter().filter(|r| !r.report.passes(strict)).count();
    if failed > 0 {
        return Err(format!("{} of {} payload(s) failed validation", failed, results.len()).into());
    }

    Ok(())
}

fn print_table(results: &[PayloadResult], strict: bool) {
    for result in results {
        let location = match result.index {
            Some(idx) => format!("{}[{}]", result.path.display(), idx),
            None => result.path.display().to_string(),
        };
        let report = &result.report;
        let shape = if report.type_name.is_empty() {
            report.object.clone().unwrap_or_else(|| "?".to_string())
        } else {
            report.type_name.clone()
        };

        let mark = if !report.is_valid() {
            style("✗").red()
        } else if !report.is_clean() {
            if strict { style("✗").red() } else { style("!").yellow() }
        } else {
            style("✓").green()
        };
        println!("{} {} {}", mark, location, style(shape).dim());

        for issue in &report.errors {
            println!("    {} {}", style("error").red(), issue);
        }
        for warning in &report.warnings {
            println!("    {} {}", style("warning").yellow(), warning);
        }
    }
}

/// Print or write the schema of one object type.
pub fn schema(
    object: &str,
    deleted: bool,
    out: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ObjectRegistry::standard();
    let schema = schema_for_object(&registry, object, deleted)?;
    let json = serde_json::to_string_pretty(&schema)?;

    match out {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("{} Wrote {}", style("✓").green(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Write every schema.
pub fn export(config: &CliConfig, dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = dir.unwrap_or(config.schema_dir.as_path());
    let count = export_all(&ObjectRegistry::standard(), dir)?;

    println!(
        "{} Exported {} schemas to {}",
        style("✓").green(),
        count,
        dir.display()
    );
    Ok(())
}

/// List known object types.
pub fn objects(config: &CliConfig, markdown: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ObjectRegistry::standard();

    if markdown {
        print!("{}", registry.to_markdown());
        return Ok(());
    }

    #[derive(Serialize)]
    struct Row<'a> {
        object: &'a str,
        rust_type: &'a str,
        deleted: bool,
    }

    let rows: Vec<Row<'_>> = registry
        .entries()
        .map(|e| Row {
            object: e.object,
            rust_type: e.short_type_name(),
            deleted: e.deleted,
        })
        .collect();

    match config.output_format {
        OutputFormat::Table => {
            for row in &rows {
                let label = if row.deleted {
                    format!("{} (deleted)", row.object)
                } else {
                    row.object.to_string()
                };
                println!("  {:<40} {}", label, style(row.rust_type).dim());
            }
            println!("\n{} object shapes", rows.len());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&rows)?),
    }

    Ok(())
}

/// Show configuration.
pub fn show_config(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("Current configuration:");
    println!("  output_format: {:?}", config.output_format);
    println!("  strict: {}", config.strict);
    println!("  log_level: {}", config.log_level);
    println!("  schema_dir: {}", config.schema_dir.display());

    if let Ok(path) = CliConfig::config_path() {
        println!("\nConfig file: {}", path.display());
    }

    Ok(())
}

/// Set configuration.
pub fn set_config(key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    set_config_at(&CliConfig::config_path()?, key, value)?;
    println!("{} Set {} = {}", style("✓").green(), key, value);
    Ok(())
}

/// Update one key of the config file at `path`, leaving the file untouched
/// when it does not parse.
pub fn set_config_at(path: &Path, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::load_from(path)?;
    config.set(key, value)?;
    config.save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn coupon() -> Value {
        json!({
            "id": "c1",
            "object": "coupon",
            "created": 1700000000,
            "duration": "once",
            "livemode": false,
            "times_redeemed": 0,
            "valid": true
        })
    }

    #[test]
    fn test_collect_single_payload() {
        let payloads = collect_payloads(coupon());
        assert_eq!(payloads, vec![(None, coupon())]);
    }

    #[test]
    fn test_collect_array_and_list() {
        let array = collect_payloads(json!([coupon(), coupon()]));
        assert_eq!(array.len(), 2);
        assert_eq!(array[1].0, Some(1));

        let list = collect_payloads(json!({
            "object": "list",
            "data": [coupon()],
            "has_more": false,
            "url": "/v1/coupons"
        }));
        assert_eq!(list, vec![(Some(0), coupon())]);
    }

    #[test]
    fn test_validate_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coupons.json");
        let mut weekly = coupon();
        weekly["duration"] = json!("weekly");
        std::fs::write(&path, json!([coupon(), weekly]).to_string()).unwrap();

        let validator = PayloadValidator::standard();
        let results = validate_file(&validator, &path, None).unwrap();

        assert_eq!(results.len(), 2);
        assert!(results[0].report.is_clean());
        assert!(!results[1].report.is_valid());
    }

    #[test]
    fn test_validate_file_with_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coupon.json");
        std::fs::write(&path, coupon().to_string()).unwrap();

        let validator = PayloadValidator::standard();
        let target = Target {
            object: "customer".to_string(),
            deleted: false,
        };
        let results = validate_file(&validator, &path, Some(&target)).unwrap();

        assert_eq!(results[0].report.type_name, "Customer");
        assert_eq!(results[0].report.errors[0].path, "/object");
    }

    #[test]
    fn test_invalid_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();

        let err = validate_file(&PayloadValidator::standard(), &path, None).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_unreadable_file_does_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("coupon.json");
        std::fs::write(&good, coupon().to_string()).unwrap();
        let missing = dir.path().join("missing.json");
        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{").unwrap();

        let paths = vec![missing.clone(), good.clone(), broken.clone()];
        let results = validate_files(&PayloadValidator::standard(), &paths, None);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].path, missing);
        assert!(!results[0].report.is_valid());
        assert_eq!(results[1].path, good);
        assert!(results[1].report.is_clean());
        assert!(results[2].report.errors[0].message.contains("invalid JSON"));
    }

    #[test]
    fn test_set_config_keeps_unparsable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let original = "strict: true\noutput_format: xml\n";
        std::fs::write(&path, original).unwrap();

        assert!(set_config_at(&path, "log_level", "debug").is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn test_set_config_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "strict: true\n").unwrap();

        set_config_at(&path, "output_format", "json").unwrap();

        let config = CliConfig::load_from(&path).unwrap();
        assert!(config.strict);
        assert_eq!(config.output_format, OutputFormat::Json);
    }
}
