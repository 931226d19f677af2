use rpcguard_typecheck::{validate, validate_any, Descriptor, TypeMismatch, Value};
use serde::Serialize;

use crate::cmd::CheckArgs;
use crate::exit::{io_error, json_error, usage_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{new_table, print_json, OutputFormat};

#[derive(Serialize)]
struct Diagnosis {
    message: String,
    reference: &'static str,
}

#[derive(Serialize)]
struct CheckReport {
    schema_id: &'static str,
    value: String,
    kind: &'static str,
    expected: Vec<&'static str>,
    conforms: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnosis: Option<Diagnosis>,
}

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let descriptors = parse_descriptors(&args.types)?;

    let text = match (&args.value, &args.file) {
        (Some(value), _) => value.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|err| io_error("reading value file", err))?,
        (None, None) => return Err(usage_error("a JSON value or --file is required")),
    };

    let json: serde_json::Value =
        serde_json::from_str(text.trim()).map_err(|err| json_error("parsing value", err))?;
    let value = Value::from_json(&json);
    tracing::debug!(kind = value.kind(), types = ?args.types, "checking value");

    let outcome = match descriptors.as_slice() {
        [single] => validate(&value, *single),
        many => validate_any(&value, many),
    };

    let report = build_report(&value, &descriptors, outcome.err());
    print_report(&report, format);

    if report.conforms {
        Ok(SUCCESS)
    } else {
        Ok(DATA_INVALID)
    }
}

fn parse_descriptors(types: &[String]) -> CliResult<Vec<Descriptor>> {
    types
        .iter()
        .map(|name| {
            name.parse::<Descriptor>()
                .map_err(|err| usage_error(err.to_string()))
        })
        .collect()
}

fn build_report(
    value: &Value,
    descriptors: &[Descriptor],
    mismatch: Option<TypeMismatch>,
) -> CheckReport {
    CheckReport {
        schema_id: "https://schemas.3leaps.dev/rpcguard/cli/v1/check-report.schema.json",
        value: value.render(),
        kind: value.kind(),
        expected: descriptors.iter().map(Descriptor::name).collect(),
        conforms: mismatch.is_none(),
        diagnosis: mismatch.map(|mismatch| Diagnosis {
            message: mismatch.to_string(),
            reference: mismatch.reference,
        }),
    }
}

fn print_report(report: &CheckReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut table = new_table(vec!["VALUE", "KIND", "EXPECTED", "RESULT"]);
            table.add_row(vec![
                report.value.clone(),
                report.kind.to_string(),
                report.expected.join(", "),
                if report.conforms {
                    "conforms".to_string()
                } else {
                    "mismatch".to_string()
                },
            ]);
            println!("{table}");
            if let Some(diagnosis) = &report.diagnosis {
                println!("{}", diagnosis.message);
            }
        }
        OutputFormat::Pretty => {
            if report.conforms {
                println!(
                    "{} conforms to {}",
                    report.value,
                    report.expected.join(" | ")
                );
            } else if let Some(diagnosis) = &report.diagnosis {
                println!("{}", diagnosis.message);
            }
        }
        OutputFormat::Raw => {
            println!("{}", if report.conforms { "conforms" } else { "mismatch" });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_conforming_value_has_no_diagnosis() {
        let value = Value::from(2i64);
        let report = build_report(&value, &[Descriptor::Number], None);
        assert!(report.conforms);
        assert!(report.diagnosis.is_none());
        assert_eq!(report.expected, vec!["number"]);

        let json = serde_json::to_string(&report).expect("report should serialize");
        assert!(json.contains("\"conforms\":true"));
        assert!(!json.contains("\"diagnosis\""));
    }

    #[test]
    fn report_for_mismatch_carries_the_diagnosis() {
        let value = Value::from("2");
        let mismatch = validate(&value, Descriptor::Number).expect_err("text is not numeric");
        let report = build_report(&value, &[Descriptor::Number], Some(mismatch));

        assert!(!report.conforms);
        let diagnosis = report.diagnosis.as_ref().expect("diagnosis should be set");
        assert!(diagnosis.message.contains("is an invalid value"));
        assert!(diagnosis.reference.starts_with("https://"));
    }

    #[test]
    fn unknown_descriptor_is_a_usage_error() {
        let err = parse_descriptors(&["uint16".to_string()]).expect_err("uint16 is not a shape");
        assert_eq!(err.code, crate::exit::USAGE);
    }
}
