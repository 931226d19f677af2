use rpcguard_errors::{code_name, is_server_error, is_standard, lookup, ErrorObject, ALL};
use serde::Serialize;

use crate::cmd::CodesArgs;
use crate::exit::{usage_error, CliResult, SUCCESS};
use crate::output::{new_table, print_json, OutputFormat};

#[derive(Serialize)]
struct CodeEntry {
    code: i64,
    name: &'static str,
    message: String,
    standard: bool,
    server_error: bool,
}

#[derive(Serialize)]
struct CodesReport {
    schema_id: &'static str,
    codes: Vec<CodeEntry>,
}

pub fn run(args: CodesArgs, format: OutputFormat) -> CliResult<i32> {
    let entries: Vec<&ErrorObject> = match args.code {
        Some(code) => {
            let object = lookup(code)
                .ok_or_else(|| usage_error(format!("code {code} is not a reserved error code")))?;
            vec![object]
        }
        None => ALL.iter().collect(),
    };

    let report = CodesReport {
        schema_id: "https://schemas.3leaps.dev/rpcguard/cli/v1/error-codes.schema.json",
        codes: entries.iter().copied().map(entry).collect(),
    };

    print_codes(&report, format);
    Ok(SUCCESS)
}

fn entry(object: &ErrorObject) -> CodeEntry {
    CodeEntry {
        code: object.code,
        name: code_name(object.code),
        message: object.message.to_string(),
        standard: is_standard(object.code),
        server_error: is_server_error(object.code),
    }
}

fn print_codes(report: &CodesReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut table = new_table(vec!["CODE", "NAME", "MESSAGE", "RANGE"]);
            for entry in &report.codes {
                table.add_row(vec![
                    entry.code.to_string(),
                    entry.name.to_string(),
                    entry.message.clone(),
                    range_label(entry).to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for entry in &report.codes {
                println!(
                    "{} {} ({}) [{}]",
                    entry.code,
                    entry.message,
                    entry.name,
                    range_label(entry)
                );
            }
        }
        OutputFormat::Raw => {
            for entry in &report.codes {
                println!("{}", entry.code);
            }
        }
    }
}

fn range_label(entry: &CodeEntry) -> &'static str {
    if entry.standard {
        "standard"
    } else if entry.server_error {
        "server"
    } else {
        "internal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_covers_the_whole_table() {
        let entries: Vec<CodeEntry> = ALL.iter().map(entry).collect();
        assert_eq!(entries.len(), 9);
        assert!(entries.iter().any(|e| e.code == -32700 && e.standard));
        assert!(entries.iter().any(|e| e.code == -32002 && e.server_error));
    }

    #[test]
    fn range_labels_are_distinct_per_range() {
        let parse = entry(&rpcguard_errors::PARSE_ERROR);
        let internal = entry(&rpcguard_errors::INTERNAL_ERROR);
        let nonce = entry(&rpcguard_errors::NONCE_ERROR);
        assert_eq!(range_label(&parse), "standard");
        assert_eq!(range_label(&internal), "internal");
        assert_eq!(range_label(&nonce), "server");
    }
}
