//  ____              _____
// |  _ \__      __   |  ___|__  _ __ __ _  ___
// | |_) \ \ /\ / /   | |_ / _ \| '__/ _` |/ _ \
// |  __/ \ V  V /    |  _| (_) | | | (_| |  __/
// |_|     \_/\_/     |_|  \___/|_|  \__, |\___|
//                                   |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Batch export (CSV / JSON)

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::io::{self, Write};

use crate::passgen::GeneratedPassword;

pub const CSV_HEADER: &str = "index,password,length,score,strength,suggestions,generated_at";

// 导出记录
#[derive(Debug, Serialize)]
pub struct ExportRecord<'a> {
    pub index: usize,
    pub password: &'a str,
    pub length: usize,
    pub score: i32,
    pub strength: &'static str,
    pub suggestions: &'a [String],
    pub generated_at: String,
}

pub fn records<'a>(batch: &'a [GeneratedPassword], generated_at: DateTime<Utc>) -> Vec<ExportRecord<'a>> {
    let stamp = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    batch
        .iter()
        .enumerate()
        .map(|(i, item)| ExportRecord {
            index: i + 1,
            password: item.password.as_str(),
            length: item.password.len(),
            score: item.assessment.score,
            strength: item.assessment.label.as_str(),
            suggestions: &item.assessment.suggestions,
            generated_at: stamp.clone(),
        })
        .collect()
}

/// Quote a CSV field when it holds a delimiter, a quote or a line break.
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Like [`csv_field`], but a leading `=`, `+`, `-`, `@`, tab or carriage
/// return gets a `'` prefix so spreadsheets read the cell as text.
pub fn csv_text_field(value: &str) -> String {
    if value.starts_with(['=', '+', '-', '@', '\t', '\r']) {
        csv_field(&format!("'{}", value))
    } else {
        csv_field(value)
    }
}

pub fn write_csv<W: Write>(
    writer: &mut W,
    batch: &[GeneratedPassword],
    generated_at: DateTime<Utc>,
) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for record in records(batch, generated_at) {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            record.index,
            csv_text_field(record.password),
            record.length,
            record.score,
            csv_field(record.strength),
            csv_field(&record.suggestions.join("; ")),
            record.generated_at,
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(
    writer: &mut W,
    batch: &[GeneratedPassword],
    generated_at: DateTime<Utc>,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &records(batch, generated_at))?;
    writeln!(writer)?;
    Ok(())
}
