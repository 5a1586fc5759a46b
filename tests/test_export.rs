use chrono::{TimeZone, Utc};
use pwforge::charset::{CharacterClass, CharsetConfig};
use pwforge::entropy::RngIndexSource;
use pwforge::export::*;
use pwforge::passgen::{GenerationRequest, PasswordGenerator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_csv_formula_cells_neutralised() {
        assert_eq!(csv_text_field("=1+2"), "'=1+2");
        assert_eq!(csv_text_field("+abc"), "'+abc");
        assert_eq!(csv_text_field("-x"), "'-x");
        assert_eq!(csv_text_field("@SUM(A1)"), "'@SUM(A1)");
        assert_eq!(csv_text_field("\tab"), "'\tab");
        assert_eq!(csv_text_field("=a,b"), "\"'=a,b\"");
        assert_eq!(csv_text_field("a=b"), "a=b");
    }

    #[test]
    fn test_csv_password_column_cannot_start_formula() {
        let config = CharsetConfig::with_custom_special("=").unwrap();
        let generator = PasswordGenerator::new(config);
        let request = GenerationRequest {
            length: 6,
            classes: vec![CharacterClass::Special],
            count: 2,
            ..Default::default()
        };
        let batch = generator.generate_batch(&request, &mut RngIndexSource::seeded(9)).unwrap();
        assert_eq!(batch[0].password.as_str(), "======");

        let mut buf = Vec::new();
        write_csv(&mut buf, &batch, Utc::now()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for line in text.lines().skip(1) {
            let password_cell = line.split(',').nth(1).unwrap();
            assert_eq!(password_cell, "'======");
        }
    }

    #[test]
    fn test_write_csv() {
        let generator = PasswordGenerator::default();
        let request = GenerationRequest { length: 12, count: 3, ..Default::default() };
        let batch = generator.generate_batch(&request, &mut RngIndexSource::seeded(5)).unwrap();
        let stamp = Utc.with_ymd_and_hms(2025, 8, 12, 9, 30, 0).unwrap();

        let mut buf = Vec::new();
        write_csv(&mut buf, &batch, stamp).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("1,"));
        assert!(lines[3].starts_with("3,"));
        assert!(lines.iter().skip(1).all(|l| l.ends_with("2025-08-12T09:30:00Z")));
        for (line, item) in lines.iter().skip(1).zip(&batch) {
            assert!(line.contains(&csv_text_field(item.password.as_str())));
            assert!(line.contains(item.assessment.label.as_str()));
        }
    }

    #[test]
    fn test_write_json() {
        let generator = PasswordGenerator::default();
        let request = GenerationRequest { count: 2, ..Default::default() };
        let batch = generator.generate_batch(&request, &mut RngIndexSource::seeded(6)).unwrap();
        let stamp = Utc.with_ymd_and_hms(2025, 8, 12, 9, 30, 0).unwrap();

        let mut buf = Vec::new();
        write_json(&mut buf, &batch, stamp).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["index"], 1);
        assert_eq!(items[0]["password"], batch[0].password.as_str());
        assert_eq!(items[0]["length"], 16);
        assert_eq!(items[1]["score"], batch[1].assessment.score);
        assert_eq!(items[1]["strength"], batch[1].assessment.label.as_str());
    }

    #[test]
    fn test_empty_batch_csv() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[], Utc::now()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{}\n", CSV_HEADER));
    }
}
