use prettytable::{row, Cell, Row, Table};

use crate::lookup::result::{value_to_text, LookupResult};

pub const NO_RESULTS_MSG: &str = "No results found.";

pub struct Output;

impl Output {
    pub fn company_table(results: &[LookupResult]) -> Table {
        let mut table = Table::new();
        table.set_titles(row![b->"MAC", b->"Company"]);
        for result in results {
            let company = result.company_name().unwrap_or_else(|| "N/A".to_string());
            table.add_row(row![result.mac(), company]);
        }
        table
    }

    /// One row per vendor field, the MAC only on the first row of its group.
    pub fn field_table(results: &[LookupResult]) -> Table {
        let mut table = Table::new();
        table.set_titles(row![b->"MAC", b->"Field", b->"Value"]);
        for result in results {
            if result.fields().is_empty() {
                table.add_row(row![result.mac(), "", "N/A"]);
                continue;
            }
            for (i, (name, value)) in result.fields().iter().enumerate() {
                let mac = if i == 0 { result.mac() } else { "" };
                let text = value_to_text(value).unwrap_or_else(|| "N/A".to_string());
                table.add_row(Row::new(vec![
                    Cell::new(mac),
                    Cell::new(name),
                    Cell::new(&text),
                ]));
            }
        }
        table
    }

    pub fn json(results: &[LookupResult]) -> serde_json::Result<String> {
        serde_json::to_string_pretty(results)
    }

    pub fn format_results(results: &[LookupResult], all_fields: bool) -> String {
        if results.is_empty() {
            return NO_RESULTS_MSG.to_string();
        }
        if all_fields {
            Output::field_table(results).to_string()
        } else {
            Output::company_table(results).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn acme() -> LookupResult {
        LookupResult::from_vendor_details(
            "AA:BB:CC:DD:EE:FF",
            &json!({"companyName": "Acme", "countryCode": "US"}),
        )
        .unwrap()
    }

    #[test]
    fn company_table_has_header_and_row() {
        let rendered = Output::format_results(&[acme()], false);
        assert!(rendered.contains("MAC"));
        assert!(rendered.contains("Company"));
        assert!(rendered.contains("AA:BB:CC:DD:EE:FF"));
        assert!(rendered.contains("Acme"));
        assert!(!rendered.contains("countryCode") && !rendered.contains("countrycode"));
    }

    #[test]
    fn missing_company_renders_placeholder() {
        let unknown = LookupResult::from_vendor_details("AABBCCDDEEFF", &json!(null)).unwrap();
        assert!(Output::format_results(&[unknown], false).contains("N/A"));
    }

    #[test]
    fn field_table_lists_every_field() {
        let rendered = Output::format_results(&[acme()], true);
        assert!(rendered.contains("companyname"));
        assert!(rendered.contains("countrycode"));
        assert!(rendered.contains("US"));
    }

    #[test]
    fn empty_results_print_message() {
        assert_eq!(Output::format_results(&[], false), NO_RESULTS_MSG);
        assert_eq!(Output::format_results(&[], true), NO_RESULTS_MSG);
    }

    #[test]
    fn json_output_is_an_array_of_flat_records() {
        let parsed: serde_json::Value =
            serde_json::from_str(&Output::json(&[acme()]).unwrap()).unwrap();
        assert_eq!(parsed[0]["mac"], "AA:BB:CC:DD:EE:FF");
        assert_eq!(parsed[0]["companyname"], "Acme");
    }
}
