// ============================================================================
// CSV PARSER - uploaded sales file -> monthly series
// ============================================================================

use crate::models::SalesRecord;

/// Parse the raw text of an uploaded CSV file into the monthly sales series.
///
/// Line 0 is always treated as a header and skipped, whatever it contains:
/// a headerless file silently loses its first data row. Blank lines emit
/// nothing. Everything else becomes a record in file order; month labels are
/// not validated against a calendar and duplicates pass through. A row with
/// a non-numeric or missing sales/forecast field is NOT rejected, the value
/// becomes NaN and the record is still emitted.
pub fn parse_sales_csv(content: &str) -> Vec<SalesRecord> {
    let mut records = Vec::new();

    for line in content.split('\n').skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Positional fields: month, sales, forecast. Extra fields are ignored.
        let mut fields = line.split(',');
        let month = fields.next().unwrap_or("").trim().to_string();
        let sales = parse_number(fields.next());
        let forecast = parse_number(fields.next());

        records.push(SalesRecord {
            month,
            sales,
            forecast,
        });
    }

    records
}

fn parse_number(field: Option<&str>) -> f64 {
    field
        .and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_file_in_order() {
        let input = "Month,Sales,Forecast\nJan,45000,48000\nFeb,52000,54000";
        let records = parse_sales_csv(input);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].month, "Jan");
        assert_eq!(records[0].sales, 45000.0);
        assert_eq!(records[0].forecast, 48000.0);
        assert_eq!(records[1].month, "Feb");
        assert_eq!(records[1].sales, 52000.0);
        assert_eq!(records[1].forecast, 54000.0);
    }

    #[test]
    fn header_only_and_blank_lines_yield_nothing() {
        assert!(parse_sales_csv("Month,Sales,Forecast\n\n").is_empty());
        assert!(parse_sales_csv("Month,Sales,Forecast").is_empty());
        assert!(parse_sales_csv("").is_empty());
    }

    #[test]
    fn header_is_skipped_even_when_it_is_data() {
        // Known quirk: a headerless file loses its first row.
        let records = parse_sales_csv("Jan,45000,48000\nFeb,52000,54000");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].month, "Feb");
    }

    #[test]
    fn non_numeric_field_becomes_nan_without_rejecting_the_row() {
        let records = parse_sales_csv("Month,Sales,Forecast\nMar,abc,51000");
        assert_eq!(records.len(), 1);
        assert!(records[0].sales.is_nan());
        assert_eq!(records[0].forecast, 51000.0);
    }

    #[test]
    fn missing_fields_parse_as_nan() {
        let records = parse_sales_csv("Month,Sales,Forecast\nApr");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].month, "Apr");
        assert!(records[0].sales.is_nan());
        assert!(records[0].forecast.is_nan());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let records = parse_sales_csv("Month,Sales,Forecast\nMay,1000,1100,extra,junk");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sales, 1000.0);
        assert_eq!(records[0].forecast, 1100.0);
    }

    #[test]
    fn fields_are_trimmed_and_crlf_is_tolerated() {
        let records = parse_sales_csv("Month,Sales,Forecast\r\n Jun , 67000 , 69000 \r\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].month, "Jun");
        assert_eq!(records[0].sales, 67000.0);
        assert_eq!(records[0].forecast, 69000.0);
    }

    #[test]
    fn parsing_is_idempotent() {
        let input = "Month,Sales,Forecast\nJan,45000,48000\nFeb,52000,54000";
        assert_eq!(parse_sales_csv(input), parse_sales_csv(input));
    }

    #[test]
    fn duplicate_months_are_kept_in_file_order() {
        let records = parse_sales_csv("Month,Sales,Forecast\nJan,1,2\nJan,3,4");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sales, 1.0);
        assert_eq!(records[1].sales, 3.0);
    }
}
