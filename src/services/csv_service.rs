use crate::errors::{AppErrors, AppResult};
use crate::models::csv_models::query::{InputRow, OutputRow};
use crate::models::dimension::Dimension;
use crate::scaler::RatioScaler;
use csv::{ReaderBuilder, WriterBuilder};
use log::error;
use std::fs::File;
use std::io::{BufReader, Read, Write};

/// Runs every query in a CSV file against the scaler.
///
/// # Arguments
/// * `path` - The file path to a CSV file with `by,amount` rows.
/// * `scaler` - The scaler the queries are answered by.
///
/// # Returns
/// * `AppResult<Vec<OutputRow>>` - One row per valid query, in input order, or
///   `AppErrors::Io` if the file cannot be opened.
pub fn run_from_csv_path(path: &str, scaler: &RatioScaler) -> AppResult<Vec<OutputRow>> {
    let file = File::open(path).map_err(|e| AppErrors::Io(format!("open {path}: {e}")))?;
    run_from_reader(BufReader::new(file), scaler)
}

/// Same as [`run_from_csv_path`] over any reader. Rows that cannot be parsed or
/// that carry a bad dimension or amount are logged and skipped.
pub fn run_from_reader<R: Read>(reader: R, scaler: &RatioScaler) -> AppResult<Vec<OutputRow>> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut out = Vec::new();
    for rec in rdr.deserialize::<InputRow>() {
        match rec {
            Ok(row) => match row_to_query(row) {
                Ok((by, amount)) => {
                    let res = scaler.by(by, amount);
                    out.push(OutputRow::from((by, amount, &res)));
                }
                Err(e) => {
                    error!("skip row: {e}");
                }
            },
            Err(e) => {
                error!("skip malformed CSV row: {e}");
            }
        }
    }
    Ok(out)
}

/// Writes result rows as CSV, with a header line.
pub fn write_rows<W: Write>(rows: &[OutputRow], writer: W) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppErrors::Io(format!("write csv: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| AppErrors::Io(format!("flush csv: {e}")))?;
    Ok(())
}

/// Checks a query amount the way callers of the scaler are expected to.
pub fn check_amount(amount: f64) -> AppResult<f64> {
    if !amount.is_finite() {
        return Err(AppErrors::InvalidInput(format!(
            "amount must be a finite number, got {amount}"
        )));
    }
    if amount < 0.0 {
        return Err(AppErrors::InvalidInput(format!(
            "amount must be >= 0, got {amount}"
        )));
    }
    Ok(amount)
}

fn row_to_query(row: InputRow) -> AppResult<(Dimension, f64)> {
    let by = row.by;
    let s = row
        .amount
        .ok_or_else(|| AppErrors::InvalidInput(format!("{by} query missing amount")))?;
    let amount: f64 = s
        .parse()
        .map_err(|_| AppErrors::InvalidInput(format!("bad amount `{s}`")))?;
    Ok((by, check_amount(amount)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ratio_config::RatioOptions;

    fn scaler() -> RatioScaler {
        RatioScaler::new(RatioOptions {
            coffee_ratio: Some(2.0),
            sugar_ratio: Some(1.0),
            creamer_ratio: Some(1.0),
            water_ratio: Some(20.0),
            super_accurate: None,
        })
        .unwrap()
    }

    #[test]
    fn runs_queries_in_input_order() {
        // arrange
        let input = "by,amount\ncoffee,10\nwater, 40\ntotal,24\n";

        // act
        let rows = run_from_reader(input.as_bytes(), &scaler()).unwrap();

        // assert
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].by, Some(Dimension::Coffee));
        assert_eq!(rows[0].water, 100.0);
        assert_eq!(rows[0].total, 120.0);
        assert_eq!(rows[1].by, Some(Dimension::Water));
        assert_eq!(rows[1].coffee, 4.0);
        assert_eq!(rows[2].ingredients, 4.0);
    }

    #[test]
    fn bad_rows_are_skipped() {
        // arrange
        let input = "by,amount\n\
                     milk,3\n\
                     sugar\n\
                     sugar,abc\n\
                     sugar,-1\n\
                     sugar,inf\n\
                     creamer,2.5\n";

        // act
        let rows = run_from_reader(input.as_bytes(), &scaler()).unwrap();

        // assert
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].by, Some(Dimension::Creamer));
        assert_eq!(rows[0].amount, Some(2.5));
        assert_eq!(rows[0].coffee, 5.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let res = run_from_csv_path("/definitely/not/here.csv", &scaler());
        assert!(matches!(res, Err(AppErrors::Io(_))));
    }

    #[test]
    fn writes_header_and_rows() {
        // arrange
        let s = scaler();
        let res = s.by_coffee(10.0);
        let rows = vec![OutputRow::from((Dimension::Coffee, 10.0, &res))];
        let mut buf = Vec::new();

        // act
        write_rows(&rows, &mut buf).unwrap();

        // assert
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("by,amount,coffee,sugar,creamer,water,ingredients,total")
        );
        assert_eq!(lines.next(), Some("coffee,10.0,10.0,5.0,5.0,100.0,20.0,120.0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn base_row_has_empty_query_columns() {
        // arrange
        let rows = vec![
            OutputRow::base(&RatioScaler::default().base().as_result()),
            OutputRow::from((Dimension::Coffee, 1.0, &RatioScaler::default().by_coffee(1.0))),
        ];
        let mut buf = Vec::new();

        // act
        write_rows(&rows, &mut buf).unwrap();

        // assert
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], ",,1.0,1.0,1.0,24.0,3.0,27.0");
        assert_eq!(lines[2], "coffee,1.0,1.0,1.0,1.0,24.0,3.0,27.0");
    }

    #[test]
    fn check_amount_rejects_negative_and_nan() {
        assert_eq!(check_amount(0.0).unwrap(), 0.0);
        assert!(matches!(check_amount(-0.1), Err(AppErrors::InvalidInput(_))));
        assert!(matches!(check_amount(f64::NAN), Err(AppErrors::InvalidInput(_))));
    }
}
