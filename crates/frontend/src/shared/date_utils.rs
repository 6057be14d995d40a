/// Utilities for date formatting
///
/// Delivery dates are calendar dates; no time zone conversion ever happens.
use chrono::NaiveDate;

/// Label shown when an order has no delivery date
pub const NO_DATE_LABEL: &str = "Sin fecha";

/// Format a delivery date as DD/MM/YYYY
/// Example: 2024-03-15 -> "15/03/2024", None -> "Sin fecha"
pub fn format_delivery_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => NO_DATE_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_delivery_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(format_delivery_date(date), "15/03/2024");
        assert_eq!(format_delivery_date(None), "Sin fecha");
    }
}
