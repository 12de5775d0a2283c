use chrono::NaiveDateTime;

/// Day-level date as shown in list rows and comment headers.
pub fn display_date(dt: NaiveDateTime) -> String {
    dt.format("%d.%m.%Y").to_string()
}
