use chrono::{Datelike, NaiveDate};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Whole years between `date_of_birth` and `today`.
///
/// A birthday not yet reached in `today`'s year does not count. Birth dates
/// in the future yield 0.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Strip leading and trailing whitespace without reallocating untouched text
pub fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Serde adapter for calendar dates.
///
/// Writes `YYYY-MM-DD`. Reads either a bare date or a datetime string whose
/// date part comes first (`1980-01-01T00:00:00`, `1980-01-01T00:00:00Z`).
pub mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let date_part = raw.split('T').next().unwrap_or_default().trim();
        NaiveDate::parse_from_str(date_part, FORMAT)
            .map_err(|e| D::Error::custom(format!("invalid date '{}': {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_in_place() {
        let mut padded = "  Engineering \t".to_string();
        trim_in_place(&mut padded);
        assert_eq!(padded, "Engineering");

        let mut clean = "HR".to_string();
        trim_in_place(&mut clean);
        assert_eq!(clean, "HR");
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_and_on_birthday() {
        let dob = date(1987, 7, 7);
        assert_eq!(age_on(dob, date(2024, 7, 6)), 36);
        assert_eq!(age_on(dob, date(2024, 7, 7)), 37);
        assert_eq!(age_on(dob, date(2024, 12, 31)), 37);
    }

    #[test]
    fn test_age_leap_day_birth() {
        let dob = date(2000, 2, 29);
        assert_eq!(age_on(dob, date(2023, 2, 28)), 22);
        assert_eq!(age_on(dob, date(2023, 3, 1)), 23);
    }

    #[test]
    fn test_age_future_birth_date() {
        assert_eq!(age_on(date(2030, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2024-01-01T00:00:00Z
        assert!(now_millis() > 1_704_067_200_000);
    }
}
