use crate::common::*;

#[doc = "Standard Function of Datetime"]
fn convert_date_to_str<Tz>(time: DateTime<Tz>, tz: Tz, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(&tz).format(format).to_string()
}

#[doc = "Timestamp used to suffix the metric report files. ex) 20261105_093011"]
pub fn convert_date_to_str_file_stamp<Tz>(time: DateTime<Tz>, tz: Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    convert_date_to_str(time, tz, "%Y%m%d_%H%M%S")
}

pub fn convert_date_to_str_human<Tz>(time: DateTime<Tz>, tz: Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    convert_date_to_str(time, tz, "%Y.%m.%d %H:%M:%S")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn file_stamp_format_matches_report_suffix_shape() {
        let time: DateTime<Utc> = NaiveDate::from_ymd_opt(2026, 11, 5)
            .and_then(|d| d.and_hms_opt(9, 30, 11))
            .map(|dt| dt.and_utc())
            .unwrap();

        assert_eq!(convert_date_to_str_file_stamp(time, Utc), "20261105_093011");
    }
}
