use chrono::NaiveDateTime;

/// A single table cell.
///
/// Loaded tables contain only `Text` and `Missing`; `Number` and `Date`
/// are produced by the type conversions in the transform crate.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The cell's raw string form, or `None` for a missing cell.
    ///
    /// Numbers render without trailing zeros, dates in ISO 8601. This is
    /// the form the numeric conversion rule operates on; the output writer
    /// applies its own column-level formatting instead.
    pub fn string_form(&self) -> Option<String> {
        match self {
            Self::Text(value) => Some(value.clone()),
            Self::Number(value) => {
                let rendered = format!("{value}");
                // Only trim fractional zeros; "10" must not become "1".
                if rendered.contains('.') {
                    Some(
                        rendered
                            .trim_end_matches('0')
                            .trim_end_matches('.')
                            .to_string(),
                    )
                } else {
                    Some(rendered)
                }
            }
            Self::Date(value) => Some(render_datetime(value)),
            Self::Missing => None,
        }
    }
}

/// Renders a datetime as `YYYY-MM-DD`, appending the time only when one
/// is present.
pub fn render_datetime(value: &NaiveDateTime) -> String {
    if value.time() == chrono::NaiveTime::MIN {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn string_form_trims_number_zeros() {
        assert_eq!(
            CellValue::Number(1234.50).string_form(),
            Some("1234.5".to_string())
        );
        assert_eq!(CellValue::Number(10.0).string_form(), Some("10".to_string()));
    }

    #[test]
    fn string_form_missing_is_none() {
        assert_eq!(CellValue::Missing.string_form(), None);
    }

    #[test]
    fn date_without_time_renders_date_only() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            CellValue::Date(date).string_form(),
            Some("2023-01-15".to_string())
        );
    }

    #[test]
    fn date_with_time_renders_full() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(
            CellValue::Date(date).string_form(),
            Some("2023-01-15 10:30:00".to_string())
        );
    }
}
