use strum::IntoEnumIterator;

/// Comma-separated accepted values for a strum enum, quoted in the parse
/// errors for `Property`, `BookingMode`, `DayOfWeek`, and config keys.
trait EnumValidCsv: IntoEnumIterator + AsRef<str> + Sized {
    fn valid_csv() -> String {
        Self::iter()
            .map(|v| v.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
impl<T> EnumValidCsv for T where T: IntoEnumIterator + AsRef<str> + Sized {}
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str> + Sized,
{
    <T as EnumValidCsv>::valid_csv()
}
