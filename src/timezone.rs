use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::{Error, ipc::Year};

pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// The current calendar year in `canonical_timezone`, e.g. "America/Guayaquil".
pub fn current_year(canonical_timezone: &str) -> Result<Year, Error> {
    let offset = get_local_offset(canonical_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", canonical_timezone);
        Error::InvalidTimezone(canonical_timezone.to_owned())
    })?;

    Ok(OffsetDateTime::now_utc().to_offset(offset).year())
}

#[cfg(test)]
mod tests {
    use time::OffsetDateTime;

    use crate::Error;

    use super::{current_year, get_local_offset};

    #[test]
    fn knows_canonical_timezones() {
        assert!(get_local_offset("America/Guayaquil").is_some());
        assert!(get_local_offset("Etc/UTC").is_some());
    }

    #[test]
    fn rejects_unknown_timezone() {
        assert_eq!(
            current_year("Mars/Olympus_Mons"),
            Err(Error::InvalidTimezone("Mars/Olympus_Mons".to_owned()))
        );
    }

    #[test]
    fn current_year_in_utc() {
        let year = current_year("Etc/UTC").unwrap();

        // Allow for the test running across midnight on new year's eve.
        let now = OffsetDateTime::now_utc().year();
        assert!(year == now || year == now - 1);
    }
}
