use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::io;

#[cfg(test)]
use mockall::automock;

/// Source of the name the operating system reports for this machine.
#[cfg_attr(test, automock)]
pub trait HostInfo: Send + Sync {
    fn hostname(&self) -> io::Result<String>;
}

/// Wall-clock source.
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Named time-zone lookup. Errors carry the lookup failure description.
#[cfg_attr(test, automock)]
pub trait TimeZones: Send + Sync {
    fn locate(&self, name: &str) -> Result<Tz, String>;
}

/// [`HostInfo`] backed by the operating system.
///
/// Names that are not valid UTF-8 are converted lossily.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl HostInfo for SystemHost {
    fn hostname(&self) -> io::Result<String> {
        let name = hostname::get()?;
        Ok(name.to_string_lossy().into_owned())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// [`TimeZones`] backed by the IANA database compiled into `chrono-tz`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TzDatabase;

impl TimeZones for TzDatabase {
    fn locate(&self, name: &str) -> Result<Tz, String> {
        name.parse::<Tz>().map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, TimeZone};
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_system_host_reports_a_name() {
        let name = assert_ok!(SystemHost.hostname());
        assert!(!name.is_empty());
    }

    #[test]
    fn test_tz_database_locates_jakarta() {
        let tz = assert_ok!(TzDatabase.locate("Asia/Jakarta"));
        assert_eq!(tz, chrono_tz::Asia::Jakarta);

        // WIB has been UTC+7 without DST since 1964.
        let instant = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let offset = instant.with_timezone(&tz).offset().fix();
        assert_eq!(offset.local_minus_utc(), 7 * 3600);
    }

    #[test]
    fn test_tz_database_rejects_unknown_zone() {
        let message = assert_err!(TzDatabase.locate("Mars/Olympus_Mons"));
        assert!(!message.is_empty());
    }

    #[test]
    fn test_system_clock_tracks_utc_now() {
        let before = Utc::now();
        let now = SystemClock.now();
        let after = Utc::now();

        assert!(before <= now && now <= after);
    }
}
