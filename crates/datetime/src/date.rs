//! The normalized in-memory date type.

use chrono::{
    DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
    Weekday,
};

/// A normalized date: local wall-clock time for every front-end shape,
/// a UTC instant for the backend path.
///
/// Values are immutable; every parse produces an independent copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarDate {
    /// Wall-clock time in the system local zone, no offset attached.
    Local(NaiveDateTime),
    /// An instant on the UTC timeline (backend timestamps only).
    Utc(DateTime<Utc>),
}

impl CalendarDate {
    /// Wraps a local wall-clock datetime.
    pub fn local(datetime: NaiveDateTime) -> Self {
        Self::Local(datetime)
    }

    /// Wraps a UTC instant.
    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self::Utc(instant)
    }

    /// The stored fields exactly as constructed: local wall-clock fields
    /// for [`Local`](Self::Local), UTC fields for [`Utc`](Self::Utc).
    pub fn naive(self) -> NaiveDateTime {
        match self {
            Self::Local(datetime) => datetime,
            Self::Utc(instant) => instant.naive_utc(),
        }
    }

    /// The same date with the time of day zeroed to midnight.
    pub fn at_midnight(self) -> Self {
        match self {
            Self::Local(datetime) => Self::Local(datetime.date().and_time(NaiveTime::MIN)),
            Self::Utc(instant) => Self::Utc(
                instant
                    .date_naive()
                    .and_time(NaiveTime::MIN)
                    .and_utc(),
            ),
        }
    }

    /// Wall-clock fields for display in the system local zone.
    ///
    /// Local values are returned as stored; UTC instants are converted
    /// through the system local zone first.
    pub fn local_naive(self) -> NaiveDateTime {
        match self {
            Self::Local(datetime) => datetime,
            Self::Utc(instant) => instant.with_timezone(&Local).naive_local(),
        }
    }

    /// The instant on the UTC timeline.
    ///
    /// Local values are resolved through the system local zone. A
    /// wall-clock time skipped by a DST transition has no local
    /// representation; such values fall back to reading the naive fields
    /// as UTC so the conversion stays total.
    pub fn to_utc(self) -> DateTime<Utc> {
        match self {
            Self::Utc(instant) => instant,
            Self::Local(datetime) => match Local.from_local_datetime(&datetime).earliest() {
                Some(resolved) => resolved.with_timezone(&Utc),
                None => datetime.and_utc(),
            },
        }
    }

    /// `YYYY-MM-DD` of the UTC representation.
    ///
    /// Converting to UTC first means a local midnight in a zone ahead of
    /// UTC renders as the previous day; callers needing the wall-clock
    /// date should read [`naive`](Self::naive) instead.
    pub fn iso_date(self) -> String {
        self.to_utc().format("%Y-%m-%d").to_string()
    }

    /// Year of the stored fields.
    pub fn year(self) -> i32 {
        self.naive().year()
    }

    /// Month of the stored fields (1..=12).
    pub fn month(self) -> u32 {
        self.naive().month()
    }

    /// Day of the stored fields (1..=31).
    pub fn day(self) -> u32 {
        self.naive().day()
    }

    /// Hour of the stored fields (0..=23).
    pub fn hour(self) -> u32 {
        self.naive().hour()
    }

    /// Minute of the stored fields (0..=59).
    pub fn minute(self) -> u32 {
        self.naive().minute()
    }

    /// Second of the stored fields (0..=59).
    pub fn second(self) -> u32 {
        self.naive().second()
    }

    /// Weekday of the stored fields.
    pub fn weekday(self) -> Weekday {
        self.naive().weekday()
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::Local(datetime)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::Local(date.and_time(NaiveTime::MIN))
    }
}

impl From<DateTime<Utc>> for CalendarDate {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Utc(instant)
    }
}
