use serde::Serialize;
use std::io;

use crate::hos::{
    Error,
    days::Day,
    event::DutyStatus,
};

#[derive(Debug, Serialize)]
struct LogRow<'a> {
    day: usize,
    date: String,
    t0: String,
    t1: String,
    status: DutyStatus,
    label: &'a str,
}

/// Writes the log sheet, one row per day segment, with a header row.
pub fn write_csv<W: io::Write>(days: &[Day], writer: W) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for day in days {
        let date = day.date.to_string();
        for segment in &day.segments {
            writer.serialize(LogRow {
                day: day.index,
                date: date.clone(),
                t0: segment.t0.to_hm_string(),
                t1: segment.t1.to_hm_string(),
                status: segment.status,
                label: segment.label,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}
