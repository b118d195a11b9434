//! Modelo de asistencia
//!
//! Este módulo contiene el struct Attendance que mapea a la tabla attendance
//! y la derivación de horas trabajadas y estado.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de un registro de asistencia
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "attendance_status", rename_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Halfday,
    Leave,
}

/// Attendance - mapea a la tabla attendance.
/// Existe a lo sumo un registro por (user_id, date).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attendance {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: AttendanceStatus,
    pub working_hours: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Calcular horas trabajadas entre entrada y salida, redondeadas a 2 decimales.
/// Solo está definido cuando la salida es estrictamente posterior a la entrada.
pub fn compute_working_hours(
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
) -> Option<f64> {
    if check_out <= check_in {
        return None;
    }

    let hours = (check_out - check_in).num_seconds() as f64 / 3600.0;
    Some((hours * 100.0).round() / 100.0)
}

/// Derivar el estado a partir de las horas trabajadas:
/// >= 8h presente, >= 4h media jornada, menos de 4h tarde.
pub fn derive_status(working_hours: f64) -> AttendanceStatus {
    if working_hours >= 8.0 {
        AttendanceStatus::Present
    } else if working_hours >= 4.0 {
        AttendanceStatus::Halfday
    } else {
        AttendanceStatus::Late
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 11, h, m, 0).unwrap()
    }

    #[test]
    fn test_nine_hours_is_present() {
        let hours = compute_working_hours(ts(9, 0), ts(18, 0)).unwrap();
        assert_eq!(hours, 9.0);
        assert_eq!(derive_status(hours), AttendanceStatus::Present);
    }

    #[test]
    fn test_five_hours_is_halfday() {
        let hours = compute_working_hours(ts(9, 0), ts(14, 0)).unwrap();
        assert_eq!(hours, 5.0);
        assert_eq!(derive_status(hours), AttendanceStatus::Halfday);
    }

    #[test]
    fn test_two_hours_is_late() {
        let hours = compute_working_hours(ts(9, 0), ts(11, 0)).unwrap();
        assert_eq!(hours, 2.0);
        assert_eq!(derive_status(hours), AttendanceStatus::Late);
    }

    #[test]
    fn test_exactly_eight_hours_is_present() {
        let hours = compute_working_hours(ts(9, 0), ts(17, 0)).unwrap();
        assert_eq!(derive_status(hours), AttendanceStatus::Present);
    }

    #[test]
    fn test_exactly_four_hours_is_halfday() {
        let hours = compute_working_hours(ts(9, 0), ts(13, 0)).unwrap();
        assert_eq!(derive_status(hours), AttendanceStatus::Halfday);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // 7h 50m = 7.8333... -> 7.83
        let hours = compute_working_hours(ts(9, 0), ts(16, 50)).unwrap();
        assert_eq!(hours, 7.83);
    }

    #[test]
    fn test_undefined_when_check_out_not_after_check_in() {
        assert_eq!(compute_working_hours(ts(9, 0), ts(9, 0)), None);
        assert_eq!(compute_working_hours(ts(9, 0), ts(8, 0)), None);
    }
}
