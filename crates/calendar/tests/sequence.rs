use sirocco_calendar::{HistoryWindow, ObsDate, date_sequence};

#[test]
fn full_leap_year() {
    let start = ObsDate::new(2000, 1, 1).unwrap();
    let dates = date_sequence(start, 366);
    assert_eq!(dates.len(), 366);
    assert_eq!(dates[59], ObsDate::new(2000, 2, 29).unwrap());
    assert_eq!(dates[365], ObsDate::new(2000, 12, 31).unwrap());
}

#[test]
fn full_common_year() {
    let start = ObsDate::new(2001, 1, 1).unwrap();
    let dates = date_sequence(start, 365);
    assert_eq!(dates[59], ObsDate::new(2001, 3, 1).unwrap());
    assert_eq!(dates[364], ObsDate::new(2001, 12, 31).unwrap());
}

#[test]
fn sequence_spans_default_window() {
    let window = HistoryWindow::default();
    let dates = date_sequence(window.start(), window.n_days());
    assert_eq!(dates.first().copied(), Some(window.start()));
    assert_eq!(dates.last().copied(), Some(window.end()));
}
