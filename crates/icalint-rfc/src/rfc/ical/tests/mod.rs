//! Whole-document iCalendar tests.
