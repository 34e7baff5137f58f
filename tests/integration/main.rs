//! Integration tests driving the HTTP router against in-memory timetable data

mod analytics_tests;
mod api_tests;
