pub mod json_event_log;
