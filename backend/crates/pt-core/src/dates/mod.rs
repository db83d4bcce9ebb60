pub mod date_metrics;
pub mod deadline_urgency;
