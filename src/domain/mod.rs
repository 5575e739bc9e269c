// Domain layer - data model and pure transforms
pub mod chart;
pub mod interval;
pub mod kpi;
pub mod table;
