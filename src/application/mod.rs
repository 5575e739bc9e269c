// Application layer - use cases and ports
pub mod descriptor;
pub mod gadget_service;
pub mod kpi_repository;
pub mod validation;
