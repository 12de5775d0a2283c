pub mod admin_dto;
pub mod auth_dto;
pub mod candidate_dto;
pub mod dashboard_dto;
