//! DTOs compartidos entre controladores

pub mod common_dto;

pub use common_dto::ApiResponse;
