//! Shared DTOs between the resume uploader widget, its hosting shell and the
//! remote analyzer service.

pub mod shared;
pub mod usecases;
