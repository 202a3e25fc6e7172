//! Process Graph UseCase

pub mod graph_usecase;

pub use graph_usecase::{ProcessGraphUseCase, ProcessGraphUseCaseImpl};
