/// Use cases module containing application business logic orchestration
mod build_view;

pub use build_view::BuildViewUseCase;
