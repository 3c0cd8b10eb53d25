// Services layer for business logic
// Services own business logic and validation, calling the store directly

pub mod returns;

pub use returns::ReturnService;
