/// Room document storage and retrieval operations.
pub mod room_store;
/// Storage abstraction layer for backend errors.
pub mod storage;
