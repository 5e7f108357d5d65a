//! Game orchestration: drives the sequence engine with a direction source
//! and reports every transition to a presentation observer.

pub mod observer;
pub mod orchestrator;

pub use observer::{
    notification_queue, GameNotification, GameObserver, NOTIFICATION_QUEUE_CAPACITY,
};
pub use orchestrator::MemoryGame;
