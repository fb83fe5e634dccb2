pub mod counter;
pub mod logging;
pub mod reactive;
pub mod ui;
