pub mod capability;
pub mod controller;
pub mod debounce;
pub mod detect;
pub mod language;
pub mod recent;
pub mod session;
pub mod translator;
