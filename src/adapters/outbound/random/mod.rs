/// Randomised adapters for simulated data
mod random_event_generator;

pub use random_event_generator::RandomEventGenerator;
