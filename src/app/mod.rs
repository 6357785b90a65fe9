pub mod wiring;
