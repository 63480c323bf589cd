pub mod aggregate;

pub use aggregate::{Edificio, EdificioDto};
