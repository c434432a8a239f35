pub mod polynomial;

pub use polynomial::Polynomial;
