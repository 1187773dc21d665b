pub mod alphabet;
pub mod big_uint;

pub use alphabet::Alphabet;
pub use big_uint::BigUint;
