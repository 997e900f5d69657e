//! Type aliases by bit-size.

use crate::Unsigned;

pub type U32 = Unsigned<1>;
pub type U64 = Unsigned<2>;
pub type U128 = Unsigned<4>;
pub type U256 = Unsigned<8>;
pub type U512 = Unsigned<16>;
pub type U1024 = Unsigned<32>;
pub type U2048 = Unsigned<64>;
pub type U4096 = Unsigned<128>;
