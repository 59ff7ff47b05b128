//! Block representation helpers.

/// AES block of 16 bytes.
///
/// The cipher views it as a 4×4 column-major matrix: byte `4*c + r` holds
/// row `r` of column `c`.
pub type Block = [u8; 16];

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;
