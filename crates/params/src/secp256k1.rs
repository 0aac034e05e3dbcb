//! Constants for elliptic-curve operations over secp256k1

/// Size of a private key scalar in bytes
pub const EC_PRIVATE_KEY_SIZE: usize = 32;

/// Size of a public key in SEC1 compressed form (sign byte + x-coordinate)
pub const EC_PUBLIC_KEY_SIZE: usize = 33;

/// Size of a public key in SEC1 uncompressed form (0x04 + x + y)
pub const EC_PUBLIC_KEY_UNCOMPRESSED_SIZE: usize = 65;

/// Size of a pre-hashed message digest in bytes
pub const EC_MESSAGE_HASH_SIZE: usize = 32;

/// Size of a compact (r || s) signature in bytes
pub const EC_SIGNATURE_SIZE: usize = 64;

/// Operation flag selecting the ECDSA signature family
pub const EC_FLAG_ECDSA: u32 = 0x1;

/// Operation flag selecting the Schnorr signature family
pub const EC_FLAG_SCHNORR: u32 = 0x2;

/// All defined operation flag bits
pub const EC_FLAGS_ALL: u32 = EC_FLAG_ECDSA | EC_FLAG_SCHNORR;

/// The secp256k1 group order `n`, big-endian.
///
/// A private key scalar is valid only within `[1, n)`.
pub const SECP256K1_ORDER: [u8; EC_PRIVATE_KEY_SIZE] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
    0x41, 0x41,
];
