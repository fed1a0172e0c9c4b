/// Size in bytes of a single pubdata chunk. Every record posted on-chain is a whole number of
/// chunks.
pub const CHUNK_BYTES: usize = 14;

/// Smallest chain id a zkLink deployment may carry.
pub const MIN_CHAIN_ID: u8 = 1;

/// Largest chain id a zkLink deployment may carry.
pub const MAX_CHAIN_ID: u8 = 4;

/// Chain mask with one bit set for every supported chain.
pub const ALL_CHAINS: u8 = 15;

/// Byte offset of the chain id within records bound to a chain (right after the tag byte).
pub const CHAIN_ID_INDEX: usize = 1;

/// A committed block must not have a timestamp older than this many seconds (24 hours).
pub const COMMIT_TIMESTAMP_NOT_OLDER: u64 = 86_400;

/// Allowed drift in seconds between a committed block timestamp and the L1 clock (15 minutes).
pub const COMMIT_TIMESTAMP_APPROXIMATION_DELTA: u64 = 900;

/// All-zero 32-byte word.
pub const ZERO_BYTES32: [u8; 32] = [0; 32];

/// keccak-256 of the empty byte string.
pub const EMPTY_STRING_KECCAK: [u8; 32] = [
    0xc5, 0xd2, 0x46, 0x01, 0x86, 0xf7, 0x23, 0x3c, 0x92, 0x7e, 0x7d, 0xb2, 0xdc, 0xc7, 0x03, 0xc0,
    0xe5, 0x00, 0xb6, 0x53, 0xca, 0x82, 0x27, 0x3b, 0x7b, 0xfa, 0xd8, 0x04, 0x5d, 0x85, 0xa4, 0x70,
];

/// Root of the empty account tree the rollup starts from.
pub const GENESIS_ROOT: [u8; 32] = [
    0x20, 0x9d, 0x74, 0x2e, 0xcb, 0x06, 0x2d, 0xb4, 0x88, 0xd2, 0x0e, 0x7f, 0x89, 0x68, 0xa4, 0x06,
    0x73, 0xd7, 0x18, 0xb2, 0x49, 0x00, 0xed, 0xe8, 0x03, 0x5e, 0x05, 0xa7, 0x83, 0x51, 0xd9, 0x56,
];
