use sha3::{Digest, Keccak256};

/// Returns the keccak-256 hash of `data`.
pub fn keccak256(data: impl AsRef<[u8]>) -> [u8; 32] {
    Keccak256::digest(data.as_ref()).into()
}

/// Returns the keccak-256 hash of the concatenation of `parts`.
pub fn keccak256_concat(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Returns the low 20 bytes of the keccak-256 hash of `data`.
///
/// This is how 20-byte pubkey hashes and layer-1 addresses are derived from longer preimages.
pub fn hash_bytes_to_bytes20(data: impl AsRef<[u8]>) -> [u8; 20] {
    let hash = keccak256(data);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash[12..]);
    bytes
}
