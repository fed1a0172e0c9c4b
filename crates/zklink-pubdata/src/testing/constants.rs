use crate::{Address, PubKeyHash};

/// The address every test owner defaults to: twenty `0x11` bytes.
pub const ADDRESS_ONES: Address = Address::new([0x11; 20]);

/// A second owner address distinct from [ADDRESS_ONES].
pub const ADDRESS_TWOS: Address = Address::new([0x22; 20]);

/// Placeholder address the layer-1 contract uses for the native token.
pub const ETH_ADDRESS: Address = Address::new([0xee; 20]);

pub const PUB_KEY_HASH: PubKeyHash = PubKeyHash::new([
    0x82, 0x3b, 0x74, 0x7d, 0x6b, 0xb6, 0x7d, 0x74, 0x7a, 0x2a, 0x40, 0x6c, 0x72, 0x59, 0x0f, 0x01,
    0x5c, 0x1c, 0x37, 0x3f,
]);

/// Token id of the native token in tests.
pub const ETH_TOKEN_ID: u16 = 1;
