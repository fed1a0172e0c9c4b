use super::{OpType, PubdataOp, impl_pubdata_serde};
use crate::{
    AccountId, Address, PackedAmount, PackedFee, SubAccountId, TokenId,
    codec::{PubdataReader, PubdataWriter},
    utils::serde::{ByteReader, ByteWriter, DeserializationError, Serializable},
};

/// Number of zero bytes closing a [Transfer] record so that it spans three chunks.
const TRANSFER_TAIL_BYTES: usize = 14;

// TRANSFER
// ================================================================================================

/// Moves tokens between two existing rollup accounts.
///
/// The record always ends with 14 zero bytes so that it has the same chunk count as
/// [TransferToNew].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub from_account_id: AccountId,
    pub from_sub_account_id: SubAccountId,
    pub token_id: TokenId,
    pub amount: PackedAmount,
    pub to_account_id: AccountId,
    pub to_sub_account_id: SubAccountId,
    pub fee: PackedFee,
}

impl PubdataOp for Transfer {
    const OP_TYPE: OpType = OpType::Transfer;
    const SIZE: usize = 34;

    fn write_fields<W: ByteWriter>(&self, target: &mut W) {
        self.from_account_id.write_into(target);
        self.from_sub_account_id.write_into(target);
        self.token_id.write_into(target);
        self.amount.write_into(target);
        self.to_account_id.write_into(target);
        self.to_sub_account_id.write_into(target);
        self.fee.write_into(target);
        target.write_zeros(TRANSFER_TAIL_BYTES);
    }

    fn read_fields<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let transfer = Self {
            from_account_id: source.read_named("from_account_id")?,
            from_sub_account_id: source.read_named("from_sub_account_id")?,
            token_id: source.read_named("token_id")?,
            amount: source.read_named("amount")?,
            to_account_id: source.read_named("to_account_id")?,
            to_sub_account_id: source.read_named("to_sub_account_id")?,
            fee: source.read_named("fee")?,
        };
        source.read_zeros(TRANSFER_TAIL_BYTES, "tail")?;
        Ok(transfer)
    }
}

impl_pubdata_serde!(Transfer);

// TRANSFER TO NEW
// ================================================================================================

/// Moves tokens from a rollup account into an account created for the `to` address by this
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferToNew {
    pub from_account_id: AccountId,
    pub from_sub_account_id: SubAccountId,
    pub token_id: TokenId,
    pub amount: PackedAmount,
    pub to_account_id: AccountId,
    pub to_sub_account_id: SubAccountId,
    pub to: Address,
    pub fee: PackedFee,
}

impl PubdataOp for TransferToNew {
    const OP_TYPE: OpType = OpType::TransferToNew;
    const SIZE: usize = 40;

    fn write_fields<W: ByteWriter>(&self, target: &mut W) {
        self.from_account_id.write_into(target);
        self.from_sub_account_id.write_into(target);
        self.token_id.write_into(target);
        self.amount.write_into(target);
        self.to_account_id.write_into(target);
        self.to_sub_account_id.write_into(target);
        self.to.write_into(target);
        self.fee.write_into(target);
    }

    fn read_fields<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        Ok(Self {
            from_account_id: source.read_named("from_account_id")?,
            from_sub_account_id: source.read_named("from_sub_account_id")?,
            token_id: source.read_named("token_id")?,
            amount: source.read_named("amount")?,
            to_account_id: source.read_named("to_account_id")?,
            to_sub_account_id: source.read_named("to_sub_account_id")?,
            to: source.read_named("to")?,
            fee: source.read_named("fee")?,
        })
    }
}

impl_pubdata_serde!(TransferToNew);

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{PubdataError, testing::constants::ADDRESS_ONES};

    fn transfer(amount: u64, fee: u16) -> Transfer {
        Transfer {
            from_account_id: AccountId::new(1),
            from_sub_account_id: SubAccountId::new(0),
            token_id: TokenId::new(2),
            amount: PackedAmount::new(amount).unwrap(),
            to_account_id: AccountId::new(3),
            to_sub_account_id: SubAccountId::new(1),
            fee: PackedFee::new(fee),
        }
    }

    #[rstest::rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(PackedAmount::MAX, u16::MAX)]
    fn transfer_length_is_constant(#[case] amount: u64, #[case] fee: u16) {
        let pubdata = transfer(amount, fee).to_pubdata();
        assert_eq!(pubdata.len(), 34);
        assert_eq!(&pubdata[20..], &[0; 14]);
        assert_eq!(Transfer::CHUNKS, 3);
    }

    #[test]
    fn transfer_layout() {
        let pubdata = transfer(0x01_0203_0405, 0x0607).to_pubdata();
        assert_eq!(
            &pubdata[..20],
            &[0x04, 0, 0, 0, 1, 0, 0, 2, 1, 2, 3, 4, 5, 0, 0, 0, 3, 1, 6, 7]
        );
    }

    #[test]
    fn transfer_tail_must_be_zero() {
        let mut pubdata = transfer(5, 5).to_pubdata();
        pubdata[30] = 1;
        assert_matches!(Transfer::from_pubdata(&pubdata), Err(PubdataError::MalformedField(_)));
    }

    #[test]
    fn transfer_to_new_layout() {
        let transfer_to_new = TransferToNew {
            from_account_id: AccountId::new(1),
            from_sub_account_id: SubAccountId::new(0),
            token_id: TokenId::new(2),
            amount: PackedAmount::new(3).unwrap(),
            to_account_id: AccountId::new(4),
            to_sub_account_id: SubAccountId::new(5),
            to: ADDRESS_ONES,
            fee: PackedFee::new(6),
        };
        let pubdata = transfer_to_new.to_pubdata();

        assert_eq!(pubdata.len(), TransferToNew::SIZE);
        assert_eq!(&pubdata[..18], &[0x02, 0, 0, 0, 1, 0, 0, 2, 0, 0, 0, 0, 3, 0, 0, 0, 4, 5]);
        assert_eq!(&pubdata[18..38], &[0x11; 20]);
        assert_eq!(&pubdata[38..], &[0, 6]);
        assert_eq!(TransferToNew::CHUNKS, Transfer::CHUNKS);
    }
}
