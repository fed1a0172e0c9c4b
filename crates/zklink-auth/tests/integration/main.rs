extern crate alloc;

mod accept;
mod change_pubkey;
