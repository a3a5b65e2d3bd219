//! Domain layer: pure merge logic and run configuration. No I/O here.

pub mod abi_book;
pub mod address_book;
pub mod config;

pub use abi_book::AbiBook;
pub use address_book::AddressBook;
pub use config::SyncConfig;
