pub mod address;
pub mod customer;
pub mod user;

pub use address::{Address, AddressCreateInput, AddressUpdateInput};
pub use customer::{Customer, CustomerCreateInput, CustomerUpdateInput};
pub use user::{AuthData, Login, User};
