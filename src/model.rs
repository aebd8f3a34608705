pub use self::{balance::*, hours::*, summary::*, transaction::*};

pub(crate) mod balance;
pub(crate) mod hours;
pub(crate) mod summary;
pub(crate) mod transaction;
