pub mod channel;
pub mod worker;
