pub mod notify;
pub mod publish;
