pub mod help;
pub mod rpc;
