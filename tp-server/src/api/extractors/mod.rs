pub mod caller_identity;
