pub mod chain_pass;
