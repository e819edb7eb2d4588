pub mod openapi;
pub mod round_edit;
pub mod round_state;
pub mod solve;
