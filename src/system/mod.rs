pub mod bus;
pub mod pool;
