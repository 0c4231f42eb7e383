pub mod backends;
pub mod dispatch;
