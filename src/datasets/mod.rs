/// The cyberbullying tweets dataset
pub mod cyberbullying;
