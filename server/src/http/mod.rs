pub mod calculate;
pub mod form;
pub mod health;
pub mod routes;
