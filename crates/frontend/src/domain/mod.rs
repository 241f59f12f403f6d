pub mod a001_customer;
pub mod a002_product;
pub mod a003_airbnb_listing;
pub mod a004_transaction;
