pub mod common;
pub mod d100_product;
pub mod d101_sales;
pub mod d102_insights;
