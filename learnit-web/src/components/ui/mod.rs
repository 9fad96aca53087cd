pub mod category_filter;
pub mod otp_input;
pub mod product_card;
