pub mod daily_code;
pub mod spot;
pub mod stamp;
