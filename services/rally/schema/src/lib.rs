pub mod daily_codes;
pub mod stamp_spots;
pub mod user_stamps;
