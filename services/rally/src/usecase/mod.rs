pub mod issuance;
pub mod progress;
pub mod redemption;
pub mod spot;
