mod helpers;
mod issuance_test;
mod redemption_test;
