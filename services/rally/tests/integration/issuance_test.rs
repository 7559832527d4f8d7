use rally::domain::payload;
use rally::usecase::issuance::IssueDailyCodesUseCase;

use crate::helpers::{MockDailyCodeRepo, MockSpotRepo, june_first, test_spot};

#[tokio::test]
async fn should_issue_codes_for_active_spots_only() {
    let spots = MockSpotRepo::new(vec![
        test_spot("Station North", true),
        test_spot("Harbor Gate", true),
        test_spot("Old Mill", false),
    ]);
    let codes = MockDailyCodeRepo::empty();
    let codes_handle = codes.codes_handle();

    let uc = IssueDailyCodesUseCase { spots, codes };
    uc.execute(june_first()).await.unwrap();

    let codes = codes_handle.lock().unwrap();
    assert_eq!(codes.len(), 2, "inactive spot must not receive a code");
    for code in codes.iter() {
        assert_eq!(code.valid_date, june_first());
        assert_eq!(code.payload, payload::encode(code.spot_id, june_first()));
    }
}

#[tokio::test]
async fn should_keep_single_code_per_spot_and_day_across_reruns() {
    let spots = MockSpotRepo::new(vec![test_spot("Station North", true)]);
    let codes = MockDailyCodeRepo::empty();
    let codes_handle = codes.codes_handle();

    let uc = IssueDailyCodesUseCase { spots, codes };
    uc.execute(june_first()).await.unwrap();
    uc.execute(june_first()).await.unwrap();
    uc.execute(june_first()).await.unwrap();

    assert_eq!(
        codes_handle.lock().unwrap().len(),
        1,
        "re-running issuance for the same day must not duplicate codes"
    );
}

#[tokio::test]
async fn should_issue_fresh_code_for_each_day() {
    let spots = MockSpotRepo::new(vec![test_spot("Station North", true)]);
    let codes = MockDailyCodeRepo::empty();
    let codes_handle = codes.codes_handle();

    let uc = IssueDailyCodesUseCase { spots, codes };
    uc.execute(june_first()).await.unwrap();
    uc.execute(june_first().succ_opt().unwrap()).await.unwrap();

    let codes = codes_handle.lock().unwrap();
    assert_eq!(codes.len(), 2);
    assert_ne!(
        codes[0].payload, codes[1].payload,
        "payloads must differ across days"
    );
}

#[tokio::test]
async fn should_issue_nothing_when_no_spots_exist() {
    let codes = MockDailyCodeRepo::empty();
    let codes_handle = codes.codes_handle();

    let uc = IssueDailyCodesUseCase {
        spots: MockSpotRepo::empty(),
        codes,
    };
    uc.execute(june_first()).await.unwrap();

    assert!(codes_handle.lock().unwrap().is_empty());
}
