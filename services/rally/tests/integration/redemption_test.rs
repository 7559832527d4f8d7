use std::sync::Arc;

use uuid::Uuid;

use rally::domain::payload;
use rally::error::RallyServiceError;
use rally::usecase::issuance::IssueDailyCodesUseCase;
use rally::usecase::progress::GetProgressUseCase;
use rally::usecase::redemption::RedeemCodeUseCase;

use crate::helpers::{MockDailyCodeRepo, MockSpotRepo, MockStampRepo, june_first, test_spot};

/// Full walk of the happy path and its rejections: issue for one active
/// spot, first scan succeeds, same user's rescan is rejected, a second
/// user collects independently.
#[tokio::test]
async fn should_walk_issue_and_redeem_scenario() {
    let spot = test_spot("Station North", true);
    let spots = MockSpotRepo::new(vec![spot.clone()]);
    let codes = MockDailyCodeRepo::empty();
    let codes_handle = codes.codes_handle();
    let stamps = MockStampRepo::new(&spots);
    let stamps_handle = stamps.stamps_handle();

    // Admin issues today's codes.
    let issue = IssueDailyCodesUseCase {
        spots: MockSpotRepo {
            spots: Arc::clone(&spots.spots),
        },
        codes,
    };
    issue.execute(june_first()).await.unwrap();

    let issued_payload = {
        let codes = codes_handle.lock().unwrap();
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[0].payload, payload::encode(spot.id, june_first()));
        codes[0].payload.clone()
    };

    let redeem = RedeemCodeUseCase {
        codes: MockDailyCodeRepo {
            codes: Arc::clone(&codes_handle),
        },
        stamps,
        spots,
    };

    // First user scans: success.
    let user_one = Uuid::new_v4();
    let out = redeem
        .execute(&issued_payload, user_one, june_first())
        .await
        .unwrap();
    assert_eq!(out.spot_name, "Station North");
    assert_eq!(stamps_handle.lock().unwrap().len(), 1);

    // Identical rescan by the same user: rejected, no extra stamp.
    let rescan = redeem.execute(&issued_payload, user_one, june_first()).await;
    assert!(matches!(rescan, Err(RallyServiceError::AlreadyCollected)));
    assert_eq!(stamps_handle.lock().unwrap().len(), 1);

    // A different user scans the same code: independent collection.
    let user_two = Uuid::new_v4();
    redeem
        .execute(&issued_payload, user_two, june_first())
        .await
        .unwrap();
    assert_eq!(stamps_handle.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn should_expire_yesterdays_payload() {
    let spot = test_spot("Station North", true);
    let spots = MockSpotRepo::new(vec![spot.clone()]);
    let codes = MockDailyCodeRepo::empty();
    let codes_handle = codes.codes_handle();

    let issue = IssueDailyCodesUseCase {
        spots: MockSpotRepo {
            spots: Arc::clone(&spots.spots),
        },
        codes,
    };
    issue.execute(june_first()).await.unwrap();
    let issued_payload = codes_handle.lock().unwrap()[0].payload.clone();

    let stamps = MockStampRepo::new(&spots);
    let redeem = RedeemCodeUseCase {
        codes: MockDailyCodeRepo {
            codes: Arc::clone(&codes_handle),
        },
        stamps,
        spots,
    };

    // Scanned the next day: expired even though the record exists.
    let june_second = june_first().succ_opt().unwrap();
    let result = redeem
        .execute(&issued_payload, Uuid::new_v4(), june_second)
        .await;
    assert!(matches!(result, Err(RallyServiceError::CodeExpired)));
}

#[tokio::test]
async fn should_reject_unissued_payload_as_not_found() {
    let spot = test_spot("Station North", true);
    let spots = MockSpotRepo::new(vec![spot.clone()]);
    let stamps = MockStampRepo::new(&spots);

    let redeem = RedeemCodeUseCase {
        codes: MockDailyCodeRepo::empty(),
        stamps,
        spots,
    };

    // Well-formed payload for a real spot, but issuance never ran.
    let forged = payload::encode(spot.id, june_first());
    let result = redeem.execute(&forged, Uuid::new_v4(), june_first()).await;
    assert!(matches!(result, Err(RallyServiceError::CodeNotFound)));
}

#[tokio::test]
async fn should_track_progress_across_collections() {
    let spot_a = test_spot("Station North", true);
    let spot_b = test_spot("Harbor Gate", true);
    let spots = MockSpotRepo::new(vec![spot_a.clone(), spot_b.clone()]);
    let spots_arc = Arc::clone(&spots.spots);
    let codes = MockDailyCodeRepo::empty();
    let codes_handle = codes.codes_handle();
    let stamps = MockStampRepo::new(&spots);
    let stamps_handle = stamps.stamps_handle();

    let issue = IssueDailyCodesUseCase {
        spots: MockSpotRepo {
            spots: Arc::clone(&spots_arc),
        },
        codes,
    };
    issue.execute(june_first()).await.unwrap();

    let redeem = RedeemCodeUseCase {
        codes: MockDailyCodeRepo {
            codes: Arc::clone(&codes_handle),
        },
        stamps,
        spots,
    };

    let user = Uuid::new_v4();
    redeem
        .execute(&payload::encode(spot_a.id, june_first()), user, june_first())
        .await
        .unwrap();

    let progress_uc = GetProgressUseCase {
        stamps: MockStampRepo {
            stamps: Arc::clone(&stamps_handle),
            spots: Arc::clone(&spots_arc),
        },
        spots: MockSpotRepo {
            spots: Arc::clone(&spots_arc),
        },
    };

    let progress = progress_uc.execute(user).await.unwrap();
    assert_eq!(progress.collected_count(), 1);
    assert!(!progress.is_complete());

    redeem
        .execute(&payload::encode(spot_b.id, june_first()), user, june_first())
        .await
        .unwrap();

    let progress = progress_uc.execute(user).await.unwrap();
    assert_eq!(progress.collected_count(), 2);
    assert_eq!(progress.total_active_spots, 2);
    assert!(progress.is_complete());
}
